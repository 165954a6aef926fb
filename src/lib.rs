//! Interpretador - Biblioteca de interpretación de expresiones aritméticas en portugués
//!
//! Convierte frases como "um mais cinco menos dois" en una expresión canónica
//! ("1 + 5 - 2"), la evalúa y formatea el resultado en pt-BR.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod evaluator;
pub mod grammar;
pub mod interpreter;
pub mod rephraser;
pub mod spelling;
pub mod translator;

pub use config::Config;
pub use error::{InterpretError, Result};
pub use evaluator::{Evaluation, Value};
pub use interpreter::{interpret, Interpreter, InterpreterOptions};
pub use rephraser::Rephraser;
pub use translator::ExpressionTranslator;
