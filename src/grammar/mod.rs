//! Motor gramatical
//!
//! Tokenización, plegado de números por extenso y normalización de operadores.

pub mod numbers;
pub mod operators;
pub mod rules;
pub mod tokenizer;

pub use numbers::NumberWordParser;
pub use operators::OperatorNormalizer;
pub use rules::{NormalizationRule, Rewrite, RuleEngine, RuleId};
pub use tokenizer::{Token, TokenType, Tokenizer};
