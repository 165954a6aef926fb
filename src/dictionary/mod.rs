//! Módulo de diccionario
//!
//! Vocabulario fijo de palabras numéricas y operadores en portugués.

pub mod vocabulary;

pub use vocabulary::{Vocabulary, WordClass, CONJUNCTION};
