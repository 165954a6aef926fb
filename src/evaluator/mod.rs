//! Evaluador restringido
//!
//! Extrae del texto candidato la primera subcadena aritmética, la valida,
//! la evalúa y formatea el resultado en pt-BR.

pub mod format;
pub mod parser;
pub mod value;

use std::fmt;

use log::debug;

use crate::error::{InterpretError, Result};

pub use format::format_pt_br;
pub use parser::evaluate;
pub use value::Value;

/// Caracteres permitidos en una expresión canónica
pub fn is_expression_char(ch: char) -> bool {
    ch.is_ascii_digit()
        || ch.is_whitespace()
        || matches!(ch, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Primera subcadena maximal formada solo por caracteres de expresión.
pub fn extract_candidate(text: &str) -> Option<&str> {
    let start = text.find(is_expression_char)?;
    let rest = &text[start..];
    let end = rest
        .char_indices()
        .find(|&(_, ch)| !is_expression_char(ch))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Extrae y recorta la expresión; el error lleva el texto original completo.
pub fn validate(text: &str) -> Result<&str> {
    let trimmed = extract_candidate(text).map(str::trim).unwrap_or("");
    if trimmed.is_empty() || !trimmed.chars().all(is_expression_char) {
        return Err(InterpretError::InvalidExpression(text.to_string()));
    }
    Ok(trimmed)
}

/// Resultado de una evaluación correcta
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub expression: String,
    pub value: Value,
}

impl Evaluation {
    pub fn formatted_value(&self) -> String {
        format_pt_br(self.value)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.formatted_value())
    }
}

/// Valida, evalúa y empaqueta un texto candidato (traducido o de un modelo).
pub fn evaluate_candidate(candidate: &str) -> Result<Evaluation> {
    let expression = validate(candidate)?;
    debug!("expresión a evaluar: {}", expression);
    let value = evaluate(expression)?;
    Ok(Evaluation {
        expression: expression.to_string(),
        value,
    })
}
