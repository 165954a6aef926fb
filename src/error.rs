//! Errores del intérprete

/// Alias de resultado con [`InterpretError`].
pub type Result<T> = std::result::Result<T, InterpretError>;

/// Errores que puede producir una llamada a `interpret`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpretError {
    /// El candidato está vacío o contiene caracteres fuera del conjunto aritmético.
    /// Lleva el texto completo original.
    #[error("Invalid expression generated: {0}")]
    InvalidExpression(String),

    #[error("division by zero")]
    DivisionByZero,

    /// Texto sintácticamente inválido (paréntesis desbalanceados, operador colgante...)
    #[error("malformed expression: {0}")]
    MalformedExpression(String),

    /// El resultado no es un número finito.
    #[error("numeric result out of range")]
    NumericOverflow,

    /// Fallo del servicio externo de generación de texto.
    #[error("rephraser failed: {0}")]
    Rephraser(String),
}

impl InterpretError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        InterpretError::MalformedExpression(msg.into())
    }

    pub fn rephraser(msg: impl Into<String>) -> Self {
        InterpretError::Rephraser(msg.into())
    }

    /// Mensaje para el usuario final.
    ///
    /// `InvalidExpression` se reporta tal cual; el resto se envuelve en
    /// `An error occurred: ...`.
    pub fn user_message(&self) -> String {
        match self {
            InterpretError::InvalidExpression(_) => self.to_string(),
            other => format!("An error occurred: {}", other),
        }
    }
}
