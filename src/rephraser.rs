//! Servicio externo opcional de generación de texto
//!
//! El intérprete puede pedir a un modelo que reformule la expresión. La
//! salida se trata como texto libre no confiable y pasa por la misma
//! extracción y validación que cualquier otro candidato.

use crate::error::Result;

/// Plantilla fija de instrucción; `{text}` se sustituye por la expresión.
pub const PROMPT_TEMPLATE: &str =
    "Convert this sentence into a valid mathematical expression: {text}";

pub fn build_prompt(text: &str) -> String {
    PROMPT_TEMPLATE.replace("{text}", text)
}

/// Backend de generación de texto
pub trait Rephraser: Send + Sync {
    /// Genera texto libre a partir del prompt completo
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Nombre del backend para los logs
    fn name(&self) -> &'static str;
}

impl<F> Rephraser for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn generate(&self, prompt: &str) -> Result<String> {
        self(prompt)
    }

    fn name(&self) -> &'static str {
        "closure"
    }
}
