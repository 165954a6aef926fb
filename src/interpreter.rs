//! Intérprete: frase en portugués → "expresión = resultado"

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::error::Result;
use crate::evaluator::{evaluate_candidate, Evaluation};
use crate::rephraser::{build_prompt, Rephraser};
use crate::spelling::DEFAULT_CUTOFF;
use crate::translator::{needs_translation, ExpressionTranslator};

static DEFAULT_INTERPRETER: Lazy<Interpreter> = Lazy::new(Interpreter::new);

/// Opciones del intérprete
#[derive(Debug, Clone, PartialEq)]
pub struct InterpreterOptions {
    /// Traducir frases sin dígitos ni operadores simbólicos
    pub translate: bool,
    /// Similitud mínima del corrector léxico
    pub cutoff: f64,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            translate: true,
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

/// Intérprete de expresiones. Sin estado mutable: puede compartirse entre hilos.
pub struct Interpreter {
    translator: ExpressionTranslator,
    rephraser: Option<Box<dyn Rephraser>>,
    options: InterpreterOptions,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_options(InterpreterOptions::default())
    }

    pub fn with_options(options: InterpreterOptions) -> Self {
        Self {
            translator: ExpressionTranslator::new().with_cutoff(options.cutoff),
            rephraser: None,
            options,
        }
    }

    /// Instala un servicio externo que reformula la expresión antes de evaluarla
    pub fn with_rephraser(mut self, rephraser: Box<dyn Rephraser>) -> Self {
        self.rephraser = Some(rephraser);
        self
    }

    /// Expresión canónica, o la frase original si ya parece una expresión
    pub fn prepare(&self, phrase: &str) -> String {
        if self.options.translate && needs_translation(phrase) {
            self.translator.translate(phrase)
        } else {
            phrase.to_string()
        }
    }

    /// Texto candidato para el evaluador
    fn candidate(&self, prepared: String) -> Result<String> {
        let Some(rephraser) = self.rephraser.as_deref() else {
            return Ok(prepared);
        };
        let prompt = build_prompt(&prepared);
        debug!("prompt enviado a {}: {}", rephraser.name(), prompt);
        let output = rephraser.generate(&prompt)?;
        debug!("salida bruta de {}: {}", rephraser.name(), output);
        Ok(output.trim().to_string())
    }

    /// Interpreta una frase y devuelve la evaluación estructurada
    pub fn evaluate(&self, phrase: &str) -> Result<Evaluation> {
        let prepared = self.prepare(phrase);
        let candidate = self.candidate(prepared)?;
        evaluate_candidate(&candidate)
    }

    /// Interpreta una frase y devuelve el texto para el usuario:
    /// `"<expresión> = <resultado>"` o un mensaje de error.
    pub fn interpret(&self, phrase: &str) -> String {
        match self.evaluate(phrase) {
            Ok(evaluation) => evaluation.to_string(),
            Err(err) => {
                warn!("no se pudo interpretar '{}': {}", phrase, err);
                err.user_message()
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpreta con las opciones por defecto y sin servicio externo.
pub fn interpret(phrase: &str) -> String {
    DEFAULT_INTERPRETER.interpret(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InterpretError;

    #[test]
    fn test_interpret_words() {
        assert_eq!(interpret("um mais cinco menos dois"), "1 + 5 - 2 = 4");
        assert_eq!(interpret("dez vezes dez"), "10 * 10 = 100");
    }

    #[test]
    fn test_raw_expression_skips_translation() {
        let interpreter = Interpreter::new();
        assert_eq!(interpreter.prepare("Dois + 2"), "Dois + 2");
        assert_eq!(interpret("5 / 2"), "5 / 2 = 2,50");
    }

    #[test]
    fn test_translation_can_be_disabled() {
        let interpreter = Interpreter::with_options(InterpreterOptions {
            translate: false,
            ..InterpreterOptions::default()
        });
        assert_eq!(interpreter.prepare("dez vezes dez"), "dez vezes dez");
        assert_eq!(
            interpreter.interpret("dez vezes dez"),
            "Invalid expression generated: dez vezes dez"
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Interpreter::new().evaluate("dez dividido por zero"),
            Err(InterpretError::DivisionByZero)
        );
        assert_eq!(
            interpret("dez dividido por zero"),
            "An error occurred: division by zero"
        );
    }

    #[test]
    fn test_rephraser_output_is_validated() {
        let interpreter = Interpreter::new().with_rephraser(Box::new(|prompt: &str| -> Result<String> {
            assert!(prompt.ends_with(": 2 * 3"));
            Ok("The expression is: 2 * 3".to_string())
        }));
        // La primera subcadena aritmética es el espacio tras "The"
        assert_eq!(
            interpreter.interpret("dois vezes três"),
            "Invalid expression generated: The expression is: 2 * 3"
        );
    }

    #[test]
    fn test_rephraser_failure() {
        let interpreter = Interpreter::new().with_rephraser(Box::new(|_: &str| -> Result<String> {
            Err(InterpretError::rephraser("model unavailable"))
        }));
        assert_eq!(
            interpreter.interpret("um mais um"),
            "An error occurred: rephraser failed: model unavailable"
        );
    }
}
