//! Traductor de lenguaje natural a expresión canónica
//!
//! Fases, en orden fijo y sobre texto en minúsculas:
//! 1. corrección léxica palabra por palabra
//! 2. plegado de números por extenso
//! 3. normalización de operadores

use log::debug;

use crate::dictionary::Vocabulary;
use crate::evaluator::is_expression_char;
use crate::grammar::{NumberWordParser, OperatorNormalizer, Tokenizer};
use crate::spelling::{LexicalCorrector, DEFAULT_CUTOFF};

/// ¿Debe traducirse la frase? Si ya contiene un dígito o un operador
/// simbólico se considera una expresión casi final y se usa tal cual.
pub fn needs_translation(phrase: &str) -> bool {
    !phrase
        .chars()
        .any(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/'))
}

/// Traductor de expresiones
pub struct ExpressionTranslator {
    vocabulary: &'static Vocabulary,
    tokenizer: Tokenizer,
    normalizer: OperatorNormalizer,
    cutoff: f64,
}

impl ExpressionTranslator {
    pub fn new() -> Self {
        let vocabulary = Vocabulary::global();
        Self {
            vocabulary,
            tokenizer: Tokenizer::new(),
            normalizer: OperatorNormalizer::new(vocabulary),
            cutoff: DEFAULT_CUTOFF,
        }
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Devuelve la mejor expresión canónica posible. No valida el resultado:
    /// las palabras desconocidas sobreviven y las rechaza el evaluador.
    pub fn translate(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        // Texto ya canónico: solo se normalizan los espacios
        if lowered.chars().all(is_expression_char) {
            return self.tokenizer.normalize_whitespace(&lowered);
        }

        let tokens = self.tokenizer.tokenize(&lowered);
        let corrector = LexicalCorrector::new(self.vocabulary).with_cutoff(self.cutoff);
        let corrected = corrector.correct_tokens(&tokens);
        debug!("tras corrección léxica: {}", self.tokenizer.reconstruct(&corrected));

        let folded = NumberWordParser::new(self.vocabulary).fold(&corrected);
        let folded = self.tokenizer.reconstruct(&folded);
        debug!("tras plegar números: {}", folded);

        let normalized = self.normalizer.normalize(&folded);
        debug!("expresión normalizada: {}", normalized);
        normalized
    }
}

impl Default for ExpressionTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(text: &str) -> String {
        ExpressionTranslator::new().translate(text)
    }

    #[test]
    fn test_needs_translation() {
        assert!(needs_translation("um mais cinco"));
        assert!(!needs_translation("um mais 5"));
        assert!(!needs_translation("dez - dois"));
        assert!(needs_translation(""));
    }

    #[test]
    fn test_full_pipeline() {
        assert_eq!(translate("um mais cinco menos dois"), "1 + 5 - 2");
        assert_eq!(translate("dez vezes dez"), "10 * 10");
        assert_eq!(translate("dez dividido por zero"), "10 / 0");
        assert_eq!(translate("dois mil e trezentos mais um"), "2300 + 1");
    }

    #[test]
    fn test_uppercase_and_typos() {
        assert_eq!(translate("Um MAIS cinoc"), "1 + 5");
        assert_eq!(translate("dosi vzees tres"), "2 * 3");
    }

    #[test]
    fn test_repeated_operators() {
        assert_eq!(translate("um mais mais mais mais menos um"), "1 - 1");
        assert_eq!(translate("cinco menos mais dois"), "5 - 2");
    }

    #[test]
    fn test_canonical_text_is_unchanged() {
        for canonical in ["1 + 5 - 2", "10 * 10", "(2.5 + 1) / 3", "1 + -2", "7"] {
            assert_eq!(translate(canonical), canonical);
        }
    }

    #[test]
    fn test_canonical_whitespace_is_normalized() {
        assert_eq!(translate("  1   +  2 "), "1 + 2");
    }

    #[test]
    fn test_parenthesized_words() {
        assert_eq!(
            translate("(dois mais três) vezes quatro"),
            "( 2 + 3 ) * 4"
        );
    }

    #[test]
    fn test_spaced_minus_signs_are_kept() {
        assert_eq!(translate("dois - - três"), "2 - - 3");
        assert_eq!(translate("dois --- três"), "2 - 3");
    }

    #[test]
    fn test_unknown_words_survive() {
        assert_eq!(translate("quanto é dois mais dois"), "quanto é 2 + 2");
    }
}
