//! Módulo de corrección léxica
//!
//! Corrige erratas menores palabra por palabra contra el vocabulario fijo.

pub mod levenshtein;

use log::trace;

use crate::dictionary::Vocabulary;
use crate::grammar::{Token, TokenType};

pub use levenshtein::{damerau_levenshtein_distance, levenshtein_distance, similarity};

/// Similitud mínima para aceptar una corrección
pub const DEFAULT_CUTOFF: f64 = 0.75;

/// Mejor candidato para una palabra
#[derive(Debug, Clone, PartialEq)]
pub struct SpellingSuggestion {
    pub word: &'static str,
    pub similarity: f64,
}

/// Corrector léxico top-1 sobre el vocabulario
pub struct LexicalCorrector<'a> {
    vocabulary: &'a Vocabulary,
    cutoff: f64,
}

impl<'a> LexicalCorrector<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            cutoff: DEFAULT_CUTOFF,
        }
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Mejor palabra del vocabulario con similitud >= cutoff, si existe.
    ///
    /// A igual similitud gana la de menor distancia de Levenshtein estricta
    /// y después la primera en orden de vocabulario.
    pub fn best_match(&self, word: &str) -> Option<SpellingSuggestion> {
        if word.is_empty() {
            return None;
        }

        let mut best: Option<(SpellingSuggestion, usize)> = None;
        for &candidate in self.vocabulary.valid_words() {
            let score = similarity(word, candidate);
            if score < self.cutoff {
                continue;
            }
            let strict = levenshtein_distance(word, candidate);
            let better = match &best {
                None => true,
                Some((current, current_strict)) => {
                    score > current.similarity
                        || (score == current.similarity && strict < *current_strict)
                }
            };
            if better {
                best = Some((
                    SpellingSuggestion {
                        word: candidate,
                        similarity: score,
                    },
                    strict,
                ));
            }
        }

        best.map(|(suggestion, _)| suggestion)
    }

    /// Devuelve la corrección o la palabra original sin cambios
    pub fn correct_word<'w>(&self, word: &'w str) -> &'w str {
        match self.best_match(word) {
            Some(suggestion) if suggestion.word != word => {
                trace!(
                    "corrección léxica: '{}' -> '{}' ({:.2})",
                    word,
                    suggestion.word,
                    suggestion.similarity
                );
                suggestion.word
            }
            _ => word,
        }
    }

    /// Corrige cada token de forma independiente, conservando orden y número.
    /// Números y símbolos pasan sin tocar.
    pub fn correct_tokens<'w>(&self, tokens: &[Token<'w>]) -> Vec<&'w str> {
        tokens
            .iter()
            .map(|token| match token.token_type {
                TokenType::Number | TokenType::Symbol => token.text,
                TokenType::Word | TokenType::Other => self.correct_word(token.text),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Tokenizer;

    fn corrector() -> LexicalCorrector<'static> {
        LexicalCorrector::new(Vocabulary::global())
    }

    #[test]
    fn test_exact_word_is_kept() {
        assert_eq!(corrector().correct_word("quatro"), "quatro");
        assert_eq!(corrector().correct_word("mais"), "mais");
    }

    #[test]
    fn test_transposed_letters_are_fixed() {
        assert_eq!(corrector().correct_word("cinoc"), "cinco");
        assert_eq!(corrector().correct_word("dosi"), "dois");
        assert_eq!(corrector().correct_word("vzees"), "vezes");
    }

    #[test]
    fn test_missing_accent_is_fixed() {
        assert_eq!(corrector().correct_word("tres"), "três");
        assert_eq!(corrector().correct_word("milhao"), "milhão");
    }

    #[test]
    fn test_below_cutoff_is_unchanged() {
        assert_eq!(corrector().correct_word("casa"), "casa");
        assert_eq!(corrector().correct_word("banana"), "banana");
    }

    #[test]
    fn test_digits_and_punctuation_pass_through() {
        assert_eq!(corrector().correct_word("42"), "42");
        assert_eq!(corrector().correct_word("?"), "?");
        assert_eq!(corrector().correct_word(""), "");
    }

    #[test]
    fn test_correct_tokens_keeps_order_and_count() {
        let tokens = Tokenizer::new().tokenize("um mias cinoc");
        assert_eq!(corrector().correct_tokens(&tokens), vec!["um", "mais", "cinco"]);
    }

    #[test]
    fn test_parentheses_are_not_absorbed() {
        let tokens = Tokenizer::new().tokenize("(dosi mais três) vezes quatro");
        assert_eq!(
            corrector().correct_tokens(&tokens),
            vec!["(", "dois", "mais", "três", ")", "vezes", "quatro"]
        );
    }

    #[test]
    fn test_numbers_and_symbols_are_not_corrected() {
        let tokens = Tokenizer::new().tokenize("dois, + 5 ()");
        assert_eq!(
            corrector().correct_tokens(&tokens),
            vec!["dois", "+", "5", "(", ")"]
        );
    }

    #[test]
    fn test_stricter_cutoff() {
        let strict = corrector().with_cutoff(0.9);
        assert_eq!(strict.correct_word("dosi"), "dosi");
    }
}
