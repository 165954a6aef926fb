//! Normalización de operadores
//!
//! Cascada de reglas en orden fijo:
//! 1. símbolos repetidos y contiguos ("+++" → "+"; "- -" se conserva)
//! 2. palabras repetidas ("vezes vezes" → "vezes")
//! 3. cadenas de "mais"/"menos": con al menos un "menos" → "-", si no → "+"
//! 4. cada operador por extenso → su símbolo, por palabra completa
//!
//! Debe ejecutarse después de convertir los números a dígitos.

use log::debug;
use regex::{Captures, Regex};

use crate::dictionary::Vocabulary;
use crate::grammar::rules::{NormalizationRule, Rewrite, RuleEngine};

const PLUS_WORD: &str = "mais";
const MINUS_WORD: &str = "menos";

/// Patrón de palabra completa; los espacios internos de una frase admiten
/// cualquier cantidad de blancos ("dividido   por").
fn word_pattern(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("los patrones de operadores se generan desde el vocabulario")
}

fn resolve_sign_chain(caps: &Captures) -> String {
    let has_minus = caps[0].split_whitespace().any(|w| w == MINUS_WORD);
    let sign = if has_minus { "-" } else { "+" };
    sign.to_string()
}

fn repeated_symbol_rules() -> Vec<NormalizationRule> {
    ['+', '-', '*', '/']
        .into_iter()
        .map(|symbol| {
            let escaped = regex::escape(&symbol.to_string());
            NormalizationRule::new(
                &format!("repeated-symbol:{}", symbol),
                "símbolo repetido",
                compile(&format!(r"(?:{}){{2,}}", escaped)),
                Rewrite::Literal(symbol.to_string()),
            )
        })
        .collect()
}

fn repeated_word_rules(vocabulary: &Vocabulary) -> Vec<NormalizationRule> {
    vocabulary
        .operators()
        .iter()
        .map(|(phrase, _)| {
            let word = word_pattern(phrase);
            NormalizationRule::new(
                &format!("repeated-word:{}", phrase),
                "palabra repetida",
                compile(&format!(r"\b{0}(?:\s+{0})+\b", word)),
                Rewrite::Literal(phrase.to_string()),
            )
        })
        .collect()
}

fn sign_chain_rule() -> NormalizationRule {
    let either = format!("(?:{}|{})", PLUS_WORD, MINUS_WORD);
    NormalizationRule::new(
        "sign-chain",
        "cadena de signos",
        compile(&format!(r"\b{0}(?:\s+{0})+\b", either)),
        Rewrite::Computed(resolve_sign_chain),
    )
}

fn substitution_rules(vocabulary: &Vocabulary) -> Vec<NormalizationRule> {
    vocabulary
        .operators()
        .iter()
        .map(|(phrase, symbol)| {
            NormalizationRule::new(
                &format!("word-to-symbol:{}", phrase),
                "operador por extenso",
                compile(&format!(r"\b{}\b", word_pattern(phrase))),
                Rewrite::Literal(symbol.to_string()),
            )
        })
        .collect()
}

/// Normalizador de operadores
pub struct OperatorNormalizer {
    engine: RuleEngine,
}

impl OperatorNormalizer {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let mut engine = RuleEngine::new();
        engine.add_rules(repeated_symbol_rules());
        engine.add_rules(repeated_word_rules(vocabulary));
        engine.add_rule(sign_chain_rule());
        engine.add_rules(substitution_rules(vocabulary));
        debug!("{} reglas de normalización de operadores", engine.get_rules().len());
        Self { engine }
    }

    pub fn normalize(&self, text: &str) -> String {
        self.engine.apply(text)
    }
}
