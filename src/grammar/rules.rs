//! Sistema de reglas de normalización
//!
//! Cada regla es una transformación pura patrón → reemplazo. El motor las
//! aplica en el orden en que se añadieron.

use std::borrow::Cow;
use std::fmt;

use log::trace;
use regex::{Captures, Regex};

/// Identificador de regla
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

/// Reemplazo a aplicar sobre cada coincidencia
#[derive(Clone)]
pub enum Rewrite {
    Literal(String),
    /// El reemplazo depende del texto capturado
    Computed(fn(&Captures) -> String),
}

impl fmt::Debug for Rewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rewrite::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Rewrite::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Regla de normalización
#[derive(Debug, Clone)]
pub struct NormalizationRule {
    pub id: RuleId,
    pub name: String,
    pub pattern: Regex,
    pub rewrite: Rewrite,
}

impl NormalizationRule {
    pub fn new(id: &str, name: &str, pattern: Regex, rewrite: Rewrite) -> Self {
        Self {
            id: RuleId(id.to_string()),
            name: name.to_string(),
            pattern,
            rewrite,
        }
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.rewrite {
            Rewrite::Literal(replacement) => self
                .pattern
                .replace_all(text, regex::NoExpand(replacement.as_str())),
            Rewrite::Computed(f) => self.pattern.replace_all(text, |caps: &Captures| f(caps)),
        }
    }
}

/// Motor de reglas
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<NormalizationRule>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: NormalizationRule) {
        self.rules.push(rule);
    }

    pub fn add_rules(&mut self, rules: Vec<NormalizationRule>) {
        self.rules.extend(rules);
    }

    pub fn get_rules(&self) -> &[NormalizationRule] {
        &self.rules
    }

    /// Aplica las reglas en orden
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            let rewritten = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            trace!("regla {} ({}): '{}' -> '{}'", rule.id.0, rule.name, current, rewritten);
            current = rewritten;
        }
        current
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
