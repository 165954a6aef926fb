//! Vocabulario de números por extenso y operadores
//!
//! Las tablas se construyen una sola vez y se comparten en modo lectura
//! entre el corrector léxico, el parser de números y el normalizador.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Clase léxica de una palabra numérica
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// 0–9
    Unit,
    /// 10–99, formas irregulares y regulares
    Ten,
    /// 100–900
    Hundred,
    /// mil, milhão, bilhão, trilhão (singular y plural)
    Scale,
}

/// Conjunción que une grupos numéricos ("dois mil e trezentos")
pub const CONJUNCTION: &str = "e";

const UNITS: &[(&str, u64)] = &[
    ("zero", 0),
    ("um", 1),
    ("uma", 1),
    ("dois", 2),
    ("duas", 2),
    ("três", 3),
    ("quatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("sete", 7),
    ("oito", 8),
    ("nove", 9),
];

const TENS: &[(&str, u64)] = &[
    ("dez", 10),
    ("onze", 11),
    ("doze", 12),
    ("treze", 13),
    ("quatorze", 14),
    ("quinze", 15),
    ("dezesseis", 16),
    ("dezessete", 17),
    ("dezoito", 18),
    ("dezenove", 19),
    ("vinte", 20),
    ("trinta", 30),
    ("quarenta", 40),
    ("cinquenta", 50),
    ("sessenta", 60),
    ("setenta", 70),
    ("oitenta", 80),
    ("noventa", 90),
];

const HUNDREDS: &[(&str, u64)] = &[
    ("cem", 100),
    ("cento", 100),
    ("duzentos", 200),
    ("trezentos", 300),
    ("quatrocentos", 400),
    ("quinhentos", 500),
    ("seiscentos", 600),
    ("setecentos", 700),
    ("oitocentos", 800),
    ("novecentos", 900),
];

const SCALES: &[(&str, u64)] = &[
    ("mil", 1_000),
    ("milhão", 1_000_000),
    ("milhões", 1_000_000),
    ("bilhão", 1_000_000_000),
    ("bilhões", 1_000_000_000),
    ("trilhão", 1_000_000_000_000),
    ("trilhões", 1_000_000_000_000),
];

/// Operadores por extenso. Las frases de varias palabras van antes que
/// sus prefijos ("dividido por" antes que "dividido").
const OPERATORS: &[(&str, char)] = &[
    ("multiplicado por", '*'),
    ("dividido por", '/'),
    ("mais", '+'),
    ("menos", '-'),
    ("vezes", '*'),
    ("divida", '/'),
    ("dividido", '/'),
    ("multiplique", '*'),
    ("subtraia", '-'),
    ("soma", '+'),
];

static VOCABULARY: Lazy<Vocabulary> = Lazy::new(Vocabulary::build);

/// Vocabulario inmutable del proceso
#[derive(Debug)]
pub struct Vocabulary {
    numbers: HashMap<&'static str, (WordClass, u64)>,
    operators: &'static [(&'static str, char)],
    valid_words: Vec<&'static str>,
}

impl Vocabulary {
    /// Instancia compartida, construida en el primer acceso
    pub fn global() -> &'static Vocabulary {
        &VOCABULARY
    }

    fn build() -> Self {
        let classes = [
            (WordClass::Unit, UNITS),
            (WordClass::Ten, TENS),
            (WordClass::Hundred, HUNDREDS),
            (WordClass::Scale, SCALES),
        ];

        let mut numbers = HashMap::new();
        let mut valid_words = Vec::new();
        for (class, table) in classes {
            for &(word, value) in table {
                numbers.insert(word, (class, value));
                valid_words.push(word);
            }
        }
        // Los tokens son palabras sueltas: las frases aportan cada una de sus palabras
        for word in OPERATORS.iter().flat_map(|&(phrase, _)| phrase.split_whitespace()) {
            if !valid_words.contains(&word) {
                valid_words.push(word);
            }
        }

        Self {
            numbers,
            operators: OPERATORS,
            valid_words,
        }
    }

    /// Clase y valor de una palabra numérica
    pub fn number_word(&self, word: &str) -> Option<(WordClass, u64)> {
        self.numbers.get(word).copied()
    }

    pub fn is_conjunction(&self, word: &str) -> bool {
        word == CONJUNCTION
    }

    /// Operadores en orden de sustitución
    pub fn operators(&self) -> &[(&'static str, char)] {
        self.operators
    }

    /// Todas las palabras válidas (números y operadores) en un solo conjunto
    /// ordenado: unidades, decenas, centenas, escalas, operadores. Las frases
    /// como "dividido por" aparecen separadas en sus palabras.
    pub fn valid_words(&self) -> &[&'static str] {
        &self.valid_words
    }
}
