//! Conversión de números por extenso a literales decimales
//!
//! Cada secuencia maximal de palabras numéricas (con la conjunción "e"
//! intercalada) se pliega en un único literal. Cualquier otro token corta la
//! secuencia y se copia tal cual.
//!
//! Ejemplo: "dois mil e trezentos mais um" → "2300 mais 1"

use std::borrow::Cow;

use log::warn;

use crate::dictionary::{Vocabulary, WordClass};

/// Registros del número en curso.
///
/// El valor real es siempre `total + partial`. Mismo rango que
/// `Value::Integer`; si una secuencia lo excede no se convierte.
#[derive(Debug, Default)]
struct Accumulator {
    /// Grupos ya multiplicados por una escala
    total: i128,
    /// Valor dentro del grupo de escala actual
    partial: i128,
    /// Se ha visto al menos una palabra numérica ("zero" incluido)
    pending: bool,
    overflow: bool,
}

/// Resultado de cerrar una secuencia
#[derive(Debug, PartialEq)]
enum Flush {
    Empty,
    Literal(i128),
    Overflow,
}

impl Accumulator {
    fn add(&mut self, value: i128) {
        match self.partial.checked_add(value) {
            Some(partial) => self.partial = partial,
            None => self.overflow = true,
        }
        self.pending = true;
    }

    /// Cierra el grupo actual: "mil" solo equivale a 1000.
    fn scale(&mut self, multiplier: i128) {
        let group = if self.partial == 0 { 1 } else { self.partial };
        match group
            .checked_mul(multiplier)
            .and_then(|scaled| self.total.checked_add(scaled))
        {
            Some(total) => self.total = total,
            None => self.overflow = true,
        }
        self.partial = 0;
        self.pending = true;
    }

    fn flush(&mut self) -> Flush {
        let flushed = if !self.pending {
            Flush::Empty
        } else if self.overflow {
            Flush::Overflow
        } else {
            match self.total.checked_add(self.partial) {
                Some(value) => Flush::Literal(value),
                None => Flush::Overflow,
            }
        };
        *self = Self::default();
        flushed
    }
}

/// Parser de números por extenso
pub struct NumberWordParser<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> NumberWordParser<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Pliega las secuencias numéricas de una lista de palabras ya corregidas.
    ///
    /// Una secuencia fuera de rango se deja tal cual, con sus palabras, y el
    /// evaluador la rechaza.
    pub fn fold<'t>(&self, words: &[&'t str]) -> Vec<Cow<'t, str>> {
        let mut output = Vec::with_capacity(words.len());
        let mut acc = Accumulator::default();
        let mut run_start = 0;

        for (i, &word) in words.iter().enumerate() {
            match self.vocabulary.number_word(word) {
                Some((class, value)) => {
                    if !acc.pending {
                        run_start = i;
                    }
                    let value = i128::from(value);
                    if class == WordClass::Scale {
                        acc.scale(value);
                    } else {
                        acc.add(value);
                    }
                }
                None if self.vocabulary.is_conjunction(word) => {}
                None => {
                    push_flushed(&mut output, acc.flush(), &words[run_start..i]);
                    output.push(Cow::Borrowed(word));
                }
            }
        }

        push_flushed(&mut output, acc.flush(), &words[run_start..]);
        output
    }
}

fn push_flushed<'t>(output: &mut Vec<Cow<'t, str>>, flushed: Flush, run: &[&'t str]) {
    match flushed {
        Flush::Empty => {}
        Flush::Literal(value) => output.push(Cow::Owned(value.to_string())),
        Flush::Overflow => {
            warn!("número fuera de rango: '{}'", run.join(" "));
            output.extend(run.iter().map(|&word| Cow::Borrowed(word)));
        }
    }
}
