//! Tokenizador por espacios en blanco
//!
//! Los paréntesis pegados a una palabra ("(dois", "três)") se separan en
//! tokens propios para que el corrector léxico no los absorba.

/// Tipo de token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Solo letras ("cinco", "milhão")
    Word,
    /// Solo dígitos y punto decimal ("42", "2.5")
    Number,
    /// Solo símbolos aritméticos y paréntesis ("+", "--", "(")
    Symbol,
    /// Cualquier otra mezcla ("5x", "ok?")
    Other,
}

/// Token individual, ya en minúsculas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub token_type: TokenType,
}

impl<'a> Token<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            token_type: classify(text),
        }
    }
}

/// Tokenizador de frases
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Divide en espacios en blanco y separa los paréntesis de los extremos
    /// de cada trozo. El texto debe llegar en minúsculas.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();

        for piece in text.split_whitespace() {
            let core = piece.trim_start_matches('(');
            for _ in 0..(piece.len() - core.len()) {
                tokens.push(Token::new("("));
            }

            let inner = core.trim_end_matches(')');
            if !inner.is_empty() {
                tokens.push(Token::new(inner));
            }
            for _ in 0..(core.len() - inner.len()) {
                tokens.push(Token::new(")"));
            }
        }

        tokens
    }

    /// Reconstruye texto uniendo los tokens con un solo espacio
    pub fn reconstruct<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        tokens
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Colapsa los blancos sin separar nada más
    pub fn normalize_whitespace(&self, text: &str) -> String {
        self.reconstruct(&text.split_whitespace().collect::<Vec<_>>())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_arithmetic_symbol(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '(' | ')')
}

fn classify(piece: &str) -> TokenType {
    if piece.chars().all(char::is_alphabetic) {
        TokenType::Word
    } else if piece.chars().all(|c| c.is_ascii_digit() || c == '.') {
        TokenType::Number
    } else if piece.chars().all(is_arithmetic_symbol) {
        TokenType::Symbol
    } else {
        TokenType::Other
    }
}
