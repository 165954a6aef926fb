//! Análisis y evaluación de expresiones infijas
//!
//! Gramática (de menor a mayor precedencia):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-')* primary
//! primary := número | '(' expr ')'
//! ```
//!
//! Asociatividad a la izquierda. La evaluación se hace durante el descenso,
//! sin construir un árbol.

use crate::error::{InterpretError, Result};
use crate::evaluator::value::Value;

/// Profundidad máxima de paréntesis anidados
const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ArithToken {
    Number(Value),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn scan_number(literal: &str) -> Result<Value> {
    if literal.contains('.') {
        if literal == "." {
            return Err(InterpretError::malformed("lone decimal point"));
        }
        return literal
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| InterpretError::malformed(format!("invalid number '{}'", literal)));
    }
    match literal.parse::<i128>() {
        Ok(n) => Ok(Value::Integer(n)),
        Err(_) => literal
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| InterpretError::malformed(format!("invalid number '{}'", literal))),
    }
}

fn lex(input: &str) -> Result<Vec<ArithToken>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let mut end = start;
            while let Some(&(i, c)) = chars.peek() {
                if c.is_ascii_digit() || c == '.' {
                    end = i + c.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(ArithToken::Number(scan_number(&input[start..end])?));
            continue;
        }

        let token = match ch {
            '+' => ArithToken::Plus,
            '-' => ArithToken::Minus,
            '*' => ArithToken::Star,
            '/' => ArithToken::Slash,
            '(' => ArithToken::LParen,
            ')' => ArithToken::RParen,
            other => {
                return Err(InterpretError::malformed(format!(
                    "unexpected character '{}'",
                    other
                )))
            }
        };
        tokens.push(token);
        chars.next();
    }

    Ok(tokens)
}

struct ArithParser {
    tokens: Vec<ArithToken>,
    pos: usize,
    depth: usize,
}

impl ArithParser {
    fn peek(&self) -> Option<ArithToken> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<ArithToken> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> Result<Value> {
        let mut value = self.parse_term()?;
        loop {
            match self.peek() {
                Some(ArithToken::Plus) => {
                    self.advance();
                    value = value.add(self.parse_term()?)?;
                }
                Some(ArithToken::Minus) => {
                    self.advance();
                    value = value.sub(self.parse_term()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn parse_term(&mut self) -> Result<Value> {
        let mut value = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(ArithToken::Star) => {
                    self.advance();
                    value = value.mul(self.parse_unary()?)?;
                }
                Some(ArithToken::Slash) => {
                    self.advance();
                    value = value.div(self.parse_unary()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn parse_unary(&mut self) -> Result<Value> {
        let mut negate = false;
        while let Some(token @ (ArithToken::Plus | ArithToken::Minus)) = self.peek() {
            if token == ArithToken::Minus {
                negate = !negate;
            }
            self.advance();
        }
        let value = self.parse_primary()?;
        if negate {
            value.neg()
        } else {
            Ok(value)
        }
    }

    fn parse_primary(&mut self) -> Result<Value> {
        match self.advance() {
            Some(ArithToken::Number(value)) => Ok(value),
            Some(ArithToken::LParen) => {
                self.depth += 1;
                if self.depth > MAX_DEPTH {
                    return Err(InterpretError::malformed("parentheses nested too deeply"));
                }
                let value = self.parse_expression()?;
                match self.advance() {
                    Some(ArithToken::RParen) => {
                        self.depth -= 1;
                        Ok(value)
                    }
                    _ => Err(InterpretError::malformed("unbalanced parentheses")),
                }
            }
            Some(ArithToken::RParen) => Err(InterpretError::malformed("unexpected ')'")),
            Some(_) => Err(InterpretError::malformed("operator without operand")),
            None => Err(InterpretError::malformed("unexpected end of expression")),
        }
    }
}

/// Evalúa una expresión aritmética ya validada.
pub fn evaluate(expression: &str) -> Result<Value> {
    let tokens = lex(expression)?;
    if tokens.is_empty() {
        return Err(InterpretError::malformed("empty expression"));
    }

    let mut parser = ArithParser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.parse_expression()?;

    match parser.peek() {
        None => Ok(value),
        Some(ArithToken::RParen) => Err(InterpretError::malformed("unbalanced parentheses")),
        Some(_) => Err(InterpretError::malformed("unexpected token after expression")),
    }
}
