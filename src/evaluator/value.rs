//! Valores numéricos del evaluador
//!
//! Los enteros son exactos hasta 128 bits y pasan a coma flotante si
//! desbordan. La división siempre produce coma flotante.

use crate::error::{InterpretError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i128),
    Float(f64),
}

fn finite(x: f64) -> Result<Value> {
    if x.is_finite() {
        Ok(Value::Float(x))
    } else {
        Err(InterpretError::NumericOverflow)
    }
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Integer(n) => n as f64,
            Value::Float(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Value::Integer(n) => n == 0,
            Value::Float(x) => x == 0.0,
        }
    }

    /// ¿El valor matemático es entero? (5.0 lo es)
    pub fn is_integral(self) -> bool {
        match self {
            Value::Integer(_) => true,
            Value::Float(x) => x.is_finite() && x.fract() == 0.0,
        }
    }

    pub fn add(self, other: Value) -> Result<Value> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_add(b) {
                Some(n) => Ok(Value::Integer(n)),
                None => finite(a as f64 + b as f64),
            },
            _ => finite(self.as_f64() + other.as_f64()),
        }
    }

    pub fn sub(self, other: Value) -> Result<Value> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_sub(b) {
                Some(n) => Ok(Value::Integer(n)),
                None => finite(a as f64 - b as f64),
            },
            _ => finite(self.as_f64() - other.as_f64()),
        }
    }

    pub fn mul(self, other: Value) -> Result<Value> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_mul(b) {
                Some(n) => Ok(Value::Integer(n)),
                None => finite(a as f64 * b as f64),
            },
            _ => finite(self.as_f64() * other.as_f64()),
        }
    }

    pub fn div(self, other: Value) -> Result<Value> {
        if other.is_zero() {
            return Err(InterpretError::DivisionByZero);
        }
        finite(self.as_f64() / other.as_f64())
    }

    pub fn neg(self) -> Result<Value> {
        match self {
            Value::Integer(n) => match n.checked_neg() {
                Some(n) => Ok(Value::Integer(n)),
                None => finite(-(n as f64)),
            },
            Value::Float(x) => Ok(Value::Float(-x)),
        }
    }
}
