//! Formato numérico pt-BR
//!
//! Enteros: "." como separador de miles ("1.234.567").
//! Fraccionarios: dos decimales, "." de miles y "," decimal ("1.234,50").

use crate::evaluator::value::Value;

/// Agrupa una secuencia de dígitos de tres en tres con "."
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

fn signed(negative: bool, body: String) -> String {
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Formatea un resultado con las convenciones brasileñas.
pub fn format_pt_br(value: Value) -> String {
    match value {
        Value::Integer(n) => signed(n < 0, group_thousands(&n.unsigned_abs().to_string())),
        Value::Float(x) if value.is_integral() => {
            signed(x < 0.0, group_thousands(&format!("{:.0}", x.abs())))
        }
        Value::Float(x) => {
            let fixed = format!("{:.2}", x.abs());
            let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
            signed(x < 0.0, format!("{},{}", group_thousands(integer), fraction))
        }
    }
}
