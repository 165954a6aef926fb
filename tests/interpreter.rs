//! Tests de integración del intérprete.
//!
//! Ejecutar solo estos tests:  cargo test --test interpreter

use std::sync::Arc;
use std::thread;

use interpretador::{
    interpret, ExpressionTranslator, InterpretError, Interpreter, InterpreterOptions, Result,
    Value,
};

fn create_test_interpreter() -> Interpreter {
    Interpreter::with_options(InterpreterOptions::default())
}

#[test]
fn test_sum_and_difference() {
    let interpreter = create_test_interpreter();
    assert_eq!(
        interpreter.interpret("um mais cinco menos dois"),
        "1 + 5 - 2 = 4"
    );
}

#[test]
fn test_multiplication() {
    let interpreter = create_test_interpreter();
    assert_eq!(interpreter.interpret("dez vezes dez"), "10 * 10 = 100");
    assert_eq!(
        interpreter.interpret("três multiplicado por quatro"),
        "3 * 4 = 12"
    );
}

#[test]
fn test_fractional_result_uses_comma() {
    let interpreter = create_test_interpreter();
    assert_eq!(interpreter.interpret("cinco dividido por dois"), "5 / 2 = 2,50");
}

#[test]
fn test_large_numbers_are_grouped() {
    let interpreter = create_test_interpreter();
    assert_eq!(
        interpreter.interpret("dois mil e trezentos mais um milhão e um"),
        "2300 + 1000001 = 1.002.301"
    );
    assert_eq!(
        interpreter.interpret("mil vezes mil"),
        "1000 * 1000 = 1.000.000"
    );
}

#[test]
fn test_typos_are_tolerated() {
    let interpreter = create_test_interpreter();
    assert_eq!(interpreter.interpret("dosi mias cinoc"), "2 + 5 = 7");
}

#[test]
fn test_repeated_operator_words() {
    let interpreter = create_test_interpreter();
    assert_eq!(
        interpreter.interpret("um mais mais mais mais menos um"),
        "1 - 1 = 0"
    );
    assert_eq!(interpreter.interpret("oito menos mais três"), "8 - 3 = 5");
}

#[test]
fn test_parenthesized_phrase_keeps_grouping() {
    let interpreter = create_test_interpreter();
    assert_eq!(
        interpreter.interpret("(dois mais três) vezes quatro"),
        "( 2 + 3 ) * 4 = 20"
    );
}

#[test]
fn test_negative_result() {
    let interpreter = create_test_interpreter();
    assert_eq!(interpreter.interpret("dois menos cinco mil"), "2 - 5000 = -4.998");
}

#[test]
fn test_symbolic_input_is_used_as_is() {
    let interpreter = create_test_interpreter();
    assert_eq!(interpreter.interpret("(2.5 + 1) * 4"), "(2.5 + 1) * 4 = 14");
    assert_eq!(interpreter.interpret("  7 / 4  "), "7 / 4 = 1,75");
}

#[test]
fn test_division_by_zero_is_an_error() {
    let interpreter = create_test_interpreter();
    assert_eq!(
        interpreter.evaluate("dez dividido por zero"),
        Err(InterpretError::DivisionByZero)
    );
    let message = interpreter.interpret("dez dividido por zero");
    assert_eq!(message, "An error occurred: division by zero");
    assert!(!message.contains("inf"), "No debe mostrar infinito: {}", message);
}

#[test]
fn test_letters_only_is_invalid() {
    let interpreter = create_test_interpreter();
    assert_eq!(
        interpreter.evaluate("cachorro gato"),
        Err(InterpretError::InvalidExpression("cachorro gato".to_string()))
    );
    assert_eq!(
        interpreter.interpret("cachorro gato"),
        "Invalid expression generated: cachorro gato"
    );
}

#[test]
fn test_dangling_operator_is_malformed() {
    let interpreter = create_test_interpreter();
    assert!(matches!(
        interpreter.evaluate("dez vezes"),
        Err(InterpretError::MalformedExpression(_))
    ));
    assert!(interpreter.interpret("2 * (3 + 4").starts_with("An error occurred: "));
}

#[test]
fn test_failure_does_not_affect_next_call() {
    let interpreter = create_test_interpreter();
    let _ = interpreter.interpret("dez dividido por zero");
    assert_eq!(interpreter.interpret("um mais um"), "1 + 1 = 2");
}

#[test]
fn test_translator_is_idempotent_on_canonical_text() {
    let translator = ExpressionTranslator::new();
    for canonical in ["1 + 5 - 2", "10 * 10", "3 / (1 + 2)", "42"] {
        let once = translator.translate(canonical);
        assert_eq!(once, canonical);
        assert_eq!(translator.translate(&once), canonical);
    }
}

#[test]
fn test_structured_evaluation() {
    let evaluation = create_test_interpreter()
        .evaluate("cem menos um")
        .expect("debe evaluarse");
    assert_eq!(evaluation.expression, "100 - 1");
    assert_eq!(evaluation.value, Value::Integer(99));
    assert_eq!(evaluation.formatted_value(), "99");
}

#[test]
fn test_default_function() {
    assert_eq!(interpret("quatro vezes cinco"), "4 * 5 = 20");
}

#[test]
fn test_rephraser_receives_canonical_expression() {
    let interpreter = create_test_interpreter().with_rephraser(Box::new(
        |prompt: &str| -> Result<String> {
            let expression = prompt
                .rsplit(": ")
                .next()
                .unwrap_or_default()
                .to_string();
            Ok(format!("{}  ", expression))
        },
    ));
    assert_eq!(
        interpreter.interpret("um mais cinco menos dois"),
        "1 + 5 - 2 = 4"
    );
}

#[test]
fn test_rephraser_output_is_untrusted() {
    let interpreter = create_test_interpreter()
        .with_rephraser(Box::new(|_: &str| -> Result<String> { Ok("banana".to_string()) }));
    assert_eq!(
        interpreter.interpret("um mais um"),
        "Invalid expression generated: banana"
    );
}

#[test]
fn test_concurrent_calls() {
    let interpreter = Arc::new(create_test_interpreter());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let interpreter = Arc::clone(&interpreter);
            thread::spawn(move || interpreter.interpret("dez vezes dez"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "10 * 10 = 100");
    }
}
