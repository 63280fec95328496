use summa::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
};

fn assert_value(line: &str, expected: i64) {
    match evaluate(line) {
        Ok(value) => {
            assert_eq!(value, expected, "`{line}` evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("`{line}` failed to evaluate: {e}"),
    }
}

fn assert_failure(line: &str) -> Error {
    match evaluate(line) {
        Ok(value) => panic!("`{line}` evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn single_literals() {
    assert_value("7", 7);
    assert_value("0", 0);
    assert_value("42", 42);
    assert_value("007", 7);
    assert_value("   19", 19);
    assert_value("19   ", 19);
}

#[test]
fn addition_and_subtraction_are_left_associative() {
    assert_value("1 + 2", 3);
    assert_value("1 - 2 + 3", 2);
    assert_value("10 - 4 - 3", 3);
    assert_value("0 - 1 - 1 - 1", -3);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2 + 3 * 4", 14);
    assert_value("2 * 3 + 4", 10);
    assert_value("20 - 10 / 2", 15);
    assert_value("1 + 2 * 3 - 4", 3);
}

#[test]
fn multiplication_and_division_are_left_associative() {
    assert_value("2 * 3 * 4", 24);
    assert_value("100 / 5 / 2", 10);
    assert_value("8 / 2 * 3", 12);
}

#[test]
fn unary_minus_applies_to_the_following_number() {
    assert_value("-5", -5);
    assert_value("-5 + 3", -2);
    assert_value("3 - -2", 5);
    assert_value("-2 * 3", -6);
    assert_value("4 * -2", -8);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("10 / 4", 2);
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("3 / 4", 0);
}

#[test]
fn division_by_zero_is_an_error() {
    let error = assert_failure("1 / 0");
    assert!(matches!(error, Error::Runtime(RuntimeError::DivisionByZero)));

    let error = assert_failure("4 + 6 / 0");
    assert!(matches!(error, Error::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_value("1+2", 3);
    assert_value("1 + 2", 3);
    assert_value("  1   +   2  ", 3);
}

#[test]
fn only_spaces_separate_tokens() {
    let error = assert_failure("1\t+ 2");
    assert!(matches!(error,
                     Error::Parse(ParseError::UnrecognizedSymbol { symbol: '\t', position: 1 })));
}

#[test]
fn unrecognized_symbols_are_reported_with_their_position() {
    let error = assert_failure("3 & 4");
    assert!(matches!(error,
                     Error::Parse(ParseError::UnrecognizedSymbol { symbol: '&', position: 2 })));
}

#[test]
fn incomplete_expressions_are_rejected() {
    let error = assert_failure("3 +");
    match error {
        Error::Parse(ParseError::UnexpectedToken { expected, found }) => {
            assert_eq!(expected, "a number");
            assert_eq!(found, "end of input");
        },
        other => panic!("expected UnexpectedToken, got: {other:?}"),
    }

    assert!(matches!(assert_failure("* 3"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("3 * / 2"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure(""),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("   "),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(assert_failure("1 + 2 3"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(assert_failure("1 2"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn overflowing_arithmetic_is_an_error() {
    assert_value("9223372036854775807 - 1", 9223372036854775806);

    assert!(matches!(assert_failure("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow)));
    assert!(matches!(assert_failure("-9223372036854775807 - 2"),
                     Error::Runtime(RuntimeError::Overflow)));
    assert!(matches!(assert_failure("3037000500 * 3037000500"),
                     Error::Runtime(RuntimeError::Overflow)));
}

#[test]
fn oversized_literals_are_rejected() {
    assert!(matches!(assert_failure("9223372036854775808"),
                     Error::Parse(ParseError::LiteralTooLarge { position: 0 })));
    assert!(matches!(assert_failure("1 + 99999999999999999999"),
                     Error::Parse(ParseError::LiteralTooLarge { position: 4 })));
}

#[test]
fn evaluation_is_idempotent_across_instances() {
    let line = "12 - 3 * 4 / 2 + -1";

    let first = evaluate(line).unwrap();
    let second = evaluate(line).unwrap();

    assert_eq!(first, 5);
    assert_eq!(first, second);
}
