//! # summa
//!
//! summa is a line-oriented calculator written in Rust. It evaluates signed
//! integer arithmetic expressions using the operators `+`, `-`, `*` and `/`
//! with the standard precedence rules, computing the result in a single pass
//! while parsing.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::Evaluator;

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or computing the value of a line. It standardizes error reporting and
/// carries detailed information about failures, including the offending
/// symbol and its position where applicable.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, arithmetic).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing and recursive-descent evaluation to
/// provide a complete pipeline from an input line to its numeric value.
/// Parsing and evaluation happen in the same pass: no syntax tree is built.
///
/// # Responsibilities
/// - Coordinates the core components: lexer and evaluator.
/// - Provides entry points for evaluating a single line.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::Error;

/// Evaluates one line containing an arithmetic expression.
///
/// The line is lexed and parsed with immediate evaluation; the numeric
/// result is returned as soon as the expression has been fully consumed.
/// Each call builds a fresh lexer and evaluator, so no state is carried
/// between lines.
///
/// All arithmetic is performed in `i64`; division truncates toward zero.
///
/// # Errors
/// Returns an error if the line cannot be lexed or parsed, if tokens remain
/// after a complete expression, or if the arithmetic itself fails (division
/// by zero, overflow).
///
/// # Examples
/// ```
/// // Multiplication binds tighter than addition.
/// assert_eq!(summa::evaluate("2 + 3 * 4").unwrap(), 14);
///
/// // Division truncates toward zero.
/// assert_eq!(summa::evaluate("10 / 4").unwrap(), 2);
///
/// // A zero divisor is an error, not a crash.
/// assert!(summa::evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(line: &str) -> Result<i64, Error> {
    Evaluator::new(line)?.evaluate()
}
