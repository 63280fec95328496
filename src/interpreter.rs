/// The evaluator module parses tokens and computes results in one pass.
///
/// The evaluator pulls tokens from the lexer one at a time and drives a
/// recursive-descent grammar with the standard arithmetic precedence levels.
/// Each grammar rule returns a plain numeric value, so no syntax tree is
/// built or retained; the result of a line is available the moment its last
/// token has been consumed.
///
/// # Responsibilities
/// - Enforces the expression grammar, reporting mismatched tokens.
/// - Combines operands left-to-right with checked `i64` arithmetic.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes an input line for the evaluator.
///
/// The lexer (tokenizer) reads the raw line and produces tokens on demand,
/// each corresponding to a meaningful element: integer literals and the four
/// arithmetic operators. Runs of spaces between tokens are skipped. This is
/// the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Handles integer literals and operators.
/// - Reports lexical errors for characters outside the expression alphabet.
pub mod lexer;
