/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include unrecognized characters, tokens that do
/// not fit the grammar, and integer literals too large to represent.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing the value of
/// a well-formed expression, such as division by zero or integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Represents any failure raised while evaluating a line.
///
/// Evaluation interleaves parsing and arithmetic, so both kinds of failure
/// can surface from the same call. This enum unifies them so callers receive
/// a single error type per line.
pub enum Error {
    /// The line could not be lexed or parsed.
    Parse(ParseError),
    /// The line parsed, but computing its value failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => error.fmt(f),
            Self::Runtime(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}
