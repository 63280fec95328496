#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Encountered a character outside the expression alphabet.
    UnrecognizedSymbol {
        /// The offending character.
        symbol:   char,
        /// The byte offset of the character within the line.
        position: usize,
    },
    /// The lookahead token did not match what the grammar required.
    ///
    /// `found` is `"end of input"` when the line ended where another token
    /// was required.
    UnexpectedToken {
        /// Description of the token the grammar required.
        expected: String,
        /// Description of the token actually found.
        found:    String,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
    /// An integer literal was too large to be represented safely.
    LiteralTooLarge {
        /// The byte offset of the literal within the line.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedSymbol { symbol, position } => {
                write!(f, "Error at column {position}: Unrecognized symbol '{symbol}'.")
            },

            Self::UnexpectedToken { expected, found } => {
                write!(f, "Expected {expected} but found {found}.")
            },

            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Extra tokens after expression. Check your input: {token}"),

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at column {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
