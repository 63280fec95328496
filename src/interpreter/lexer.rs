use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
///
/// The set of kinds is closed: a token outside the alphabet cannot be
/// constructed, so downstream code never has to validate one.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Token {
    /// Integer literal tokens, such as `42`. The carried value is the
    /// non-negative magnitude; signs are handled by the grammar.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// The kind of a [`Token`], without any carried value.
///
/// Used by the evaluator to state which token a grammar rule requires and to
/// describe mismatches in error messages.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// An integer literal.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
}

impl Token {
    /// Returns the [`TokenKind`] of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "a number"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
        }
    }
}

/// Produces tokens from one input line on demand.
///
/// A `Lexer` owns the scanning position for a single line. It is created
/// fresh for each line and discarded once the line has been fully consumed
/// or an error occurred; no state is shared across lines.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned before the first character of `line`.
    #[must_use]
    pub fn new(line: &'a str) -> Self {
        Self { inner: Token::lexer(line) }
    }

    /// Returns the next token, or `None` once the line is exhausted.
    ///
    /// An empty line, or one containing only spaces, yields `None` without
    /// producing any token.
    ///
    /// # Errors
    /// - `UnrecognizedSymbol` if the current character is outside
    ///   `{+, -, *, /, 0-9, space}`, with its byte offset in the line.
    /// - `LiteralTooLarge` if a digit run does not fit in an `i64`.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        match self.inner.next() {
            None => Ok(None),
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(())) => {
                let position = self.inner.span().start;
                let slice = self.inner.slice();

                // The only rule with a fallible callback is the integer
                // literal, so an errored digit slice means the value did
                // not fit in an i64.
                if slice.starts_with(|c: char| c.is_ascii_digit()) {
                    Err(ParseError::LiteralTooLarge { position })
                } else {
                    Err(ParseError::UnrecognizedSymbol { symbol: slice.chars().next().unwrap_or_default(),
                                                         position })
                }
            },
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits in an `i64`.
/// - `None`: If the digit run is too large to represent.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
