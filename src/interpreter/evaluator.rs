use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Result type used by the evaluator.
///
/// Grammar rules interleave parsing and arithmetic, so a rule can fail with
/// either a [`ParseError`] or a [`RuntimeError`]; both convert into [`Error`].
pub type EvalResult<T> = Result<T, Error>;

/// Evaluates one expression by recursive descent over the token stream.
///
/// The evaluator holds the single lookahead token (the next unconsumed one)
/// plus the lexer it pulls from. Grammar rules inspect the lookahead to
/// decide how to proceed and compute their `i64` result directly while
/// consuming tokens; no syntax tree is built.
///
/// An `Evaluator` is created fresh per line and consumed by [`evaluate`];
/// evaluating the same line twice with independent instances yields the same
/// result.
///
/// [`evaluate`]: Evaluator::evaluate
pub struct Evaluator<'a> {
    lexer:     Lexer<'a>,
    lookahead: Option<Token>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `line` by pulling the first token as the
    /// initial lookahead.
    ///
    /// # Errors
    /// Returns an error if lexing fails on the very first token.
    pub fn new(line: &'a str) -> Result<Self, Error> {
        let mut lexer = Lexer::new(line);
        let lookahead = lexer.next_token()?;

        Ok(Self { lexer, lookahead })
    }

    /// Computes the value of the full expression.
    ///
    /// This is the entry point for evaluation. It runs the
    /// lowest-precedence rule, [`expression`], and then requires the line to
    /// be exhausted: anything left over after a complete expression is
    /// rejected rather than silently ignored.
    ///
    /// # Returns
    /// The `i64` value of the expression.
    ///
    /// # Errors
    /// - Any lexing or grammar error raised while consuming tokens.
    /// - `UnexpectedTrailingTokens` if tokens remain after the expression.
    /// - Any arithmetic error raised while combining operands.
    ///
    /// [`expression`]: Evaluator::expression
    pub fn evaluate(mut self) -> EvalResult<i64> {
        let result = self.expression()?;

        if let Some(token) = self.lookahead {
            return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}") }.into());
        }

        Ok(result)
    }

    /// Consumes the lookahead token if it has the `expected` kind.
    ///
    /// On a match, the consumed token is returned and the lookahead is
    /// advanced by pulling the next token from the lexer. This is the single
    /// primitive through which every grammar rule consumes input.
    ///
    /// # Errors
    /// - `UnexpectedToken` naming `expected` and the actual kind (or end of
    ///   input) on a mismatch.
    /// - Any lexing error raised while pulling the next lookahead.
    fn expect(&mut self, expected: TokenKind) -> Result<Token, Error> {
        match self.lookahead {
            Some(token) if token.kind() == expected => {
                self.lookahead = self.lexer.next_token()?;

                Ok(token)
            },

            Some(token) => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                             found:    token.kind().to_string(), }.into()),

            None => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                      found:    "end of input".to_string(), }.into()),
        }
    }

    /// Evaluates addition and subtraction chains.
    ///
    /// Handles the left-associative binary operators `+` and `-`, combining
    /// term values left-to-right as they are parsed.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    fn expression(&mut self) -> EvalResult<i64> {
        let mut result = self.term()?;

        while let Some(op @ (TokenKind::Plus | TokenKind::Minus)) =
            self.lookahead.map(|token| token.kind())
        {
            self.expect(op)?;
            let right = self.term()?;

            result = match op {
                       TokenKind::Plus => result.checked_add(right),
                       TokenKind::Minus => result.checked_sub(right),
                       _ => unreachable!(),
                   }.ok_or(RuntimeError::Overflow)?;
        }

        Ok(result)
    }

    /// Evaluates multiplication and division chains.
    ///
    /// Handles the left-associative binary operators `*` and `/`, which bind
    /// tighter than `+` and `-`. Division truncates toward zero; a zero
    /// right operand is checked explicitly before dividing.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    fn term(&mut self) -> EvalResult<i64> {
        let mut result = self.factor()?;

        while let Some(op @ (TokenKind::Star | TokenKind::Slash)) =
            self.lookahead.map(|token| token.kind())
        {
            self.expect(op)?;
            let right = self.factor()?;

            result = match op {
                TokenKind::Star => result.checked_mul(right).ok_or(RuntimeError::Overflow)?,
                TokenKind::Slash => {
                    if right == 0 {
                        return Err(RuntimeError::DivisionByZero.into());
                    }
                    result.checked_div(right).ok_or(RuntimeError::Overflow)?
                },
                _ => unreachable!(),
            };
        }

        Ok(result)
    }

    /// Evaluates a single, possibly negated, integer literal.
    ///
    /// A unary minus applies only to the immediately following number.
    ///
    /// Grammar: `factor := "-"? NUMBER`
    fn factor(&mut self) -> EvalResult<i64> {
        let negative = matches!(self.lookahead, Some(Token::Minus));
        if negative {
            self.expect(TokenKind::Minus)?;
        }

        match self.expect(TokenKind::Number)? {
            // Literal magnitudes are non-negative, so negation cannot
            // overflow.
            Token::Number(value) => Ok(if negative { -value } else { value }),
            _ => unreachable!(),
        }
    }
}
