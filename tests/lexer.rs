use summa::{
    error::ParseError,
    interpreter::lexer::{Lexer, Token},
};

fn collect_tokens(line: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(line);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => return tokens,
            Err(e) => panic!("`{line}` failed to lex: {e}"),
        }
    }
}

#[test]
fn empty_and_space_only_lines_produce_no_tokens() {
    assert_eq!(collect_tokens(""), Vec::new());
    assert_eq!(collect_tokens("     "), Vec::new());
}

#[test]
fn tokenizes_an_expression_on_demand() {
    assert_eq!(collect_tokens(" 12+ 3 * 45"),
               vec![Token::Number(12),
                    Token::Plus,
                    Token::Number(3),
                    Token::Star,
                    Token::Number(45)]);
    assert_eq!(collect_tokens("-1/2"),
               vec![Token::Minus, Token::Number(1), Token::Slash, Token::Number(2)]);
}

#[test]
fn maximal_digit_runs_form_one_number() {
    assert_eq!(collect_tokens("1234567890"), vec![Token::Number(1_234_567_890)]);
    assert_eq!(collect_tokens("12 34"), vec![Token::Number(12), Token::Number(34)]);
}

#[test]
fn reports_the_position_of_an_unrecognized_symbol() {
    let mut lexer = Lexer::new("12 ? 3");

    assert!(matches!(lexer.next_token(), Ok(Some(Token::Number(12)))));
    assert!(matches!(lexer.next_token(),
                     Err(ParseError::UnrecognizedSymbol { symbol: '?', position: 3 })));
}

#[test]
fn rejects_literals_that_do_not_fit_in_i64() {
    let mut lexer = Lexer::new("99999999999999999999");

    assert!(matches!(lexer.next_token(), Err(ParseError::LiteralTooLarge { position: 0 })));
}
