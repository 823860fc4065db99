use calcula::interpreter::lexer::{KEYWORDS, Lexer, Token, TokenKind};

fn tokens(source: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(source).map(|token| (token.kind, token.text))
                      .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).map(|token| token.kind).collect()
}

#[test]
fn float_literal_is_a_single_token() {
    let mut lexer = Lexer::new("234.333");

    assert_eq!(lexer.next_token(), Token::new(TokenKind::Float, "234.333"));
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("7");
    lexer.next_token();

    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::eof());
    }
}

#[test]
fn single_character_operators() {
    use TokenKind::{
        Asterisk, Exponent, Factorial, Integer, LParen, Minus, Plus, Power, RParen, Slash,
    };

    assert_eq!(kinds("1+2-3*4/(5)!^6E7"),
               vec![Integer, Plus, Integer, Minus, Integer, Asterisk, Integer, Slash, LParen,
                    Integer, RParen, Factorial, Power, Integer, Exponent, Integer]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds(" 1 +\t2 "),
               vec![TokenKind::Integer, TokenKind::Plus, TokenKind::Integer]);
}

#[test]
fn second_decimal_point_ends_the_number() {
    assert_eq!(tokens("3.4.5"),
               vec![(TokenKind::Float, "3.4".to_string()),
                    (TokenKind::Illegal, ".".to_string()),
                    (TokenKind::Integer, "5".to_string()),]);
}

#[test]
fn trailing_decimal_point_makes_a_float() {
    assert_eq!(tokens("3."), vec![(TokenKind::Float, "3.".to_string())]);
}

#[test]
fn every_keyword_is_a_procedure() {
    for keyword in KEYWORDS {
        assert_eq!(tokens(keyword),
                   vec![(TokenKind::Procedure, (*keyword).to_string())],
                   "keyword {keyword}");
    }
}

#[test]
fn radical_is_a_procedure_in_any_position() {
    assert_eq!(tokens("√(9)")[0], (TokenKind::Procedure, "√".to_string()));
    assert_eq!(tokens("2√9"),
               vec![(TokenKind::Integer, "2".to_string()),
                    (TokenKind::Procedure, "√".to_string()),
                    (TokenKind::Integer, "9".to_string()),]);
}

#[test]
fn euler_and_exponent_are_reserved_letters() {
    assert_eq!(kinds("eE"), vec![TokenKind::Euler, TokenKind::Exponent]);
    assert_eq!(tokens("2e"),
               vec![(TokenKind::Integer, "2".to_string()), (TokenKind::Euler, "e".to_string())]);
}

#[test]
fn words_never_start_with_e() {
    assert_eq!(tokens("exp"),
               vec![(TokenKind::Euler, "e".to_string()), (TokenKind::Illegal, "xp".to_string())]);
}

#[test]
fn unknown_words_are_illegal() {
    assert_eq!(tokens("sine"), vec![(TokenKind::Illegal, "sine".to_string())]);
    assert_eq!(tokens("x"), vec![(TokenKind::Illegal, "x".to_string())]);
}

#[test]
fn unknown_characters_are_illegal() {
    assert_eq!(tokens("1$2"),
               vec![(TokenKind::Integer, "1".to_string()),
                    (TokenKind::Illegal, "$".to_string()),
                    (TokenKind::Integer, "2".to_string()),]);
}

#[test]
fn procedure_call_tokens() {
    assert_eq!(tokens("arccos(0.5)"),
               vec![(TokenKind::Procedure, "arccos".to_string()),
                    (TokenKind::LParen, "(".to_string()),
                    (TokenKind::Float, "0.5".to_string()),
                    (TokenKind::RParen, ")".to_string()),]);
}
