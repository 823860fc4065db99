use calcula::{
    ast::{Expression, InfixOperator, Procedure, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::core::Parser,
    },
    parse,
};

fn render(source: &str) -> String {
    match parse(source) {
        Ok(program) => program.to_string(),
        Err(errors) => panic!("{source:?} failed to parse: {errors:?}"),
    }
}

fn diagnostics(source: &str) -> Vec<ParseError> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program();
    parser.into_errors()
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(render("1+2*3"), "(1 + (2 * 3))");
    assert_eq!(render("1*2+3"), "((1 * 2) + 3)");
    assert_eq!(render("(1+2)*3"), "((1 + 2) * 3)");
}

#[test]
fn operators_within_a_tier_group_left_to_right() {
    assert_eq!(render("1-2-3"), "((1 - 2) - 3)");
    assert_eq!(render("8/4/2"), "((8 / 4) / 2)");
    assert_eq!(render("2*3^2"), "((2 * 3) ^ 2)");
    assert_eq!(render("2^3^2"), "((2 ^ 3) ^ 2)");
}

#[test]
fn radical_in_infix_position_is_a_root() {
    assert_eq!(render("2√9"), "(2 √ 9)");
    assert_eq!(render("2√9+1"), "((2 √ 9) + 1)");
    assert_eq!(render("1+2√9"), "(1 + (2 √ 9))");

    let program = parse("3√27").unwrap();
    assert_eq!(program.statements,
               vec![Statement::Expression(Expression::infix(InfixOperator::Root,
                                                            Expression::Integer(3),
                                                            Expression::Integer(27)))]);
}

#[test]
fn radical_in_prefix_position_is_a_call() {
    let program = parse("√(9)").unwrap();
    assert_eq!(program.statements,
               vec![Statement::Expression(Expression::Call { procedure: Procedure::Sqrt,
                                                             argument:  Box::new(Expression::Integer(9)), })]);
}

#[test]
fn procedure_calls_bind_tightest() {
    assert_eq!(render("sin(30)+1"), "(sin(30) + 1)");
    assert_eq!(render("2*log(100)"), "(2 * log(100))");
    assert_eq!(render("ln(1+2)"), "ln((1 + 2))");
}

#[test]
fn euler_literal_and_implicit_multiplication() {
    assert_eq!(render("e"), "2.7182818284");
    assert_eq!(render("2e"), "(2 * 2.7182818284)");
    assert_eq!(render("2e+1"), "((2 * 2.7182818284) + 1)");
    assert_eq!(render("2*e"), "(2 * 2.7182818284)");
}

#[test]
fn factorial_is_postfix() {
    assert_eq!(render("3!"), "(3!)");
    assert_eq!(render("2+3!"), "(2 + (3!))");
    assert_eq!(render("3!*2"), "((3!) * 2)");
}

#[test]
fn sign_takes_its_operand_at_the_sum_tier() {
    assert_eq!(render("-2*3"), "(-(2 * 3))");
    assert_eq!(render("-2+3"), "((-2) + 3)");
    assert_eq!(render("+2"), "(+2)");
    assert_eq!(render("-3!"), "(-(3!))");
    assert_eq!(render("2^-1"), "(2 ^ (-1))");
}

#[test]
fn scientific_notation_is_a_product_tier_operator() {
    assert_eq!(render("2E3"), "(2 E 3)");
    assert_eq!(render("1+2E3"), "(1 + (2 E 3))");
}

#[test]
fn float_literals_keep_their_fraction_visible() {
    assert_eq!(render("1.5"), "1.5");
    assert_eq!(render("3."), "3.0");
}

#[test]
fn leftover_tokens_after_an_expression_are_reported() {
    assert_eq!(diagnostics("e2"),
               vec![ParseError::UnexpectedToken { text: "2".to_string() }]);
    assert_eq!(diagnostics("2e3"),
               vec![ParseError::UnexpectedToken { text: "3".to_string() }]);
    assert_eq!(diagnostics("sin(30) 5"),
               vec![ParseError::UnexpectedToken { text: "5".to_string() }]);
    assert_eq!(diagnostics("2(3)"),
               vec![ParseError::UnexpectedToken { text: "(".to_string() }]);
}

#[test]
fn leftover_tokens_are_still_parsed() {
    let mut parser = Parser::new(Lexer::new("1 2 3"));
    let program = parser.parse_program();

    assert_eq!(program.to_string(), "1; 2; 3");
    assert_eq!(parser.errors(),
               [ParseError::UnexpectedToken { text: "2".to_string() },
                ParseError::UnexpectedToken { text: "3".to_string() }]);
}

#[test]
fn empty_input_is_an_empty_program() {
    assert!(parse("").unwrap().statements.is_empty());
    assert!(parse("   ").unwrap().statements.is_empty());
}

#[test]
fn missing_closing_paren_is_reported() {
    assert_eq!(diagnostics("(1+2"),
               vec![ParseError::ExpectedToken { expected: TokenKind::RParen,
                                                found:    TokenKind::Eof, }]);
}

#[test]
fn procedure_requires_parenthesized_argument() {
    assert_eq!(diagnostics("sin 30"),
               vec![ParseError::ExpectedToken { expected: TokenKind::LParen,
                                                found:    TokenKind::Integer, }]);
    assert_eq!(diagnostics("√9"),
               vec![ParseError::ExpectedToken { expected: TokenKind::LParen,
                                                found:    TokenKind::Integer, }]);
}

#[test]
fn token_without_prefix_strategy_is_reported() {
    assert_eq!(diagnostics("*3"),
               vec![ParseError::NoPrefixParse { kind: TokenKind::Asterisk,
                                                text: "*".to_string(), }]);
    assert_eq!(diagnostics("foo"),
               vec![ParseError::NoPrefixParse { kind: TokenKind::Illegal,
                                                text: "foo".to_string(), }]);
    assert_eq!(diagnostics("1+"),
               vec![ParseError::NoPrefixParse { kind: TokenKind::Eof,
                                                text: String::new(), }]);
}

#[test]
fn named_procedure_is_not_an_infix_operator() {
    assert_eq!(diagnostics("2sin(30)"),
               vec![ParseError::UnexpectedToken { text: "sin".to_string() }]);
}

#[test]
fn oversized_integer_literal_is_reported() {
    assert_eq!(diagnostics("99999999999999999999"),
               vec![ParseError::InvalidLiteral { text: "99999999999999999999".to_string(),
                                                 kind: TokenKind::Integer, }]);
}

#[test]
fn parsing_continues_after_a_diagnostic() {
    let mut parser = Parser::new(Lexer::new("*3"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.to_string(), "3");
}

#[test]
fn diagnostic_messages() {
    assert_eq!(diagnostics("1+")[0].to_string(), "no prefix parse function for EOF found");
    assert_eq!(diagnostics("(1")[0].to_string(),
               "next token expected to be ), got EOF instead");
    assert_eq!(diagnostics("99999999999999999999")[0].to_string(),
               "could not parse \"99999999999999999999\" as integer");
}
