use reckon::{
    eval_line,
    interpreter::lexer::{Token, tokenize},
};

fn assert_value(source: &str, expected: f64) {
    match eval_line(source) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {source:?}"),
        Err(e) => panic!("Expression {source:?} failed: {e}"),
    }
}

fn assert_syntax_error(source: &str) {
    if eval_line(source).is_ok() {
        panic!("Expression {source:?} succeeded but was expected to fail")
    }
}

#[test]
fn tokenizing_splits_terms_and_operators() {
    let tokens: Vec<Token> = tokenize("12+3*4").into_iter().map(|(token, _)| token).collect();

    assert_eq!(tokens,
               vec![Token::Term(12),
                    Token::Plus,
                    Token::Term(3),
                    Token::Star,
                    Token::Term(4),
                    Token::End]);
}

#[test]
fn tokenizing_skips_whitespace_and_records_columns() {
    assert_eq!(tokenize(" 10 / 2"),
               vec![(Token::Term(10), 1),
                    (Token::Slash, 4),
                    (Token::Term(2), 6),
                    (Token::End, 7)]);
}

#[test]
fn tokenizing_never_fails() {
    let tokens: Vec<Token> = tokenize("2 % 3").into_iter().map(|(token, _)| token).collect();

    assert_eq!(tokens,
               vec![Token::Term(2),
                    Token::Invalid("%".to_string()),
                    Token::Term(3),
                    Token::End]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("1+10/2", 6.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20.0);
    assert_value("2*(3+4)", 14.0);
    assert_value("((((7))))", 7.0);
}

#[test]
fn same_precedence_operators_group_from_the_left() {
    assert_value("10-2-3", 5.0);
    assert_value("100/5/2", 10.0);
    assert_value("10-2+3", 11.0);
}

#[test]
fn division_is_floating_point() {
    assert_value("7/2", 3.5);
    assert_value("10/4", 2.5);
}

#[test]
fn internal_whitespace_is_insignificant() {
    assert_value(" 12 + 3 ", 15.0);
    assert_value("12+3", 15.0);
}

#[test]
fn division_by_zero_yields_a_sentinel() {
    assert_value("1/0", f64::INFINITY);
    assert_value("(0-1)/0", f64::NEG_INFINITY);
    assert!(eval_line("0/0").unwrap().is_nan());
}

#[test]
fn malformed_factors_are_syntax_errors() {
    assert_syntax_error("");
    assert_syntax_error(")");
    assert_syntax_error("+");
    assert_syntax_error("1+");
    assert_syntax_error("1++2");
    assert_syntax_error("%2");
}

#[test]
fn unterminated_groups_are_syntax_errors() {
    assert_syntax_error("(");
    assert_syntax_error("(2+3");
    assert_syntax_error("((1)");
}

#[test]
fn trailing_input_is_a_syntax_error() {
    assert_syntax_error("1 2");
    assert_syntax_error("2+3)");
    assert_syntax_error("2 % 3");
}

#[test]
fn oversized_literals_are_syntax_errors() {
    assert_syntax_error("99999999999999999999");
}

#[test]
fn parsing_an_empty_token_sequence_is_an_error() {
    use reckon::interpreter::parser::core::parse_expression;

    let tokens: Vec<(Token, usize)> = Vec::new();

    assert!(parse_expression(&mut tokens.iter().peekable()).is_err());
}

#[test]
fn evaluation_is_idempotent() {
    let source = "12*(3+4)-5";

    assert_eq!(eval_line(source).unwrap(), eval_line(source).unwrap());
    assert_value(source, 79.0);
}
