use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a factor, the atomic level of the grammar.
///
/// A factor is either an integer literal or a parenthesized sub-expression.
/// The parenthesized form consumes the opening `(`, parses the enclosed
/// expression, and then requires a closing `)`; a missing one yields
/// [`ParseError::ExpectedClosingParen`] at the column of the unmatched `(`.
/// Any other token in factor position, including [`Token::Invalid`] and
/// [`Token::End`], yields [`ParseError::ExpectedTerm`].
///
/// Grammar: `factor := TERM | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed factor; a grouped expression is returned as-is (no wrapper
/// node).
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Term(value), _)) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Literal { value })
        },
        Some((Token::LParen, col)) => {
            let col = *col;
            tokens.next();
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { col }),
            }
        },
        Some((token, col)) => Err(ParseError::ExpectedTerm { token: format!("{token:?}"),
                                                             col:   *col, }),
        None => Err(ParseError::UnexpectedEndOfInput { col: 0 }),
    }
}
