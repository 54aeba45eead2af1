//! # reckon
//!
//! reckon is an interactive evaluator for infix integer arithmetic written in
//! Rust. It tokenizes, parses, and evaluates expressions built from integer
//! literals, the four binary operators `+ - * /`, and parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::evaluate,
        lexer::{Token, tokenize},
        parser::core::parse_expression,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an arithmetic expression as a tree. The AST is built
/// by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression and operator types for the whole grammar.
/// - Encodes operator precedence structurally, so the evaluator never needs to
///   consult it.
pub mod ast;
/// Provides the error types raised while parsing.
///
/// This module defines all errors that can be raised while turning a line of
/// input into an expression tree. It standardizes error reporting and carries
/// the column of each failure for user feedback.
///
/// # Responsibilities
/// - Defines the error enum for all syntactic failure modes.
/// - Attaches column positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the evaluation of a line of input.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from raw text to a numeric result.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a single line of input and returns its numeric value.
///
/// This function runs the full pipeline on the provided source string: it
/// tokenizes the line, parses the token sequence into an expression tree,
/// rejects any input left over after the expression, and evaluates the tree.
/// Each call owns its token sequence and tree exclusively; nothing is kept
/// between calls.
///
/// # Errors
/// Returns a [`ParseError`] if the line is not a single well-formed
/// expression.
///
/// # Examples
/// ```
/// use reckon::eval_line;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(eval_line("2 + 3 * 4").unwrap(), 14.0);
///
/// // An unterminated group is a syntax error, not a crash.
/// assert!(eval_line("(2 + 3").is_err());
/// ```
pub fn eval_line(source: &str) -> Result<f64, ParseError> {
    let tokens = tokenize(source);
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter)?;

    match iter.peek() {
        Some((Token::End, _)) | None => {},
        Some((token, col)) => {
            return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                              col:   *col, });
        },
    }

    Ok(evaluate(&expr))
}
