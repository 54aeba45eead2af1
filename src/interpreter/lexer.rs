use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the grammar.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. A digit run is consumed greedily.
    #[regex(r"[0-9]+", parse_integer)]
    Term(i64),
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
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// An unrecognized piece of input, carrying its text. The derive never
    /// produces this variant; [`tokenize`] builds it from the error branch so
    /// that lexing stays total. A digit run too large for `i64` also ends up
    /// here.
    Invalid(String),
    /// End of input. Appended exactly once by [`tokenize`] to terminate every
    /// token sequence.
    End,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Tokenizes a line of input.
///
/// Scans the source left to right, skipping whitespace, and collects
/// `(Token, column)` pairs, where the column is the byte offset of the
/// token's start. Tokenizing is total: unrecognized characters become
/// [`Token::Invalid`] and scanning continues past them. The returned sequence
/// is always terminated by exactly one [`Token::End`].
///
/// # Parameters
/// - `source`: The line to tokenize.
///
/// # Returns
/// The token sequence, ready to be fed to the parser.
///
/// # Examples
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("12+3*4").into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Term(12),
///                 Token::Plus,
///                 Token::Term(3),
///                 Token::Star,
///                 Token::Term(4),
///                 Token::End]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let col = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, col)),
            Err(()) => tokens.push((Token::Invalid(lexer.slice().to_string()), col)),
        }
    }

    tokens.push((Token::End, source.len()));
    tokens
}
