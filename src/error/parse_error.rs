#[derive(Debug)]
/// Represents all errors that can occur while parsing a line of input.
///
/// Every variant carries the 0-based byte column of the offending token;
/// messages render it 1-based for the reader.
pub enum ParseError {
    /// A factor position held neither a term nor an open parenthesis.
    ExpectedTerm {
        /// The token encountered.
        token: String,
        /// The column where the error occurred.
        col:   usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The column of the unmatched `(`.
        col: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The column where the error occurred.
        col:   usize,
    },
    /// Reached the end of the token sequence unexpectedly.
    UnexpectedEndOfInput {
        /// The column where the error occurred.
        col: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedTerm { token, col } => {
                write!(f,
                       "Error at column {}: Expected term or '(' but found {token}.",
                       col + 1)
            },

            Self::ExpectedClosingParen { col } => write!(f,
                                                         "Error at column {}: Expected closing parenthesis ')' but none found.",
                                                         col + 1),

            Self::UnexpectedTrailingTokens { token, col } => write!(f,
                                                                    "Error at column {}: Extra tokens after expression. Check your input: {token}",
                                                                    col + 1),

            Self::UnexpectedEndOfInput { col } => {
                write!(f, "Error at column {}: Unexpected end of input.", col + 1)
            },
        }
    }
}

impl std::error::Error for ParseError {}
