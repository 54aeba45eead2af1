/// The evaluator module computes the value of an expression tree.
///
/// The evaluator traverses the AST and combines literal values with the
/// arithmetic operators recorded in the tree. It is the final stage of the
/// pipeline and cannot fail.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing the four arithmetic operations.
/// - Widens integer literals to floating point.
pub mod evaluator;
/// The lexer module tokenizes a line of input for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to a meaningful element such as a number, an
/// operator, or a bracket. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with column positions.
/// - Skips whitespace and consumes digit runs greedily.
/// - Marks unrecognized characters instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs an AST that captures operator precedence and associativity
/// structurally.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes via recursive descent.
/// - Validates the grammar, reporting errors with column info.
pub mod parser;
