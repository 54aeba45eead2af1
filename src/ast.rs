/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a binary tree: a leaf holds a literal value, and an internal node
/// combines exactly two sub-trees with a binary operator. Each node owns its
/// children outright, so dropping the root releases the whole tree. The tree
/// is built bottom-up by the parser and consumed by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal integer value.
    Literal {
        /// The constant value.
        value: i64,
    },
    /// A binary operation (addition, subtraction, multiplication or division).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a binary operator.
///
/// The grammar has exactly four, all left-associative: `*` and `/` bind
/// tighter than `+` and `-`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    /// Writes the operator as it appears in source text.
    ///
    /// # Example
    /// ```
    /// use reckon::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mul.to_string(), "*");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
