use crate::ast::{BinaryOperator, Expr};

/// Evaluates an expression tree and returns its numeric value.
///
/// Evaluation is a pure structural recursion with no side effects and no
/// mutable state: a literal widens its integer to `f64`, and a binary node
/// evaluates both children and combines them with the corresponding
/// floating-point operator. Division by zero follows IEEE 754 and yields an
/// infinity or NaN, never an error, so evaluation is total and bounded by the
/// size of the tree.
///
/// # Parameters
/// - `expr`: Expression tree to evaluate.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Example
/// ```
/// use reckon::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::evaluate,
/// };
///
/// let tree = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 2 }),
///                             op:    BinaryOperator::Add,
///                             right: Box::new(Expr::Literal { value: 3 }), };
///
/// assert_eq!(evaluate(&tree), 5.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn evaluate(expr: &Expr) -> f64 {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match expr {
        Expr::Literal { value } => *value as f64,
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left);
            let right = evaluate(right);

            match op {
                Add => left + right,
                Sub => left - right,
                Mul => left * right,
                Div => left / right,
            }
        },
    }
}
