use tracing::trace;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// Scientific notation is routed first, before any promotion, because its
    /// exponent must stay an integer. For every other operator, a mixed
    /// integer/float pair is promoted to floats and the homogeneous pair is
    /// handed to [`Evaluator::eval_integer_infix`] or
    /// [`Evaluator::eval_float_infix`].
    ///
    /// # Example
    /// ```
    /// use calcula::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let result = Evaluator::eval_infix(InfixOperator::Add, Value::Integer(1), Value::Float(2.5));
    /// assert_eq!(result.unwrap(), Value::Float(3.5));
    /// ```
    pub fn eval_infix(operator: InfixOperator, left: Value, right: Value) -> EvalResult<Value> {
        trace!(%operator, %left, %right, "infix");

        if operator == InfixOperator::Exponent {
            return Self::eval_scientific(&left, &right);
        }

        match left.promote(right)? {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_infix(operator, a, b),
            (Value::Float(a), Value::Float(b)) => Self::eval_float_infix(operator, a, b),
            (left, right) => {
                Err(RuntimeError::TypeError { details: format!("Invalid operands: {left} {operator} {right}") })
            },
        }
    }
}
