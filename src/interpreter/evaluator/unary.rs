use crate::{
    ast::{PostfixOperator, PrefixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::factorial,
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Applies a sign to a value.
    ///
    /// Both `+` and `-` negate their operand. A leading `+` behaving like `-`
    /// is how the calculator has always evaluated signs, and results depend on
    /// it.
    ///
    /// # Example
    /// ```
    /// use calcula::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Minus, &Value::Float(2.5)).unwrap();
    /// assert_eq!(v, Value::Float(-2.5));
    /// ```
    pub fn eval_prefix(operator: PrefixOperator, value: &Value) -> EvalResult<Value> {
        match operator {
            PrefixOperator::Plus | PrefixOperator::Minus => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow),
                Value::Float(r) => Ok(Value::Float(-r)),
                Value::Error(_) => {
                    Err(RuntimeError::TypeError { details: format!("Cannot apply {operator} to {value}") })
                },
            },
        }
    }

    /// Applies a postfix operator to a value.
    ///
    /// Factorial is only defined for non-negative integers; float operands,
    /// negative operands, and results beyond `i64` are errors.
    ///
    /// # Example
    /// ```
    /// use calcula::{
    ///     ast::PostfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_postfix(PostfixOperator::Factorial, &Value::Integer(4)).unwrap();
    /// assert_eq!(v, Value::Integer(24));
    ///
    /// assert!(Evaluator::eval_postfix(PostfixOperator::Factorial, &Value::Float(4.0)).is_err());
    /// ```
    pub fn eval_postfix(operator: PostfixOperator, value: &Value) -> EvalResult<Value> {
        match (operator, value) {
            (PostfixOperator::Factorial, Value::Integer(n)) => factorial(*n).map(Value::Integer),
            (PostfixOperator::Factorial, _) => {
                Err(RuntimeError::TypeError { details: format!("Factorial not defined for {value} of type {}",
                                                               value.type_name()) })
            },
        }
    }
}
