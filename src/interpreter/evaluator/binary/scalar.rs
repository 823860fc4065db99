use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    util::num::normalize,
};

impl Evaluator {
    /// Evaluates an operator over two integers.
    ///
    /// `+ - * /` stay in integer arithmetic: overflow is an error, division
    /// truncates toward zero, and dividing by zero is an error. Powers and
    /// roots go through floating point and are normalized, so `2^10` is the
    /// integer `1024` while `2^-1` is the float `0.5`.
    ///
    /// # Example
    /// ```
    /// use calcula::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_integer_infix(InfixOperator::Div, -7, 2).unwrap();
    /// assert_eq!(v, Value::Integer(-3));
    /// ```
    pub fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
        use InfixOperator::{Add, Div, Exponent, Mul, Power, Root, Sub};

        match operator {
            Add => left.checked_add(right)
                       .map(Value::Integer)
                       .ok_or(RuntimeError::Overflow),
            Sub => left.checked_sub(right)
                       .map(Value::Integer)
                       .ok_or(RuntimeError::Overflow),
            Mul => left.checked_mul(right)
                       .map(Value::Integer)
                       .ok_or(RuntimeError::Overflow),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right)
                    .map(Value::Integer)
                    .ok_or(RuntimeError::Overflow)
            },
            Exponent => Self::eval_scientific(&Value::Integer(left), &Value::Integer(right)),
            Power | Root => {
                let left = Value::Integer(left).as_float()?;
                let right = Value::Integer(right).as_float()?;
                Self::eval_float_infix(operator, left, right)
            },
        }
    }

    /// Evaluates an operator over two floats.
    ///
    /// Division follows IEEE 754, so dividing by zero yields an infinity or
    /// NaN rather than an error. Every result is normalized: `1.5 + 1.5` is
    /// the integer `3`. Scientific notation with a float exponent is a type
    /// error.
    ///
    /// # Example
    /// ```
    /// use calcula::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_float_infix(InfixOperator::Power, 4.0, 0.5).unwrap(),
    ///            Value::Integer(2));
    /// assert_eq!(Evaluator::eval_float_infix(InfixOperator::Div, 1.0, 0.0).unwrap(),
    ///            Value::Float(f64::INFINITY));
    /// ```
    pub fn eval_float_infix(operator: InfixOperator, left: f64, right: f64) -> EvalResult<Value> {
        use InfixOperator::{Add, Div, Exponent, Mul, Power, Root, Sub};

        match operator {
            Add => Ok(normalize(left + right)),
            Sub => Ok(normalize(left - right)),
            Mul => Ok(normalize(left * right)),
            Div => Ok(normalize(left / right)),
            Power => Ok(Self::eval_power(left, right)),
            Root => Ok(Self::eval_root(left, right)),
            Exponent => Self::eval_scientific(&Value::Float(left), &Value::Float(right)),
        }
    }
}
