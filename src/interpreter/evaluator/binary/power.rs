use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::scale_by_power_of_ten,
        },
        value::core::Value,
    },
    util::num::normalize,
};

impl Evaluator {
    /// Evaluates `base ^ exponent` in floating point and normalizes the
    /// result.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// assert_eq!(Evaluator::eval_power(2.0, 10.0), Value::Integer(1024));
    /// assert!(Evaluator::eval_power(2.0, 0.5).is_float());
    /// ```
    #[must_use]
    pub fn eval_power(base: f64, exponent: f64) -> Value {
        normalize(base.powf(exponent))
    }

    /// Evaluates `degree √ radicand`, the `degree`-th root of `radicand`,
    /// as `radicand ^ (1 / degree)`.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// assert_eq!(Evaluator::eval_root(2.0, 9.0), Value::Integer(3));
    /// ```
    #[must_use]
    pub fn eval_root(degree: f64, radicand: f64) -> Value {
        normalize(radicand.powf(1.0 / degree))
    }

    /// Evaluates scientific notation `mantissa E exponent`.
    ///
    /// The mantissa may be an integer or a float; the exponent must be an
    /// integer. The result is normalized, so `2E3` is the integer `2000`.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let v = Evaluator::eval_scientific(&Value::Float(1.5), &Value::Integer(2)).unwrap();
    /// assert_eq!(v, Value::Integer(150));
    ///
    /// assert!(Evaluator::eval_scientific(&Value::Integer(2), &Value::Float(1.5)).is_err());
    /// ```
    pub fn eval_scientific(mantissa: &Value, exponent: &Value) -> EvalResult<Value> {
        let Value::Integer(power) = exponent else {
            return Err(RuntimeError::TypeError { details: format!("exp should be of type INT, instead got {exponent} of type {}",
                                                                  exponent.type_name()) });
        };

        Ok(normalize(scale_by_power_of_ten(mantissa.as_float()?, *power)))
    }
}
