use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Computes `n!` by iterative multiplication.
///
/// `0!` and `1!` are both `1`.
///
/// # Errors
/// - `InvalidArgument` for negative `n`.
/// - `Overflow` when the product does not fit in an `i64` (from `21!`).
///
/// # Example
/// ```
/// use calcula::interpreter::evaluator::utils::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(-1).is_err());
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: i64) -> EvalResult<i64> {
    if n < 0 {
        return Err(RuntimeError::InvalidArgument { details: format!("Factorial not defined for negative integer {n}") });
    }

    (2..=n).try_fold(1_i64, i64::checked_mul)
           .ok_or(RuntimeError::Overflow)
}

/// Scales `mantissa` by `10^exponent` one power of ten at a time.
///
/// Negative exponents divide instead of multiply. The loop stops early once
/// the value can no longer change (zero or infinite).
///
/// # Example
/// ```
/// use calcula::interpreter::evaluator::utils::scale_by_power_of_ten;
///
/// assert_eq!(scale_by_power_of_ten(2.5, 3), 2500.0);
/// assert_eq!(scale_by_power_of_ten(1.0, 400), f64::INFINITY);
/// ```
#[must_use]
pub fn scale_by_power_of_ten(mantissa: f64, exponent: i64) -> f64 {
    let mut result = mantissa;

    for _ in 0..exponent.unsigned_abs() {
        if result == 0.0 || !result.is_finite() {
            break;
        }
        if exponent > 0 {
            result *= 10.0;
        } else {
            result /= 10.0;
        }
    }

    result
}
