use crate::interpreter::value::core::Value;

/// `2^63`, the first float above the `i64` range.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `f64` to `i64` when it is finite, whole, and inside the `i64`
/// range. Returns `None` otherwise.
///
/// ## Example
/// ```
/// use calcula::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < -I64_UPPER_BOUND || value >= I64_UPPER_BOUND {
        return None;
    }
    Some(value as i64)
}

/// Collapses a whole-valued float into an integer value.
///
/// Applied to the output of float-producing operations: the decision depends
/// on the result alone, not on the operand types that produced it. Infinite,
/// NaN, fractional, and out-of-range results stay floats.
///
/// ## Example
/// ```
/// use calcula::{interpreter::value::core::Value, util::num::normalize};
///
/// assert_eq!(normalize(2.0), Value::Integer(2));
/// assert_eq!(normalize(2.5), Value::Float(2.5));
/// assert_eq!(normalize(f64::INFINITY), Value::Float(f64::INFINITY));
/// ```
#[must_use]
pub fn normalize(value: f64) -> Value {
    f64_to_i64_exact(value).map_or(Value::Float(value), Value::Integer)
}
