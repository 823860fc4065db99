use crate::{
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::normalize,
};

/// How a procedure treats angles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AngleMode {
    /// No angle conversion.
    Direct,
    /// The argument is read in degrees and converted to radians before the
    /// function is applied.
    DegreesIn,
    /// The result is converted from radians to degrees after the function is
    /// applied.
    DegreesOut,
}

/// Converts degrees to radians as `value * π / 180`.
#[must_use]
pub fn degrees_to_radians(value: f64) -> f64 {
    value * std::f64::consts::PI / 180.0
}

/// Converts radians to degrees as `value * 180 / π`.
#[must_use]
pub fn radians_to_degrees(value: f64) -> f64 {
    value * 180.0 / std::f64::consts::PI
}

/// Applies a real function to a numeric value under an angle mode.
///
/// Integers are widened to floats first. The result is normalized, so
/// `sin(90)` in degrees is the integer `1`.
///
/// # Example
/// ```
/// use calcula::interpreter::{
///     evaluator::function::builtin::{AngleMode, apply},
///     value::core::Value,
/// };
///
/// let r = apply(f64::sqrt, AngleMode::Direct, &Value::Integer(16)).unwrap();
/// assert_eq!(r, Value::Integer(4));
///
/// let r = apply(f64::sin, AngleMode::DegreesIn, &Value::Integer(90)).unwrap();
/// assert_eq!(r, Value::Integer(1));
/// ```
pub fn apply(function: fn(f64) -> f64, mode: AngleMode, argument: &Value) -> EvalResult<Value> {
    let x = argument.as_float()?;

    let result = match mode {
        AngleMode::Direct => function(x),
        AngleMode::DegreesIn => function(degrees_to_radians(x)),
        AngleMode::DegreesOut => radians_to_degrees(function(x)),
    };

    Ok(normalize(result))
}
