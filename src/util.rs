/// Numeric conversion helpers.
///
/// This module provides safe conversions between integer and floating-point
/// values, and the normalization rule that turns whole-valued float results
/// back into integers.
pub mod num;
