/// Runtime values.
///
/// Declares the `Value` enum produced by the evaluator, together with the
/// numeric promotion used when integer and float operands meet.
pub mod core;
