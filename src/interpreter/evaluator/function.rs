/// Math routines applied by procedures.
///
/// Wraps the floating-point functions and the angle conversions they need.
pub mod builtin;

/// Procedure table and call evaluation.
pub mod core;
