/// Core parser state and the precedence-climbing loop.
///
/// Holds the two-token window, the diagnostics collected so far, the binding
/// power table, and the entry points for whole programs and expressions.
pub mod core;
/// Binary and postfix parsing.
///
/// Implements the strategies that continue an already parsed expression:
/// arithmetic operators, scientific notation, the binary radical, implicit
/// multiplication by `e`, and factorial.
pub mod binary;
/// Prefix parsing.
///
/// Implements the strategies that start an expression: literals, signs,
/// grouping, the Euler constant, and procedure calls.
pub mod unary;
/// Token window helpers shared by all parsing strategies.
pub mod utils;
