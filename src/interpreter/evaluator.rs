/// Binary operator evaluation logic.
///
/// Handles arithmetic, scientific notation, powers, and roots, including the
/// promotion of mixed integer and float operands.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements sign application and factorial.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator entry points, the structural dispatch over the
/// syntax tree, and the result type used throughout evaluation.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides numeric routines shared by the operators.
pub mod utils;

/// Procedure evaluation.
///
/// Dispatches procedure calls through the procedure table and applies the
/// underlying math functions.
pub mod function;
