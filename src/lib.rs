//! # calcula
//!
//! calcula is a single-line scientific calculator written in Rust.
//! It tokenizes, parses (Pratt style), and evaluates arithmetic expressions
//! over integers and floats, with factorial, powers, roots, scientific
//! notation, trigonometry in degrees, logarithms, and the constant `e`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Program,
    error::{CalcError, ParseError},
    interpreter::{evaluator::core::Evaluator, lexer::Lexer, parser::core::Parser, value::core::Value},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expression` enum and related types that
/// represent an input as a tree. The AST is built by the parser and traversed
/// by the evaluator.
///
/// # Responsibilities
/// - Defines literal, sign, factorial, binary, and procedure-call nodes.
/// - Renders trees in a fully parenthesized form for inspection.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Parse diagnostics and runtime errors are kept as separate types, matching
/// the two phases that produce them.
pub mod error;
/// Orchestrates the process of evaluating an expression.
///
/// This module ties together lexing, parsing, evaluation, and value
/// representations.
pub mod interpreter;
/// General utilities for safe numeric conversion and normalization.
pub mod util;

/// Parses an expression into a syntax tree.
///
/// # Errors
/// Returns every diagnostic recorded by the parser if there was at least one.
///
/// # Examples
/// ```
/// use calcula::parse;
///
/// let program = parse("2e").unwrap();
/// assert_eq!(program.to_string(), "(2 * 2.7182818284)");
///
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let errors = parser.into_errors();
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(errors)
    }
}

/// Parses and evaluates an expression.
///
/// # Errors
/// Returns [`CalcError::Parse`] with all diagnostics if the expression does
/// not parse, or [`CalcError::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use calcula::{calculate, interpreter::value::core::Value};
///
/// assert_eq!(calculate("1+2*3").unwrap(), Value::Integer(7));
/// assert_eq!(calculate("4^0.5").unwrap(), Value::Integer(2));
/// assert_eq!(calculate("1+2.5").unwrap(), Value::Float(3.5));
///
/// // Factorial of a float is an evaluation error.
/// assert!(calculate("2.5!").is_err());
/// ```
pub fn calculate(source: &str) -> Result<Value, CalcError> {
    debug!(source, "calculating");

    let program = parse(source)?;
    let value = Evaluator.eval_program(&program)?;
    Ok(value)
}
