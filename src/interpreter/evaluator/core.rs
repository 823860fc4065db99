use tracing::debug;

use crate::{
    ast::{Expression, Program, Statement},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Tree-walking evaluator.
///
/// The evaluator holds no state: evaluating a tree has no effect other than
/// producing its value, so one instance can be shared freely.
///
/// # Example
/// ```
/// use calcula::{
///     interpreter::{evaluator::core::Evaluator, value::core::Value},
///     parse,
/// };
///
/// let program = parse("1+2*3").unwrap();
/// assert_eq!(Evaluator.evaluate(&program), Value::Integer(7));
///
/// let program = parse("1/0").unwrap();
/// assert!(Evaluator.evaluate(&program).is_error());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Evaluates a program and returns its value.
    ///
    /// Runtime errors are folded into [`Value::Error`].
    #[must_use]
    pub fn evaluate(&self, program: &Program) -> Value {
        self.eval_program(program)
            .unwrap_or_else(Value::from)
    }

    /// Evaluates every statement in order and returns the value of the last.
    ///
    /// An empty program is an error.
    pub fn eval_program(&self, program: &Program) -> EvalResult<Value> {
        let mut result = None;

        for statement in &program.statements {
            result = Some(self.eval_statement(statement)?);
        }

        let value = result.ok_or(RuntimeError::EmptyProgram)?;
        debug!(%value, "evaluated program");
        Ok(value)
    }

    /// Evaluates a single statement.
    pub fn eval_statement(&self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Expression(expression) => self.eval(expression),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the structural dispatch over the syntax tree: literals evaluate
    /// to themselves, operators evaluate their operands left to right and
    /// return the first error encountered.
    pub fn eval(&self, expression: &Expression) -> EvalResult<Value> {
        match expression {
            Expression::Integer(value) => Ok(Value::Integer(*value)),
            Expression::Float(value) => Ok(Value::Float(*value)),
            Expression::Prefix { operator, operand } => {
                let operand = self.eval(operand)?;
                Self::eval_prefix(*operator, &operand)
            },
            Expression::Postfix { operator, operand } => {
                let operand = self.eval(operand)?;
                Self::eval_postfix(*operator, &operand)
            },
            Expression::Infix { operator,
                                left,
                                right, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_infix(*operator, left, right)
            },
            Expression::Call { procedure, argument } => {
                let argument = self.eval(argument)?;
                Self::eval_call(*procedure, &argument)
            },
        }
    }
}
