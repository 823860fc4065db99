use tracing::trace;

use crate::{
    ast::Procedure,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::builtin::{self, AngleMode},
        },
        value::core::Value,
    },
};

/// Defines the procedure table.
///
/// Each entry provides:
/// - the procedure,
/// - the angle handling applied around the function,
/// - the real function itself.
///
/// The macro produces `ProcedureDef` (entry metadata) and `definition`, an
/// exhaustive lookup from procedure to its entry.
macro_rules! procedures {
    (
        $(
            $procedure:ident => { angle: $angle:ident, func: $func:expr $(,)? }
        ),* $(,)?
    ) => {
        /// One row of the procedure table.
        #[derive(Debug, Clone, Copy)]
        pub struct ProcedureDef {
            /// Angle conversion applied around `func`.
            pub angle: AngleMode,
            /// The underlying real function.
            pub func:  fn(f64) -> f64,
        }

        /// Looks up the table row for a procedure.
        ///
        /// # Example
        /// ```
        /// use calcula::{
        ///     ast::Procedure,
        ///     interpreter::evaluator::function::{builtin::AngleMode, core::definition},
        /// };
        ///
        /// assert_eq!(definition(Procedure::Log).angle, AngleMode::Direct);
        /// assert_eq!(definition(Procedure::Cos).angle, AngleMode::DegreesIn);
        /// ```
        #[must_use]
        pub fn definition(procedure: Procedure) -> ProcedureDef {
            match procedure {
                $(
                    Procedure::$procedure => ProcedureDef { angle: AngleMode::$angle,
                                                            func:  $func },
                )*
            }
        }
    };
}

// The inverse functions read their argument in degrees like the direct ones,
// so `arcsin(x)` is `asin(x * π / 180)` in radians. Switching them to
// `DegreesOut` makes them return degrees instead.
procedures! {
    Sin    => { angle: DegreesIn, func: f64::sin },
    Cos    => { angle: DegreesIn, func: f64::cos },
    Tan    => { angle: DegreesIn, func: f64::tan },
    Arcsin => { angle: DegreesIn, func: f64::asin },
    Arccos => { angle: DegreesIn, func: f64::acos },
    Arctan => { angle: DegreesIn, func: f64::atan },
    Log    => { angle: Direct,    func: f64::log10 },
    Ln     => { angle: Direct,    func: f64::ln },
    Sqrt   => { angle: Direct,    func: f64::sqrt },
}

impl Evaluator {
    /// Evaluates a procedure call on an already evaluated argument.
    ///
    /// # Example
    /// ```
    /// use calcula::{
    ///     ast::Procedure,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_call(Procedure::Log, &Value::Integer(100)).unwrap();
    /// assert_eq!(v, Value::Integer(2));
    /// ```
    pub fn eval_call(procedure: Procedure, argument: &Value) -> EvalResult<Value> {
        let def = definition(procedure);
        trace!(%procedure, angle = ?def.angle, %argument, "call");
        builtin::apply(def.func, def.angle, argument)
    }
}
