/// Parsing errors.
///
/// Defines the diagnostics recorded while turning tokens into a syntax tree.
/// The parser collects them instead of stopping at the first one.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the failures raised while evaluating a syntax tree, such as
/// division by zero, integer overflow, or an operand of the wrong type.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The outcome of a failed [`crate::calculate`] call.
///
/// The two channels stay separate: parsing reports every diagnostic it
/// collected, evaluation reports the first error it ran into.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The input did not parse cleanly.
    Parse(Vec<ParseError>),
    /// The syntax tree could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for CalcError {}

impl From<RuntimeError> for CalcError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<Vec<ParseError>> for CalcError {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}
