#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operand had a type the operator does not accept.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// An operand had the right type but lies outside the operator's domain.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// Integer division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// There was nothing to evaluate.
    EmptyProgram,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { details } => write!(f, "Type error: {details}."),
            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::EmptyProgram => write!(f, "Nothing to evaluate."),
        }
    }
}

impl std::error::Error for RuntimeError {}
