use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Values are never mutated: every operation builds a new one from its
/// operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// An evaluation failure, carrying its message.
    Error(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<RuntimeError> for Value {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error.to_string())
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers are widened, rounding to the nearest `f64` above 2^53. Only an
    /// error value fails to convert.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_float().unwrap(), 10.0);
    /// assert_eq!(Value::Integer(1 << 60).as_float().unwrap(), 2f64.powi(60));
    /// assert!(Value::Error("boom".into()).as_float().is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            Self::Error(message) => {
                Err(RuntimeError::TypeError { details: format!("expected a number, found error '{message}'") })
            },
        }
    }

    /// Promotes an integer to a float when the other operand is a float.
    ///
    /// Homogeneous pairs are returned unchanged, so callers only ever see
    /// `(Integer, Integer)` or `(Float, Float)` for numeric operands.
    ///
    /// # Example
    /// ```
    /// use calcula::interpreter::value::core::Value;
    ///
    /// let (l, r) = Value::Integer(1).promote(Value::Float(2.5)).unwrap();
    /// assert_eq!((l, r), (Value::Float(1.0), Value::Float(2.5)));
    /// ```
    pub fn promote(self, other: Self) -> EvalResult<(Self, Self)> {
        match (&self, &other) {
            (Self::Float(_), Self::Integer(_)) => {
                let right = Self::Float(other.as_float()?);
                Ok((self, right))
            },
            (Self::Integer(_), Self::Float(_)) => Ok((Self::Float(self.as_float()?), other)),
            _ => Ok((self, other)),
        }
    }

    /// Short type name used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INT",
            Self::Float(_) => "FLOAT",
            Self::Error(_) => "ERROR",
        }
    }

    /// Returns `true` if the value is [`Value::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Value::Float`].
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Returns `true` if the value is [`Value::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}
