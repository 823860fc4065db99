/// Euler's number as used by the calculator.
///
/// This is a fixed ten-digit approximation rather than
/// [`std::f64::consts::E`]; results built from `e` depend on this exact value.
pub const EULER: f64 = 2.718_281_828_4;

/// Represents a prefix (sign) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// `+x`
    Plus,
    /// `-x`
    Minus,
}

/// Represents a postfix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PostfixOperator {
    /// Factorial (`x!`).
    Factorial,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Scientific notation (`E`): `m E x` is `m * 10^x`.
    Exponent,
    /// Exponentiation (`^`)
    Power,
    /// Radical (`√`): `a √ b` is the `a`-th root of `b`.
    Root,
}

/// A named single-argument function applied with call syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Procedure {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `arcsin`
    Arcsin,
    /// `arccos`
    Arccos,
    /// `arctan`
    Arctan,
    /// `log`, base 10.
    Log,
    /// `ln`, natural logarithm.
    Ln,
    /// `√` in prefix position, square root.
    Sqrt,
}

impl Procedure {
    /// Resolves a procedure token's text.
    ///
    /// # Example
    /// ```
    /// use calcula::ast::Procedure;
    ///
    /// assert_eq!(Procedure::from_name("√"), Some(Procedure::Sqrt));
    /// assert_eq!(Procedure::from_name("sinh"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let procedure = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "arcsin" => Self::Arcsin,
            "arccos" => Self::Arccos,
            "arctan" => Self::Arctan,
            "log" => Self::Log,
            "ln" => Self::Ln,
            "√" => Self::Sqrt,
            _ => return None,
        };
        Some(procedure)
    }

    /// The source spelling of the procedure.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Arctan => "arctan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "√",
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant owns its children, so an expression is always a finite tree.
/// The parser only builds a node once all of its children parsed
/// successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// An integer literal.
    Integer(i64),
    /// A floating-point literal, including the Euler constant.
    Float(f64),
    /// A sign applied to an operand (e.g. `-x`).
    Prefix {
        /// The sign.
        operator: PrefixOperator,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// A postfix operation (e.g. `x!`).
    Postfix {
        /// The operator.
        operator: PostfixOperator,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// A binary operation.
    Infix {
        /// The operator.
        operator: InfixOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A procedure call (e.g. `sin(30)`).
    Call {
        /// The procedure being called.
        procedure: Procedure,
        /// The parenthesized argument.
        argument:  Box<Self>,
    },
}

impl Expression {
    /// The Euler literal `e`.
    #[must_use]
    pub const fn euler() -> Self {
        Self::Float(EULER)
    }

    /// Builds a binary node.
    #[must_use]
    pub fn infix(operator: InfixOperator, left: Self, right: Self) -> Self {
        Self::Infix { operator,
                      left: Box::new(left),
                      right: Box::new(right) }
    }
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression(Expression),
}

/// The root of a parsed input.
///
/// The grammar yields a single statement for well-formed input. Trailing
/// tokens that start a new expression become further statements, and the
/// parser reports each of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for PostfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Factorial => write!(f, "!"),
        }
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exponent => "E",
            Self::Power => "^",
            Self::Root => "√",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Renders the tree fully parenthesized, so grouping is visible.
///
/// # Example
/// ```
/// use calcula::parse;
///
/// let program = parse("1+2*3").unwrap();
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
/// ```
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Prefix { operator, operand } => write!(f, "({operator}{operand})"),
            Self::Postfix { operator, operand } => write!(f, "({operand}{operator})"),
            Self::Infix { operator,
                          left,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::Call { procedure, argument } => write!(f, "{procedure}({argument})"),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
