/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the AST bottom-up, applies integer/float promotion and
/// result normalization at each node, and produces a `Value`.
///
/// # Responsibilities
/// - Evaluates literals, signs, factorial, binary operators, and procedures.
/// - Reports runtime errors such as division by zero or invalid operands.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer reads the raw expression text and produces a lazy stream of
/// tokens: numbers, operators, parentheses, function names, and the reserved
/// `e` and `E` symbols.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Classifies words against the fixed function table.
/// - Marks anything it does not recognise as illegal, leaving the failure to
///   the parser.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt parser: each token kind selects prefix, infix, or
/// postfix strategies and a binding-power table decides grouping.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Records diagnostics and keeps going instead of stopping at the first
///   one.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integer, float, or error.
/// - Provides promotion between integer and float operands.
pub mod value;
