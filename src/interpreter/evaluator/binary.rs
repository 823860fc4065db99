/// Binary operator dispatch and operand promotion.
pub mod core;
/// Powers, roots, and scientific notation.
pub mod power;
/// Homogeneous integer and float arithmetic.
pub mod scalar;
