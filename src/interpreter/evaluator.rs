/// Binary operator evaluation logic.
///
/// Arithmetic, bitwise, logical, comparison, combinatorics and the name
/// directives (`cast`, `as`, `save`).
pub mod binary;

/// Unary operator evaluation logic.
///
/// Math functions, float bit introspection and the output operators.
pub mod unary;

/// Core evaluation logic: the session, program steps and the stack machine.
pub mod core;

/// Operand extraction and result construction shared by the operator
/// handlers.
pub mod utils;
