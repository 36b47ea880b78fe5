/// Dispatch of binary operators to their handlers.
pub mod core;

/// Scalar arithmetic: `add`, `sub`, `mul`, `div`, `mod` and `pow`.
pub mod scalar;

/// Bitwise operators, shifts and rotations.
pub mod bitwise;

/// Logical `and` and `or`.
pub mod logic;

/// Comparisons and `min`/`max`.
pub mod comparison;

/// `gcd`, `lcm`, `ncr`, `npr` and the factorial they share with the unary
/// operator.
pub mod combinatorics;

/// Operators whose right operand is a name: `cast`, `as` and `save`.
pub mod directive;
