/// Dispatch of unary operators to their handlers.
pub mod core;

/// Math functions, rounding, `abs`, `sgn` and `ord`.
pub mod math;

/// Float bit-field introspection: `fsgn`, `fexp`, `fmantissa` and `info`.
pub mod float_bits;

/// The output operators `end`, `sep` and `quiet`.
pub mod output;
