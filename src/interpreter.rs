/// Bit widths the interpreter is instantiated at.
///
/// Declares the `Width` trait and its four implementations. A width fixes
/// the signed, unsigned and float payload types, the number of bits used for
/// wrapping and rotation, and the float bit-field layout.
///
/// The 8- and 16-bit widths have no native float type; their "minifloat"
/// payload is the signed integer of that width.
pub mod width;
/// The lexer module tokenizes program fields.
///
/// The lexer recognizes one token at a time at the head of a string: number
/// literals in decimal, hex, octal and binary, floats, parentheses, operator
/// symbols and bare words. Words and symbols are classified against the
/// operator registry.
///
/// # Responsibilities
/// - Converts input text into tokens with their source text.
/// - Distinguishes signed from unsigned decimal literals.
/// - Reports lexical errors for input no token matches.
pub mod lexer;
/// The value module defines the runtime data types for evaluation.
///
/// A value is a number of one of four kinds (signed integer, unsigned
/// integer, float or string) plus a display format that only affects how it
/// is printed.
///
/// # Responsibilities
/// - Defines `Value`, `Number`, `Kind` and `Format`.
/// - Implements coercion between kinds and bit-pattern punning.
/// - Renders values in every display format.
pub mod value;
/// The operator registry.
///
/// A static table mapping every spelling of every operator to a unary or
/// binary operation, plus the user-facing help text.
pub mod operator;
/// The named-constant table consulted when a bare word is pushed.
pub mod constants;
/// The evaluator runs RPN programs against a value stack.
///
/// The evaluator turns tokens into push and apply steps, then executes them
/// in order. It checks operand counts before every operator, dispatches to
/// the operator handlers, and manages the session's named constants.
///
/// # Responsibilities
/// - Builds and executes programs.
/// - Implements every operator for every kind.
/// - Reports runtime errors such as stack underflow or division by zero.
pub mod evaluator;
