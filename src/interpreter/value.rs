/// Coercion, promotion and punning between value kinds.
///
/// Implements the precedence rule used before binary operators, the numeric
/// conversion performed by `cast`, and the bit-pattern reinterpretation
/// performed by `as`.
pub mod coerce;
/// Core value types.
///
/// Declares [`core::Value`], its payload [`core::Number`], the kind and format
/// tags, and constructors used by literals and operators.
pub mod core;
/// Rendering of values in each display format, in short and long form.
pub mod format;
