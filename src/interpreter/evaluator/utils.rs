use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Kind, Value},
        width::Width,
    },
};

/// Returns the numeric value of an operand as an `f64`.
///
/// # Parameters
/// - `operator`: Spelling used in the error.
/// - `value`: The operand.
///
/// # Returns
/// The operand as a real, or a `TypeMismatch` for strings.
pub fn operand_real<W: Width>(operator: &str, value: &Value<W>) -> EvalResult<f64> {
    value.to_real()
         .ok_or_else(|| RuntimeError::type_mismatch(operator, value.kind().name()))
}

/// Returns both operands as `f64`, left first.
pub fn operand_reals<W: Width>(operator: &str,
                               lhs: &Value<W>,
                               rhs: &Value<W>)
                               -> EvalResult<(f64, f64)> {
    Ok((operand_real(operator, lhs)?, operand_real(operator, rhs)?))
}

/// Returns the bit pattern of a numeric operand.
pub fn bit_pattern<W: Width>(operator: &str, value: &Value<W>) -> EvalResult<u64> {
    value.bits()
         .ok_or_else(|| RuntimeError::type_mismatch(operator, value.kind().name()))
}

/// Returns the text of an operand that must be a name.
pub fn name_operand<'v, W: Width>(operator: &str, value: &'v Value<W>) -> EvalResult<&'v str> {
    value.as_text().ok_or_else(|| RuntimeError::TypeMismatch {
                       details: format!("{operator}: expected a name, found {}", value.kind()),
                   })
}

/// Builds a numeric value of `kind` from a bit pattern.
pub fn from_pattern<W: Width>(operator: &str, kind: Kind, bits: u64) -> EvalResult<Value<W>> {
    Value::from_bits(kind, bits).ok_or_else(|| RuntimeError::type_mismatch(operator, kind.name()))
}

/// Builds `1` or `0` in a numeric kind.
pub fn flag<W: Width>(operator: &str, kind: Kind, set: bool) -> EvalResult<Value<W>> {
    Value::flag(kind, set).ok_or_else(|| RuntimeError::type_mismatch(operator, kind.name()))
}

/// The error for operands that coerced to the same kind but still do not
/// pair up.
pub fn mismatched<W: Width>(operator: &str, lhs: &Value<W>, rhs: &Value<W>) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("{operator}: cannot combine {} and {}",
                                                  lhs.kind(),
                                                  rhs.kind()) }
}

/// The shift or rotate amount of an operand, reduced modulo the width.
///
/// Float amounts are rounded to the nearest integer first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn shift_amount<W: Width>(operator: &str, value: &Value<W>) -> EvalResult<u32> {
    let raw = match value.kind() {
        Kind::Float => operand_real(operator, value)?.round() as i128,
        _ => value.to_wide()
                  .ok_or_else(|| RuntimeError::type_mismatch(operator, value.kind().name()))?,
    };
    Ok(raw.rem_euclid(i128::from(W::BITS)) as u32)
}

