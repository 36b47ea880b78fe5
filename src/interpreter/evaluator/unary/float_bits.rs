use std::io::Write;

use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Session},
        utils::bit_pattern,
    },
    value::core::{Number, Value},
    width::{FloatParts, Width},
};

/// Splits an operand's bit pattern with the width's float layout.
///
/// Integers are decomposed as if their bits were a float.
fn float_parts<W: Width>(name: &str, value: &Value<W>) -> EvalResult<FloatParts> {
    Ok(W::LAYOUT.decompose(bit_pattern(name, value)?))
}

impl<W: Width> Session<W> {
    /// Extracts one float bit field as a signed integer.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `value`: A numeric operand, read through its bit pattern.
    /// - `field`: Selects a field of the decomposed float.
    ///
    /// # Returns
    /// The field as an `int`, or a `TypeMismatch` for strings.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{evaluator::core::Session, value::core::Value, width::W32};
    ///
    /// let exp = Session::<W32>::eval_float_field("fexp", &Value::float(1.0), |p| p.exponent);
    /// assert_eq!(exp.unwrap(), Value::int(127));
    /// ```
    #[allow(clippy::cast_possible_wrap)]
    pub fn eval_float_field(name: &str,
                            value: &Value<W>,
                            field: impl Fn(FloatParts) -> u64)
                            -> EvalResult<Value<W>> {
        let parts = float_parts(name, value)?;
        Ok(Value::int_wrapping(i128::from(field(parts))))
    }

    /// Prints a float's sign, exponent and mantissa in decimal and then in
    /// hex. Other values are printed as they are. The operand is returned.
    ///
    /// # Parameters
    /// - `value`: The operand.
    /// - `out`: Where the description is written.
    ///
    /// # Returns
    /// `value`, unchanged.
    pub fn eval_info(&self, value: Value<W>, out: &mut dyn Write) -> EvalResult<Value<W>> {
        if let Number::Float(_) = value.number {
            let FloatParts { sign,
                             exponent,
                             mantissa, } = float_parts("info", &value)?;
            writeln!(out, "{sign}, {exponent}, {mantissa}")?;
            writeln!(out, "{sign}, 0x{exponent:X}, 0x{mantissa:X}")?;
        } else {
            writeln!(out, "{}", value.render(self.long_form))?;
        }
        out.flush()?;
        Ok(value)
    }
}
