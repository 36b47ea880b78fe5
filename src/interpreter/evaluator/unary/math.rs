use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            utils::operand_real,
        },
        value::core::{Number, Value},
        width::{FloatLike, Integer, Width},
    },
};

impl<W: Width> Session<W> {
    /// Applies a real function, promoting integer operands to float.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `value`: A numeric operand.
    /// - `f`: The real function to apply.
    ///
    /// # Returns
    /// `f(value)` as a float.
    pub fn eval_real(name: &str,
                     value: &Value<W>,
                     f: impl Fn(f64) -> f64)
                     -> EvalResult<Value<W>> {
        Ok(Value::float_from_real(f(operand_real(name, value)?)))
    }

    /// Absolute value in the operand's own kind. The most negative signed
    /// integer wraps to itself.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `value`: A numeric operand.
    ///
    /// # Returns
    /// The magnitude in the operand's kind.
    pub fn eval_abs(name: &str, value: &Value<W>) -> EvalResult<Value<W>> {
        match &value.number {
            Number::SignedInt(i) => Ok(Value::int_wrapping(i.widen().abs())),
            Number::UnsignedInt(u) => Ok(Value::uint(*u)),
            Number::Float(f) => Ok(Value::float(f.magnitude())),
            Number::String(_) => Err(RuntimeError::type_mismatch(name, "string")),
        }
    }

    /// `-1`, `0` or `1` in the operand's own kind. Unsigned values are never
    /// negative.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `value`: A numeric operand.
    ///
    /// # Returns
    /// `-1`, `0` or `1` in the operand's kind.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{evaluator::core::Session, value::core::Value, width::W16};
    ///
    /// assert_eq!(Session::<W16>::eval_sgn("sgn", &Value::int(-9)).unwrap(), Value::int(-1));
    /// assert_eq!(Session::<W16>::eval_sgn("sgn", &Value::uint(9)).unwrap(), Value::uint(1));
    /// ```
    pub fn eval_sgn(name: &str, value: &Value<W>) -> EvalResult<Value<W>> {
        match &value.number {
            Number::SignedInt(i) => Ok(Value::int_wrapping(i.widen().signum())),
            Number::UnsignedInt(u) => Ok(Value::uint_wrapping(i128::from(u.widen() != 0))),
            Number::Float(f) => {
                let x = f.to_real();
                let sign = if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    x
                };
                Ok(Value::float_from_real(sign))
            },
            Number::String(_) => Err(RuntimeError::type_mismatch(name, "string")),
        }
    }

    /// Rounds a float with `f`. Integers are returned unchanged, without
    /// their display format.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `value`: A numeric operand.
    /// - `f`: The rounding function applied to floats.
    ///
    /// # Returns
    /// The rounded float, or the integer operand itself.
    pub fn eval_rounding(name: &str,
                         value: Value<W>,
                         f: impl Fn(f64) -> f64)
                         -> EvalResult<Value<W>> {
        match value.number {
            Number::Float(x) => Ok(Value::float_from_real(f(x.to_real()))),
            Number::String(_) => Err(RuntimeError::type_mismatch(name, "string")),
            number => Ok(Value::new(number)),
        }
    }

    /// The code of the first character of a string, or of the decimal
    /// rendering of a number.
    ///
    /// # Parameters
    /// - `value`: Any operand.
    ///
    /// # Returns
    /// The code of the first character as an `int`, or `0` for empty text.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{evaluator::core::Session, value::core::Value, width::W64};
    ///
    /// assert_eq!(Session::<W64>::eval_ord(&Value::string("A")).unwrap(), Value::int(65));
    /// assert_eq!(Session::<W64>::eval_ord(&Value::int(-3)).unwrap(), Value::int(45));
    /// ```
    pub fn eval_ord(value: &Value<W>) -> EvalResult<Value<W>> {
        let text = match value.as_text() {
            Some(text) => text.to_string(),
            None => Value::<W>::new(value.number.clone()).render(false),
        };
        let code = text.chars().next().map_or(0, u32::from);
        Ok(Value::int_wrapping(i128::from(code)))
    }
}
