use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            utils::{bit_pattern, from_pattern, shift_amount},
        },
        value::core::{Kind, Value},
        width::Width,
    },
    util::num::{rotate_left, rotate_right},
};

impl<W: Width> Session<W> {
    /// Picks the kind a bitwise result takes.
    ///
    /// If either operand is a float, both keep their bit patterns and the
    /// result is punned back to a float. Otherwise the operands are coerced
    /// as for arithmetic.
    fn bitwise_kind(name: &str, lhs: &mut Value<W>, rhs: &mut Value<W>) -> EvalResult<Kind> {
        if lhs.kind() == Kind::Float || rhs.kind() == Kind::Float {
            lhs.require_number(name)?;
            rhs.require_number(name)?;
            return Ok(Kind::Float);
        }
        lhs.coerce(rhs)
    }

    /// Combines the bit patterns of both operands.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `lhs`: Left operand.
    /// - `rhs`: Right operand.
    /// - `op`: The operation on the two bit patterns.
    ///
    /// # Returns
    /// The combined pattern in the coerced kind, or a `TypeMismatch` for strings.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{evaluator::core::Session, value::core::Value, width::W64};
    ///
    /// let cleared =
    ///     Session::<W64>::eval_bitwise("bitandinv", Value::uint(0b1111), Value::uint(0b0101), |a, b| a & !b)
    ///         .unwrap();
    /// assert_eq!(cleared, Value::uint(0b1010));
    ///
    /// // Float operands are combined through their bit patterns.
    /// let flipped =
    ///     Session::<W64>::eval_bitwise("xor", Value::float(1.0), Value::uint(1 << 63), |a, b| a ^ b)
    ///         .unwrap();
    /// assert_eq!(flipped, Value::float(-1.0));
    /// ```
    pub fn eval_bitwise(name: &str,
                        mut lhs: Value<W>,
                        mut rhs: Value<W>,
                        op: impl Fn(u64, u64) -> u64)
                        -> EvalResult<Value<W>> {
        let kind = Self::bitwise_kind(name, &mut lhs, &mut rhs)?;
        let result = op(bit_pattern(name, &lhs)?, bit_pattern(name, &rhs)?);
        from_pattern(name, kind, result)
    }

    /// Shifts `lhs` by `rhs` bits.
    ///
    /// The amount is taken modulo the width. A right shift is arithmetic for
    /// signed integers and logical otherwise; float operands shift their bit
    /// pattern.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `lhs`: The value to shift.
    /// - `rhs`: The shift amount, reduced modulo the width.
    /// - `left`: Shift left when `true`, right otherwise.
    ///
    /// # Returns
    /// The shifted value in the coerced kind.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn eval_shift(name: &str,
                      mut lhs: Value<W>,
                      mut rhs: Value<W>,
                      left: bool)
                      -> EvalResult<Value<W>> {
        let kind = Self::bitwise_kind(name, &mut lhs, &mut rhs)?;
        let amount = shift_amount(name, &rhs)?;

        if kind == Kind::Float {
            let bits = bit_pattern(name, &lhs)?;
            let shifted = if left { bits << amount } else { bits >> amount };
            return from_pattern(name, kind, shifted);
        }

        let value = lhs.to_wide()
                       .ok_or_else(|| RuntimeError::type_mismatch(name, lhs.kind().name()))?;
        let shifted = if left { value << amount } else { value >> amount };

        from_pattern(name, kind, shifted as u64)
    }

    /// Rotates the bit pattern of `lhs` by `rhs`, modulo the width.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `lhs`: The value to rotate.
    /// - `rhs`: The rotation amount, reduced modulo the width.
    /// - `left`: Rotate left when `true`, right otherwise.
    ///
    /// # Returns
    /// The rotated value in the coerced kind.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{evaluator::core::Session, value::core::Value, width::W16};
    ///
    /// let rotated = Session::<W16>::eval_rotate("ror", Value::uint(1), Value::uint(17), false);
    /// assert_eq!(rotated.unwrap(), Value::uint(0x8000));
    /// ```
    pub fn eval_rotate(name: &str,
                       mut lhs: Value<W>,
                       mut rhs: Value<W>,
                       left: bool)
                       -> EvalResult<Value<W>> {
        let kind = Self::bitwise_kind(name, &mut lhs, &mut rhs)?;
        let amount = shift_amount(name, &rhs)?;
        let bits = bit_pattern(name, &lhs)?;

        let rotated = if left {
            rotate_left(bits, amount, W::BITS)
        } else {
            rotate_right(bits, amount, W::BITS)
        };

        from_pattern(name, kind, rotated)
    }
}
