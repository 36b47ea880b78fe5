use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Session},
        utils::operand_reals,
    },
    operator::{BinaryOp, Operation},
    value::core::Value,
    width::{FloatLike, Width},
};

impl<W: Width> Session<W> {
    /// Evaluates a binary operation between two values.
    ///
    /// `lhs` is the deeper stack entry and `rhs` the former top. The
    /// operation is routed to the handler for its family; `save` is the only
    /// one that touches the session.
    ///
    /// # Parameters
    /// - `op`: The binary operator.
    /// - `lhs`: Left operand, the second value from the top of the stack.
    /// - `rhs`: Right operand, the top of the stack.
    ///
    /// # Returns
    /// An `EvalResult<Value<W>>` holding the value to push.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{
    ///     evaluator::core::Session,
    ///     operator::BinaryOp,
    ///     value::core::Value,
    ///     width::W32,
    /// };
    ///
    /// let mut session = Session::<W32>::default();
    /// let result = session.eval_binary(BinaryOp::Sub, Value::int(3), Value::uint(5));
    ///
    /// assert_eq!(result.unwrap(), Value::uint(u32::MAX - 1));
    /// ```
    pub fn eval_binary(&mut self,
                       op: BinaryOp,
                       lhs: Value<W>,
                       rhs: Value<W>)
                       -> EvalResult<Value<W>> {
        let name = Operation::Binary(op).name();

        match op {
            BinaryOp::Add => {
                Self::eval_scalar_op(name, lhs, rhs, |a, b| Some(a.wrapping_add(b)), |a, b| {
                    Some(a.plus(b))
                })
            },
            BinaryOp::Sub => {
                Self::eval_scalar_op(name, lhs, rhs, |a, b| Some(a.wrapping_sub(b)), |a, b| {
                    Some(a.minus(b))
                })
            },
            BinaryOp::Mul => {
                Self::eval_scalar_op(name, lhs, rhs, |a, b| Some(a.wrapping_mul(b)), |a, b| {
                    Some(a.times(b))
                })
            },
            BinaryOp::Div => Self::eval_scalar_op(name,
                                                  lhs,
                                                  rhs,
                                                  |a, b| (b != 0).then(|| a.wrapping_div(b)),
                                                  <W::Float as FloatLike>::divide),
            BinaryOp::Mod => Self::eval_scalar_op(name,
                                                  lhs,
                                                  rhs,
                                                  |a, b| (b != 0).then(|| a.wrapping_rem(b)),
                                                  <W::Float as FloatLike>::modulo),
            BinaryOp::Pow => Self::eval_pow(name, lhs, rhs),
            BinaryOp::BitXor => Self::eval_bitwise(name, lhs, rhs, |a, b| a ^ b),
            BinaryOp::BitAnd => Self::eval_bitwise(name, lhs, rhs, |a, b| a & b),
            BinaryOp::BitOr => Self::eval_bitwise(name, lhs, rhs, |a, b| a | b),
            BinaryOp::BitAndInv => Self::eval_bitwise(name, lhs, rhs, |a, b| a & !b),
            BinaryOp::Shl => Self::eval_shift(name, lhs, rhs, true),
            BinaryOp::Shr => Self::eval_shift(name, lhs, rhs, false),
            BinaryOp::Rol => Self::eval_rotate(name, lhs, rhs, true),
            BinaryOp::Ror => Self::eval_rotate(name, lhs, rhs, false),
            BinaryOp::And => Self::eval_logic(name, lhs, rhs, |a, b| a && b),
            BinaryOp::Or => Self::eval_logic(name, lhs, rhs, |a, b| a || b),
            BinaryOp::Compare(comparison) => Self::eval_comparison(name, comparison, lhs, rhs),
            BinaryOp::Min => Self::eval_extreme(name, lhs, rhs, false),
            BinaryOp::Max => Self::eval_extreme(name, lhs, rhs, true),
            BinaryOp::Gcd => Self::eval_gcd(name, lhs, rhs, false),
            BinaryOp::Lcm => Self::eval_gcd(name, lhs, rhs, true),
            BinaryOp::Ncr => Self::eval_combinations(name, lhs, rhs, false),
            BinaryOp::Npr => Self::eval_combinations(name, lhs, rhs, true),
            BinaryOp::Atan2 => {
                let (y, x) = operand_reals(name, &lhs, &rhs)?;
                Ok(Value::float_from_real(y.atan2(x)))
            },
            BinaryOp::Cast => Self::eval_cast(lhs, &rhs),
            BinaryOp::As => Self::eval_as(lhs, &rhs),
            BinaryOp::Save => self.eval_save(lhs, &rhs),
        }
    }
}
