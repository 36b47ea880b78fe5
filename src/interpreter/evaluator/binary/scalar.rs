use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            utils::mismatched,
        },
        value::core::{Number, Value},
        width::{FloatLike, Integer, Width},
    },
    util::num::int_pow,
};

impl<W: Width> Session<W> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Both operands are coerced to their common kind first. Integer kinds
    /// run `int_op` on the widened values and wrap the result to the active
    /// width; floats run `float_op`. Either returning `None` means the
    /// divisor was zero.
    ///
    /// # Parameters
    /// - `name`: Operator spelling for diagnostics.
    /// - `lhs`: Left operand.
    /// - `rhs`: Right operand.
    /// - `int_op`: The operation on widened integers.
    /// - `float_op`: The operation on floats.
    ///
    /// # Returns
    /// The result in the coerced kind, or `DivideByZero` when an integer
    /// divisor is zero.
    pub fn eval_scalar_op(name: &str,
                          mut lhs: Value<W>,
                          mut rhs: Value<W>,
                          int_op: impl Fn(i128, i128) -> Option<i128>,
                          float_op: impl Fn(W::Float, W::Float) -> Option<W::Float>)
                          -> EvalResult<Value<W>> {
        lhs.coerce(&mut rhs)?;

        let result = match (&lhs.number, &rhs.number) {
            (Number::SignedInt(a), Number::SignedInt(b)) => {
                int_op(a.widen(), b.widen()).map(Value::int_wrapping)
            },
            (Number::UnsignedInt(a), Number::UnsignedInt(b)) => {
                int_op(a.widen(), b.widen()).map(Value::uint_wrapping)
            },
            (Number::Float(a), Number::Float(b)) => float_op(*a, *b).map(Value::float),
            _ => return Err(mismatched(name, &lhs, &rhs)),
        };

        result.ok_or_else(|| RuntimeError::DivideByZero { lhs: lhs.to_string(),
                                                          rhs: rhs.to_string(), })
    }

    /// Evaluates `lhs` raised to `rhs`.
    ///
    /// Integer kinds use repeated squaring with the exponent's magnitude, so
    /// a negative exponent behaves like its absolute value. Floats use the
    /// native power function.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `lhs`: The base.
    /// - `rhs`: The exponent. Integer exponents use their magnitude.
    ///
    /// # Returns
    /// `lhs` raised to `rhs`, wrapping at the width for integers.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{evaluator::core::Session, value::core::Value, width::W8};
    ///
    /// let result = Session::<W8>::eval_pow("pow", Value::uint(3), Value::uint(5)).unwrap();
    /// assert_eq!(result, Value::uint(243));
    ///
    /// let wrapped = Session::<W8>::eval_pow("pow", Value::uint(2), Value::uint(8)).unwrap();
    /// assert_eq!(wrapped, Value::uint(0));
    /// ```
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub fn eval_pow(name: &str, lhs: Value<W>, rhs: Value<W>) -> EvalResult<Value<W>> {
        Self::eval_scalar_op(name,
                             lhs,
                             rhs,
                             |a, b| Some(int_pow(a as u128, b.unsigned_abs()) as i128),
                             |a, b| Some(a.power(b)))
    }
}
