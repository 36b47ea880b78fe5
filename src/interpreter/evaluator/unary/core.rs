use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::combinatorics::factorial,
            core::{EvalResult, Session},
            utils::{bit_pattern, flag, from_pattern},
        },
        operator::{Operation, UnaryOp},
        value::core::Value,
        width::Width,
    },
};

impl<W: Width> Session<W> {
    /// Evaluates a unary operation on a value.
    ///
    /// Output operators write to `out`. For `end`, `sep` and `quiet` the
    /// returned value is the operand itself, and the evaluator drops it
    /// instead of pushing it back.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: The popped operand.
    /// - `out`: Destination for printed output.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{
    ///     evaluator::core::Session,
    ///     operator::UnaryOp,
    ///     value::core::Value,
    ///     width::W64,
    /// };
    ///
    /// let mut session = Session::<W64>::default();
    /// let mut out = Vec::new();
    ///
    /// let v = session.eval_unary(UnaryOp::Abs, Value::int(-5), &mut out).unwrap();
    /// assert_eq!(v, Value::int(5));
    ///
    /// session.eval_unary(UnaryOp::End, Value::uint(7), &mut out).unwrap();
    /// assert_eq!(out, b"7\n");
    /// ```
    pub fn eval_unary(&mut self,
                      op: UnaryOp,
                      value: Value<W>,
                      out: &mut dyn Write)
                      -> EvalResult<Value<W>> {
        let name = Operation::Unary(op).name();

        match op {
            UnaryOp::End => self.eval_print(value, "\n", out),
            UnaryOp::Sep => self.eval_print(value, " ", out),
            UnaryOp::Quiet => Ok(value),
            UnaryOp::Info => self.eval_info(value, out),
            UnaryOp::Fsgn => Self::eval_float_field(name, &value, |parts| parts.sign),
            UnaryOp::Fexp => Self::eval_float_field(name, &value, |parts| parts.exponent),
            UnaryOp::Fmantissa => Self::eval_float_field(name, &value, |parts| parts.mantissa),
            UnaryOp::Not => {
                let truth =
                    value.truthy().ok_or_else(|| RuntimeError::type_mismatch(name, "string"))?;
                flag(name, value.kind(), !truth)
            },
            UnaryOp::Invert => from_pattern(name, value.kind(), !bit_pattern(name, &value)?),
            UnaryOp::Sqrt => Self::eval_real(name, &value, f64::sqrt),
            UnaryOp::Sin => Self::eval_real(name, &value, f64::sin),
            UnaryOp::Cos => Self::eval_real(name, &value, f64::cos),
            UnaryOp::Tan => Self::eval_real(name, &value, f64::tan),
            UnaryOp::Asin => Self::eval_real(name, &value, f64::asin),
            UnaryOp::Acos => Self::eval_real(name, &value, f64::acos),
            UnaryOp::Atan => Self::eval_real(name, &value, f64::atan),
            UnaryOp::Ln => Self::eval_real(name, &value, f64::ln),
            UnaryOp::Log => Self::eval_real(name, &value, f64::log10),
            UnaryOp::Inverse => Self::eval_real(name, &value, |x| x.powi(-1)),
            UnaryOp::Abs => Self::eval_abs(name, &value),
            UnaryOp::Sgn => Self::eval_sgn(name, &value),
            UnaryOp::Floor => Self::eval_rounding(name, value, f64::floor),
            UnaryOp::Round => Self::eval_rounding(name, value, f64::round),
            UnaryOp::Ceil => Self::eval_rounding(name, value, f64::ceil),
            UnaryOp::Trunc => Self::eval_rounding(name, value, f64::trunc),
            UnaryOp::Ord => Self::eval_ord(&value),
            UnaryOp::Factorial => factorial(name, &value),
        }
    }
}
