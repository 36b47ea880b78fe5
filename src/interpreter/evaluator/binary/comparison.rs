use std::cmp::Ordering;

use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Session},
        utils::{flag, mismatched},
    },
    operator::Comparison,
    value::core::{Number, Value},
    width::{Integer, Width},
};

impl<W: Width> Session<W> {
    /// Orders two values that already share a kind.
    ///
    /// `None` means the values are unordered (a `NaN` is involved).
    fn compare_same_kind(name: &str,
                         lhs: &Value<W>,
                         rhs: &Value<W>)
                         -> EvalResult<Option<Ordering>> {
        match (&lhs.number, &rhs.number) {
            (Number::SignedInt(a), Number::SignedInt(b)) => Ok(Some(a.widen().cmp(&b.widen()))),
            (Number::UnsignedInt(a), Number::UnsignedInt(b)) => {
                Ok(Some(a.widen().cmp(&b.widen())))
            },
            (Number::Float(a), Number::Float(b)) => Ok(a.partial_cmp(b)),
            _ => Err(mismatched(name, lhs, rhs)),
        }
    }

    /// Evaluates a comparison.
    ///
    /// Operands are coerced first; the result is `1` or `0` in the coerced
    /// kind.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `comparison`: The relation to test.
    /// - `lhs`: Left operand.
    /// - `rhs`: Right operand.
    ///
    /// # Returns
    /// `1` if the relation holds and `0` otherwise.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{
    ///     evaluator::core::Session,
    ///     operator::Comparison,
    ///     value::core::Value,
    ///     width::W64,
    /// };
    ///
    /// let result = Session::<W64>::eval_comparison("lt", Comparison::Lt, Value::int(-1), Value::uint(5));
    /// assert_eq!(result.unwrap(), Value::int(1));
    /// ```
    pub fn eval_comparison(name: &str,
                           comparison: Comparison,
                           mut lhs: Value<W>,
                           mut rhs: Value<W>)
                           -> EvalResult<Value<W>> {
        let kind = lhs.coerce(&mut rhs)?;
        let holds = match Self::compare_same_kind(name, &lhs, &rhs)? {
            Some(ordering) => comparison.test(ordering, Ordering::Equal),
            None => comparison == Comparison::Neq,
        };
        flag(name, kind, holds)
    }

    /// Returns the smaller (`max == false`) or larger of two values, after
    /// coercing them to a common kind. Ties and `NaN` return the left
    /// operand.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `lhs`: Left operand.
    /// - `rhs`: Right operand.
    /// - `max`: Pick the larger operand instead of the smaller.
    ///
    /// # Returns
    /// One of the coerced operands.
    pub fn eval_extreme(name: &str,
                        mut lhs: Value<W>,
                        mut rhs: Value<W>,
                        max: bool)
                        -> EvalResult<Value<W>> {
        lhs.coerce(&mut rhs)?;
        let wanted = if max { Ordering::Less } else { Ordering::Greater };
        let chosen = match Self::compare_same_kind(name, &lhs, &rhs)? {
            Some(ordering) if ordering == wanted => rhs,
            _ => lhs,
        };
        Ok(Value::new(chosen.number))
    }
}
