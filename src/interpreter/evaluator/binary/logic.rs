use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            utils::flag,
        },
        value::core::Value,
        width::Width,
    },
};

impl<W: Width> Session<W> {
    /// Evaluates logical `and` or `or`.
    ///
    /// Operands are coerced to a common kind; nonzero values are true. The
    /// result is `1` or `0` in that kind.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `lhs`: Left operand.
    /// - `rhs`: Right operand.
    /// - `combine`: The truth function.
    ///
    /// # Returns
    /// `1` or `0` in the coerced kind.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{evaluator::core::Session, value::core::Value, width::W64};
    ///
    /// let result = Session::<W64>::eval_logic("and", Value::float(-0.0), Value::int(3), |a, b| a && b);
    /// assert_eq!(result.unwrap(), Value::float(0.0));
    /// ```
    pub fn eval_logic(name: &str,
                      mut lhs: Value<W>,
                      mut rhs: Value<W>,
                      combine: impl Fn(bool, bool) -> bool)
                      -> EvalResult<Value<W>> {
        let kind = lhs.coerce(&mut rhs)?;
        let truth = |value: &Value<W>| {
            value.truthy()
                 .ok_or_else(|| RuntimeError::type_mismatch(name, value.kind().name()))
        };

        flag(name, kind, combine(truth(&lhs)?, truth(&rhs)?))
    }
}
