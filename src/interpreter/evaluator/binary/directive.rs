use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            utils::name_operand,
        },
        value::core::{Format, Kind, Value},
        width::Width,
    },
};

fn unknown_target(name: &str) -> RuntimeError {
    RuntimeError::UnknownCastTarget { name: name.to_string() }
}

impl<W: Width> Session<W> {
    /// Numerically converts `lhs` to the kind named by `rhs`.
    ///
    /// The result uses the default display format.
    ///
    /// # Parameters
    /// - `lhs`: The value to convert.
    /// - `rhs`: The target kind's name.
    ///
    /// # Returns
    /// The converted value, or `UnknownCastTarget` for a name that is not a kind.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{evaluator::core::Session, value::core::Value, width::W64};
    ///
    /// let v = Session::<W64>::eval_cast(Value::float(2.9), &Value::string("int")).unwrap();
    /// assert_eq!(v, Value::int(2));
    /// ```
    pub fn eval_cast(lhs: Value<W>, rhs: &Value<W>) -> EvalResult<Value<W>> {
        let name = name_operand("cast", rhs)?;
        let kind = Kind::from_name(name).ok_or_else(|| unknown_target(name))?;
        lhs.require_number("cast")?;

        let mut value = Value::new(lhs.number);
        value.coerce_exec(kind)?;
        Ok(value)
    }

    /// Reinterprets `lhs` as the kind named by `rhs`, or changes its display
    /// format when `rhs` names a format instead.
    ///
    /// Punning resets the format to decimal.
    ///
    /// # Parameters
    /// - `lhs`: The value to reinterpret.
    /// - `rhs`: A kind name or a display format name.
    ///
    /// # Returns
    /// The reinterpreted value, or `lhs` with its display format changed.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{
    ///     evaluator::core::Session,
    ///     value::core::{Format, Value},
    ///     width::W32,
    /// };
    ///
    /// let bits = Session::<W32>::eval_as(Value::float(1.0), &Value::string("uint")).unwrap();
    /// assert_eq!(bits, Value::uint(0x3F80_0000));
    ///
    /// let hex = Session::<W32>::eval_as(Value::uint(255), &Value::string("hex")).unwrap();
    /// assert_eq!(hex.format, Format::Hex);
    /// ```
    pub fn eval_as(lhs: Value<W>, rhs: &Value<W>) -> EvalResult<Value<W>> {
        let name = name_operand("as", rhs)?;

        if let Some(kind) = Kind::from_name(name) {
            let mut value = Value::new(lhs.number);
            value.pun(kind)?;
            return Ok(value);
        }

        let format = Format::from_name(name).ok_or_else(|| unknown_target(name))?;
        let mut value = lhs;
        value.set_format(format);
        Ok(value)
    }

    /// Stores `lhs` under the name `rhs` and returns `lhs` so the value stays
    /// on the stack.
    ///
    /// # Parameters
    /// - `lhs`: The value to store.
    /// - `rhs`: The constant's name.
    ///
    /// # Returns
    /// `lhs`, unchanged.
    pub fn eval_save(&mut self, lhs: Value<W>, rhs: &Value<W>) -> EvalResult<Value<W>> {
        let name = name_operand("save", rhs)?;
        self.constants.save(name, lhs.clone());
        Ok(lhs)
    }
}
