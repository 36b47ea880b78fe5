use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Format, Kind, Number, Value},
        width::{FloatLike, Integer, Width},
    },
};

impl<W: Width> Value<W> {
    /// Computes the kind `self` must take to be combined with `other`.
    ///
    /// The higher-precedence kind wins, except that a negative `SignedInt`
    /// paired with an `UnsignedInt` keeps both signed. The rule is symmetric.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{
    ///     value::core::{Kind, Value},
    ///     width::W64,
    /// };
    ///
    /// let neg = Value::<W64>::int(-1);
    /// let five = Value::<W64>::uint(5);
    ///
    /// assert_eq!(neg.coercion_target(&five), Kind::SignedInt);
    /// assert_eq!(five.coercion_target(&neg), Kind::SignedInt);
    /// assert_eq!(Value::<W64>::int(1).coercion_target(&five), Kind::UnsignedInt);
    /// ```
    #[must_use]
    pub fn coercion_target(&self, other: &Self) -> Kind {
        let (mine, theirs) = (self.kind(), other.kind());

        if (mine == Kind::UnsignedInt && other.is_negative_int())
           || (theirs == Kind::UnsignedInt && self.is_negative_int())
        {
            return Kind::SignedInt;
        }

        mine.max(theirs)
    }

    /// Converts both operands to their common kind and returns it.
    ///
    /// Fails with a type mismatch when either operand is a string.
    ///
    /// # Parameters
    /// - `other`: The other operand, converted in place.
    ///
    /// # Returns
    /// The kind both operands now share.
    pub fn coerce(&mut self, other: &mut Self) -> EvalResult<Kind> {
        let target = self.coercion_target(other);
        self.coerce_exec(target)?;
        other.coerce_exec(target)?;
        Ok(target)
    }

    /// Numerically converts the value to `kind`.
    ///
    /// Integers widen to floats, floats truncate toward zero (saturating at
    /// the integer bounds), and signed and unsigned integers reinterpret
    /// each other at the active width. The display format is kept.
    ///
    /// # Parameters
    /// - `kind`: The numeric kind to convert to.
    ///
    /// # Returns
    /// `Ok(())`, or a `TypeMismatch` when either side is a string.
    pub fn coerce_exec(&mut self, kind: Kind) -> EvalResult<()> {
        if self.kind() == kind {
            return Ok(());
        }

        let from = self.kind();
        let cannot_convert =
            || RuntimeError::TypeMismatch { details: format!("cannot convert {from} to {kind}") };

        let number = match (&self.number, kind) {
            (Number::String(_), _) | (_, Kind::String) => return Err(cannot_convert()),
            (number, Kind::SignedInt) => Number::SignedInt(match number {
                                             Number::UnsignedInt(u) => W::Int::wrap(u.widen()),
                                             Number::Float(f) => W::Int::from_f64(f.to_real()),
                                             _ => return Err(cannot_convert()),
                                         }),
            (number, Kind::UnsignedInt) => Number::UnsignedInt(match number {
                                               Number::SignedInt(i) => W::Uint::wrap(i.widen()),
                                               Number::Float(f) => W::Uint::from_f64(f.to_real()),
                                               _ => return Err(cannot_convert()),
                                           }),
            (number, Kind::Float) => Number::Float(match number {
                                         Number::SignedInt(i) => W::Float::from_real(i.to_f64()),
                                         Number::UnsignedInt(u) => {
                                             W::Float::from_real(u.to_f64())
                                         },
                                         _ => return Err(cannot_convert()),
                                     }),
        };

        self.number = number;
        Ok(())
    }

    /// Reinterprets the bit pattern as `kind` without converting the value.
    ///
    /// # Parameters
    /// - `kind`: The numeric kind to read the bits as.
    ///
    /// # Returns
    /// `Ok(())`, or a `TypeMismatch` when either side is a string.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{
    ///     value::core::{Kind, Value},
    ///     width::W64,
    /// };
    ///
    /// let mut v = Value::<W64>::float(1.0);
    /// v.pun(Kind::UnsignedInt).unwrap();
    /// assert_eq!(v, Value::uint(0x3FF0_0000_0000_0000));
    ///
    /// v.pun(Kind::Float).unwrap();
    /// assert_eq!(v, Value::float(1.0));
    /// ```
    pub fn pun(&mut self, kind: Kind) -> EvalResult<()> {
        if self.kind() == kind {
            return Ok(());
        }

        let punned = self.bits()
                         .and_then(|bits| Self::from_bits(kind, bits))
                         .ok_or_else(|| RuntimeError::TypeMismatch {
                             details: format!("cannot pun {} to {kind}", self.kind()),
                         })?;

        self.number = punned.number;
        Ok(())
    }

    /// Changes only the display format.
    pub const fn set_format(&mut self, format: Format) {
        self.format = format;
    }
}
