use std::f64::consts::{E, PI};

use tracing::debug;

use crate::interpreter::{
    value::core::Value,
    width::{FloatLike, Integer, Width},
};

/// Named values resolved when a bare word is pushed.
///
/// Names compare case-insensitively. The table starts with the mathematical
/// and width-dependent limit constants, and `save` can overwrite them or add
/// new ones for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantTable<W: Width> {
    entries: Vec<(String, Value<W>)>,
}

impl<W: Width> Default for ConstantTable<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Width> ConstantTable<W> {
    /// Creates the initial table for the width.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{constants::ConstantTable, value::core::Value, width::W8};
    ///
    /// let table = ConstantTable::<W8>::new();
    /// assert_eq!(table.get("IntMax"), Some(&Value::int(127)));
    /// assert_eq!(table.get("bitmax"), Some(&Value::int(7)));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let layout = W::LAYOUT;
        let float = Value::<W>::float_from_real;

        let entries = vec![("pi", float(PI)),
                           ("e", float(E)),
                           ("%e", float(E)),
                           ("inf", float(f64::INFINITY)),
                           ("-inf", float(f64::NEG_INFINITY)),
                           ("nan", float(f64::NAN)),
                           ("true", Value::int_wrapping(1)),
                           ("false", Value::int_wrapping(0)),
                           ("intmax", Value::int(W::Int::MAX)),
                           ("uintmax", Value::uint(W::Uint::MAX)),
                           ("floatmax", Value::float(W::Float::MAX)),
                           ("floatmin", Value::float(W::Float::MIN_POSITIVE)),
                           ("bitmax", Value::int_wrapping(i128::from(W::BITS - 1))),
                           ("fmantmask", Value::int_wrapping(i128::from(layout.mantissa_mask()))),
                           ("fexpmask", Value::int_wrapping(i128::from(layout.exponent_mask()))),
                           ("fexpbit", Value::int_wrapping(i128::from(layout.mantissa)))];

        Self { entries: entries.into_iter()
                               .map(|(name, value)| (name.to_string(), value))
                               .collect(), }
    }

    /// Looks a constant up, ignoring ASCII case.
    ///
    /// # Parameters
    /// - `name`: The constant's name in any case.
    ///
    /// # Returns
    /// The current value, if the name is known.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value<W>> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Stores `value` under `name`, replacing any entry with the same name.
    ///
    /// # Parameters
    /// - `name`: The constant's name in any case.
    /// - `value`: The value to store.
    pub fn save(&mut self, name: &str, value: Value<W>) {
        debug!(name, "saving constant");

        match self.entries.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}
