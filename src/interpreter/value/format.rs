use crate::{
    interpreter::{
        value::core::{Format, Number, Value},
        width::{FloatLike, Width},
    },
    util::{
        ascii::ascii_name,
        num::{is_little_endian, reverse_bytes},
    },
};

/// Decimal places shown for floats in short form.
const SHORT_DECIMALS: usize = 6;

impl<W: Width> Value<W> {
    /// Renders the value in its display format.
    ///
    /// Long form pads hex, octal and binary output to the full width and
    /// prints floats with more decimals. Strings always print their text
    /// unless the format is [`Format::TypeName`].
    ///
    /// # Parameters
    /// - `long_form`: Pad based digits to the full width and print native
    ///   floats with the width's long precision.
    ///
    /// # Returns
    /// The rendered text.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{
    ///     value::core::{Format, Value},
    ///     width::W16,
    /// };
    ///
    /// let v = Value::<W16>::uint(0x2A).with_format(Format::Hex);
    /// assert_eq!(v.render(false), "0x2A");
    /// assert_eq!(v.render(true), "0x002A");
    ///
    /// let v = Value::<W16>::uint(5).with_format(Format::Binary);
    /// assert_eq!(v.render(false), "0b101");
    /// assert_eq!(v.render(true), "0b0000000000000101");
    /// ```
    #[must_use]
    pub fn render(&self, long_form: bool) -> String {
        if self.format == Format::TypeName {
            return self.kind().name().to_string();
        }

        let Some(bits) = self.bits() else {
            return self.as_text().unwrap_or_default().to_string();
        };

        match self.format {
            Format::Decimal | Format::TypeName => self.render_decimal(long_form),
            Format::Hex => render_hex::<W>(bits, long_form),
            Format::Octal => render_octal::<W>(bits, long_form),
            Format::Binary => render_binary::<W>(bits, long_form),
            Format::BigEndianBytes => render_bytes::<W>(bits, long_form, is_little_endian()),
            Format::LittleEndianBytes => render_bytes::<W>(bits, long_form, !is_little_endian()),
            Format::Char => self.to_wide().map(ascii_name).unwrap_or_default().into_owned(),
        }
    }

    fn render_decimal(&self, long_form: bool) -> String {
        match &self.number {
            Number::SignedInt(i) => i.to_string(),
            Number::UnsignedInt(u) => u.to_string(),
            Number::Float(f) if W::Float::NATIVE => {
                let decimals = if long_form { W::LONG_DECIMALS } else { SHORT_DECIMALS };
                format!("{:.decimals$}", f.to_real())
            },
            Number::Float(f) => format!("{}", f.to_real()),
            Number::String(text) => text.clone(),
        }
    }
}

fn render_hex<W: Width>(bits: u64, long_form: bool) -> String {
    if long_form {
        let digits = (W::BITS / 4) as usize;
        format!("0x{bits:0digits$X}")
    } else {
        format!("0x{bits:X}")
    }
}

fn render_octal<W: Width>(bits: u64, long_form: bool) -> String {
    if long_form {
        let digits = W::BITS.div_ceil(3) as usize;
        format!("0o{bits:0digits$o}")
    } else {
        format!("0o{bits:o}")
    }
}

fn render_binary<W: Width>(bits: u64, long_form: bool) -> String {
    if long_form {
        let digits = W::BITS as usize;
        format!("0b{bits:0digits$b}")
    } else {
        format!("0b{bits:b}")
    }
}

/// Hex of the bytes in the requested order: reversed when the host stores
/// them the other way round.
fn render_bytes<W: Width>(bits: u64, long_form: bool, reverse: bool) -> String {
    if reverse {
        render_hex::<W>(reverse_bytes(bits, W::BITS), long_form)
    } else {
        render_hex::<W>(bits, long_form)
    }
}
