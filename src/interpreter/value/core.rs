use std::fmt;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::Literal,
        width::{FloatLike, Integer, Width},
    },
};

/// The kind of a [`Value`], ordered by coercion precedence.
///
/// `SignedInt < UnsignedInt < Float < String`. `String` never takes part in
/// numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Fixed-width two's complement integer.
    SignedInt,
    /// Fixed-width unsigned integer.
    UnsignedInt,
    /// Floating point (integer-backed at 8 and 16 bits).
    Float,
    /// Text, used for names and unresolved words.
    String,
}

impl Kind {
    /// Every kind, in precedence order.
    pub const ALL: [Self; 4] = [Self::SignedInt, Self::UnsignedInt, Self::Float, Self::String];

    /// The user-facing name, as accepted by `cast` and `as`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SignedInt => "int",
            Self::UnsignedInt => "uint",
            Self::Float => "float",
            Self::String => "string",
        }
    }

    /// Looks a kind up by name, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::value::core::Kind;
    ///
    /// assert_eq!(Kind::from_name("UINT"), Some(Kind::UnsignedInt));
    /// assert_eq!(Kind::from_name("hex"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a [`Value`] is rendered. Never affects arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Format {
    /// The native representation.
    #[default]
    Decimal,
    /// `0x` followed by the bit pattern in uppercase hex.
    Hex,
    /// `0o` followed by the bit pattern in octal.
    Octal,
    /// `0b` followed by the bit pattern.
    Binary,
    /// Hex of the bytes in big-endian order.
    BigEndianBytes,
    /// Hex of the bytes in little-endian order.
    LittleEndianBytes,
    /// The ASCII name of the value.
    Char,
    /// The name of the value's kind.
    TypeName,
}

impl Format {
    /// Every format.
    pub const ALL: [Self; 8] = [Self::Decimal,
                                Self::Hex,
                                Self::Octal,
                                Self::Binary,
                                Self::BigEndianBytes,
                                Self::LittleEndianBytes,
                                Self::Char,
                                Self::TypeName];

    /// The user-facing name, as accepted by `as`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Decimal => "dec",
            Self::Hex => "hex",
            Self::Octal => "oct",
            Self::Binary => "bin",
            Self::BigEndianBytes => "big",
            Self::LittleEndianBytes => "little",
            Self::Char => "chr",
            Self::TypeName => "type",
        }
    }

    /// Looks a format up by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.name().eq_ignore_ascii_case(name))
    }
}

/// The payload of a [`Value`]. The variant is the value's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Number<W: Width> {
    /// A signed integer of the active width.
    SignedInt(W::Int),
    /// An unsigned integer of the active width.
    UnsignedInt(W::Uint),
    /// A float of the active width.
    Float(W::Float),
    /// Owned text.
    String(String),
}

/// A typed value on the evaluation stack.
///
/// The payload and its kind cannot disagree: the kind is read off the
/// [`Number`] variant. The display format only matters when the value is
/// printed.
#[derive(Debug, Clone, PartialEq)]
pub struct Value<W: Width> {
    /// The typed payload.
    pub number: Number<W>,
    /// How the value prints.
    pub format: Format,
}

impl<W: Width> Value<W> {
    /// Wraps a payload with the default display format.
    #[must_use]
    pub const fn new(number: Number<W>) -> Self {
        Self { number,
               format: Format::Decimal }
    }

    /// A `SignedInt` value.
    #[must_use]
    pub const fn int(value: W::Int) -> Self {
        Self::new(Number::SignedInt(value))
    }

    /// An `UnsignedInt` value.
    #[must_use]
    pub const fn uint(value: W::Uint) -> Self {
        Self::new(Number::UnsignedInt(value))
    }

    /// A `Float` value.
    #[must_use]
    pub const fn float(value: W::Float) -> Self {
        Self::new(Number::Float(value))
    }

    /// A `String` value.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::new(Number::String(text.into()))
    }

    /// A `SignedInt` built from a wide integer, wrapped to the active width.
    #[must_use]
    pub fn int_wrapping(value: i128) -> Self {
        Self::int(W::Int::wrap(value))
    }

    /// An `UnsignedInt` built from a wide integer, wrapped to the active
    /// width.
    #[must_use]
    pub fn uint_wrapping(value: i128) -> Self {
        Self::uint(W::Uint::wrap(value))
    }

    /// A `Float` built from an `f64`.
    #[must_use]
    pub fn float_from_real(value: f64) -> Self {
        Self::float(W::Float::from_real(value))
    }

    /// Replaces the display format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// The value's kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self.number {
            Number::SignedInt(_) => Kind::SignedInt,
            Number::UnsignedInt(_) => Kind::UnsignedInt,
            Number::Float(_) => Kind::Float,
            Number::String(_) => Kind::String,
        }
    }

    /// The text of a `String` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.number {
            Number::String(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this is a `SignedInt` holding a negative value.
    #[must_use]
    pub fn is_negative_int(&self) -> bool {
        matches!(self.number, Number::SignedInt(i) if i.widen() < 0)
    }

    /// The bit pattern of a numeric value, masked to the active width.
    ///
    /// Returns `None` for strings.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn bits(&self) -> Option<u64> {
        let raw = match &self.number {
            Number::SignedInt(i) => i.widen() as u64,
            Number::UnsignedInt(u) => u.widen() as u64,
            Number::Float(f) => f.to_raw_bits(),
            Number::String(_) => return None,
        };
        Some(raw & W::mask())
    }

    /// Builds a value of `kind` from a bit pattern.
    ///
    /// Returns `None` when `kind` is [`Kind::String`].
    ///
    /// # Parameters
    /// - `kind`: The kind to build.
    /// - `bits`: The pattern, masked to the active width.
    ///
    /// # Returns
    /// The value with those bits.
    #[must_use]
    pub fn from_bits(kind: Kind, bits: u64) -> Option<Self> {
        let bits = bits & W::mask();
        match kind {
            Kind::SignedInt => Some(Self::int_wrapping(i128::from(bits))),
            Kind::UnsignedInt => Some(Self::uint_wrapping(i128::from(bits))),
            Kind::Float => Some(Self::float(W::Float::from_raw_bits(bits))),
            Kind::String => None,
        }
    }

    /// The numeric value as an `f64`, or `None` for strings.
    #[must_use]
    pub fn to_real(&self) -> Option<f64> {
        match &self.number {
            Number::SignedInt(i) => Some(i.to_f64()),
            Number::UnsignedInt(u) => Some(u.to_f64()),
            Number::Float(f) => Some(f.to_real()),
            Number::String(_) => None,
        }
    }

    /// The numeric value as a wide integer, truncating floats toward zero.
    ///
    /// Returns `None` for strings.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_wide(&self) -> Option<i128> {
        match &self.number {
            Number::SignedInt(i) => Some(i.widen()),
            Number::UnsignedInt(u) => Some(u.widen()),
            Number::Float(f) => Some(f.to_real() as i128),
            Number::String(_) => None,
        }
    }

    /// Whether the value counts as true: nonzero for numbers (both float
    /// zeros are false).
    ///
    /// Returns `None` for strings.
    #[must_use]
    pub fn truthy(&self) -> Option<bool> {
        match &self.number {
            Number::SignedInt(i) => Some(i.widen() != 0),
            Number::UnsignedInt(u) => Some(u.widen() != 0),
            Number::Float(f) => Some(!f.is_zero()),
            Number::String(_) => None,
        }
    }

    /// `1` or `0` in the given numeric kind.
    #[must_use]
    pub fn flag(kind: Kind, set: bool) -> Option<Self> {
        let n = i128::from(set);
        match kind {
            Kind::SignedInt => Some(Self::int_wrapping(n)),
            Kind::UnsignedInt => Some(Self::uint_wrapping(n)),
            #[allow(clippy::cast_precision_loss)]
            Kind::Float => Some(Self::float_from_real(n as f64)),
            Kind::String => None,
        }
    }

    /// A numeric value of `kind` built from a wide integer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_wide(kind: Kind, value: i128) -> Option<Self> {
        match kind {
            Kind::SignedInt => Some(Self::int_wrapping(value)),
            Kind::UnsignedInt => Some(Self::uint_wrapping(value)),
            Kind::Float => Some(Self::float_from_real(value as f64)),
            Kind::String => None,
        }
    }

    /// Builds the value a literal token denotes at this width.
    ///
    /// Bare decimal integers default to the hex display format and every
    /// other literal to decimal, so echoing a literal shows the other base.
    /// Based literals must fit in the active width.
    ///
    /// # Parameters
    /// - `literal`: The lexed payload.
    /// - `text`: The token's source text, used for words and error messages.
    ///
    /// # Returns
    /// The value, or `LiteralTooWide` for a based literal with bits above the
    /// width.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{
    ///     lexer::Literal,
    ///     value::core::{Format, Value},
    ///     width::W8,
    /// };
    ///
    /// let v = Value::<W8>::from_literal(&Literal::Unsigned(300), "300").unwrap();
    /// assert_eq!(v, Value::uint(44).with_format(Format::Hex));
    ///
    /// assert!(Value::<W8>::from_literal(&Literal::Based(0x1FF), "0x1FF").is_err());
    /// ```
    #[allow(clippy::cast_possible_wrap)]
    pub fn from_literal(literal: &Literal, text: &str) -> Result<Self, ParseError> {
        let value = match *literal {
            Literal::Float(f) => Self::float_from_real(f),
            Literal::Signed(i) => Self::int_wrapping(i128::from(i)).with_format(Format::Hex),
            Literal::Unsigned(u) => Self::uint_wrapping(i128::from(u)).with_format(Format::Hex),
            Literal::Based(bits) => {
                if bits >> W::BITS != 0 {
                    return Err(ParseError::LiteralTooWide { literal: text.to_string(),
                                                            bits:    W::BITS, });
                }
                Self::uint_wrapping(bits as i128)
            },
            Literal::Word => Self::string(text),
        };
        Ok(value)
    }

    /// Fails with a type mismatch naming `operator` when this is a string.
    pub fn require_number(&self, operator: &str) -> Result<(), RuntimeError> {
        match self.kind() {
            Kind::String => Err(RuntimeError::type_mismatch(operator, "string")),
            _ => Ok(()),
        }
    }
}

impl<W: Width> fmt::Display for Value<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
