use std::fmt;

use crate::util::num::width_mask;

/// A fixed-width integer payload type.
///
/// Arithmetic on integers is carried out on the widened `i128` value and then
/// narrowed with [`Integer::wrap`], which truncates to the type's bit width.
/// Since every operand fits in `i128` and narrowing keeps the low bits, this
/// matches wrapping arithmetic at the native width.
pub trait Integer: Copy + Default + PartialEq + PartialOrd + fmt::Debug + fmt::Display {
    /// Largest representable value.
    const MAX: Self;

    /// Narrows `value` to this type, keeping its low bits.
    fn wrap(value: i128) -> Self;
    /// Widens the value losslessly.
    fn widen(self) -> i128;
    /// Converts to the nearest `f64`.
    fn to_f64(self) -> f64;
    /// Converts from `f64`, truncating toward zero and saturating at the
    /// type's bounds. `NaN` becomes zero.
    fn from_f64(value: f64) -> Self;
}

macro_rules! integer_impl {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Integer for $ty {
                const MAX: Self = <$ty>::MAX;

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn wrap(value: i128) -> Self {
                    value as Self
                }

                fn widen(self) -> i128 {
                    i128::from(self)
                }

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn from_f64(value: f64) -> Self {
                    value as Self
                }
            }
        )*
    };
}

integer_impl!(i8, i16, i32, i64, u8, u16, u32, u64);

/// The payload type of the `Float` kind.
///
/// The 32- and 64-bit widths use the native IEEE-754 types. The 8- and 16-bit
/// widths have no native float, so their float payload is the signed integer
/// of that width: arithmetic follows integer rules (a zero divisor is an
/// error) and only the bit-field layout is float-like.
pub trait FloatLike: Copy + Default + PartialEq + PartialOrd + fmt::Debug {
    /// Whether this is a genuine floating-point type.
    const NATIVE: bool;
    /// Largest finite value.
    const MAX: Self;
    /// Smallest positive normal value (one for the integer-backed widths).
    const MIN_POSITIVE: Self;

    /// Converts from `f64`, rounding (native) or truncating and saturating
    /// (integer-backed).
    fn from_real(value: f64) -> Self;
    /// Converts to `f64` without loss.
    fn to_real(self) -> f64;
    /// The raw bit pattern, zero-extended.
    fn to_raw_bits(self) -> u64;
    /// Rebuilds a value from the low bits of `bits`.
    fn from_raw_bits(bits: u64) -> Self;

    /// `self + rhs`
    #[must_use]
    fn plus(self, rhs: Self) -> Self;
    /// `self - rhs`
    #[must_use]
    fn minus(self, rhs: Self) -> Self;
    /// `self * rhs`
    #[must_use]
    fn times(self, rhs: Self) -> Self;
    /// `self / rhs`, or `None` when the divisor is zero and the type cannot
    /// represent the result.
    fn divide(self, rhs: Self) -> Option<Self>;
    /// `self % rhs` with the same zero-divisor rule as [`FloatLike::divide`].
    fn modulo(self, rhs: Self) -> Option<Self>;
    /// `self` raised to `rhs`.
    #[must_use]
    fn power(self, rhs: Self) -> Self;
    /// Absolute value.
    #[must_use]
    fn magnitude(self) -> Self;
    /// Whether the value is zero (either sign).
    fn is_zero(self) -> bool;
}

macro_rules! native_float_impl {
    ($($ty:ty => $bits:ty),* $(,)?) => {
        $(
            impl FloatLike for $ty {
                const NATIVE: bool = true;
                const MAX: Self = <$ty>::MAX;
                const MIN_POSITIVE: Self = <$ty>::MIN_POSITIVE;

                #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
                fn from_real(value: f64) -> Self {
                    value as Self
                }

                fn to_real(self) -> f64 {
                    f64::from(self)
                }

                fn to_raw_bits(self) -> u64 {
                    u64::from(self.to_bits())
                }

                #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
                fn from_raw_bits(bits: u64) -> Self {
                    <$ty>::from_bits(bits as $bits)
                }

                fn plus(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn minus(self, rhs: Self) -> Self {
                    self - rhs
                }

                fn times(self, rhs: Self) -> Self {
                    self * rhs
                }

                fn divide(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }

                fn modulo(self, rhs: Self) -> Option<Self> {
                    Some(self % rhs)
                }

                fn power(self, rhs: Self) -> Self {
                    self.powf(rhs)
                }

                fn magnitude(self) -> Self {
                    self.abs()
                }

                fn is_zero(self) -> bool {
                    self == 0.0
                }
            }
        )*
    };
}

native_float_impl!(f32 => u32, f64 => u64);

macro_rules! minifloat_impl {
    ($($ty:ty => $bits:ty),* $(,)?) => {
        $(
            impl FloatLike for $ty {
                const NATIVE: bool = false;
                const MAX: Self = <$ty>::MAX;
                const MIN_POSITIVE: Self = 1;

                #[allow(clippy::cast_possible_truncation)]
                fn from_real(value: f64) -> Self {
                    value as Self
                }

                fn to_real(self) -> f64 {
                    f64::from(self)
                }

                #[allow(clippy::cast_sign_loss)]
                fn to_raw_bits(self) -> u64 {
                    u64::from(self as $bits)
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn from_raw_bits(bits: u64) -> Self {
                    bits as $bits as Self
                }

                fn plus(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                fn minus(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                fn times(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                fn divide(self, rhs: Self) -> Option<Self> {
                    (rhs != 0).then(|| self.wrapping_div(rhs))
                }

                fn modulo(self, rhs: Self) -> Option<Self> {
                    (rhs != 0).then(|| self.wrapping_rem(rhs))
                }

                fn power(self, rhs: Self) -> Self {
                    self.wrapping_pow(u32::from(rhs.unsigned_abs()))
                }

                fn magnitude(self) -> Self {
                    self.wrapping_abs()
                }

                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

minifloat_impl!(i8 => u8, i16 => u16);

/// Bit-field layout of the float kind: `sign | exponent | mantissa`, from the
/// most significant bit down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatLayout {
    /// Number of mantissa bits.
    pub mantissa: u32,
    /// Number of exponent bits.
    pub exponent: u32,
}

/// The three fields of a float bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatParts {
    /// The sign bit.
    pub sign:     u64,
    /// The biased exponent.
    pub exponent: u64,
    /// The mantissa without the implicit leading bit.
    pub mantissa: u64,
}

impl FloatLayout {
    /// Mask covering the mantissa field.
    #[must_use]
    pub const fn mantissa_mask(self) -> u64 {
        width_mask(self.mantissa)
    }

    /// Mask covering the exponent field, shifted down to bit zero.
    #[must_use]
    pub const fn exponent_mask(self) -> u64 {
        width_mask(self.exponent)
    }

    /// Splits a bit pattern into its sign, exponent and mantissa.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::width::{FloatLayout, FloatParts};
    ///
    /// let layout = FloatLayout { mantissa: 52, exponent: 11 };
    /// let parts = layout.decompose((-2.0f64).to_bits());
    ///
    /// assert_eq!(parts, FloatParts { sign: 1, exponent: 1024, mantissa: 0 });
    /// ```
    #[must_use]
    pub const fn decompose(self, bits: u64) -> FloatParts {
        FloatParts { sign:     (bits >> (self.mantissa + self.exponent)) & 1,
                     exponent: (bits >> self.mantissa) & self.exponent_mask(),
                     mantissa: bits & self.mantissa_mask(), }
    }
}

/// A bit width the interpreter can be instantiated at.
///
/// Fixes the integer, unsigned and float payload types, the number of bits
/// (which is also the rotate modulus), the float bit-field layout, and how
/// many decimals long-form output shows for floats.
pub trait Width: Copy + Default + Eq + fmt::Debug + 'static {
    /// The `SignedInt` payload.
    type Int: Integer;
    /// The `UnsignedInt` payload.
    type Uint: Integer;
    /// The `Float` payload.
    type Float: FloatLike;

    /// Width in bits.
    const BITS: u32;
    /// Float bit-field layout.
    const LAYOUT: FloatLayout;
    /// Decimal places shown for floats in long form.
    const LONG_DECIMALS: usize;

    /// Mask for the low [`Width::BITS`] bits.
    #[must_use]
    fn mask() -> u64 {
        width_mask(Self::BITS)
    }
}

/// The 8-bit width, with a 3/4/1 minifloat layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct W8;

/// The 16-bit width, with a 10/5/1 half-precision layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct W16;

/// The 32-bit width, backed by `f32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct W32;

/// The 64-bit width, backed by `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct W64;

impl Width for W8 {
    type Float = i8;
    type Int = i8;
    type Uint = u8;

    const BITS: u32 = 8;
    const LAYOUT: FloatLayout = FloatLayout { mantissa: 3,
                                              exponent: 4, };
    const LONG_DECIMALS: usize = 0;
}

impl Width for W16 {
    type Float = i16;
    type Int = i16;
    type Uint = u16;

    const BITS: u32 = 16;
    const LAYOUT: FloatLayout = FloatLayout { mantissa: 10,
                                              exponent: 5, };
    const LONG_DECIMALS: usize = 0;
}

impl Width for W32 {
    type Float = f32;
    type Int = i32;
    type Uint = u32;

    const BITS: u32 = 32;
    const LAYOUT: FloatLayout = FloatLayout { mantissa: 23,
                                              exponent: 8, };
    const LONG_DECIMALS: usize = 10;
}

impl Width for W64 {
    type Float = f64;
    type Int = i64;
    type Uint = u64;

    const BITS: u32 = 64;
    const LAYOUT: FloatLayout = FloatLayout { mantissa: 52,
                                              exponent: 11, };
    const LONG_DECIMALS: usize = 20;
}
