/// Raises `base` to `exponent` by repeated squaring, wrapping on overflow.
///
/// Only the low bits of the result are meaningful to callers, who narrow it
/// to their own width afterwards. Wrapping at 128 bits keeps those low bits
/// exact.
///
/// # Example
/// ```
/// use hd::util::num::int_pow;
///
/// assert_eq!(int_pow(3, 4), 81);
/// assert_eq!(int_pow(2, 0), 1);
/// assert_eq!(int_pow(2, 130) as u64, 0);
/// ```
#[must_use]
pub const fn int_pow(mut base: u128, mut exponent: u128) -> u128 {
    let mut result: u128 = 1;
    while exponent != 0 {
        if exponent & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        exponent >>= 1;
        base = base.wrapping_mul(base);
    }
    result
}

/// Greatest common divisor using Stein's binary algorithm.
///
/// `gcd(a, 0)` is `a`, and `gcd(0, 0)` is `0`.
///
/// # Example
/// ```
/// use hd::util::num::binary_gcd;
///
/// assert_eq!(binary_gcd(48, 18), 6);
/// assert_eq!(binary_gcd(5, 0), 5);
/// ```
#[must_use]
pub fn binary_gcd(mut a: u128, mut b: u128) -> u128 {
    if a == 0 || b == 0 {
        return a | b;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            break;
        }
    }

    a << shift
}

/// Least common multiple, `0` when either input is zero.
///
/// Computed as `(a / gcd(a, b)) * b` so the intermediate never exceeds the
/// result.
///
/// # Example
/// ```
/// use hd::util::num::lcm;
///
/// assert_eq!(lcm(4, 6), 12);
/// assert_eq!(lcm(0, 9), 0);
/// ```
#[must_use]
pub fn lcm(a: u128, b: u128) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / binary_gcd(a, b)).wrapping_mul(b)
}

/// All-ones mask for the low `bits` bits.
#[must_use]
pub const fn width_mask(bits: u32) -> u64 {
    if bits >= 64 { u64::MAX } else { (1 << bits) - 1 }
}

/// Rotates the low `width` bits of `pattern` right by `amount`.
///
/// The amount is reduced modulo `width`.
///
/// # Example
/// ```
/// use hd::util::num::rotate_right;
///
/// assert_eq!(rotate_right(0b0000_0001, 1, 8), 0b1000_0000);
/// assert_eq!(rotate_right(0b0000_0001, 9, 8), 0b1000_0000);
/// ```
#[must_use]
pub const fn rotate_right(pattern: u64, amount: u32, width: u32) -> u64 {
    let mask = width_mask(width);
    let pattern = pattern & mask;
    let amount = amount % width;
    if amount == 0 {
        return pattern;
    }
    ((pattern >> amount) | (pattern << (width - amount))) & mask
}

/// Rotates the low `width` bits of `pattern` left by `amount`.
#[must_use]
pub const fn rotate_left(pattern: u64, amount: u32, width: u32) -> u64 {
    let amount = amount % width;
    rotate_right(pattern, (width - amount) % width, width)
}

/// Reverses the order of the low `width / 8` bytes of `pattern`.
///
/// # Example
/// ```
/// use hd::util::num::reverse_bytes;
///
/// assert_eq!(reverse_bytes(0x1234, 16), 0x3412);
/// assert_eq!(reverse_bytes(0xAB, 8), 0xAB);
/// ```
#[must_use]
pub fn reverse_bytes(pattern: u64, width: u32) -> u64 {
    let count = (width / 8) as usize;
    pattern.to_le_bytes()
           .iter()
           .take(count)
           .fold(0, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Returns `true` when the host stores the least significant byte first.
///
/// Decided at run time by looking at where the low byte of a known
/// two-byte value lands in memory.
#[must_use]
pub fn is_little_endian() -> bool {
    let probe: u16 = 0x0001;
    probe.to_ne_bytes()[0] == 0x01
}
