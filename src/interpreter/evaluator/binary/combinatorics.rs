use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            utils::mismatched,
        },
        value::core::{Kind, Number, Value},
        width::{FloatLike, Integer, Width},
    },
    util::num::{binary_gcd, lcm},
};

/// Product `2..=n`, wrapped to the width of `T` after every step.
///
/// Stops early once the product wraps to zero, since it stays zero.
fn wrapping_factorial<T: Integer>(n: i128) -> i128 {
    let mut product = T::wrap(1).widen();
    let mut factor = 2;
    while factor <= n && product != 0 {
        product = T::wrap(product.wrapping_mul(factor)).widen();
        factor += 1;
    }
    product
}

/// Product `(n - r + 1)..=n`, wrapped to the width of `T` after every step.
fn wrapping_permutations<T: Integer>(n: i128, r: i128) -> i128 {
    let mut product = T::wrap(1).widen();
    let mut factor = n - r + 1;
    while factor <= n && product != 0 {
        product = T::wrap(product.wrapping_mul(factor)).widen();
        factor += 1;
    }
    product
}

/// Exact binomial coefficient, or `None` when it exceeds 128 bits.
///
/// Each partial product `C(n, i) * (n - i)` is divisible by `i + 1`, so the
/// running value stays exact.
#[allow(clippy::cast_sign_loss)]
fn binomial(n: i128, r: i128) -> Option<u128> {
    let (n, r) = (n as u128, r as u128);
    let r = r.min(n - r);
    let mut result: u128 = 1;
    for i in 0..r {
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

/// Product `2..=x` over reals. The argument is truncated toward zero.
fn real_factorial(x: f64) -> f64 {
    let n = x.trunc();
    let mut product: f64 = 1.0;
    let mut factor = 2.0;
    while factor <= n && product.is_finite() {
        product *= factor;
        factor += 1.0;
    }
    product
}

/// Computes `n!` for a single value.
///
/// Negative signed or float inputs are a domain error. Integer kinds wrap at
/// the active width.
///
/// # Parameters
/// - `name`: Operator name used in error messages.
/// - `value`: The operand.
///
/// # Returns
/// `value!` in the operand's kind, or a `Domain` error for negative input.
///
/// # Example
/// ```
/// use hd::interpreter::{
///     evaluator::binary::combinatorics::factorial,
///     value::core::Value,
///     width::W64,
/// };
///
/// assert_eq!(factorial("factorial", &Value::<W64>::int(5)).unwrap(), Value::int(120));
/// assert!(factorial("factorial", &Value::<W64>::int(-1)).is_err());
/// ```
pub fn factorial<W: Width>(name: &str, value: &Value<W>) -> EvalResult<Value<W>> {
    let negative = || RuntimeError::Domain { details: format!("{name}: value must be nonnegative") };

    match &value.number {
        Number::SignedInt(i) if i.widen() < 0 => Err(negative()),
        Number::SignedInt(i) => Ok(Value::int_wrapping(wrapping_factorial::<W::Int>(i.widen()))),
        Number::UnsignedInt(u) => {
            Ok(Value::uint_wrapping(wrapping_factorial::<W::Uint>(u.widen())))
        },
        Number::Float(f) if f.to_real() < 0.0 => Err(negative()),
        Number::Float(f) => Ok(Value::float_from_real(real_factorial(f.to_real()))),
        Number::String(_) => Err(RuntimeError::type_mismatch(name, "string")),
    }
}

/// The unsigned magnitude of a numeric value.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn magnitude<W: Width>(value: &Value<W>) -> u128 {
    match &value.number {
        Number::SignedInt(i) => i.widen().unsigned_abs(),
        Number::UnsignedInt(u) => u.widen().unsigned_abs(),
        Number::Float(f) => f.to_real().abs() as u128,
        Number::String(_) => 0,
    }
}

impl<W: Width> Session<W> {
    /// Evaluates `gcd` (or `lcm` when `least_multiple` is set) on the
    /// operands' unsigned magnitudes, returning the coerced kind.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `lhs`: Left operand.
    /// - `rhs`: Right operand.
    /// - `least_multiple`: Compute the lcm instead of the gcd.
    ///
    /// # Returns
    /// The gcd or lcm of the magnitudes, in the coerced kind.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::{evaluator::core::Session, value::core::Value, width::W64};
    ///
    /// let gcd = Session::<W64>::eval_gcd("gcd", Value::int(-12), Value::int(18), false);
    /// assert_eq!(gcd.unwrap(), Value::int(6));
    /// ```
    #[allow(clippy::cast_possible_wrap)]
    pub fn eval_gcd(name: &str,
                    mut lhs: Value<W>,
                    mut rhs: Value<W>,
                    least_multiple: bool)
                    -> EvalResult<Value<W>> {
        let kind = lhs.coerce(&mut rhs)?;
        let (a, b) = (magnitude(&lhs), magnitude(&rhs));
        let result = if least_multiple { lcm(a, b) } else { binary_gcd(a, b) };

        Value::from_wide(kind, result as i128).ok_or_else(|| mismatched(name, &lhs, &rhs))
    }

    /// Evaluates `ncr` (or `npr` when `ordered` is set) with `lhs` as `n` and
    /// `rhs` as `r`.
    ///
    /// Requires `n >= r >= 0`. Integer permutations wrap at the active width;
    /// integer combinations are computed exactly and then wrapped, failing
    /// only if the exact value exceeds 128 bits. Floats use the factorial
    /// formulas directly.
    ///
    /// # Parameters
    /// - `name`: Operator name used in error messages.
    /// - `lhs`: `n`, the size of the set.
    /// - `rhs`: `r`, the number chosen.
    /// - `ordered`: Count permutations instead of combinations.
    ///
    /// # Returns
    /// The count in the coerced kind, or a `Domain` error when `n >= r >= 0` does
    /// not hold.
    #[allow(clippy::cast_possible_wrap)]
    pub fn eval_combinations(name: &str,
                             mut lhs: Value<W>,
                             mut rhs: Value<W>,
                             ordered: bool)
                             -> EvalResult<Value<W>> {
        let kind = lhs.coerce(&mut rhs)?;
        let domain = || RuntimeError::Domain { details: format!("{name}: requires n >= r >= 0") };

        if kind == Kind::Float {
            let (n, r) = match (&lhs.number, &rhs.number) {
                (Number::Float(n), Number::Float(r)) => (n.to_real(), r.to_real()),
                _ => return Err(mismatched(name, &lhs, &rhs)),
            };
            if r < 0.0 || n < r {
                return Err(domain());
            }
            let rest = real_factorial(n - r);
            let result = if ordered {
                real_factorial(n) / rest
            } else {
                real_factorial(n) / (real_factorial(r) * rest)
            };
            return Ok(Value::float_from_real(result));
        }

        let (n, r) = match (lhs.to_wide(), rhs.to_wide()) {
            (Some(n), Some(r)) => (n, r),
            _ => return Err(mismatched(name, &lhs, &rhs)),
        };
        if r < 0 || n < r {
            return Err(domain());
        }

        let result = if ordered {
            match kind {
                Kind::SignedInt => wrapping_permutations::<W::Int>(n, r),
                _ => wrapping_permutations::<W::Uint>(n, r),
            }
        } else {
            binomial(n, r).ok_or_else(|| RuntimeError::Domain {
                              details: format!("{name}: result does not fit in 128 bits"),
                          })? as i128
        };

        Value::from_wide(kind, result).ok_or_else(|| mismatched(name, &lhs, &rhs))
    }
}
