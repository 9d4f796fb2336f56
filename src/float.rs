//! Conversions between [`Dyadic`] and `f64`
//!
//! Decomposition of a finite `f64` is exact. The way back is the one lossy
//! boundary of the crate: a value is rounded once, ties to even, to the
//! nearest `f64`, subnormals included. Out-of-range values overflow to
//! infinity or underflow to zero.

use crate::dyadic::Dyadic;
use crate::error::{DyadicError, DyadicResult};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer as _;
use num_traits::float::FloatCore;
use num_traits::{Signed, ToPrimitive, Zero};

/// Significand width of `f64`, implicit bit included
pub(crate) const F64_PRECISION: u32 = f64::MANTISSA_DIGITS;

/// Split a finite, nonzero `f64` into `(mantissa, exponent)` with
/// `value == mantissa * 2^exponent` exactly.
///
/// The mantissa has at most [`F64_PRECISION`] significant bits. This is the
/// integer form of `frexp`: with `value = x * 2^e`, `x` in `[0.5, 1)`, the
/// mantissa is `x * 2^53` and the exponent `e - 53`, up to trailing zero bits
/// that canonicalization removes anyway.
pub(crate) fn decompose(value: f64) -> DyadicResult<(BigInt, i64)> {
    if !value.is_finite() {
        return Err(DyadicError::NonFiniteFloat(value.to_string()));
    }
    let (mantissa, exponent, sign) = FloatCore::integer_decode(value);
    let mantissa = BigInt::from(mantissa);
    let mantissa = if sign < 0 { -mantissa } else { mantissa };
    Ok((mantissa, i64::from(exponent)))
}

/// `2^exp` for `exp` within the normal range of `f64`
#[allow(clippy::cast_sign_loss)]
fn pow2(exp: i64) -> f64 {
    debug_assert!((-1022..=1023).contains(&exp));
    f64::from_bits(((exp + 1023) as u64) << 52)
}

/// Multiply `x` by `2^exp`, saturating to infinity or zero.
///
/// Large scales are applied in steps that keep the intermediate value
/// normal, so a representable result is never rounded twice.
pub(crate) fn ldexp(mut x: f64, mut exp: i64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    while exp > 1023 {
        x *= pow2(1023);
        exp -= 1023;
        if x.is_infinite() {
            return x;
        }
    }
    while exp < -1022 {
        x *= pow2(-1022);
        exp += 1022;
        if x == 0.0 {
            return x;
        }
    }
    x * pow2(exp)
}

/// Nearest `f64` to an integer; out-of-range magnitudes become infinite.
pub(crate) fn bigint_to_f64(value: &BigInt) -> f64 {
    value.to_f64().unwrap_or(match value.sign() {
        Sign::Minus => f64::NEG_INFINITY,
        _ => f64::INFINITY,
    })
}

/// Exponent of the smallest subnormal `f64`
const F64_MIN_EXP: i64 = -1074;

/// `magnitude >> shift`, rounded half to even.
fn round_shr(magnitude: &BigUint, shift: u64) -> BigUint {
    let mut quotient = magnitude >> shift;
    let half = shift - 1;
    if magnitude.bit(half) {
        let sticky = magnitude.trailing_zeros().is_some_and(|zeros| zeros < half);
        if sticky || quotient.bit(0) {
            quotient += 1u8;
        }
    }
    quotient
}

/// `mantissa * 2^exponent` rounded to the nearest `f64`, ties to even.
///
/// The mantissa is rounded in integer arithmetic to the precision the result
/// has at its magnitude (53 bits for normal values, fewer for subnormals), so
/// the conversion and the scaling that follow are exact up to overflow.
pub(crate) fn scaled_to_f64(mantissa: &BigInt, exponent: i64) -> f64 {
    let bits = i64::try_from(mantissa.bits()).unwrap_or(i64::MAX);
    let top = exponent.saturating_add(bits);
    let lowest = top
        .saturating_sub(i64::from(F64_PRECISION))
        .max(F64_MIN_EXP);
    let shift = lowest.saturating_sub(exponent);
    if shift <= 0 {
        return ldexp(bigint_to_f64(mantissa), exponent);
    }
    let rounded = round_shr(mantissa.magnitude(), shift.unsigned_abs());
    ldexp(
        bigint_to_f64(&BigInt::from_biguint(mantissa.sign(), rounded)),
        lowest,
    )
}

/// Approximate `num / den` as an `f64`, correctly rounded.
///
/// The mantissas are divided with at least 63 quotient bits, a nonzero
/// remainder is folded into one extra sticky bit, and the exponent difference
/// is applied while rounding, so large operands never overflow on their own.
///
/// # Errors
///
/// Returns [`DyadicError::DivisionByZero`] if `den` is zero.
pub fn quotient_to_f64(num: &Dyadic, den: &Dyadic) -> DyadicResult<f64> {
    if den.is_zero() {
        return Err(DyadicError::DivisionByZero);
    }
    if num.is_zero() {
        return Ok(0.0);
    }

    let n = num.mantissa().abs();
    let d = den.mantissa().abs();

    let wanted = d.bits() + u64::from(F64_PRECISION) + 11;
    let shift = wanted.saturating_sub(n.bits());
    let (quotient, remainder) = (n << shift).div_rem(&d);
    let mut mantissa = quotient << 1u8;
    if !remainder.is_zero() {
        mantissa += 1u8;
    }
    if num.is_negative() != den.is_negative() {
        mantissa = -mantissa;
    }

    let exponent = num
        .exponent()
        .saturating_sub(den.exponent())
        .saturating_sub(i64::try_from(shift).unwrap_or(i64::MAX))
        .saturating_sub(1);
    Ok(scaled_to_f64(&mantissa, exponent))
}
