//! Number-type traits for kernels built on top of [`Dyadic`]
//!
//! Geometric predicates and constructions are usually generic over their
//! number type and need to know which operations are exact. [`ExactRing`]
//! states that as associated constants, next to the operations themselves.

use crate::dyadic::Dyadic;
use crate::float::bigint_to_f64;
use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use std::fmt::Debug;
use std::ops::{Neg, Sub};

/// An ordered ring with gcd, division and square root, as consumed by
/// geometric kernels.
///
/// # Laws
///
/// - `+`, `-` and `*` are exact when [`HAS_EXACT_RING_OPERATIONS`](Self::HAS_EXACT_RING_OPERATIONS) holds
/// - `b * a.exact_division(&b) == a` whenever `b` divides `a`
/// - `sqrt` is exact only when [`HAS_EXACT_SQRT`](Self::HAS_EXACT_SQRT) holds
pub trait ExactRing:
    Clone + Ord + Debug + Zero + One + Sub<Output = Self> + Neg<Output = Self>
{
    const HAS_GCD: bool;
    const HAS_DIVISION: bool;
    const HAS_SQRT: bool;
    const HAS_EXACT_RING_OPERATIONS: bool;
    const HAS_EXACT_DIVISION: bool;
    const HAS_EXACT_SQRT: bool;

    /// Sign of the value.
    fn sign(&self) -> Sign;

    /// Greatest common divisor.
    fn gcd(&self, other: &Self) -> Self;

    /// Division by a known divisor of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn exact_division(&self, divisor: &Self) -> Self;

    /// Division truncating toward zero.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn integral_division(&self, divisor: &Self) -> Self;

    /// Square root, truncated unless [`HAS_EXACT_SQRT`](Self::HAS_EXACT_SQRT) holds.
    ///
    /// # Panics
    ///
    /// Panics if `self` is negative.
    fn sqrt(&self) -> Self;

    /// Nearest `f64`.
    fn to_f64(&self) -> f64;
}

impl ExactRing for Dyadic {
    const HAS_GCD: bool = true;
    const HAS_DIVISION: bool = true;
    const HAS_SQRT: bool = true;
    const HAS_EXACT_RING_OPERATIONS: bool = true;
    const HAS_EXACT_DIVISION: bool = true;
    const HAS_EXACT_SQRT: bool = false;

    fn sign(&self) -> Sign {
        Dyadic::sign(self)
    }

    fn gcd(&self, other: &Self) -> Self {
        Dyadic::gcd(self, other)
    }

    fn exact_division(&self, divisor: &Self) -> Self {
        Dyadic::exact_division(self, divisor)
    }

    fn integral_division(&self, divisor: &Self) -> Self {
        self / divisor
    }

    fn sqrt(&self) -> Self {
        Dyadic::sqrt(self)
    }

    fn to_f64(&self) -> f64 {
        Dyadic::to_f64(self)
    }
}

impl ExactRing for BigInt {
    const HAS_GCD: bool = true;
    const HAS_DIVISION: bool = true;
    const HAS_SQRT: bool = true;
    const HAS_EXACT_RING_OPERATIONS: bool = true;
    const HAS_EXACT_DIVISION: bool = true;
    const HAS_EXACT_SQRT: bool = false;

    fn sign(&self) -> Sign {
        BigInt::sign(self)
    }

    fn gcd(&self, other: &Self) -> Self {
        num_integer::Integer::gcd(self, other)
    }

    fn exact_division(&self, divisor: &Self) -> Self {
        let quotient = self / divisor;
        debug_assert!(&(divisor * &quotient) == self);
        quotient
    }

    fn integral_division(&self, divisor: &Self) -> Self {
        self / divisor
    }

    fn sqrt(&self) -> Self {
        BigInt::sqrt(self)
    }

    fn to_f64(&self) -> f64 {
        bigint_to_f64(self)
    }
}

impl Zero for Dyadic {
    fn zero() -> Self {
        Dyadic::zero()
    }

    fn is_zero(&self) -> bool {
        Dyadic::is_zero(self)
    }
}

impl One for Dyadic {
    fn one() -> Self {
        Dyadic::one()
    }

    fn is_one(&self) -> bool {
        self.exponent() == 0 && self.mantissa().is_one()
    }
}

/// Integer part of `value`, truncated toward zero.
///
/// `None` when the value is an integer of more than 128 bits, which no
/// primitive can hold and which could be arbitrarily expensive to expand.
fn integral_part(value: &Dyadic) -> Option<BigInt> {
    let exponent = value.exponent();
    if exponent > 128 {
        return None;
    }
    if exponent >= 0 {
        return Some(value.mantissa() << exponent.unsigned_abs());
    }
    // shift the magnitude so negative values truncate toward zero
    let magnitude = value.mantissa().magnitude() >> exponent.unsigned_abs();
    Some(BigInt::from_biguint(value.sign(), magnitude))
}

impl ToPrimitive for Dyadic {
    fn to_i64(&self) -> Option<i64> {
        integral_part(self)?.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        integral_part(self)?.to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        integral_part(self)?.to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        integral_part(self)?.to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Dyadic::to_f64(self))
    }
}

impl FromPrimitive for Dyadic {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Dyadic::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Dyadic::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Dyadic::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Dyadic::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Dyadic::from_f64(n).ok()
    }
}
