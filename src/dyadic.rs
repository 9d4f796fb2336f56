use crate::align::align;
use crate::error::{DyadicError, DyadicResult, ParseDyadicError};
use crate::float::{decompose, scaled_to_f64};
use num_bigint::{BigInt, Sign};
use num_integer::Integer as _;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An exact binary floating-point number `mantissa * 2^exponent`
///
/// The mantissa is an arbitrary-precision integer, so addition, subtraction
/// and multiplication never round. Values are always kept in canonical form:
///
/// - zero is stored as `0 * 2^0`
/// - any other value has an odd mantissa
///
/// Every value therefore has exactly one representation, which makes the
/// derived [`PartialEq`], [`Eq`] and [`Hash`] agree with numeric equality.
///
/// # Rounding
///
/// Rounding only happens when leaving the type: [`to_f64()`](Self::to_f64)
/// and the [`Display`](fmt::Display) impl go through `f64`. The integral
/// division `/` truncates by definition, and [`sqrt()`](Self::sqrt) truncates
/// the mantissa's root.
///
/// # Exponent range
///
/// The exponent is an `i64`. Repeatedly squaring a power of two reaches
/// that limit long before memory runs out; exponent overflow panics in debug
/// builds and wraps in release builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Dyadic {
    mantissa: BigInt,
    exponent: i64,
}

impl Dyadic {
    /// Create `mantissa * 2^exponent`, brought to canonical form
    #[must_use]
    pub fn from_parts(mantissa: BigInt, exponent: i64) -> Self {
        let mut value = Self { mantissa, exponent };
        value.canonicalize();
        value
    }

    /// Create from an `f64`, capturing its value exactly
    ///
    /// Both zeros map to the canonical zero. Subnormals are represented
    /// exactly like any other finite value.
    ///
    /// # Errors
    ///
    /// Returns [`DyadicError::NonFiniteFloat`] for infinities and NaN.
    pub fn from_f64(value: f64) -> DyadicResult<Self> {
        if value == 0.0 {
            return Ok(Self::zero());
        }
        let (mantissa, exponent) = decompose(value)?;
        Ok(Self::from_parts(mantissa, exponent))
    }

    /// The canonical zero
    #[must_use]
    pub fn zero() -> Self {
        Self {
            mantissa: BigInt::zero(),
            exponent: 0,
        }
    }

    /// One, as `1 * 2^0`
    #[must_use]
    pub fn one() -> Self {
        Self {
            mantissa: BigInt::from(1),
            exponent: 0,
        }
    }

    /// The odd (or zero) mantissa
    #[must_use]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// The binary exponent; always 0 for zero
    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Consume and return `(mantissa, exponent)`
    #[must_use]
    pub fn into_parts(self) -> (BigInt, i64) {
        (self.mantissa, self.exponent)
    }

    /// Check the canonical-form invariant: zero is `0 * 2^0`, everything else
    /// has an odd mantissa
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        if self.mantissa.is_zero() {
            self.exponent == 0
        } else {
            self.mantissa.is_odd()
        }
    }

    /// Move the mantissa's trailing zero bits into the exponent.
    fn canonicalize(&mut self) {
        match self.mantissa.trailing_zeros() {
            Some(zeros) if zeros > 0 => {
                self.mantissa >>= zeros;
                self.exponent += i64::try_from(zeros).unwrap_or(i64::MAX);
            }
            Some(_) => {}
            None => self.exponent = 0,
        }
        debug_assert!(self.is_canonical(), "not canonical: {}", self.raw());
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    /// Sign of the value
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.mantissa.sign()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Absolute value
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            mantissa: self.mantissa.abs(),
            exponent: self.exponent,
        }
    }

    /// Three-way numeric comparison, after aligning both exponents
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        // Different signs (or a zero) decide without shifting anything
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal if !self.is_zero() => {}
            decided => return decided,
        }
        let aligned = align(self, other);
        aligned.lhs.cmp(&aligned.rhs)
    }

    /// Nearest `f64` (ties to even), saturating to infinity or zero out of range
    ///
    /// Exact for every value created from an `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        scaled_to_f64(&self.mantissa, self.exponent)
    }

    /// Divide by `divisor`, which must divide `self` exactly
    ///
    /// Mantissas divide, exponents subtract. The result is only meaningful
    /// when the quotient of the mantissas is an integer, e.g. when `divisor`
    /// was obtained from [`gcd()`](Self::gcd) of `self`; debug builds check
    /// `divisor * result == self`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn exact_division(&self, divisor: &Self) -> Self {
        match self.checked_exact_division(divisor) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`exact_division()`](Self::exact_division), but reports a zero
    /// divisor as an error
    ///
    /// # Errors
    ///
    /// Returns [`DyadicError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_exact_division(&self, divisor: &Self) -> DyadicResult<Self> {
        if divisor.is_zero() {
            return Err(DyadicError::DivisionByZero);
        }
        let quotient = Self::from_parts(
            &self.mantissa / &divisor.mantissa,
            self.exponent - divisor.exponent,
        );
        debug_assert!(
            &(divisor * &quotient) == self,
            "{} does not divide {}",
            divisor.raw(),
            self.raw()
        );
        Ok(quotient)
    }

    /// Integral division: align exponents, divide truncating toward zero
    ///
    /// The quotient is always an integer (exponent reset to 0 before
    /// canonicalization), consistent with [`checked_rem()`](Self::checked_rem):
    /// `self == divisor * q + r`.
    ///
    /// # Errors
    ///
    /// Returns [`DyadicError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> DyadicResult<Self> {
        if divisor.is_zero() {
            return Err(DyadicError::DivisionByZero);
        }
        let aligned = align(self, divisor);
        Ok(Self::from_parts(&*aligned.lhs / &*aligned.rhs, 0))
    }

    /// Remainder of the integral division, with the sign of `self`
    ///
    /// # Errors
    ///
    /// Returns [`DyadicError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> DyadicResult<Self> {
        if divisor.is_zero() {
            return Err(DyadicError::DivisionByZero);
        }
        let aligned = align(self, divisor);
        Ok(Self::from_parts(
            &*aligned.lhs % &*aligned.rhs,
            aligned.exponent,
        ))
    }

    /// Greatest common divisor of the mantissas, as an integer
    ///
    /// The exponents, and with them every factor of two, are ignored:
    /// `gcd(12, 0.75)` is `gcd(3, 3) = 3` and `gcd(48, 18)` is `gcd(3, 9) = 3`.
    /// The result is non-negative, and zero only if both mantissas are zero.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self::from_parts(self.mantissa.gcd(&other.mantissa), 0)
    }

    /// Truncating square root
    ///
    /// An odd exponent is made even by doubling the mantissa, then the
    /// integer square root of the mantissa is taken and the exponent halved.
    /// The result is `floor(sqrt(m)) * 2^(e/2)` for that even representation:
    /// exact for perfect squares, an underestimate otherwise. Use
    /// [`exact_sqrt()`](Self::exact_sqrt) to tell the two apart.
    ///
    /// # Panics
    ///
    /// Panics if `self` is negative.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        match self.try_sqrt() {
            Ok(root) => root,
            Err(err) => panic!("{err}"),
        }
    }

    /// Truncating square root, see [`sqrt()`](Self::sqrt)
    ///
    /// # Errors
    ///
    /// Returns [`DyadicError::NegativeSqrt`] if `self` is negative.
    pub fn try_sqrt(&self) -> DyadicResult<Self> {
        if self.is_negative() {
            return Err(DyadicError::NegativeSqrt);
        }
        let (mantissa, exponent) = if self.exponent.is_odd() {
            (&self.mantissa << 1u8, self.exponent - 1)
        } else {
            (self.mantissa.clone(), self.exponent)
        };
        Ok(Self::from_parts(mantissa.sqrt(), exponent / 2))
    }

    /// The square root if it is exactly representable, `None` otherwise
    /// (including for negative values)
    #[must_use]
    pub fn exact_sqrt(&self) -> Option<Self> {
        let root = self.try_sqrt().ok()?;
        (&root * &root == *self).then_some(root)
    }

    /// Display adapter printing the raw representation `mantissa*2^exponent`
    #[must_use]
    pub fn raw(&self) -> Raw<'_> {
        Raw(self)
    }
}

/// Prints a [`Dyadic`] as `mantissa*2^exponent`, e.g. `3*2^3` for 24
#[derive(Debug, Clone, Copy)]
pub struct Raw<'a>(&'a Dyadic);

impl fmt::Display for Raw<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*2^{}", self.0.mantissa, self.0.exponent)
    }
}

impl fmt::Display for Dyadic {
    /// Human-readable approximation through `f64`; use [`Dyadic::raw`] for
    /// the exact value
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

impl FromStr for Dyadic {
    type Err = ParseDyadicError;

    /// Read an `f64` literal and capture its value exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: f64 = s
            .parse()
            .map_err(|_| ParseDyadicError::InvalidLiteral(s.to_string()))?;
        Ok(Self::from_f64(value)?)
    }
}

impl PartialOrd for Dyadic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dyadic {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        self.compare(other)
    }
}

impl From<BigInt> for Dyadic {
    fn from(value: BigInt) -> Self {
        Self::from_parts(value, 0)
    }
}

impl From<&BigInt> for Dyadic {
    fn from(value: &BigInt) -> Self {
        Self::from_parts(value.clone(), 0)
    }
}

macro_rules! impl_from_primitive_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Dyadic {
                fn from(value: $t) -> Self {
                    Self::from_parts(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_primitive_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for Dyadic {
    type Error = DyadicError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<f32> for Dyadic {
    type Error = DyadicError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_f64(f64::from(value))
    }
}
