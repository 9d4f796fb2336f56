//! # dyadic
//!
//! Exact binary floating-point numbers: an arbitrary-precision integer
//! mantissa times a power of two.
//!
//! [`Dyadic`] is meant as the number type underneath geometric predicates and
//! constructions that must not round:
//!
//! - **Exact ring operations**: `+`, `-` and `*` never lose a bit
//! - **Canonical form**: the mantissa is odd (or the value is `0 * 2^0`), so
//!   every number has exactly one representation
//! - **Exact input from `f64`**: every finite double converts without loss
//! - **Explicit rounding**: only the conversion back to `f64` rounds
//!
//! ## Examples
//!
//! ```rust
//! use dyadic::Dyadic;
//!
//! let a = Dyadic::from(6);
//! let b = Dyadic::from(4);
//! let product = &a * &b;
//! assert_eq!(product, Dyadic::from(24));
//!
//! // 24 = 3 * 2^3
//! assert_eq!(product.raw().to_string(), "3*2^3");
//!
//! // Values from f64 are captured exactly, and convert back exactly
//! let x: Dyadic = "0.1".parse().unwrap();
//! assert_eq!(x.to_f64(), 0.1);
//!
//! // Mixed exponents are aligned, never rounded
//! let sum = Dyadic::from_f64(1e300).unwrap() + Dyadic::from_f64(1e-300).unwrap();
//! assert!(sum > Dyadic::from_f64(1e300).unwrap());
//! ```
//!
//! ## Division
//!
//! Three flavours, matching what exact kernels need:
//!
//! - [`Dyadic::exact_division`] when the divisor is known to divide (e.g. a gcd)
//! - `/` and `%`: integral quotient and remainder after aligning exponents
//! - [`quotient_to_f64`] for an `f64` approximation of a ratio
//!
//! Dividing by zero is a programming error: the operators panic, the
//! `checked_*` methods return [`DyadicError::DivisionByZero`].

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub(crate) mod align;
pub(crate) mod dyadic;
pub(crate) mod error;
pub(crate) mod float;
pub(crate) mod ops;
pub(crate) mod traits;

#[cfg(test)]
mod proptests;

// Re-export main types and functions
pub use dyadic::{Dyadic, Raw};
pub use error::{DyadicError, DyadicResult, ParseDyadicError, ParseResult};
pub use float::quotient_to_f64;
pub use num_bigint::{BigInt, Sign};
pub use traits::ExactRing;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_roundtrip() {
        for value in [0.0, 1.0, -1.0, 0.1, 123.456, -1e-300, 1e300, f64::MAX] {
            let exact = Dyadic::from_f64(value).unwrap();
            assert_eq!(exact.to_f64(), value);
            assert!(exact.is_canonical());
        }
    }

    #[test]
    fn test_order_matches_f64() {
        let numbers = [-100.0, -10.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 10.0, 100.0];

        let values: Vec<Dyadic> = numbers
            .iter()
            .map(|&v| Dyadic::from_f64(v).unwrap())
            .collect();

        for i in 1..values.len() {
            assert!(
                values[i - 1] < values[i],
                "Order not preserved: {} < {} failed",
                numbers[i - 1],
                numbers[i]
            );
        }
    }

    #[test]
    fn test_values_are_independent() {
        let a = Dyadic::from(5);
        let mut b = a.clone();
        b += 1;
        assert_eq!(a, Dyadic::from(5));
        assert_eq!(b, Dyadic::from(6));
    }

    #[test]
    fn test_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dyadic>();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let mut acc = Dyadic::zero();
                    for k in 0..100 {
                        acc += Dyadic::from_parts(BigInt::from(2 * k + 1), i - k);
                    }
                    acc
                })
            })
            .collect();
        let results: Vec<Dyadic> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for (i, result) in (0i64..).zip(&results) {
            let expected: Dyadic = (0..100)
                .map(|k| Dyadic::from_parts(BigInt::from(2 * k + 1), i - k))
                .sum();
            assert_eq!(*result, expected);
        }
    }
}
