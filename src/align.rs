//! Exponent alignment for binary operators
//!
//! `a = m1 * 2^e1` and `b = m2 * 2^e2` are rewritten as
//! `a = lhs * 2^exponent` and `b = rhs * 2^exponent` with
//! `exponent = min(e1, e2)`. Only the operand with the larger exponent is
//! shifted; the other is borrowed as is.

use crate::dyadic::Dyadic;
use num_bigint::BigInt;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Both mantissas brought to a common exponent
#[derive(Debug)]
pub(crate) struct Aligned<'a> {
    pub lhs: Cow<'a, BigInt>,
    pub rhs: Cow<'a, BigInt>,
    pub exponent: i64,
}

/// Align `a` and `b` on the smaller of their exponents.
///
/// The left shift never drops bits, so the aligned pair represents exactly
/// the same two values.
pub(crate) fn align<'a>(a: &'a Dyadic, b: &'a Dyadic) -> Aligned<'a> {
    let (e1, e2) = (a.exponent(), b.exponent());
    match e2.cmp(&e1) {
        Ordering::Less => Aligned {
            lhs: Cow::Owned(a.mantissa() << e1.abs_diff(e2)),
            rhs: Cow::Borrowed(b.mantissa()),
            exponent: e2,
        },
        Ordering::Greater => Aligned {
            lhs: Cow::Borrowed(a.mantissa()),
            rhs: Cow::Owned(b.mantissa() << e2.abs_diff(e1)),
            exponent: e1,
        },
        Ordering::Equal => Aligned {
            lhs: Cow::Borrowed(a.mantissa()),
            rhs: Cow::Borrowed(b.mantissa()),
            exponent: e1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_shifts_larger_exponent() {
        // 3 * 2^4 and 5 * 2^1
        let a = Dyadic::from_parts(BigInt::from(3), 4);
        let b = Dyadic::from_parts(BigInt::from(5), 1);
        let aligned = align(&a, &b);
        assert_eq!(aligned.exponent, 1);
        assert_eq!(*aligned.lhs, BigInt::from(24));
        assert_eq!(*aligned.rhs, BigInt::from(5));
        assert!(matches!(aligned.lhs, Cow::Owned(_)));
        assert!(matches!(aligned.rhs, Cow::Borrowed(_)));
    }

    #[test]
    fn test_align_is_symmetric() {
        let a = Dyadic::from_parts(BigInt::from(5), -3);
        let b = Dyadic::from_parts(BigInt::from(-7), 2);
        let ab = align(&a, &b);
        let ba = align(&b, &a);
        assert_eq!(ab.exponent, -3);
        assert_eq!(ba.exponent, -3);
        assert_eq!(ab.lhs, ba.rhs);
        assert_eq!(ab.rhs, ba.lhs);
        // -7 * 2^2 = -224 * 2^-3
        assert_eq!(*ab.rhs, BigInt::from(-224));
    }

    #[test]
    fn test_align_equal_exponents_borrows_both() {
        let a = Dyadic::from_parts(BigInt::from(9), -2);
        let b = Dyadic::from_parts(BigInt::from(11), -2);
        let aligned = align(&a, &b);
        assert_eq!(aligned.exponent, -2);
        assert!(matches!(aligned.lhs, Cow::Borrowed(_)));
        assert!(matches!(aligned.rhs, Cow::Borrowed(_)));
    }

    #[test]
    fn test_align_with_zero() {
        // zero sits at exponent 0, so a negative exponent wins
        let zero = Dyadic::zero();
        let half = Dyadic::from_parts(BigInt::from(1), -1);
        let aligned = align(&zero, &half);
        assert_eq!(aligned.exponent, -1);
        assert_eq!(*aligned.lhs, BigInt::from(0));
        assert_eq!(*aligned.rhs, BigInt::from(1));
    }
}
