//! Arithmetic operators for [`Dyadic`]
//!
//! Every operator is implemented once on references and forwarded for the
//! owned, borrowed and mixed-primitive combinations. `/` and `%` follow the
//! primitive integers and panic on a zero divisor; the `checked_*` methods on
//! [`Dyadic`] report it as an error instead.

use crate::align::align;
use crate::dyadic::Dyadic;
use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::mem;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

fn add(a: &Dyadic, b: &Dyadic) -> Dyadic {
    // Sparse vectors and matrices add zeros all the time
    if b.is_zero() {
        return a.clone();
    }
    if a.is_zero() {
        return b.clone();
    }
    let aligned = align(a, b);
    Dyadic::from_parts(&*aligned.lhs + &*aligned.rhs, aligned.exponent)
}

fn sub(a: &Dyadic, b: &Dyadic) -> Dyadic {
    if b.is_zero() {
        return a.clone();
    }
    if a.is_zero() {
        return -b;
    }
    let aligned = align(a, b);
    Dyadic::from_parts(&*aligned.lhs - &*aligned.rhs, aligned.exponent)
}

// Owned left operands are handed back untouched when there is nothing to add
fn add_owned(a: Dyadic, b: &Dyadic) -> Dyadic {
    if b.is_zero() {
        return a;
    }
    add(&a, b)
}

fn sub_owned(a: Dyadic, b: &Dyadic) -> Dyadic {
    if b.is_zero() {
        return a;
    }
    sub(&a, b)
}

fn mul_owned(a: Dyadic, b: &Dyadic) -> Dyadic {
    mul(&a, b)
}

fn div_owned(a: Dyadic, b: &Dyadic) -> Dyadic {
    div(&a, b)
}

fn rem_owned(a: Dyadic, b: &Dyadic) -> Dyadic {
    rem(&a, b)
}

fn mul(a: &Dyadic, b: &Dyadic) -> Dyadic {
    Dyadic::from_parts(a.mantissa() * b.mantissa(), a.exponent() + b.exponent())
}

fn div(a: &Dyadic, b: &Dyadic) -> Dyadic {
    match a.checked_div(b) {
        Ok(quotient) => quotient,
        Err(err) => panic!("{err}"),
    }
}

fn rem(a: &Dyadic, b: &Dyadic) -> Dyadic {
    match a.checked_rem(b) {
        Ok(remainder) => remainder,
        Err(err) => panic!("{err}"),
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $core:ident, $owned:ident) => {
        impl $imp<&Dyadic> for &Dyadic {
            type Output = Dyadic;

            fn $method(self, rhs: &Dyadic) -> Dyadic {
                $core(self, rhs)
            }
        }

        impl $imp<Dyadic> for &Dyadic {
            type Output = Dyadic;

            fn $method(self, rhs: Dyadic) -> Dyadic {
                $core(self, &rhs)
            }
        }

        impl $imp<&Dyadic> for Dyadic {
            type Output = Dyadic;

            fn $method(self, rhs: &Dyadic) -> Dyadic {
                $owned(self, rhs)
            }
        }

        impl $imp for Dyadic {
            type Output = Dyadic;

            fn $method(self, rhs: Dyadic) -> Dyadic {
                $owned(self, &rhs)
            }
        }

        impl $assign_imp<&Dyadic> for Dyadic {
            fn $assign_method(&mut self, rhs: &Dyadic) {
                *self = $owned(mem::take(self), rhs);
            }
        }

        impl $assign_imp for Dyadic {
            fn $assign_method(&mut self, rhs: Dyadic) {
                *self = $owned(mem::take(self), &rhs);
            }
        }

        forward_binop!(@primitive $imp, $method, $assign_imp, $assign_method, $core, $owned, i32, i64);
    };
    (@primitive $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $core:ident, $owned:ident, $($int:ty),*) => {
        $(
            impl $imp<$int> for Dyadic {
                type Output = Dyadic;

                fn $method(self, rhs: $int) -> Dyadic {
                    $owned(self, &Dyadic::from(rhs))
                }
            }

            impl $imp<$int> for &Dyadic {
                type Output = Dyadic;

                fn $method(self, rhs: $int) -> Dyadic {
                    $core(self, &Dyadic::from(rhs))
                }
            }

            impl $imp<Dyadic> for $int {
                type Output = Dyadic;

                fn $method(self, rhs: Dyadic) -> Dyadic {
                    $core(&Dyadic::from(self), &rhs)
                }
            }

            impl $imp<&Dyadic> for $int {
                type Output = Dyadic;

                fn $method(self, rhs: &Dyadic) -> Dyadic {
                    $core(&Dyadic::from(self), rhs)
                }
            }

            impl $assign_imp<$int> for Dyadic {
                fn $assign_method(&mut self, rhs: $int) {
                    *self = $owned(mem::take(self), &Dyadic::from(rhs));
                }
            }
        )*
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add, add_owned);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub, sub_owned);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul, mul_owned);
forward_binop!(Div, div, DivAssign, div_assign, div, div_owned);
forward_binop!(Rem, rem, RemAssign, rem_assign, rem, rem_owned);

impl Neg for Dyadic {
    type Output = Dyadic;

    fn neg(self) -> Dyadic {
        let (mantissa, exponent) = self.into_parts();
        Dyadic::from_parts(-mantissa, exponent)
    }
}

impl Neg for &Dyadic {
    type Output = Dyadic;

    fn neg(self) -> Dyadic {
        Dyadic::from_parts(-self.mantissa(), self.exponent())
    }
}

impl Sum for Dyadic {
    fn sum<I: Iterator<Item = Dyadic>>(iter: I) -> Self {
        iter.fold(Dyadic::zero(), |acc, x| {
            if acc.is_zero() {
                x
            } else {
                add_owned(acc, &x)
            }
        })
    }
}

impl<'a> Sum<&'a Dyadic> for Dyadic {
    fn sum<I: Iterator<Item = &'a Dyadic>>(iter: I) -> Self {
        iter.fold(Dyadic::zero(), |acc, x| add_owned(acc, x))
    }
}

impl Product for Dyadic {
    fn product<I: Iterator<Item = Dyadic>>(iter: I) -> Self {
        iter.fold(Dyadic::one(), |acc, x| mul(&acc, &x))
    }
}

impl<'a> Product<&'a Dyadic> for Dyadic {
    fn product<I: Iterator<Item = &'a Dyadic>>(iter: I) -> Self {
        iter.fold(Dyadic::one(), |acc, x| mul(&acc, x))
    }
}

macro_rules! impl_primitive_cmp {
    ($($int:ty),*) => {
        $(
            impl PartialEq<$int> for Dyadic {
                fn eq(&self, other: &$int) -> bool {
                    *self == Dyadic::from(*other)
                }
            }

            impl PartialOrd<$int> for Dyadic {
                fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
                    Some(self.compare(&Dyadic::from(*other)))
                }
            }
        )*
    };
}

impl_primitive_cmp!(i32, i64);
