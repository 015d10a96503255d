//! `std::ops` operators for [`Integer`], all promoting on overflow.
//!
//! Compound assignment from `&Integer` is the primitive form and the rest
//! forward to it. `/` and `%` panic on a zero divisor; [`Integer::try_div`]
//! and [`Integer::try_rem`] report it as an error.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use bigint::BigInteger;
use log::debug;

use crate::integer::Integer;

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        self.add_in_place(rhs);
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        self.sub_in_place(rhs);
    }
}

impl MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        self.mul_in_place(rhs);
    }
}

impl DivAssign<&Integer> for Integer {
    fn div_assign(&mut self, rhs: &Integer) {
        match self.try_div(rhs) {
            Ok(quotient) => *self = quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl RemAssign<&Integer> for Integer {
    fn rem_assign(&mut self, rhs: &Integer) {
        match self.try_rem(rhs) {
            Ok(remainder) => *self = remainder,
            Err(err) => panic!("{err}"),
        }
    }
}

impl ShlAssign<&Integer> for Integer {
    fn shl_assign(&mut self, rhs: &Integer) {
        self.shl_in_place(rhs);
    }
}

impl ShrAssign<&Integer> for Integer {
    fn shr_assign(&mut self, rhs: &Integer) {
        self.shr_in_place(rhs);
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $assign_imp<Integer> for Integer {
            fn $assign_method(&mut self, rhs: Integer) {
                <Self as $assign_imp<&Integer>>::$assign_method(self, &rhs);
            }
        }

        impl $assign_imp<i64> for Integer {
            fn $assign_method(&mut self, rhs: i64) {
                <Self as $assign_imp<&Integer>>::$assign_method(self, &Integer::Fixed(rhs));
            }
        }

        impl $imp<&Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                let mut result = self.clone();
                <Integer as $assign_imp<&Integer>>::$assign_method(&mut result, rhs);
                result
            }
        }

        impl $imp<Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                <&Integer as $imp<&Integer>>::$method(self, &rhs)
            }
        }

        impl $imp<&Integer> for Integer {
            type Output = Integer;

            fn $method(mut self, rhs: &Integer) -> Integer {
                <Self as $assign_imp<&Integer>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $imp<Integer> for Integer {
            type Output = Integer;

            fn $method(mut self, rhs: Integer) -> Integer {
                <Self as $assign_imp<&Integer>>::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $imp<i64> for Integer {
            type Output = Integer;

            fn $method(mut self, rhs: i64) -> Integer {
                <Self as $assign_imp<i64>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $imp<i64> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: i64) -> Integer {
                <&Integer as $imp<&Integer>>::$method(self, &Integer::Fixed(rhs))
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);
forward_binop!(Shl, shl, ShlAssign, shl_assign);
forward_binop!(Shr, shr, ShrAssign, shr_assign);

impl Neg for Integer {
    type Output = Integer;

    /// `-i64::MIN` has no `i64` form, so it promotes.
    fn neg(self) -> Integer {
        match self {
            Integer::Fixed(value) => match value.checked_neg() {
                Some(negated) => Integer::Fixed(negated),
                None => {
                    debug!("neg overflowed i64 ({value}), promoting");
                    Integer::Big(-BigInteger::from(value))
                }
            },
            Integer::Big(value) => Integer::Big(-value),
        }
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        -self.clone()
    }
}
