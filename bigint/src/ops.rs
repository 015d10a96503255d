//! `std::ops` operators for [`BigInteger`].
//!
//! Each compound assignment taking `&BigInteger` is the primitive form.
//! Binary operators copy the left operand and call it, and the owned and
//! `i64` variants forward to it.
//!
//! `/`, `%`, `/=` and `%=` panic on a zero divisor, like the primitive
//! integers. Use [`BigInteger::div_rem`], [`BigInteger::try_div`] or
//! [`BigInteger::try_rem`] to get a [`crate::BigIntError`] instead.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use crate::big_integer::BigInteger;

impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        self.add_in_place(rhs);
    }
}

impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        self.sub_in_place(rhs);
    }
}

impl MulAssign<&BigInteger> for BigInteger {
    fn mul_assign(&mut self, rhs: &BigInteger) {
        self.mul_in_place(rhs);
    }
}

impl DivAssign<&BigInteger> for BigInteger {
    fn div_assign(&mut self, rhs: &BigInteger) {
        match self.div_rem(rhs) {
            Ok((quotient, _)) => *self = quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl RemAssign<&BigInteger> for BigInteger {
    fn rem_assign(&mut self, rhs: &BigInteger) {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => *self = remainder,
            Err(err) => panic!("{err}"),
        }
    }
}

impl ShlAssign<&BigInteger> for BigInteger {
    fn shl_assign(&mut self, rhs: &BigInteger) {
        self.shl_in_place(rhs);
    }
}

impl ShrAssign<&BigInteger> for BigInteger {
    fn shr_assign(&mut self, rhs: &BigInteger) {
        self.shr_in_place(rhs);
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $assign_imp<BigInteger> for BigInteger {
            fn $assign_method(&mut self, rhs: BigInteger) {
                <Self as $assign_imp<&BigInteger>>::$assign_method(self, &rhs);
            }
        }

        impl $assign_imp<i64> for BigInteger {
            fn $assign_method(&mut self, rhs: i64) {
                <Self as $assign_imp<&BigInteger>>::$assign_method(self, &BigInteger::from(rhs));
            }
        }

        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                let mut result = self.clone();
                <BigInteger as $assign_imp<&BigInteger>>::$assign_method(&mut result, rhs);
                result
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                <&BigInteger as $imp<&BigInteger>>::$method(self, &rhs)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(mut self, rhs: &BigInteger) -> BigInteger {
                <Self as $assign_imp<&BigInteger>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(mut self, rhs: BigInteger) -> BigInteger {
                <Self as $assign_imp<&BigInteger>>::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $imp<i64> for BigInteger {
            type Output = BigInteger;

            fn $method(mut self, rhs: i64) -> BigInteger {
                <Self as $assign_imp<i64>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $imp<i64> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: i64) -> BigInteger {
                <&BigInteger as $imp<&BigInteger>>::$method(self, &BigInteger::from(rhs))
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

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> BigInteger {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        -self.clone()
    }
}
