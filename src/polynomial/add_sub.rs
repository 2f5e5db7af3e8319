// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::Polynomial;
use num_rational::BigRational;
use num_traits::{CheckedAdd, CheckedSub, Zero};
use std::{
    borrow::Cow,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

fn add_sub_assign<SignFn: Fn(BigRational) -> BigRational>(
    lhs: &mut Polynomial,
    rhs: Cow<Polynomial>,
    sign: SignFn,
) {
    match rhs {
        Cow::Owned(rhs) => {
            for (monomial, coefficient) in rhs.terms {
                lhs.add_term(monomial, sign(coefficient));
            }
        }
        Cow::Borrowed(rhs) => {
            for (monomial, coefficient) in &rhs.terms {
                lhs.add_term(monomial.clone(), sign(coefficient.clone()));
            }
        }
    }
}

fn keep(value: BigRational) -> BigRational {
    value
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        add_sub_assign(self, Cow::Owned(rhs), keep);
    }
}

impl<'a> AddAssign<&'a Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        add_sub_assign(self, Cow::Borrowed(rhs), keep);
    }
}

impl Add for Polynomial {
    type Output = Polynomial;
    fn add(mut self, rhs: Polynomial) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a> Add<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn add(mut self, rhs: &Polynomial) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a> Add<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn add(self, mut rhs: Polynomial) -> Self::Output {
        rhs += self;
        rhs
    }
}

impl<'a> Add for &'a Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Self) -> Self::Output {
        let mut retval = self.clone();
        retval += rhs;
        retval
    }
}

impl CheckedAdd for Polynomial {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Default::default()
    }
    fn set_zero(&mut self) {
        self.terms.clear();
    }
    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, rhs: Polynomial) {
        add_sub_assign(self, Cow::Owned(rhs), |c: BigRational| -c);
    }
}

impl<'a> SubAssign<&'a Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        add_sub_assign(self, Cow::Borrowed(rhs), |c: BigRational| -c);
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;
    fn sub(mut self, rhs: Polynomial) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a> Sub<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn sub(mut self, rhs: &Polynomial) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a> Sub<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Self::Output {
        let mut retval = -rhs;
        retval += self;
        retval
    }
}

impl<'a> Sub for &'a Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut retval = self.clone();
        retval -= rhs;
        retval
    }
}

impl CheckedSub for Polynomial {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(self - rhs)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(mut self) -> Polynomial {
        for coefficient in self.terms.values_mut() {
            *coefficient = -&*coefficient;
        }
        self
    }
}

impl Neg for &'_ Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tests::test_op_helper;

    fn parse(text: &str) -> Polynomial {
        text.parse().unwrap()
    }

    #[test]
    fn test_add() {
        let test = |l: &str, r: &str, expected: &str| {
            test_op_helper(
                parse(l),
                parse(r),
                &parse(expected),
                |l, r| *l += r,
                |l, r| *l += r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
            );
        };
        test("x^2 + 2*x + 1", "x - 1", "x^2 + 3*x");
        test("a*x + y", "-a*x + y/3", "4/3*y");
        test("x*y", "-x*y", "0");
        test("0", "b", "b");
    }

    #[test]
    fn test_sub() {
        let test = |l: &str, r: &str, expected: &str| {
            test_op_helper(
                parse(l),
                parse(r),
                &parse(expected),
                |l, r| *l -= r,
                |l, r| *l -= r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
            );
        };
        test("x^2 - 5*x + 6", "x^2 - 3*x + 2", "-2*x + 4");
        test("a", "a", "0");
        test("0", "y - z", "z - y");
    }

    #[test]
    fn test_neg() {
        assert_eq!(-parse("x - 2*y + 1/2"), parse("-x + 2*y - 1/2"));
        assert_eq!(-&parse("0"), parse("0"));
    }
}
