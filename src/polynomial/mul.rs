// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::{Monomial, Polynomial};
use num_rational::BigRational;
use num_traits::{CheckedMul, One, Pow, Zero};
use std::ops::{Mul, MulAssign};

impl Polynomial {
    /// returns `self * coefficient * monomial`
    pub(crate) fn mul_term(&self, monomial: &Monomial, coefficient: &BigRational) -> Polynomial {
        if coefficient.is_zero() {
            return Zero::zero();
        }
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m * monomial, c * coefficient))
                .collect(),
        }
    }
}

impl<'a> Mul for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Zero::zero();
        }
        let (short, long) = if self.term_count() <= rhs.term_count() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut retval = Polynomial::zero();
        for (monomial, coefficient) in &short.terms {
            for (m, c) in &long.terms {
                retval.add_term(monomial * m, coefficient * c);
            }
        }
        retval
    }
}

impl<'a> Mul<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        self * &rhs
    }
}

impl<'a> Mul<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        &self * rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, rhs: Polynomial) {
        *self = &*self * rhs;
    }
}

impl<'a> MulAssign<&'a Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = &*self * rhs;
    }
}

impl CheckedMul for Polynomial {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Some(self * rhs)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        BigRational::one().into()
    }
    fn is_one(&self) -> bool {
        self.to_constant().map_or(false, |v| v.is_one())
    }
}

impl Pow<u32> for &'_ Polynomial {
    type Output = Polynomial;
    fn pow(self, mut exponent: u32) -> Polynomial {
        let mut base = self.clone();
        let mut retval = Polynomial::one();
        loop {
            if exponent % 2 != 0 {
                retval *= &base;
            }
            exponent /= 2;
            if exponent == 0 {
                break;
            }
            base = &base * &base;
        }
        retval
    }
}

impl Pow<u32> for Polynomial {
    type Output = Polynomial;
    fn pow(self, exponent: u32) -> Polynomial {
        (&self).pow(exponent)
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
    fn test_mul() {
        let test = |l: &str, r: &str, expected: &str| {
            test_op_helper(
                parse(l),
                parse(r),
                &parse(expected),
                |l, r| *l *= r,
                |l, r| *l *= r,
                |l, r| l * r,
                |l, r| l * r,
                |l, r| l * r,
                |l, r| l * r,
            );
        };
        test("x - 2", "x - 3", "x^2 - 5*x + 6");
        test("a*x + y", "x + b*y", "a*x^2 + a*b*x*y + x*y + b*y^2");
        test("x/2 + 1/3", "6", "3*x + 2");
        test("x + y", "0", "0");
    }

    #[test]
    fn test_pow() {
        assert_eq!(parse("x + 1").pow(0), parse("1"));
        assert_eq!(parse("x + 1").pow(3), parse("x^3 + 3*x^2 + 3*x + 1"));
        assert_eq!((&parse("x - y")).pow(2), parse("x^2 - 2*x*y + y^2"));
        assert!(Polynomial::one().is_one());
        assert!(!parse("x").is_one());
    }
}
