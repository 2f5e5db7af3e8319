// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{polynomial::Polynomial, traits::ExactDiv};
use num_traits::Zero;

/// Result of dividing by a single polynomial.
///
/// `numerator == quotient * divisor + remainder` and no term of `remainder`
/// is divisible by the leading monomial of `divisor`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DivRem {
    pub quotient: Polynomial,
    pub remainder: Polynomial,
}

impl Polynomial {
    /// multivariate division by one divisor using the lexicographic term order;
    /// returns `None` if `divisor` is zero
    pub fn checked_div_rem(&self, divisor: &Polynomial) -> Option<DivRem> {
        let (divisor_monomial, divisor_coefficient) = divisor.leading_term()?;
        let mut quotient = Polynomial::zero();
        let mut remainder = Polynomial::zero();
        let mut rest = self.clone();
        while let Some((monomial, coefficient)) = rest.leading_term() {
            let monomial = monomial.clone();
            let coefficient = coefficient.clone();
            match monomial.checked_div(divisor_monomial) {
                Some(factor_monomial) => {
                    let factor_coefficient = coefficient / divisor_coefficient;
                    rest -= divisor.mul_term(&factor_monomial, &factor_coefficient);
                    quotient.add_term(factor_monomial, factor_coefficient);
                }
                None => {
                    rest.terms.remove(&monomial);
                    remainder.add_term(monomial, coefficient);
                }
            }
        }
        Some(DivRem {
            quotient,
            remainder,
        })
    }
    pub fn div_rem(&self, divisor: &Polynomial) -> DivRem {
        self.checked_div_rem(divisor)
            .expect("polynomial division by zero")
    }
}

impl<'a> ExactDiv<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn checked_exact_div(self, rhs: &Polynomial) -> Option<Polynomial> {
        (&self).checked_exact_div(rhs)
    }
}

impl<'a, 'b> ExactDiv<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;
    fn checked_exact_div(self, rhs: &Polynomial) -> Option<Polynomial> {
        let DivRem {
            quotient,
            remainder,
        } = self.checked_div_rem(rhs)?;
        if remainder.is_zero() {
            Some(quotient)
        } else {
            None
        }
    }
}
