// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::variable::Variable;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::collections::btree_map::{self, Entry};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter;

mod add_sub;
mod div_rem;
pub mod monomial;
mod mul;
mod parse;

pub use self::div_rem::DivRem;
pub use self::monomial::Monomial;

/// A multivariate polynomial with rational coefficients.
///
/// Polynomials are always kept fully expanded, so two polynomials are equal
/// exactly when they have the same terms.
///
/// # Invariants
///
/// no coefficient stored in `terms` is zero
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, BigRational>,
}

impl From<BigRational> for Polynomial {
    fn from(value: BigRational) -> Self {
        let mut retval = Self::default();
        retval.add_term(Monomial::one(), value);
        retval
    }
}

impl From<BigInt> for Polynomial {
    fn from(value: BigInt) -> Self {
        BigRational::from_integer(value).into()
    }
}

impl From<i64> for Polynomial {
    fn from(value: i64) -> Self {
        BigInt::from(value).into()
    }
}

impl From<i32> for Polynomial {
    fn from(value: i32) -> Self {
        BigInt::from(value).into()
    }
}

impl From<&'_ Variable> for Polynomial {
    fn from(variable: &Variable) -> Self {
        Self::from_terms(iter::once((
            Monomial::from_powers(iter::once((variable.clone(), 1))),
            BigRational::one(),
        )))
    }
}

impl From<Variable> for Polynomial {
    fn from(variable: Variable) -> Self {
        Self::from(&variable)
    }
}

impl From<Monomial> for Polynomial {
    fn from(monomial: Monomial) -> Self {
        Self::from_terms(iter::once((monomial, BigRational::one())))
    }
}

impl Polynomial {
    /// sums the given terms; repeated monomials are combined
    pub fn from_terms<I: IntoIterator<Item = (Monomial, BigRational)>>(terms: I) -> Self {
        let mut retval = Self::default();
        for (monomial, coefficient) in terms {
            retval.add_term(monomial, coefficient);
        }
        retval
    }
    pub(crate) fn add_term(&mut self, monomial: Monomial, coefficient: BigRational) {
        if coefficient.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            Entry::Vacant(entry) => {
                entry.insert(coefficient);
            }
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coefficient;
                if entry.get().is_zero() {
                    entry.remove();
                }
            }
        }
    }
    /// terms from the largest monomial down
    pub fn terms(&self) -> iter::Rev<btree_map::Iter<Monomial, BigRational>> {
        self.terms.iter().rev()
    }
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
    pub fn leading_term(&self) -> Option<(&Monomial, &BigRational)> {
        self.terms.iter().next_back()
    }
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(Monomial::is_one)
    }
    /// returns the value of a polynomial without variables
    pub fn to_constant(&self) -> Option<BigRational> {
        match self.terms.iter().next() {
            None => Some(BigRational::zero()),
            Some((monomial, coefficient)) if monomial.is_one() && self.terms.len() == 1 => {
                Some(coefficient.clone())
            }
            _ => None,
        }
    }
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.terms
            .keys()
            .flat_map(|monomial| monomial.powers().iter().map(|(v, _)| v.clone()))
            .collect()
    }
    /// the largest exponent of `variable`; zero for the zero polynomial
    pub fn degree(&self, variable: &Variable) -> u32 {
        self.terms
            .keys()
            .map(|monomial| monomial.degree(variable))
            .max()
            .unwrap_or(0)
    }
    /// the total degree when only `variables` are counted
    pub fn total_degree(&self, variables: &[Variable]) -> u32 {
        self.terms
            .keys()
            .map(|monomial| variables.iter().map(|v| monomial.degree(v)).sum())
            .max()
            .unwrap_or(0)
    }
    /// views `self` as a polynomial in `variables` and groups it by exponent vector;
    /// the coefficients are polynomials in the remaining variables
    pub fn coefficients_in(&self, variables: &[Variable]) -> BTreeMap<Vec<u32>, Polynomial> {
        let mut retval: BTreeMap<Vec<u32>, Polynomial> = BTreeMap::new();
        for (monomial, coefficient) in &self.terms {
            let (exponents, rest) = monomial.split(variables);
            retval
                .entry(exponents)
                .or_default()
                .add_term(rest, coefficient.clone());
        }
        retval
    }
    /// the coefficient of `variables^exponents` when `self` is viewed as a polynomial
    /// in `variables`; zero if the monomial does not occur
    pub fn coefficient(&self, variables: &[Variable], exponents: &[u32]) -> Polynomial {
        assert_eq!(variables.len(), exponents.len());
        let mut retval = Polynomial::zero();
        for (monomial, coefficient) in &self.terms {
            if variables
                .iter()
                .zip(exponents)
                .any(|(v, &e)| monomial.degree(v) != e)
            {
                continue;
            }
            let (_, rest) = monomial.split(variables);
            retval.add_term(rest, coefficient.clone());
        }
        retval
    }
    /// dense coefficient list in `variable`, from the highest power down to the constant term;
    /// empty for the zero polynomial
    pub fn univariate_coefficients(&self, variable: &Variable) -> Vec<Polynomial> {
        if self.is_zero() {
            return Vec::new();
        }
        let degree = self.degree(variable);
        let mut retval = vec![Polynomial::zero(); degree as usize + 1];
        let variables = [variable.clone()];
        for (exponents, coefficient) in self.coefficients_in(&variables) {
            retval[(degree - exponents[0]) as usize] = coefficient;
        }
        retval
    }
    /// replaces every listed variable by its polynomial, all at once
    pub fn substitute(&self, substitutions: &[(Variable, Polynomial)]) -> Polynomial {
        let variables: Vec<Variable> = substitutions.iter().map(|(v, _)| v.clone()).collect();
        let mut retval = Polynomial::zero();
        for (monomial, coefficient) in &self.terms {
            let (exponents, rest) = monomial.split(&variables);
            let mut term = Polynomial::from_terms(iter::once((rest, coefficient.clone())));
            for ((_, value), exponent) in substitutions.iter().zip(exponents) {
                if exponent != 0 {
                    term *= num_traits::Pow::pow(value, exponent);
                }
            }
            retval += term;
        }
        retval
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (index, (monomial, coefficient)) in self.terms().enumerate() {
            match (index, coefficient.is_negative()) {
                (0, false) => {}
                (0, true) => write!(f, "-")?,
                (_, false) => write!(f, " + ")?,
                (_, true) => write!(f, " - ")?,
            }
            let magnitude = coefficient.abs();
            if monomial.is_one() {
                write!(f, "{}", magnitude)?;
            } else if magnitude.is_one() {
                write!(f, "{}", monomial)?;
            } else {
                write!(f, "{}*{}", magnitude, monomial)?;
            }
        }
        Ok(())
    }
}
