// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::variable::Variable;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Mul;

/// A power product of variables.
///
/// # Invariants
///
/// `powers` is sorted by variable and every exponent is nonzero, so two
/// equal monomials are also structurally equal.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial {
    powers: Vec<(Variable, u32)>,
}

impl Monomial {
    pub fn one() -> Self {
        Self::default()
    }
    pub fn is_one(&self) -> bool {
        self.powers.is_empty()
    }
    pub fn from_powers<I: IntoIterator<Item = (Variable, u32)>>(powers: I) -> Self {
        let mut powers: Vec<_> = powers.into_iter().filter(|&(_, e)| e != 0).collect();
        powers.sort_by(|l, r| l.0.cmp(&r.0));
        let mut merged: Vec<(Variable, u32)> = Vec::with_capacity(powers.len());
        for (variable, exponent) in powers {
            match merged.last_mut() {
                Some(last) if last.0 == variable => last.1 += exponent,
                _ => merged.push((variable, exponent)),
            }
        }
        Self { powers: merged }
    }
    /// builds `variables[0]^exponents[0] * variables[1]^exponents[1] * ...`
    pub fn from_exponents(variables: &[Variable], exponents: &[u32]) -> Self {
        assert_eq!(variables.len(), exponents.len());
        Self::from_powers(variables.iter().cloned().zip(exponents.iter().copied()))
    }
    pub fn powers(&self) -> &[(Variable, u32)] {
        &self.powers
    }
    pub fn degree(&self, variable: &Variable) -> u32 {
        self.powers
            .binary_search_by(|(v, _)| v.cmp(variable))
            .map(|index| self.powers[index].1)
            .unwrap_or(0)
    }
    pub fn total_degree(&self) -> u32 {
        self.powers.iter().map(|&(_, e)| e).sum()
    }
    /// returns the exponents of `variables`, and the cofactor made of all other variables
    pub fn split(&self, variables: &[Variable]) -> (Vec<u32>, Monomial) {
        let exponents = variables.iter().map(|v| self.degree(v)).collect();
        let rest = self
            .powers
            .iter()
            .filter(|(v, _)| !variables.contains(v))
            .cloned()
            .collect();
        (exponents, Monomial { powers: rest })
    }
    pub fn divides(&self, rhs: &Monomial) -> bool {
        self.powers.iter().all(|(v, e)| rhs.degree(v) >= *e)
    }
    /// returns `self / rhs` if `rhs` divides `self`
    pub fn checked_div(&self, rhs: &Monomial) -> Option<Monomial> {
        if !rhs.divides(self) {
            return None;
        }
        let powers = self
            .powers
            .iter()
            .filter_map(|(v, e)| {
                let e = e - rhs.degree(v);
                if e == 0 {
                    None
                } else {
                    Some((v.clone(), e))
                }
            })
            .collect();
        Some(Monomial { powers })
    }
}

impl<'a> Mul<&'a Monomial> for &'a Monomial {
    type Output = Monomial;
    fn mul(self, rhs: &Monomial) -> Monomial {
        let (l, r) = (&self.powers, &rhs.powers);
        let mut powers = Vec::with_capacity(l.len() + r.len());
        let (mut li, mut ri) = (0, 0);
        while li < l.len() && ri < r.len() {
            match l[li].0.cmp(&r[ri].0) {
                Ordering::Less => {
                    powers.push(l[li].clone());
                    li += 1;
                }
                Ordering::Greater => {
                    powers.push(r[ri].clone());
                    ri += 1;
                }
                Ordering::Equal => {
                    powers.push((l[li].0.clone(), l[li].1 + r[ri].1));
                    li += 1;
                    ri += 1;
                }
            }
        }
        powers.extend_from_slice(&l[li..]);
        powers.extend_from_slice(&r[ri..]);
        Monomial { powers }
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

/// pure lexicographic order, the smallest variable being the most significant
impl Ord for Monomial {
    fn cmp(&self, rhs: &Self) -> Ordering {
        let mut l = self.powers.iter();
        let mut r = rhs.powers.iter();
        loop {
            match (l.next(), r.next()) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((lv, le)), Some((rv, re))) => match lv.cmp(rv) {
                    Ordering::Less => return Ordering::Greater,
                    Ordering::Greater => return Ordering::Less,
                    Ordering::Equal => match le.cmp(re) {
                        Ordering::Equal => {}
                        ordering => return ordering,
                    },
                },
            }
        }
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.powers.is_empty() {
            return write!(f, "1");
        }
        for (index, (variable, exponent)) in self.powers.iter().enumerate() {
            if index != 0 {
                write!(f, "*")?;
            }
            match exponent {
                1 => write!(f, "{}", variable)?,
                _ => write!(f, "{}^{}", variable, exponent)?,
            }
        }
        Ok(())
    }
}

/// all exponent vectors of length `variable_count` with total degree at most `degree`
pub fn monomials_up_to_degree(variable_count: usize, degree: u32) -> BTreeSet<Vec<u32>> {
    fn recurse(prefix: &mut Vec<u32>, remaining: usize, budget: u32, out: &mut BTreeSet<Vec<u32>>) {
        if remaining == 0 {
            out.insert(prefix.clone());
            return;
        }
        for exponent in 0..=budget {
            prefix.push(exponent);
            recurse(prefix, remaining - 1, budget - exponent, out);
            prefix.pop();
        }
    }
    let mut retval = BTreeSet::new();
    recurse(
        &mut Vec::with_capacity(variable_count),
        variable_count,
        degree,
        &mut retval,
    );
    retval
}

/// all exponent vectors of length `variable_count` with total degree exactly `degree`,
/// sorted by [`lex_descending`]
pub fn monomials_of_degree(variable_count: usize, degree: u32) -> Vec<Vec<u32>> {
    let all = monomials_up_to_degree(variable_count, degree);
    let mut retval: Vec<_> = match degree.checked_sub(1) {
        None => all.into_iter().collect(),
        Some(lower) => all
            .difference(&monomials_up_to_degree(variable_count, lower))
            .cloned()
            .collect(),
    };
    retval.sort_by(lex_descending);
    retval
}

/// lexicographic over the variable tuple, largest first
#[allow(clippy::ptr_arg)]
pub fn lex_descending(lhs: &Vec<u32>, rhs: &Vec<u32>) -> Ordering {
    rhs.cmp(lhs)
}

/// total degree, then lexicographic, largest first
#[allow(clippy::ptr_arg)]
pub fn graded_lex_descending(lhs: &Vec<u32>, rhs: &Vec<u32>) -> Ordering {
    let degree = |v: &Vec<u32>| v.iter().sum::<u32>();
    degree(rhs)
        .cmp(&degree(lhs))
        .then_with(|| lex_descending(lhs, rhs))
}
