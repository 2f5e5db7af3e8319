// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{error::ResultantError, polynomial::Polynomial};

/// division that is only defined when there is no remainder
pub trait ExactDiv<Rhs = Self>: Sized {
    type Output;
    fn checked_exact_div(self, rhs: Rhs) -> Option<Self::Output>;
    fn exact_div(self, rhs: Rhs) -> Self::Output {
        self.checked_exact_div(rhs).expect("inexact division")
    }
}

/// A polynomial given as a function of its arguments.
///
/// The resultant constructions never look inside the polynomial; they only
/// evaluate it at tuples of symbolic values.
pub trait PolynomialEval {
    fn eval(&self, args: &[Polynomial]) -> Polynomial;
    /// the number of arguments expected, if known
    fn arity(&self) -> Option<usize> {
        None
    }
}

impl<F: Fn(&[Polynomial]) -> Polynomial> PolynomialEval for F {
    fn eval(&self, args: &[Polynomial]) -> Polynomial {
        self(args)
    }
}

/// fails if `function` declares an arity other than `expected`
pub(crate) fn check_arity<F: PolynomialEval + ?Sized>(
    function: &F,
    expected: usize,
) -> Result<(), ResultantError> {
    match function.arity() {
        Some(arity) if arity != expected => Err(ResultantError::invalid_input(format!(
            "polynomial function takes {} arguments, {} variables were given",
            arity, expected
        ))),
        _ => Ok(()),
    }
}
