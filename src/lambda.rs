// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    error::{ParsePolynomialError, ResultantError},
    polynomial::Polynomial,
    traits::PolynomialEval,
    variable::Variable,
};
use std::fmt;

/// A polynomial body abstracted over a tuple of parameters.
///
/// Calling a lambda substitutes the arguments for the parameters all at
/// once. Variables of the body that are not parameters stay free, so
/// `Lambda::new(vec![y, z], x^2 + y^2 - 1)` is a polynomial in `y, z`
/// whose coefficients involve `x`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Lambda {
    parameters: Vec<Variable>,
    body: Polynomial,
}

impl Lambda {
    pub fn new(parameters: Vec<Variable>, body: Polynomial) -> Self {
        Self { parameters, body }
    }
    /// parses `body` and abstracts it over `parameters`
    pub fn parse(parameters: &[Variable], body: &str) -> Result<Self, ParsePolynomialError> {
        Ok(Self::new(parameters.to_vec(), body.parse()?))
    }
    pub fn parameters(&self) -> &[Variable] {
        &self.parameters
    }
    pub fn body(&self) -> &Polynomial {
        &self.body
    }
    pub fn call(&self, args: &[Polynomial]) -> Result<Polynomial, ResultantError> {
        if args.len() != self.parameters.len() {
            return Err(ResultantError::invalid_input(format!(
                "lambda of {} parameters called with {} arguments",
                self.parameters.len(),
                args.len()
            )));
        }
        let substitutions: Vec<_> = self
            .parameters
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect();
        Ok(self.body.substitute(&substitutions))
    }
}

impl PolynomialEval for Lambda {
    /// # Panics
    ///
    /// panics if the argument count differs from [`PolynomialEval::arity`]
    fn eval(&self, args: &[Polynomial]) -> Polynomial {
        match self.call(args) {
            Ok(retval) => retval,
            Err(err) => panic!("{}", err),
        }
    }
    fn arity(&self) -> Option<usize> {
        Some(self.parameters.len())
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", parameter)?;
        }
        write!(f, ") -> {}", self.body)
    }
}
