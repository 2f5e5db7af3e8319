// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    error::ResultantError,
    matrix::Matrix,
    polynomial::{monomial, Polynomial},
    traits::{check_arity, ExactDiv, PolynomialEval},
    variable::Variable,
};
use log::{debug, trace};
use num_traits::{One, Zero};

/// Dixon's resultant of `n + 1` polynomials in `n` variables.
///
/// The dummy variables and the per-variable maximum degrees are computed once
/// when the value is constructed.
///
/// ```
/// # use resultants::{DixonResultant, Lambda, Variable};
/// let y = Variable::new("y");
/// let z = Variable::new("z");
/// let variables = [y, z];
/// let system = DixonResultant::new(
///     vec![
///         Lambda::parse(&variables, "x^2 + y^2 - 1").unwrap(),
///         Lambda::parse(&variables, "x^2 + z^2 - 1").unwrap(),
///         Lambda::parse(&variables, "y^2 + z^2 - 1").unwrap(),
///     ],
///     variables.to_vec(),
/// )
/// .unwrap();
/// assert_eq!(
///     system.resultant().unwrap(),
///     "16*x^8 - 32*x^6 + 24*x^4 - 8*x^2 + 1"
///         .parse::<resultants::Polynomial>()
///         .unwrap()
/// );
/// ```
#[derive(Clone, Debug)]
pub struct DixonResultant<F> {
    polynomials: Vec<F>,
    variables: Vec<Variable>,
    dummy_variables: Vec<Variable>,
    max_degrees: Vec<u32>,
}

impl<F: PolynomialEval> DixonResultant<F> {
    /// the dummy variables are printed as `alpha[0]`, `alpha[1]`, ...
    pub fn new(polynomials: Vec<F>, variables: Vec<Variable>) -> Result<Self, ResultantError> {
        Self::with_dummy_prefix(polynomials, variables, "alpha")
    }
    pub fn with_dummy_prefix(
        polynomials: Vec<F>,
        variables: Vec<Variable>,
        dummy_prefix: &str,
    ) -> Result<Self, ResultantError> {
        if polynomials.len() != variables.len() + 1 {
            return Err(ResultantError::invalid_input(format!(
                "Dixon's method needs one more polynomial than variables: \
                 got {} polynomials in {} variables",
                polynomials.len(),
                variables.len()
            )));
        }
        for polynomial in &polynomials {
            check_arity(polynomial, variables.len())?;
        }
        let dummy_variables = Variable::indexed(dummy_prefix, variables.len());
        let arguments: Vec<Polynomial> = variables.iter().map(Polynomial::from).collect();
        let evaluated: Vec<Polynomial> = polynomials
            .iter()
            .map(|polynomial| polynomial.eval(&arguments))
            .collect();
        let max_degrees = variables
            .iter()
            .map(|variable| {
                evaluated
                    .iter()
                    .map(|polynomial| polynomial.degree(variable))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        Ok(Self {
            polynomials,
            variables,
            dummy_variables,
            max_degrees,
        })
    }
    /// the number of variables
    pub fn n(&self) -> usize {
        self.variables.len()
    }
    /// the number of polynomials, always `n + 1`
    pub fn m(&self) -> usize {
        self.polynomials.len()
    }
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
    pub fn dummy_variables(&self) -> &[Variable] {
        &self.dummy_variables
    }
    /// `max_degrees()[i]` is the largest degree in `variables()[i]` over all polynomials
    pub fn max_degrees(&self) -> &[u32] {
        &self.max_degrees
    }
    /// the sum of [`max_degrees`](Self::max_degrees), bounding the total
    /// degree of the Dixon matrix's column monomials
    pub fn upper_degree(&self) -> u32 {
        self.max_degrees.iter().sum()
    }
    pub fn polynomials(&self) -> &[F] {
        &self.polynomials
    }
    /// The Dixon polynomial, a polynomial in the dummy variables whose
    /// coefficients involve the original variables.
    ///
    /// Row `k` of the underlying `(n + 1) x (n + 1)` matrix evaluates every
    /// polynomial with the first `k` variables replaced by their dummies. The
    /// determinant is divided by the product of `variables[i] - dummy_variables[i]`.
    pub fn dixon_polynomial(&self) -> Result<Polynomial, ResultantError> {
        let n = self.n();
        let mut arguments: Vec<Polynomial> = self.variables.iter().map(Polynomial::from).collect();
        let mut rows: Vec<Vec<Polynomial>> = Vec::with_capacity(n + 1);
        for k in 0..=n {
            if k > 0 {
                arguments[k - 1] = Polynomial::from(&self.dummy_variables[k - 1]);
            }
            rows.push(
                self.polynomials
                    .iter()
                    .map(|polynomial| polynomial.eval(&arguments))
                    .collect(),
            );
        }
        let matrix = Matrix::from_rows(rows);
        trace!("Cayley matrix of the Dixon system:\n{}", matrix);
        let determinant = matrix.determinant()?;
        let mut product_of_differences = Polynomial::one();
        for (variable, dummy) in self.variables.iter().zip(&self.dummy_variables) {
            product_of_differences *= Polynomial::from(variable) - Polynomial::from(dummy);
        }
        determinant
            .checked_exact_div(&product_of_differences)
            .ok_or_else(|| {
                ResultantError::internal(format!(
                    "Dixon determinant is not divisible by {}",
                    product_of_differences
                ))
            })
    }
    /// The coefficients of `polynomial` viewed as a polynomial in the dummy
    /// variables, one per dummy monomial with a nonzero coefficient, ordered
    /// from the lexicographically largest dummy monomial down.
    pub fn coefficients_of_alpha(&self, polynomial: &Polynomial) -> Vec<Polynomial> {
        polynomial
            .coefficients_in(&self.dummy_variables)
            .into_iter()
            .rev()
            .map(|(_, coefficient)| coefficient)
            .collect()
    }
    /// Builds the Dixon matrix from the coefficients of the Dixon polynomial.
    ///
    /// Columns start out as every monomial in the original variables of total
    /// degree at most [`upper_degree`](Self::upper_degree), ordered by degree and then
    /// lexicographically, largest first. Columns that are zero in every row are
    /// removed. A zero Dixon polynomial gives a `0 x 0` matrix.
    pub fn dixon_matrix(
        &self,
        dixon_polynomial: &Polynomial,
    ) -> Result<Matrix<Polynomial>, ResultantError> {
        let coefficients = self.coefficients_of_alpha(dixon_polynomial);
        if coefficients.is_empty() {
            return Ok(Matrix::from_rows(Vec::new()));
        }
        let total_degree = self.upper_degree();
        let basis_set = monomial::monomials_up_to_degree(self.n(), total_degree);
        let mut basis: Vec<Vec<u32>> = basis_set.iter().cloned().collect();
        basis.sort_by(monomial::graded_lex_descending);
        let mut rows = Vec::with_capacity(coefficients.len());
        for coefficient in &coefficients {
            let mut by_monomial = coefficient.coefficients_in(&self.variables);
            if let Some(exponents) = by_monomial.keys().find(|e| !basis_set.contains(*e)) {
                return Err(ResultantError::internal(format!(
                    "Dixon coefficient {} has a term with exponents {:?} \
                     outside the monomial basis of degree {}",
                    coefficient, exponents, total_degree
                )));
            }
            let row: Vec<Polynomial> = basis
                .iter()
                .map(|exponents| by_monomial.remove(exponents).unwrap_or_else(Polynomial::zero))
                .collect();
            rows.push(row);
        }
        let mut matrix = Matrix::from_rows(rows);
        let zero_columns: Vec<bool> = (0..matrix.cols())
            .map(|col| matrix.column(col).all(Zero::is_zero))
            .collect();
        matrix.retain_columns(|col| !zero_columns[col]);
        debug!(
            "Dixon matrix: {} rows, {} of {} basis columns kept",
            matrix.rows(),
            matrix.cols(),
            basis.len()
        );
        Ok(matrix)
    }
    /// the determinant of the Dixon matrix of the Dixon polynomial;
    /// fails with [`ResultantError::NonSquareMatrix`] when the matrix is not square
    pub fn resultant(&self) -> Result<Polynomial, ResultantError> {
        debug!(
            "Dixon resultant of {} polynomials in {} variables, max degrees {:?}",
            self.m(),
            self.n(),
            self.max_degrees
        );
        let dixon_polynomial = self.dixon_polynomial()?;
        trace!("Dixon polynomial: {}", dixon_polynomial);
        self.dixon_matrix(&dixon_polynomial)?.determinant()
    }
}
