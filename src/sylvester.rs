// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    error::ResultantError, matrix::Matrix, polynomial::Polynomial, variable::Variable,
};
use log::debug;
use num_traits::Zero;

/// The classical Sylvester matrix of `p` and `q` viewed as polynomials in `x`.
///
/// If `p` has degree `m` and `q` has degree `n` the matrix is
/// `(m + n) x (m + n)`: `n` rows of `p`'s coefficients shifted one column
/// right per row, followed by `m` rows of `q`'s. Coefficients run from the
/// highest power of `x` down and may involve other variables.
///
/// ```
/// # use resultants::prelude::*;
/// # use resultants::{sylvester_matrix, Polynomial, Variable};
/// let x = Variable::new("x");
/// let p: Polynomial = "x^2 - 5*x + 6".parse().unwrap();
/// let q: Polynomial = "x^2 - 3*x + 2".parse().unwrap();
/// let matrix = sylvester_matrix(&p, &q, &x).unwrap();
/// assert_eq!((matrix.rows(), matrix.cols()), (4, 4));
/// // p and q share the root x = 2
/// assert!(matrix.determinant().unwrap().is_zero());
/// ```
pub fn sylvester_matrix(
    p: &Polynomial,
    q: &Polynomial,
    x: &Variable,
) -> Result<Matrix<Polynomial>, ResultantError> {
    if p.is_zero() || q.is_zero() {
        return Err(ResultantError::invalid_input(
            "the Sylvester matrix of a zero polynomial is undefined",
        ));
    }
    let p_coefficients = p.univariate_coefficients(x);
    let q_coefficients = q.univariate_coefficients(x);
    let m = p_coefficients.len() - 1;
    let n = q_coefficients.len() - 1;
    let size = m + n;
    debug!("sylvester matrix: deg p = {}, deg q = {}", m, n);
    let shifted_row = |coefficients: &[Polynomial], shift: usize| -> Vec<Polynomial> {
        (0..size)
            .map(|col| match col.checked_sub(shift) {
                Some(index) if index < coefficients.len() => coefficients[index].clone(),
                _ => Polynomial::zero(),
            })
            .collect()
    };
    let mut rows = Vec::with_capacity(size);
    rows.extend((0..n).map(|shift| shifted_row(&p_coefficients, shift)));
    rows.extend((0..m).map(|shift| shifted_row(&q_coefficients, shift)));
    Ok(Matrix::from_rows(rows))
}
