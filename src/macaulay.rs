// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    error::ResultantError,
    matrix::Matrix,
    polynomial::{monomial, Monomial, Polynomial},
    traits::{check_arity, PolynomialEval},
    variable::Variable,
};
use log::{debug, trace};
use num_traits::Zero;

/// Macaulay's resultant of `n` polynomials in `n` variables.
///
/// With `d[i]` the total degree of polynomial `i`, the matrix has one column
/// per monomial of degree `degree_m = 1 + sum(d[i] - 1)` and one row per
/// product of a polynomial with a multiplier monomial. The determinant of the
/// full matrix is the resultant times the determinant of
/// [`submatrix`](MacaulayResultant::submatrix); dividing out that extraneous
/// factor is left to the caller.
#[derive(Clone, Debug)]
pub struct MacaulayResultant<F> {
    polynomials: Vec<F>,
    variables: Vec<Variable>,
    expanded: Vec<Polynomial>,
    degrees: Vec<u32>,
    degree_m: u32,
    monomials_size: usize,
    monomial_set: Vec<Vec<u32>>,
}

impl<F: PolynomialEval> MacaulayResultant<F> {
    pub fn new(polynomials: Vec<F>, variables: Vec<Variable>) -> Result<Self, ResultantError> {
        let n = variables.len();
        if n == 0 {
            return Err(ResultantError::invalid_input(
                "Macaulay's method needs at least one variable",
            ));
        }
        if polynomials.len() != n {
            return Err(ResultantError::invalid_input(format!(
                "Macaulay's method needs as many polynomials as variables: \
                 got {} polynomials in {} variables",
                polynomials.len(),
                n
            )));
        }
        for polynomial in &polynomials {
            check_arity(polynomial, n)?;
        }
        let arguments: Vec<Polynomial> = variables.iter().map(Polynomial::from).collect();
        let expanded: Vec<Polynomial> = polynomials
            .iter()
            .map(|polynomial| polynomial.eval(&arguments))
            .collect();
        let degrees: Vec<u32> = expanded
            .iter()
            .map(|polynomial| polynomial.total_degree(&variables))
            .collect();
        if let Some(index) = degrees.iter().position(|&degree| degree == 0) {
            return Err(ResultantError::invalid_input(format!(
                "polynomial {} is constant in the variables",
                index
            )));
        }
        let degree_m = 1 + degrees.iter().map(|degree| degree - 1).sum::<u32>();
        let monomials_size = num_integer::binomial(degree_m as usize + n - 1, n - 1);
        let monomial_set = monomial::monomials_of_degree(n, degree_m);
        debug_assert_eq!(monomial_set.len(), monomials_size);
        debug!(
            "Macaulay system: degrees {:?}, degree_m = {}, {} monomials",
            degrees, degree_m, monomials_size
        );
        Ok(Self {
            polynomials,
            variables,
            expanded,
            degrees,
            degree_m,
            monomials_size,
            monomial_set,
        })
    }
    pub fn polynomials(&self) -> &[F] {
        &self.polynomials
    }
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
    /// the total degree of each polynomial
    pub fn degrees(&self) -> &[u32] {
        &self.degrees
    }
    pub fn degree_m(&self) -> u32 {
        self.degree_m
    }
    /// `binomial(degree_m + n - 1, n - 1)`, the number of monomials of degree `degree_m`
    pub fn monomials_size(&self) -> usize {
        self.monomials_size
    }
    /// the exponents of the column monomials, in column order
    pub fn monomial_set(&self) -> &[Vec<u32>] {
        &self.monomial_set
    }
    /// every monomial of total degree `degree`, lexicographically largest first
    pub fn monomials_of_degree(&self, degree: u32) -> Vec<Vec<u32>> {
        monomial::monomials_of_degree(self.variables.len(), degree)
    }
    /// For each polynomial `i`, the multipliers of degree `degree_m - degrees[i]`
    /// that are not divisible by `variables[j]^degrees[j]` for any `j < i`.
    pub fn row_coefficients(&self) -> Vec<Vec<Vec<u32>>> {
        (0..self.degrees.len())
            .map(|i| {
                self.monomials_of_degree(self.degree_m - self.degrees[i])
                    .into_iter()
                    .filter(|multiplier| {
                        (0..i).all(|j| multiplier[j] < self.degrees[j])
                    })
                    .collect()
            })
            .collect()
    }
    /// the full `monomials_size x monomials_size` Macaulay matrix
    pub fn matrix(&self) -> Result<Matrix<Polynomial>, ResultantError> {
        let mut rows = Vec::with_capacity(self.monomials_size);
        for (polynomial, multipliers) in self.expanded.iter().zip(self.row_coefficients()) {
            for multiplier in multipliers {
                let product = polynomial * Polynomial::from(Monomial::from_exponents(
                    &self.variables,
                    &multiplier,
                ));
                let mut by_monomial = product.coefficients_in(&self.variables);
                let row: Vec<Polynomial> = self
                    .monomial_set
                    .iter()
                    .map(|exponents| by_monomial.remove(exponents).unwrap_or_else(Polynomial::zero))
                    .collect();
                rows.push(row);
            }
        }
        if rows.len() != self.monomials_size {
            return Err(ResultantError::internal(format!(
                "Macaulay matrix has {} rows but {} columns",
                rows.len(),
                self.monomials_size
            )));
        }
        let matrix = Matrix::from_rows(rows);
        trace!("Macaulay matrix:\n{}", matrix);
        Ok(matrix)
    }
    /// Splits the column indexes into reduced and non-reduced ones.
    ///
    /// A column monomial is non-reduced when at least two of the
    /// `variables[i]^degrees[i]` divide it. If no monomial qualifies the
    /// threshold is lowered from `n - 1` down to one.
    pub fn reduced_nonreduced(&self) -> Result<(Vec<usize>, Vec<usize>), ResultantError> {
        let n = self.variables.len();
        let divisor_counts: Vec<usize> = self
            .monomial_set
            .iter()
            .map(|exponents| {
                exponents
                    .iter()
                    .zip(&self.degrees)
                    .filter(|&(exponent, degree)| exponent >= degree)
                    .count()
            })
            .collect();
        let thresholds = std::iter::once(2).chain((1..=(n - 1).max(1)).rev());
        for threshold in thresholds {
            let (non_reduced, reduced): (Vec<usize>, Vec<usize>) =
                (0..divisor_counts.len()).partition(|&index| divisor_counts[index] >= threshold);
            if !non_reduced.is_empty() {
                debug!(
                    "Macaulay split at threshold {}: {} reduced, {} non-reduced",
                    threshold,
                    reduced.len(),
                    non_reduced.len()
                );
                return Ok((reduced, non_reduced));
            }
        }
        Err(ResultantError::internal(format!(
            "no monomial of degree {} is divisible by a leading power of degrees {:?}",
            self.degree_m, self.degrees
        )))
    }
    /// `a[i]`, the coefficient of `variables[i]^degrees[i]` in polynomial `i`
    pub fn leading_coefficients(&self) -> Vec<Polynomial> {
        let n = self.variables.len();
        self.expanded
            .iter()
            .enumerate()
            .map(|(i, polynomial)| {
                let mut exponents = vec![0; n];
                exponents[i] = self.degrees[i];
                polynomial.coefficient(&self.variables, &exponents)
            })
            .collect()
    }
    /// The rows of `matrix` with no nonzero leading coefficient among their
    /// reduced-column entries, restricted to the non-reduced columns.
    ///
    /// The result may have more columns than rows.
    pub fn submatrix(
        &self,
        matrix: &Matrix<Polynomial>,
    ) -> Result<Matrix<Polynomial>, ResultantError> {
        if matrix.cols() != self.monomial_set.len() {
            return Err(ResultantError::invalid_input(format!(
                "expected a matrix with {} columns, got {}",
                self.monomial_set.len(),
                matrix.cols()
            )));
        }
        let (reduced, non_reduced) = self.reduced_nonreduced()?;
        let leading_coefficients: Vec<Polynomial> = self
            .leading_coefficients()
            .into_iter()
            .filter(|coefficient| !coefficient.is_zero())
            .collect();
        let kept_rows: Vec<usize> = (0..matrix.rows())
            .filter(|&row| {
                !reduced
                    .iter()
                    .any(|&col| leading_coefficients.contains(&matrix[(row, col)]))
            })
            .collect();
        debug!("Macaulay submatrix keeps rows {:?}", kept_rows);
        Ok(matrix.select(&kept_rows, &non_reduced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lambda::Lambda, util::tests::DebugAsDisplay};

    fn parse(text: &str) -> Polynomial {
        text.parse().unwrap()
    }

    fn matrix(rows: &[&[&str]]) -> Matrix<Polynomial> {
        Matrix::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| parse(cell)).collect())
                .collect(),
        )
    }

    fn system(variables: &[Variable], polynomials: &[&str]) -> MacaulayResultant<Lambda> {
        MacaulayResultant::new(
            polynomials
                .iter()
                .map(|text| Lambda::parse(variables, text).unwrap())
                .collect(),
            variables.to_vec(),
        )
        .unwrap()
    }

    fn xyz() -> Vec<Variable> {
        vec![Variable::new("x"), Variable::new("y"), Variable::new("z")]
    }

    #[test]
    fn test_degree_bookkeeping() {
        let test = |variables: &[Variable],
                    polynomials: &[&str],
                    degrees: &[u32],
                    degree_m: u32,
                    size: usize| {
            let macaulay = system(variables, polynomials);
            assert_eq!(macaulay.degrees(), degrees);
            assert_eq!(macaulay.degree_m(), degree_m);
            assert_eq!(macaulay.monomials_size(), size);
            assert_eq!(macaulay.monomial_set().len(), size);
            let matrix = macaulay.matrix().unwrap();
            assert_eq!((matrix.rows(), matrix.cols()), (size, size));
        };
        let xy = [Variable::new("x"), Variable::new("y")];
        test(&xy, &["a*x + y", "x + b*y"], &[1, 1], 1, 2);
        test(
            &xyz(),
            &["x^2 + y^2 - z^2", "x*y + 2*z^2", "x + y + z"],
            &[2, 2, 1],
            3,
            10,
        );
        test(
            &xyz(),
            &["x + y + z", "x*y + z^2", "x^3 + y*z^2 + 1"],
            &[1, 2, 3],
            4,
            15,
        );
    }

    #[test]
    fn test_monomials_of_degree() {
        let macaulay = system(&xyz(), &["x", "y", "z"]);
        assert_eq!(
            macaulay.monomials_of_degree(2),
            vec![
                vec![2, 0, 0],
                vec![1, 1, 0],
                vec![1, 0, 1],
                vec![0, 2, 0],
                vec![0, 1, 1],
                vec![0, 0, 2],
            ]
        );
        assert_eq!(macaulay.monomials_of_degree(0), vec![vec![0, 0, 0]]);
    }

    #[test]
    fn test_invalid_input() {
        let x = Variable::new("x");
        let y = Variable::new("y");
        let make = |variables: &[Variable], texts: &[&str]| {
            MacaulayResultant::new(
                texts
                    .iter()
                    .map(|text| Lambda::parse(variables, text).unwrap())
                    .collect(),
                variables.to_vec(),
            )
        };
        assert!(matches!(
            make(&[x.clone(), y.clone()], &["x + y"]),
            Err(ResultantError::InvalidInput(_))
        ));
        assert!(matches!(
            make(&[x.clone(), y.clone()], &["x + y", "3"]),
            Err(ResultantError::InvalidInput(_))
        ));
        assert!(matches!(make(&[], &[]), Err(ResultantError::InvalidInput(_))));
    }

    #[test]
    fn test_generic_system() {
        let macaulay = system(
            &xyz(),
            &[
                "a0*x^2 + a1*y^2 + a2*z^2 + a3*x*y + a4*y*z + a5*x*z",
                "b0*x + b1*y + b2*z",
                "c0*y - c1*z",
            ],
        );
        assert_eq!(macaulay.degrees(), &[2, 1, 1][..]);
        assert_eq!(macaulay.degree_m(), 2);
        assert_eq!(
            macaulay.row_coefficients(),
            vec![
                vec![vec![0, 0, 0]],
                vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]],
                vec![vec![1, 0, 0], vec![0, 0, 1]],
            ]
        );
        let full = macaulay.matrix().unwrap();
        println!("{:#}", full);
        assert_eq!(
            DebugAsDisplay(&full),
            DebugAsDisplay(&matrix(&[
                &["a0", "a3", "a5", "a1", "a4", "a2"],
                &["b0", "b1", "b2", "0", "0", "0"],
                &["0", "b0", "0", "b1", "b2", "0"],
                &["0", "0", "b0", "0", "b1", "b2"],
                &["0", "c0", "-c1", "0", "0", "0"],
                &["0", "0", "0", "0", "c0", "-c1"],
            ]))
        );
        assert_eq!(
            macaulay.reduced_nonreduced().unwrap(),
            (vec![0, 1, 2, 3, 5], vec![4])
        );
        assert_eq!(
            macaulay.leading_coefficients(),
            vec![parse("a0"), parse("b1"), parse("-c1")]
        );
        let sub = macaulay.submatrix(&full).unwrap();
        assert_eq!(DebugAsDisplay(&sub), DebugAsDisplay(&matrix(&[&["b1"]])));
        let resultant = parse(
            "a0*b1^2*c1^2 + 2*a0*b1*b2*c0*c1 + a0*b2^2*c0^2 + a1*b0^2*c1^2 \
             + a2*b0^2*c0^2 - a3*b0*b1*c1^2 - a3*b0*b2*c0*c1 + a4*b0^2*c0*c1 \
             - a5*b0*b1*c0*c1 - a5*b0*b2*c0^2",
        );
        assert_eq!(
            DebugAsDisplay(full.determinant().unwrap()),
            DebugAsDisplay(sub.determinant().unwrap() * resultant)
        );
    }

    #[test]
    fn test_submatrix_with_zero_leading_coefficient() {
        let macaulay = system(
            &xyz(),
            &["x^2 + y^2 - z^2", "x*y + 2*z^2", "x + y + z"],
        );
        assert_eq!(
            macaulay.leading_coefficients(),
            vec![parse("1"), parse("0"), parse("1")]
        );
        let full = macaulay.matrix().unwrap();
        assert!(full.determinant().unwrap().is_zero());
        let (reduced, non_reduced) = macaulay.reduced_nonreduced().unwrap();
        assert_eq!(reduced, vec![0, 1, 3, 4, 5, 6, 8, 9]);
        assert_eq!(non_reduced, vec![2, 7]);
        let sub = macaulay.submatrix(&full).unwrap();
        assert_eq!(DebugAsDisplay(&sub), DebugAsDisplay(&matrix(&[&["1", "1"]])));
    }

    #[test]
    fn test_threshold_fallback() {
        let xy = [Variable::new("x"), Variable::new("y")];
        let macaulay = system(&xy, &["a*x + y", "x + b*y"]);
        let full = macaulay.matrix().unwrap();
        assert_eq!(
            DebugAsDisplay(&full),
            DebugAsDisplay(&matrix(&[&["a", "1"], &["1", "b"]]))
        );
        assert_eq!(
            macaulay.reduced_nonreduced().unwrap(),
            (vec![], vec![0, 1])
        );
        assert_eq!(macaulay.submatrix(&full).unwrap(), full);

        let macaulay = system(&xyz(), &["x + 2*y - z", "x - y + 3*z", "2*x + y + z"]);
        let full = macaulay.matrix().unwrap();
        assert_eq!(full.determinant().unwrap(), parse("3"));
        assert_eq!(macaulay.reduced_nonreduced().unwrap().1, vec![0, 1, 2]);
        assert_eq!(macaulay.submatrix(&full).unwrap(), full);
    }

    #[test]
    fn test_reproducible() {
        let polynomials = ["x^2 + y^2 - z^2", "x*y + 2*z^2", "x + y + z"];
        let first = system(&xyz(), &polynomials).matrix().unwrap();
        let second = system(&xyz(), &polynomials).matrix().unwrap();
        assert_eq!(first, second);
    }
}
