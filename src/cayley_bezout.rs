// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    error::ResultantError,
    matrix::Matrix,
    polynomial::Polynomial,
    traits::{check_arity, ExactDiv, PolynomialEval},
    variable::Variable,
};
use log::{debug, trace};

/// `(p(x) * q(aux) - q(x) * p(aux)) / (x - aux)`
///
/// The numerator vanishes when `x = aux`, so the division is exact for any
/// polynomials; a remainder is reported as an internal consistency error.
pub fn bezout_polynomial<P: PolynomialEval + ?Sized, Q: PolynomialEval + ?Sized>(
    p: &P,
    q: &Q,
    x: &Variable,
    aux: &Variable,
) -> Result<Polynomial, ResultantError> {
    check_arity(p, 1)?;
    check_arity(q, 1)?;
    let at_x = [Polynomial::from(x)];
    let at_aux = [Polynomial::from(aux)];
    let determinant = p.eval(&at_x) * q.eval(&at_aux) - q.eval(&at_x) * p.eval(&at_aux);
    let difference = Polynomial::from(x) - Polynomial::from(aux);
    determinant.checked_exact_div(&difference).ok_or_else(|| {
        ResultantError::internal(format!(
            "Cayley determinant is not divisible by {}",
            difference
        ))
    })
}

/// The `n x n` Cayley-Bezout matrix of `p` and `q` in `x`, where `n` is the
/// larger of the two degrees.
///
/// Row `i` holds the coefficients of `aux^(n - 1 - i)` in the
/// [Bezout polynomial](bezout_polynomial) and column `j` the coefficient of
/// `x^j`. For equal degrees the determinant is the resultant up to sign.
pub fn cayley_bezout_matrix<P: PolynomialEval + ?Sized, Q: PolynomialEval + ?Sized>(
    p: &P,
    q: &Q,
    x: &Variable,
) -> Result<Matrix<Polynomial>, ResultantError> {
    check_arity(p, 1)?;
    check_arity(q, 1)?;
    let at_x = [Polynomial::from(x)];
    let n = p.eval(&at_x).degree(x).max(q.eval(&at_x).degree(x)) as usize;
    let aux = Variable::fresh("alpha");
    debug!("cayley-bezout matrix: degree {} in {}", n, x);
    let bezout = bezout_polynomial(p, q, x, &aux)?;
    trace!("bezout polynomial: {}", bezout);
    let variables = [aux, x.clone()];
    Ok(Matrix::from_fn(n, n, |row, col| {
        bezout.coefficient(&variables, &[(n - 1 - row) as u32, col as u32])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lambda::Lambda, sylvester::sylvester_matrix, util::tests::DebugAsDisplay};
    use num_traits::{One, Pow, Zero};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

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

    #[test]
    fn test_cayley_bezout_matrix() {
        let x = Variable::new("x");
        let test = |p: &str, q: &str, expected: &[&[&str]], determinant: &str| {
            let p = Lambda::parse(&[x.clone()], p).unwrap();
            let q = Lambda::parse(&[x.clone()], q).unwrap();
            let result = cayley_bezout_matrix(&p, &q, &x).unwrap();
            println!("cayley_bezout({}, {}) =\n{}", p, q, result);
            assert_eq!(DebugAsDisplay(&result), DebugAsDisplay(&matrix(expected)));
            assert_eq!(
                DebugAsDisplay(result.determinant().unwrap()),
                DebugAsDisplay(parse(determinant))
            );
        };
        test(
            "b2*x^2 + b1*x + b0",
            "2*b2*x + b1",
            &[&["b1*b2", "2*b2^2"], &["b1^2 - 2*b0*b2", "b1*b2"]],
            "4*b0*b2^3 - b1^2*b2^2",
        );
        test(
            "x^2 - 5*x + 6",
            "x^2 - 3*x + 2",
            &[&["-4", "2"], &["8", "-4"]],
            "0",
        );
        test(
            "x^3 + 1",
            "x + 1",
            &[&["1", "1", "0"], &["0", "1", "1"], &["-1", "0", "1"]],
            "0",
        );
        test("x^2 - 1", "x - 2", &[&["-2", "1"], &["1", "-2"]], "3");
        test("4", "7", &[], "1");
    }

    #[test]
    fn test_bezout_polynomial() {
        let x = Variable::new("x");
        let a = Variable::new("a");
        let p = |args: &[Polynomial]| &args[0] * &args[0];
        let q = |args: &[Polynomial]| args[0].clone();
        // (x^2 * a - x * a^2) / (x - a) = x * a
        assert_eq!(
            bezout_polynomial(&p, &q, &x, &a).unwrap(),
            parse("x*a")
        );
    }

    #[test]
    fn test_inexact_division_is_reported() {
        let x = Variable::new("x");
        let at_x = Polynomial::from(&x);
        // not a polynomial function: p(x) = x but p(alpha) = 1
        let p = move |args: &[Polynomial]| {
            if args[0] == at_x {
                at_x.clone()
            } else {
                Polynomial::one()
            }
        };
        let q = |_: &[Polynomial]| Polynomial::one();
        assert!(matches!(
            cayley_bezout_matrix(&p, &q, &x),
            Err(ResultantError::InternalConsistency(_))
        ));
        assert!(matches!(
            bezout_polynomial(&p, &q, &x, &Variable::fresh("a")),
            Err(ResultantError::InternalConsistency(_))
        ));
    }

    #[test]
    fn test_wrong_arity() {
        let x = Variable::new("x");
        let y = Variable::new("y");
        let p = Lambda::parse(&[x.clone(), y], "x + y").unwrap();
        let q = Lambda::parse(&[x.clone()], "x").unwrap();
        assert!(matches!(
            cayley_bezout_matrix(&p, &q, &x),
            Err(ResultantError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_agrees_with_sylvester() {
        let x = Variable::new("x");
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        let mut random_polynomial = |degree: u32| -> Polynomial {
            let mut retval = Polynomial::zero();
            for power in 0..=degree {
                let mut coefficient = rng.gen_range(-5i32..=5);
                if power == degree && coefficient == 0 {
                    coefficient = 1;
                }
                retval += Polynomial::from(coefficient) * Polynomial::from(&x).pow(power);
            }
            retval
        };
        for degree in 1..=3 {
            for _ in 0..5 {
                let p = random_polynomial(degree);
                let q = random_polynomial(degree);
                let shared = random_polynomial(1);
                for (p, q) in vec![(p.clone(), q.clone()), (&p * &shared, &q * &shared)] {
                    let bezout = cayley_bezout_matrix(
                        &Lambda::new(vec![x.clone()], p.clone()),
                        &Lambda::new(vec![x.clone()], q.clone()),
                        &x,
                    )
                    .unwrap()
                    .determinant()
                    .unwrap();
                    let sylvester = sylvester_matrix(&p, &q, &x)
                        .unwrap()
                        .determinant()
                        .unwrap();
                    println!("p = {}, q = {}: {} vs {}", p, q, bezout, sylvester);
                    assert!(bezout == sylvester || bezout == -&sylvester);
                }
            }
        }
    }
}
