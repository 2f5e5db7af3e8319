// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Resultant matrices of polynomial systems over exact multivariate
//! polynomials with rational coefficients.
//!
//! * [`sylvester_matrix`] and [`cayley_bezout_matrix`] for two univariate polynomials
//! * [`DixonResultant`] for `n + 1` polynomials in `n` variables
//! * [`MacaulayResultant`] for `n` polynomials in `n` variables
//!
//! The library only uses the [`log`] facade and never installs a logger.

pub mod cayley_bezout;
pub mod dixon;
pub mod error;
pub mod lambda;
pub mod macaulay;
pub mod matrix;
pub mod polynomial;
pub mod prelude;
mod proptests;
pub mod sylvester;
pub mod traits;
mod util;
pub mod variable;

pub use crate::cayley_bezout::{bezout_polynomial, cayley_bezout_matrix};
pub use crate::dixon::DixonResultant;
pub use crate::error::{ParsePolynomialError, ResultantError};
pub use crate::lambda::Lambda;
pub use crate::macaulay::MacaulayResultant;
pub use crate::matrix::Matrix;
pub use crate::polynomial::{Monomial, Polynomial};
pub use crate::sylvester::sylvester_matrix;
pub use crate::variable::Variable;
