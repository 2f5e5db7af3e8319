// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{error::ResultantError, polynomial::Polynomial, traits::ExactDiv};
use log::trace;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Index, IndexMut};

/// row-major 2D array
///
/// The alternate display format (using `"{:#}"`) is a reStructuredText table
///
/// Examples:
/// ```
/// # use resultants::matrix::Matrix;
/// // Note: using strings to demonstrate `Display`, polynomials are normally used
/// let mut matrix = Matrix::from_rows(vec![
///     vec!["0", "1", "2"],
///     vec!["10", "11", "12"],
/// ]);
/// assert_eq!(
///     format!("{}", matrix),
///     "[ 0   1   2  ]\n\
///      [ 10  11  12 ]"
/// );
/// assert_eq!(
///     format!("{:#}", matrix),
///     "+----+----+----+\n\
///      | 0  | 1  | 2  |\n\
///      +----+----+----+\n\
///      | 10 | 11 | 12 |\n\
///      +----+----+----+"
/// );
/// // change the value at row 1, column 0 to a multi-line str
/// matrix[(1, 0)] = "line 1\nline 2";
///
/// assert_eq!(
///     format!("{}", matrix),
///     "[ 0       1   2  ]\n\
///      [                ]\n\
///      [ line 1  11  12 ]\n\
///      [ line 2         ]"
/// );
/// ```
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// data is a row-major 2D array
    pub fn from_array(rows: usize, cols: usize, data: Vec<T>) -> Self {
        assert_eq!(rows * cols, data.len());
        Self { rows, cols, data }
    }
    /// # Panics
    ///
    /// panics if the rows have different lengths
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(row_count * cols);
        for row in rows {
            assert_eq!(row.len(), cols, "ragged matrix rows");
            data.extend(row);
        }
        Self {
            rows: row_count,
            cols,
            data,
        }
    }
    pub fn from_fn<F: FnMut(usize, usize) -> T>(rows: usize, cols: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { rows, cols, data }
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
    fn get_index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows);
        assert!(col < self.cols);
        row * self.cols + col
    }
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        assert!(col < self.cols);
        (0..self.rows).map(move |row| &self[(row, col)])
    }
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(a < self.rows && b < self.rows);
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }
    /// copies out the entries at the listed rows and columns, in the listed order
    pub fn select(&self, rows: &[usize], cols: &[usize]) -> Matrix<T>
    where
        T: Clone,
    {
        Matrix::from_fn(rows.len(), cols.len(), |row, col| {
            self[(rows[row], cols[col])].clone()
        })
    }
    /// removes every column for which `keep` returns false
    pub fn retain_columns<F: FnMut(usize) -> bool>(&mut self, mut keep: F) {
        let kept: Vec<bool> = (0..self.cols).map(&mut keep).collect();
        let cols = self.cols;
        let mut index = 0;
        self.data.retain(|_| {
            let retval = kept[index % cols];
            index += 1;
            retval
        });
        self.cols = kept.iter().filter(|&&keep_column| keep_column).count();
    }
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let cols = self.cols;
        let mut rows = Vec::with_capacity(self.rows);
        let mut data = self.data.into_iter();
        for _ in 0..self.rows {
            rows.push(data.by_ref().take(cols).collect());
        }
        rows
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        let index = self.get_index(row, col);
        &self.data[index]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let index = self.get_index(row, col);
        &mut self.data[index]
    }
}

impl Matrix<Polynomial> {
    /// Determinant by fraction-free (Bareiss) elimination.
    ///
    /// Every division in the elimination is exact; a remainder means the
    /// arithmetic is broken and is reported as an internal consistency error.
    pub fn determinant(&self) -> Result<Polynomial, ResultantError> {
        if !self.is_square() {
            return Err(ResultantError::NonSquareMatrix {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let size = self.rows;
        if size == 0 {
            return Ok(Polynomial::one());
        }
        let mut matrix = self.clone();
        let mut negate = false;
        let mut previous_pivot = Polynomial::one();
        for k in 0..size - 1 {
            let pivot_row = (k..size)
                .filter(|&row| !matrix[(row, k)].is_zero())
                .min_by_key(|&row| matrix[(row, k)].term_count());
            let pivot_row = match pivot_row {
                Some(row) => row,
                None => return Ok(Polynomial::zero()),
            };
            if pivot_row != k {
                matrix.swap_rows(k, pivot_row);
                negate = !negate;
            }
            trace!("bareiss step {} of {}: pivot {}", k + 1, size, matrix[(k, k)]);
            for row in k + 1..size {
                for col in k + 1..size {
                    let numerator = &matrix[(k, k)] * &matrix[(row, col)]
                        - &matrix[(row, k)] * &matrix[(k, col)];
                    matrix[(row, col)] = numerator
                        .checked_exact_div(&previous_pivot)
                        .ok_or_else(|| {
                            ResultantError::internal(format!(
                                "inexact division by the previous pivot in determinant step {}",
                                k + 1
                            ))
                        })?;
                }
            }
            previous_pivot = matrix[(k, k)].clone();
        }
        let retval = matrix[(size - 1, size - 1)].clone();
        Ok(if negate { -retval } else { retval })
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.rows == 0 || self.cols == 0 {
            return write!(f, "[rows={}, cols={}]", self.rows, self.cols);
        }
        let mut cells: Vec<Vec<String>> = Vec::with_capacity(self.rows);
        let mut row_heights = vec![0usize; self.rows];
        let mut col_widths = vec![0usize; self.cols];
        let mut any_multiline_cells = false;
        for row in 0..self.rows {
            let mut row_cells = Vec::with_capacity(self.cols);
            for col in 0..self.cols {
                let cell_str = format!("{}", self[(row, col)]);
                let mut width = 1;
                let mut height = 0;
                for line in cell_str.lines() {
                    height += 1;
                    width = width.max(line.len());
                }
                height = height.max(1);
                if height > 1 {
                    any_multiline_cells = true;
                }
                row_heights[row] = row_heights[row].max(height);
                col_widths[col] = col_widths[col].max(width);
                row_cells.push(cell_str);
            }
            cells.push(row_cells);
        }
        let write_separator_line = |f: &mut fmt::Formatter| {
            for &col_width in &col_widths {
                write!(f, "+-{}-", "-".repeat(col_width))?;
            }
            write!(f, "+")
        };
        if f.alternate() {
            write_separator_line(f)?;
            writeln!(f)?;
        }
        for row in 0..self.rows {
            let is_last_row = row == self.rows - 1;
            let mut line_iters: Vec<_> = cells[row].iter().map(|cell| cell.lines()).collect();
            let mut height = row_heights[row];
            if !f.alternate() && any_multiline_cells && !is_last_row {
                height += 1;
            }
            for cell_row in 0..height {
                if !f.alternate() {
                    write!(f, "[")?;
                }
                for col in 0..self.cols {
                    let cell_line = line_iters[col].next().unwrap_or("");
                    if f.alternate() {
                        write!(f, "|")?;
                    }
                    write!(f, " {:width$} ", cell_line, width = col_widths[col])?;
                }
                if f.alternate() {
                    write!(f, "|")?;
                } else {
                    write!(f, "]")?;
                }
                if cell_row != height - 1 {
                    writeln!(f)?;
                }
            }
            if f.alternate() {
                writeln!(f)?;
                write_separator_line(f)?;
            }
            if !is_last_row {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
