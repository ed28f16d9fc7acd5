//! Dense row-major matrices and an LU solver with partial pivoting.
//!
//! The systems produced by [`crate::system`] are banded but not
//! diagonally dominant. Zero pivots show up routinely mid-elimination, so
//! rows are always exchanged for the largest available pivot, measured
//! relative to the size of its own row.

use crate::{
    point::{from_count, Scalar},
    FitError, FitResult,
};
use core::ops::{Index, IndexMut};

/// A dense, row-major matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Builds a matrix from a list of equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> FitResult<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(FitError::DimensionMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Multiplies every entry of `col` by `factor`.
    pub fn scale_column(&mut self, col: usize, factor: T) {
        for row in 0..self.rows {
            self[(row, col)] = self[(row, col)] * factor;
        }
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (a, b) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(b * self.cols);
        head[a * self.cols..(a + 1) * self.cols]
            .swap_with_slice(&mut tail[..self.cols]);
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}

/// `P·A = L·U` factorization of a square matrix.
///
/// `L` (unit diagonal, not stored) and `U` share one matrix. The row
/// permutation is kept as the list of original row indices.
#[derive(Clone, Debug)]
pub struct LuDecomposition<T> {
    lu: Matrix<T>,
    permutation: Vec<usize>,
}

impl<T: Scalar> LuDecomposition<T> {
    /// Factorizes `matrix` with scaled partial pivoting.
    ///
    /// Every row carries a scale, the largest magnitude that has been
    /// part of it so far. For every column the candidate at or below the
    /// diagonal that is largest relative to its row scale becomes the
    /// pivot. A candidate within `n·ε` of its row scale is cancellation
    /// noise; if no other candidate is left the column has no usable pivot
    /// and [`FitError::SingularSystem`] is returned.
    pub fn new(matrix: Matrix<T>) -> FitResult<Self> {
        if !matrix.is_square() {
            return Err(FitError::NonSquareMatrix {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let n = matrix.rows();
        let tolerance = T::epsilon() * from_count(n);
        let mut lu = matrix;
        let mut permutation: Vec<usize> = (0..n).collect();
        let mut scales: Vec<T> =
            (0..n).map(|row| max_abs(lu.row(row))).collect();

        for k in 0..n {
            let pivot_row = (k..n)
                .filter_map(|row| {
                    let relative = lu[(row, k)].abs() / scales[row];
                    (relative > tolerance).then_some((row, relative))
                })
                .fold(None, |best: Option<(usize, T)>, candidate| match best {
                    Some(best) if best.1 >= candidate.1 => Some(best),
                    _ => Some(candidate),
                })
                .map(|(row, _)| row)
                .ok_or(FitError::SingularSystem { column: k })?;

            lu.swap_rows(k, pivot_row);
            permutation.swap(k, pivot_row);
            scales.swap(k, pivot_row);

            let pivot = lu[(k, k)];
            for row in k + 1..n {
                let factor = lu[(row, k)] / pivot;
                lu[(row, k)] = factor;
                if factor == T::zero() {
                    continue;
                }
                let mut scale = scales[row];
                for col in k + 1..n {
                    let delta = factor * lu[(k, col)];
                    scale = scale.max(delta.abs());
                    lu[(row, col)] = lu[(row, col)] - delta;
                }
                scales[row] = scale;
            }
        }

        Ok(Self { lu, permutation })
    }

    /// Size of the factorized system.
    pub fn dim(&self) -> usize {
        self.lu.rows()
    }

    /// Solves `A·x = b` for the `A` this decomposition was built from.
    pub fn solve(&self, b: &[T]) -> FitResult<Vec<T>> {
        let n = self.dim();
        if b.len() != n {
            return Err(FitError::DimensionMismatch {
                expected: n,
                actual: b.len(),
            });
        }

        // Forward substitution, L·y = P·b.
        let mut x: Vec<T> =
            self.permutation.iter().map(|&row| b[row]).collect();
        for row in 1..n {
            let sum = self.lu.row(row)[..row]
                .iter()
                .zip(&x[..row])
                .fold(T::zero(), |sum, (l, y)| sum + *l * *y);
            x[row] = x[row] - sum;
        }

        // Back substitution, U·x = y.
        for row in (0..n).rev() {
            let sum = self.lu.row(row)[row + 1..]
                .iter()
                .zip(&x[row + 1..])
                .fold(T::zero(), |sum, (u, x)| sum + *u * *x);
            x[row] = (x[row] - sum) / self.lu[(row, row)];
        }

        Ok(x)
    }
}

fn max_abs<T: Scalar>(values: &[T]) -> T {
    values
        .iter()
        .fold(T::zero(), |max, value| max.max(value.abs()))
}

/// A growing set of linearly independent rows, kept in reduced form.
///
/// Each stored row has a pivot column where it is `1` and every row
/// stored after it is `0`.
#[derive(Clone, Debug)]
pub struct RowEchelon<T> {
    rows: Vec<(usize, Vec<T>)>,
    tolerance: T,
}

impl<T: Scalar> RowEchelon<T> {
    /// A row counts as dependent once what is left of it after reduction
    /// is within `tolerance` of the largest magnitude involved.
    pub fn new(tolerance: T) -> Self {
        Self {
            rows: Vec::new(),
            tolerance,
        }
    }

    /// Number of independent rows inserted.
    pub fn rank(&self) -> usize {
        self.rows.len()
    }

    /// Inserts `row` unless it is a linear combination of the rows
    /// inserted before. Returns whether it was inserted.
    pub fn insert(&mut self, row: &[T]) -> bool {
        let mut residual = row.to_vec();
        let mut scale = max_abs(row);
        for (pivot, reduced) in &self.rows {
            let factor = residual[*pivot];
            if factor == T::zero() {
                continue;
            }
            for (value, r) in residual.iter_mut().zip(reduced) {
                let delta = factor * *r;
                scale = scale.max(delta.abs());
                *value = *value - delta;
            }
        }

        let (pivot, value) = residual.iter().copied().enumerate().fold(
            (0, T::zero()),
            |best, candidate| {
                if candidate.1.abs() > best.1.abs() {
                    candidate
                } else {
                    best
                }
            },
        );
        if !(value.abs() > scale * self.tolerance) {
            return false;
        }

        for r in residual.iter_mut() {
            *r = *r / value;
        }
        self.rows.push((pivot, residual));
        true
    }
}

/// Solves the square system `matrix·x = b`.
///
/// # Examples
/// ```
/// use arclength_splines::{solve, Matrix};
///
/// // A zero leading pivot forces a row exchange.
/// let a = Matrix::from_rows(&[[0.0, 1.0], [1.0, 1.0]]).unwrap();
/// assert_eq!(solve(a, &[2.0, 3.0]).unwrap(), vec![1.0, 2.0]);
/// ```
pub fn solve<T: Scalar>(matrix: Matrix<T>, b: &[T]) -> FitResult<Vec<T>> {
    if matrix.is_square() && b.len() != matrix.rows() {
        return Err(FitError::DimensionMismatch {
            expected: matrix.rows(),
            actual: b.len(),
        });
    }
    LuDecomposition::new(matrix)?.solve(b)
}
