use crate::error::{LinalgError, LinalgResult};
use crate::scalar::Scalar;
use crate::vector::Vector;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense real matrix stored as a sequence of rows of identical width.
///
/// The width locks when the first row or column is appended; an empty matrix
/// has size (0, 0). Invariant: every row has exactly `width` entries, and a
/// matrix with zero rows has width 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Scalar")]
pub struct Matrix<T: Scalar> {
    rows: Vec<Vector<T>>,
    width: usize,
}

// ─── Construction ───────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Matrix {
            rows: Vec::new(),
            width: 0,
        }
    }

    /// Create a matrix from a flat row-major slice.
    pub fn from_flat(values: &[T], rows: usize, cols: usize) -> LinalgResult<Self> {
        if values.len() != rows * cols {
            return Err(LinalgError::DimensionMismatch(format!(
                "expected {} entries for a {}x{} matrix, got {}",
                rows * cols,
                rows,
                cols,
                values.len()
            )));
        }
        let data = values
            .chunks(cols.max(1))
            .take(rows)
            .map(Vector::from_slice)
            .collect();
        Ok(Matrix {
            rows: data,
            width: if rows == 0 { 0 } else { cols },
        })
    }

    /// Create a matrix from nested row slices.
    pub fn from_rows(rows: &[Vec<T>]) -> LinalgResult<Self> {
        let mut m = Matrix::new();
        for row in rows {
            m.push_row(Vector::from_slice(row))?;
        }
        Ok(m)
    }

    /// Identity matrix of size n×n.
    pub fn identity(n: usize) -> Self {
        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let mut row = vec![T::ZERO; n];
            row[i] = T::ONE;
            rows.push(Vector::from_slice(&row));
        }
        Matrix {
            rows,
            width: if n == 0 { 0 } else { n },
        }
    }

    /// Matrix of zeros. A zero row or column count yields the empty matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Matrix::new();
        }
        Matrix {
            rows: (0..rows).map(|_| Vector::zeros(cols)).collect(),
            width: cols,
        }
    }

    /// Random matrix with entries uniform in [0, 1).
    pub fn rand(rows: usize, cols: usize, seed: Option<u64>) -> Self {
        if rows == 0 || cols == 0 {
            return Matrix::new();
        }
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let data = (0..rows)
            .map(|_| {
                let row: Vec<T> = (0..cols).map(|_| T::from_f64(rng.gen::<f64>())).collect();
                Vector::from_slice(&row)
            })
            .collect();
        Matrix { rows: data, width: cols }
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    /// (row count, column count).
    pub fn size(&self) -> (usize, usize) {
        (self.rows.len(), self.width)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.width == 0
    }

    pub fn is_square(&self) -> bool {
        !self.is_empty() && self.rows.len() == self.width
    }

    pub fn get(&self, row: usize, col: usize) -> LinalgResult<T> {
        self.row(row)?.get(col).map_err(|_| LinalgError::IndexOutOfBounds {
            index: col,
            axis: 1,
            size: self.width,
        })
    }

    pub fn set(&mut self, row: usize, col: usize, x: T) -> LinalgResult<()> {
        let width = self.width;
        self.row_mut(row)?
            .set(col, x)
            .map_err(|_| LinalgError::IndexOutOfBounds {
                index: col,
                axis: 1,
                size: width,
            })
    }

    pub fn row(&self, index: usize) -> LinalgResult<&Vector<T>> {
        self.rows.get(index).ok_or(LinalgError::IndexOutOfBounds {
            index,
            axis: 0,
            size: self.rows.len(),
        })
    }

    fn row_mut(&mut self, index: usize) -> LinalgResult<&mut Vector<T>> {
        let size = self.rows.len();
        self.rows.get_mut(index).ok_or(LinalgError::IndexOutOfBounds {
            index,
            axis: 0,
            size,
        })
    }

    /// Owned copy of a column.
    pub fn column(&self, index: usize) -> LinalgResult<Vector<T>> {
        if index >= self.width {
            return Err(LinalgError::IndexOutOfBounds {
                index,
                axis: 1,
                size: self.width,
            });
        }
        let mut col = Vector::new();
        for row in &self.rows {
            col.push(row.get(index)?);
        }
        Ok(col)
    }

    // ─── Row and column mutation ────────────────────────────────────────────

    /// Append a row at the bottom. The first row appended locks the width.
    pub fn push_row(&mut self, row: Vector<T>) -> LinalgResult<()> {
        if row.is_empty() {
            return Err(LinalgError::EmptyVector);
        }
        if self.rows.is_empty() {
            self.width = row.dim();
        } else if row.dim() != self.width {
            return Err(LinalgError::DimensionMismatch(format!(
                "row has {} entries but the matrix width is {}",
                row.dim(),
                self.width
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a column on the right. On an empty matrix this sets the height.
    pub fn push_col(&mut self, col: Vector<T>) -> LinalgResult<()> {
        if col.is_empty() {
            return Err(LinalgError::EmptyVector);
        }
        if self.rows.is_empty() {
            for i in 0..col.dim() {
                self.rows.push(Vector::from_slice(&[col.get(i)?]));
            }
            self.width = 1;
            return Ok(());
        }
        if col.dim() != self.rows.len() {
            return Err(LinalgError::DimensionMismatch(format!(
                "column has {} entries but the matrix height is {}",
                col.dim(),
                self.rows.len()
            )));
        }
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.push(col.get(i)?);
        }
        self.width += 1;
        Ok(())
    }

    /// Remove a row. Deleting the last row resets the width to 0.
    pub fn delete_row(&mut self, index: usize) -> LinalgResult<()> {
        if index >= self.rows.len() {
            return Err(LinalgError::IndexOutOfBounds {
                index,
                axis: 0,
                size: self.rows.len(),
            });
        }
        self.rows.remove(index);
        if self.rows.is_empty() {
            self.width = 0;
        }
        Ok(())
    }

    /// Remove a column. Deleting the last column empties the matrix.
    pub fn delete_col(&mut self, index: usize) -> LinalgResult<()> {
        if index >= self.width {
            return Err(LinalgError::IndexOutOfBounds {
                index,
                axis: 1,
                size: self.width,
            });
        }
        for row in &mut self.rows {
            let mut kept = Vector::new();
            for (j, &x) in row.as_slice().iter().enumerate() {
                if j != index {
                    kept.push(x);
                }
            }
            *row = kept;
        }
        self.width -= 1;
        if self.width == 0 {
            self.rows.clear();
        }
        Ok(())
    }

    /// Replace a row in place.
    pub fn replace_row(&mut self, index: usize, row: Vector<T>) -> LinalgResult<()> {
        if row.dim() != self.width {
            return Err(LinalgError::DimensionMismatch(format!(
                "row has {} entries but the matrix width is {}",
                row.dim(),
                self.width
            )));
        }
        *self.row_mut(index)? = row;
        Ok(())
    }

    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> LinalgResult<()> {
        let size = self.rows.len();
        for &index in &[r1, r2] {
            if index >= size {
                return Err(LinalgError::IndexOutOfBounds {
                    index,
                    axis: 0,
                    size,
                });
            }
        }
        self.rows.swap(r1, r2);
        Ok(())
    }

    /// Multiply a row by a scalar.
    pub fn scale_row(&mut self, index: usize, c: T) -> LinalgResult<()> {
        let row = self.row_mut(index)?;
        let scaled: Vec<T> = row.as_slice().iter().map(|&x| x * c).collect();
        *row = Vector::from_slice(&scaled);
        Ok(())
    }

    /// Row operation `row[dst] += c * row[src]`.
    pub fn add_scaled_row(&mut self, dst: usize, src: usize, c: T) -> LinalgResult<()> {
        let source = self.row(src)?.clone();
        let row = self.row_mut(dst)?;
        let combined: Vec<T> = row
            .as_slice()
            .iter()
            .zip(source.as_slice())
            .map(|(&x, &s)| x + c * s)
            .collect();
        *row = Vector::from_slice(&combined);
        Ok(())
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Matrix::new()
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_locks_on_first_row() {
        let mut m: Matrix<f64> = Matrix::new();
        assert_eq!(m.size(), (0, 0));
        m.push_row(Vector::from_slice(&[1.0, 2.0])).unwrap();
        assert_eq!(m.size(), (1, 2));
        assert!(m.push_row(Vector::from_slice(&[1.0])).is_err());
        m.push_row(Vector::from_slice(&[3.0, 4.0])).unwrap();
        assert_eq!(m.size(), (2, 2));
    }

    #[test]
    fn test_push_col_on_empty() {
        let mut m: Matrix<f64> = Matrix::new();
        m.push_col(Vector::from_slice(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(m.size(), (3, 1));
        m.push_col(Vector::from_slice(&[4.0, 5.0, 6.0])).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 5.0);
        assert!(m.push_col(Vector::from_slice(&[1.0])).is_err());
    }

    #[test]
    fn test_from_flat() {
        let m: Matrix<f64> = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(m.size(), (2, 3));
        assert_eq!(m.get(0, 2).unwrap(), 3.0);
        assert_eq!(m.get(1, 0).unwrap(), 4.0);
        assert!(Matrix::<f64>::from_flat(&[1.0, 2.0], 2, 3).is_err());
    }

    #[test]
    fn test_identity() {
        let eye: Matrix<f64> = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(eye.get(i, j).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_delete_row_and_col() {
        let mut m: Matrix<f64> =
            Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], 3, 3).unwrap();
        m.delete_row(1).unwrap();
        assert_eq!(m.size(), (2, 3));
        assert_eq!(m.get(1, 0).unwrap(), 7.0);
        m.delete_col(0).unwrap();
        assert_eq!(m.size(), (2, 2));
        assert_eq!(m.get(0, 0).unwrap(), 2.0);
        // deleting every column empties the matrix
        m.delete_col(0).unwrap();
        m.delete_col(0).unwrap();
        assert_eq!(m.size(), (0, 0));
    }

    #[test]
    fn test_row_operations() {
        let mut m: Matrix<f64> = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        m.scale_row(0, 2.0).unwrap();
        assert_eq!(m.get(0, 1).unwrap(), 4.0);
        m.add_scaled_row(1, 0, -1.0).unwrap();
        assert_eq!(m.get(1, 0).unwrap(), 1.0);
        assert_eq!(m.get(1, 1).unwrap(), 0.0);
        m.swap_rows(0, 1).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), 1.0);
    }

    #[test]
    fn test_column() {
        let m: Matrix<f64> = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let col = m.column(1).unwrap();
        assert_eq!(col.as_slice(), &[2.0, 4.0]);
        assert!(m.column(2).is_err());
    }

    #[test]
    fn test_rand_is_seeded() {
        let a: Matrix<f64> = Matrix::rand(2, 2, Some(42));
        let b: Matrix<f64> = Matrix::rand(2, 2, Some(42));
        assert_eq!(a, b);
        for i in 0..2 {
            for j in 0..2 {
                let x = a.get(i, j).unwrap();
                assert!((0.0..1.0).contains(&x));
            }
        }
    }
}
