use lineal_core::error::{LinalgError, LinalgResult};
use lineal_core::{Matrix, Scalar, Vector};

use crate::matrix_ops;

fn check_square<T: Scalar>(a: &Matrix<T>) -> LinalgResult<usize> {
    let (rows, cols) = a.size();
    if rows == 0 || cols == 0 {
        return Err(LinalgError::EmptyMatrix);
    }
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Determinant via cofactor expansion along the first column.
pub fn det<T: Scalar>(a: &Matrix<T>) -> LinalgResult<T> {
    let n = check_square(a)?;
    if n == 1 {
        return a.get(0, 0);
    }
    let mut total = T::ZERO;
    for i in 0..n {
        let mut sub = a.clone();
        sub.delete_col(0)?;
        sub.delete_row(i)?;
        let term = a.get(i, 0)? * det(&sub)?;
        if i % 2 == 0 {
            total += term;
        } else {
            total -= term;
        }
    }
    Ok(total)
}

/// Cofactor C(i, j): signed determinant of the minor at (i, j). Requires
/// n >= 2.
pub fn cofactor<T: Scalar>(a: &Matrix<T>, i: usize, j: usize) -> LinalgResult<T> {
    let n = check_square(a)?;
    if n < 2 {
        return Err(LinalgError::InvalidOperation(
            "cofactors require a matrix of size at least 2x2".to_string(),
        ));
    }
    // validate indices before mutating the scratch copy
    a.get(i, j)?;
    let mut sub = a.clone();
    sub.delete_row(i)?;
    sub.delete_col(j)?;
    let d = det(&sub)?;
    if (i + j) % 2 == 0 {
        Ok(d)
    } else {
        Ok(-d)
    }
}

/// Matrix of cofactors.
pub fn cofactor_matrix<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    let n = check_square(a)?;
    if n < 2 {
        return Err(LinalgError::InvalidOperation(
            "cofactors require a matrix of size at least 2x2".to_string(),
        ));
    }
    let mut cof = Matrix::new();
    for i in 0..n {
        let mut row = Vector::new();
        for j in 0..n {
            row.push(cofactor(a, i, j)?);
        }
        cof.push_row(row)?;
    }
    Ok(cof)
}

/// Adjugate: transpose of the cofactor matrix.
pub fn adjugate<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    matrix_ops::transpose(&cofactor_matrix(a)?)
}

/// Inverse via the adjugate. Fails with `SingularMatrix` when the
/// determinant is within precision of zero.
pub fn inverse<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    let n = check_square(a)?;
    let d = det(a)?;
    if d.near_zero() {
        return Err(LinalgError::SingularMatrix);
    }
    if n == 1 {
        return Matrix::from_flat(&[T::ONE / d], 1, 1);
    }
    matrix_ops::scale(&adjugate(a)?, T::ONE / d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_det_2x2() {
        let a: Matrix<f64> = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_abs_diff_eq!(det(&a).unwrap(), -2.0);
    }

    #[test]
    fn test_det_3x3() {
        let a: Matrix<f64> =
            Matrix::from_flat(&[2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0], 3, 3).unwrap();
        // 2*(3-2) - 1*(0-1) + 1*(0-3) = 0
        assert_abs_diff_eq!(det(&a).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_det_fractional_entries() {
        let a: Matrix<f64> = Matrix::from_flat(&[0.5, 0.0, 0.0, 0.5], 2, 2).unwrap();
        assert_abs_diff_eq!(det(&a).unwrap(), 0.25);
    }

    #[test]
    fn test_det_not_square() {
        let a: Matrix<f64> = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(det(&a), Err(LinalgError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_cofactor_signs() {
        let a: Matrix<f64> = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_abs_diff_eq!(cofactor(&a, 0, 0).unwrap(), 4.0);
        assert_abs_diff_eq!(cofactor(&a, 0, 1).unwrap(), -3.0);
        assert_abs_diff_eq!(cofactor(&a, 1, 0).unwrap(), -2.0);
        assert_abs_diff_eq!(cofactor(&a, 1, 1).unwrap(), 1.0);
    }

    #[test]
    fn test_adjugate() {
        let a: Matrix<f64> = Matrix::from_flat(&[1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let adj = adjugate(&a).unwrap();
        assert_abs_diff_eq!(adj.get(0, 0).unwrap(), 4.0);
        assert_abs_diff_eq!(adj.get(0, 1).unwrap(), -2.0);
        assert_abs_diff_eq!(adj.get(1, 0).unwrap(), -3.0);
        assert_abs_diff_eq!(adj.get(1, 1).unwrap(), 1.0);
    }

    #[test]
    fn test_inverse_round_trip() {
        let a: Matrix<f64> =
            Matrix::from_flat(&[2.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0], 3, 3).unwrap();
        let inv = inverse(&a).unwrap();
        let product = matrix_ops::mul_matrix(&a, &inv).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(product.get(i, j).unwrap(), expected, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_inverse_singular() {
        let a: Matrix<f64> = Matrix::from_flat(&[1.0, 2.0, 2.0, 4.0], 2, 2).unwrap();
        assert_eq!(inverse(&a), Err(LinalgError::SingularMatrix));
    }

    #[test]
    fn test_inverse_1x1() {
        let a: Matrix<f64> = Matrix::from_flat(&[4.0], 1, 1).unwrap();
        let inv = inverse(&a).unwrap();
        assert_abs_diff_eq!(inv.get(0, 0).unwrap(), 0.25);
    }
}
