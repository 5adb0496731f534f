use lineal_core::error::{LinalgError, LinalgResult};
use lineal_core::{Matrix, Scalar, Vector};

use crate::vector_ops;

fn check_nonempty<T: Scalar>(a: &Matrix<T>) -> LinalgResult<()> {
    if a.is_empty() {
        return Err(LinalgError::EmptyMatrix);
    }
    Ok(())
}

/// Entrywise sum of two matrices of the same size.
pub fn add<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    check_nonempty(a)?;
    check_nonempty(b)?;
    if a.size() != b.size() {
        return Err(LinalgError::DimensionMismatch(format!(
            "matrices have sizes {:?} and {:?}",
            a.size(),
            b.size()
        )));
    }
    let mut sum = Matrix::new();
    for i in 0..a.rows() {
        sum.push_row(vector_ops::add(a.row(i)?, b.row(i)?)?)?;
    }
    Ok(sum)
}

/// Scalar multiple of a matrix.
pub fn scale<T: Scalar>(a: &Matrix<T>, c: T) -> LinalgResult<Matrix<T>> {
    check_nonempty(a)?;
    let mut scaled = Matrix::new();
    for i in 0..a.rows() {
        scaled.push_row(vector_ops::scale(a.row(i)?, c)?)?;
    }
    Ok(scaled)
}

/// Matrix–vector product A·v.
pub fn mul_vector<T: Scalar>(a: &Matrix<T>, v: &Vector<T>) -> LinalgResult<Vector<T>> {
    check_nonempty(a)?;
    if v.dim() != a.cols() {
        return Err(LinalgError::DimensionMismatch(format!(
            "vector has dimension {} but the matrix width is {}",
            v.dim(),
            a.cols()
        )));
    }
    let mut result = Vector::new();
    for i in 0..a.rows() {
        result.push(vector_ops::dot(a.row(i)?, v)?);
    }
    Ok(result)
}

/// Matrix product A·B, built column by column.
pub fn mul_matrix<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    check_nonempty(a)?;
    check_nonempty(b)?;
    if b.rows() != a.cols() {
        return Err(LinalgError::DimensionMismatch(format!(
            "cannot multiply {:?} by {:?}",
            a.size(),
            b.size()
        )));
    }
    let mut product = Matrix::new();
    for j in 0..b.cols() {
        product.push_col(mul_vector(a, &b.column(j)?)?)?;
    }
    Ok(product)
}

/// Transpose of a matrix.
pub fn transpose<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    check_nonempty(a)?;
    let mut result = Matrix::new();
    for i in 0..a.rows() {
        result.push_col(a.row(i)?.clone())?;
    }
    Ok(result)
}

/// n-th power of a square matrix, n >= 1.
pub fn power<T: Scalar>(a: &Matrix<T>, n: u32) -> LinalgResult<Matrix<T>> {
    check_nonempty(a)?;
    if !a.is_square() {
        let (rows, cols) = a.size();
        return Err(LinalgError::NotSquare { rows, cols });
    }
    if n == 0 {
        return Err(LinalgError::InvalidOperation(
            "matrix power requires an exponent of at least 1".to_string(),
        ));
    }
    let mut result = a.clone();
    for _ in 1..n {
        result = mul_matrix(&result, a)?;
    }
    Ok(result)
}

/// 2x2 counterclockwise rotation by `theta` radians.
pub fn rotation<T: Scalar>(theta: T) -> Matrix<T> {
    let (sin, cos) = (theta.sin(), theta.cos());
    let mut result = Matrix::new();
    // push_row cannot fail here: both rows have width 2
    let _ = result.push_row(Vector::from_slice(&[cos, -sin]));
    let _ = result.push_row(Vector::from_slice(&[sin, cos]));
    result
}
