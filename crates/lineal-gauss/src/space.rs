use lineal_core::error::{LinalgError, LinalgResult};
use lineal_core::{Matrix, Scalar, Vector};
use lineal_ops::inverse::inverse;
use lineal_ops::matrix_ops::mul_matrix;

use crate::rref::{rank, rref};

/// Validate a list of vectors: non-empty, uniform nonzero dimension.
/// Returns the common dimension.
fn check_list<T: Scalar>(vectors: &[Vector<T>]) -> LinalgResult<usize> {
    if vectors.is_empty() {
        return Err(LinalgError::InvalidOperation(
            "the vector list must contain at least one vector".to_string(),
        ));
    }
    let dim = vectors[0].dim();
    if dim == 0 {
        return Err(LinalgError::EmptyVector);
    }
    for v in &vectors[1..] {
        if v.dim() != dim {
            return Err(LinalgError::DimensionMismatch(format!(
                "all vectors must have dimension {}, found {}",
                dim,
                v.dim()
            )));
        }
    }
    Ok(dim)
}

/// Matrix whose columns are the given vectors.
fn column_matrix<T: Scalar>(vectors: &[Vector<T>]) -> LinalgResult<Matrix<T>> {
    let mut m = Matrix::new();
    for v in vectors {
        m.push_col(v.clone())?;
    }
    Ok(m)
}

/// True iff the vectors are linearly independent: the rank of their column
/// matrix equals their count.
pub fn linearly_independent<T: Scalar>(vectors: &[Vector<T>]) -> LinalgResult<bool> {
    check_list(vectors)?;
    let columns = column_matrix(vectors)?;
    Ok(rank(&columns)? == vectors.len())
}

/// True iff the vectors form a basis of a space of the given dimension.
pub fn is_basis<T: Scalar>(vectors: &[Vector<T>], dim: usize) -> LinalgResult<bool> {
    Ok(linearly_independent(vectors)? && vectors.len() == dim)
}

/// True iff `v` lies in the span of the vectors: appending `v` as a column
/// leaves the rank unchanged.
pub fn in_span<T: Scalar>(vectors: &[Vector<T>], v: &Vector<T>) -> LinalgResult<bool> {
    let dim = check_list(vectors)?;
    if v.dim() != dim {
        return Err(LinalgError::DimensionMismatch(format!(
            "the vector has dimension {} but the span vectors have dimension {}",
            v.dim(),
            dim
        )));
    }
    let mut columns = column_matrix(vectors)?;
    let coefficient_rank = rank(&columns)?;
    columns.push_col(v.clone())?;
    let augmented_rank = rank(&columns)?;
    Ok(coefficient_rank == augmented_rank)
}

/// Extract a basis of the span: greedily keep each column that raises the
/// rank, in input order.
pub fn find_basis<T: Scalar>(vectors: &[Vector<T>]) -> LinalgResult<Matrix<T>> {
    check_list(vectors)?;
    let mut basis = Matrix::new();
    let mut kept = 0;
    for v in vectors {
        basis.push_col(v.clone())?;
        if rank(&basis)? != kept + 1 {
            basis.delete_col(kept)?;
        } else {
            kept += 1;
        }
    }
    Ok(basis)
}

/// Coordinates of `v` relative to an ordered basis: the final column of
/// RREF([basis | v]), truncated to the basis size.
pub fn coordinates<T: Scalar>(basis: &[Vector<T>], v: &Vector<T>) -> LinalgResult<Vector<T>> {
    if !linearly_independent(basis)? {
        return Err(LinalgError::InvalidOperation(
            "the basis vectors are not linearly independent".to_string(),
        ));
    }
    if !in_span(basis, v)? {
        return Err(LinalgError::InvalidOperation(
            "the vector is not in the span of the basis".to_string(),
        ));
    }
    let n = basis.len();
    let mut augmented = column_matrix(basis)?;
    augmented.push_col(v.clone())?;
    let reduced = rref(&augmented)?;
    let mut coords = Vector::new();
    for i in 0..n {
        coords.push(reduced.get(i, n)?);
    }
    Ok(coords)
}

/// Change-of-coordinates matrix from basis `b2` to basis `b1`: column i is
/// the `b1`-coordinate vector of `b2[i]`.
pub fn change_of_basis<T: Scalar>(
    b1: &[Vector<T>],
    b2: &[Vector<T>],
) -> LinalgResult<Matrix<T>> {
    let dim1 = check_list(b1)?;
    let dim2 = check_list(b2)?;
    if dim1 != dim2 {
        return Err(LinalgError::DimensionMismatch(format!(
            "the bases have vector dimensions {} and {}",
            dim1, dim2
        )));
    }
    if b1.len() != b2.len() {
        return Err(LinalgError::DimensionMismatch(format!(
            "the bases have {} and {} vectors",
            b1.len(),
            b2.len()
        )));
    }
    if !(linearly_independent(b1)? && linearly_independent(b2)?) {
        return Err(LinalgError::InvalidOperation(
            "both vector sets must be linearly independent".to_string(),
        ));
    }
    for v in b2 {
        if !in_span(b1, v)? {
            return Err(LinalgError::InvalidOperation(
                "the vector sets are not bases of the same space".to_string(),
            ));
        }
    }
    let mut result = Matrix::new();
    for v in b2 {
        result.push_col(coordinates(b1, v)?)?;
    }
    Ok(result)
}

/// Matrix of the linear map `l` relative to the given basis: B⁻¹·L·B with B
/// the basis column matrix.
pub fn transform_in_basis<T: Scalar>(
    basis: &[Vector<T>],
    l: &Matrix<T>,
) -> LinalgResult<Matrix<T>> {
    let (rows, cols) = l.size();
    if rows != cols || rows == 0 {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    let dim = check_list(basis)?;
    if dim != cols || basis.len() != cols {
        return Err(LinalgError::DimensionMismatch(format!(
            "the basis must contain {} vectors of dimension {}",
            cols, cols
        )));
    }
    let b = column_matrix(basis)?;
    let b_inv = inverse(&b)?;
    mul_matrix(&b_inv, &mul_matrix(l, &b)?)
}
