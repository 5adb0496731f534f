use lineal_core::error::{LinalgError, LinalgResult};
use lineal_core::{Matrix, Scalar};
use lineal_ops::inverse::inverse;

use crate::eigenvectors::{eigenvectors_2x2, eigenvectors_3x3, Eigenpair};

/// A diagonalization A = P·D·P⁻¹: the columns of `p` are eigenvectors, `d`
/// is diagonal with the matching eigenvalues, and `p_inv` is the inverse
/// of `p`.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagonalization<T: Scalar> {
    pub p: Matrix<T>,
    pub d: Matrix<T>,
    pub p_inv: Matrix<T>,
}

fn assemble<T: Scalar>(pairs: Vec<Eigenpair<T>>, n: usize) -> LinalgResult<Diagonalization<T>> {
    if pairs.len() < n {
        return Err(LinalgError::NotDiagonalizable);
    }
    let mut p = Matrix::new();
    let mut d = Matrix::zeros(n, n);
    for (i, pair) in pairs.iter().enumerate() {
        p.push_col(pair.vector.clone())?;
        d.set(i, i, pair.value)?;
    }
    let p_inv = inverse(&p)?;
    Ok(Diagonalization { p, d, p_inv })
}

/// Diagonalize a 2x2 matrix. Fails with `NotDiagonalizable` when the
/// eigenvectors do not span the plane.
pub fn diagonalize_2x2<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Diagonalization<T>> {
    assemble(eigenvectors_2x2(a)?, 2)
}

/// Diagonalize a 3x3 matrix. Fails with `NotDiagonalizable` when the
/// eigenvectors do not span the space.
pub fn diagonalize_3x3<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Diagonalization<T>> {
    assemble(eigenvectors_3x3(a)?, 3)
}
