use lineal_core::error::{LinalgError, LinalgResult};
use lineal_core::{Matrix, Scalar};

use crate::cubic::{solve_monic, CubicRoots};

fn check_dimension<T: Scalar>(a: &Matrix<T>, n: usize) -> LinalgResult<()> {
    let (rows, cols) = a.size();
    if rows != n || cols != n {
        return Err(LinalgError::UnsupportedDimension { rows, cols });
    }
    Ok(())
}

/// Real eigenvalues of a 2x2 matrix via the quadratic formula on the
/// characteristic polynomial λ² − (a + d)λ + (ad − bc).
///
/// Fails with `NonRealEigenvalues` when the discriminant is negative; only
/// real eigenvalues are supported.
pub fn eigenvalues_2x2<T: Scalar>(m: &Matrix<T>) -> LinalgResult<(T, T)> {
    check_dimension(m, 2)?;
    let a = m.get(0, 0)?;
    let b = m.get(0, 1)?;
    let c = m.get(1, 0)?;
    let d = m.get(1, 1)?;
    let linear = -a - d;
    let constant = a * d - b * c;
    let discriminant = linear * linear - T::from_f64(4.0) * constant;
    if discriminant < T::ZERO {
        return Err(LinalgError::NonRealEigenvalues);
    }
    let root = discriminant.sqrt();
    Ok(((-linear + root) / T::TWO, (-linear - root) / T::TWO))
}

/// Real eigenvalues of a 3x3 matrix.
///
/// The characteristic polynomial is fed to the cubic solver as
/// x³ − tr(A)·x² + m·x − det(A), with m the sum of the 2x2 principal
/// minors. Fewer than three real roots means complex eigenvalues, which
/// are not supported.
pub fn eigenvalues_3x3<T: Scalar>(m: &Matrix<T>) -> LinalgResult<(T, T, T)> {
    check_dimension(m, 3)?;
    let a = m.get(0, 0)?;
    let b = m.get(0, 1)?;
    let c = m.get(0, 2)?;
    let d = m.get(1, 0)?;
    let e = m.get(1, 1)?;
    let f = m.get(1, 2)?;
    let g = m.get(2, 0)?;
    let h = m.get(2, 1)?;
    let i = m.get(2, 2)?;

    let trace = a + e + i;
    let minor_sum = (a * e - b * d) + (a * i - c * g) + (e * i - f * h);
    let determinant =
        a * e * i - a * f * h - b * d * i + b * f * g - c * e * g + c * d * h;

    match solve_monic(-trace, minor_sum, -determinant) {
        CubicRoots::Three(l1, l2, l3) => Ok((l1, l2, l3)),
        CubicRoots::One(_) => Err(LinalgError::NonRealEigenvalues),
    }
}
