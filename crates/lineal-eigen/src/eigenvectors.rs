use lineal_core::error::LinalgResult;
use lineal_core::{Matrix, Scalar, Vector};
use lineal_gauss::rref::{rank, rref};

use crate::eigenvalues::{eigenvalues_2x2, eigenvalues_3x3};

/// An eigenvalue together with one basis vector of its eigenspace. A value
/// of geometric multiplicity k appears in k pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Eigenpair<T: Scalar> {
    pub value: T,
    pub vector: Vector<T>,
}

/// A − λI.
fn shifted<T: Scalar>(a: &Matrix<T>, lambda: T) -> LinalgResult<Matrix<T>> {
    let n = a.rows();
    let mut result = a.clone();
    for i in 0..n {
        result.set(i, i, a.get(i, i)? - lambda)?;
    }
    Ok(result)
}

/// Solve the single constraint row of a rank-1 RREF of a 2x2 shifted
/// matrix. The pivot may sit in either column, so the denominator is
/// checked against precision before use.
fn line_solution_2x2<T: Scalar>(r: &Matrix<T>) -> LinalgResult<Vector<T>> {
    let a1 = r.get(0, 0)?;
    let b1 = r.get(0, 1)?;
    if a1.near_zero() {
        // row is [0, 1]: the second coordinate is constrained to zero
        Ok(Vector::from_slice(&[T::ONE, T::ZERO]))
    } else {
        Ok(Vector::from_slice(&[-b1 / a1, T::ONE]))
    }
}

/// Eigenpairs of a 2x2 matrix: for each eigenvalue, a basis of the null
/// space of A − λI found by row reduction.
///
/// Returns two pairs when the matrix is diagonalizable and a single pair
/// when a repeated eigenvalue has a one-dimensional eigenspace.
pub fn eigenvectors_2x2<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Vec<Eigenpair<T>>> {
    let (l1, l2) = eigenvalues_2x2(a)?;
    let r = rref(&shifted(a, l1)?)?;
    let r11 = r.get(0, 0)?;
    let r12 = r.get(0, 1)?;

    if r11.near_zero() && r12.near_zero() {
        // A − λ1·I vanished: the eigenspace is the whole plane
        return Ok(vec![
            Eigenpair {
                value: l1,
                vector: Vector::standard_basis(2, 0)?,
            },
            Eigenpair {
                value: l2,
                vector: Vector::standard_basis(2, 1)?,
            },
        ]);
    }
    if r11.near_zero() {
        // single free variable pinned to the first coordinate; no second
        // independent eigenvector exists for this pattern
        return Ok(vec![Eigenpair {
            value: l1,
            vector: Vector::from_slice(&[T::ONE, T::ZERO]),
        }]);
    }
    let v1 = line_solution_2x2(&r)?;
    let r2 = rref(&shifted(a, l2)?)?;
    let v2 = line_solution_2x2(&r2)?;
    Ok(vec![
        Eigenpair { value: l1, vector: v1 },
        Eigenpair { value: l2, vector: v2 },
    ])
}

/// Two independent solutions of a rank-1 RREF of a 3x3 shifted matrix.
/// The constraint row may lead in column 1 or column 2; each denominator
/// is checked against precision, with a standard-basis fallback when both
/// leading coefficients vanish.
fn plane_solutions<T: Scalar>(r: &Matrix<T>) -> LinalgResult<(Vector<T>, Vector<T>)> {
    let a1 = r.get(0, 0)?;
    let b1 = r.get(0, 1)?;
    let c1 = r.get(0, 2)?;
    match (a1.near_zero(), b1.near_zero()) {
        (false, _) => Ok((
            Vector::from_slice(&[-b1 / a1, T::ONE, T::ZERO]),
            Vector::from_slice(&[-c1 / a1, T::ZERO, T::ONE]),
        )),
        (true, false) => Ok((
            Vector::from_slice(&[T::ONE, -a1 / b1, T::ZERO]),
            Vector::from_slice(&[T::ZERO, -c1 / b1, T::ONE]),
        )),
        (true, true) => Ok((
            Vector::standard_basis(3, 0)?,
            Vector::standard_basis(3, 1)?,
        )),
    }
}

/// The single free-variable solution of a rank-2 RREF of a 3x3 shifted
/// matrix, keyed on which constraint coefficients are usable as
/// denominators: prefer the (1,1) entry, then the (2,2) entry, then fall
/// back to a standard basis vector.
fn line_solution_3x3<T: Scalar>(r: &Matrix<T>) -> LinalgResult<Vector<T>> {
    let a1 = r.get(0, 0)?;
    let b1 = r.get(0, 1)?;
    let c1 = r.get(0, 2)?;
    let e1 = r.get(1, 1)?;
    let f1 = r.get(1, 2)?;
    match (a1.near_zero(), e1.near_zero()) {
        (false, false) => Ok(Vector::from_slice(&[-c1 / a1, -f1 / e1, T::ONE])),
        (false, true) => Ok(Vector::from_slice(&[-b1 / a1, T::ONE, T::ZERO])),
        (true, _) => Ok(Vector::standard_basis(3, 0)?),
    }
}

/// Eigenpairs of a 3x3 matrix.
///
/// A repeated eigenvalue is moved to the front before solving, so its
/// (possibly multi-dimensional) eigenspace is enumerated first. The
/// eigenvalue solvers return bit-identical values for repeated roots, so
/// exact equality is the multiplicity test. Fewer than three returned
/// pairs means the matrix is not diagonalizable.
pub fn eigenvectors_3x3<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Vec<Eigenpair<T>>> {
    let (mut l1, mut l2, mut l3) = eigenvalues_3x3(a)?;
    if l1 == l3 {
        std::mem::swap(&mut l2, &mut l3);
    }
    if l2 == l3 {
        std::mem::swap(&mut l1, &mut l3);
    }

    let r = rref(&shifted(a, l1)?)?;
    let mut pairs = Vec::new();
    match rank(&r)? {
        0 => {
            // A = λ·I: every direction is an eigenvector
            for (axis, value) in [l1, l2, l3].into_iter().enumerate() {
                pairs.push(Eigenpair {
                    value,
                    vector: Vector::standard_basis(3, axis)?,
                });
            }
            return Ok(pairs);
        }
        1 => {
            // two-dimensional eigenspace for the repeated λ1
            let (v1, v2) = plane_solutions(&r)?;
            pairs.push(Eigenpair { value: l1, vector: v1 });
            pairs.push(Eigenpair { value: l1, vector: v2 });
            if l1 == l2 && l2 == l3 {
                // triple eigenvalue with only two independent directions
                return Ok(pairs);
            }
        }
        _ => {
            let v1 = line_solution_3x3(&r)?;
            pairs.push(Eigenpair { value: l1, vector: v1 });
            if l2 == l3 {
                // the repeated λ2 = λ3 contributes nothing further
                return Ok(pairs);
            }
        }
    }

    // here λ1 == λ2 != λ3, or all three are distinct; λ3 is simple
    let r3 = rref(&shifted(a, l3)?)?;
    let v3 = line_solution_3x3(&r3)?;
    if l1 == l2 {
        pairs.push(Eigenpair { value: l3, vector: v3 });
        return Ok(pairs);
    }
    let r2 = rref(&shifted(a, l2)?)?;
    let v2 = line_solution_3x3(&r2)?;
    pairs.push(Eigenpair { value: l2, vector: v2 });
    pairs.push(Eigenpair { value: l3, vector: v3 });
    Ok(pairs)
}
