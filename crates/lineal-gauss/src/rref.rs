use lineal_core::error::{LinalgError, LinalgResult};
use lineal_core::{Matrix, Scalar};

/// True if the entry at (row, col) is the leading entry of its row: nonzero
/// within precision, with every entry strictly left of it zero within
/// precision. A row already reduced in an earlier pass fails this test for
/// later columns, which is what lets the sweep skip it.
fn is_leading<T: Scalar>(a: &Matrix<T>, row: usize, col: usize) -> LinalgResult<bool> {
    if a.get(row, col)?.near_zero() {
        return Ok(false);
    }
    for left in 0..col {
        if !a.get(row, left)?.near_zero() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Reduced row-echelon form of a non-empty matrix.
///
/// Column-major forward elimination: for each column, the first row at or
/// below the current leading position whose leading entry falls in that
/// column is scaled to 1, used to clear the column everywhere else, and
/// swapped up into the leading position. Rows never chosen settle to the
/// bottom as zero rows. The input is never mutated; the result is an
/// independent matrix.
pub fn rref<T: Scalar>(a: &Matrix<T>) -> LinalgResult<Matrix<T>> {
    if a.is_empty() {
        return Err(LinalgError::EmptyMatrix);
    }
    let mut result = a.clone();
    let (rows, cols) = result.size();
    let mut leading_row = 0;
    for col in 0..cols {
        for row in leading_row..rows {
            if is_leading(&result, row, col)? {
                let pivot = result.get(row, col)?;
                result.scale_row(row, T::ONE / pivot)?;
                for other in 0..rows {
                    if other == row {
                        continue;
                    }
                    let entry = result.get(other, col)?;
                    if !entry.near_zero() {
                        // the pivot entry is 1 after scaling
                        result.add_scaled_row(other, row, -entry)?;
                    }
                }
                result.swap_rows(leading_row, row)?;
                leading_row += 1;
                break;
            }
        }
    }
    Ok(result)
}

/// Rank: the number of leading entries in the reduced form.
pub fn rank<T: Scalar>(a: &Matrix<T>) -> LinalgResult<usize> {
    let reduced = rref(a)?;
    let (rows, cols) = reduced.size();
    let mut rank = 0;
    for i in 0..rows {
        for j in 0..cols {
            if is_leading(&reduced, i, j)? {
                rank += 1;
                break;
            }
        }
    }
    Ok(rank)
}

/// True iff the matrix already equals its own reduced form entrywise,
/// within precision.
pub fn is_rref<T: Scalar>(a: &Matrix<T>) -> LinalgResult<bool> {
    let reduced = rref(a)?;
    let (rows, cols) = a.size();
    for i in 0..rows {
        for j in 0..cols {
            if !(a.get(i, j)? - reduced.get(i, j)?).near_zero() {
                return Ok(false);
            }
        }
    }
    Ok(true)
}
