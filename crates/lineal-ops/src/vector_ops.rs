use lineal_core::error::{LinalgError, LinalgResult};
use lineal_core::{Scalar, Vector};

/// A plane in R^3 written as n1·x1 + n2·x2 + n3·x3 = constant.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneEquation<T: Scalar> {
    pub normal: Vector<T>,
    pub constant: T,
}

fn check_pair<T: Scalar>(v1: &Vector<T>, v2: &Vector<T>) -> LinalgResult<()> {
    if v1.is_empty() || v2.is_empty() {
        return Err(LinalgError::EmptyVector);
    }
    if v1.dim() != v2.dim() {
        return Err(LinalgError::DimensionMismatch(format!(
            "vectors have dimensions {} and {}",
            v1.dim(),
            v2.dim()
        )));
    }
    Ok(())
}

/// Entrywise sum of two vectors of the same dimension.
pub fn add<T: Scalar>(v1: &Vector<T>, v2: &Vector<T>) -> LinalgResult<Vector<T>> {
    check_pair(v1, v2)?;
    let data: Vec<T> = v1
        .iter()
        .zip(v2.iter())
        .map(|(&a, &b)| a + b)
        .collect();
    Ok(Vector::from_slice(&data))
}

/// Scalar multiple of a vector.
pub fn scale<T: Scalar>(v: &Vector<T>, c: T) -> LinalgResult<Vector<T>> {
    if v.is_empty() {
        return Err(LinalgError::EmptyVector);
    }
    let data: Vec<T> = v.iter().map(|&x| c * x).collect();
    Ok(Vector::from_slice(&data))
}

/// Dot product of two vectors of the same dimension.
pub fn dot<T: Scalar>(v1: &Vector<T>, v2: &Vector<T>) -> LinalgResult<T> {
    check_pair(v1, v2)?;
    Ok(v1.iter().zip(v2.iter()).map(|(&a, &b)| a * b).sum())
}

/// Cross product, defined for vectors in R^3 only.
pub fn cross<T: Scalar>(v1: &Vector<T>, v2: &Vector<T>) -> LinalgResult<Vector<T>> {
    if v1.dim() != 3 || v2.dim() != 3 {
        return Err(LinalgError::DimensionMismatch(format!(
            "cross product requires two 3-dimensional vectors, got {} and {}",
            v1.dim(),
            v2.dim()
        )));
    }
    let (a1, a2, a3) = (v1.get(0)?, v1.get(1)?, v1.get(2)?);
    let (b1, b2, b3) = (v2.get(0)?, v2.get(1)?, v2.get(2)?);
    Ok(Vector::from_slice(&[
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
    ]))
}

/// Projection of `v` onto `onto`.
pub fn proj<T: Scalar>(onto: &Vector<T>, v: &Vector<T>) -> LinalgResult<Vector<T>> {
    check_pair(onto, v)?;
    let denom = dot(onto, onto)?;
    if denom.near_zero() {
        return Err(LinalgError::InvalidOperation(
            "cannot project onto the zero vector".to_string(),
        ));
    }
    let factor = dot(onto, v)? / denom;
    scale(onto, factor)
}

/// Component of `v` perpendicular to `onto`.
pub fn perp<T: Scalar>(onto: &Vector<T>, v: &Vector<T>) -> LinalgResult<Vector<T>> {
    let p = proj(onto, v)?;
    add(v, &scale(&p, T::NEG_ONE)?)
}

/// Euclidean norm.
pub fn norm<T: Scalar>(v: &Vector<T>) -> LinalgResult<T> {
    if v.is_empty() {
        return Err(LinalgError::EmptyVector);
    }
    Ok(dot(v, v)?.sqrt())
}

/// Angle between two nonzero vectors, in radians.
pub fn angle<T: Scalar>(v1: &Vector<T>, v2: &Vector<T>) -> LinalgResult<T> {
    check_pair(v1, v2)?;
    let n1 = norm(v1)?;
    let n2 = norm(v2)?;
    if (n1 * n2).near_zero() {
        return Err(LinalgError::InvalidOperation(
            "the angle with a zero vector is not defined".to_string(),
        ));
    }
    Ok((dot(v1, v2)? / (n1 * n2)).acos())
}

/// Scalar equation of the plane in R^3 spanned by `v1` and `v2` through
/// the given point.
pub fn scalar_equation<T: Scalar>(
    v1: &Vector<T>,
    v2: &Vector<T>,
    point: &Vector<T>,
) -> LinalgResult<PlaneEquation<T>> {
    if point.dim() != 3 {
        return Err(LinalgError::DimensionMismatch(format!(
            "the point must be 3-dimensional, got {}",
            point.dim()
        )));
    }
    let normal = cross(v1, v2)?;
    let constant = dot(&normal, point)?;
    Ok(PlaneEquation { normal, constant })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_add_and_scale() {
        let v1: Vector<f64> = Vector::from_slice(&[1.0, 2.0]);
        let v2: Vector<f64> = Vector::from_slice(&[3.0, -1.0]);
        assert_eq!(add(&v1, &v2).unwrap().as_slice(), &[4.0, 1.0]);
        assert_eq!(scale(&v1, 2.0).unwrap().as_slice(), &[2.0, 4.0]);
        let short: Vector<f64> = Vector::from_slice(&[1.0]);
        assert!(add(&v1, &short).is_err());
    }

    #[test]
    fn test_dot_and_norm() {
        let v1: Vector<f64> = Vector::from_slice(&[3.0, 4.0]);
        assert_abs_diff_eq!(dot(&v1, &v1).unwrap(), 25.0);
        assert_abs_diff_eq!(norm(&v1).unwrap(), 5.0);
    }

    #[test]
    fn test_cross() {
        let e1: Vector<f64> = Vector::from_slice(&[1.0, 0.0, 0.0]);
        let e2: Vector<f64> = Vector::from_slice(&[0.0, 1.0, 0.0]);
        let c = cross(&e1, &e2).unwrap();
        assert_eq!(c.as_slice(), &[0.0, 0.0, 1.0]);
        let flat: Vector<f64> = Vector::from_slice(&[1.0, 0.0]);
        assert!(cross(&e1, &flat).is_err());
    }

    #[test]
    fn test_proj_and_perp() {
        let onto: Vector<f64> = Vector::from_slice(&[1.0, 0.0]);
        let v: Vector<f64> = Vector::from_slice(&[3.0, 4.0]);
        assert_eq!(proj(&onto, &v).unwrap().as_slice(), &[3.0, 0.0]);
        assert_eq!(perp(&onto, &v).unwrap().as_slice(), &[0.0, 4.0]);
        let zero: Vector<f64> = Vector::from_slice(&[0.0, 0.0]);
        assert!(proj(&zero, &v).is_err());
    }

    #[test]
    fn test_angle() {
        let v1: Vector<f64> = Vector::from_slice(&[1.0, 0.0]);
        let v2: Vector<f64> = Vector::from_slice(&[0.0, 2.0]);
        assert_abs_diff_eq!(angle(&v1, &v2).unwrap(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        let zero: Vector<f64> = Vector::from_slice(&[0.0, 0.0]);
        assert!(angle(&v1, &zero).is_err());
    }

    #[test]
    fn test_scalar_equation() {
        let v1: Vector<f64> = Vector::from_slice(&[1.0, 0.0, 0.0]);
        let v2: Vector<f64> = Vector::from_slice(&[0.0, 1.0, 0.0]);
        let point: Vector<f64> = Vector::from_slice(&[0.0, 0.0, 5.0]);
        let plane = scalar_equation(&v1, &v2, &point).unwrap();
        assert_eq!(plane.normal.as_slice(), &[0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(plane.constant, 5.0);
    }
}
