use lineal_core::Scalar;

/// Real roots of a monic cubic, with multiplicity folded into repetition:
/// a double or triple root appears as equal values in `Three`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CubicRoots<T: Scalar> {
    One(T),
    Three(T, T, T),
}

impl<T: Scalar> CubicRoots<T> {
    /// Number of real roots found.
    pub fn count(&self) -> usize {
        match self {
            CubicRoots::One(_) => 1,
            CubicRoots::Three(..) => 3,
        }
    }
}

/// Real roots of x³ + a·x² + b·x + c = 0.
///
/// Adapted from `gsl_poly_solve_cubic` in the GNU Scientific Library:
/// Cardano substitution q = (a² − 3b)/9, r = (2a³ − 9ab + 27c)/54, with the
/// discriminant comparison scaled to 729r² vs 2916q³ to avoid the division.
/// In the three-distinct-roots regime the roots come from the trigonometric
/// form and are returned in ascending order.
///
/// The triple-root and double-root branch tests use exact floating equality,
/// as the GSL original does; a tolerance compare here would change which
/// branch fires near a degenerate cubic, so the fragility is kept as-is.
pub fn solve_monic<T: Scalar>(a: T, b: T, c: T) -> CubicRoots<T> {
    let three = T::from_f64(3.0);
    let nine = T::from_f64(9.0);
    let twenty_seven = T::from_f64(27.0);

    let q = a * a - three * b;
    let r = T::TWO * a * a * a - nine * a * b + twenty_seven * c;
    let qq = q / nine;
    let rr = r / T::from_f64(54.0);
    let q3 = qq * qq * qq;
    let r2 = rr * rr;
    let cr2 = T::from_f64(729.0) * r * r;
    let cq3 = T::from_f64(2916.0) * q * q * q;
    let shift = a / three;

    if rr == T::ZERO && qq == T::ZERO {
        let root = -shift;
        CubicRoots::Three(root, root, root)
    } else if cr2 == cq3 {
        // double root; the sign of r picks the configuration
        let sqrt_q = qq.sqrt();
        if rr > T::ZERO {
            CubicRoots::Three(
                -T::TWO * sqrt_q - shift,
                sqrt_q - shift,
                sqrt_q - shift,
            )
        } else {
            CubicRoots::Three(
                -sqrt_q - shift,
                -sqrt_q - shift,
                T::TWO * sqrt_q - shift,
            )
        }
    } else if r2 < q3 {
        // three distinct real roots, trigonometric form
        let sgn = if rr >= T::ZERO { T::ONE } else { T::NEG_ONE };
        let theta = (sgn * (r2 / q3).sqrt()).acos();
        let norm = -T::TWO * qq.sqrt();
        let mut x0 = norm * (theta / three).cos() - shift;
        let mut x1 = norm * ((theta + T::TWO * T::PI) / three).cos() - shift;
        let mut x2 = norm * ((theta - T::TWO * T::PI) / three).cos() - shift;
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
        }
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            if x0 > x1 {
                std::mem::swap(&mut x0, &mut x1);
            }
        }
        CubicRoots::Three(x0, x1, x2)
    } else {
        // one real root, Cardano form
        let sgn = if rr >= T::ZERO { T::ONE } else { T::NEG_ONE };
        let big_a = -sgn * (rr.abs() + (r2 - q3).sqrt()).cbrt();
        let big_b = qq / big_a;
        CubicRoots::One(big_a + big_b - shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_three_distinct_roots() {
        // (x - 1)(x - 2)(x - 3) = x³ - 6x² + 11x - 6
        match solve_monic(-6.0f64, 11.0, -6.0) {
            CubicRoots::Three(x0, x1, x2) => {
                assert_abs_diff_eq!(x0, 1.0, epsilon = 1e-9);
                assert_abs_diff_eq!(x1, 2.0, epsilon = 1e-9);
                assert_abs_diff_eq!(x2, 3.0, epsilon = 1e-9);
            }
            other => panic!("expected three roots, got {:?}", other),
        }
    }

    #[test]
    fn test_triple_root() {
        // (x - 1)³ = x³ - 3x² + 3x - 1
        match solve_monic(-3.0f64, 3.0, -1.0) {
            CubicRoots::Three(x0, x1, x2) => {
                assert_abs_diff_eq!(x0, 1.0, epsilon = 1e-12);
                assert_eq!(x0, x1);
                assert_eq!(x1, x2);
            }
            other => panic!("expected a triple root, got {:?}", other),
        }
    }

    #[test]
    fn test_double_root_below_single() {
        // (x - 1)²(x - 4) = x³ - 6x² + 9x - 4
        match solve_monic(-6.0f64, 9.0, -4.0) {
            CubicRoots::Three(x0, x1, x2) => {
                assert_abs_diff_eq!(x0, 1.0, epsilon = 1e-9);
                assert_eq!(x0, x1);
                assert_abs_diff_eq!(x2, 4.0, epsilon = 1e-9);
            }
            other => panic!("expected a double root, got {:?}", other),
        }
    }

    #[test]
    fn test_double_root_above_single() {
        // (x + 2)(x - 1)² with r > 0: x³ - 3x + 2
        match solve_monic(0.0f64, -3.0, 2.0) {
            CubicRoots::Three(x0, x1, x2) => {
                assert_abs_diff_eq!(x0, -2.0, epsilon = 1e-9);
                assert_abs_diff_eq!(x1, 1.0, epsilon = 1e-9);
                assert_eq!(x1, x2);
            }
            other => panic!("expected a double root, got {:?}", other),
        }
    }

    #[test]
    fn test_one_real_root() {
        // x³ - 1 has one real root at 1
        match solve_monic(0.0f64, 0.0, -1.0) {
            CubicRoots::One(x0) => assert_abs_diff_eq!(x0, 1.0, epsilon = 1e-12),
            other => panic!("expected one real root, got {:?}", other),
        }
        assert_eq!(solve_monic(0.0f64, 0.0, -1.0).count(), 1);
    }

    #[test]
    fn test_roots_satisfy_polynomial() {
        let (a, b, c) = (-2.5f64, -1.0, 0.75);
        if let CubicRoots::Three(x0, x1, x2) = solve_monic(a, b, c) {
            for x in [x0, x1, x2] {
                let value = x * x * x + a * x * x + b * x + c;
                assert_abs_diff_eq!(value, 0.0, epsilon = 1e-9);
            }
        } else {
            panic!("expected three real roots");
        }
    }
}
