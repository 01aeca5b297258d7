//! Triangle validity and right-triangle detection on side lengths.
//!
//! A triangle is described transiently by three `f64` side lengths and is
//! re-validated by every call. Validity is strict: degenerate (collinear)
//! triples fail just like impossible ones.

use nalgebra::Vector2;

use crate::error::AreaError;

/// Three side lengths. Not validated by construction.
pub type Sides = (f64, f64, f64);

/// Whether `a`, `b`, `c` are the side lengths of a non-degenerate triangle.
///
/// All sides must be positive and the strict triangle inequality must hold
/// for every side. NaN or infinite inputs give `false`. Never fails.
#[inline]
pub fn sides_form_triangle(a: f64, b: f64, c: f64) -> bool {
    a > 0.0 && b > 0.0 && c > 0.0 && a + b > c && a + c > b && b + c > a
}

/// Sides sorted ascending, so the last entry is the hypotenuse candidate.
pub fn sorted_sides(a: f64, b: f64, c: f64) -> Sides {
    let mut s = [a, b, c];
    s.sort_by(f64::total_cmp);
    (s[0], s[1], s[2])
}

/// Whether the triangle is right-angled, using exact floating-point equality
/// `z² == x² + y²` on the sorted sides.
///
/// Exact equality only reliably holds for sides that are exactly representable
/// and Pythagorean (e.g. `3, 4, 5`); `(1, 1, √2)` returns `false`. Use
/// [`is_right_triangle_eps`] for measured or irrational sides.
pub fn is_right_triangle(a: f64, b: f64, c: f64) -> Result<bool, AreaError> {
    if !sides_form_triangle(a, b, c) {
        return Err(AreaError::NOT_A_TRIANGLE);
    }
    let (x, y, z) = sorted_sides(a, b, c);
    Ok(z * z == x * x + y * y)
}

/// Tolerant variant of [`is_right_triangle`]: `|z² − (x² + y²)| <= eps·z²`.
///
/// `eps = 0` reproduces the exact check. `eps` must be finite and `>= 0`.
pub fn is_right_triangle_eps(a: f64, b: f64, c: f64, eps: f64) -> Result<bool, AreaError> {
    if !(eps.is_finite() && eps >= 0.0) {
        return Err(AreaError::BAD_EPS);
    }
    if !sides_form_triangle(a, b, c) {
        return Err(AreaError::NOT_A_TRIANGLE);
    }
    let (x, y, z) = sorted_sides(a, b, c);
    let zz = z * z;
    Ok((zz - (x * x + y * y)).abs() <= eps * zz)
}

/// Side lengths of the triangle with vertices `p`, `q`, `r`.
///
/// Returned as `(|q−r|, |r−p|, |p−q|)`, the side opposite each vertex.
/// Collinear or coincident vertices produce a degenerate triple that the
/// validating operations reject.
pub fn sides_from_vertices(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> Sides {
    ((q - r).norm(), (r - p).norm(), (p - q).norm())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn sorted_sides_orders_ascending() {
        assert_eq!(sorted_sides(5.0, 3.0, 4.0), (3.0, 4.0, 5.0));
        assert_eq!(sorted_sides(1.0, 1.0, 1.0), (1.0, 1.0, 1.0));
    }

    #[test]
    fn vertices_to_sides() {
        let (a, b, c) = sides_from_vertices(vector![0.0, 0.0], vector![3.0, 0.0], vector![0.0, 4.0]);
        // a opposite p: |q - r| = 5
        assert!((a - 5.0).abs() < 1e-12);
        assert!((b - 4.0).abs() < 1e-12);
        assert!((c - 3.0).abs() < 1e-12);
        assert_eq!(is_right_triangle(a, b, c), Ok(true));
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        let (a, b, c) = sides_from_vertices(vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]);
        assert!(!sides_form_triangle(a, b, c));
    }

    #[test]
    fn eps_must_be_non_negative_and_finite() {
        assert_eq!(is_right_triangle_eps(3.0, 4.0, 5.0, -1e-9), Err(AreaError::BAD_EPS));
        assert_eq!(is_right_triangle_eps(3.0, 4.0, 5.0, f64::NAN), Err(AreaError::BAD_EPS));
        assert_eq!(
            is_right_triangle_eps(3.0, 4.0, 5.0, f64::INFINITY),
            Err(AreaError::BAD_EPS)
        );
    }
}
