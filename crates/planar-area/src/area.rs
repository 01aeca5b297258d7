//! Closed-form planar areas.
//!
//! - Circle: `π r²` with `r > 0`.
//! - Triangle: Heron's formula on three side lengths that pass
//!   [`sides_form_triangle`](crate::triangle::sides_form_triangle).

use std::f64::consts::PI;

use crate::error::AreaError;
use crate::triangle::sides_form_triangle;

/// Area of a circle with the given radius.
///
/// Fails with `InvalidArgument` unless `radius > 0` (zero, negative and NaN
/// radii are rejected).
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn circle_area(radius: f64) -> Result<f64, AreaError> {
    if !(radius > 0.0) {
        return Err(AreaError::NON_POSITIVE_RADIUS);
    }
    Ok(PI * radius * radius)
}

/// Area of the triangle with side lengths `a`, `b`, `c` (Heron's formula).
///
/// Degenerate triples such as `(1, 1, 2)` are rejected rather than returned as
/// zero area, so a successful result is always `> 0`.
pub fn triangle_area(a: f64, b: f64, c: f64) -> Result<f64, AreaError> {
    if !sides_form_triangle(a, b, c) {
        return Err(AreaError::NOT_A_TRIANGLE);
    }
    let s = (a + b + c) / 2.0;
    Ok((s * (s - a) * (s - b) * (s - c)).sqrt())
}
