//! Curated re-exports for downstream callers (the CLI in particular).
//!
//! Prefer these over reaching into individual modules so call sites stay
//! stable while modules move around.

// Area operations
pub use crate::area::{circle_area, triangle_area};
// Triangle classification
pub use crate::triangle::{
    is_right_triangle, is_right_triangle_eps, sides_form_triangle, sides_from_vertices,
    sorted_sides, Sides,
};
// Errors and tolerances
pub use crate::cfg::AreaCfg;
pub use crate::error::AreaError;
