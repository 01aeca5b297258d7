//! Planar areas and triangle classification.
//!
//! Everything here is a pure function on `f64` inputs. Invalid inputs are
//! reported through [`AreaError`]; no function returns a sentinel in place of
//! an error.
//!
//! Layout
//! - `area`: circle area and Heron's triangle area.
//! - `triangle`: triangle validity and right-triangle checks.
//! - `rand`: reproducible triangle sampler for tests and benchmarks.

pub mod api;
pub mod area;
pub mod cfg;
pub mod error;
pub mod rand;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::{circle_area, triangle_area};
pub use cfg::AreaCfg;
pub use error::AreaError;
pub use triangle::{is_right_triangle, is_right_triangle_eps, sides_form_triangle, Sides};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{circle_area, triangle_area};
    pub use crate::cfg::AreaCfg;
    pub use crate::error::AreaError;
    pub use crate::rand::{draw_right_triangle, draw_triangle, ReplayToken, TriangleCfg};
    pub use crate::triangle::{
        is_right_triangle, is_right_triangle_eps, sides_form_triangle, sides_from_vertices,
        sorted_sides, Sides,
    };
    pub use nalgebra::Vector2 as Vec2;
}
