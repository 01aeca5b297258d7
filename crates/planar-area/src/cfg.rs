//! Tolerance defaults.
//!
//! Policy
//! - The four core operations take no tolerances: circle and Heron areas are
//!   closed-form, and `is_right_triangle` compares exactly.
//! - `AreaCfg` only feeds the opt-in tolerant check `is_right_triangle_eps`.

/// Tolerances for triangle classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaCfg {
    /// Relative tolerance for `z² ≈ x² + y²`, scaled by `z²`.
    pub eps_right: f64,
}

impl Default for AreaCfg {
    fn default() -> Self {
        Self { eps_right: 1e-9 }
    }
}
