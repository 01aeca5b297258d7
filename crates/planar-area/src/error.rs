//! Error type shared by all fallible operations.

/// Failure of an area or classification call.
///
/// There is a single kind: the caller passed arguments that violate a
/// documented constraint. The message names the constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AreaError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl AreaError {
    pub(crate) const NON_POSITIVE_RADIUS: Self =
        Self::InvalidArgument("radius must be greater than 0");
    pub(crate) const NOT_A_TRIANGLE: Self =
        Self::InvalidArgument("sides do not form a valid triangle");
    pub(crate) const BAD_EPS: Self =
        Self::InvalidArgument("eps must be finite and non-negative");

    /// Human-readable description of the violated constraint.
    pub fn message(&self) -> &'static str {
        match self {
            AreaError::InvalidArgument(msg) => msg,
        }
    }
}
