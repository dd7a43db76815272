use thiserror::Error;

/// Malformed scene or camera configuration, reported before any rendering happens.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid resolution {width}x{height}, both dimensions must be at least 2")]
    InvalidResolution { width: u32, height: u32 },

    #[error("the {corner} view direction is zero-length or not finite")]
    DegenerateViewDirection { corner: &'static str },

    #[error("the view directions cancel out on row {row}")]
    DegenerateViewBox { row: u32 },

    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("plane tangent vectors must be non-zero and not colinear")]
    DegeneratePlane,
}
