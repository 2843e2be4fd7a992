// Marquee error types
//
// The animation loop itself has no recoverable errors: placement exhaustion
// falls back to an even layout and degenerate inputs render nothing. What
// remains is construction-time configuration validation.

use std::fmt;

/// Errors that can occur when validating a marquee configuration
#[derive(Debug, Clone, PartialEq)]
pub enum MarqueeError {
    /// Linear scroll velocity is negative or non-finite
    InvalidVelocity(f32),

    /// Base orbit radius is negative or non-finite
    InvalidRadius(f32),

    /// Minimum spacing tolerance is negative or non-finite
    InvalidSpacing(f32),

    /// Per-item angular velocity range is inverted, negative or non-finite
    InvalidAngularVelocityRange { min: f32, max: f32 },

    /// Viewport width or lane height is non-finite (zero is fine and renders nothing)
    InvalidViewport { width: f32, lane_height: f32 },

    /// Target frame rate of zero would make the frame duration unbounded
    InvalidFrameRate(u32),
}

impl fmt::Display for MarqueeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVelocity(v) => {
                write!(f, "Linear velocity must be finite and non-negative, got {}", v)
            }
            Self::InvalidRadius(r) => {
                write!(f, "Base orbit radius must be finite and non-negative, got {}", r)
            }
            Self::InvalidSpacing(s) => {
                write!(f, "Spacing tolerance must be finite and non-negative, got {}", s)
            }
            Self::InvalidAngularVelocityRange { min, max } => {
                write!(
                    f,
                    "Angular velocity range must be finite, non-negative and ordered, got {}..={}",
                    min, max
                )
            }
            Self::InvalidViewport { width, lane_height } => {
                write!(
                    f,
                    "Viewport dimensions must be finite, got width {} and lane height {}",
                    width, lane_height
                )
            }
            Self::InvalidFrameRate(fps) => {
                write!(f, "Target frame rate must be at least 1, got {}", fps)
            }
        }
    }
}

impl std::error::Error for MarqueeError {}

/// Result type for marquee construction
pub type MarqueeResult<T> = Result<T, MarqueeError>;
