// Marquee configuration
//
// All host-supplied knobs in one record. Defaults mirror the provider banner
// this engine was built for: a 500px lane, velocity 5, base radius 70, up to
// 200 scatter attempts, and responsive scale bands at 800/1100/1400px.

use serde::{Deserialize, Serialize};

use crate::error::{MarqueeError, MarqueeResult};

/// Horizontal scroll direction of the belt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    /// Items drift left and re-enter from the right edge
    Left,
    /// Items drift right and re-enter from the left edge
    Right,
}

/// Configuration for a marquee track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Viewport width in pixels, read once at mount (see `MarqueeTrack::resize`)
    pub viewport_width: f32,

    /// Height of the horizontal band items scatter and orbit within
    pub lane_height: f32,

    /// Pixels of horizontal translation per tick
    pub linear_velocity: f32,

    /// Which way the belt scrolls
    pub scroll_direction: ScrollDirection,

    /// Orbit radius in pixels before the responsive scale factor is applied
    pub base_radius: f32,

    /// Minimum extra separation between any two orbit circles at placement time
    pub min_spacing: f32,

    /// Scatter retry budget before falling back to the even layout
    pub max_scatter_attempts: u32,

    /// Per-item angular velocity is drawn uniformly from this range
    /// (degrees per tick); spreading it desynchronizes the orbits
    pub angular_velocity_range: (f32, f32),

    /// Seed for placement randomness; `None` draws from OS entropy.
    /// A fixed seed makes the initial layout reproducible.
    pub seed: Option<u64>,

    /// Target frames per second for the animation loop
    pub target_fps: u32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1200.0,
            lane_height: 500.0,
            linear_velocity: 5.0,
            scroll_direction: ScrollDirection::Left,
            base_radius: 70.0,
            min_spacing: 5.0,
            max_scatter_attempts: 200,
            angular_velocity_range: (6.0, 12.0),
            seed: None,
            target_fps: 60,
        }
    }
}

impl MarqueeConfig {
    /// Check that every knob is usable.
    ///
    /// Zero-sized viewports and empty icon lists are deliberately NOT errors;
    /// they degrade to an empty render list instead.
    pub fn validate(&self) -> MarqueeResult<()> {
        if !self.viewport_width.is_finite() || !self.lane_height.is_finite() {
            return Err(MarqueeError::InvalidViewport {
                width: self.viewport_width,
                lane_height: self.lane_height,
            });
        }
        if !self.linear_velocity.is_finite() || self.linear_velocity < 0.0 {
            return Err(MarqueeError::InvalidVelocity(self.linear_velocity));
        }
        if !self.base_radius.is_finite() || self.base_radius < 0.0 {
            return Err(MarqueeError::InvalidRadius(self.base_radius));
        }
        if !self.min_spacing.is_finite() || self.min_spacing < 0.0 {
            return Err(MarqueeError::InvalidSpacing(self.min_spacing));
        }
        let (min, max) = self.angular_velocity_range;
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(MarqueeError::InvalidAngularVelocityRange { min, max });
        }
        if self.target_fps == 0 {
            return Err(MarqueeError::InvalidFrameRate(self.target_fps));
        }
        Ok(())
    }

    /// Responsive scale factor for a viewport width.
    ///
    /// Static band lookup, not a continuous function: wider viewports get
    /// larger icons and orbits.
    pub fn scale_for_width(width: f32) -> f32 {
        if width > 1400.0 {
            0.8
        } else if width > 1100.0 {
            0.7
        } else if width > 800.0 {
            0.6
        } else {
            0.4
        }
    }

    /// Effective orbit radius at the configured viewport width
    pub fn scaled_radius(&self) -> f32 {
        self.base_radius * Self::scale_for_width(self.viewport_width)
    }
}
