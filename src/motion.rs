// Orbit motion
//
// Pure circular parametrization for a single item: advance the orbital angle
// by one tick and compute the (dx, dy) offset from the orbit center. No state
// is retained here; the track owns the item record and writes the results back.

use serde::{Deserialize, Serialize};

/// Direction of orbital travel around the center point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    Counterclockwise,
}

impl Direction {
    /// Sign applied to the per-tick angular increment
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::Counterclockwise => -1.0,
        }
    }
}

/// Renormalize an angle into [0, 360).
///
/// `rem_euclid` alone can round back up to exactly 360.0 for tiny negative
/// inputs in f32, so the result is folded once more.
pub fn normalize_deg(angle_deg: f32) -> f32 {
    let normalized = angle_deg.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Advance an orbital angle by one tick.
///
/// Direction flips the sign of the increment. The result is always in [0, 360).
pub fn advance(angle_deg: f32, angular_velocity: f32, direction: Direction) -> f32 {
    normalize_deg(angle_deg + direction.sign() * angular_velocity)
}

/// Offset of an orbiting item from its center at the given angle.
///
/// Standard parametrization: `dx = r * cos(θ)`, `dy = r * sin(θ)`.
pub fn offset(angle_deg: f32, radius: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (radius * rad.cos(), radius * rad.sin())
}
