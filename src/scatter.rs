// Scatter placement
//
// Randomized non-overlapping initial placement with bounded retries.
// Each attempt draws a fresh candidate layout; a layout is accepted when
// every pair of orbit circles keeps at least the configured tolerance of
// clear space between them. If the retry budget runs out the items are
// placed on a deterministic even grid instead, which is a policy choice
// rather than a failure.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::motion::Direction;

/// Initial state assigned to one item by the scatter pass
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub direction: Direction,
    pub angular_velocity: f32,
    pub initial_angle_deg: f32,
}

/// Geometry and randomness bounds for one scatter pass
#[derive(Debug, Clone, Copy)]
pub struct ScatterParams {
    /// Track width; candidate centers are drawn from [0, width]
    pub width: f32,
    /// Vertical band height; centers stay `radius` away from both edges
    pub lane_height: f32,
    /// Orbit radius shared by every item (already responsively scaled)
    pub radius: f32,
    /// Extra clearance required between any two orbit circles
    pub tolerance: f32,
    /// Retry budget before the even-grid fallback kicks in
    pub max_attempts: u32,
    /// Per-item angular velocity is drawn uniformly from this range
    pub angular_velocity_range: (f32, f32),
}

/// Scatter `count` items into non-overlapping orbit circles.
///
/// Pure given the rng: the same seeded `StdRng` and the same inputs always
/// produce the identical layout, which keeps placement testable. The rng is
/// consumed only here, never during the animation loop.
pub fn scatter(rng: &mut StdRng, count: usize, params: &ScatterParams) -> Vec<Placement> {
    if count == 0 {
        return Vec::new();
    }

    for attempt in 0..params.max_attempts {
        let candidate = draw_candidate(rng, count, params);
        if is_separated(&candidate, params.tolerance) {
            debug!(
                "scatter: accepted layout of {} items on attempt {}",
                count,
                attempt + 1
            );
            return candidate;
        }
    }

    warn!(
        "scatter: no non-overlapping layout for {} items within {} attempts, using even spacing",
        count, params.max_attempts
    );
    even_layout(rng, count, params)
}

/// Draw one fully random candidate layout
fn draw_candidate(rng: &mut StdRng, count: usize, params: &ScatterParams) -> Vec<Placement> {
    (0..count)
        .map(|_| Placement {
            center_x: if params.width > 0.0 {
                rng.gen_range(0.0..=params.width)
            } else {
                0.0
            },
            center_y: draw_center_y(rng, params),
            radius: params.radius,
            direction: draw_direction(rng),
            angular_velocity: draw_angular_velocity(rng, params),
            initial_angle_deg: rng.gen_range(0.0..360.0),
        })
        .collect()
}

/// Vertical center within [radius, lane_height - radius], or the lane
/// midline when the orbit doesn't fit the band at all.
fn draw_center_y(rng: &mut StdRng, params: &ScatterParams) -> f32 {
    let low = params.radius;
    let high = params.lane_height - params.radius;
    if high > low {
        rng.gen_range(low..=high)
    } else {
        params.lane_height / 2.0
    }
}

fn draw_direction(rng: &mut StdRng) -> Direction {
    if rng.gen_bool(0.5) {
        Direction::Clockwise
    } else {
        Direction::Counterclockwise
    }
}

fn draw_angular_velocity(rng: &mut StdRng, params: &ScatterParams) -> f32 {
    let (min, max) = params.angular_velocity_range;
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

/// Every pair of orbit circles keeps `tolerance` of clear space between them
fn is_separated(placements: &[Placement], tolerance: f32) -> bool {
    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            let dx = placements[i].center_x - placements[j].center_x;
            let dy = placements[i].center_y - placements[j].center_y;
            let required = placements[i].radius + placements[j].radius + tolerance;
            if dx * dx + dy * dy < required * required {
                return false;
            }
        }
    }
    true
}

/// Deterministic fallback: centers at `k * width / count` along the lane
/// midline. Motion parameters are still drawn from the rng so the belt looks
/// alive even in the degenerate case, and stays reproducible under a seed.
fn even_layout(rng: &mut StdRng, count: usize, params: &ScatterParams) -> Vec<Placement> {
    let step = params.width / count as f32;
    (0..count)
        .map(|k| Placement {
            center_x: k as f32 * step,
            center_y: params.lane_height / 2.0,
            radius: params.radius,
            direction: draw_direction(rng),
            angular_velocity: draw_angular_velocity(rng, params),
            initial_angle_deg: rng.gen_range(0.0..360.0),
        })
        .collect()
}
