// Marquee track
//
// Owns the authoritative per-item state and the per-tick update. Every tick
// the track translates each orbit center by the linear velocity, wraps items
// whose orbit circle has fully left the viewport back to the opposite edge,
// and delegates angle advancement to the orbit motion functions. The track is
// the single writer of item state; scatter and motion only transform values
// passed by copy.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{MarqueeConfig, ScrollDirection};
use crate::engine::{AnimationEngine, MarqueeFrame, RenderInstruction};
use crate::error::MarqueeResult;
use crate::motion::{self, Direction};
use crate::scatter::{scatter, ScatterParams};

/// Per-icon mutable animation state
///
/// `id`, `direction`, `radius` and `angular_velocity` are fixed at creation;
/// the track mutates `center_x`/`center_y` and `angle_deg` every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeItem {
    pub id: usize,
    pub center_x: f32,
    pub center_y: f32,
    pub angle_deg: f32,
    pub direction: Direction,
    pub radius: f32,
    pub angular_velocity: f32,
}

/// The marquee container: icons on an endless horizontal belt, each orbiting
/// its own drifting center
pub struct MarqueeTrack {
    icons: Vec<String>,
    config: MarqueeConfig,
    items: Vec<MarqueeItem>,
    scale: f32,
    seed: u64,
}

impl MarqueeTrack {
    /// Create a track and scatter its items.
    ///
    /// Fails only on invalid configuration. An empty icon list or a
    /// zero-width viewport is fine: the track holds no items and every tick
    /// renders nothing.
    pub fn new(icons: Vec<String>, config: MarqueeConfig) -> MarqueeResult<Self> {
        config.validate()?;
        let scale = MarqueeConfig::scale_for_width(config.viewport_width);
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let items = Self::place(&icons, &config, scale, seed);
        debug!(
            "marquee: mounted {} items at width {} (scale {})",
            items.len(),
            config.viewport_width,
            scale
        );
        Ok(Self {
            icons,
            config,
            items,
            scale,
            seed,
        })
    }

    /// Run the scatter pass for the current geometry
    fn place(icons: &[String], config: &MarqueeConfig, scale: f32, seed: u64) -> Vec<MarqueeItem> {
        if icons.is_empty() || config.viewport_width <= 0.0 {
            return Vec::new();
        }
        let params = ScatterParams {
            width: config.viewport_width,
            lane_height: config.lane_height,
            radius: config.base_radius * scale,
            tolerance: config.min_spacing,
            max_attempts: config.max_scatter_attempts,
            angular_velocity_range: config.angular_velocity_range,
        };
        let mut rng = StdRng::seed_from_u64(seed);
        scatter(&mut rng, icons.len(), &params)
            .into_iter()
            .enumerate()
            .map(|(id, placement)| MarqueeItem {
                id,
                center_x: placement.center_x,
                center_y: placement.center_y,
                angle_deg: placement.initial_angle_deg,
                direction: placement.direction,
                radius: placement.radius,
                angular_velocity: placement.angular_velocity,
            })
            .collect()
    }

    /// Advance every item by one tick and return the render instructions.
    ///
    /// Update order per item: translate the orbit center, wrap if the orbit
    /// circle has fully exited the viewport, then advance the orbital angle.
    /// Wrapping teleports `center_x` only; all motion state carries across.
    pub fn tick(&mut self) -> Vec<RenderInstruction> {
        let width = self.config.viewport_width;
        let velocity = self.config.linear_velocity;
        let direction = self.config.scroll_direction;

        let mut instructions = Vec::with_capacity(self.items.len());
        for item in &mut self.items {
            match direction {
                ScrollDirection::Left => {
                    item.center_x -= velocity;
                    if item.center_x < -item.radius {
                        let overflow = -item.radius - item.center_x;
                        item.center_x = width + item.radius - overflow;
                    }
                }
                ScrollDirection::Right => {
                    item.center_x += velocity;
                    if item.center_x > width + item.radius {
                        let overflow = item.center_x - (width + item.radius);
                        item.center_x = -item.radius + overflow;
                    }
                }
            }

            item.angle_deg = motion::advance(item.angle_deg, item.angular_velocity, item.direction);
            let (dx, dy) = motion::offset(item.angle_deg, item.radius);

            instructions.push(RenderInstruction {
                id: item.id,
                icon: self.icons[item.id].clone(),
                x: item.center_x + dx,
                y: item.center_y + dy,
                scale: self.scale,
            });
        }
        instructions
    }

    /// Re-read the viewport width and recompute the responsive scale band.
    ///
    /// Orbit centers and angles are untouched so the belt keeps moving
    /// without a visible pop; only the radii and icon scale change.
    pub fn resize(&mut self, viewport_width: f32) {
        if !viewport_width.is_finite() {
            return;
        }
        self.config.viewport_width = viewport_width;
        self.scale = MarqueeConfig::scale_for_width(viewport_width);
        let radius = self.config.base_radius * self.scale;
        for item in &mut self.items {
            item.radius = radius;
        }
    }

    /// Current per-item state, in icon order
    pub fn items(&self) -> &[MarqueeItem] {
        &self.items
    }

    /// Icon references supplied at mount
    pub fn icons(&self) -> &[String] {
        &self.icons
    }

    /// Current responsive scale factor
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Seed the placement randomness was drawn from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl AnimationEngine for MarqueeTrack {
    /// The marquee loops indefinitely, so this always returns a frame
    fn next_frame(&mut self) -> Option<MarqueeFrame> {
        Some(MarqueeFrame::new(self.tick()))
    }

    fn target_fps(&self) -> u32 {
        self.config.target_fps
    }

    /// Restore the seeded initial layout
    fn reset(&mut self) {
        self.items = Self::place(&self.icons, &self.config, self.scale, self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("/img/providers/provider-{}.svg", i))
            .collect()
    }

    fn seeded_config(seed: u64) -> MarqueeConfig {
        MarqueeConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_one_item_per_icon() {
        let track = MarqueeTrack::new(icons(14), seeded_config(1)).unwrap();
        assert_eq!(track.items().len(), 14);
        for (expected, item) in track.items().iter().enumerate() {
            assert_eq!(item.id, expected);
        }
    }

    #[test]
    fn test_empty_icon_list_renders_nothing() {
        let mut track = MarqueeTrack::new(Vec::new(), seeded_config(1)).unwrap();
        assert!(track.items().is_empty());
        assert!(track.tick().is_empty());
        let frame = track.next_frame().unwrap();
        assert!(frame.instructions.is_empty());
    }

    #[test]
    fn test_zero_width_viewport_renders_nothing() {
        let config = MarqueeConfig {
            viewport_width: 0.0,
            ..seeded_config(1)
        };
        let mut track = MarqueeTrack::new(icons(5), config).unwrap();
        assert!(track.items().is_empty());
        assert!(track.tick().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MarqueeConfig {
            linear_velocity: f32::INFINITY,
            ..Default::default()
        };
        assert!(MarqueeTrack::new(icons(3), config).is_err());
    }

    #[test]
    fn test_centers_translate_by_linear_velocity() {
        let mut track = MarqueeTrack::new(icons(5), seeded_config(2)).unwrap();
        let before: Vec<f32> = track.items().iter().map(|i| i.center_x).collect();
        track.tick();
        for (item, prev) in track.items().iter().zip(before) {
            // Scatter draws centers in [0, width], so no item can wrap on the
            // very first tick
            assert!((item.center_x - (prev - 5.0)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_scroll_right_translates_positively() {
        let config = MarqueeConfig {
            scroll_direction: ScrollDirection::Right,
            ..seeded_config(2)
        };
        let mut track = MarqueeTrack::new(icons(5), config).unwrap();
        let before: Vec<f32> = track.items().iter().map(|i| i.center_x).collect();
        track.tick();
        for (item, prev) in track.items().iter().zip(before) {
            assert!((item.center_x - (prev + 5.0)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_wrap_is_seamless() {
        let mut track = MarqueeTrack::new(icons(3), seeded_config(5)).unwrap();
        let radius = track.items[0].radius;

        // Park the item 2px short of fully exiting; velocity 5 pushes it 3px
        // past the wrap boundary
        track.items[0].center_x = -radius + 2.0;
        let pre = track.items[0].clone();

        track.tick();
        let item = &track.items[0];

        let width = 1200.0;
        assert!(
            (item.center_x - (width + radius - 3.0)).abs() < 1e-3,
            "expected re-entry at width + radius - overflow, got {}",
            item.center_x
        );

        // Only the position teleports; motion state is continuous
        assert_eq!(item.direction, pre.direction);
        assert_eq!(item.radius, pre.radius);
        assert_eq!(item.center_y, pre.center_y);
        assert_eq!(item.angular_velocity, pre.angular_velocity);
        let expected_angle = motion::advance(pre.angle_deg, pre.angular_velocity, pre.direction);
        assert!((item.angle_deg - expected_angle).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_right_scroll() {
        let config = MarqueeConfig {
            scroll_direction: ScrollDirection::Right,
            ..seeded_config(5)
        };
        let mut track = MarqueeTrack::new(icons(3), config).unwrap();
        let radius = track.items[0].radius;

        track.items[0].center_x = 1200.0 + radius - 2.0;
        track.tick();
        assert!((track.items[0].center_x - (-radius + 3.0)).abs() < 1e-3);
    }

    #[test]
    fn test_angles_stay_normalized_over_many_ticks() {
        let mut track = MarqueeTrack::new(icons(14), seeded_config(9)).unwrap();
        for _ in 0..10_000 {
            track.tick();
            for item in track.items() {
                assert!((0.0..360.0).contains(&item.angle_deg));
            }
        }
    }

    #[test]
    fn test_same_seed_same_animation() {
        let mut a = MarqueeTrack::new(icons(14), seeded_config(21)).unwrap();
        let mut b = MarqueeTrack::new(icons(14), seeded_config(21)).unwrap();
        assert_eq!(a.items(), b.items());
        for _ in 0..100 {
            let frame_a = a.tick();
            let frame_b = b.tick();
            assert_eq!(frame_a, frame_b);
        }
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn test_reset_restores_initial_layout() {
        let mut track = MarqueeTrack::new(icons(14), seeded_config(33)).unwrap();
        let initial = track.items().to_vec();
        for _ in 0..250 {
            track.tick();
        }
        assert_ne!(track.items(), initial.as_slice());
        track.reset();
        assert_eq!(track.items(), initial.as_slice());
    }

    #[test]
    fn test_rendered_position_is_center_plus_offset() {
        let mut track = MarqueeTrack::new(icons(5), seeded_config(4)).unwrap();
        let instructions = track.tick();
        assert_eq!(instructions.len(), 5);
        for (instruction, item) in instructions.iter().zip(track.items()) {
            let (dx, dy) = motion::offset(item.angle_deg, item.radius);
            assert!((instruction.x - (item.center_x + dx)).abs() < 1e-4);
            assert!((instruction.y - (item.center_y + dy)).abs() < 1e-4);
            assert_eq!(instruction.icon, track.icons()[instruction.id]);
        }
    }

    #[test]
    fn test_scale_applied_to_radius_and_instructions() {
        // 1200px viewport sits in the 0.7 band, so orbit radius is 70 * 0.7
        let mut track = MarqueeTrack::new(icons(5), seeded_config(6)).unwrap();
        assert_eq!(track.scale(), 0.7);
        for item in track.items() {
            assert!((item.radius - 49.0).abs() < 1e-4);
        }
        for instruction in track.tick() {
            assert_eq!(instruction.scale, 0.7);
        }
    }

    #[test]
    fn test_resize_recomputes_scale_band() {
        let mut track = MarqueeTrack::new(icons(5), seeded_config(8)).unwrap();
        let angles: Vec<f32> = track.items().iter().map(|i| i.angle_deg).collect();

        track.resize(1920.0);
        assert_eq!(track.scale(), 0.8);
        for (item, angle) in track.items().iter().zip(angles) {
            assert!((item.radius - 56.0).abs() < 1e-4);
            // Resize must not reset motion state
            assert_eq!(item.angle_deg, angle);
        }

        track.resize(640.0);
        assert_eq!(track.scale(), 0.4);
    }

    #[test]
    fn test_entropy_seed_when_unset() {
        // No seed configured: the track draws one and keeps it so reset()
        // still restores the initial layout
        let mut track = MarqueeTrack::new(icons(5), MarqueeConfig::default()).unwrap();
        let initial = track.items().to_vec();
        for _ in 0..50 {
            track.tick();
        }
        track.reset();
        assert_eq!(track.items(), initial.as_slice());
    }

    #[test]
    fn test_track_target_fps() {
        let track = MarqueeTrack::new(icons(3), seeded_config(1)).unwrap();
        assert_eq!(track.target_fps(), 60);
        let duration = track.frame_duration();
        assert!(duration.as_millis() >= 16 && duration.as_millis() <= 17);
    }

    #[test]
    fn test_infinite_animation() {
        // The marquee never finishes - next_frame() always returns Some
        let mut track = MarqueeTrack::new(icons(3), seeded_config(1)).unwrap();
        for _ in 0..1000 {
            assert!(track.next_frame().is_some());
        }
    }
}
