// AnimationEngine trait and frame types
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// One positioned icon within a rendered frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInstruction {
    /// Index of the icon in the host-supplied list
    pub id: usize,
    /// Image reference the host should draw
    pub icon: String,
    /// Rendered x position (orbit center + orbital offset)
    pub x: f32,
    /// Rendered y position (orbit center + orbital offset)
    pub y: f32,
    /// Visual scale factor for the icon at the current viewport width
    pub scale: f32,
}

/// A single rendered frame of the marquee
#[derive(Debug, Clone)]
pub struct MarqueeFrame {
    /// Where to draw every icon this tick
    pub instructions: Vec<RenderInstruction>,
    /// Frame timestamp for FPS calculation
    pub timestamp: Instant,
}

impl MarqueeFrame {
    pub fn new(instructions: Vec<RenderInstruction>) -> Self {
        Self {
            instructions,
            timestamp: Instant::now(),
        }
    }
}

/// Frame-based animation interface
pub trait AnimationEngine: Send + Sync {
    /// Generate the next frame of animation
    /// Returns None if animation is complete (for finite animations)
    fn next_frame(&mut self) -> Option<MarqueeFrame>;

    /// Get the target FPS for this animation
    fn target_fps(&self) -> u32;

    /// Get the frame duration based on target FPS
    fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps() as f64)
    }

    /// Reset animation to initial state
    fn reset(&mut self);

    /// Check if animation should degrade to lower FPS based on CPU usage
    /// Default implementation always returns target FPS
    fn adaptive_fps(&self, _cpu_usage_percent: f32) -> u32 {
        let target = self.target_fps();
        // Graceful degradation: drop to 30fps if CPU >80%
        if _cpu_usage_percent > 80.0 && target > 30 {
            30
        } else {
            target
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAnimation;
    impl AnimationEngine for MockAnimation {
        fn next_frame(&mut self) -> Option<MarqueeFrame> {
            None
        }
        fn target_fps(&self) -> u32 {
            60
        }
        fn reset(&mut self) {}
    }

    #[test]
    fn test_frame_duration_60fps() {
        let anim = MockAnimation;
        let duration = anim.frame_duration();
        // 60fps = ~16.67ms per frame
        assert!(duration.as_millis() >= 16 && duration.as_millis() <= 17);
    }

    #[test]
    fn test_adaptive_fps_degradation() {
        let anim = MockAnimation;
        // Normal CPU usage - maintain 60fps
        assert_eq!(anim.adaptive_fps(50.0), 60);
        // High CPU usage - degrade to 30fps
        assert_eq!(anim.adaptive_fps(85.0), 30);
    }

    #[test]
    fn test_render_instruction_serde() {
        let instruction = RenderInstruction {
            id: 3,
            icon: "/img/providers/github-1.svg".to_string(),
            x: 120.5,
            y: 250.0,
            scale: 0.7,
        };
        let json = serde_json::to_string(&instruction).unwrap();
        let back: RenderInstruction = serde_json::from_str(&json).unwrap();
        assert_eq!(instruction, back);
    }
}
