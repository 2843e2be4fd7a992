// Orbit Marquee
//
// A circular marquee animation engine: a belt of icons translated across a
// viewport at constant velocity while each icon orbits its own drifting
// center. Items are scattered at mount so their orbit circles never overlap,
// and items that leave one edge re-enter seamlessly from the other, giving an
// infinite logical belt.
//
// # Architecture
//
// ```text
//       Host (per-frame callback, icon list, viewport width)
//         │
//         ▼
// ┌───────────────────┐
// │   TickScheduler   │  ← registers the repeating tick, returns a handle
// └───────────────────┘
//         │
//         ▼
// ┌───────────────────┐
// │   MarqueeTrack    │  ← owns per-item state, one writer, one tick at a time
// └───────────────────┘
//     │           │
//     ▼           ▼
// ┌─────────┐ ┌─────────┐
// │ scatter │ │ motion  │  ← pure transforms over copies, no retained state
// └─────────┘ └─────────┘
// ```
//
// # Usage
//
// ```ignore
// let config = MarqueeConfig::default();
// let mut track = MarqueeTrack::new(icons, config)?;
// let duration = track.frame_duration();
//
// let mut scheduler = ThreadScheduler::new();
// let handle = scheduler.schedule(duration, Box::new(move || {
//     let frame = track.next_frame().expect("marquee is infinite");
//     renderer.draw(&frame.instructions);
//     true
// }));
//
// // On unmount:
// handle.cancel();
// ```

mod config;
mod engine;
mod error;
mod motion;
mod scatter;
mod scheduler;
mod track;

// Re-export public API
pub use config::{MarqueeConfig, ScrollDirection};
pub use engine::{AnimationEngine, MarqueeFrame, RenderInstruction};
pub use error::{MarqueeError, MarqueeResult};
pub use motion::Direction;
pub use scatter::{scatter, Placement, ScatterParams};
pub use scheduler::{CancellationHandle, ManualScheduler, ThreadScheduler, TickFn, TickScheduler};
pub use track::{MarqueeItem, MarqueeTrack};
