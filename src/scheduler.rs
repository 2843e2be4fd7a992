// Tick scheduling
//
// Hosts drive the engine through a per-frame callback mechanism. That
// mechanism is abstracted as a scheduler: register a repeating tick callback,
// get back a cancellation handle. The engine core never touches real timing,
// so tests drive it with the manual scheduler instead of wall-clock frames.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Handle used to stop a scheduled tick loop.
///
/// Cancellation is the only teardown point: once cancelled, no further ticks
/// run. `cancel()` is idempotent.
#[derive(Debug, Clone)]
pub struct CancellationHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancellationHandle {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stop scheduling further ticks
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// A repeating tick callback; returning `false` means the animation finished
pub type TickFn = Box<dyn FnMut() -> bool + Send>;

/// Per-frame callback registration
pub trait TickScheduler {
    /// Register a repeating tick callback to run once per `frame_duration`.
    ///
    /// The callback runs until it returns `false` or the returned handle is
    /// cancelled, whichever comes first.
    fn schedule(&mut self, frame_duration: Duration, tick: TickFn) -> CancellationHandle;
}

/// Manually driven scheduler for deterministic tests.
///
/// Stores the registered callback and only invokes it when `advance()` is
/// called, so tests control exactly how many ticks elapse.
pub struct ManualScheduler {
    tick: Option<TickFn>,
    handle: Option<CancellationHandle>,
    ticks_driven: usize,
    finished: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            tick: None,
            handle: None,
            ticks_driven: 0,
            finished: false,
        }
    }

    /// Drive up to `n` ticks; returns how many actually ran.
    ///
    /// Stops early if the callback reports completion or the handle was
    /// cancelled.
    pub fn advance(&mut self, n: usize) -> usize {
        let mut driven = 0;
        for _ in 0..n {
            if self.finished {
                break;
            }
            let cancelled = self
                .handle
                .as_ref()
                .map(|h| h.is_cancelled())
                .unwrap_or(true);
            if cancelled {
                break;
            }
            match self.tick.as_mut() {
                Some(tick) => {
                    if !tick() {
                        self.finished = true;
                    }
                    driven += 1;
                    self.ticks_driven += 1;
                }
                None => break,
            }
        }
        driven
    }

    /// Total ticks driven since scheduling
    pub fn ticks_driven(&self) -> usize {
        self.ticks_driven
    }

    /// Whether the callback reported completion
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, _frame_duration: Duration, tick: TickFn) -> CancellationHandle {
        let handle = CancellationHandle::new();
        self.tick = Some(tick);
        self.handle = Some(handle.clone());
        self.ticks_driven = 0;
        self.finished = false;
        handle
    }
}

/// Real-time scheduler backed by a spawned thread.
///
/// Ticks are strictly sequential: the next tick is not scheduled until the
/// previous one has fully applied.
pub struct ThreadScheduler;

impl ThreadScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler for ThreadScheduler {
    fn schedule(&mut self, frame_duration: Duration, mut tick: TickFn) -> CancellationHandle {
        let handle = CancellationHandle::new();
        let loop_handle = handle.clone();
        thread::spawn(move || loop {
            if loop_handle.is_cancelled() {
                break;
            }
            if !tick() {
                break;
            }
            thread::sleep(frame_duration);
        });
        handle
    }
}
