//! Frame clock
//!
//! Turns host frame timestamps into per-frame deltas for tweens.

/// Converts absolute frame timestamps (milliseconds) into frame deltas.
///
/// The first frame after construction or [`FrameClock::reset`] yields a zero
/// delta, so an animation started between frames never jumps ahead.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last_frame_ms: Option<f64>,
    max_delta_ms: f32,
}

impl FrameClock {
    /// Deltas above this are treated as a stall (backgrounded window, debugger)
    pub const DEFAULT_MAX_DELTA_MS: f32 = 100.0;

    pub fn new() -> Self {
        Self {
            last_frame_ms: None,
            max_delta_ms: Self::DEFAULT_MAX_DELTA_MS,
        }
    }

    pub fn with_max_delta(mut self, max_delta_ms: f32) -> Self {
        self.max_delta_ms = max_delta_ms.max(0.0);
        self
    }

    /// Record a frame at `now_ms` and return the elapsed time since the
    /// previous frame, capped at the max delta.
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_frame_ms {
            Some(last) if now_ms > last => ((now_ms - last) as f32).min(self.max_delta_ms),
            _ => 0.0,
        };
        if self.last_frame_ms.map_or(true, |last| now_ms > last) {
            self.last_frame_ms = Some(now_ms);
        }
        dt
    }

    /// Forget the previous frame; used once all animations have settled.
    pub fn reset(&mut self) {
        self.last_frame_ms = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
