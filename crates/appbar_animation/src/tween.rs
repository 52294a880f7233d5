//! Fixed-duration tween between two values

use crate::easing::Easing;

/// A single eased transition from `from` to `to`.
///
/// Time only moves forward; once the duration has elapsed the value is
/// exactly `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    easing: Easing,
    elapsed_ms: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            elapsed_ms: 0.0,
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Linear progress, 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advance by one frame and return the new value.
    ///
    /// Negative or non-finite frame times count as zero.
    pub fn advance(&mut self, dt_ms: f32) -> f32 {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms as f32);
        }
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_tween_interpolates() {
        let mut tween = Tween::new(0.0, 100.0, 100, Easing::Linear);
        assert_eq!(tween.value(), 0.0);
        assert_eq!(tween.advance(25.0), 25.0);
        assert_eq!(tween.advance(25.0), 50.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_tween_lands_exactly_on_target() {
        let mut tween = Tween::new(30.0, 0.0, 500, Easing::Ease);
        for _ in 0..40 {
            tween.advance(16.0);
        }
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let tween = Tween::new(70.0, 100.0, 0, Easing::Ease);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 100.0);
    }

    #[test]
    fn test_bad_frame_time_does_not_move() {
        let mut tween = Tween::new(0.0, 10.0, 100, Easing::Linear);
        tween.advance(-16.0);
        tween.advance(f32::NAN);
        assert_eq!(tween.progress(), 0.0);
    }

    #[test]
    fn test_tween_is_monotonic() {
        let mut tween = Tween::new(70.0, 100.0, 300, Easing::FastOutSlowIn);
        let mut prev = tween.value();
        while !tween.is_finished() {
            let v = tween.advance(16.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
