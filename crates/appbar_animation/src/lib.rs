//! App bar animation primitives
//!
//! Easing curves, fixed-duration tweens and a frame clock used to snap
//! partially collapsed headers.
//!
//! # Features
//!
//! - **Easing**: CSS/Material cubic-bezier curves
//! - **Tweens**: monotonic, frame-driven, land exactly on target
//! - **Frame clock**: host timestamps to frame deltas, with stall capping

pub mod clock;
pub mod easing;
pub mod tween;

pub use clock::FrameClock;
pub use easing::Easing;
pub use tween::Tween;
