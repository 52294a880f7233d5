//! App bar scroll bridge
//!
//! Host-facing adapter between a scroll container and a
//! [`HeaderCoordinator`](appbar_core::HeaderCoordinator):
//!
//! - **Nested scroll**: pre-scroll and post-scroll entry points that report
//!   how much the headers consumed
//! - **Header drag**: scrolling that starts on the header stack itself
//! - **Settling**: scroll end and frame ticks for snap animations
//! - **Content scroll**: a ready-made scroll context for simple hosts

pub mod bridge;
pub mod content;

pub use bridge::{ScrollBridge, ScrollStep};
pub use content::ContentScroll;
