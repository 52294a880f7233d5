//! Nested scroll bridge
//!
//! Connects a host scroll container to a [`HeaderCoordinator`]. The host calls
//! the bridge at two points of every scroll step:
//!
//! - **pre-scroll**: before the content moves, so headers can take their share
//!   first
//! - **post-scroll**: with whatever the content could not use
//!
//! Both return how much the headers consumed; the host must not apply that
//! part to the content again.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use appbar_core::{HeaderCoordinator, HeaderState, MaterialBehavior, ScrollSource};
//! use appbar_scroll::{ContentScroll, ScrollBridge};
//!
//! let content = Rc::new(ContentScroll::new(2000.0, 600.0));
//! let coordinator = Rc::new(HeaderCoordinator::with_scroll_context(content.clone()));
//! let header = HeaderState::new().shared();
//! header.borrow_mut().set_extent(120);
//! coordinator
//!     .attach(header.clone(), Rc::new(MaterialBehavior::default()))
//!     .unwrap();
//!
//! let bridge = ScrollBridge::new(coordinator);
//! let step = bridge.dispatch(&content, 200.0, ScrollSource::UserDrag);
//! assert_eq!(step.pre, 120.0);
//! assert_eq!(step.content, 80.0);
//! ```

use std::rc::Rc;

use appbar_animation::FrameClock;
use appbar_core::{HeaderCoordinator, ScrollSource};

use crate::content::ContentScroll;

/// How one scroll step was split between headers and content
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollStep {
    /// Taken by headers before the content moved
    pub pre: f32,
    /// Moved by the content
    pub content: f32,
    /// Taken by headers from the content's leftover
    pub post: f32,
}

impl ScrollStep {
    pub fn headers(&self) -> f32 {
        self.pre + self.post
    }

    pub fn total(&self) -> f32 {
        self.pre + self.content + self.post
    }
}

/// Entry points a host scroll container calls into
#[derive(Debug)]
pub struct ScrollBridge {
    coordinator: Rc<HeaderCoordinator>,
    clock: FrameClock,
}

impl ScrollBridge {
    pub fn new(coordinator: Rc<HeaderCoordinator>) -> Self {
        Self {
            coordinator,
            clock: FrameClock::new(),
        }
    }

    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn coordinator(&self) -> &Rc<HeaderCoordinator> {
        &self.coordinator
    }

    /// Offer the full delta to the headers before the content scrolls.
    pub fn on_pre_scroll(&self, available: f32, source: ScrollSource) -> f32 {
        let consumed = self.coordinator.distribute(available, source);
        tracing::trace!(
            "Pre-scroll available={:.1} consumed={:.1}",
            available,
            consumed
        );
        consumed
    }

    /// Offer what the content left over.
    pub fn on_post_scroll(&self, available: f32, source: ScrollSource) -> f32 {
        // Content took everything
        if available == 0.0 {
            return 0.0;
        }
        let consumed = self.coordinator.distribute(available, source);
        tracing::trace!(
            "Post-scroll available={:.1} consumed={:.1}",
            available,
            consumed
        );
        consumed
    }

    /// Scroll of the header stack itself, e.g. a drag that starts on a header.
    pub fn drag_headers(&self, delta: f32) -> f32 {
        self.coordinator.distribute(delta, ScrollSource::UserDrag)
    }

    /// Run a full nested step against a [`ContentScroll`]:
    /// pre-scroll, content, post-scroll.
    pub fn dispatch(&self, content: &ContentScroll, delta: f32, source: ScrollSource) -> ScrollStep {
        let pre = self.on_pre_scroll(delta, source);
        let moved = content.scroll_by(delta - pre);
        let post = self.on_post_scroll(delta - pre - moved, source);
        ScrollStep {
            pre,
            content: moved,
            post,
        }
    }

    /// Scrolling stopped (drag released with no fling, or fling finished).
    ///
    /// Headers may start snapping; drive them with [`ScrollBridge::on_frame`].
    pub fn on_scroll_end(&mut self) {
        self.clock.reset();
        self.coordinator.notify_scroll_end();
        if self.coordinator.is_settling() {
            tracing::debug!("Scroll ended, headers settling");
        }
    }

    /// Advance snap animations for a frame presented at `now_ms`.
    ///
    /// Returns true while another frame is needed.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        let dt = self.clock.frame(now_ms);
        let animating = self.coordinator.tick(dt);
        if !animating {
            self.clock.reset();
        }
        animating
    }
}
