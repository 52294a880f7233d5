//! Scroll position of the content below the headers
//!
//! Hosts with their own scroll container implement
//! [`ScrollContext`](appbar_core::ScrollContext) on it directly. This type is
//! for hosts that only have an offset and two sizes.

use std::cell::Cell;

use appbar_core::ScrollContext;

/// Vertical scroll position of a list or page.
///
/// `offset` runs from 0 (start edge) to `content_extent - viewport_extent`.
/// Shared by `Rc` between the host and the coordinator, so it uses cells.
#[derive(Debug, Default)]
pub struct ContentScroll {
    offset: Cell<f32>,
    content_extent: Cell<f32>,
    viewport_extent: Cell<f32>,
}

impl ContentScroll {
    pub fn new(content_extent: f32, viewport_extent: f32) -> Self {
        Self {
            offset: Cell::new(0.0),
            content_extent: Cell::new(content_extent.max(0.0)),
            viewport_extent: Cell::new(viewport_extent.max(0.0)),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    /// Largest reachable offset
    pub fn max_offset(&self) -> f32 {
        (self.content_extent.get() - self.viewport_extent.get()).max(0.0)
    }

    pub fn set_content_extent(&self, extent: f32) {
        self.content_extent.set(extent.max(0.0));
        self.set_offset(self.offset());
    }

    pub fn set_viewport_extent(&self, extent: f32) {
        self.viewport_extent.set(extent.max(0.0));
        self.set_offset(self.offset());
    }

    /// Jump to `offset`, clamped to the scrollable range
    pub fn set_offset(&self, offset: f32) {
        if offset.is_nan() {
            return;
        }
        self.offset.set(offset.clamp(0.0, self.max_offset()));
    }

    /// Scroll by `delta` (positive toward the end) and return the distance moved.
    pub fn scroll_by(&self, delta: f32) -> f32 {
        let old = self.offset();
        self.set_offset(old + delta);
        self.offset() - old
    }
}

impl ScrollContext for ContentScroll {
    fn can_scroll_backward(&self) -> bool {
        self.offset() > 0.0
    }

    fn can_scroll_forward(&self) -> bool {
        self.offset() < self.max_offset()
    }
}
