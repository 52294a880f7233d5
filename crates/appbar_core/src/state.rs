//! Per-header offset and extent
//!
//! A [`HeaderState`] is the only mutable data of a header. The offset is the
//! distance the header has collapsed: `0.0` is fully expanded and `extent` is
//! fully collapsed. Every write goes through the boundary hook so that
//! `0 <= offset <= extent` holds after each mutation.
//!
//! The state also owns at most one snap animation. A direct write through
//! [`HeaderState::set_offset`] stops it; the animation itself writes through
//! [`HeaderState::tick`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use appbar_animation::{Easing, Tween};
use serde::{Deserialize, Serialize};

/// Header state shared between the host widget and the coordinator
pub type SharedHeaderState = Rc<RefCell<HeaderState>>;

// ============================================================================
// Boundary conditions
// ============================================================================

/// Hook deciding the collapse range of a header.
///
/// The result is additionally kept inside `[0, extent]`, so a boundary can
/// narrow the range but never widen it.
pub trait OffsetBoundary: fmt::Debug {
    fn apply(&self, value: f32, extent: u32) -> f32;
}

/// Default boundary: the full `[0, extent]` range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClampToExtent;

impl OffsetBoundary for ClampToExtent {
    fn apply(&self, value: f32, extent: u32) -> f32 {
        value.clamp(0.0, extent as f32)
    }
}

/// Collapses at most a fraction of the extent, leaving the rest visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialCollapse {
    max_fraction: f32,
}

impl PartialCollapse {
    /// `max_fraction` is clamped into `[0, 1]`.
    pub fn new(max_fraction: f32) -> Self {
        Self {
            max_fraction: max_fraction.clamp(0.0, 1.0),
        }
    }

    pub fn max_fraction(&self) -> f32 {
        self.max_fraction
    }
}

impl OffsetBoundary for PartialCollapse {
    fn apply(&self, value: f32, extent: u32) -> f32 {
        value.clamp(0.0, extent as f32 * self.max_fraction)
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Persisted form of a header: just its offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderSnapshot(pub f32);

// ============================================================================
// Header State
// ============================================================================

/// Collapse state of a single header
#[derive(Debug)]
pub struct HeaderState {
    offset: f32,
    extent: u32,
    boundary: Box<dyn OffsetBoundary>,
    /// In-flight snap animation (None when idle)
    animation: Option<Tween>,
    /// Set on every offset/extent change, cleared by the host after re-layout
    dirty: bool,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderState {
    /// A fully expanded header with no known extent yet
    pub fn new() -> Self {
        Self::with_offset(0.0)
    }

    /// A header starting at `offset`.
    ///
    /// The extent stays 0 until the first layout, and the offset is kept as
    /// given until then; [`HeaderState::set_extent`] re-applies the boundary.
    pub fn with_offset(offset: f32) -> Self {
        Self {
            offset: if offset.is_finite() { offset.max(0.0) } else { 0.0 },
            extent: 0,
            boundary: Box::new(ClampToExtent),
            animation: None,
            dirty: true,
        }
    }

    /// Rebuild a header from a persisted snapshot
    pub fn restore(snapshot: HeaderSnapshot) -> Self {
        Self::with_offset(snapshot.0)
    }

    /// Replace the boundary hook. Takes effect from the next extent or offset write.
    pub fn with_boundary(mut self, boundary: impl OffsetBoundary + 'static) -> Self {
        self.boundary = Box::new(boundary);
        self
    }

    /// Wrap in a shared handle for attaching to a coordinator
    pub fn shared(self) -> SharedHeaderState {
        Rc::new(RefCell::new(self))
    }

    pub fn snapshot(&self) -> HeaderSnapshot {
        HeaderSnapshot(self.offset)
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// Written by the layout pass once the header's natural size is known.
    ///
    /// The current offset is clamped into the new range.
    pub fn set_extent(&mut self, extent: u32) {
        if extent != self.extent {
            self.extent = extent;
            self.dirty = true;
        }
        let clamped = self.apply_boundary_conditions(self.offset);
        if clamped != self.offset {
            tracing::trace!(
                "Header extent={} clamps offset {:.1} -> {:.1}",
                extent,
                self.offset,
                clamped
            );
            self.offset = clamped;
            self.dirty = true;
        }
    }

    /// Whether a layout pass has written a non-zero extent
    pub fn is_measured(&self) -> bool {
        self.extent > 0
    }

    /// Fraction collapsed, 0.0 when the extent is unknown
    pub fn shrink_percent(&self) -> f32 {
        if self.extent == 0 {
            0.0
        } else {
            self.offset / self.extent as f32
        }
    }

    /// Fraction visible
    pub fn expand_percent(&self) -> f32 {
        1.0 - self.shrink_percent()
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.offset == 0.0
    }

    pub fn is_fully_collapsed(&self) -> bool {
        self.extent > 0 && self.shrink_percent() == 1.0
    }

    /// Run the boundary hook on `value` and keep it inside `[0, extent]`
    pub fn apply_boundary_conditions(&self, value: f32) -> f32 {
        self.boundary
            .apply(value, self.extent)
            .clamp(0.0, self.extent as f32)
    }

    /// Move the header to `new_offset` and return `old - new`.
    ///
    /// Writing the current offset is a no-op returning 0. Any call stops an
    /// in-flight snap animation.
    pub fn set_offset(&mut self, new_offset: f32) -> f32 {
        if self.animation.take().is_some() {
            tracing::debug!("Snap cancelled by direct offset write at {:.1}", self.offset);
        }
        self.write_offset(new_offset)
    }

    /// Collapse by `delta` (negative expands) and return the actual movement.
    ///
    /// A header without an extent yet does not move, so an offset restored
    /// from a snapshot survives scrolling that happens before the first layout.
    pub fn collapse_by(&mut self, delta: f32) -> f32 {
        if !self.is_measured() {
            return 0.0;
        }
        -self.set_offset(self.offset + delta)
    }

    fn write_offset(&mut self, new_offset: f32) -> f32 {
        if new_offset == self.offset {
            return 0.0;
        }
        if new_offset.is_nan() {
            tracing::warn!("Ignoring NaN header offset");
            return 0.0;
        }

        let old = self.offset;
        self.offset = self.apply_boundary_conditions(new_offset);
        if self.offset != old {
            self.dirty = true;
        }
        old - self.offset
    }

    // =========================================================================
    // Snap animation
    // =========================================================================

    /// Start animating toward `target`, replacing any running animation.
    ///
    /// Returns false when the (boundary-adjusted) target equals the current
    /// offset, in which case nothing is scheduled.
    pub fn animate_to(&mut self, target: f32, duration_ms: u32, easing: Easing) -> bool {
        if self.animation.take().is_some() {
            tracing::debug!("Replacing in-flight snap animation");
        }

        let target = self.apply_boundary_conditions(target);
        if target == self.offset {
            return false;
        }

        tracing::debug!(
            "Snap {:.1} -> {:.1} over {}ms",
            self.offset,
            target,
            duration_ms
        );
        self.animation = Some(Tween::new(self.offset, target, duration_ms, easing));
        true
    }

    /// Advance the snap animation by one frame.
    ///
    /// Returns true while the animation is still running.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(tween) = self.animation.as_mut() else {
            return false;
        };

        let value = tween.advance(dt_ms);
        let finished = tween.is_finished();
        self.write_offset(value);

        if finished {
            self.animation = None;
            tracing::debug!("Snap settled at {:.1}", self.offset);
        }
        !finished
    }

    /// Stop the snap animation where it is
    pub fn stop_animation(&mut self) {
        self.animation = None;
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation_target(&self) -> Option<f32> {
        self.animation.as_ref().map(Tween::target)
    }

    // =========================================================================
    // Re-layout tracking
    // =========================================================================

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the header changed since the last call and clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
