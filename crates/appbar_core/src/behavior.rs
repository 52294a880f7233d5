//! Header behaviors
//!
//! A behavior decides how much of a scroll delta one header absorbs and what
//! happens to it when scrolling stops. Behaviors hold configuration only; the
//! mutable data lives in [`HeaderState`], so one behavior can serve many
//! headers.
//!
//! Two behaviors ship with the crate:
//!
//! - [`AbsoluteBehavior`]: a pinned header that never moves
//! - [`MaterialBehavior`]: collapse/expand with optional floating, drag-only
//!   re-expansion and snapping
//!
//! Custom strategies implement [`HeaderBehavior`] directly.

use appbar_animation::Easing;
use serde::{Deserialize, Serialize};

use crate::scroll::{ScrollContext, ScrollSource};
use crate::state::HeaderState;

/// Strategy deciding how a header reacts to scrolling.
///
/// Deltas follow the crate-wide convention: positive collapses, negative
/// expands. The return value of [`HeaderBehavior::handle_scroll`] is the part
/// of `available` the header absorbed, with the same sign.
///
/// The coordinator hands each method a `&mut HeaderState` borrowed from the
/// header's shared handle. Borrowing that same handle again from inside the
/// call panics; go through the `state` argument instead.
pub trait HeaderBehavior {
    /// Absorb part of `available` and return how much was taken.
    fn handle_scroll(
        &self,
        state: &mut HeaderState,
        scroll: Option<&dyn ScrollContext>,
        available: f32,
        source: ScrollSource,
    ) -> f32;

    /// Called once scrolling has stopped.
    fn handle_scroll_end(&self, state: &mut HeaderState, scroll: Option<&dyn ScrollContext>) {
        self.handle_alignment(state, scroll);
    }

    /// Settle a partially collapsed header. No-op by default.
    fn handle_alignment(&self, _state: &mut HeaderState, _scroll: Option<&dyn ScrollContext>) {}

    /// Whether [`HeaderBehavior::handle_scroll`] needs a scroll context.
    ///
    /// Checked when the header is attached.
    fn requires_scroll_context(&self) -> bool {
        false
    }
}

// ============================================================================
// Absolute
// ============================================================================

/// A header fixed in place, regardless of scrolling.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteBehavior;

impl HeaderBehavior for AbsoluteBehavior {
    fn handle_scroll(
        &self,
        _state: &mut HeaderState,
        _scroll: Option<&dyn ScrollContext>,
        _available: f32,
        _source: ScrollSource,
    ) -> f32 {
        0.0
    }
}

// ============================================================================
// Material
// ============================================================================

/// Configuration for [`MaterialBehavior`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// React to scrolling anywhere in the content. When false the header
    /// only moves once the content is scrolled back to its start edge.
    pub floating: bool,
    /// Only a direct user drag may re-expand a fully collapsed header.
    ///
    /// Checked for floating and pinned headers alike, not only for pinned
    /// ones, so a fling never reopens a collapsed floating header either.
    pub drag_only_expanding: bool,
    /// Snap to fully expanded or collapsed when scrolling stops
    pub snap: bool,
    pub snap_duration_ms: u32,
    pub snap_easing: Easing,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            floating: true,
            drag_only_expanding: false,
            snap: true,
            snap_duration_ms: 500,
            snap_easing: Easing::Ease,
        }
    }
}

impl MaterialConfig {
    /// Header that reappears on any backward scroll (the default)
    pub fn enter_always() -> Self {
        Self::default()
    }

    /// Header that only expands once the content is back at the top
    pub fn pinned() -> Self {
        Self {
            floating: false,
            ..Default::default()
        }
    }

    /// Default behavior without snapping
    pub fn no_snap() -> Self {
        Self {
            snap: false,
            ..Default::default()
        }
    }

    pub fn floating(mut self, floating: bool) -> Self {
        self.floating = floating;
        self
    }

    pub fn drag_only_expanding(mut self, enabled: bool) -> Self {
        self.drag_only_expanding = enabled;
        self
    }

    pub fn snap(mut self, enabled: bool) -> Self {
        self.snap = enabled;
        self
    }

    pub fn snap_duration(mut self, duration_ms: u32) -> Self {
        self.snap_duration_ms = duration_ms;
        self
    }

    pub fn snap_easing(mut self, easing: Easing) -> Self {
        self.snap_easing = easing;
        self
    }
}

/// Standard Material collapsing header
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaterialBehavior {
    config: MaterialConfig,
}

impl MaterialBehavior {
    pub fn new(config: MaterialConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MaterialConfig {
        &self.config
    }
}

impl From<MaterialConfig> for MaterialBehavior {
    fn from(config: MaterialConfig) -> Self {
        Self::new(config)
    }
}

impl HeaderBehavior for MaterialBehavior {
    fn handle_scroll(
        &self,
        state: &mut HeaderState,
        scroll: Option<&dyn ScrollContext>,
        available: f32,
        source: ScrollSource,
    ) -> f32 {
        if !self.config.floating {
            let Some(scroll) = scroll else {
                panic!(
                    "non-floating MaterialBehavior needs a scroll context; \
                     set one on the HeaderCoordinator before scrolling"
                );
            };
            // Content still has room above: it scrolls first.
            if scroll.can_scroll_backward() {
                return 0.0;
            }
        }

        if self.config.drag_only_expanding
            && !source.is_user_drag()
            && state.is_fully_collapsed()
        {
            return 0.0;
        }

        state.collapse_by(available)
    }

    fn handle_alignment(&self, state: &mut HeaderState, _scroll: Option<&dyn ScrollContext>) {
        if !self.config.snap {
            return;
        }

        let expand_percent = state.expand_percent();
        if expand_percent == 0.0 || expand_percent == 1.0 {
            return;
        }

        let target = if expand_percent > 0.5 {
            0.0
        } else {
            state.extent() as f32
        };
        state.animate_to(target, self.config.snap_duration_ms, self.config.snap_easing);
    }

    fn requires_scroll_context(&self) -> bool {
        !self.config.floating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Content {
        at_start: bool,
    }

    impl ScrollContext for Content {
        fn can_scroll_backward(&self) -> bool {
            !self.at_start
        }

        fn can_scroll_forward(&self) -> bool {
            true
        }
    }

    fn header(extent: u32, offset: f32) -> HeaderState {
        let mut state = HeaderState::with_offset(offset);
        state.set_extent(extent);
        state
    }

    #[test]
    fn test_absolute_never_consumes() {
        let mut state = header(100, 50.0);
        for delta in [-40.0, 0.0, 40.0] {
            let consumed =
                AbsoluteBehavior.handle_scroll(&mut state, None, delta, ScrollSource::UserDrag);
            assert_eq!(consumed, 0.0);
        }
        assert_eq!(state.offset(), 50.0);
    }

    #[test]
    fn test_material_collapses_and_expands() {
        let behavior = MaterialBehavior::default();
        let mut state = header(100, 0.0);

        let consumed = behavior.handle_scroll(&mut state, None, 30.0, ScrollSource::UserDrag);
        assert_eq!(consumed, 30.0);
        assert_eq!(state.offset(), 30.0);

        let consumed = behavior.handle_scroll(&mut state, None, -50.0, ScrollSource::Fling);
        assert_eq!(consumed, -30.0);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn test_pinned_while_content_scrollable() {
        let behavior = MaterialBehavior::new(MaterialConfig::pinned());
        let content = Content { at_start: false };
        let mut state = header(100, 40.0);

        for delta in [-25.0, 25.0] {
            let consumed =
                behavior.handle_scroll(&mut state, Some(&content), delta, ScrollSource::UserDrag);
            assert_eq!(consumed, 0.0);
        }
        assert_eq!(state.offset(), 40.0);
    }

    #[test]
    fn test_pinned_moves_at_content_start() {
        let behavior = MaterialBehavior::new(MaterialConfig::pinned());
        let content = Content { at_start: true };
        let mut state = header(100, 40.0);

        let consumed =
            behavior.handle_scroll(&mut state, Some(&content), -25.0, ScrollSource::UserDrag);
        assert_eq!(consumed, -25.0);
        assert_eq!(state.offset(), 15.0);
    }

    #[test]
    #[should_panic(expected = "needs a scroll context")]
    fn test_pinned_without_context_panics() {
        let behavior = MaterialBehavior::new(MaterialConfig::pinned());
        let mut state = header(100, 0.0);
        behavior.handle_scroll(&mut state, None, 10.0, ScrollSource::UserDrag);
    }

    #[test]
    fn test_drag_only_expanding_blocks_fling() {
        let behavior = MaterialBehavior::new(MaterialConfig::default().drag_only_expanding(true));
        let mut state = header(100, 100.0);

        for source in [ScrollSource::Fling, ScrollSource::Programmatic] {
            let consumed = behavior.handle_scroll(&mut state, None, -20.0, source);
            assert_eq!(consumed, 0.0);
        }
        assert_eq!(state.offset(), 100.0);

        let consumed = behavior.handle_scroll(&mut state, None, -20.0, ScrollSource::UserDrag);
        assert_eq!(consumed, -20.0);
        assert_eq!(state.offset(), 80.0);
    }

    #[test]
    fn test_drag_only_expanding_allows_fling_when_partial() {
        let behavior = MaterialBehavior::new(MaterialConfig::default().drag_only_expanding(true));
        let mut state = header(100, 60.0);
        let consumed = behavior.handle_scroll(&mut state, None, -20.0, ScrollSource::Fling);
        assert_eq!(consumed, -20.0);
    }

    #[test]
    fn test_snap_targets() {
        let behavior = MaterialBehavior::default();

        let mut state = header(100, 70.0);
        behavior.handle_scroll_end(&mut state, None);
        assert_eq!(state.animation_target(), Some(100.0));

        let mut state = header(100, 30.0);
        behavior.handle_scroll_end(&mut state, None);
        assert_eq!(state.animation_target(), Some(0.0));

        for offset in [0.0, 100.0] {
            let mut state = header(100, offset);
            behavior.handle_scroll_end(&mut state, None);
            assert!(!state.is_animating());
        }
    }

    #[test]
    fn test_snap_exact_half_collapses() {
        let behavior = MaterialBehavior::default();
        let mut state = header(100, 50.0);
        behavior.handle_scroll_end(&mut state, None);
        assert_eq!(state.animation_target(), Some(100.0));
    }

    #[test]
    fn test_snap_disabled() {
        let behavior = MaterialBehavior::new(MaterialConfig::no_snap());
        let mut state = header(100, 70.0);
        behavior.handle_scroll_end(&mut state, None);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_snap_uses_configured_duration() {
        let behavior = MaterialBehavior::new(
            MaterialConfig::default()
                .snap_duration(100)
                .snap_easing(Easing::Linear),
        );
        let mut state = header(100, 30.0);
        behavior.handle_scroll_end(&mut state, None);

        state.tick(50.0);
        assert_eq!(state.offset(), 15.0);
        state.tick(50.0);
        assert_eq!(state.offset(), 0.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_requires_scroll_context() {
        assert!(!MaterialBehavior::default().requires_scroll_context());
        assert!(MaterialBehavior::new(MaterialConfig::pinned()).requires_scroll_context());
        assert!(!AbsoluteBehavior.requires_scroll_context());
    }

    #[test]
    fn test_config_from_toml() {
        let config: MaterialConfig = toml::from_str(
            r#"
            floating = false
            snap_duration_ms = 250
            snap_easing = "fast_out_slow_in"
            "#,
        )
        .unwrap();

        assert!(!config.floating);
        assert!(!config.drag_only_expanding);
        assert!(config.snap);
        assert_eq!(config.snap_duration_ms, 250);
        assert_eq!(config.snap_easing, Easing::FastOutSlowIn);
    }
}
