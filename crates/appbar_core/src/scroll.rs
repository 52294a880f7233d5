//! Scroll input types shared by behaviors and the bridge

use serde::{Deserialize, Serialize};

/// Where a scroll delta came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollSource {
    /// A finger or pointer dragging the content directly
    UserDrag,
    /// Momentum after release, computed by the host's fling driver
    Fling,
    /// Scroll requested by code (scroll-to, keyboard paging)
    Programmatic,
}

impl ScrollSource {
    pub fn is_user_drag(self) -> bool {
        self == ScrollSource::UserDrag
    }
}

/// Read-only view of the scrollable content underneath the headers.
///
/// Behaviors that only react once the content reaches its start edge (see
/// [`MaterialConfig::floating`](crate::MaterialConfig::floating)) query this.
pub trait ScrollContext {
    /// True while the content is not at its start edge
    fn can_scroll_backward(&self) -> bool;

    /// True while the content is not at its end edge
    fn can_scroll_forward(&self) -> bool;
}
