//! App bar core
//!
//! The collapse engine behind stacked, scroll-aware headers:
//!
//! - **Header state**: offset/extent bookkeeping with a boundary hook
//! - **Behaviors**: how much of a delta each header absorbs, and snapping
//! - **Coordinator**: splits one delta across stacked headers in order
//! - **Layout helpers**: extent from measurement, header placement
//!
//! Positive deltas collapse headers, negative deltas expand them.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use appbar_core::{HeaderCoordinator, HeaderState, MaterialBehavior, ScrollSource};
//!
//! let coordinator = HeaderCoordinator::new();
//! let header = HeaderState::new().shared();
//! header.borrow_mut().set_extent(120);
//!
//! coordinator
//!     .attach(header.clone(), Rc::new(MaterialBehavior::default()))
//!     .unwrap();
//!
//! // Collapse by 40, then let the header snap
//! assert_eq!(coordinator.distribute(40.0, ScrollSource::UserDrag), 40.0);
//! coordinator.notify_scroll_end();
//! while coordinator.tick(16.0) {}
//! assert_eq!(header.borrow().offset(), 0.0);
//! ```

pub mod behavior;
pub mod coordinator;
pub mod error;
pub mod layout;
pub mod scroll;
pub mod state;

pub use appbar_animation::Easing;
pub use behavior::{AbsoluteBehavior, HeaderBehavior, MaterialBehavior, MaterialConfig};
pub use coordinator::{AttachmentRecord, HeaderCoordinator, HeaderId, SharedBehavior};
pub use error::{AppBarError, Result};
pub use layout::{HeaderAlignment, HeaderLayout, HeaderPlacement, SizedExtent};
pub use scroll::{ScrollContext, ScrollSource};
pub use state::{
    ClampToExtent, HeaderSnapshot, HeaderState, OffsetBoundary, PartialCollapse,
    SharedHeaderState,
};
