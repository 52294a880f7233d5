//! Header coordinator
//!
//! Owns the headers of one stacked header group and splits each scroll delta
//! between them. Headers are kept in attachment order, which mirrors their
//! visual stacking: the first attached header is the outermost one.
//!
//! Collapsing deltas (positive) are offered to headers in reverse attachment
//! order and expanding deltas in forward order, so the outer header finishes
//! moving before an inner one reacts.
//!
//! Everything runs on the UI thread. The coordinator uses interior
//! mutability so behaviors may attach or detach headers while a pass is
//! running; passes iterate over a snapshot of header ids and skip ids that
//! disappeared in the meantime.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::behavior::HeaderBehavior;
use crate::error::{AppBarError, Result};
use crate::scroll::{ScrollContext, ScrollSource};
use crate::state::SharedHeaderState;

new_key_type! {
    /// Handle of an attached header
    pub struct HeaderId;
}

/// Behavior shared between headers
pub type SharedBehavior = Rc<dyn HeaderBehavior>;

/// Ids captured at the start of a pass; most groups have one to three headers
type IdSnapshot = SmallVec<[HeaderId; 4]>;

/// A header state paired with the behavior driving it
#[derive(Clone)]
pub struct AttachmentRecord {
    state: SharedHeaderState,
    behavior: SharedBehavior,
}

impl AttachmentRecord {
    pub fn state(&self) -> &SharedHeaderState {
        &self.state
    }

    pub fn behavior(&self) -> &SharedBehavior {
        &self.behavior
    }
}

impl fmt::Debug for AttachmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachmentRecord")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct Attachments {
    records: SlotMap<HeaderId, AttachmentRecord>,
    /// Attachment order
    order: Vec<HeaderId>,
}

/// Coordinates the headers of one stacked header group
#[derive(Default)]
pub struct HeaderCoordinator {
    attachments: RefCell<Attachments>,
    scroll: RefCell<Option<Rc<dyn ScrollContext>>>,
    distributing: Cell<bool>,
}

impl fmt::Debug for HeaderCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderCoordinator")
            .field("headers", &self.len())
            .field("has_scroll_context", &self.scroll.borrow().is_some())
            .finish()
    }
}

impl HeaderCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a coordinator already wired to the content's scroll context
    pub fn with_scroll_context(scroll: Rc<dyn ScrollContext>) -> Self {
        let coordinator = Self::new();
        coordinator.set_scroll_context(scroll);
        coordinator
    }

    // =========================================================================
    // Attachment
    // =========================================================================

    /// Append a header below the ones already attached.
    pub fn attach(&self, state: SharedHeaderState, behavior: SharedBehavior) -> Result<HeaderId> {
        if behavior.requires_scroll_context() && self.scroll.borrow().is_none() {
            return Err(AppBarError::MissingScrollContext);
        }
        if self.id_of(&state).is_some() {
            return Err(AppBarError::AlreadyAttached);
        }

        let mut attachments = self.attachments.borrow_mut();
        let id = attachments
            .records
            .insert(AttachmentRecord { state, behavior });
        attachments.order.push(id);
        tracing::debug!(
            "Attached header {:?} ({} total)",
            id,
            attachments.order.len()
        );
        Ok(id)
    }

    /// Remove the header backed by `state`. Returns false if it was not attached.
    pub fn detach(&self, state: &SharedHeaderState) -> bool {
        match self.id_of(state) {
            Some(id) => self.detach_id(id),
            None => false,
        }
    }

    pub fn detach_id(&self, id: HeaderId) -> bool {
        let mut attachments = self.attachments.borrow_mut();
        if attachments.records.remove(id).is_none() {
            return false;
        }
        attachments.order.retain(|other| *other != id);
        tracing::debug!(
            "Detached header {:?} ({} left)",
            id,
            attachments.order.len()
        );
        true
    }

    pub fn id_of(&self, state: &SharedHeaderState) -> Option<HeaderId> {
        self.attachments
            .borrow()
            .records
            .iter()
            .find(|(_, record)| Rc::ptr_eq(&record.state, state))
            .map(|(id, _)| id)
    }

    pub fn record(&self, id: HeaderId) -> Option<AttachmentRecord> {
        self.attachments.borrow().records.get(id).cloned()
    }

    /// Header ids in attachment order
    pub fn ids(&self) -> Vec<HeaderId> {
        self.attachments.borrow().order.clone()
    }

    pub fn len(&self) -> usize {
        self.attachments.borrow().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self, reverse: bool) -> IdSnapshot {
        let attachments = self.attachments.borrow();
        if reverse {
            attachments.order.iter().rev().copied().collect()
        } else {
            attachments.order.iter().copied().collect()
        }
    }

    // =========================================================================
    // Scroll context
    // =========================================================================

    /// Set the content's scroll context; the last call wins.
    pub fn set_scroll_context(&self, scroll: Rc<dyn ScrollContext>) {
        *self.scroll.borrow_mut() = Some(scroll);
    }

    /// Drop the scroll context, unless an attached behavior depends on it.
    pub fn clear_scroll_context(&self) -> Result<()> {
        let count = self
            .attachments
            .borrow()
            .records
            .values()
            .filter(|record| record.behavior.requires_scroll_context())
            .count();
        if count > 0 {
            return Err(AppBarError::ScrollContextInUse { count });
        }
        *self.scroll.borrow_mut() = None;
        Ok(())
    }

    pub fn scroll_context(&self) -> Option<Rc<dyn ScrollContext>> {
        self.scroll.borrow().clone()
    }

    // =========================================================================
    // Scroll distribution
    // =========================================================================

    /// Offer `available` to the attached headers and return the total consumed.
    ///
    /// Each header is offered what the previous ones left over. The pass stops
    /// as soon as the whole delta has been consumed.
    pub fn distribute(&self, available: f32, source: ScrollSource) -> f32 {
        if !available.is_finite() {
            tracing::warn!("Dropping non-finite scroll delta {}", available);
            return 0.0;
        }
        if available == 0.0 {
            return 0.0;
        }
        if self.distributing.replace(true) {
            tracing::warn!("Ignoring reentrant scroll distribution of {:.1}", available);
            return 0.0;
        }
        let _pass = PassGuard(&self.distributing);

        let scroll = self.scroll_context();
        let mut consumed = 0.0;

        for id in self.snapshot(available > 0.0) {
            // Detached by an earlier behavior in this pass
            let Some(record) = self.record(id) else {
                continue;
            };

            let taken = record.behavior.handle_scroll(
                &mut record.state.borrow_mut(),
                scroll.as_deref(),
                available - consumed,
                source,
            );
            consumed += taken;

            if consumed == available {
                break;
            }
        }

        tracing::trace!(
            "Distributed delta={:.1} source={:?} consumed={:.1}",
            available,
            source,
            consumed
        );
        consumed
    }

    /// Tell every header that scrolling stopped.
    ///
    /// Snap animations started here are driven by [`HeaderCoordinator::tick`];
    /// the group has settled once [`HeaderCoordinator::is_settling`] is false.
    pub fn notify_scroll_end(&self) {
        let scroll = self.scroll_context();
        for id in self.snapshot(false) {
            let Some(record) = self.record(id) else {
                continue;
            };
            record
                .behavior
                .handle_scroll_end(&mut record.state.borrow_mut(), scroll.as_deref());
        }
    }

    /// Advance every header's snap animation by one frame.
    ///
    /// Returns true while any header is still animating.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let mut animating = false;
        for id in self.snapshot(false) {
            if let Some(record) = self.record(id) {
                animating |= record.state.borrow_mut().tick(dt_ms);
            }
        }
        animating
    }

    /// Stop every running snap animation in place
    pub fn stop_animations(&self) {
        for id in self.snapshot(false) {
            if let Some(record) = self.record(id) {
                record.state.borrow_mut().stop_animation();
            }
        }
    }

    /// Whether any header still has a snap animation running.
    ///
    /// Safe to call from inside a behavior; the header that behavior is
    /// handling is borrowed for the call and is skipped.
    pub fn is_settling(&self) -> bool {
        self.attachments.borrow().records.values().any(|record| {
            record
                .state
                .try_borrow()
                .map_or(false, |state| state.is_animating())
        })
    }
}

/// Clears the reentrancy flag when a distribution pass ends
struct PassGuard<'a>(&'a Cell<bool>);

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
