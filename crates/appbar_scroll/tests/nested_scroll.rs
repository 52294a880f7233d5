//! Integration tests for the nested scroll protocol
//!
//! These tests play a scroll container against the bridge and verify that:
//! - No distance is applied twice (headers + content == requested delta)
//! - Pinned headers wait for the content to reach its start edge
//! - Scroll end snaps headers and a new drag cancels the snap

use std::rc::Rc;

use appbar_core::{
    HeaderCoordinator, HeaderState, MaterialBehavior, MaterialConfig, ScrollSource,
    SharedHeaderState,
};
use appbar_scroll::{ContentScroll, ScrollBridge};

fn header(extent: u32) -> SharedHeaderState {
    let state = HeaderState::new().shared();
    state.borrow_mut().set_extent(extent);
    state
}

fn setup(config: MaterialConfig) -> (ScrollBridge, Rc<ContentScroll>, SharedHeaderState) {
    let content = Rc::new(ContentScroll::new(3000.0, 800.0));
    let coordinator = Rc::new(HeaderCoordinator::with_scroll_context(content.clone()));
    let state = header(150);
    coordinator
        .attach(state.clone(), Rc::new(MaterialBehavior::new(config)))
        .unwrap();
    (ScrollBridge::new(coordinator), content, state)
}

#[test]
fn test_floating_header_returns_before_content() {
    let (bridge, content, state) = setup(MaterialConfig::enter_always());

    let step = bridge.dispatch(&content, 500.0, ScrollSource::UserDrag);
    assert_eq!(step.pre, 150.0);
    assert_eq!(step.content, 350.0);
    assert_eq!(step.total(), 500.0);

    // Scrolling back reveals the header first, mid-list
    let step = bridge.dispatch(&content, -60.0, ScrollSource::UserDrag);
    assert_eq!(step.pre, -60.0);
    assert_eq!(step.content, 0.0);
    assert_eq!(state.borrow().offset(), 90.0);
    assert_eq!(content.offset(), 350.0);
}

#[test]
fn test_pinned_header_waits_for_content_start() {
    let (bridge, content, state) = setup(MaterialConfig::pinned());

    // Content at its start: header collapses first
    let step = bridge.dispatch(&content, 500.0, ScrollSource::UserDrag);
    assert_eq!(step.pre, 150.0);
    assert_eq!(content.offset(), 350.0);

    // Scrolling back mid-list only moves the content
    let step = bridge.dispatch(&content, -200.0, ScrollSource::UserDrag);
    assert_eq!(step.headers(), 0.0);
    assert_eq!(state.borrow().offset(), 150.0);

    // Overshooting the start edge hands the rest to the header
    let step = bridge.dispatch(&content, -300.0, ScrollSource::UserDrag);
    assert_eq!(step.content, -150.0);
    assert_eq!(step.post, -150.0);
    assert_eq!(state.borrow().offset(), 0.0);
}

#[test]
fn test_fling_cannot_reopen_guarded_header() {
    let (bridge, content, state) = setup(MaterialConfig::pinned().drag_only_expanding(true));

    bridge.dispatch(&content, 400.0, ScrollSource::UserDrag);
    assert_eq!(state.borrow().offset(), 150.0);

    // Fling back to the top: content stops at its edge, header stays closed
    let step = bridge.dispatch(&content, -600.0, ScrollSource::Fling);
    assert_eq!(step.content, -250.0);
    assert_eq!(step.post, 0.0);
    assert_eq!(state.borrow().offset(), 150.0);

    // A real drag opens it
    let step = bridge.dispatch(&content, -40.0, ScrollSource::UserDrag);
    assert_eq!(step.headers(), -40.0);
}

#[test]
fn test_scroll_end_snap_and_interrupt() {
    let (mut bridge, content, state) = setup(MaterialConfig::default().snap_duration(300));

    bridge.dispatch(&content, 100.0, ScrollSource::UserDrag);
    bridge.on_scroll_end();
    assert_eq!(state.borrow().animation_target(), Some(150.0));

    assert!(bridge.on_frame(0.0));
    assert!(bridge.on_frame(16.0));
    let mid = state.borrow().offset();
    assert!(mid > 100.0 && mid < 150.0);

    // New drag supersedes the snap
    bridge.drag_headers(-10.0);
    assert!(!state.borrow().is_animating());
    assert!(!bridge.on_frame(32.0));
    assert_eq!(state.borrow().offset(), mid - 10.0);
}

#[test]
fn test_multiple_groups_do_not_interfere() {
    let (bridge_a, content_a, state_a) = setup(MaterialConfig::default());
    let (bridge_b, content_b, state_b) = setup(MaterialConfig::default());

    bridge_a.dispatch(&content_a, 100.0, ScrollSource::UserDrag);
    assert_eq!(state_a.borrow().offset(), 100.0);
    assert_eq!(state_b.borrow().offset(), 0.0);

    bridge_b.dispatch(&content_b, 20.0, ScrollSource::Programmatic);
    assert_eq!(state_b.borrow().offset(), 20.0);
    assert_eq!(content_a.offset(), 0.0);
}
