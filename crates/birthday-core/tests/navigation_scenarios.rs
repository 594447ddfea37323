//! Scroll-spy scenarios over a simulated viewport.
//!
//! Sections are registered with themselves as region handles; the viewport
//! model turns scroll positions into visibility batches.

use birthday_core::{
    PageState, Section, SimulatedViewport, VisibilitySource, DEFAULT_THRESHOLD,
};
use tokio::task::JoinHandle;

type State = PageState<Section, JoinHandle<()>>;

const VIEWPORT: f64 = 900.0;

fn page_layout() -> Vec<(Section, f64)> {
    vec![
        (Section::Greeting, 1000.0),
        (Section::Gallery, 1600.0),
        (Section::Message, 1200.0),
        (Section::Wishes, 900.0),
    ]
}

/// Mount every section and subscribe the viewport, like the page does on load.
fn load_page() -> (State, SimulatedViewport) {
    let mut state = State::default();
    let mut viewport = SimulatedViewport::stacked(VIEWPORT, &page_layout(), DEFAULT_THRESHOLD);

    for section in Section::ALL {
        state.navigator.register(section, Some(section));
        viewport.subscribe(section).unwrap();
    }
    let initial = viewport.sample();
    state.navigator.observe(&initial);

    (state, viewport)
}

/// Click a nav entry and let the smooth scroll run to completion.
fn navigate(state: &mut State, viewport: &mut SimulatedViewport, target: Section) {
    let region = state.go_to(target).expect("section registered");
    let offset = viewport.offset_of(region).expect("section laid out");

    for batch in viewport.smooth_scroll(offset, 24) {
        state.navigator.observe(&batch);
    }
    state.navigator.settle();
}

// ============================================================================
// Load and organic scrolling
// ============================================================================

#[test]
fn test_load_starts_on_greeting() {
    let (state, viewport) = load_page();
    assert_eq!(state.active_section(), Section::Greeting);
    assert_eq!(viewport.scroll_y(), 0.0);
}

#[test]
fn test_scrolling_gallery_into_view_activates_it() {
    let (mut state, mut viewport) = load_page();

    // Gallery covers 300 of 900 px: not yet
    let batch = viewport.scroll_to(400.0);
    state.navigator.observe(&batch);
    assert_eq!(state.active_section(), Section::Greeting);

    // Gallery covers half the viewport
    let batch = viewport.scroll_to(550.0);
    state.navigator.observe(&batch);
    assert_eq!(state.active_section(), Section::Gallery);
}

#[test]
fn test_scrolling_back_up_restores_greeting() {
    let (mut state, mut viewport) = load_page();

    for y in [550.0, 1500.0, 2400.0] {
        let batch = viewport.scroll_to(y);
        state.navigator.observe(&batch);
    }
    assert_eq!(state.active_section(), Section::Message);

    for batch in viewport.smooth_scroll(0.0, 30) {
        state.navigator.observe(&batch);
    }
    assert_eq!(state.active_section(), Section::Greeting);
}

#[test]
fn test_organic_scroll_to_bottom_reaches_wishes() {
    let (mut state, mut viewport) = load_page();
    let bottom = viewport.max_scroll();

    for batch in viewport.smooth_scroll(bottom, 60) {
        state.navigator.observe(&batch);
    }
    assert_eq!(state.active_section(), Section::Wishes);
}

// ============================================================================
// Explicit navigation
// ============================================================================

#[test]
fn test_go_to_converges_from_every_origin() {
    for from in Section::ALL {
        for to in Section::ALL {
            let (mut state, mut viewport) = load_page();
            navigate(&mut state, &mut viewport, from);
            assert_eq!(state.active_section(), from);

            navigate(&mut state, &mut viewport, to);
            assert_eq!(
                state.active_section(),
                to,
                "navigating {from} -> {to} settled elsewhere"
            );
        }
    }
}

#[test]
fn test_go_to_highlights_before_scrolling() {
    let (mut state, viewport) = load_page();
    state.open_menu();

    state.go_to(Section::Wishes);
    assert_eq!(state.active_section(), Section::Wishes);
    assert!(!state.menu_open());
    // Nothing scrolled yet
    assert_eq!(viewport.scroll_y(), 0.0);
}

#[test]
fn test_late_transit_batch_is_corrected_by_settle() {
    let (mut state, mut viewport) = load_page();

    let region = state.go_to(Section::Wishes).unwrap();
    let offset = viewport.offset_of(region).unwrap();
    let mut batches = viewport.smooth_scroll(offset, 24);

    // Deliver batches out of order: the message crossing arrives last
    let late = batches.remove(batches.len() / 2);
    for batch in &batches {
        state.navigator.observe(batch);
    }
    state.navigator.observe(&late);
    assert_ne!(state.navigator.pending(), None);

    state.navigator.settle();
    assert_eq!(state.active_section(), Section::Wishes);
}

#[test]
fn test_retargeted_jump_settles_on_last_destination() {
    let (mut state, mut viewport) = load_page();

    let gallery = state.go_to(Section::Gallery).unwrap();
    let gallery_offset = viewport.offset_of(gallery).unwrap();
    // Halfway to the gallery the user clicks "wishes"
    for batch in viewport.smooth_scroll(gallery_offset / 2.0, 6) {
        state.navigator.observe(&batch);
    }

    let wishes = state.go_to(Section::Wishes).unwrap();
    let wishes_offset = viewport.offset_of(wishes).unwrap();
    for batch in viewport.smooth_scroll(wishes_offset, 24) {
        state.navigator.observe(&batch);
    }
    state.navigator.settle();

    assert_eq!(state.active_section(), Section::Wishes);
}

#[test]
fn test_jump_that_scrolls_nothing_does_not_pin_the_highlight() {
    let (mut state, mut viewport) = load_page();

    // Already at the top: the jump has nowhere to go
    let greeting = state.go_to(Section::Greeting).unwrap();
    let offset = viewport.offset_of(greeting).unwrap();
    assert!(viewport.smooth_scroll(offset, 24).is_empty());

    // The user then scrolls the gallery into view with the wheel
    for batch in viewport.smooth_scroll(1000.0, 20) {
        state.navigator.observe(&batch);
    }
    assert_eq!(state.active_section(), Section::Gallery);

    state.navigator.settle();
    assert_eq!(state.active_section(), Section::Gallery);
    assert_eq!(state.navigator.pending(), None);
}

#[test]
fn test_jump_interrupted_by_the_user_keeps_what_is_on_screen() {
    let (mut state, mut viewport) = load_page();

    let wishes = state.go_to(Section::Wishes).unwrap();
    let offset = viewport.offset_of(wishes).unwrap();
    for batch in viewport.smooth_scroll(offset * 0.6, 12) {
        state.navigator.observe(&batch);
    }
    assert_eq!(state.active_section(), Section::Message);

    // Wheel back up before the jump lands
    for batch in viewport.smooth_scroll(1000.0, 12) {
        state.navigator.observe(&batch);
    }
    state.navigator.settle();

    assert_eq!(state.active_section(), Section::Gallery);
    assert!(!state.navigator.in_view(Section::Wishes));
}

#[test]
fn test_organic_scroll_after_settled_jump_follows_viewport() {
    let (mut state, mut viewport) = load_page();
    navigate(&mut state, &mut viewport, Section::Message);
    assert_eq!(state.active_section(), Section::Message);

    for batch in viewport.smooth_scroll(0.0, 30) {
        state.navigator.observe(&batch);
    }
    state.navigator.settle();
    assert_eq!(state.active_section(), Section::Greeting);
}

#[test]
fn test_unreachable_short_section_still_settles() {
    let mut state = State::default();
    let mut viewport = SimulatedViewport::stacked(
        VIEWPORT,
        &[
            (Section::Greeting, 1000.0),
            (Section::Gallery, 1600.0),
            (Section::Message, 1200.0),
            (Section::Wishes, 120.0),
        ],
        DEFAULT_THRESHOLD,
    );
    for section in Section::ALL {
        state.navigator.register(section, Some(section));
        viewport.subscribe(section).unwrap();
    }
    state.navigator.observe(&viewport.sample());

    navigate(&mut state, &mut viewport, Section::Wishes);
    assert_eq!(state.active_section(), Section::Wishes);
    assert!(viewport.scroll_y() < viewport.bounds_of(Section::Wishes).unwrap().top);
}

#[test]
fn test_unregistered_regions_are_skipped() {
    let mut state = State::default();
    let mut viewport = SimulatedViewport::stacked(VIEWPORT, &page_layout(), DEFAULT_THRESHOLD);

    // Only the greeting has mounted; the observer still reports everything
    state.navigator.register(Section::Greeting, Some(Section::Greeting));
    for section in Section::ALL {
        viewport.subscribe(section).unwrap();
    }

    let batch = viewport.scroll_to(1000.0);
    state.navigator.observe(&batch);
    assert_eq!(state.active_section(), Section::Greeting);

    // Null registration does not make the gallery appear
    state.navigator.register(Section::Gallery, None);
    assert!(!state.navigator.is_registered(Section::Gallery));
}

#[test]
fn test_teardown_stops_notifications() {
    let (mut state, mut viewport) = load_page();
    viewport.unsubscribe_all();

    let batch = viewport.scroll_to(1500.0);
    assert!(batch.is_empty());
    state.navigator.observe(&batch);
    assert_eq!(state.active_section(), Section::Greeting);
}
