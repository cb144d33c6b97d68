use crossterm::event::{Event, KeyCode};

use crate::app::event_loop::LoopOutcome;
use crate::event::SelectionEvent;

use super::{key_event, test_app, type_query};

#[test]
fn filter_select_and_unwind_scenario() {
    let mut app = test_app();

    type_query(&mut app, "appl");
    app.apply_event(key_event(KeyCode::Enter));
    assert_eq!(app.combo.selection().values(), ["Apple"]);
    assert_eq!(app.state.status.message, "selected Apple");

    // Clear the query, then pick Grape from the unfiltered list.
    for _ in 0..4 {
        app.apply_event(key_event(KeyCode::Backspace));
    }
    type_query(&mut app, "grape");
    app.apply_event(key_event(KeyCode::Enter));
    assert_eq!(app.combo.selection().values(), ["Apple", "Grape"]);

    // Backspace only reaches the chips once the query is empty again.
    for _ in 0..5 {
        app.apply_event(key_event(KeyCode::Backspace));
    }
    assert_eq!(app.combo.selection().values(), ["Apple", "Grape"]);

    app.apply_event(key_event(KeyCode::Backspace));
    assert_eq!(app.combo.selection().values(), ["Apple"]);
    assert_eq!(
        app.state.status.last_event,
        Some(SelectionEvent::Removed("Grape"))
    );
}

#[test]
fn escape_closes_the_dropdown_then_quits() {
    let mut app = test_app();
    type_query(&mut app, "a");
    assert!(app.combo.is_open());

    let outcome = app.apply_event(key_event(KeyCode::Esc));
    assert_eq!(outcome, LoopOutcome::Continue { redraw: true });
    assert!(!app.combo.is_open());

    let outcome = app.apply_event(key_event(KeyCode::Esc));
    assert_eq!(outcome, LoopOutcome::Quit);
}

#[test]
fn resize_requests_a_redraw() {
    let mut app = test_app();
    let outcome = app.apply_event(Event::Resize(100, 40));
    assert_eq!(outcome, LoopOutcome::Continue { redraw: true });
}

#[test]
fn selection_count_tracks_toggles() {
    let mut app = test_app();
    app.apply_event(key_event(KeyCode::Down)); // open
    app.apply_event(key_event(KeyCode::Enter));
    app.apply_event(key_event(KeyCode::Down));
    app.apply_event(key_event(KeyCode::Enter));
    assert_eq!(app.combo.selection().len(), 2);

    // Toggling the still-active item removes it again.
    app.apply_event(key_event(KeyCode::Enter));
    assert_eq!(app.combo.selection().len(), 1);
}
