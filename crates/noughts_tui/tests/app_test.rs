//! Tests for input dispatch against an in-memory session.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use noughts_core::{
    Cell, Mark, MemoryStore, Position, RoundStatus, SCORES_KEY, Scores, Session, UndoPolicy,
};
use noughts_tui::{Action, App, BoardLayout, Control, InputController, KeyBindings};
use ratatui::layout::Rect;

fn app() -> App<MemoryStore> {
    let session = Session::new(MemoryStore::new(), UndoPolicy::History);
    App::new(session, InputController::new(KeyBindings::default()))
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn type_keys(app: &mut App<MemoryStore>, keys: &str) {
    let layout = BoardLayout::default();
    for c in keys.chars() {
        assert_eq!(app.handle_event(&key(c), &layout), Control::Continue);
    }
}

#[test]
fn test_digits_play_a_winning_round() {
    let mut app = app();
    // X takes the top row.
    type_keys(&mut app, "14253");

    let round = app.session().round();
    assert!(matches!(round.status(), RoundStatus::Won { winner: Mark::X, .. }));
    assert_eq!(app.session().scores(), &Scores::new(1, 0, 0));
    assert!(app.session().store().raw(SCORES_KEY).is_some());
}

#[test]
fn test_occupied_cell_sets_notice() {
    let mut app = app();
    type_keys(&mut app, "55");

    assert_eq!(app.session().round().current_player(), Mark::O);
    let notice = app.notice().expect("notice for rejected move");
    assert!(notice.contains("occupied"), "{}", notice);

    // The next accepted move clears it.
    type_keys(&mut app, "1");
    assert_eq!(app.notice(), None);
}

#[test]
fn test_input_after_round_over_points_at_new_round() {
    let mut app = app();
    type_keys(&mut app, "142536");

    assert_eq!(app.session().round().board().get(Position::BottomRight), Cell::Empty);
    let notice = app.notice().expect("notice after round over");
    assert!(notice.contains("'r'"), "{}", notice);
}

#[test]
fn test_new_round_keeps_scores() {
    let mut app = app();
    type_keys(&mut app, "14253r");

    assert!(app.session().round().board().is_blank());
    assert_eq!(app.session().round().current_player(), Mark::X);
    assert_eq!(app.session().scores().wins(Mark::X), 1);
}

#[test]
fn test_reset_scores_clears_store() {
    let mut app = app();
    type_keys(&mut app, "14253s");

    assert_eq!(app.session().scores(), &Scores::default());
    assert!(app.session().store().raw(SCORES_KEY).is_none());
    assert!(app.session().round().board().is_blank());
    assert_eq!(app.notice(), Some("Scores reset."));
}

#[test]
fn test_undo() {
    let mut app = app();
    type_keys(&mut app, "u");
    assert_eq!(app.notice(), Some("No moves to undo."));

    type_keys(&mut app, "5u");
    assert!(app.session().round().board().is_blank());
    assert_eq!(app.session().round().current_player(), Mark::X);

    type_keys(&mut app, "14253u");
    assert!(app.session().round().is_over());
    assert!(app.notice().is_some_and(|n| n.contains("over")));
}

#[test]
fn test_cursor_keys_place_at_cursor() {
    let mut app = app();
    let layout = BoardLayout::default();
    let up = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

    app.handle_event(&up, &layout);
    assert_eq!(app.input().cursor(), Position::TopCenter);
    app.handle_event(&enter, &layout);

    assert_eq!(
        app.session().round().board().get(Position::TopCenter),
        Cell::Occupied(Mark::X)
    );
}

#[test]
fn test_mouse_click_places_mark() {
    let mut app = app();
    let layout = BoardLayout::new(Rect::new(0, 0, 27, 15));
    let click = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 13,
        row: 7,
        modifiers: KeyModifiers::NONE,
    });

    app.handle_event(&click, &layout);
    assert_eq!(
        app.session().round().board().get(Position::Center),
        Cell::Occupied(Mark::X)
    );
    assert_eq!(app.input().cursor(), Position::Center);

    // Clicks off the board do nothing.
    let miss = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 40,
        row: 7,
        modifiers: KeyModifiers::NONE,
    });
    app.handle_event(&miss, &layout);
    assert_eq!(app.session().round().current_player(), Mark::O);
}

#[test]
fn test_quit() {
    let mut app = app();
    assert_eq!(app.dispatch(Action::Quit), Control::Quit);
    let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert_eq!(app.handle_event(&esc, &BoardLayout::default()), Control::Quit);
}

#[test]
fn test_custom_bindings() {
    let keys: KeyBindings = toml::from_str("undo = \"z\"").unwrap();
    let session = Session::new(MemoryStore::new(), UndoPolicy::History);
    let mut app = App::new(session, InputController::new(keys));

    type_keys(&mut app, "5z");
    assert!(app.session().round().board().is_blank());

    // The old letter is no longer bound.
    type_keys(&mut app, "5u");
    assert_eq!(app.session().round().current_player(), Mark::O);
}
