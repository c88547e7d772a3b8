//! Tests for pointer and keyboard mapping in the terminal UI.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use strictly_minimax::tui::{Action, App, BoardGeometry, Pointer};
use strictly_minimax::{ConfigOverrides, GameConfig, Mark, Position};

const GEOMETRY: BoardGeometry = BoardGeometry {
    x: 10,
    y: 5,
    cell_width: 9,
    cell_height: 5,
};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn two_player_app() -> App {
    let config = GameConfig::default().with_overrides(ConfigOverrides {
        vs_human: true,
        ..ConfigOverrides::default()
    });
    App::new(&config)
}

#[test]
fn test_cell_at_divides_by_cell_size() {
    assert_eq!(GEOMETRY.cell_at(10, 5), Some(Position::TopLeft));
    assert_eq!(GEOMETRY.cell_at(18, 9), Some(Position::TopLeft));
    assert_eq!(GEOMETRY.cell_at(19, 5), Some(Position::TopCenter));
    assert_eq!(GEOMETRY.cell_at(23, 12), Some(Position::Center));
    assert_eq!(GEOMETRY.cell_at(36, 19), Some(Position::BottomRight));
}

#[test]
fn test_cell_at_outside_board() {
    assert_eq!(GEOMETRY.cell_at(9, 5), None);
    assert_eq!(GEOMETRY.cell_at(10, 4), None);
    assert_eq!(GEOMETRY.cell_at(37, 5), None);
    assert_eq!(GEOMETRY.cell_at(10, 20), None);
}

#[test]
fn test_pointer_from_mouse() {
    let press = Pointer::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 4));
    assert_eq!(
        press,
        Some(Pointer {
            column: 3,
            row: 4,
            pressed: true
        })
    );

    let hover = Pointer::from_mouse(&mouse(MouseEventKind::Moved, 3, 4)).unwrap();
    assert!(!hover.pressed);

    assert_eq!(
        Pointer::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Right), 3, 4)),
        None
    );
    assert_eq!(Pointer::from_mouse(&mouse(MouseEventKind::ScrollUp, 3, 4)), None);
}

#[test]
fn test_pointer_actions() {
    let press = Pointer {
        column: 23,
        row: 12,
        pressed: true,
    };
    assert_eq!(
        Action::from_pointer(press, &GEOMETRY),
        Some(Action::Place(Position::Center))
    );

    let off_board = Pointer { column: 0, ..press };
    assert_eq!(Action::from_pointer(off_board, &GEOMETRY), None);

    let hover = Pointer {
        column: 0,
        pressed: false,
        ..press
    };
    assert_eq!(Action::from_pointer(hover, &GEOMETRY), Some(Action::Hover(None)));
}

#[test]
fn test_key_actions() {
    assert_eq!(
        Action::from_key(key(KeyCode::Char('1'))),
        Some(Action::Place(Position::TopLeft))
    );
    assert_eq!(
        Action::from_key(key(KeyCode::Char('9'))),
        Some(Action::Place(Position::BottomRight))
    );
    assert_eq!(Action::from_key(key(KeyCode::Char('0'))), None);
    assert_eq!(Action::from_key(key(KeyCode::Enter)), Some(Action::PlaceAtCursor));
    assert_eq!(Action::from_key(key(KeyCode::Char(' '))), Some(Action::PlaceAtCursor));
    assert_eq!(
        Action::from_key(key(KeyCode::Left)),
        Some(Action::MoveCursor(KeyCode::Left))
    );
    assert_eq!(Action::from_key(key(KeyCode::Char('r'))), Some(Action::Restart));
    assert_eq!(Action::from_key(key(KeyCode::Esc)), Some(Action::Quit));

    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    assert_eq!(Action::from_key(release), None);
}

#[test]
fn test_app_places_at_cursor() {
    let mut app = two_player_app();
    assert_eq!(app.cursor(), Position::Center);
    app.handle(Action::MoveCursor(KeyCode::Up));
    app.handle(Action::PlaceAtCursor);
    assert_eq!(
        app.session().state().board().get(Position::TopCenter).mark(),
        Some(Mark::X)
    );
}

#[test]
fn test_app_reports_ignored_move() {
    let mut app = two_player_app();
    app.handle(Action::Place(Position::Center));
    assert_eq!(app.status_line(), "O to move");

    app.handle(Action::Place(Position::Center));
    assert!(app.status_line().contains("occupied"));
    assert_eq!(app.session().history().len(), 1);

    app.handle(Action::Place(Position::TopLeft));
    assert_eq!(app.status_line(), "X to move");
}

#[test]
fn test_ghost_only_on_empty_cells() {
    let mut app = two_player_app();
    app.handle(Action::Hover(Some(Position::TopLeft)));
    assert_eq!(app.ghost(), Some((Position::TopLeft, Mark::X)));

    app.handle(Action::Place(Position::TopLeft));
    assert_eq!(app.ghost(), None);

    app.handle(Action::Hover(Some(Position::Center)));
    assert_eq!(app.ghost(), Some((Position::Center, Mark::O)));

    app.handle(Action::Hover(None));
    assert_eq!(app.ghost(), None);
}

#[test]
fn test_computer_reply_and_quit() {
    let mut app = App::new(&GameConfig::default());
    app.handle(Action::Place(Position::TopLeft));
    assert_eq!(
        app.session().state().board().get(Position::Center).mark(),
        Some(Mark::O)
    );
    assert_eq!(app.status_line(), "Your move (X)");

    assert!(app.is_running());
    app.handle(Action::Quit);
    assert!(!app.is_running());
}
