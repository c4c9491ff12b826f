//! Key mapping from terminal events to game events.

use crate::types::{GameEvent, STATUS_ROWS};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game events.
pub fn handle_key_event(key: KeyEvent) -> Option<GameEvent> {
    if should_quit(key) {
        return Some(GameEvent::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameEvent::MoveDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameEvent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameEvent::MoveRight),

        // Run control
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameEvent::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameEvent::Restart),

        _ => None,
    }
}

/// Map any terminal event to a game event.
///
/// Key releases are dropped; terminal auto-repeat still moves the player.
/// Resizes report the playfield, i.e. the terminal minus the status rows.
pub fn handle_event(event: &Event) -> Option<GameEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(*key),
        Event::Resize(cols, rows) => {
            let (width, height) = playfield_size(*cols, *rows);
            Some(GameEvent::Resize { width, height })
        }
        _ => None,
    }
}

/// Playfield dimensions for a terminal of `cols` x `rows`.
pub fn playfield_size(cols: u16, rows: u16) -> (u16, u16) {
    (cols, rows.saturating_sub(STATUS_ROWS))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameEvent::MoveUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameEvent::MoveDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameEvent::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameEvent::MoveRight)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(GameEvent::MoveUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('J'))),
            Some(GameEvent::MoveDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(GameEvent::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(GameEvent::MoveRight)
        );
    }

    #[test]
    fn test_run_control_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameEvent::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameEvent::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('Q'))),
            Some(GameEvent::Quit)
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handle_event(&Event::Key(release)), None);
        assert_eq!(
            handle_event(&Event::Key(KeyEvent::from(KeyCode::Left))),
            Some(GameEvent::MoveLeft)
        );
    }

    #[test]
    fn test_resize_excludes_status_rows() {
        assert_eq!(
            handle_event(&Event::Resize(80, 24)),
            Some(GameEvent::Resize {
                width: 80,
                height: 22
            })
        );
        assert_eq!(playfield_size(10, 1), (10, 0));
    }
}
