use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// A complete code was scanned.
    Submit(String),
}

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        // Scanners end a code with Enter or Tab depending on how they are programmed.
        KeyCode::Enter | KeyCode::Tab => match app.accept_scan() {
            Some(code) => InputAction::Submit(code),
            None => InputAction::None,
        },
        KeyCode::Char(ch) if ch.is_ascii_digit() && !has_command_modifier(key) => {
            app.capture(ch, now);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
