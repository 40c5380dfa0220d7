use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gocat_demo_core::error::Error;
use gocat_demo_core::session::DemoSession;
use log::debug;

use super::types::{Action, CycleDirection, UiState};

/// Maps a key press to an action, or `None` for keys the UI ignores.
pub fn action_for_key(key_event: KeyEvent) -> Option<Action> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cycle(CycleDirection::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cycle(CycleDirection::Down)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::Select(digit as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Start),
        KeyCode::Backspace | KeyCode::Char('x') => Some(Action::Reset),
        KeyCode::Tab => Some(Action::MoveInstallCursor(CycleDirection::Down)),
        KeyCode::BackTab => Some(Action::MoveInstallCursor(CycleDirection::Up)),
        KeyCode::Char('y') => Some(Action::CopyInstall),
        KeyCode::Char('s') => Some(Action::SkipIntro),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Applies `action` to the session. Returns `false` when the UI should exit.
///
/// Rejected operations never end the UI: selection and clipboard failures are
/// shown on the status line, and a start while running is dropped.
pub fn apply_action(session: &mut DemoSession, ui_state: &mut UiState, action: Action) -> bool {
    let result = match action {
        Action::Quit => return false,
        Action::Select(index) => session.select(index),
        Action::Cycle(direction) => {
            let index = direction.apply(session.selected_index(), session.catalog().len());
            session.select(index)
        }
        Action::Start => session.start(),
        Action::Reset => {
            session.reset();
            Ok(())
        }
        Action::MoveInstallCursor(direction) => {
            ui_state.install_cursor =
                direction.apply(ui_state.install_cursor, session.install_methods().len());
            Ok(())
        }
        Action::CopyInstall => session.copy(ui_state.install_cursor),
        Action::SkipIntro => {
            session.skip_intro();
            Ok(())
        }
    };

    ui_state.status = match result {
        Ok(()) => None,
        Err(Error::AlreadyRunning) => {
            debug!("Run key pressed while running");
            ui_state.status.take()
        }
        Err(e) => Some(e.to_string()),
    };

    true
}
