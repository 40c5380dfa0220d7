//! Type definitions for the demo terminal UI.

use gocat_demo_core::session::DemoSession;

/// Direction to cycle through a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

impl CycleDirection {
    /// Next index in `0..len`, wrapping at both ends.
    #[must_use]
    pub fn apply(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }

        match self {
            CycleDirection::Up if index == 0 => len - 1,
            CycleDirection::Up => (index - 1).min(len - 1),
            CycleDirection::Down => (index + 1) % len,
        }
    }
}

/// What a key press asks the session to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Select(usize),
    Cycle(CycleDirection),
    Start,
    Reset,
    MoveInstallCursor(CycleDirection),
    CopyInstall,
    SkipIntro,
    Quit,
}

/// UI-only state that the session does not own.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct UiState {
    /// Highlighted install snippet
    pub install_cursor: usize,
    /// Last rejected action, shown on the bottom row
    pub status: Option<String>,
}

/// Everything drawn on screen. The UI redraws only when this changes.
#[derive(Clone, PartialEq, Debug)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub intro: String,
    pub selected_index: usize,
    pub displayed_command: String,
    pub output: String,
    pub is_running: bool,
    pub copied_item: Option<usize>,
    pub ui_state: UiState,
}

impl Frame {
    pub fn capture(session: &DemoSession, ui_state: &UiState, size: (u16, u16)) -> Self {
        let (width, height) = size;
        Self {
            width,
            height,
            intro: session.intro_text().to_string(),
            selected_index: session.selected_index(),
            displayed_command: session.displayed_command().to_string(),
            output: session.revealed_output(),
            is_running: session.is_running(),
            copied_item: session.copied_item(),
            ui_state: ui_state.clone(),
        }
    }
}
