//! Interactive demo terminal.
//!
//! This module hosts a [`DemoSession`](gocat_demo_core::session::DemoSession)
//! in a full-screen crossterm UI, feeding it wall-clock time and key presses.
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys or vim-style (j/k) navigation, or `1`-`9` to pick a demo
//! - Enter or space to run the selected demo
//! - Backspace or `x` to clear the terminal
//! - Tab / shift-tab to move between install snippets, `y` to copy one
//! - `s` to skip the intro banner
//! - `q` or Escape to quit

pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use input::{action_for_key, apply_action};
pub use types::{Action, CycleDirection, Frame, UiState};
pub use ui::run_interactive;
