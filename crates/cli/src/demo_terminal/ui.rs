use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event};
use crossterm::style::Color::{DarkBlue, DarkGreen, DarkGrey, Green, Reset, Yellow};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, terminal, ExecutableCommand};
use gocat_demo_core::catalog::DemoCatalog;
use gocat_demo_core::error::Result;
use gocat_demo_core::scheduler::Millis;
use gocat_demo_core::session::DemoSession;
use log::debug;

use super::input::{action_for_key, apply_action};
use super::types::{Frame, UiState};

/// Longest the loop waits for input before checking the clock again
const MAX_POLL: Duration = Duration::from_millis(500);

const HEADER: &str =
    "GoCat Demo Terminal   |   j/k: select   enter: run   x: clear   tab/y: copy   q: quit";

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Runs the full-screen demo until the user quits.
///
/// The session's logical clock follows wall-clock milliseconds since this call.
pub fn run_interactive(session: &mut DemoSession) -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled
    stdout.execute(cursor::Hide)?;

    let origin = Instant::now();
    let base = session.now();
    let mut ui_state = UiState::default();
    let mut size = terminal::size()?;
    let mut last_frame: Option<Frame> = None;

    loop {
        session.advance_to(base + elapsed_millis(origin));

        let frame = Frame::capture(session, &ui_state, size);
        if last_frame.as_ref() != Some(&frame) {
            draw_frame(&mut stdout, &frame, session.catalog())?;
            stdout.flush()?;
            last_frame = Some(frame);
        }

        let timeout = session
            .next_deadline()
            .map(|deadline| {
                let now = base + elapsed_millis(origin);
                Duration::from_millis(deadline.saturating_sub(now))
            })
            .map_or(MAX_POLL, |until_deadline| until_deadline.min(MAX_POLL));

        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => {
                if let Some(action) = action_for_key(key_event) {
                    debug!("Key action: {action:?}");
                    if !apply_action(session, &mut ui_state, action) {
                        break;
                    }
                }
            }
            Event::Resize(width, height) => size = (width, height),
            _ => {}
        }
    }

    session.shutdown();
    Ok(())
}

fn elapsed_millis(origin: Instant) -> Millis {
    Millis::try_from(origin.elapsed().as_millis()).unwrap_or(Millis::MAX)
}

/// Draws one frame. Pure output, so it can be rendered into any writer.
pub fn draw_frame(out: &mut impl Write, frame: &Frame, catalog: &DemoCatalog) -> Result<()> {
    let width = frame.width as usize;
    let mut row: u16 = 0;

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    queue!(
        out,
        SetBackgroundColor(DarkGreen),
        Print(fit_to_width(&format!("  {HEADER}"), width)),
        SetBackgroundColor(Reset),
    )?;
    row += 2;

    queue!(
        out,
        MoveTo(0, row),
        SetAttribute(Attribute::Bold),
        Print(&frame.intro),
        SetAttribute(Attribute::Reset),
    )?;
    row += 2;

    for (i, entry) in catalog.iter().enumerate() {
        let is_selected = i == frame.selected_index;
        let line = format!("[{}] {}", i + 1, entry.command);
        write_row(out, row, &line, width, is_selected)?;
        row += 1;
    }
    row += 1;

    queue!(
        out,
        MoveTo(0, row),
        SetForegroundColor(DarkGrey),
        Print("Welcome to GoCat Interactive Demo!"),
        MoveTo(0, row + 1),
        Print("Select a command above and press Enter to run it."),
        SetForegroundColor(Reset),
    )?;
    row += 3;

    let run_label = if frame.is_running { "[Running...]" } else { "[Run]" };
    queue!(
        out,
        MoveTo(0, row),
        SetForegroundColor(Green),
        Print("$ "),
        SetForegroundColor(Reset),
        Print(&frame.displayed_command),
        Print("  "),
        SetForegroundColor(if frame.is_running { DarkGrey } else { Color::Blue }),
        Print(run_label),
        SetForegroundColor(Reset),
    )?;
    row += 1;

    if !frame.output.is_empty() {
        queue!(out, SetForegroundColor(Green))?;
        for line in frame.output.split('\n') {
            queue!(out, MoveTo(0, row), Print(line))?;
            row += 1;
        }
        queue!(out, SetForegroundColor(Reset))?;
    }

    if frame.is_running {
        queue!(
            out,
            MoveTo(0, row),
            SetForegroundColor(Yellow),
            Print("Processing..."),
            SetForegroundColor(Reset),
        )?;
        row += 1;
    }
    row += 1;

    if !catalog.install_methods().is_empty() {
        queue!(out, MoveTo(0, row), SetAttribute(Attribute::Bold), Print("Install"))?;
        queue!(out, SetAttribute(Attribute::Reset))?;
        row += 1;

        for (i, method) in catalog.install_methods().iter().enumerate() {
            let marker = if frame.copied_item == Some(i) { "✓" } else { " " };
            let line = format!("[{marker}] {}: {}", method.title, method.command);
            write_row(out, row, &line, width, i == frame.ui_state.install_cursor)?;
            row += 1;
        }
    }

    if let Some(status) = &frame.ui_state.status {
        let status_row = frame.height.saturating_sub(1).max(row + 1);
        queue!(
            out,
            MoveTo(0, status_row),
            SetForegroundColor(Color::Red),
            Print(fit_to_width(status, width)),
            SetForegroundColor(Reset),
        )?;
    }

    Ok(())
}

fn write_row(out: &mut impl Write, row: u16, content: &str, width: usize, is_selected: bool) -> Result<()> {
    queue!(out, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    if is_selected {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    }

    queue!(
        out,
        Print(fit_to_width(content, width)),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pads or truncates `content` to exactly `width` characters.
fn fit_to_width(content: &str, width: usize) -> String {
    let truncated: String = content.chars().take(width).collect();
    let padding = width.saturating_sub(truncated.chars().count());
    format!("{truncated}{}", " ".repeat(padding))
}
