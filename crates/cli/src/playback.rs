//! Non-interactive output: catalog listing and plain-text playback.

use std::io::Write;
use std::time::Duration;

use gocat_demo_core::catalog::DemoCatalog;
use gocat_demo_core::error::{Error, Result};
use gocat_demo_core::run_controller::RunState;
use gocat_demo_core::session::DemoSession;
use log::info;

/// Prints demos (1-based) and install snippets.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list_catalog(out: &mut impl Write, catalog: &DemoCatalog) -> Result<()> {
    writeln!(out, "Demos:")?;
    for (index, entry) in catalog.iter().enumerate() {
        writeln!(out, "[{}]: {}", index + 1, entry)?;
    }

    if !catalog.install_methods().is_empty() {
        writeln!(out, "\nInstall:")?;
        for method in catalog.install_methods() {
            writeln!(out, "  {method}")?;
        }
    }

    Ok(())
}

/// Plays demo `index` (0-based) to `out`, calling `sleep` between logical steps.
///
/// Typed characters and revealed lines are written as they appear, so the
/// transcript ends up as `$ <command>` followed by the output.
///
/// # Errors
///
/// Returns [`Error::InvalidSelection`] for an unknown index, or an I/O error from `out`.
pub fn play(
    session: &mut DemoSession,
    index: usize,
    out: &mut impl Write,
    mut sleep: impl FnMut(Duration),
) -> Result<()> {
    let lines = session
        .catalog()
        .get(index)
        .ok_or_else(|| Error::invalid_selection(index, session.catalog().len()))?
        .output_lines();

    session.skip_intro();
    session.select(index)?;
    session.start()?;
    info!("Playing demo {index}");

    write!(out, "$ ")?;
    out.flush()?;

    let mut typed = 0usize;
    let mut printed_lines = 0usize;
    let mut command_done = false;

    while let Some(deadline) = session.next_deadline() {
        sleep(Duration::from_millis(deadline.saturating_sub(session.now())));
        session.advance_to(deadline);

        let prefix = session.typed_prefix();
        let new_chars: String = prefix.chars().skip(typed).collect();
        if !new_chars.is_empty() {
            typed += new_chars.chars().count();
            write!(out, "{new_chars}")?;
        }

        if !command_done && session.run_state() != RunState::Typing {
            command_done = true;
            writeln!(out)?;
        }

        let revealed = session.revealed_lines();
        for line in &lines[printed_lines.min(revealed)..revealed] {
            writeln!(out, "{line}")?;
        }
        printed_lines = printed_lines.max(revealed);

        out.flush()?;
    }

    Ok(())
}
