use std::io::stdout;
use std::process::ExitCode;
use std::thread;

use clap::Parser;
use gocat_demo_cli::cli_args::Args;
use gocat_demo_cli::clipboard::SystemClipboard;
use gocat_demo_cli::{demo_terminal, playback};
use gocat_demo_core::error::{Error, Result};
use gocat_demo_core::file_handling::{self, DemoConfig};
use gocat_demo_core::session::DemoSession;
use log::debug;

/// Load the catalog and apply command-line timing overrides
fn initialize_config(args: &Args) -> Result<DemoConfig> {
    let mut config = file_handling::load_demo_config(&args.config_path)?;
    config.timing = args.apply_timing(config.timing)?;
    debug!("Timing: {:?}", config.timing);
    Ok(config)
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let config = initialize_config(&args)?;

    if args.list {
        return playback::list_catalog(&mut stdout(), &config.catalog);
    }

    let mut session = DemoSession::new(config, Box::new(SystemClipboard::default()));

    match args.play {
        Some(0) => Err(Error::invalid_selection(0, session.catalog().len())),
        Some(number) => playback::play(&mut session, number - 1, &mut stdout(), thread::sleep),
        None => demo_terminal::run_interactive(&mut session),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
