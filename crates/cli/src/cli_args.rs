//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap` crate.

use clap::Parser;
use gocat_demo_core::config::Timing;
use gocat_demo_core::error::Result;

/// Command-line arguments for the GoCat demo terminal.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use gocat_demo_cli::cli_args::Args;
///
/// let args = Args::parse_from(["gcd", "--play", "2"]);
/// assert_eq!(args.play, Some(2));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the demo catalog YAML.
    ///
    /// If not provided, `~/.gocat-demo/demo.yml` is used when it exists,
    /// otherwise the built-in demos.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Print the demos and install snippets, then exit.
    #[arg(long, short = 'l', action)]
    pub list: bool,

    /// Play one demo (1-based, as listed) to stdout without the interactive UI.
    #[arg(long, short = 'p')]
    pub play: Option<usize>,

    /// Show the intro banner in full instead of typing it.
    #[arg(long, action)]
    pub no_intro: bool,

    /// Playback speed multiplier; 2 plays twice as fast.
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,
}

impl Args {
    /// Applies `--speed` and `--no-intro` on top of the configured timing.
    ///
    /// # Errors
    ///
    /// Returns an error if `--speed` is not a positive number.
    pub fn apply_timing(&self, timing: Timing) -> Result<Timing> {
        let mut timing = timing.scaled(self.speed)?;
        if self.no_intro {
            timing.intro_enabled = false;
        }
        Ok(timing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gocat_demo_core::error::Error;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["gcd"]);

        assert_eq!(args.config_path, None);
        assert!(!args.list);
        assert_eq!(args.play, None);
        assert!(!args.no_intro);
        assert!((args.speed - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["gcd", "-c", "/tmp/demo.yml", "-l", "-p", "3"]);

        assert_eq!(args.config_path, Some("/tmp/demo.yml".to_string()));
        assert!(args.list);
        assert_eq!(args.play, Some(3));
    }

    #[test]
    fn test_apply_timing() {
        let args = Args::parse_from(["gcd", "--speed", "5", "--no-intro"]);
        let timing = args.apply_timing(Timing::default()).unwrap();

        assert_eq!(timing.typing_interval_ms, 10);
        assert_eq!(timing.copy_feedback_ms, 400);
        assert!(!timing.intro_enabled);
    }

    #[test]
    fn test_apply_timing_rejects_zero_speed() {
        let args = Args::parse_from(["gcd", "--speed", "0"]);
        assert!(matches!(
            args.apply_timing(Timing::default()),
            Err(Error::InvalidSpeed(_))
        ));
    }
}
