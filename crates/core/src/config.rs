//! Configuration for the demo engine.
//!
//! This module resolves the catalog file path and holds the interval settings
//! that pace typing, processing, output streaming, copy feedback and the intro banner.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scheduler::Millis;

/// Default path for the demo catalog file
pub const DEFAULT_CONFIG_PATH: &str = "~/.gocat-demo/demo.yml";

/// Banner typed once when a session starts
pub const INTRO_TEXT: &str = "$ gocat connect example.com 80";

/// Resolves the catalog file path, expanding `~`.
///
/// # Examples
///
/// ```
/// use gocat_demo_core::config::get_config_path;
///
/// let default_path = get_config_path(&None);
/// assert!(default_path.ends_with("demo.yml"));
///
/// let custom_path = get_config_path(&Some("/path/to/demo.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/demo.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Intervals, in logical milliseconds, for every timed step.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Timing {
    /// Delay after each typed character (including the empty prefix)
    pub typing_interval_ms: Millis,
    /// Single "thinking" pause between typing and output
    pub processing_delay_ms: Millis,
    /// Delay before each output line is revealed
    pub line_interval_ms: Millis,
    /// How long a copy shows as copied
    pub copy_feedback_ms: Millis,
    pub intro_interval_ms: Millis,
    pub intro_enabled: bool,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            typing_interval_ms: 50,
            processing_delay_ms: 500,
            line_interval_ms: 300,
            copy_feedback_ms: 2000,
            intro_interval_ms: 100,
            intro_enabled: true,
        }
    }
}

impl Timing {
    /// Divides every interval by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpeed`] unless `factor` is finite and positive.
    pub fn scaled(self, factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::InvalidSpeed(factor));
        }

        let scale = |interval: Millis| (interval as f64 / factor).round() as Millis;

        Ok(Self {
            typing_interval_ms: scale(self.typing_interval_ms),
            processing_delay_ms: scale(self.processing_delay_ms),
            line_interval_ms: scale(self.line_interval_ms),
            copy_feedback_ms: scale(self.copy_feedback_ms),
            intro_interval_ms: scale(self.intro_interval_ms),
            intro_enabled: self.intro_enabled,
        })
    }

    /// Logical duration of a full run of `command` producing `line_count` lines.
    pub fn run_duration(&self, command: &str, line_count: usize) -> Millis {
        let typing_steps = command.chars().count() as Millis + 1;
        typing_steps * self.typing_interval_ms
            + self.processing_delay_ms
            + line_count as Millis * self.line_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/demo.yml".to_string());
        assert_eq!(get_config_path(&custom_path), "/custom/path/demo.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.contains("demo.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_default_timing() {
        let timing = Timing::default();
        assert_eq!(timing.typing_interval_ms, 50);
        assert_eq!(timing.processing_delay_ms, 500);
        assert_eq!(timing.line_interval_ms, 300);
        assert_eq!(timing.copy_feedback_ms, 2000);
        assert_eq!(timing.intro_interval_ms, 100);
        assert!(timing.intro_enabled);
    }

    #[test]
    fn test_scaled_timing() {
        let timing = Timing::default().scaled(2.0).unwrap();
        assert_eq!(timing.typing_interval_ms, 25);
        assert_eq!(timing.processing_delay_ms, 250);
        assert_eq!(timing.line_interval_ms, 150);
        assert_eq!(timing.copy_feedback_ms, 1000);
        assert_eq!(timing.intro_interval_ms, 50);
    }

    #[test]
    fn test_scaled_timing_rejects_bad_factor() {
        assert!(matches!(
            Timing::default().scaled(0.0),
            Err(Error::InvalidSpeed(_))
        ));
        assert!(Timing::default().scaled(-1.0).is_err());
        assert!(Timing::default().scaled(f64::NAN).is_err());
    }

    #[test]
    fn test_run_duration() {
        // 17 chars + trailing pause = 18 typing steps, 2 lines
        let duration = Timing::default().run_duration("gocat listen 8080", 2);
        assert_eq!(duration, 18 * 50 + 500 + 2 * 300);
    }
}
