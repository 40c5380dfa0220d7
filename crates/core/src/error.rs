use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Selection index {} is out of range (catalog has {} entries)", .index, .len)]
    InvalidSelection { index: usize, len: usize },

    #[error("A demo is already running; start request ignored.")]
    AlreadyRunning,

    #[error("Clipboard unavailable: {}", .0)]
    ClipboardUnavailable(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("No demos were found in the demo catalog YAML. Is `{}` empty?", .path)]
    EmptyCatalog { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Playback speed must be a positive number, got {}", .0)]
    InvalidSpeed(f64),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_selection(index: usize, len: usize) -> Self {
        Self::InvalidSelection { index, len }
    }

    pub fn clipboard_unavailable(reason: impl std::fmt::Display) -> Self {
        let reason = reason.to_string();
        error!("Failed to copy text: {reason}");
        Self::ClipboardUnavailable(reason)
    }

    pub fn empty_catalog(path: String) -> Self {
        Self::EmptyCatalog { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
