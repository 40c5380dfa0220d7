//! GoCat Demo Core Library
//!
//! This crate provides the engine behind the GoCat interactive demo terminal:
//! a visitor picks a canned command, watches it type itself out, then watches
//! its output stream in line by line. Install snippets can be copied with a
//! short-lived "copied" indication.
//!
//! # Key Features
//!
//! - **Demo Catalog**: Ordered command/output pairs plus install snippets, built in or loaded from YAML
//! - **Run Controller**: `Idle -> Typing -> Processing -> Streaming -> Idle` state machine
//! - **Logical Timers**: Every delay is a cancellable wakeup on one logical clock
//! - **Copy Feedback**: Single shared "copied" slot with a self-reverting window
//! - **Error Handling**: Rejected operations are reported, never fatal
//!
//! # Examples
//!
//! Playing the built-in `gocat listen` demo to completion:
//!
//! ```
//! use gocat_demo_core::clipboard::Clipboard;
//! use gocat_demo_core::file_handling::DemoConfig;
//! use gocat_demo_core::session::DemoSession;
//!
//! struct NoClipboard;
//!
//! impl Clipboard for NoClipboard {
//!     fn write_text(&mut self, _text: &str) -> gocat_demo_core::error::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut session = DemoSession::new(DemoConfig::default(), Box::new(NoClipboard));
//! session.select(1)?;
//! session.start()?;
//! session.settle();
//!
//! assert!(!session.is_running());
//! assert!(session.revealed_output().starts_with("Starting server on port 8080..."));
//! # Ok::<(), gocat_demo_core::error::Error>(())
//! ```

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod intro;
pub mod run_controller;
pub mod scheduler;
pub mod selection;
pub mod session;
pub mod streamer;
pub mod typing;
