//! GoCat Demo CLI Library
//!
//! This crate provides the terminal front-end for the GoCat interactive demo.
//! It hosts a [`DemoSession`](gocat_demo_core::session::DemoSession) in a
//! crossterm UI, wires the system clipboard into it, and offers plain-text
//! playback for non-interactive use.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`demo_terminal`]: Full-screen interactive UI
//! - [`playback`]: Catalog listing and headless playback
//! - [`clipboard`]: System clipboard capability
//!
//! # Examples
//!
//! ```bash
//! # Interactive demo terminal
//! gcd
//!
//! # Play the second demo to stdout, twice as fast
//! gcd --play 2 --speed 2
//!
//! # Use a custom catalog
//! gcd -c ~/demos/gocat.yml
//! ```

pub mod cli_args;
pub mod clipboard;
pub mod demo_terminal;
pub mod playback;
