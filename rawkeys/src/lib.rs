// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios rawkeys

//! # rawkeys
//!
//! The terminal input layer of a screen oriented text editor.
//!
//! 1. [`TerminalModeController`] captures the controlling terminal's original
//!    configuration, derives a raw configuration from it, and applies it. The
//!    [`RawModeGuard`] scopes raw mode so the original configuration is restored on
//!    every exit path (normal return, `?` propagation of a fatal error, or a panic).
//! 2. [`KeyEventReader`] pulls one byte at a time from standard input. Raw mode
//!    configures the read to return after 100ms with no data, so
//!    [`KeyEventReader::read_event`] returns `Ok(None)` on a timeout.
//! 3. [`run_event_loop`] classifies each byte as a [`KeyByte`] and prints it, one line
//!    per keystroke, until [`QUIT_KEY`] is read.
//!
//! ```no_run
//! use rawkeys::{KeyEventReader, RawModeGuard, TerminalInput, TerminalModeController,
//!               run_event_loop};
//!
//! # fn main() -> miette::Result<()> {
//! let mut controller = TerminalModeController::stdin();
//! let guard = RawModeGuard::new(&mut controller)?;
//! let mut reader = KeyEventReader::new(TerminalInput::stdin());
//! run_event_loop(&mut reader, &mut std::io::stdout())?;
//! guard.restore()?;
//! # Ok(())
//! # }
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod clap_config;
pub mod common;
pub mod key_event_reader;
pub mod log;
pub mod terminal_raw_mode;

#[cfg(test)]
pub mod test_fixtures;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use clap_config::*;
pub use common::*;
pub use key_event_reader::*;
pub use log::*;
pub use terminal_raw_mode::*;
