// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal raw mode for an editor's input surface.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C, Ctrl+Z, Ctrl+S, Ctrl+V, etc.)
//! - Enter arrives as `\n` (CR is translated to NL on input)
//! - Echoing is enabled (typed characters appear on screen)
//! - Output `\n` is translated to `\r\n`
//!
//! **Raw Mode** (as configured here):
//! - No line buffering - bytes available immediately
//! - No special character processing - `Ctrl+C` is just byte 3
//! - No echo - typed characters don't automatically appear
//! - No output processing - write `\r\n` yourself to start a new line
//! - 8 bit characters, no parity checking or high bit stripping
//! - `VMIN=0`, `VTIME=1`: a read returns as soon as one byte is available, or with
//!   zero bytes after 100ms
//!
//! ## The Line Discipline and `stty`
//!
//! Between the terminal and the program reading input sits the **line discipline**, a
//! kernel layer that buffers, echoes, translates, and turns keystrokes into signals.
//! The `stty` command edits the same **termios** settings this module manipulates via
//! rustix's `tcgetattr()` and `tcsetattr()`. When something looks off, `stty -a` shows
//! the current state, and `stty -g` prints it in a form that can be compared
//! byte-for-byte (the end-to-end tests do exactly that).
//!
//! ## Usage
//!
//! ```no_run
//! use rawkeys::{RawModeGuard, TerminalModeController};
//!
//! # fn main() -> Result<(), rawkeys::TerminalError> {
//! let mut controller = TerminalModeController::stdin();
//! {
//!     let _guard = RawModeGuard::new(&mut controller)?;
//!     // Terminal is now in raw mode.
//! } // Original configuration restored when the guard is dropped.
//! # Ok(())
//! # }
//! ```

// Private modules (hide internal structure).
mod raw_mode_core;
mod terminal_configuration;
mod terminal_device;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
pub use terminal_configuration::*;
pub use terminal_device::*;
