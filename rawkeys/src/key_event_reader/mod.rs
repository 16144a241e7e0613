// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reads key events one byte at a time while the terminal is in raw mode.

// Attach sources.
pub mod event_loop;
pub mod key_byte;
pub mod reader;

// Re-export.
pub use event_loop::*;
pub use key_byte::*;
pub use reader::*;
