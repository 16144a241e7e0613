// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod flaky_terminal;
pub mod pty_pair_fixtures;
pub mod scripted_input;
pub mod temp_dir;

// Re-export.
pub use flaky_terminal::*;
pub use pty_pair_fixtures::*;
pub use scripted_input::*;
pub use temp_dir::*;
