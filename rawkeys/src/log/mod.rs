// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! File based tracing. Standard output carries the key events and standard error
//! carries the fatal report, so log records only ever go to a file.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
