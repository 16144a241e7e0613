// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;
use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where log records go, and which ones are kept.
///
/// Logging is **DISABLED** by **default**. Use [`TracingConfig::new_file`] to turn it
/// on, then pass the config to [`crate::try_initialize_logging_global`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(PathBuf /* log file path */),
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(path: impl Into<PathBuf>, level: tracing::Level) -> Self {
        Self {
            writer_config: WriterConfig::File(path.into()),
            level_filter: LevelFilter::from_level(level),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self.writer_config, WriterConfig::None)
            && self.level_filter != LevelFilter::OFF
    }
}
