// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Note that if you wrap this up in a non blocking writer, records written just before
/// the process exits can be lost, so it is used as is.
///
/// The file is never rotated, records are appended to `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name
/// - Insufficient permissions to create the folder or the file
pub fn try_create(path: &Path) -> miette::Result<RollingFileAppender> {
    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(folder)
        .into_diagnostic()
}
