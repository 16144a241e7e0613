// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::{ops::Deref,
          path::{Path, PathBuf},
          process,
          sync::atomic::{AtomicUsize, Ordering},
          time::{SystemTime, UNIX_EPOCH}};

/// A directory under [`std::env::temp_dir`] that is deleted when this is dropped, even
/// if the test panics first.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

impl Drop for TempDir {
    fn drop(&mut self) { std::fs::remove_dir_all(&self.inner).ok(); }
}

impl Deref for TempDir {
    type Target = Path;

    fn deref(&self) -> &Self::Target { &self.inner }
}

/// Create a fresh, uniquely named temporary directory.
///
/// # Errors
///
/// Returns an error if the directory can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let name = format!(
        "rawkeys-{}-{stamp}-{}",
        process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    );

    let new_temp_dir = std::env::temp_dir().join(name);
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_deletes_the_directory() {
        let temp_dir = try_create_temp_dir().unwrap();
        std::fs::write(temp_dir.join("log.txt"), "x").unwrap();
        let path = temp_dir.to_path_buf();
        assert!(path.is_dir());

        drop(temp_dir);

        assert!(!path.exists());
    }
}
