// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The terminal mode controller and its RAII guard.
//!
//! There is exactly one controlling terminal per process, so there is exactly one
//! [`TerminalModeController`] per process. It is constructed once in `main` and passed
//! explicitly to whoever needs it (there is no static holding the original settings).
//! The [`RawModeGuard`] borrows it for the lifetime of the event loop.

use super::{TerminalConfiguration, TerminalDevice, TerminalFd};
use crate::{ConfigRole, TerminalError};
use std::io;
use tracing::{debug, error};

/// Owns the terminal device and the *original* configuration captured from it.
#[derive(Debug)]
pub struct TerminalModeController<D: TerminalDevice> {
    device: D,
    original: Option<TerminalConfiguration>,
    raw_mode_active: bool,
}

impl TerminalModeController<TerminalFd<io::Stdin>> {
    /// Controller for the terminal attached to standard input.
    #[must_use]
    pub fn stdin() -> Self { Self::new(TerminalFd::stdin()) }
}

impl<D: TerminalDevice> TerminalModeController<D> {
    #[must_use]
    pub fn new(device: D) -> Self {
        Self {
            device,
            original: None,
            raw_mode_active: false,
        }
    }

    #[must_use]
    pub fn device(&self) -> &D { &self.device }

    /// The configuration captured by [`Self::capture_original`], if any.
    #[must_use]
    pub fn original(&self) -> Option<&TerminalConfiguration> { self.original.as_ref() }

    /// Whether a restore is owed: raw mode was requested and not yet undone.
    #[must_use]
    pub fn is_raw_mode_active(&self) -> bool { self.raw_mode_active }

    /// Read the terminal's current configuration and keep it as the *original*. Only
    /// the first successful call queries the terminal, later calls return the stored
    /// snapshot.
    ///
    /// # Errors
    ///
    /// [`TerminalError::Query`] if the terminal can't be queried (eg: stdin is not a
    /// tty). This is fatal, nothing can be restored without it.
    pub fn capture_original(&mut self) -> Result<&TerminalConfiguration, TerminalError> {
        let original = match self.original.take() {
            Some(it) => it,
            None => {
                let it = self
                    .device
                    .query()
                    .map_err(|source| TerminalError::Query { source })?;
                debug!(original = ?it, "captured original terminal configuration");
                it
            }
        };
        Ok(self.original.insert(original))
    }

    /// Put the terminal in raw mode. The raw configuration is always derived from the
    /// original one, so enabling twice is the same as enabling once.
    ///
    /// A restore is owed from the moment this is called, even if applying the raw
    /// configuration fails.
    ///
    /// # Errors
    ///
    /// - [`TerminalError::Query`] if the original configuration can't be captured.
    /// - [`TerminalError::Config`] if the raw configuration can't be applied.
    pub fn enable_raw_mode(&mut self) -> Result<(), TerminalError> {
        let raw = self.capture_original()?.derive_raw();
        self.raw_mode_active = true;

        self.device
            .apply(&raw)
            .map_err(|source| TerminalError::config(ConfigRole::Raw, source))?;

        debug!("raw mode enabled");
        Ok(())
    }

    /// Re-apply the original configuration. No-op if raw mode is not active.
    ///
    /// # Errors
    ///
    /// [`TerminalError::Config`] if the original configuration can't be applied. The
    /// restore is not retried: it is considered done (and failed) after this returns.
    pub fn disable_raw_mode(&mut self) -> Result<(), TerminalError> {
        if !self.raw_mode_active {
            return Ok(());
        }
        self.raw_mode_active = false;

        let Some(original) = self.original.as_ref() else {
            return Ok(());
        };

        self.device
            .apply(original)
            .map_err(|source| TerminalError::config(ConfigRole::Original, source))?;

        debug!("raw mode disabled, original terminal configuration restored");
        Ok(())
    }

    /// Restore from a destructor. The error can't be returned from here, so it is
    /// reported on stderr and in the log instead of being dropped.
    fn restore_or_report(&mut self) {
        if let Err(report) = self.disable_raw_mode() {
            error!(?report, "could not restore the original terminal configuration");
            eprintln!("{:?}", miette::Report::new(report));
        }
    }
}

impl<D: TerminalDevice> Drop for TerminalModeController<D> {
    fn drop(&mut self) { self.restore_or_report(); }
}

/// RAII guard that keeps the terminal in raw mode for as long as it lives.
///
/// Dropping the guard (normal scope exit, early return via `?`, or a panic unwinding
/// through it) restores the original configuration. Use [`RawModeGuard::restore`] on
/// the happy path to get the restore error back as a value instead.
///
/// Note that [`std::process::exit`] does not run destructors, so don't call it while a
/// guard is alive. Return from `main` instead.
#[derive(Debug)]
pub struct RawModeGuard<'a, D: TerminalDevice> {
    controller: &'a mut TerminalModeController<D>,
}

impl<'a, D: TerminalDevice> RawModeGuard<'a, D> {
    /// Capture the original configuration and enable raw mode.
    ///
    /// The guard exists before raw mode is applied, so if applying fails the guard is
    /// dropped on the way out and the original configuration is re-applied.
    ///
    /// # Errors
    ///
    /// See [`TerminalModeController::enable_raw_mode`].
    pub fn new(controller: &'a mut TerminalModeController<D>) -> Result<Self, TerminalError> {
        controller.capture_original()?;
        let guard = Self { controller };
        guard.controller.enable_raw_mode()?;
        Ok(guard)
    }

    #[must_use]
    pub fn controller(&self) -> &TerminalModeController<D> { &*self.controller }

    /// Restore the original configuration now and return the outcome.
    ///
    /// # Errors
    ///
    /// See [`TerminalModeController::disable_raw_mode`].
    pub fn restore(self) -> Result<(), TerminalError> {
        self.controller.disable_raw_mode()
    }
}

impl<D: TerminalDevice> Drop for RawModeGuard<'_, D> {
    fn drop(&mut self) { self.controller.restore_or_report(); }
}
