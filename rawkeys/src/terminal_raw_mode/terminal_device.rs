// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TerminalConfiguration;
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions}};
use std::io;

/// The terminal whose line discipline is being configured.
///
/// Production code uses [`TerminalFd`] over standard input. Tests wrap a PTY slave, or
/// wrap a [`TerminalFd`] to inject `tcsetattr` failures.
pub trait TerminalDevice {
    /// Read the current configuration (`tcgetattr`).
    ///
    /// # Errors
    ///
    /// Returns an error if the device is not a terminal.
    fn query(&self) -> io::Result<TerminalConfiguration>;

    /// Apply a configuration (`tcsetattr`). Pending output is drained and pending input
    /// is discarded first.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver rejects the configuration.
    fn apply(&self, configuration: &TerminalConfiguration) -> io::Result<()>;
}

/// A file descriptor that refers to a terminal.
#[derive(Debug)]
pub struct TerminalFd<Fd: AsFd>(pub Fd);

impl TerminalFd<io::Stdin> {
    #[must_use]
    pub fn stdin() -> Self { TerminalFd(io::stdin()) }
}

impl<Fd: AsFd> AsFd for TerminalFd<Fd> {
    fn as_fd(&self) -> BorrowedFd<'_> { self.0.as_fd() }
}

impl<Fd: AsFd> TerminalDevice for TerminalFd<Fd> {
    fn query(&self) -> io::Result<TerminalConfiguration> {
        let termios = termios::tcgetattr(self)?;
        Ok(TerminalConfiguration::from_termios(termios))
    }

    fn apply(&self, configuration: &TerminalConfiguration) -> io::Result<()> {
        termios::tcsetattr(self, OptionalActions::Flush, configuration.as_termios())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::open_pty_pair;
    use pretty_assertions::assert_eq;
    use std::fs::File;

    #[test]
    fn apply_then_query_round_trips() {
        let pty = open_pty_pair();
        let device = TerminalFd(pty.slave);

        let original = device.query().unwrap();
        device.apply(&original.derive_raw()).unwrap();
        assert!(device.query().unwrap().is_raw());

        device.apply(&original).unwrap();
        assert_eq!(device.query().unwrap(), original);
    }

    #[test]
    fn query_fails_on_a_regular_file() {
        let file = File::open("/dev/null").unwrap();
        let error = TerminalFd(file).query().unwrap_err();
        assert_eq!(
            error.raw_os_error(),
            Some(rustix::io::Errno::NOTTY.raw_os_error())
        );
    }
}
