// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TerminalConfiguration, TerminalDevice};
use std::{cell::Cell, io};

/// Wraps a real [`TerminalDevice`] and makes `apply()` fail starting with the
/// `fail_on_apply`-th call (1 based). Every call before that is forwarded.
///
/// - [`FlakyTerminal::new`] fails that one call only, later calls are forwarded again.
/// - [`FlakyTerminal::failing_from`] keeps failing every call from then on, like a
///   terminal that went away.
#[derive(Debug)]
pub struct FlakyTerminal<D: TerminalDevice> {
    inner: D,
    fail_on_apply: usize,
    keep_failing: bool,
    applied: Cell<usize>,
}

impl<D: TerminalDevice> FlakyTerminal<D> {
    pub fn new(inner: D, fail_on_apply: usize) -> Self {
        Self {
            inner,
            fail_on_apply,
            keep_failing: false,
            applied: Cell::new(0),
        }
    }

    pub fn failing_from(inner: D, fail_on_apply: usize) -> Self {
        Self {
            keep_failing: true,
            ..Self::new(inner, fail_on_apply)
        }
    }

    /// Number of `apply()` calls so far, including the failed ones.
    pub fn applied(&self) -> usize { self.applied.get() }

    fn fails(&self, count: usize) -> bool {
        if self.keep_failing {
            count >= self.fail_on_apply
        } else {
            count == self.fail_on_apply
        }
    }
}

impl<D: TerminalDevice> TerminalDevice for FlakyTerminal<D> {
    fn query(&self) -> io::Result<TerminalConfiguration> { self.inner.query() }

    fn apply(&self, configuration: &TerminalConfiguration) -> io::Result<()> {
        let count = self.applied.get() + 1;
        self.applied.set(count);
        if self.fails(count) {
            return Err(io::Error::from_raw_os_error(
                rustix::io::Errno::IO.raw_os_error(),
            ));
        }
        self.inner.apply(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TerminalFd, test_fixtures::open_pty_pair};
    use pretty_assertions::assert_eq;

    #[test]
    fn failing_from_never_recovers() {
        let pty = open_pty_pair();
        let device = FlakyTerminal::failing_from(TerminalFd(&pty.slave), 2);
        let original = device.query().unwrap();

        assert!(device.apply(&original).is_ok());
        assert!(device.apply(&original).is_err());
        assert!(device.apply(&original).is_err());
        assert_eq!(device.applied(), 3);
    }

    #[test]
    fn new_fails_once() {
        let pty = open_pty_pair();
        let device = FlakyTerminal::new(TerminalFd(&pty.slave), 1);
        let original = device.query().unwrap();

        assert!(device.apply(&original).is_err());
        assert!(device.apply(&original).is_ok());
    }
}
