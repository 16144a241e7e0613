// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::KeyByte;
use crate::TerminalError;
use rustix::fd::AsFd;
use std::io::{self, ErrorKind, Read};
use tracing::trace;

/// Unbuffered reads from a terminal file descriptor.
///
/// [`std::io::Stdin`] is buffered, which would pull several bytes out of the kernel per
/// `read()`. This goes straight to `read(2)`, so each call consumes at most what is
/// asked for and honors `VMIN` / `VTIME` exactly.
#[derive(Debug)]
pub struct TerminalInput<Fd: AsFd>(pub Fd);

impl TerminalInput<io::Stdin> {
    #[must_use]
    pub fn stdin() -> Self { TerminalInput(io::stdin()) }
}

impl<Fd: AsFd> Read for TerminalInput<Fd> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(rustix::io::read(&self.0, buf)?)
    }
}

/// Pulls one byte at a time from `input` and classifies it.
#[derive(Debug)]
pub struct KeyEventReader<R: Read> {
    input: R,
}

impl<R: Read> KeyEventReader<R> {
    #[must_use]
    pub fn new(input: R) -> Self { Self { input } }

    /// Read exactly one byte.
    ///
    /// Returns `Ok(None)` when the raw mode read timeout (100ms) elapses without input.
    /// A read that fails with `EAGAIN` or `EINTR` counts as a timeout too. `EINTR` only
    /// means a signal arrived mid read (eg: `SIGWINCH` on resize), no input was lost,
    /// so the caller just reads again.
    ///
    /// # Errors
    ///
    /// [`TerminalError::Read`] for any other failure. This is fatal.
    pub fn read_event(&mut self) -> Result<Option<KeyByte>, TerminalError> {
        let mut buffer = [0_u8; 1];
        match self.input.read(&mut buffer) {
            Ok(0) => {
                trace!("read timed out");
                Ok(None)
            }
            Ok(_) => {
                let [byte] = buffer;
                let it = KeyByte::classify(byte);
                trace!(?it, "read byte");
                Ok(Some(it))
            }
            Err(error)
                if matches!(error.kind(), ErrorKind::WouldBlock | ErrorKind::Interrupted) =>
            {
                trace!(%error, "read returned no data");
                Ok(None)
            }
            Err(source) => Err(TerminalError::Read { source }),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> R { self.input }
}
