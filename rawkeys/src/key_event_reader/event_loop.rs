// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{KeyByte, KeyEventReader};
use crate::TerminalError;
use std::io::{Read, Write};
use tracing::{info, trace};

/// Reading this byte ends the event loop. A placeholder, there is no key binding scheme.
pub const QUIT_KEY: u8 = b'q';

/// Output post processing is off in raw mode, so a bare `\n` would leave the cursor in
/// its column.
pub const RAW_MODE_LINE_TERMINATOR: &str = "\r\n";

/// What happened between entering and leaving the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Reads that returned without a byte.
    pub timeouts: usize,
    /// Bytes printed (the quit byte is not counted).
    pub bytes: usize,
}

/// Read and print key events until [`QUIT_KEY`] arrives.
///
/// The loop has two states: READING (this function is running) and DONE (it returned).
/// Each iteration issues exactly one read. A timeout prints nothing and loops again,
/// which is where periodic work like a screen refresh would go. No read is attempted
/// after the quit byte.
///
/// # Errors
///
/// Returns the first fatal error ([`TerminalError::Read`] or
/// [`TerminalError::Output`]). The caller is expected to propagate it to `main` with
/// `?` so that the [`crate::RawModeGuard`] restores the terminal on the way out.
pub fn run_event_loop<R: Read, W: Write>(
    reader: &mut KeyEventReader<R>,
    output: &mut W,
) -> Result<LoopStats, TerminalError> {
    let mut stats = LoopStats::default();

    loop {
        let Some(key_byte) = reader.read_event()? else {
            stats.timeouts += 1;
            continue;
        };

        if key_byte.byte() == QUIT_KEY {
            info!(?stats, "quit key pressed");
            return Ok(stats);
        }

        print_key_byte(output, key_byte)
            .map_err(|source| TerminalError::Output { source })?;
        stats.bytes += 1;
        trace!(?key_byte, "printed");
    }
}

fn print_key_byte(output: &mut impl Write, key_byte: KeyByte) -> std::io::Result<()> {
    write!(output, "{key_byte}{RAW_MODE_LINE_TERMINATOR}")?;
    output.flush()
}
