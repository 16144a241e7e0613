// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In-process PTY pairs, for tests that need a real line discipline without spawning a
//! child process.

use rustix::pty::{self, OpenptFlags};
use std::{ffi::OsStr,
          fs::{File, OpenOptions},
          os::unix::ffi::OsStrExt};

/// Keep both ends alive for the whole test. Closing the master hangs up the slave.
#[derive(Debug)]
pub struct PtyPair {
    /// Write here to "type" into the slave.
    pub master: File,
    /// The terminal under test: configure it, and read key events from it.
    pub slave: File,
}

/// Open a fresh PTY pair. The slave starts in the kernel's default cooked mode.
///
/// # Panics
///
/// Panics if the system is out of PTYs.
pub fn open_pty_pair() -> PtyPair {
    let master = pty::openpt(OpenptFlags::RDWR | OpenptFlags::NOCTTY)
        .expect("Failed to open PTY master");
    pty::grantpt(&master).expect("Failed to grant PTY");
    pty::unlockpt(&master).expect("Failed to unlock PTY");

    let slave_path = pty::ptsname(&master, Vec::new()).expect("Failed to get PTY name");
    let slave = OpenOptions::new()
        .read(true)
        .write(true)
        .open(OsStr::from_bytes(slave_path.as_bytes()))
        .expect("Failed to open PTY slave");

    PtyPair {
        master: File::from(master),
        slave,
    }
}
