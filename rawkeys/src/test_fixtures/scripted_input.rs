// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          io::{self, ErrorKind, Read}};

/// One canned result for [`ScriptedInput::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedRead {
    /// `read()` returns `Ok(0)`, like a raw mode read after `VTIME` elapses.
    Timeout,
    Byte(u8),
    Fail(ErrorKind),
}

/// A [`Read`] source that replays a script, one entry per call. Once the script runs
/// out it fails with [`ErrorKind::UnexpectedEof`], so a test that reads too far fails
/// loudly instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<ScriptedRead>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = ScriptedRead>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Entries not consumed yet.
    pub fn remaining(&self) -> usize { self.script.len() }
}

impl Read for ScriptedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.script.pop_front() {
            Some(ScriptedRead::Timeout) => Ok(0),
            Some(ScriptedRead::Byte(byte)) => match buf.first_mut() {
                Some(slot) => {
                    *slot = byte;
                    Ok(1)
                }
                None => Ok(0),
            },
            Some(ScriptedRead::Fail(kind)) => Err(io::Error::from(kind)),
            None => Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                "scripted input exhausted",
            )),
        }
    }
}
