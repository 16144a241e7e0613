// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every way the terminal input layer can fail.
//!
//! All variants are fatal: they are reported once, the terminal is restored, and the
//! process exits with status 1. A read that times out is not an error at all, see
//! [`crate::KeyEventReader::read_event`].

use std::{fmt::{Display, Formatter},
          io};

/// Which configuration was being written to the terminal when `tcsetattr` failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigRole {
    /// Entering raw mode.
    Raw,
    /// Restoring the configuration captured at startup.
    Original,
}

impl Display for ConfigRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigRole::Raw => write!(f, "raw"),
            ConfigRole::Original => write!(f, "original"),
        }
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum TerminalError {
    #[error("🖥️ tcgetattr: could not query the terminal configuration")]
    #[diagnostic(
        code(rawkeys::terminal_query),
        help("standard input must be a terminal, it can't be a pipe or a file")
    )]
    Query {
        #[source]
        source: io::Error,
    },

    #[error("🔧 tcsetattr: could not apply the {role} terminal configuration")]
    #[diagnostic(
        code(rawkeys::terminal_config),
        help("if your shell looks broken after this, run `reset` or `stty sane`")
    )]
    Config {
        role: ConfigRole,
        #[source]
        source: io::Error,
    },

    #[error("⌨️ read: could not read a byte from standard input")]
    #[diagnostic(code(rawkeys::read))]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("📝 write: could not write a key event to standard output")]
    #[diagnostic(code(rawkeys::output))]
    Output {
        #[source]
        source: io::Error,
    },
}

impl TerminalError {
    pub fn config(role: ConfigRole, source: io::Error) -> Self {
        TerminalError::Config { role, source }
    }
}
