// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

/// One byte read from the terminal, classified for display.
///
/// The control test is the C locale `iscntrl()`: bytes `0..=31` and `127`. Everything
/// else, including `128..=255`, is printable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyByte {
    /// Rendered as the decimal value alone, eg: `13`.
    Control(u8),
    /// Rendered as the decimal value and the character, eg: `97 ('a')`.
    Printable(u8),
}

impl KeyByte {
    #[must_use]
    pub fn classify(byte: u8) -> Self {
        if byte.is_ascii_control() {
            KeyByte::Control(byte)
        } else {
            KeyByte::Printable(byte)
        }
    }

    #[must_use]
    pub fn byte(self) -> u8 {
        match self {
            KeyByte::Control(it) | KeyByte::Printable(it) => it,
        }
    }

    #[must_use]
    pub fn is_control(self) -> bool { matches!(self, KeyByte::Control(_)) }
}

impl From<u8> for KeyByte {
    fn from(byte: u8) -> Self { KeyByte::classify(byte) }
}

impl Display for KeyByte {
    /// No line terminator, see [`crate::RAW_MODE_LINE_TERMINATOR`].
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            KeyByte::Control(byte) => write!(f, "{byte}"),
            KeyByte::Printable(byte) => write!(f, "{byte} ('{}')", char::from(byte)),
        }
    }
}
