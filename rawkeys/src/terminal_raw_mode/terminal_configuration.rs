// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Snapshot of a terminal's line discipline settings, and the derivation of the raw
//! configuration from the original one.

use rustix::termios::{ControlModes, InputModes, LocalModes, OutputModes, SpecialCodeIndex,
                      Termios};
use std::fmt::{Debug, Formatter};

/// `VMIN` in raw mode: a read may return with zero bytes.
pub const VMIN_RAW_MODE: u8 = 0;

/// `VTIME` in raw mode, in tenths of a second: a read returns after 100ms without
/// input.
pub const VTIME_RAW_MODE: u8 = 1;

/// Break condition handling, CR to NL translation, parity checking, high bit stripping,
/// and `Ctrl+S` / `Ctrl+Q` flow control.
pub const RAW_MODE_CLEARED_INPUT_MODES: InputModes = InputModes::BRKINT
    .union(InputModes::ICRNL)
    .union(InputModes::INPCK)
    .union(InputModes::ISTRIP)
    .union(InputModes::IXON);

/// NL to CR+NL translation (and every other output post processing step).
pub const RAW_MODE_CLEARED_OUTPUT_MODES: OutputModes = OutputModes::OPOST;

/// Echo, canonical (line buffered) input, extended input processing (`Ctrl+V`), and
/// `SIGINT` / `SIGTSTP` generation from `Ctrl+C` / `Ctrl+Z`.
pub const RAW_MODE_CLEARED_LOCAL_MODES: LocalModes = LocalModes::ECHO
    .union(LocalModes::ICANON)
    .union(LocalModes::IEXTEN)
    .union(LocalModes::ISIG);

/// Named control characters shown by [`TerminalConfiguration`]'s `Debug` output.
/// Equality covers the whole table, including slots without a name here.
const NAMED_SPECIAL_CODES: [(SpecialCodeIndex, &str); 16] = [
    (SpecialCodeIndex::VINTR, "VINTR"),
    (SpecialCodeIndex::VQUIT, "VQUIT"),
    (SpecialCodeIndex::VERASE, "VERASE"),
    (SpecialCodeIndex::VKILL, "VKILL"),
    (SpecialCodeIndex::VEOF, "VEOF"),
    (SpecialCodeIndex::VTIME, "VTIME"),
    (SpecialCodeIndex::VMIN, "VMIN"),
    (SpecialCodeIndex::VSTART, "VSTART"),
    (SpecialCodeIndex::VSTOP, "VSTOP"),
    (SpecialCodeIndex::VSUSP, "VSUSP"),
    (SpecialCodeIndex::VEOL, "VEOL"),
    (SpecialCodeIndex::VEOL2, "VEOL2"),
    (SpecialCodeIndex::VREPRINT, "VREPRINT"),
    (SpecialCodeIndex::VDISCARD, "VDISCARD"),
    (SpecialCodeIndex::VWERASE, "VWERASE"),
    (SpecialCodeIndex::VLNEXT, "VLNEXT"),
];

/// An opaque snapshot of a terminal's configuration (input, output, control and local
/// flags, plus the control character table).
///
/// Two instances play different roles:
/// - the *original* one is captured once by
///   [`crate::TerminalModeController::capture_original`] and never mutated;
/// - a *raw* one is produced by [`TerminalConfiguration::derive_raw`] every time raw
///   mode is enabled, always from the original, and is consumed by being applied.
#[derive(Clone)]
pub struct TerminalConfiguration {
    termios: Termios,
}

impl TerminalConfiguration {
    #[must_use]
    pub fn from_termios(termios: Termios) -> Self { Self { termios } }

    #[must_use]
    pub fn as_termios(&self) -> &Termios { &self.termios }

    /// Returns a new raw configuration. `self` is left untouched, so calling this on
    /// the original any number of times always yields the same result.
    #[must_use]
    pub fn derive_raw(&self) -> Self {
        let mut termios = self.termios.clone();

        termios.input_modes.remove(RAW_MODE_CLEARED_INPUT_MODES);
        termios.output_modes.remove(RAW_MODE_CLEARED_OUTPUT_MODES);
        termios.local_modes.remove(RAW_MODE_CLEARED_LOCAL_MODES);

        // 8 bits per byte.
        termios.control_modes.remove(ControlModes::CSIZE);
        termios.control_modes.insert(ControlModes::CS8);

        termios.special_codes[SpecialCodeIndex::VMIN] = VMIN_RAW_MODE;
        termios.special_codes[SpecialCodeIndex::VTIME] = VTIME_RAW_MODE;

        Self { termios }
    }

    /// Whether every raw mode flag and timing value is in effect.
    #[must_use]
    pub fn is_raw(&self) -> bool {
        let it = &self.termios;
        !it.input_modes.intersects(RAW_MODE_CLEARED_INPUT_MODES)
            && !it.output_modes.intersects(RAW_MODE_CLEARED_OUTPUT_MODES)
            && !it.local_modes.intersects(RAW_MODE_CLEARED_LOCAL_MODES)
            && it.control_modes & ControlModes::CSIZE == ControlModes::CS8
            && self.min_bytes() == VMIN_RAW_MODE
            && self.read_timeout_deciseconds() == VTIME_RAW_MODE
    }

    #[must_use]
    pub fn min_bytes(&self) -> u8 { self.termios.special_codes[SpecialCodeIndex::VMIN] }

    #[must_use]
    pub fn read_timeout_deciseconds(&self) -> u8 {
        self.termios.special_codes[SpecialCodeIndex::VTIME]
    }

    fn special_code_values(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        NAMED_SPECIAL_CODES
            .iter()
            .map(|(index, name)| (*name, self.termios.special_codes[*index]))
    }

    /// Every slot of the control character table. [`rustix::termios::SpecialCodes`]
    /// has no `PartialEq`, but its `Debug` output walks the whole array and renders each
    /// value distinctly.
    fn special_codes_table(&self) -> String { format!("{:?}", self.termios.special_codes) }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn line_discipline(&self) -> Option<u8> { Some(self.termios.line_discipline) }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    #[allow(clippy::unused_self)]
    fn line_discipline(&self) -> Option<u8> { None }
}

impl PartialEq for TerminalConfiguration {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = (&self.termios, &other.termios);
        lhs.input_modes == rhs.input_modes
            && lhs.output_modes == rhs.output_modes
            && lhs.control_modes == rhs.control_modes
            && lhs.local_modes == rhs.local_modes
            && lhs.input_speed() == rhs.input_speed()
            && lhs.output_speed() == rhs.output_speed()
            && self.line_discipline() == other.line_discipline()
            && self.special_codes_table() == other.special_codes_table()
    }
}

impl Eq for TerminalConfiguration {}

impl Debug for TerminalConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut it = f.debug_struct("TerminalConfiguration");
        it.field("input_modes", &self.termios.input_modes)
            .field("output_modes", &self.termios.output_modes)
            .field("control_modes", &self.termios.control_modes)
            .field("local_modes", &self.termios.local_modes)
            .field("input_speed", &self.termios.input_speed())
            .field("output_speed", &self.termios.output_speed());
        if let Some(line_discipline) = self.line_discipline() {
            it.field("line_discipline", &line_discipline);
        }
        for (name, value) in self.special_code_values() {
            it.field(name, &value);
        }
        it.finish()
    }
}
