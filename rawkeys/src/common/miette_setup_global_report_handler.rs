// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configures how a fatal [`crate::TerminalError`] is printed when it reaches the
//! top-level handler in `main() -> miette::Result<_>`.
//!
//! The [`miette::ErrorHook`] is lazily evaluated: it runs only when a report is
//! actually displayed. By that time the [`crate::RawModeGuard`] has already restored
//! the terminal, so the report is rendered with normal output processing (newlines
//! translated to carriage return + newline).

use miette::MietteHandlerOpts;
use rustix::termios;
use tracing::debug;

pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Register the global miette hook. Calling this more than once keeps the first hook.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = get_stderr_width().unwrap_or(DEFAULT_REPORT_WIDTH);
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}

/// Column count of the terminal attached to stderr, if there is one.
fn get_stderr_width() -> Option<usize> {
    let stderr = std::io::stderr();
    let winsize = termios::tcgetwinsize(&stderr).ok()?;
    match winsize.ws_col {
        0 => None,
        columns => Some(usize::from(columns)),
    }
}
