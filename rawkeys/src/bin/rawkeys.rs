// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use rawkeys::{CliArg, KeyEventReader, LoopStats, RawModeGuard, TerminalError,
              TerminalInput, TerminalModeController, run_event_loop,
              setup_default_miette_global_report_handler, try_initialize_logging_global};
use std::io;
use tracing::{error, info};

const REPORT_FOOTER: &str = "If your shell looks broken, type `reset` and press Enter.";

/// Exit status is 0 after the quit key, and 1 (with a report on stderr) after any fatal
/// error. The terminal is restored before the report is printed.
fn main() -> miette::Result<()> {
    let cli_arg = CliArg::parse();
    setup_default_miette_global_report_handler(REPORT_FOOTER);
    try_initialize_logging_global(&cli_arg)?;

    let stats = run_app().inspect_err(|error| error!(?error, "fatal error"))?;
    info!(?stats, "exiting");

    Ok(())
}

/// Everything between capturing the original configuration and restoring it. Fatal
/// errors leave through `?`, dropping the guard (which restores the terminal) on the
/// way out.
fn run_app() -> Result<LoopStats, TerminalError> {
    let mut controller = TerminalModeController::stdin();
    let guard = RawModeGuard::new(&mut controller)?;

    let mut reader = KeyEventReader::new(TerminalInput::stdin());
    let stats = run_event_loop(&mut reader, &mut io::stdout().lock())?;

    guard.restore()?;
    Ok(stats)
}
