// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_LOG_FILE_NAME, TracingConfig};
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "rawkeys")]
#[command(
    about = "⌨️ Put the terminal in raw mode and print every key you press.\nPress `q` to quit."
)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
pub struct CliArg {
    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file (`log.txt` unless --log-file is given) for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "File to write the log to, when logging is enabled."
    )]
    pub log_file: PathBuf,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "Most verbose level to keep in the log."
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl From<&CliArg> for TracingConfig {
    fn from(cli_arg: &CliArg) -> Self {
        let options = &cli_arg.global_options;
        if options.enable_logging {
            TracingConfig::new_file(options.log_file.clone(), options.log_level.into())
        } else {
            TracingConfig::default()
        }
    }
}
