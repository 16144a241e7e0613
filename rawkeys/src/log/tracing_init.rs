// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TracingConfig, WriterConfig, rolling_file_appender_impl};
use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install the global subscriber described by `options`. A disabled config is a no-op,
/// and the `tracing` macros stay silent.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    let Some(layer) = try_create_file_layer::<Registry>(&it)? else {
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, which is great for tests. Logging stops when the returned
/// guard is dropped.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    let Some(layer) = try_create_file_layer::<Registry>(&it)? else {
        return Ok(None);
    };

    Ok(Some(tracing_subscriber::registry().with(layer).set_default()))
}

/// This erases the concrete type of the writer, and returns a boxed layer. Returns
/// `None` when logging is disabled.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    if !tracing_config.is_enabled() {
        return Ok(None);
    }

    let WriterConfig::File(path) = &tracing_config.writer_config else {
        return Ok(None);
    };

    let file_appender = rolling_file_appender_impl::try_create(path)?;

    Ok(Some(Box::new(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(tracing_config.level_filter),
    )))
}
