use lambda_runtime::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

/// Installs the bunyan JSON subscriber for the whole lambda container.
///
/// The returned guard flushes the non-blocking writer on drop, so it must live as long as
/// the runtime loop.
pub fn init_tracing(verbose_log_mode: bool) -> Result<WorkerGuard, Error> {
    LogTracer::init()?;

    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking_writer);

    tracing_subscriber::registry()
        .with(level_filter(verbose_log_mode))
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(guard)
}

pub fn level_filter(verbose_log_mode: bool) -> LevelFilter {
    if verbose_log_mode {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}
