use std::{fs::File, path::Path};

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::{NonBlockingBuilder, WorkerGuard};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// An explicit level wins over `RUST_LOG`, which in turn defaults to WARN.
fn env_filter(level: Option<LevelFilter>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy(""),
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy(),
    }
}

/// Install the global subscriber.
///
/// Human readable lines go to stderr so they never mix with checksums on stdout. With a
/// `log_path`, every event is also written there as JSON; the returned guard flushes that
/// file when dropped and has to be held until the program exits.
pub fn setup_logging(
    log_path: Option<&Path>,
    level: Option<LevelFilter>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(env_filter(level));

    let Some(log_path) = log_path else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    };

    let log_file = File::create(log_path)
        .with_context(|| format!("Failed to create log file '{}'", log_path.display()))?;
    let (file_writer, guard) = NonBlockingBuilder::default().lossy(false).finish(log_file);

    let file_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(file_writer);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!(path = %log_path.display(), "Writing JSON log");

    Ok(Some(guard))
}
