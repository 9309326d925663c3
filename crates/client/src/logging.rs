//! Tracing setup for the demo binary.
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Logs go to stderr so toast output on stdout stays clean. When
/// `STREAMKIT_LOG_DIR` is set, logs are written to a daily-rolling file in
/// that directory instead; the returned guard must stay alive until exit so
/// buffered lines are flushed.
pub fn setup() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if let Ok(dir) = std::env::var("STREAMKIT_LOG_DIR") {
        let appender = tracing_appender::rolling::daily(dir, "streamkit.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        None
    }
}
