use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

/// Server logging: daily rolling file `<log_dir>/app.log`.
///
/// Keep the returned guard alive for the life of the process, dropping it
/// flushes and stops the background writer.
pub fn init_file_logging(log_dir: &str) -> WorkerGuard {
    let file_appender = rolling::daily(log_dir, "app.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    guard
}

/// CLI logging: warnings and errors only, on stderr, so stdout carries just
/// the command output.
pub fn init_cli_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .compact()
        .init();
}
