use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up the logging configuration for the application.
///
/// Two layers: one logging to stdout, one to a daily rotating file under
/// `logs/`. Levels are controlled by `RUST_LOG`; when unset, everything
/// defaults to `info` with `debug` for the cointap crates themselves.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "cointap.log");
    let (non_blocking_file, _guard_file) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let default_filter = "info,cointap=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The appender guard must stay alive for the whole process, so leak it.
    std::mem::forget(_guard_file);
}
