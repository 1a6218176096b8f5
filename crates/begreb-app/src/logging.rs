use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "begreb=info";

pub enum LogTarget {
    Stderr,
    /// Directory receiving `begreb.log`
    File(PathBuf),
}

/// Install the global subscriber. Keep the guard alive until exit or file logs are lost.
pub fn init_logging(target: LogTarget) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
            Ok(None)
        }
        LogTarget::File(dir) => {
            let appender = tracing_appender::rolling::never(&dir, "begreb.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init()?;
            tracing::info!("Logging to {}", dir.join("begreb.log").display());
            Ok(Some(guard))
        }
    }
}
