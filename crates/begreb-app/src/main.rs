use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use begreb_client::HttpLookupClient;
use begreb_config::{Config, ResponseOrdering};
use clap::{Parser, Subcommand};

pub mod controller;
pub mod events;
pub mod logging;
pub mod lookup;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::logging::{LogTarget, init_logging};
use self::state::AppState;

/// Debounced English/Danish term lookup
#[derive(Parser, Debug)]
#[command(name = "begreb", version)]
struct Cli {
    /// JSON config profile; BEGREB_* environment variables apply when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Lookup service URL
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Quiet period before a query is sent
    #[arg(long, global = true)]
    debounce_ms: Option<u64>,

    /// Queries shorter than this are not sent
    #[arg(long, global = true)]
    min_query_len: Option<usize>,

    /// last-resolved or latest-issued
    #[arg(long, global = true)]
    ordering: Option<ResponseOrdering>,

    /// Where the desktop window writes begreb.log
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one query right away and print the results
    Lookup { query: String },
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::new(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.network.endpoint = endpoint.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
        if let Some(min_query_len) = self.min_query_len {
            config.search.min_query_len = min_query_len;
        }
        if let Some(ordering) = self.ordering {
            config.search.ordering = ordering;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    match cli.command {
        Some(Command::Lookup { query }) => {
            let _guard = init_logging(LogTarget::Stderr)?;
            run_lookup(config, &query)
        }
        None => {
            let log_dir = cli.log_dir.unwrap_or_else(std::env::temp_dir);
            let _guard = init_logging(LogTarget::File(log_dir))?;
            run_desktop(config)
        }
    }
}

fn run_lookup(config: Config, query: &str) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = HttpLookupClient::new(config.network.endpoint.clone());
    let pretty = atty::is(atty::Stream::Stdout);

    runtime.block_on(lookup::run_lookup(
        &client,
        config.search.min_query_len,
        query,
        &mut io::stdout().lock(),
        pretty,
    ))
}

/// Backend on a Tokio runtime, window on the main thread
fn run_desktop(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("begreb-backend")
        .build()?;

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state.clone());

    let mut tasks = {
        let _enter = runtime.enter();
        controller.spawn_tasks()
    };

    let ui_result = begreb_ui::ui_loop(&state.config.ui, state.field.clone(), controller.ui_bridge());

    tracing::info!("Window closed, shutting down");
    controller.shutdown();

    runtime.block_on(async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!("backend task failed: {e}"),
                Err(e) => tracing::error!("backend task panicked: {e}"),
            }
        }
    });

    ui_result
}
