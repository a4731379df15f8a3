use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod chain_store;
mod config;
mod repo_store;
mod server;
mod sqlite_persistence;
mod summary;

use chain_store::{open_chain_store, ChainLayout};
use config::{AppConfig, CliConfig, FileConfig};
use repo_store::SqliteRepoStore;
use server::{run_server, RequestsLoggingLevel};
use summary::SummaryService;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory holding the SQLite database files.
    #[clap(long, value_parser = parse_path)]
    pub db_dir: Option<PathBuf>,

    /// Path to an optional TOML config file. Values in it override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Physical layout of the chain event store.
    #[clap(long, default_value = "flagged")]
    pub chain_layout: ChainLayout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        db_dir: cli_args.db_dir,
        port: cli_args.port,
        metrics_port: cli_args.metrics_port,
        logging_level: cli_args.logging_level,
        chain_layout: cli_args.chain_layout,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!(
        "Opening SQLite repository database at {:?}...",
        config.repos_db_path()
    );
    let repo_store = Arc::new(SqliteRepoStore::new(config.repos_db_path())?);

    info!(
        "Opening SQLite chain event database at {:?} (layout: {})...",
        config.chain_db_path(),
        config.chain_layout
    );
    let chain_store = open_chain_store(config.chain_layout, config.chain_db_path())?;

    info!("Initializing metrics...");
    server::metrics::init_metrics();
    server::metrics::init_repository_metrics(repo_store.repository_count());

    let summary_service = Arc::new(SummaryService::new(repo_store, chain_store));

    info!("Ready to serve at port {}!", config.port);
    info!("Metrics available at port {}!", config.metrics_port);
    run_server(
        summary_service,
        config.logging_level,
        config.port,
        config.metrics_port,
    )
    .await
}
