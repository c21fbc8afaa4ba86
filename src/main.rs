use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
use catalog::{load_catalog, FEATURE_COUNT};

mod error;
mod features;

mod recommend;
use recommend::Recommender;

mod server;
use server::{run_server, RequestsLoggingLevel};

mod similarity;

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
    /// Path to the catalog CSV file with song metadata and audio features.
    #[clap(value_parser = parse_path)]
    pub catalog_csv: PathBuf,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Number of recommendations returned when the caller does not pass `k`.
    #[clap(long, default_value_t = 5)]
    pub default_k: usize,

    /// Upper bound on the caller-supplied `k`.
    #[clap(long, default_value_t = 50)]
    pub max_k: usize,
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

    info!("Loading catalog from {:?}...", cli_args.catalog_csv);
    let catalog = Arc::new(load_catalog(&cli_args.catalog_csv)?);

    info!(
        "Fitting recommender over {} songs, {} features...",
        catalog.len(),
        FEATURE_COUNT
    );
    let recommender = Arc::new(Recommender::fit(catalog)?);

    info!("Ready to serve at port {}!", cli_args.port);
    run_server(
        recommender,
        cli_args.logging_level,
        cli_args.port,
        cli_args.catalog_csv,
        cli_args.default_k,
        cli_args.max_k,
    )
    .await
}
