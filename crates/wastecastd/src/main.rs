//! wastecastd — the wastecast daemon.
//!
//! Loads the historical dataset once, then serves the prediction API until
//! interrupted. A one-shot `predict` subcommand runs the same estimate from
//! the command line.
//!
//! # Usage
//!
//! ```text
//! wastecastd serve --port 5000 --dataset data/history.csv
//! wastecastd predict --attendance 120 --menu-type veg
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use wastecast_core::{Config, Dataset, DatasetSource, Query};

const DEFAULT_LOG_FILTER: &str = "info,wastecastd=debug,wastecast=debug";

#[derive(Parser)]
#[command(name = "wastecastd", about = "Cafeteria food-waste prediction daemon", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API.
    Serve {
        /// Path to wastecast.toml.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to bind (overrides config).
        #[arg(long)]
        bind: Option<IpAddr>,

        /// Port to listen on (overrides config).
        #[arg(long)]
        port: Option<u16>,

        /// Historical dataset, .csv or .json (overrides config).
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Run a single prediction and print it as JSON.
    Predict {
        #[arg(long)]
        attendance: u32,

        #[arg(long)]
        menu_type: String,

        /// Historical dataset, .csv or .json. Defaults to the builtin table.
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            bind,
            port,
            dataset,
        } => {
            let mut config = match config {
                Some(path) => Config::from_file(&path)
                    .with_context(|| format!("reading config {}", path.display()))?,
                None => Config::default(),
            };
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if dataset.is_some() {
                config.dataset.path = dataset;
            }
            run_server(config).await
        }
        Command::Predict {
            attendance,
            menu_type,
            dataset,
        } => {
            let dataset = load_dataset(dataset.as_deref())?;
            let prediction = dataset.predict(&Query {
                attendance,
                menu_type,
            });
            println!("{}", serde_json::to_string_pretty(&prediction)?);
            Ok(())
        }
    }
}

fn load_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    let source = match path {
        Some(path) => DatasetSource::from_path(path)?,
        None => DatasetSource::Builtin,
    };
    Dataset::load(&source).with_context(|| format!("loading dataset {source:?}"))
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("wastecast daemon starting");

    let source = config.dataset_source()?;
    let dataset = Dataset::load(&source).with_context(|| format!("loading dataset {source:?}"))?;

    let router = wastecast_api::build_router(dataset);
    let addr = SocketAddr::new(config.server.bind, config.server.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "API server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("wastecast daemon stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
