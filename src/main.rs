//! Meadowlark - Tour catalogue API with content-negotiated listings

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meadowlark::api::{self, AppState};
use meadowlark::config::Config;
use meadowlark::representation::Representation;
use meadowlark::store::TourStore;

#[derive(Parser)]
#[command(name = "meadowlark")]
#[command(about = "Tour catalogue API with content-negotiated listings")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the seeded tour catalogue
    List {
        /// Output representation
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Xml,
    Text,
}

impl From<Format> for Representation {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => Representation::Json,
            Format::Xml => Representation::ApplicationXml,
            Format::Text => Representation::PlainText,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("meadowlark={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    // Load config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_env_overrides()?;

    match cli.command {
        Commands::Serve { port } => {
            let mut config = config;
            if let Some(port) = port {
                config.http_port = port;
            }

            let state = AppState::from_config(&config)?;
            tracing::info!("Seeded catalogue with {} tours", state.store.len().await);

            let router = api::create_router(state);
            let address = config.listen_address();
            let listener = tokio::net::TcpListener::bind(&address).await?;

            tracing::info!("Starting HTTP server on {}", address);
            println!("Meadowlark running at http://localhost:{}", config.http_port);
            println!("  Tours:    http://localhost:{}/api/tours", config.http_port);
            println!("  API Docs: http://localhost:{}/api/docs", config.http_port);
            println!("  Health:   http://localhost:{}/health", config.http_port);

            axum::serve(listener, router).await?;
        }

        Commands::List { format } => {
            let store = TourStore::new(config.tours)?;
            if store.is_empty().await {
                println!("No tours configured");
            } else {
                let tours = store.list().await;
                println!("{}", Representation::from(format).render(&tours));
            }
        }
    }

    Ok(())
}
