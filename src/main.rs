use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use lodestar::config::Config;
use lodestar::output;
use lodestar::pipeline::{self, Thresholds};
use lodestar::store::FeatureStore;

/// Lodestar: feature prioritization dashboard.
///
/// Loads the precomputed cluster and feedback tables, filters clusters by
/// score, average NPS, and frequency thresholds, and shows the ranked
/// result with example quotes — in the terminal or in a web dashboard.
#[derive(Parser)]
#[command(name = "lodestar", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the filtered, ranked feature list in the terminal
    Show {
        /// Only include clusters at or above this score
        #[arg(long)]
        min_score: Option<f64>,

        /// Only include clusters at or above this average NPS
        #[arg(long)]
        min_nps: Option<f64>,

        /// Only include clusters with at least this many mentions
        #[arg(long)]
        min_freq: Option<u32>,
    },

    /// Export the filtered, ranked cluster table as CSV
    Export {
        /// Only include clusters at or above this score
        #[arg(long)]
        min_score: Option<f64>,

        /// Only include clusters at or above this average NPS
        #[arg(long)]
        min_nps: Option<f64>,

        /// Only include clusters with at least this many mentions
        #[arg(long)]
        min_freq: Option<u32>,

        /// Output path (default: output/prioritized_features_filtered.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Start the web dashboard
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },

    /// Show dataset status (row counts, filter ranges)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lodestar=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            min_score,
            min_nps,
            min_freq,
        } => {
            let config = Config::load()?;
            let store = FeatureStore::load(&config)?;
            let thresholds = resolve_thresholds(&store, min_score, min_nps, min_freq);
            let view = pipeline::build_view(&store, &thresholds);
            output::terminal::display_feature_list(&view, &thresholds);
        }

        Commands::Export {
            min_score,
            min_nps,
            min_freq,
            output: out_path,
        } => {
            let config = Config::load()?;
            let store = FeatureStore::load(&config)?;
            let thresholds = resolve_thresholds(&store, min_score, min_nps, min_freq);
            let view = pipeline::build_view(&store, &thresholds);

            if view.is_empty() {
                println!(
                    "{}",
                    "No clusters match the current thresholds; exporting header only.".yellow()
                );
            }

            let path = out_path
                .unwrap_or_else(|| PathBuf::from("output").join(output::csv::EXPORT_FILENAME));
            let written = output::csv::write_file(&view.clusters(), &path)?;
            println!(
                "{}",
                format!("Exported {} clusters to: {written}", view.features.len()).bold()
            );
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let store = std::sync::Arc::new(FeatureStore::load(&config)?);
            lodestar::web::run_server(store, port, &bind).await?;
        }

        Commands::Status => {
            let config = Config::load()?;
            let store = FeatureStore::load(&config)?;
            lodestar::status::show(&store, &config);
        }
    }

    Ok(())
}

/// Fill unspecified thresholds with the data-derived floor so a bare
/// `lodestar show` displays everything.
fn resolve_thresholds(
    store: &FeatureStore,
    min_score: Option<f64>,
    min_nps: Option<f64>,
    min_freq: Option<u32>,
) -> Thresholds {
    let floor = Thresholds::floor(store.bounds());
    Thresholds {
        min_score: min_score.unwrap_or(floor.min_score),
        min_nps: min_nps.unwrap_or(floor.min_nps),
        min_freq: min_freq.unwrap_or(floor.min_freq),
    }
}
