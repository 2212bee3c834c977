//! Optionlab CLI - Black-Scholes pricing and PnL surface workbench
//!
//! This is the operational entry point for the optionlab pricing library.
//!
//! # Commands
//!
//! - `optionlab price` - Price a European call/put pair with Greeks
//! - `optionlab surface` - Build, render, and persist PnL heatmaps
//! - `optionlab history` - List stored calculations and export CSV
//! - `optionlab clear` - Wipe the stored calculation history
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! pricing, risk, and store layers behind a unified command-line
//! interface. All numeric validation happens in those layers; the CLI
//! only collects parameters and renders results.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod render;

pub use error::{CliError, Result};

/// Optionlab pricing workbench CLI
#[derive(Parser)]
#[command(name = "optionlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optionlab.toml")]
    config: String,

    /// Calculation store file (overrides configuration)
    #[arg(long, global = true)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call/put pair with Greeks
    Price {
        /// Spot price (S)
        #[arg(short, long, default_value = "100.0")]
        spot: f64,

        /// Strike price (K)
        #[arg(short = 'k', long, default_value = "110.0")]
        strike: f64,

        /// Time to expiry in years (T)
        #[arg(short = 't', long, default_value = "0.5")]
        expiry: f64,

        /// Volatility (sigma)
        #[arg(short = 'o', long, default_value = "0.2")]
        volatility: f64,

        /// Risk-free rate (r)
        #[arg(short, long, default_value = "0.05")]
        rate: f64,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Build, render, and persist PnL heatmaps over spot x volatility
    Surface {
        /// Spot price (S), used for the default sweep bounds
        #[arg(short, long, default_value = "100.0")]
        spot: f64,

        /// Strike price (K)
        #[arg(short = 'k', long, default_value = "110.0")]
        strike: f64,

        /// Time to expiry in years (T)
        #[arg(short = 't', long, default_value = "0.5")]
        expiry: f64,

        /// Volatility (sigma), recorded with the inputs snapshot
        #[arg(short = 'o', long, default_value = "0.2")]
        volatility: f64,

        /// Risk-free rate (r)
        #[arg(short, long, default_value = "0.05")]
        rate: f64,

        /// Purchase price per contract
        #[arg(short, long, default_value = "5.0")]
        purchase_price: f64,

        /// Number of contracts
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Lower spot sweep bound (default 0.8 * spot)
        #[arg(long)]
        spot_min: Option<f64>,

        /// Upper spot sweep bound (default 1.2 * spot)
        #[arg(long)]
        spot_max: Option<f64>,

        /// Lower volatility sweep bound
        #[arg(long, default_value = "0.10")]
        vol_min: f64,

        /// Upper volatility sweep bound
        #[arg(long, default_value = "0.30")]
        vol_max: f64,

        /// Points per axis (overrides configuration)
        #[arg(long)]
        resolution: Option<usize>,

        /// Lower bound of the PnL color scale
        #[arg(long)]
        vmin: Option<f64>,

        /// Upper bound of the PnL color scale
        #[arg(long)]
        vmax: Option<f64>,

        /// Write a side-by-side HTML heatmap pair to this path
        #[arg(long)]
        html: Option<PathBuf>,

        /// Skip persisting this calculation
        #[arg(long)]
        no_store: bool,
    },

    /// List stored calculations and optionally export them as CSV
    History {
        /// Directory to write inputs.csv and heatmap_outputs.csv into
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },

    /// Wipe the stored calculation history
    Clear,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = config::Config::load(&cli.config)?;
    let store_path = cli
        .store_path
        .or_else(|| config.store.path.clone())
        .unwrap_or_else(|| PathBuf::from("optionlab_history.json"));

    match cli.command {
        Commands::Price {
            spot,
            strike,
            expiry,
            volatility,
            rate,
            format,
        } => commands::price::run(spot, strike, expiry, volatility, rate, &format),
        Commands::Surface {
            spot,
            strike,
            expiry,
            volatility,
            rate,
            purchase_price,
            quantity,
            spot_min,
            spot_max,
            vol_min,
            vol_max,
            resolution,
            vmin,
            vmax,
            html,
            no_store,
        } => commands::surface::run(commands::surface::SurfaceArgs {
            spot,
            strike,
            expiry,
            volatility,
            rate,
            purchase_price,
            quantity,
            spot_min,
            spot_max,
            vol_min,
            vol_max,
            resolution: resolution.or(config.surface.resolution),
            vmin: vmin.or(config.surface.vmin),
            vmax: vmax.or(config.surface.vmax),
            html,
            store_path: (!no_store).then_some(store_path),
        }),
        Commands::History { export_dir } => {
            commands::history::run(&store_path, export_dir.as_deref())
        }
        Commands::Clear => commands::clear::run(&store_path),
    }
}
