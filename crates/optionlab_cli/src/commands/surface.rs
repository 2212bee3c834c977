//! Surface command implementation.
//!
//! Builds the call/put PnL surfaces, renders them as terminal heatmaps
//! (and optionally an HTML figure), and persists the calculation.

use std::path::PathBuf;

use tracing::info;

use optionlab_risk::{
    build_pnl_surfaces, AxisRange, Position, SurfaceSpec, DEFAULT_RESOLUTION,
};
use optionlab_store::{CalculationInputs, CalculationRecord, CalculationStore};

use crate::render::{html, terminal, ColorRange};
use crate::Result;

/// Default PnL color scale bounds.
const DEFAULT_VMIN: f64 = -20.0;
const DEFAULT_VMAX: f64 = 20.0;

/// Collected arguments of the surface command.
pub struct SurfaceArgs {
    /// Spot price (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to expiry in years (T).
    pub expiry: f64,
    /// Volatility recorded with the inputs snapshot.
    pub volatility: f64,
    /// Risk-free rate (r).
    pub rate: f64,
    /// Purchase price per contract.
    pub purchase_price: f64,
    /// Number of contracts.
    pub quantity: u32,
    /// Lower spot sweep bound, defaulting to 0.8 * spot.
    pub spot_min: Option<f64>,
    /// Upper spot sweep bound, defaulting to 1.2 * spot.
    pub spot_max: Option<f64>,
    /// Lower volatility sweep bound.
    pub vol_min: f64,
    /// Upper volatility sweep bound.
    pub vol_max: f64,
    /// Points per axis.
    pub resolution: Option<usize>,
    /// Lower color scale bound.
    pub vmin: Option<f64>,
    /// Upper color scale bound.
    pub vmax: Option<f64>,
    /// Optional HTML output path.
    pub html: Option<PathBuf>,
    /// Store file, or `None` to skip persistence.
    pub store_path: Option<PathBuf>,
}

/// Run the surface command
pub fn run(args: SurfaceArgs) -> Result<()> {
    let spot_min = args.spot_min.unwrap_or(0.8 * args.spot);
    let spot_max = args.spot_max.unwrap_or(1.2 * args.spot);
    let resolution = args.resolution.unwrap_or(DEFAULT_RESOLUTION);
    let range = ColorRange::new(
        args.vmin.unwrap_or(DEFAULT_VMIN),
        args.vmax.unwrap_or(DEFAULT_VMAX),
    )?;

    info!(
        "Building {resolution}x{resolution} PnL surfaces: spot [{spot_min}, {spot_max}], vol [{}, {}]",
        args.vol_min, args.vol_max
    );

    let spec = SurfaceSpec::new(
        AxisRange::new(spot_min, spot_max)?,
        AxisRange::new(args.vol_min, args.vol_max)?,
        args.strike,
        args.expiry,
        args.rate,
    )
    .with_resolution(resolution);
    let position = Position::new(args.purchase_price, args.quantity)?;

    let surfaces = build_pnl_surfaces(&spec, &position)?;

    println!();
    print!("{}", terminal::render_surface(&surfaces.call, &range));
    println!();
    print!("{}", terminal::render_surface(&surfaces.put, &range));
    println!();
    print!("{}", terminal::render_legend(&range));

    if let Some(path) = &args.html {
        html::write_dual_heatmap(&surfaces.call, &surfaces.put, &range, path)?;
        info!("Wrote HTML heatmaps to {}", path.display());
    }

    if let Some(store_path) = &args.store_path {
        let mut store = CalculationStore::open(store_path)?;
        let record = CalculationRecord::new(
            CalculationInputs {
                spot: args.spot,
                strike: args.strike,
                expiry: args.expiry,
                volatility: args.volatility,
                rate: args.rate,
            },
            position,
            surfaces,
        );
        let id = store.insert(record)?;
        info!("Stored calculation {id} ({} on file)", store.len());
    }

    Ok(())
}
