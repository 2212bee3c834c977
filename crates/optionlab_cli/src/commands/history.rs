//! History command implementation.
//!
//! Lists stored calculations and optionally exports the two CSV
//! layouts (inputs and per-cell surface values) into a directory.

use std::fs::File;
use std::path::Path;

use tracing::info;

use optionlab_store::{write_inputs_csv, write_surface_csv, CalculationStore};

use crate::Result;

/// Run the history command
pub fn run(store_path: &Path, export_dir: Option<&Path>) -> Result<()> {
    let store = CalculationStore::open(store_path)?;

    if store.is_empty() {
        println!("No stored calculations in {}", store_path.display());
        return Ok(());
    }

    println!("\n┌──────────┬──────────────────────┬────────┬────────┬───────┬───────┬───────┬──────────┬─────┐");
    println!("│ id       │ timestamp            │ spot   │ strike │ T     │ σ     │ r     │ purchase │ qty │");
    println!("├──────────┼──────────────────────┼────────┼────────┼───────┼───────┼───────┼──────────┼─────┤");
    for record in store.records() {
        let id = record.id.to_string();
        println!(
            "│ {:<8} │ {:<20} │ {:>6.2} │ {:>6.2} │ {:>5.2} │ {:>5.2} │ {:>5.2} │ {:>8.2} │ {:>3} │",
            &id[..8],
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.inputs.spot,
            record.inputs.strike,
            record.inputs.expiry,
            record.inputs.volatility,
            record.inputs.rate,
            record.position.purchase_price(),
            record.position.quantity(),
        );
    }
    println!("└──────────┴──────────────────────┴────────┴────────┴───────┴───────┴───────┴──────────┴─────┘");
    println!("{} calculation(s)", store.len());

    if let Some(dir) = export_dir {
        std::fs::create_dir_all(dir)?;

        let inputs_path = dir.join("inputs.csv");
        write_inputs_csv(store.records(), File::create(&inputs_path)?)?;

        let surface_path = dir.join("heatmap_outputs.csv");
        write_surface_csv(store.records(), File::create(&surface_path)?)?;

        info!(
            "Exported {} and {}",
            inputs_path.display(),
            surface_path.display()
        );
    }

    Ok(())
}
