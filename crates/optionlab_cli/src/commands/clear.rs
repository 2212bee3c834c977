//! Clear command implementation.
//!
//! Clearing history is an explicit operation, never a startup side
//! effect: the store keeps appending until this command runs.

use std::path::Path;

use tracing::info;

use optionlab_store::CalculationStore;

use crate::Result;

/// Run the clear command
pub fn run(store_path: &Path) -> Result<()> {
    let mut store = CalculationStore::open(store_path)?;
    let dropped = store.len();
    store.clear()?;

    info!("Cleared {dropped} calculation(s) from {}", store_path.display());
    println!("Cleared {dropped} calculation(s)");

    Ok(())
}
