//! # optionlab_store: Calculation Persistence
//!
//! ## Infra Layer Role
//!
//! optionlab_store owns the calculation history:
//! - `CalculationRecord`: one pricing request snapshot with both PnL
//!   surfaces, keyed by a generated identifier and timestamp (`record`)
//! - `CalculationStore`: an explicitly passed, lifecycle-scoped store
//!   handle backed by a JSON file or plain memory (`store`)
//! - CSV export of inputs and per-cell surface values (`export`)
//!
//! The store is never an implicit singleton: callers open a handle,
//! insert into it, and clear it explicitly. History is append-only
//! across process runs until a caller asks for a clear.
//!
//! ## Usage Examples
//!
//! ```rust
//! use optionlab_risk::{build_pnl_surfaces, AxisRange, Position, SurfaceSpec};
//! use optionlab_store::{CalculationInputs, CalculationRecord, CalculationStore};
//!
//! let spec = SurfaceSpec::new(
//!     AxisRange::new(80.0, 120.0).unwrap(),
//!     AxisRange::new(0.10, 0.30).unwrap(),
//!     110.0,
//!     0.5,
//!     0.05,
//! );
//! let position = Position::new(5.0, 1).unwrap();
//! let surfaces = build_pnl_surfaces(&spec, &position).unwrap();
//!
//! let mut store = CalculationStore::in_memory();
//! let inputs = CalculationInputs {
//!     spot: 100.0,
//!     strike: 110.0,
//!     expiry: 0.5,
//!     volatility: 0.2,
//!     rate: 0.05,
//! };
//! let id = store.insert(CalculationRecord::new(inputs, position, surfaces)).unwrap();
//! assert!(store.get(&id).is_ok());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod export;
pub mod record;
pub mod store;

pub use error::StoreError;
pub use export::{write_inputs_csv, write_surface_csv};
pub use record::{CalculationInputs, CalculationRecord};
pub use store::CalculationStore;
