//! # optionlab_risk: Position PnL and PnL Surfaces
//!
//! ## Risk Layer Role
//!
//! optionlab_risk sits on top of the pricing layer and provides:
//! - `Position`: an option position with entry price and size (`position`)
//! - PnL surface generation over spot × volatility sweeps (`surface`)
//! - Error types: `PositionError`, `SurfaceError` (`error`)
//!
//! Surface generation orchestrates the closed-form pricing engine over a
//! rectangular parameter sweep: each cell of the resulting matrix is the
//! position PnL at one (volatility, spot) pair. Rows are independent and
//! computed in parallel with rayon; a failure in any cell aborts the whole
//! build so a partially-filled surface is never returned.
//!
//! ## Usage Examples
//!
//! ```rust
//! use optionlab_risk::{build_pnl_surfaces, AxisRange, Position, SurfaceSpec};
//!
//! let spec = SurfaceSpec::new(
//!     AxisRange::new(80.0, 120.0).unwrap(),
//!     AxisRange::new(0.10, 0.30).unwrap(),
//!     110.0, // strike
//!     0.5,   // expiry
//!     0.05,  // rate
//! );
//! let position = Position::new(5.0, 1).unwrap();
//!
//! let surfaces = build_pnl_surfaces(&spec, &position).unwrap();
//! assert_eq!(surfaces.call.values().len(), 20);
//! assert_eq!(surfaces.put.values()[0].len(), 20);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod position;
pub mod surface;

pub use error::{PositionError, SurfaceError};
pub use position::Position;
pub use surface::{build_pnl_surfaces, AxisRange, PnlSurface, PnlSurfaces, SurfaceSpec};
pub use surface::DEFAULT_RESOLUTION;
