//! Calculation record types.
//!
//! A record groups one parameter/position snapshot with the two PnL
//! surfaces computed from it, keyed by a generated identifier and a
//! UTC timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use optionlab_risk::{PnlSurface, PnlSurfaces, Position};

/// Snapshot of the pricing inputs of one calculation.
///
/// Plain data, mirroring what the input layer collected; the pricing
/// layer has already validated the domain by the time a record exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInputs {
    /// Spot price (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to expiry in years (T).
    pub expiry: f64,
    /// Volatility (σ).
    pub volatility: f64,
    /// Risk-free rate (r).
    pub rate: f64,
}

/// One persisted calculation: inputs, position, and both surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Generated record identifier.
    pub id: Uuid,
    /// UTC creation time.
    pub timestamp: DateTime<Utc>,
    /// Pricing inputs of this calculation.
    pub inputs: CalculationInputs,
    /// The position the surfaces were marked against.
    pub position: Position,
    /// PnL surface of the call option.
    pub call_surface: PnlSurface,
    /// PnL surface of the put option.
    pub put_surface: PnlSurface,
}

impl CalculationRecord {
    /// Creates a record with a fresh identifier and the current time.
    pub fn new(inputs: CalculationInputs, position: Position, surfaces: PnlSurfaces) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            inputs,
            position,
            call_surface: surfaces.call,
            put_surface: surfaces.put,
        }
    }

    /// Both surfaces of this record, in (call, put) order.
    pub fn surfaces(&self) -> [&PnlSurface; 2] {
        [&self.call_surface, &self.put_surface]
    }
}
