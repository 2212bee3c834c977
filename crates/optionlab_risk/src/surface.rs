//! PnL surface generation over spot × volatility sweeps.
//!
//! This module provides:
//! - `AxisRange`: validated sweep bounds
//! - `SurfaceSpec`: the full sweep specification
//! - `PnlSurface` / `PnlSurfaces`: the resulting matrices
//! - `build_pnl_surfaces`: the sweep itself
//!
//! The matrix convention is row-major by volatility: `values[i][j]` is
//! the PnL at `(vol_axis[i], spot_axis[j])`. This is the layout the
//! heatmap renderers expect, with spot on the x axis and volatility on
//! the y axis.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use optionlab_models::analytical::BlackScholes;
use optionlab_models::instruments::{OptionContract, OptionType};

use crate::error::SurfaceError;
use crate::position::Position;

/// Default number of points per axis.
pub const DEFAULT_RESOLUTION: usize = 20;

/// A validated half-open sweep range with `min < max`.
///
/// # Examples
/// ```
/// use optionlab_risk::AxisRange;
///
/// let range = AxisRange::new(80.0, 120.0).unwrap();
/// assert_eq!(range.min(), 80.0);
/// assert_eq!(range.max(), 120.0);
///
/// // Inverted and single-point ranges are rejected
/// assert!(AxisRange::new(120.0, 80.0).is_err());
/// assert!(AxisRange::new(80.0, 80.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// - `SurfaceError::DegenerateRange` if `min >= max`
    pub fn new(min: f64, max: f64) -> Result<Self, SurfaceError> {
        if min >= max {
            return Err(SurfaceError::DegenerateRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Evenly spaced values across the range, endpoints included.
    ///
    /// The first element is exactly `min` and the last exactly `max`;
    /// interior points are linearly interpolated.
    ///
    /// # Errors
    /// - `SurfaceError::InvalidResolution` if `resolution < 2`
    pub fn axis(&self, resolution: usize) -> Result<Vec<f64>, SurfaceError> {
        if resolution < 2 {
            return Err(SurfaceError::InvalidResolution { resolution });
        }
        let step = (self.max - self.min) / (resolution - 1) as f64;
        Ok((0..resolution)
            .map(|i| {
                if i == resolution - 1 {
                    // Assign the endpoint exactly; min + step*(n-1) can
                    // land one ulp off the bound.
                    self.max
                } else {
                    self.min + step * i as f64
                }
            })
            .collect())
    }
}

/// Specification of a spot × volatility PnL sweep.
///
/// Strike, expiry, and rate are held fixed while spot and volatility
/// run over their ranges. Resolution applies to both axes and defaults
/// to [`DEFAULT_RESOLUTION`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    /// Spot price sweep bounds.
    pub spot_range: AxisRange,
    /// Volatility sweep bounds.
    pub vol_range: AxisRange,
    /// Strike price held fixed across the sweep.
    pub strike: f64,
    /// Time to expiry in years, held fixed.
    pub expiry: f64,
    /// Risk-free rate, held fixed.
    pub rate: f64,
    /// Number of points per axis.
    pub resolution: usize,
}

impl SurfaceSpec {
    /// Creates a spec with the default resolution.
    pub fn new(
        spot_range: AxisRange,
        vol_range: AxisRange,
        strike: f64,
        expiry: f64,
        rate: f64,
    ) -> Self {
        Self {
            spot_range,
            vol_range,
            strike,
            expiry,
            rate,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Overrides the per-axis resolution.
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }
}

/// A PnL surface for one option type.
///
/// Immutable once built: `values[i][j]` is the position PnL at
/// `(vol_axis[i], spot_axis[j])`. Both axes are ascending and share the
/// same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlSurface {
    option_type: OptionType,
    spot_axis: Vec<f64>,
    vol_axis: Vec<f64>,
    values: Vec<Vec<f64>>,
}

impl PnlSurface {
    /// Returns the option type this surface was priced for.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the ascending spot axis.
    #[inline]
    pub fn spot_axis(&self) -> &[f64] {
        &self.spot_axis
    }

    /// Returns the ascending volatility axis.
    #[inline]
    pub fn vol_axis(&self) -> &[f64] {
        &self.vol_axis
    }

    /// Returns the PnL matrix, row-major by volatility.
    #[inline]
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// PnL at volatility index `i` and spot index `j`.
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Smallest PnL on the surface.
    pub fn min_value(&self) -> f64 {
        self.values
            .iter()
            .flatten()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest PnL on the surface.
    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .flatten()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// The call and put surfaces of one sweep, sharing axes and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlSurfaces {
    /// PnL surface of the call option.
    pub call: PnlSurface,
    /// PnL surface of the put option.
    pub put: PnlSurface,
}

/// Builds call and put PnL surfaces for the given sweep and position.
///
/// For every `(vol_axis[i], spot_axis[j])` pair the closed-form price
/// of each option type is computed and marked against the position.
/// O(resolution²) price evaluations per option type; volatility rows
/// are computed in parallel and written to disjoint slots.
///
/// # Errors
/// - `SurfaceError::InvalidResolution` if the spec resolution is < 2
/// - `SurfaceError::Pricing` if any cell violates the pricing domain
///   (e.g. a spot range reaching into non-positive prices); the whole
///   build is aborted rather than returning a partial surface
///
/// # Examples
/// ```
/// use optionlab_risk::{build_pnl_surfaces, AxisRange, Position, SurfaceSpec};
///
/// let spec = SurfaceSpec::new(
///     AxisRange::new(80.0, 120.0).unwrap(),
///     AxisRange::new(0.10, 0.30).unwrap(),
///     110.0,
///     0.5,
///     0.05,
/// )
/// .with_resolution(10);
/// let surfaces = build_pnl_surfaces(&spec, &Position::new(5.0, 1).unwrap()).unwrap();
///
/// assert_eq!(surfaces.call.spot_axis().first(), Some(&80.0));
/// assert_eq!(surfaces.put.vol_axis().last(), Some(&0.30));
/// ```
pub fn build_pnl_surfaces(
    spec: &SurfaceSpec,
    position: &Position,
) -> Result<PnlSurfaces, SurfaceError> {
    let contract = OptionContract::new(spec.strike, spec.expiry)?;
    let spot_axis = spec.spot_range.axis(spec.resolution)?;
    let vol_axis = spec.vol_range.axis(spec.resolution)?;

    // Each row touches only its own slots; pricing is pure, so rows
    // parallelise without shared state.
    let rows: Vec<(Vec<f64>, Vec<f64>)> = vol_axis
        .par_iter()
        .map(|&vol| -> Result<(Vec<f64>, Vec<f64>), SurfaceError> {
            let mut call_row = Vec::with_capacity(spot_axis.len());
            let mut put_row = Vec::with_capacity(spot_axis.len());
            for &spot in &spot_axis {
                let model = BlackScholes::new(spot, spec.rate, vol)?;
                call_row.push(position.pnl(model.price_call(&contract)));
                put_row.push(position.pnl(model.price_put(&contract)));
            }
            Ok((call_row, put_row))
        })
        .collect::<Result<_, _>>()?;

    let (call_values, put_values): (Vec<Vec<f64>>, Vec<Vec<f64>>) = rows.into_iter().unzip();

    Ok(PnlSurfaces {
        call: PnlSurface {
            option_type: OptionType::Call,
            spot_axis: spot_axis.clone(),
            vol_axis: vol_axis.clone(),
            values: call_values,
        },
        put: PnlSurface {
            option_type: OptionType::Put,
            spot_axis,
            vol_axis,
            values: put_values,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec() -> SurfaceSpec {
        SurfaceSpec::new(
            AxisRange::new(80.0, 120.0).unwrap(),
            AxisRange::new(0.10, 0.30).unwrap(),
            110.0,
            0.5,
            0.05,
        )
    }

    fn position() -> Position {
        Position::new(5.0, 1).unwrap()
    }

    // ==========================================================
    // AxisRange Tests
    // ==========================================================

    #[test]
    fn test_range_valid() {
        let range = AxisRange::new(0.1, 0.3).unwrap();
        assert_eq!(range.min(), 0.1);
        assert_eq!(range.max(), 0.3);
    }

    #[test]
    fn test_range_inverted_rejected() {
        assert!(matches!(
            AxisRange::new(0.3, 0.1),
            Err(SurfaceError::DegenerateRange { min, max }) if min == 0.3 && max == 0.1
        ));
    }

    #[test]
    fn test_range_single_point_rejected() {
        assert!(AxisRange::new(1.0, 1.0).is_err());
    }

    #[test]
    fn test_axis_endpoints_exact() {
        let axis = AxisRange::new(0.1, 0.3).unwrap().axis(20).unwrap();
        assert_eq!(axis.len(), 20);
        assert_eq!(axis[0], 0.1);
        assert_eq!(axis[19], 0.3);
    }

    #[test]
    fn test_axis_evenly_spaced_ascending() {
        let axis = AxisRange::new(0.0, 1.0).unwrap().axis(5).unwrap();
        assert_eq!(axis, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        for pair in axis.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_axis_resolution_two_is_just_bounds() {
        let axis = AxisRange::new(80.0, 120.0).unwrap().axis(2).unwrap();
        assert_eq!(axis, vec![80.0, 120.0]);
    }

    #[test]
    fn test_axis_low_resolution_rejected() {
        let range = AxisRange::new(0.0, 1.0).unwrap();
        assert!(matches!(
            range.axis(1),
            Err(SurfaceError::InvalidResolution { resolution: 1 })
        ));
        assert!(range.axis(0).is_err());
    }

    // ==========================================================
    // Surface Shape Tests
    // ==========================================================

    #[test]
    fn test_surface_shape_default_resolution() {
        let surfaces = build_pnl_surfaces(&spec(), &position()).unwrap();
        for surface in [&surfaces.call, &surfaces.put] {
            assert_eq!(surface.values().len(), 20);
            for row in surface.values() {
                assert_eq!(row.len(), 20);
            }
            assert_eq!(surface.spot_axis()[0], 80.0);
            assert_eq!(surface.spot_axis()[19], 120.0);
            assert_eq!(surface.vol_axis()[0], 0.10);
            assert_eq!(surface.vol_axis()[19], 0.30);
        }
        assert_eq!(surfaces.call.option_type(), OptionType::Call);
        assert_eq!(surfaces.put.option_type(), OptionType::Put);
    }

    #[test]
    fn test_surface_custom_resolution() {
        let surfaces = build_pnl_surfaces(&spec().with_resolution(5), &position()).unwrap();
        assert_eq!(surfaces.call.values().len(), 5);
        assert_eq!(surfaces.call.values()[0].len(), 5);
    }

    #[test]
    fn test_surface_resolution_one_rejected() {
        let result = build_pnl_surfaces(&spec().with_resolution(1), &position());
        assert!(matches!(
            result,
            Err(SurfaceError::InvalidResolution { resolution: 1 })
        ));
    }

    // ==========================================================
    // Surface Value Tests
    // ==========================================================

    #[test]
    fn test_cells_match_direct_pricing() {
        // values[i][j] must be the PnL at (vol_axis[i], spot_axis[j])
        let spec = spec().with_resolution(4);
        let position = position();
        let surfaces = build_pnl_surfaces(&spec, &position).unwrap();
        let contract = OptionContract::new(spec.strike, spec.expiry).unwrap();

        for (i, &vol) in surfaces.call.vol_axis().iter().enumerate() {
            for (j, &spot) in surfaces.call.spot_axis().iter().enumerate() {
                let model = BlackScholes::new(spot, spec.rate, vol).unwrap();
                assert_relative_eq!(
                    surfaces.call.value(i, j),
                    position.pnl(model.price_call(&contract)),
                    epsilon = 1e-12
                );
                assert_relative_eq!(
                    surfaces.put.value(i, j),
                    position.pnl(model.price_put(&contract)),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_call_rows_increase_along_spot() {
        // Within a volatility row, call PnL rises with spot
        let surfaces = build_pnl_surfaces(&spec(), &position()).unwrap();
        for row in surfaces.call.values() {
            for pair in row.windows(2) {
                assert!(pair[1] > pair[0]);
            }
        }
    }

    #[test]
    fn test_quantity_scales_surface() {
        let single = build_pnl_surfaces(&spec(), &Position::new(0.0, 1).unwrap()).unwrap();
        let block = build_pnl_surfaces(&spec(), &Position::new(0.0, 3).unwrap()).unwrap();
        for i in 0..20 {
            for j in 0..20 {
                assert_relative_eq!(
                    block.call.value(i, j),
                    3.0 * single.call.value(i, j),
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_min_max_value() {
        let surfaces = build_pnl_surfaces(&spec(), &position()).unwrap();
        let min = surfaces.call.min_value();
        let max = surfaces.call.max_value();
        assert!(min < max);
        assert!(surfaces
            .call
            .values()
            .iter()
            .flatten()
            .all(|&v| v >= min && v <= max));
    }

    #[test]
    fn test_determinism() {
        // No mutable shared state across calls: identical inputs give
        // identical surfaces
        let a = build_pnl_surfaces(&spec(), &position()).unwrap();
        let b = build_pnl_surfaces(&spec(), &position()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_positive_spot_in_range_aborts() {
        // A spot range reaching 0 must fail the whole build
        let bad = SurfaceSpec::new(
            AxisRange::new(-10.0, 10.0).unwrap(),
            AxisRange::new(0.10, 0.30).unwrap(),
            110.0,
            0.5,
            0.05,
        );
        assert!(matches!(
            build_pnl_surfaces(&bad, &position()),
            Err(SurfaceError::Pricing(_))
        ));
    }

    #[test]
    fn test_invalid_strike_aborts() {
        let bad = SurfaceSpec::new(
            AxisRange::new(80.0, 120.0).unwrap(),
            AxisRange::new(0.10, 0.30).unwrap(),
            -110.0,
            0.5,
            0.05,
        );
        assert!(build_pnl_surfaces(&bad, &position()).is_err());
    }

    #[test]
    fn test_expired_sweep_is_intrinsic() {
        // At expiry the surface collapses to intrinsic PnL, flat in vol
        let expired = SurfaceSpec::new(
            AxisRange::new(80.0, 120.0).unwrap(),
            AxisRange::new(0.10, 0.30).unwrap(),
            100.0,
            0.0,
            0.05,
        )
        .with_resolution(5);
        let position = Position::new(0.0, 1).unwrap();
        let surfaces = build_pnl_surfaces(&expired, &position).unwrap();

        for (i, _) in surfaces.call.vol_axis().iter().enumerate() {
            for (j, &spot) in surfaces.call.spot_axis().iter().enumerate() {
                assert_relative_eq!(
                    surfaces.call.value(i, j),
                    (spot - 100.0).max(0.0),
                    epsilon = 1e-12
                );
            }
        }
    }
}
