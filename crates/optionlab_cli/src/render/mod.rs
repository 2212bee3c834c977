//! Heatmap rendering for PnL surfaces.
//!
//! Two consumers of the same numeric grids:
//! - `terminal`: ANSI truecolor panels with a shared legend
//! - `html`: a side-by-side plotly figure written to disk
//!
//! Both map PnL onto a red → grey → green ramp over a fixed
//! `[vmin, vmax]` color range so that losses and gains read the same
//! across panels.

pub mod html;
pub mod terminal;

use crate::error::{CliError, Result};

/// Anchor colors of the PnL ramp: loss, flat, gain.
const RAMP: [(u8, u8, u8); 3] = [(178, 34, 34), (85, 85, 85), (34, 139, 34)];

/// A fixed PnL color range shared by every panel of one figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    vmin: f64,
    vmax: f64,
}

impl ColorRange {
    /// Creates a color range with validation.
    ///
    /// # Errors
    /// - `CliError::InvalidArgument` if `vmin >= vmax`
    pub fn new(vmin: f64, vmax: f64) -> Result<Self> {
        if vmin >= vmax {
            return Err(CliError::InvalidArgument(format!(
                "color scale range [{vmin}, {vmax}] must have vmin < vmax"
            )));
        }
        Ok(Self { vmin, vmax })
    }

    /// Returns the lower bound.
    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    /// Returns the upper bound.
    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    /// Normalises a PnL value into [0, 1], saturating outside the range.
    pub fn normalise(&self, value: f64) -> f64 {
        ((value - self.vmin) / (self.vmax - self.vmin)).clamp(0.0, 1.0)
    }

    /// Maps a PnL value onto the red → grey → green ramp.
    pub fn color(&self, value: f64) -> (u8, u8, u8) {
        let t = self.normalise(value);
        if t < 0.5 {
            blend(RAMP[0], RAMP[1], t * 2.0)
        } else {
            blend(RAMP[1], RAMP[2], (t - 0.5) * 2.0)
        }
    }
}

fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let channel = |a: u8, b: u8| -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
    };
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

/// Whether cell text should be black for legibility on this background.
///
/// Perceived brightness rule: 0.299 R + 0.587 G + 0.114 B, black text
/// above 60% brightness.
pub fn use_black_text(color: (u8, u8, u8)) -> bool {
    let brightness = 0.299 * f64::from(color.0) / 255.0
        + 0.587 * f64::from(color.1) / 255.0
        + 0.114 * f64::from(color.2) / 255.0;
    brightness > 0.6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rejects_inverted() {
        assert!(ColorRange::new(20.0, -20.0).is_err());
        assert!(ColorRange::new(0.0, 0.0).is_err());
    }

    #[test]
    fn test_normalise_saturates() {
        let range = ColorRange::new(-20.0, 20.0).unwrap();
        assert_eq!(range.normalise(-100.0), 0.0);
        assert_eq!(range.normalise(100.0), 1.0);
        assert_eq!(range.normalise(0.0), 0.5);
    }

    #[test]
    fn test_ramp_endpoints() {
        let range = ColorRange::new(-20.0, 20.0).unwrap();
        assert_eq!(range.color(-20.0), RAMP[0]);
        assert_eq!(range.color(0.0), RAMP[1]);
        assert_eq!(range.color(20.0), RAMP[2]);
    }

    #[test]
    fn test_ramp_is_monotone_green() {
        // Green channel rises over the gain half of the ramp
        let range = ColorRange::new(-20.0, 20.0).unwrap();
        let mid = range.color(0.0);
        let gain = range.color(10.0);
        let max_gain = range.color(20.0);
        assert!(mid.1 < gain.1);
        assert!(gain.1 < max_gain.1);
    }

    #[test]
    fn test_text_color_rule() {
        assert!(!use_black_text((0, 0, 0)));
        assert!(use_black_text((255, 255, 255)));
        // The flat grey midpoint keeps white text
        assert!(!use_black_text(RAMP[1]));
    }
}
