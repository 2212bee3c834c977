//! Side-by-side HTML heatmap rendering via plotly.
//!
//! Produces one figure with the call and put panels on a shared
//! subplot grid. Values are saturated into the fixed color range
//! before plotting so both panels use the same color mapping, with a
//! single colorbar on the first panel.

use std::path::Path;

use plotly::common::{Anchor, ColorScale, ColorScaleElement, Font};
use plotly::layout::{Annotation, GridPattern, LayoutGrid};
use plotly::{HeatMap, Layout, Plot};

use optionlab_risk::PnlSurface;

use super::ColorRange;
use crate::error::Result;

/// The loss → flat → gain ramp of the terminal renderer, as a plotly
/// colorscale.
fn pnl_color_scale() -> ColorScale {
    ColorScale::Vector(vec![
        ColorScaleElement(0.0, "#b22222".to_string()),
        ColorScaleElement(0.5, "#555555".to_string()),
        ColorScaleElement(1.0, "#228b22".to_string()),
    ])
}

fn saturated_values(surface: &PnlSurface, range: &ColorRange) -> Vec<Vec<f64>> {
    surface
        .values()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&value| value.clamp(range.vmin(), range.vmax()))
                .collect()
        })
        .collect()
}

fn panel_title(text: &str, x_ref: &str, y_ref: &str) -> Annotation {
    Annotation::new()
        .text(format!("<b>{text}</b>"))
        .x_ref(format!("{x_ref} domain"))
        .y_ref(format!("{y_ref} domain"))
        .x(0.5)
        .y(1.05)
        .x_anchor(Anchor::Center)
        .y_anchor(Anchor::Bottom)
        .font(Font::new().size(14))
        .show_arrow(false)
}

/// Writes the dual heatmap figure to `path`.
pub fn write_dual_heatmap(
    call: &PnlSurface,
    put: &PnlSurface,
    range: &ColorRange,
    path: &Path,
) -> Result<()> {
    let call_trace = HeatMap::new(
        call.spot_axis().to_vec(),
        call.vol_axis().to_vec(),
        saturated_values(call, range),
    )
    .name("CALL")
    .color_scale(pnl_color_scale())
    .show_scale(true);

    let put_trace = HeatMap::new(
        put.spot_axis().to_vec(),
        put.vol_axis().to_vec(),
        saturated_values(put, range),
    )
    .name("PUT")
    .color_scale(pnl_color_scale())
    .show_scale(false)
    .x_axis("x2")
    .y_axis("y2");

    let mut plot = Plot::new();
    plot.add_trace(call_trace);
    plot.add_trace(put_trace);
    plot.set_layout(
        Layout::new()
            .title("PnL Heatmaps (spot × volatility)")
            .height(600)
            .annotations(vec![
                panel_title("CALL Option PnL", "x", "y"),
                panel_title("PUT Option PnL", "x2", "y2"),
            ])
            .grid(
                LayoutGrid::new()
                    .rows(1)
                    .columns(2)
                    .pattern(GridPattern::Independent),
            ),
    );

    plot.write_html(path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use optionlab_risk::{build_pnl_surfaces, AxisRange, Position, SurfaceSpec};

    #[test]
    fn test_saturation_respects_range() {
        let spec = SurfaceSpec::new(
            AxisRange::new(80.0, 120.0).unwrap(),
            AxisRange::new(0.10, 0.30).unwrap(),
            110.0,
            0.5,
            0.05,
        )
        .with_resolution(6);
        let surfaces = build_pnl_surfaces(&spec, &Position::new(5.0, 10).unwrap()).unwrap();
        let range = ColorRange::new(-20.0, 20.0).unwrap();

        let saturated = saturated_values(&surfaces.call, &range);
        assert!(saturated
            .iter()
            .flatten()
            .all(|&v| (-20.0..=20.0).contains(&v)));
        // A 10-lot position overflows the default scale on both sides
        assert!(saturated.iter().flatten().any(|&v| v == -20.0));
        assert!(saturated.iter().flatten().any(|&v| v == 20.0));
    }
}
