//! ANSI truecolor heatmap rendering.
//!
//! Panels are stacked vertically (two 20-column panels do not fit side
//! by side in a typical terminal) with one shared legend, volatility on
//! the y axis ascending upwards and spot on the x axis.

use std::fmt::Write as _;

use optionlab_risk::PnlSurface;

use super::{use_black_text, ColorRange};

const CELL_WIDTH: usize = 7;

/// Renders one surface as an ANSI heatmap panel with axis labels.
pub fn render_surface(surface: &PnlSurface, range: &ColorRange) -> String {
    let mut out = String::new();

    let title = if surface.option_type().is_call() {
        "CALL Option PnL"
    } else {
        "PUT Option PnL"
    };
    let _ = writeln!(out, "{:>8}{}", "", title);

    // Highest volatility on top: iterate rows in reverse
    for (i, &vol) in surface.vol_axis().iter().enumerate().rev() {
        let _ = write!(out, "{:>7.2} ", vol);
        for j in 0..surface.spot_axis().len() {
            let value = surface.value(i, j);
            let (r, g, b) = range.color(value);
            let (fr, fg, fb) = if use_black_text((r, g, b)) {
                (0, 0, 0)
            } else {
                (255, 255, 255)
            };
            let _ = write!(
                out,
                "\x1b[48;2;{r};{g};{b}m\x1b[38;2;{fr};{fg};{fb}m{value:>width$.0}\x1b[0m",
                width = CELL_WIDTH
            );
        }
        let _ = writeln!(out);
    }

    // Spot labels under the columns
    let _ = write!(out, "{:>8}", "");
    for &spot in surface.spot_axis() {
        let _ = write!(out, "{spot:>width$.0}", width = CELL_WIDTH);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{:>8}spot →  (vol ↑)", "");

    out
}

/// Renders the shared color legend for a figure.
pub fn render_legend(range: &ColorRange) -> String {
    let mut out = String::new();
    let steps = 40;

    let _ = write!(out, "{:>8}PnL  {:>8.0} ", "", range.vmin());
    for step in 0..=steps {
        let value =
            range.vmin() + (range.vmax() - range.vmin()) * f64::from(step) / f64::from(steps);
        let (r, g, b) = range.color(value);
        let _ = write!(out, "\x1b[48;2;{r};{g};{b}m \x1b[0m");
    }
    let _ = writeln!(out, " {:<8.0}", range.vmax());

    out
}
