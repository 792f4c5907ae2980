//! Two-tier period axis: year dividers and centered year labels drawn under
//! the x axis in place of the per-period tick labels.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::types::{DIVIDER_DEPTH, GROUP_LABEL_OFFSET};
use crate::segment::Segmentation;

/// Pixel geometry of the period axis decorations.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisMarks {
    /// Vertical divider lines `(x, y_top, y_bottom)`.
    pub dividers: Vec<(i32, i32, i32)>,
    /// Group labels `(text, x_center, y_top)`.
    pub labels: Vec<(String, i32, i32)>,
}

/// Lay out dividers and group labels for `seg`.
///
/// `to_px` maps an x axis position to a backend pixel column, `axis_y` is the
/// pixel row of the x axis and `plot_h` the plot height in pixels.
pub fn layout_marks<F>(seg: &Segmentation, to_px: F, axis_y: i32, plot_h: i32) -> AxisMarks
where
    F: Fn(f64) -> i32,
{
    let depth = (plot_h as f64 * DIVIDER_DEPTH).round() as i32;
    let offset = (plot_h as f64 * GROUP_LABEL_OFFSET).round() as i32;

    let dividers = seg
        .boundaries()
        .iter()
        .map(|b| (to_px(*b), axis_y, axis_y + depth))
        .collect();
    let labels = seg
        .groups()
        .iter()
        .zip(seg.anchors())
        .map(|(g, a)| (g.to_string(), to_px(a), axis_y + offset))
        .collect();

    AxisMarks { dividers, labels }
}

/// Draw the marks onto the full canvas so they may extend below the plotting area.
pub fn draw_marks<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    marks: &AxisMarks,
    font_px: u32,
) -> Result<()> {
    let line = BLACK.stroke_width(1);
    for (x, y0, y1) in &marks.dividers {
        root.draw(&PathElement::new(vec![(*x, *y0), (*x, *y1)], line))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    let style: TextStyle =
        TextStyle::from((FontFamily::SansSerif, font_px)).pos(Pos::new(HPos::Center, VPos::Top));
    for (text, x, y) in &marks.labels {
        root.draw(&Text::new(text.as_str(), (*x, *y), style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}
