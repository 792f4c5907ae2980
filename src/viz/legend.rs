//! Legend layout and drawing for legends placed outside the plotting area.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::{estimate_text_width_px, truncate_to_width, wrap_text_to_width};
use super::types::LegendMode;

// Layout constants shared by the estimator and the drawing code.
const SWATCH_W: i32 = 20;
const SWATCH_TO_TEXT: i32 = 6;
const TRAILING_GAP: i32 = 14;
const ROW_GAP: i32 = 4;
const PAD: i32 = 6;

fn line_height(font_px: u32) -> i32 {
    font_px as i32 + 4
}

fn item_width(label: &str, font_px: u32, max_text_px: u32) -> i32 {
    let text = truncate_to_width(label, font_px, max_text_px);
    SWATCH_W + SWATCH_TO_TEXT + estimate_text_width_px(&text, font_px) as i32 + TRAILING_GAP
}

/// Greedily pack legend items into rows no wider than `avail_w`.
/// Returns item indices per row; every row holds at least one item.
pub fn pack_rows(labels: &[String], font_px: u32, avail_w: i32) -> Vec<Vec<usize>> {
    let max_text = (avail_w - SWATCH_W - SWATCH_TO_TEXT - TRAILING_GAP).max(20) as u32;
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut cur: Vec<usize> = Vec::new();
    let mut x = 0;
    for (i, label) in labels.iter().enumerate() {
        let w = item_width(label, font_px, max_text);
        if x + w > avail_w && !cur.is_empty() {
            rows.push(std::mem::take(&mut cur));
            x = 0;
        }
        x += w;
        cur.push(i);
    }
    if !cur.is_empty() {
        rows.push(cur);
    }
    rows
}

/// Height in pixels a horizontal (top/bottom) legend band needs for `labels`.
pub fn estimate_band_height_px(labels: &[String], font_px: u32, avail_w: i32) -> i32 {
    if labels.is_empty() {
        return 0;
    }
    let rows = pack_rows(labels, font_px, avail_w).len() as i32;
    2 * PAD + rows * line_height(font_px) + (rows - 1) * ROW_GAP
}

/// Draw the legend panel.
///
/// - `Right`: single column, labels wrapped to the panel width.
/// - `TopRight`: rows right-aligned so the last item ends at `right_px`.
/// - `Bottom`: rows left-aligned at `left_px` (the plot's x axis start).
///
/// `Inside` legends are drawn by the chart itself; this function is a no-op for them.
pub fn draw_legend_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    items: &[(String, RGBAColor)],
    placement: LegendMode,
    font_px: u32,
    left_px: i32,
    right_px: i32,
) -> Result<()> {
    let line_h = line_height(font_px);
    let label_style: TextStyle =
        TextStyle::from((FontFamily::SansSerif, font_px)).pos(Pos::new(HPos::Left, VPos::Center));

    let draw_item = |x: i32, y_center: i32, color: &RGBAColor, lines: &[String]| -> Result<()> {
        area.draw(&PathElement::new(
            vec![(x, y_center), (x + SWATCH_W, y_center)],
            color.stroke_width(2),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        for (i, line) in lines.iter().enumerate() {
            area.draw(&Text::new(
                line.as_str(),
                (x + SWATCH_W + SWATCH_TO_TEXT, y_center + i as i32 * line_h),
                label_style.clone(),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        }
        Ok(())
    };

    match placement {
        LegendMode::Inside => Ok(()),
        LegendMode::Right => {
            let (w, _) = area.dim_in_pixel();
            let max_text = (w as i32 - PAD * 2 - SWATCH_W - SWATCH_TO_TEXT).max(20) as u32;
            let mut y = PAD + line_h / 2;
            for (label, color) in items {
                let lines = wrap_text_to_width(label, font_px, max_text);
                draw_item(PAD, y, color, &lines)?;
                y += lines.len().max(1) as i32 * line_h + ROW_GAP;
            }
            Ok(())
        }
        LegendMode::TopRight | LegendMode::Bottom => {
            let labels: Vec<String> = items.iter().map(|(l, _)| l.clone()).collect();
            let avail_w = (right_px - left_px).max(40);
            let max_text = (avail_w - SWATCH_W - SWATCH_TO_TEXT - TRAILING_GAP).max(20) as u32;
            let mut y = PAD + line_h / 2;
            for row in pack_rows(&labels, font_px, avail_w) {
                let widths: Vec<i32> = row
                    .iter()
                    .map(|i| item_width(&labels[*i], font_px, max_text))
                    .collect();
                let row_w: i32 = widths.iter().sum();
                let mut x = if placement == LegendMode::TopRight {
                    // The trailing gap of the last item is not visible.
                    right_px - row_w + TRAILING_GAP
                } else {
                    left_px
                };
                for (i, w) in row.iter().zip(widths) {
                    let text = truncate_to_width(&labels[*i], font_px, max_text);
                    draw_item(x, y, &items[*i].1, &[text])?;
                    x += w;
                }
                y += line_h + ROW_GAP;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn everything_fits_on_one_row() {
        let rows = pack_rows(&labels(&["north", "south"]), 10, 500);
        assert_eq!(rows, vec![vec![0, 1]]);
    }

    #[test]
    fn narrow_band_flows_into_rows() {
        let l = labels(&["north", "south", "east", "west"]);
        let rows = pack_rows(&l, 10, 120);
        assert!(rows.len() > 1);
        let flat: Vec<usize> = rows.into_iter().flatten().collect();
        assert_eq!(flat, vec![0, 1, 2, 3]);
    }

    #[test]
    fn band_height_grows_with_rows() {
        let l = labels(&["north", "south", "east", "west"]);
        let one = estimate_band_height_px(&l, 10, 2000);
        let many = estimate_band_height_px(&l, 10, 80);
        assert!(many > one);
        assert_eq!(estimate_band_height_px(&[], 10, 500), 0);
    }
}
