//! Visualization: multi-category line charts over a period axis, rendered to
//! any Plotters backend or to **SVG** / **PNG** files.
//!
//! - Series per category, colors from the Microsoft Office palette, categories sorted
//! - X axis in period positions with year dividers and centered year labels
//! - No grid, no top/right borders, y limits taken from the observed values
//! - Legend placement: `TopRight` (default), `Inside`, `Right`, `Bottom`
//!
//! Charts are described first and drawn second: [`LinePlot::builder`] collects
//! observations and settings, `build()` freezes them into an immutable
//! [`LinePlot`], and a single `draw` / `render_to_file` call materializes it.

pub mod axis;
pub mod legend;
pub mod text;
pub mod types;
pub mod util;

pub use types::{DEFAULT_LEGEND_MODE, LegendMode};

use crate::config::ChartConfig;
use crate::models::{Observation, Series};
use crate::segment::{SegmentError, SegmentMode, Segmentation, segment_with};
use anyhow::{Result, anyhow};
use log::{debug, info};
use thiserror::Error;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use std::sync::Once;

use legend::{draw_legend_panel, estimate_band_height_px};
use util::{compute_left_label_area_px, format_tick, map_locale, office_color};

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Outer canvas margin in pixels.
const MARGIN: i32 = 16;
/// Small padding around header and footer text.
const PAD: i32 = 8;
const Y_TICKS: usize = 10;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no data to plot")]
    NoData,
    #[error("non-finite value {value} at period {period} for category {category:?}")]
    NonFinite {
        period: i64,
        value: f64,
        category: String,
    },
    #[error(transparent)]
    Segment(#[from] SegmentError),
}

/// Collects everything needed to describe a line plot.
#[derive(Debug, Clone)]
pub struct LinePlotBuilder<'a> {
    observations: &'a [Observation],
    title: String,
    x_label: Option<String>,
    y_label: Option<String>,
    config: ChartConfig,
}

impl<'a> LinePlotBuilder<'a> {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_axis_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn segment_mode(mut self, mode: SegmentMode) -> Self {
        self.config.segment_mode = mode;
        self
    }

    /// Freeze the description: aggregate series, segment the period axis and
    /// derive the axis limits.
    pub fn build(self) -> Result<LinePlot, PlotError> {
        if self.observations.is_empty() {
            return Err(PlotError::NoData);
        }
        if let Some(o) = self.observations.iter().find(|o| !o.value.is_finite()) {
            return Err(PlotError::NonFinite {
                period: o.period,
                value: o.value,
                category: o.category.clone(),
            });
        }

        // Distinct periods in chronological order, one axis position each.
        let periods: Vec<i64> = self
            .observations
            .iter()
            .map(|o| o.period)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let segmentation = segment_with(&periods, self.config.segment_mode)?;
        let position: HashMap<i64, usize> = segmentation
            .labels()
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, i))
            .collect();

        // category -> period -> (sum, count); BTreeMap keeps categories sorted.
        let mut acc: BTreeMap<&str, BTreeMap<i64, (f64, usize)>> = BTreeMap::new();
        for o in self.observations {
            let cell = acc
                .entry(o.category.as_str())
                .or_default()
                .entry(o.period)
                .or_insert((0.0, 0));
            cell.0 += o.value;
            cell.1 += 1;
        }

        let series: Vec<Series> = acc
            .into_iter()
            .map(|(category, cells)| {
                let mut points: Vec<(f64, f64)> = cells
                    .into_iter()
                    .map(|(p, (sum, n))| (position[&p] as f64, sum / n as f64))
                    .collect();
                points.sort_by(|a, b| a.0.total_cmp(&b.0));
                Series {
                    category: category.to_string(),
                    points,
                }
            })
            .collect();

        // The period axis floors y at zero, but the final limits are the
        // observed extremes.
        let (mut y_min, mut y_max) = self
            .observations
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), o| {
                (lo.min(o.value), hi.max(o.value))
            });
        if (y_max - y_min).abs() < f64::EPSILON {
            y_min -= 1.0;
            y_max += 1.0;
        }

        debug!(
            "built line plot: {} series, {} periods, {} groups, y {}..{}",
            series.len(),
            periods.len(),
            segmentation.groups().len(),
            y_min,
            y_max
        );

        Ok(LinePlot {
            title: self.title,
            x_label: self.x_label,
            y_label: self.y_label,
            series,
            segmentation,
            y_range: (y_min, y_max),
            config: self.config,
        })
    }
}

/// Immutable description of a rendered line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    title: String,
    x_label: Option<String>,
    y_label: Option<String>,
    series: Vec<Series>,
    segmentation: Segmentation,
    y_range: (f64, f64),
    config: ChartConfig,
}

impl LinePlot {
    pub fn builder(observations: &[Observation]) -> LinePlotBuilder<'_> {
        LinePlotBuilder {
            observations,
            title: String::new(),
            x_label: None,
            y_label: None,
            config: ChartConfig::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_axis_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    pub fn y_axis_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// One series per category, sorted by category.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Periods in axis order; index = x position.
    pub fn periods(&self) -> &[i64] {
        self.segmentation.labels()
    }

    pub fn segmentation(&self) -> &Segmentation {
        &self.segmentation
    }

    /// Visible x range: the outer year dividers.
    pub fn x_range(&self) -> (f64, f64) {
        self.segmentation.span()
    }

    pub fn y_range(&self) -> (f64, f64) {
        self.y_range
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Render to a file; `.svg` uses the SVG backend, anything else the bitmap backend.
    pub fn render_to_file<P: AsRef<Path>>(&self, out_path: P) -> Result<()> {
        let out_path = out_path.as_ref();
        let path_string = out_path.to_string_lossy().into_owned();
        let size = (self.config.width, self.config.height);

        if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
            let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
            self.draw(&root)?;
        } else {
            let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
            self.draw(&root)?;
        }
        info!("wrote chart to {}", out_path.display());
        Ok(())
    }

    /// Render to an in-memory SVG document.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, (self.config.width, self.config.height))
                .into_drawing_area();
            self.draw(&root)?;
        }
        Ok(buf)
    }

    /// Draw the chart onto a caller-supplied drawing area and present it.
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        ensure_fonts_registered();
        root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

        let fonts = self.config.fonts;
        let (num_locale, dec_sep) = map_locale(&self.config.locale);
        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range;

        let legend_items: Vec<(String, RGBAColor)> = self
            .series
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.category.clone(), office_color(idx)))
            .collect();
        let legend_texts: Vec<String> = legend_items.iter().map(|(l, _)| l.clone()).collect();

        // ----------------------------
        // 1) Gutters
        // ----------------------------
        let left_label_px = compute_left_label_area_px(
            y_min,
            y_max,
            Y_TICKS,
            fonts.tick_label,
            num_locale,
            dec_sep,
        );
        let axis_x_start = MARGIN + left_label_px as i32;

        let (root_w, _) = root.dim_in_pixel();
        let split_x = if self.config.legend == LegendMode::Right {
            (root_w as f64 * 0.85) as i32
        } else {
            root_w as i32
        };
        let (main, panel) = root.split_horizontally(split_x);
        let right_panel = (self.config.legend == LegendMode::Right).then_some(panel);
        let (main_w, main_h) = main.dim_in_pixel();
        let main_w = main_w as i32;
        let main_h = main_h as i32;

        let title_band = if self.title.trim().is_empty() {
            PAD
        } else {
            fonts.title as i32 + 2 * PAD
        };
        let top_legend_h = if self.config.legend == LegendMode::TopRight {
            estimate_band_height_px(&legend_texts, fonts.legend, main_w - axis_x_start - MARGIN)
        } else {
            0
        };
        let header_h = title_band + (self.config.title_pad as i32).max(top_legend_h);

        let bottom_legend_h = if self.config.legend == LegendMode::Bottom {
            estimate_band_height_px(&legend_texts, fonts.legend, main_w - axis_x_start - MARGIN)
        } else {
            0
        };

        // Year labels need room under the axis; an x description sits further down.
        let year_room = (main_h as f64 * 0.15) as i32 + fonts.tick_label as i32;
        let bottom_label_px = match self.x_label {
            Some(_) => year_room.max(self.config.x_label_pad as i32 + fonts.axis_label as i32 + PAD),
            None => year_room,
        };

        // ----------------------------
        // 2) Split drawing areas
        // ----------------------------
        let (header, rest) = main.split_vertically(header_h.min(main_h / 2));
        let (plot_area, bottom_panel) = if bottom_legend_h > 0 {
            let (_, rest_h) = rest.dim_in_pixel();
            let (plot, panel) = rest.split_vertically((rest_h as i32 - bottom_legend_h).max(40));
            (plot, Some(panel))
        } else {
            (rest, None)
        };

        // ----------------------------
        // 3) Header: title and top legend
        // ----------------------------
        let (title_area, top_legend_area) = header.split_vertically(title_band);
        if !self.title.trim().is_empty() {
            let style = TextStyle::from((FontFamily::SansSerif, fonts.title))
                .pos(Pos::new(HPos::Center, VPos::Top));
            let center_x = (axis_x_start + main_w - MARGIN) / 2;
            title_area
                .draw(&Text::new(self.title.as_str(), (center_x, PAD), style))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        if self.config.legend == LegendMode::TopRight {
            draw_legend_panel(
                &top_legend_area,
                &legend_items,
                LegendMode::TopRight,
                fonts.legend,
                axis_x_start,
                main_w - MARGIN,
            )?;
        }

        // ----------------------------
        // 4) Chart body
        // ----------------------------
        let mut chart = ChartBuilder::on(&plot_area)
            .margin(MARGIN as u32)
            .set_label_area_size(LabelAreaPosition::Left, left_label_px)
            .set_label_area_size(LabelAreaPosition::Bottom, bottom_label_px as u32)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| anyhow!("{:?}", e))?;

        // Per-period tick labels are replaced by the year tier below.
        let x_label_fmt = |_: &f64| String::new();
        let y_label_fmt = |v: &f64| format_tick(*v, num_locale, dec_sep);

        {
            let mut mesh = chart.configure_mesh();
            mesh.disable_mesh()
                .x_labels(self.periods().len().min(60))
                .y_labels(Y_TICKS)
                .x_label_formatter(&x_label_fmt)
                .y_label_formatter(&y_label_fmt)
                .label_style((FontFamily::SansSerif, fonts.tick_label))
                .axis_desc_style((FontFamily::SansSerif, fonts.axis_label));
            if let Some(y_desc) = self.y_label.as_deref() {
                mesh.y_desc(y_desc);
            }
            mesh.draw().map_err(|e| anyhow!("{:?}", e))?;
        }

        let inside_mode = self.config.legend == LegendMode::Inside;
        for (s, (_, color)) in self.series.iter().zip(legend_items.iter()) {
            let color = *color;
            let style = ShapeStyle {
                color,
                filled: false,
                stroke_width: 2,
            };
            let elem = chart
                .draw_series(LineSeries::new(s.points.clone(), style))
                .map_err(|e| anyhow!("{:?}", e))?;
            if inside_mode {
                elem.label(s.category.clone()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            }
        }

        if inside_mode {
            chart
                .configure_series_labels()
                .border_style(BLACK)
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.85))
                .label_font((FontFamily::SansSerif, fonts.legend))
                .draw()
                .map_err(|e| anyhow!("{:?}", e))?;
        }

        // ----------------------------
        // 5) Period axis: year dividers, year labels, x description
        // ----------------------------
        let (base_x, base_y) = root.get_base_pixel();
        let (x_px, y_px) = chart.plotting_area().get_pixel_range();
        let plot_h = y_px.end - y_px.start;
        let axis_y = chart.backend_coord(&(x_min, y_min)).1 - base_y;
        let marks = axis::layout_marks(
            &self.segmentation,
            |x| chart.backend_coord(&(x, y_min)).0 - base_x,
            axis_y,
            plot_h,
        );
        axis::draw_marks(root, &marks, fonts.tick_label)?;

        if let Some(x_desc) = self.x_label.as_deref() {
            let style = TextStyle::from((FontFamily::SansSerif, fonts.axis_label))
                .pos(Pos::new(HPos::Center, VPos::Top));
            let center_x = (x_px.start + x_px.end) / 2 - base_x;
            root.draw(&Text::new(
                x_desc,
                (center_x, axis_y + self.config.x_label_pad as i32),
                style,
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        }

        // ----------------------------
        // 6) External legends
        // ----------------------------
        if let Some(ref panel) = right_panel {
            draw_legend_panel(panel, &legend_items, LegendMode::Right, fonts.legend, 0, 0)?;
        }
        if let Some(ref panel) = bottom_panel {
            draw_legend_panel(
                panel,
                &legend_items,
                LegendMode::Bottom,
                fonts.legend,
                axis_x_start,
                main_w - MARGIN,
            )?;
        }

        debug!(
            "drew {} series over {} periods ({} year dividers)",
            self.series.len(),
            self.segmentation.len(),
            marks.dividers.len()
        );

        root.present().map_err(|e| anyhow!("{:?}", e))?;
        Ok(())
    }
}

/// Convenience: build with defaults and render straight to a file.
pub fn plot_lines<P: AsRef<Path>>(
    observations: &[Observation],
    out_path: P,
    title: &str,
    config: ChartConfig,
) -> Result<()> {
    let plot = LinePlot::builder(observations)
        .title(title)
        .config(config)
        .build()?;
    plot.render_to_file(out_path)
}
