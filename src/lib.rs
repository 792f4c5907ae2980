//! periodviz
//!
//! A small Rust library for rendering time-series line charts whose x axis is a
//! run of `YYYYMM`-like period codes. Pairs with the `periodviz` CLI.
//!
//! ### Features
//! - Segment period labels into per-year runs with divider and label positions
//! - Two-tier "period under year" x axis
//! - Multi-category line charts to SVG/PNG or any Plotters backend
//! - Explicit, serializable chart configuration (font sizes, layout, legend)
//!
//! ### Example
//! ```no_run
//! use periodviz::{ChartConfig, LinePlot, Observation};
//!
//! let data = vec![
//!     Observation::new(202311, 4.0, "north"),
//!     Observation::new(202312, 5.5, "north"),
//!     Observation::new(202401, 5.0, "north"),
//!     Observation::new(202311, 2.0, "south"),
//!     Observation::new(202401, 3.5, "south"),
//! ];
//! let plot = LinePlot::builder(&data)
//!     .title("Orders per month")
//!     .y_axis_label("Orders")
//!     .config(ChartConfig::default())
//!     .build()?;
//! plot.render_to_file("orders.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod models;
pub mod segment;
pub mod viz;

pub use config::{ChartConfig, FontSizes};
pub use models::{Observation, Series};
pub use segment::{Segment, SegmentMode, Segmentation, segment, segment_with};
pub use viz::{LegendMode, LinePlot, LinePlotBuilder, PlotError};
