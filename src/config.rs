//! Chart configuration passed explicitly into every render.
//!
//! Font sizes, canvas size and layout paddings live in a [`ChartConfig`] value
//! instead of process-wide defaults, so repeated renders cannot leak settings
//! into each other. Configs can be loaded from JSON; omitted fields fall back to
//! their defaults.

use crate::segment::SegmentMode;
use crate::viz::types::{DEFAULT_LEGEND_MODE, DEFAULT_SIZE, LegendMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Font sizes in pixels for each text role of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSizes {
    /// Default text size. Carried for configuration parity; every text the
    /// line chart draws has a dedicated role below.
    pub base: u32,
    /// Axes title. Carried for configuration parity; the line chart draws its
    /// title with `title`.
    pub axes_title: u32,
    /// X and y axis descriptions.
    pub axis_label: u32,
    /// Tick labels, including the group labels under the x axis.
    pub tick_label: u32,
    pub legend: u32,
    /// Figure title. Carried for configuration parity; single-chart renders
    /// have no figure-level title.
    pub figure_title: u32,
    /// Chart title drawn above the plot.
    pub title: u32,
}

impl FontSizes {
    /// Derive all roles from three size tiers: small for default text, medium
    /// for axes titles, labels and ticks, big for the figure title.
    pub fn from_tiers(small: u32, medium: u32, big: u32) -> Self {
        Self {
            base: small,
            axes_title: medium,
            axis_label: medium,
            tick_label: medium,
            legend: 10,
            figure_title: big,
            title: 30,
        }
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self::from_tiers(13, 16, 20)
    }
}

/// Everything a render needs besides the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub fonts: FontSizes,
    pub legend: LegendMode,
    /// Locale tag for y tick labels (`en`, `de`, `fr`, ...).
    pub locale: String,
    /// Gap in pixels between the title and the plot.
    pub title_pad: u32,
    /// Distance in pixels from the x axis down to the x axis description.
    pub x_label_pad: u32,
    pub segment_mode: SegmentMode,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            fonts: FontSizes::default(),
            legend: DEFAULT_LEGEND_MODE,
            locale: "en".to_string(),
            title_pad: 60,
            x_label_pad: 80,
            segment_mode: SegmentMode::Contiguous,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fonts(mut self, fonts: FontSizes) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn with_legend(mut self, legend: LegendMode) -> Self {
        self.legend = legend;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}
