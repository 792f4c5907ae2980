//! Public types and constants for the visualization module.

use serde::{Deserialize, Serialize};

/// Legend placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendMode {
    /// Overlay legend inside the plotting area, upper right (may overlap data).
    Inside,
    /// Separate, non-overlapping legend panel on the right side.
    Right,
    /// Legend band above the plot, right-aligned with the plot's right edge.
    TopRight,
    /// Separate, non-overlapping legend band at the bottom.
    Bottom,
}

/// Default legend placement: above the axes, anchored at the upper right.
pub const DEFAULT_LEGEND_MODE: LegendMode = LegendMode::TopRight;

/// Default chart canvas size in pixels.
pub const DEFAULT_SIZE: (u32, u32) = (1000, 600);

/// Divider marks run from the x axis down this fraction of the plot height.
pub const DIVIDER_DEPTH: f64 = 0.12;

/// Group labels sit this fraction of the plot height below the x axis.
pub const GROUP_LABEL_OFFSET: f64 = 0.07;
