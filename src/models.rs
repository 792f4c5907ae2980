use serde::{Deserialize, Serialize};

/// Packing factor between the coarse group and the sub-period of a period label.
pub const GROUP_FACTOR: i64 = 100;

/// Coarse group of a period label, e.g. `202403 -> 2024`.
#[inline]
pub fn period_group(label: i64) -> i64 {
    label.div_euclid(GROUP_FACTOR)
}

/// Sub-period of a period label, e.g. `202403 -> 3`.
#[inline]
pub fn period_subperiod(label: i64) -> i64 {
    label.rem_euclid(GROUP_FACTOR)
}

/// Tidy structure rendered by this crate (one row = one observation).
///
/// `period` is the x column (`YYYYMM`-like code), `value` the y column and
/// `category` the hue column used for grouping and color-coding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub period: i64,
    pub value: f64,
    pub category: String,
}

impl Observation {
    pub fn new(period: i64, value: f64, category: impl Into<String>) -> Self {
        Self {
            period,
            value,
            category: category.into(),
        }
    }

    /// Coarse group (year) of this observation's period.
    pub fn group(&self) -> i64 {
        period_group(self.period)
    }
}

/// One rendered line: a category and its points in axis coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub category: String,
    /// `(x position, value)` pairs sorted by x position.
    pub points: Vec<(f64, f64)>,
}
