//! Period-axis segmentation: split an ordered run of `YYYYMM`-like labels into
//! per-year segments and derive the divider and label positions for a
//! two-tier "period under year" axis.
//!
//! ```
//! use periodviz::segment::segment;
//!
//! let seg = segment(&[202301, 202302, 202303, 202401, 202402])?;
//! assert_eq!(seg.groups(), &[2023, 2024]);
//! assert_eq!(seg.boundaries(), &[-0.5, 2.5, 4.5]);
//! assert_eq!(seg.anchors(), vec![1.0, 3.5]);
//! # Ok::<(), periodviz::segment::SegmentError>(())
//! ```

use crate::models::period_group;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    #[error("cannot segment an empty label sequence")]
    Empty,
}

/// How a group value that reappears after a different group is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentMode {
    /// Every contiguous run is its own segment; `[202301, 202401, 202302]`
    /// yields three segments.
    #[default]
    Contiguous,
    /// Labels are stably reordered by group first, so each group forms exactly
    /// one segment.
    Merged,
}

/// A contiguous run of labels sharing one group value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub group: i64,
    /// Index of the first label in the run.
    pub start: usize,
    /// One past the last label in the run.
    pub end: usize,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Axis position halfway between the segment's dividers.
    pub fn anchor(&self) -> f64 {
        (self.start + self.end) as f64 / 2.0 - 0.5
    }
}

/// Result of segmenting a label sequence.
///
/// Invariant: `boundaries.len() == groups.len() + 1` and `boundaries` is
/// strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    labels: Vec<i64>,
    groups: Vec<i64>,
    boundaries: Vec<f64>,
}

impl Segmentation {
    /// Labels in the order the boundaries refer to (reordered in `Merged` mode).
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Group value of each segment, in axis order.
    pub fn groups(&self) -> &[i64] {
        &self.groups
    }

    /// Divider positions (`index - 0.5`), one more than there are groups.
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Centered label position of each group.
    pub fn anchors(&self) -> Vec<f64> {
        self.boundaries
            .windows(2)
            .map(|w| (w[0] + w[1]) / 2.0)
            .collect()
    }

    /// Segments with their index spans.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.groups
            .iter()
            .zip(self.boundaries.windows(2))
            .map(|(group, w)| Segment {
                group: *group,
                start: (w[0] + 0.5) as usize,
                end: (w[1] + 0.5) as usize,
            })
    }

    /// Visible axis range: first and last boundary.
    pub fn span(&self) -> (f64, f64) {
        // Never empty: construction rejects empty input.
        let first = self.boundaries[0];
        let last = self.boundaries[self.boundaries.len() - 1];
        (first, last)
    }

    /// Number of labels covered.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Segment labels in their given order (`SegmentMode::Contiguous`).
pub fn segment(labels: &[i64]) -> Result<Segmentation, SegmentError> {
    segment_with(labels, SegmentMode::Contiguous)
}

/// Segment labels with an explicit policy for reappearing groups.
pub fn segment_with(labels: &[i64], mode: SegmentMode) -> Result<Segmentation, SegmentError> {
    if labels.is_empty() {
        return Err(SegmentError::Empty);
    }

    let mut ordered = labels.to_vec();
    if mode == SegmentMode::Merged {
        // Stable: sub-period order inside a group is kept as given.
        ordered.sort_by_key(|l| period_group(*l));
    }

    let mut starts: Vec<usize> = Vec::new();
    let mut groups: Vec<i64> = Vec::new();
    let mut prev: Option<i64> = None;
    for (i, label) in ordered.iter().enumerate() {
        let g = period_group(*label);
        if prev != Some(g) {
            starts.push(i);
            groups.push(g);
            prev = Some(g);
        }
    }
    starts.push(ordered.len());

    let boundaries = starts.into_iter().map(|b| b as f64 - 0.5).collect();

    Ok(Segmentation {
        labels: ordered,
        groups,
        boundaries,
    })
}
