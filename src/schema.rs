//! Chart-ready speedup series types.
//!
//! The analyzer's entire output surface: plain data handed to an external
//! charting collaborator (and exportable as JSON so other tooling can
//! consume the same report). No rendering happens in this crate, and none
//! of these types feed back into analysis.

use serde::{Deserialize, Serialize};

/// One point of a speedup curve: `speedup = baseline_ms / elapsed_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedupPoint {
    pub threads: u32,
    pub speedup: f64,
}

/// A labeled speedup curve, in the source table's row order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedupSeries {
    /// Legend label (dataset display name, or run label for comparisons).
    pub label: String,
    /// Normalization constant the points were divided into.
    pub baseline_ms: f64,
    pub points: Vec<SpeedupPoint>,
}

/// A set of series meant to share one chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupView {
    /// View name, e.g. `canonical/own-baseline`.
    pub title: String,
    /// Largest thread count across the series; charting uses it for the
    /// x-axis range and the linear-speedup reference line.
    pub max_threads: u32,
    pub series: Vec<SpeedupSeries>,
}

/// Per-dataset sequential times, the data behind a baseline bar chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineSummary {
    pub dataset_key: String,
    pub display_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_ms: Option<f64>,
    /// Minimum over the groups where the dataset is present.
    pub minimum_ms: f64,
}

/// The complete analyzer output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedupReport {
    /// Canonical-group series, each under its own table's baseline.
    pub canonical: GroupView,
    /// Alternate-group series, each under its own table's baseline.
    pub alternate: GroupView,
    /// Canonical-group series re-normalized by shared minimum baselines.
    pub canonical_min_baseline: GroupView,
    /// Alternate-group series re-normalized by shared minimum baselines.
    pub alternate_min_baseline: GroupView,
    /// Optional same-dataset cross-run comparison (e.g. static vs dynamic
    /// scheduling) under one shared minimum baseline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_run: Option<GroupView>,
    pub baselines: Vec<BaselineSummary>,
}

impl GroupView {
    pub fn new(title: &str, series: Vec<SpeedupSeries>) -> Self {
        let max_threads = series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.threads))
            .max()
            .unwrap_or(0);
        GroupView {
            title: title.to_string(),
            max_threads,
            series,
        }
    }
}
