//! Test-graph synthesis and speedup analysis for parallel graph algorithm
//! benchmarks.
//!
//! Two independent pipelines composed only through files on disk:
//!
//! - [`graph`] + [`edgelist`] synthesize random directed graphs (exact edge
//!   count or per-edge probability) and write them as plain edge lists for
//!   external benchmark executables to consume.
//! - [`timing`], [`naming`], and [`analyze`] read the timing CSVs those
//!   benchmarks export, derive per-table sequential baselines, normalize
//!   speedup curves across implementation variants, and hand the resulting
//!   [`schema`] series to a charting collaborator.
//!
//! The parallel algorithms under measurement and the chart rendering are
//! both external to this crate.

pub mod analyze;
pub mod edgelist;
pub mod error;
pub mod graph;
pub mod naming;
pub mod schema;
pub mod timing;

pub use analyze::{partition_by_variant, speedup_series, Analyzer, LabeledRun, VariantGroups};
pub use error::{Error, Result};
pub use graph::Graph;
pub use naming::{MarkerConvention, NamingConvention, SourceName, VariantGroup};
pub use schema::{BaselineSummary, GroupView, SpeedupPoint, SpeedupReport, SpeedupSeries};
pub use timing::{TimingRecord, TimingTable};
