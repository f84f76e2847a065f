//! Speedup analysis: variant partitioning, baselines, and the four-view
//! aggregation contract.
//!
//! Every computation here is a pure transformation over already-loaded
//! timing tables. A table that failed to load never reaches this module, so
//! a view can only be built from a complete set of inputs; nothing is
//! silently dropped.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::naming::{NamingConvention, VariantGroup};
use crate::schema::{BaselineSummary, GroupView, SpeedupPoint, SpeedupReport, SpeedupSeries};
use crate::timing::TimingTable;

/// A timing table filed under its dataset key, with the legend label the
/// naming convention derived for it.
#[derive(Debug, Clone)]
pub struct GroupedTable {
    pub display_label: String,
    pub table: TimingTable,
}

/// The canonical and alternate variant groups, keyed by dataset key.
///
/// `BTreeMap` keeps each group ordered by key, which is the presentation
/// order downstream.
#[derive(Debug, Clone, Default)]
pub struct VariantGroups {
    pub canonical: BTreeMap<String, GroupedTable>,
    pub alternate: BTreeMap<String, GroupedTable>,
}

/// Split tables into variant groups using the naming convention.
///
/// Alternate-group entries are filed under the marker-stripped key they
/// share with their canonical counterpart; that key is the only join
/// between the two groups.
pub fn partition_by_variant(
    tables: Vec<TimingTable>,
    naming: &dyn NamingConvention,
) -> VariantGroups {
    let mut groups = VariantGroups::default();
    for table in tables {
        let name = naming.classify(table.source_id());
        let entry = GroupedTable {
            display_label: name.display_label,
            table,
        };
        match name.group {
            VariantGroup::Canonical => groups.canonical.insert(name.dataset_key, entry),
            VariantGroup::Alternate => groups.alternate.insert(name.dataset_key, entry),
        };
    }
    groups
}

impl VariantGroups {
    fn group(&self, which: VariantGroup) -> &BTreeMap<String, GroupedTable> {
        match which {
            VariantGroup::Canonical => &self.canonical,
            VariantGroup::Alternate => &self.alternate,
        }
    }

    /// Union of both groups' dataset keys, in key order.
    pub fn dataset_keys(&self) -> Vec<&str> {
        let keys: BTreeSet<&str> = self
            .canonical
            .keys()
            .chain(self.alternate.keys())
            .map(String::as_str)
            .collect();
        keys.into_iter().collect()
    }

    /// The fair normalization constant for one dataset: the smallest own
    /// baseline among the groups that have it. Groups without the dataset
    /// are excluded from the minimum, not treated as zero.
    pub fn minimum_baseline(&self, dataset_key: &str) -> Result<f64> {
        let mut minimum: Option<f64> = None;
        for entry in [
            self.canonical.get(dataset_key),
            self.alternate.get(dataset_key),
        ]
        .into_iter()
        .flatten()
        {
            let baseline = entry.table.own_baseline();
            minimum = Some(match minimum {
                Some(current) => current.min(baseline),
                None => baseline,
            });
        }
        minimum.ok_or_else(|| Error::MissingDatasetKey(dataset_key.to_string()))
    }
}

/// Divide a baseline time through a table's records.
///
/// The series has the same length and row order as the table; nothing is
/// re-sorted by thread count.
pub fn speedup_series(label: &str, table: &TimingTable, baseline_ms: f64) -> Result<SpeedupSeries> {
    // NaN fails this comparison too
    if !(baseline_ms > 0.0) {
        return Err(Error::InvalidBaseline(baseline_ms));
    }
    let points = table
        .records()
        .iter()
        .map(|r| SpeedupPoint {
            threads: r.threads,
            speedup: baseline_ms / r.elapsed_ms,
        })
        .collect();
    Ok(SpeedupSeries {
        label: label.to_string(),
        baseline_ms,
        points,
    })
}

/// One run of a cross-run comparison: a chart label plus its table.
#[derive(Debug, Clone)]
pub struct LabeledRun {
    pub label: String,
    pub table: TimingTable,
}

/// Builds the analyzer's output views from partitioned timing tables.
pub struct Analyzer {
    groups: VariantGroups,
}

impl Analyzer {
    pub fn new(groups: VariantGroups) -> Self {
        Analyzer { groups }
    }

    /// Partition `tables` with `naming` and wrap the result.
    pub fn from_tables(tables: Vec<TimingTable>, naming: &dyn NamingConvention) -> Self {
        Analyzer::new(partition_by_variant(tables, naming))
    }

    pub fn groups(&self) -> &VariantGroups {
        &self.groups
    }

    /// One group's series, each normalized by its own table's baseline.
    pub fn own_baseline_view(&self, which: VariantGroup, title: &str) -> Result<GroupView> {
        let mut series = Vec::new();
        for entry in self.groups.group(which).values() {
            series.push(speedup_series(
                &entry.display_label,
                &entry.table,
                entry.table.own_baseline(),
            )?);
        }
        Ok(GroupView::new(title, series))
    }

    /// One group's series, each normalized by its dataset's shared minimum
    /// baseline, so variants of the same dataset are directly comparable.
    pub fn minimum_baseline_view(&self, which: VariantGroup, title: &str) -> Result<GroupView> {
        let mut series = Vec::new();
        for (key, entry) in self.groups.group(which) {
            let baseline = self.groups.minimum_baseline(key)?;
            series.push(speedup_series(&entry.display_label, &entry.table, baseline)?);
        }
        Ok(GroupView::new(title, series))
    }

    /// Same-dataset comparison of independently captured runs (e.g. static
    /// vs dynamic scheduling), all normalized by the dataset's minimum
    /// baseline taken from the partitioned groups.
    ///
    /// Fails with `MissingDatasetKey` when `dataset_key` is in neither
    /// group, since there is no baseline to share.
    pub fn cross_run_view(&self, dataset_key: &str, runs: &[LabeledRun]) -> Result<GroupView> {
        let baseline = self.groups.minimum_baseline(dataset_key)?;
        let mut series = Vec::new();
        for run in runs {
            series.push(speedup_series(&run.label, &run.table, baseline)?);
        }
        Ok(GroupView::new(dataset_key, series))
    }

    /// Per-dataset baseline summary across both groups, in key order.
    pub fn baseline_summaries(&self) -> Result<Vec<BaselineSummary>> {
        let mut summaries = Vec::new();
        for key in self.groups.dataset_keys() {
            let canonical = self.groups.canonical.get(key);
            let alternate = self.groups.alternate.get(key);
            let display_label = canonical
                .or(alternate)
                .map(|e| e.display_label.clone())
                .unwrap_or_else(|| key.to_string());
            summaries.push(BaselineSummary {
                dataset_key: key.to_string(),
                display_label,
                canonical_ms: canonical.map(|e| e.table.own_baseline()),
                alternate_ms: alternate.map(|e| e.table.own_baseline()),
                minimum_ms: self.groups.minimum_baseline(key)?,
            });
        }
        Ok(summaries)
    }

    /// Assemble the full output surface. The cross-run view, when wanted,
    /// is built separately with [`Analyzer::cross_run_view`] and attached
    /// by the caller.
    pub fn report(&self) -> Result<SpeedupReport> {
        Ok(SpeedupReport {
            canonical: self.own_baseline_view(VariantGroup::Canonical, "canonical/own-baseline")?,
            alternate: self.own_baseline_view(VariantGroup::Alternate, "alternate/own-baseline")?,
            canonical_min_baseline: self
                .minimum_baseline_view(VariantGroup::Canonical, "canonical/min-baseline")?,
            alternate_min_baseline: self
                .minimum_baseline_view(VariantGroup::Alternate, "alternate/min-baseline")?,
            cross_run: None,
            baselines: self.baseline_summaries()?,
        })
    }
}
