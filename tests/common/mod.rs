//! Shared test utilities for loading timing fixtures.

use std::path::{Path, PathBuf};

use graphmark::TimingTable;

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn timings_dir() -> PathBuf {
    data_dir().join("timings")
}

/// The independently captured static-scheduling run of the LiveJournal
/// dataset, kept outside the scanned directory like a `src_old/` export.
pub fn static_run_path() -> PathBuf {
    data_dir()
        .join("timings_static")
        .join("pagerank_speedup_soc_LiveJournal1.csv")
}

/// Load every `.csv` table in `dir`, sorted by file name.
pub fn load_timing_tables(dir: &Path) -> Vec<TimingTable> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .expect("failed to read fixture dir")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|p| TimingTable::load(p).expect("failed to load fixture table"))
        .collect()
}
