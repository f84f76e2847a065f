//! Speedup analyzer front end.
//!
//! Scans a directory of timing CSVs (one per algorithm/dataset/scheduling
//! combination), builds the four analysis views, prints a summary, and can
//! export the chart-ready report as JSON.
//!
//! Usage: `speedup <dir> [--marker <m>] [--compare <fileA> <fileB>]
//!         [--labels <a,b>] [--json <path>]`

use std::path::{Path, PathBuf};
use std::process;

use graphmark::{
    Analyzer, GroupView, LabeledRun, MarkerConvention, NamingConvention, SpeedupReport, TimingTable,
};

struct Config {
    dir: PathBuf,
    marker: String,
    compare: Option<(PathBuf, PathBuf)>,
    labels: Option<(String, String)>,
    json: Option<PathBuf>,
}

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} <dir> [--marker <m>] [--compare <fileA> <fileB>] [--labels <a,b>] [--json <path>]",
        program
    );
    eprintln!();
    eprintln!("  <dir>                    directory of timing CSVs");
    eprintln!("  --marker <m>             alternate-variant marker (default {})", MarkerConvention::DEFAULT_MARKER);
    eprintln!("  --compare <fileA> <fileB> cross-run comparison pair for one dataset");
    eprintln!("  --labels <a,b>           legend labels for the comparison pair");
    eprintln!("  --json <path>            write the chart-ready report as JSON");
    process::exit(1);
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut dir = None;
    let mut marker = MarkerConvention::DEFAULT_MARKER.to_string();
    let mut compare = None;
    let mut labels = None;
    let mut json = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--marker" => {
                i += 1;
                match args.get(i) {
                    Some(m) => marker = m.clone(),
                    None => usage(&args[0]),
                }
            }
            "--compare" => {
                match (args.get(i + 1), args.get(i + 2)) {
                    (Some(a), Some(b)) => compare = Some((PathBuf::from(a), PathBuf::from(b))),
                    _ => usage(&args[0]),
                }
                i += 2;
            }
            "--labels" => {
                i += 1;
                match args.get(i).and_then(|v| v.split_once(',')) {
                    Some((a, b)) => labels = Some((a.to_string(), b.to_string())),
                    None => usage(&args[0]),
                }
            }
            "--json" => {
                i += 1;
                json = args.get(i).map(PathBuf::from);
            }
            other if dir.is_none() && !other.starts_with("--") => {
                dir = Some(PathBuf::from(other));
            }
            _ => usage(&args[0]),
        }
        i += 1;
    }

    let Some(dir) = dir else {
        usage(&args[0]);
    };

    Config {
        dir,
        marker,
        compare,
        labels,
        json,
    }
}

/// Collect `.csv` files in `dir`, sorted by file name.
fn scan_csv_files(dir: &Path) -> Vec<PathBuf> {
    let entries = std::fs::read_dir(dir).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", dir.display(), e);
        process::exit(1);
    });

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();
    paths
}

fn load_table(path: &Path) -> TimingTable {
    TimingTable::load(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    })
}

fn print_view(view: &GroupView) {
    println!();
    println!("{} (max threads: {})", view.title, view.max_threads);
    println!(
        "{:<30} | {:>12} | {:>8} | {:>14}",
        "Series", "Baseline", "Points", "Peak speedup"
    );
    println!("{}", "-".repeat(74));
    for series in &view.series {
        let peak = series
            .points
            .iter()
            .max_by(|a, b| a.speedup.total_cmp(&b.speedup));
        let peak = match peak {
            Some(p) => format!("{:.3} @ {}t", p.speedup, p.threads),
            None => "-".to_string(),
        };
        println!(
            "{:<30} | {:>9.1} ms | {:>8} | {:>14}",
            series.label,
            series.baseline_ms,
            series.points.len(),
            peak
        );
    }
}

fn print_baselines(report: &SpeedupReport) {
    println!(
        "{:<30} | {:>12} | {:>12} | {:>12}",
        "Dataset", "Canonical", "Alternate", "Minimum"
    );
    println!("{}", "-".repeat(78));
    for b in &report.baselines {
        let fmt = |ms: Option<f64>| match ms {
            Some(ms) => format!("{:.1} ms", ms),
            None => "-".to_string(),
        };
        println!(
            "{:<30} | {:>12} | {:>12} | {:>9.1} ms",
            b.display_label,
            fmt(b.canonical_ms),
            fmt(b.alternate_ms),
            b.minimum_ms
        );
    }
}

fn main() {
    let config = parse_args();
    let naming = MarkerConvention::new(&config.marker);

    let paths = scan_csv_files(&config.dir);
    if paths.is_empty() {
        eprintln!("No .csv timing tables in {}", config.dir.display());
        process::exit(1);
    }
    eprintln!(
        "Found {} timing tables in {}",
        paths.len(),
        config.dir.display()
    );

    let tables: Vec<TimingTable> = paths.iter().map(|p| load_table(p)).collect();
    let analyzer = Analyzer::from_tables(tables, &naming);

    let mut report = analyzer.report().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if let Some((path_a, path_b)) = &config.compare {
        let table_a = load_table(path_a);
        let table_b = load_table(path_b);
        let dataset_key = naming.classify(table_a.source_id()).dataset_key;
        let (label_a, label_b) = config.labels.clone().unwrap_or_else(|| {
            (
                table_a.source_id().to_string(),
                table_b.source_id().to_string(),
            )
        });
        let runs = [
            LabeledRun {
                label: label_a,
                table: table_a,
            },
            LabeledRun {
                label: label_b,
                table: table_b,
            },
        ];
        let view = analyzer
            .cross_run_view(&dataset_key, &runs)
            .unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                process::exit(1);
            });
        report.cross_run = Some(view);
    }

    print_baselines(&report);
    print_view(&report.canonical);
    print_view(&report.alternate);
    print_view(&report.canonical_min_baseline);
    print_view(&report.alternate_min_baseline);
    if let Some(cross) = &report.cross_run {
        print_view(cross);
    }

    if let Some(path) = &config.json {
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            eprintln!("Error serializing report: {}", e);
            process::exit(1);
        });
        if let Err(e) = std::fs::write(path, json) {
            eprintln!("Error writing {}: {}", path.display(), e);
            process::exit(1);
        }
        eprintln!("Report saved to {}", path.display());
    }
}
