//! Edge-list serialization.
//!
//! The file format is the sole interface to the benchmark executables that
//! consume generated graphs: UTF-8 text, one `src dst` pair of node ids per
//! line, separated by a single space (the same shape as LDBC `.e` files).
//! No header, no edge count, no trailing metadata; line order carries no
//! meaning.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Write a graph's edge list to `path`.
///
/// The list is staged in a temporary file in the destination directory and
/// renamed into place once fully written, so a failed run never leaves a
/// partial file behind.
pub fn write(graph: &Graph, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| Error::io(path, e))?;

    {
        let mut out = BufWriter::new(staged.as_file_mut());
        for &(u, v) in graph.edges() {
            writeln!(out, "{} {}", u, v).map_err(|e| Error::io(path, e))?;
        }
        out.flush().map_err(|e| Error::io(path, e))?;
    }

    staged.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}

/// Read an edge list back into `(src, dst)` pairs.
///
/// Tolerates any whitespace run between the two ids and skips blank lines.
/// Order is preserved as written; membership, not order, is the contract.
pub fn read(path: &Path) -> Result<Vec<(u64, u64)>> {
    let source_id = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let mut edges = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (src, dst) = match (parts.next(), parts.next(), parts.next()) {
            (Some(s), Some(d), None) => (s, d),
            _ => {
                return Err(Error::MalformedInput {
                    source_id: source_id.clone(),
                    line: idx + 1,
                    reason: format!("expected 'src dst', got '{}'", line),
                })
            }
        };
        let src = src.parse::<u64>().map_err(|_| Error::MalformedInput {
            source_id: source_id.clone(),
            line: idx + 1,
            reason: format!("bad node id '{}'", src),
        })?;
        let dst = dst.parse::<u64>().map_err(|_| Error::MalformedInput {
            source_id: source_id.clone(),
            line: idx + 1,
            reason: format!("bad node id '{}'", dst),
        })?;
        edges.push((src, dst));
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn write_rejects_missing_directory() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = Graph::gen_exact(4, 6, &mut rng).unwrap();
        let target = Path::new("/nonexistent-graphmark-dir/graph.txt");
        let err = write(&g, target).unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "got {err:?}");
        assert!(!target.exists());
    }

    #[test]
    fn read_rejects_short_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "0 1\n2\n").unwrap();
        let err = read(&path).unwrap_err();
        match err {
            Error::MalformedInput { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn read_rejects_non_numeric_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "0 one\n").unwrap();
        assert!(matches!(
            read(&path).unwrap_err(),
            Error::MalformedInput { .. }
        ));
    }
}
