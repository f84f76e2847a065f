//! Source-identifier naming conventions.
//!
//! Benchmark exports carry no explicit join key; the file name alone says
//! which dataset a table belongs to and which implementation variant
//! produced it (`pagerank_v2_speedup_soc_LiveJournal1.csv` is the alternate
//! run of `pagerank_speedup_soc_LiveJournal1.csv`). That convention is kept
//! behind a trait so it can change without touching the analyzer.

/// The two recognized implementation families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantGroup {
    Canonical,
    Alternate,
}

/// What a raw source identifier resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceName {
    /// Identifier shared by all variants of the same dataset.
    pub dataset_key: String,
    pub group: VariantGroup,
    /// Short human label for chart legends.
    pub display_label: String,
}

pub trait NamingConvention {
    fn classify(&self, source_id: &str) -> SourceName;
}

/// Marker-based convention: identifiers containing the marker belong to the
/// alternate group, and stripping the marker recovers the canonical key.
#[derive(Debug, Clone)]
pub struct MarkerConvention {
    marker: String,
}

impl MarkerConvention {
    pub const DEFAULT_MARKER: &'static str = "_v2";

    pub fn new(marker: &str) -> Self {
        MarkerConvention {
            marker: marker.to_string(),
        }
    }
}

impl Default for MarkerConvention {
    fn default() -> Self {
        MarkerConvention::new(Self::DEFAULT_MARKER)
    }
}

impl NamingConvention for MarkerConvention {
    fn classify(&self, source_id: &str) -> SourceName {
        match source_id.find(&self.marker) {
            Some(at) => {
                let mut key = String::with_capacity(source_id.len() - self.marker.len());
                key.push_str(&source_id[..at]);
                key.push_str(&source_id[at + self.marker.len()..]);
                SourceName {
                    display_label: display_label(&key),
                    dataset_key: key,
                    group: VariantGroup::Alternate,
                }
            }
            None => SourceName {
                dataset_key: source_id.to_string(),
                group: VariantGroup::Canonical,
                display_label: display_label(source_id),
            },
        }
    }
}

/// Legend label for an export name like `pagerank_speedup_soc_LiveJournal1.csv`:
/// the slice after the second `_` up to the first `.` (`soc_LiveJournal1`).
/// Identifiers that don't match the shape keep their full name.
fn display_label(id: &str) -> String {
    let after_second = id.match_indices('_').nth(1).map(|(i, _)| i + 1);
    let end = id.find('.').unwrap_or(id.len());
    match after_second {
        Some(start) if start < end => id[start..end].to_string(),
        _ => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_identifier_joins_the_alternate_group_under_the_stripped_key() {
        let naming = MarkerConvention::default();
        let name = naming.classify("pagerank_v2_soc_LiveJournal1.csv");
        assert_eq!(name.dataset_key, "pagerank_soc_LiveJournal1.csv");
        assert_eq!(name.group, VariantGroup::Alternate);
    }

    #[test]
    fn unmarked_identifier_stays_canonical_and_unchanged() {
        let naming = MarkerConvention::default();
        let name = naming.classify("pagerank_speedup_soc_LiveJournal1.csv");
        assert_eq!(name.dataset_key, "pagerank_speedup_soc_LiveJournal1.csv");
        assert_eq!(name.group, VariantGroup::Canonical);
        assert_eq!(name.display_label, "soc_LiveJournal1");
    }

    #[test]
    fn label_falls_back_to_the_full_identifier() {
        let naming = MarkerConvention::default();
        assert_eq!(naming.classify("results.csv").display_label, "results.csv");
        assert_eq!(naming.classify("a_b.csv").display_label, "a_b.csv");
    }

    #[test]
    fn custom_marker() {
        let naming = MarkerConvention::new("_dyn");
        let name = naming.classify("pagerank_dyn_speedup_roadNet_CA.csv");
        assert_eq!(name.dataset_key, "pagerank_speedup_roadNet_CA.csv");
        assert_eq!(name.group, VariantGroup::Alternate);
        assert_eq!(name.display_label, "roadNet_CA");
    }
}
