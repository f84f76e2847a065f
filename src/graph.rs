//! Random directed graph synthesis.
//!
//! Two construction models, both over the node set `{0 .. n-1}` with no
//! self-loops and no duplicate edges:
//!
//! - exact-count (G(n, m)): exactly `m` ordered pairs drawn uniformly
//!   without replacement from the `n * (n - 1)` possible directed edges
//! - probabilistic (G(n, p)): each ordered pair included independently
//!   with probability `p`; the realized edge count is a random outcome
//!
//! A graph is built once, serialized via [`crate::edgelist`], and dropped.
//! There is no mutation API.

use rand::distributions::{Bernoulli, Distribution};
use rand::Rng;

use crate::error::{Error, Result};

/// A directed graph held as a node count plus an edge list.
///
/// Edge order is whatever the generator produced; only edge-set membership
/// is meaningful to consumers.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: usize,
    edges: Vec<(u64, u64)>,
}

impl Graph {
    /// Generate a graph with exactly `m` edges.
    ///
    /// Requires `n >= 2` and `m <= n * (n - 1)`. Edges are drawn uniformly
    /// without replacement by sampling `m` distinct indices into the space
    /// of all non-self ordered pairs, so the count, no-duplicate, and
    /// no-self-loop invariants hold by construction.
    pub fn gen_exact<R: Rng + ?Sized>(n: usize, m: usize, rng: &mut R) -> Result<Self> {
        if n < 2 {
            return Err(Error::InvalidParameter(format!(
                "node count must be at least 2 for exact-count generation, got {}",
                n
            )));
        }
        let space = n.checked_mul(n - 1).ok_or_else(|| {
            Error::InvalidParameter(format!("edge space n*(n-1) overflows for n = {}", n))
        })?;
        if m > space {
            return Err(Error::InvalidParameter(format!(
                "edge count {} exceeds the {} possible directed edges of a {}-node graph",
                m, space, n
            )));
        }

        let edges = rand::seq::index::sample(rng, space, m)
            .iter()
            .map(|k| pair_at(n, k))
            .collect();

        Ok(Graph { nodes: n, edges })
    }

    /// Generate a graph where each ordered pair is present with probability `p`.
    ///
    /// Requires `n >= 1` and `p` in `[0, 1]`. The expected edge count is
    /// `p * n * (n - 1)`; the realized count is not forced to any value.
    pub fn gen_probabilistic<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<Self> {
        if n < 1 {
            return Err(Error::InvalidParameter(
                "node count must be at least 1".to_string(),
            ));
        }
        let coin = Bernoulli::new(p).map_err(|_| {
            Error::InvalidParameter(format!("edge probability must be within [0, 1], got {}", p))
        })?;

        let mut edges = Vec::new();
        for u in 0..n as u64 {
            for v in 0..n as u64 {
                if u != v && coin.sample(rng) {
                    edges.push((u, v));
                }
            }
        }

        Ok(Graph { nodes: n, edges })
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[(u64, u64)] {
        &self.edges
    }

    /// Fraction of the `n * (n - 1)` possible directed edges that are present.
    pub fn density(&self) -> f64 {
        if self.nodes < 2 {
            return 0.0;
        }
        self.edges.len() as f64 / (self.nodes * (self.nodes - 1)) as f64
    }
}

/// Map an index in `[0, n*(n-1))` to the ordered pair it denotes.
///
/// Row `u` holds the `n - 1` pairs leaving `u`; the diagonal is skipped by
/// shifting targets at or past `u` up by one. Bijective, so distinct indices
/// always give distinct non-self pairs.
fn pair_at(n: usize, k: usize) -> (u64, u64) {
    let u = k / (n - 1);
    let r = k % (n - 1);
    let v = if r < u { r } else { r + 1 };
    (u as u64, v as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn pair_index_is_a_bijection() {
        let n = 7;
        let pairs: HashSet<(u64, u64)> = (0..n * (n - 1)).map(|k| pair_at(n, k)).collect();
        assert_eq!(pairs.len(), n * (n - 1));
        for &(u, v) in &pairs {
            assert_ne!(u, v);
            assert!(u < n as u64 && v < n as u64);
        }
    }

    #[test]
    fn exact_rejects_more_edges_than_pairs() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = Graph::gen_exact(5, 21, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)), "got {err:?}");
    }

    #[test]
    fn exact_rejects_degenerate_node_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Graph::gen_exact(0, 0, &mut rng).is_err());
        assert!(Graph::gen_exact(1, 0, &mut rng).is_err());
    }

    #[test]
    fn probabilistic_rejects_out_of_range_probability() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Graph::gen_probabilistic(4, -0.1, &mut rng).is_err());
        assert!(Graph::gen_probabilistic(4, 1.5, &mut rng).is_err());
        assert!(Graph::gen_probabilistic(4, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn single_node_probabilistic_graph_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = Graph::gen_probabilistic(1, 1.0, &mut rng).unwrap();
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.density(), 0.0);
    }

    #[test]
    fn density_of_full_graph_is_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = Graph::gen_exact(6, 30, &mut rng).unwrap();
        assert_eq!(g.density(), 1.0);
    }
}
