//! Generator invariants: exact edge counts, probabilistic bounds, and
//! edge-list round-trips.

use std::collections::HashSet;

use petgraph::graphmap::DiGraphMap;
use rand::rngs::StdRng;
use rand::SeedableRng;

use graphmark::{edgelist, Graph};

#[test]
fn exact_count_yields_distinct_non_self_pairs() {
    let mut rng = StdRng::seed_from_u64(42);
    let g = Graph::gen_exact(10, 40, &mut rng).unwrap();

    assert_eq!(g.node_count(), 10);
    assert_eq!(g.edge_count(), 40);

    let distinct: HashSet<(u64, u64)> = g.edges().iter().copied().collect();
    assert_eq!(distinct.len(), 40, "duplicate edges in generated graph");
    for &(u, v) in g.edges() {
        assert_ne!(u, v, "self-loop {}->{}", u, v);
        assert!(u < 10 && v < 10, "edge {}->{} outside node range", u, v);
    }
}

#[test]
fn exact_count_can_fill_the_whole_edge_space() {
    let mut rng = StdRng::seed_from_u64(42);
    let g = Graph::gen_exact(5, 20, &mut rng).unwrap();

    let got: HashSet<(u64, u64)> = g.edges().iter().copied().collect();
    let mut want = HashSet::new();
    for u in 0..5u64 {
        for v in 0..5u64 {
            if u != v {
                want.insert((u, v));
            }
        }
    }
    assert_eq!(got, want);
}

#[test]
fn probability_one_is_the_complete_graph() {
    let mut rng = StdRng::seed_from_u64(7);
    let g = Graph::gen_probabilistic(9, 1.0, &mut rng).unwrap();
    assert_eq!(g.edge_count(), 9 * 8);
    assert_eq!(g.density(), 1.0);
}

#[test]
fn probability_zero_is_the_empty_graph() {
    let mut rng = StdRng::seed_from_u64(7);
    let g = Graph::gen_probabilistic(9, 0.0, &mut rng).unwrap();
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn petgraph_agrees_on_the_edge_set_shape() {
    let mut rng = StdRng::seed_from_u64(99);
    let g = Graph::gen_exact(50, 800, &mut rng).unwrap();

    // DiGraphMap collapses duplicates, so equal counts prove set-ness
    let check: DiGraphMap<u64, ()> =
        DiGraphMap::from_edges(g.edges().iter().map(|&(u, v)| (u, v)));
    assert_eq!(check.edge_count(), g.edge_count());
    for node in check.nodes() {
        assert!(node < 50);
    }
}

#[test]
fn edge_list_round_trips_as_a_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");

    let mut rng = StdRng::seed_from_u64(5);
    let g = Graph::gen_exact(30, 250, &mut rng).unwrap();
    edgelist::write(&g, &path).unwrap();

    let reread = edgelist::read(&path).unwrap();
    let original: HashSet<(u64, u64)> = g.edges().iter().copied().collect();
    let recovered: HashSet<(u64, u64)> = reread.iter().copied().collect();
    assert_eq!(recovered, original);
    assert_eq!(reread.len(), g.edge_count());
}

#[test]
fn probabilistic_edges_round_trip_too() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");

    let mut rng = StdRng::seed_from_u64(11);
    let g = Graph::gen_probabilistic(40, 0.2, &mut rng).unwrap();
    edgelist::write(&g, &path).unwrap();

    let recovered: HashSet<(u64, u64)> = edgelist::read(&path).unwrap().into_iter().collect();
    let original: HashSet<(u64, u64)> = g.edges().iter().copied().collect();
    assert_eq!(recovered, original);
}

#[test]
fn seeded_generation_is_reproducible() {
    let mut a = StdRng::seed_from_u64(123);
    let mut b = StdRng::seed_from_u64(123);
    let ga = Graph::gen_exact(20, 100, &mut a).unwrap();
    let gb = Graph::gen_exact(20, 100, &mut b).unwrap();
    assert_eq!(ga.edges(), gb.edges());
}
