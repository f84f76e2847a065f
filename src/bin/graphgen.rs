//! Random directed graph generator.
//!
//! Produces a benchmark input graph and writes it as a plain edge list
//! (`src dst` per line, space-separated).
//!
//! Usage: `graphgen --nodes <n> (--edges <m> | --prob <p>) --out <path> [--seed <s>]`

use std::path::PathBuf;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use graphmark::{edgelist, Graph};

struct Config {
    nodes: usize,
    edges: Option<usize>,
    prob: Option<f64>,
    out: PathBuf,
    seed: Option<u64>,
}

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} --nodes <n> (--edges <m> | --prob <p>) --out <path> [--seed <s>]",
        program
    );
    eprintln!();
    eprintln!("  --nodes <n>   node count");
    eprintln!("  --edges <m>   exact edge count (exact-count mode)");
    eprintln!("  --prob <p>    per-edge probability in [0, 1] (probabilistic mode)");
    eprintln!("  --out <path>  destination edge-list file");
    eprintln!("  --seed <s>    RNG seed for reproducible graphs");
    process::exit(1);
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut nodes = None;
    let mut edges = None;
    let mut prob = None;
    let mut out = None;
    let mut seed = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--nodes" => {
                i += 1;
                nodes = args.get(i).and_then(|v| v.parse().ok());
            }
            "--edges" => {
                i += 1;
                edges = args.get(i).and_then(|v| v.parse().ok());
            }
            "--prob" => {
                i += 1;
                prob = args.get(i).and_then(|v| v.parse().ok());
            }
            "--out" => {
                i += 1;
                out = args.get(i).map(PathBuf::from);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse().ok());
            }
            _ => usage(&args[0]),
        }
        i += 1;
    }

    let (Some(nodes), Some(out)) = (nodes, out) else {
        usage(&args[0]);
    };
    // exactly one mode selects the generator
    if edges.is_some() == prob.is_some() {
        eprintln!("Error: supply exactly one of --edges / --prob");
        usage(&args[0]);
    }

    Config {
        nodes,
        edges,
        prob,
        out,
        seed,
    }
}

fn main() {
    let config = parse_args();

    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let result = match (config.edges, config.prob) {
        (Some(m), None) => Graph::gen_exact(config.nodes, m, &mut rng),
        (None, Some(p)) => Graph::gen_probabilistic(config.nodes, p, &mut rng),
        _ => unreachable!("parse_args enforces one mode"),
    };

    let graph = result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if let Err(e) = edgelist::write(&graph, &config.out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    eprintln!("Number of nodes: {}", graph.node_count());
    eprintln!("Number of edges: {}", graph.edge_count());
    eprintln!("Density: {:.6}", graph.density());
    eprintln!("Edge list written to {}", config.out.display());
}
