use std::env;
use std::time::{Duration, Instant};

use ordered_float::OrderedFloat;
use rand::prelude::*;
use relax_sssp::graph::generators::{random_graph, GeneratedGraph};
use relax_sssp::{Dijkstra, NullVisitor, RecordingVisitor};

// Runs a full search and an early-exit search to the farthest reachable vertex
fn benchmark_graph(generated: &GeneratedGraph, source: usize) -> (Duration, Duration, usize, usize) {
    let weights = generated.weight_map();
    let dijkstra = Dijkstra::new();

    let start = Instant::now();
    let state = match dijkstra.find_shortest_paths(&weights, &source, NullVisitor) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("search failed: {}", err);
            return (Duration::ZERO, Duration::ZERO, 0, 0);
        }
    };
    let full_time = start.elapsed();

    let reachable = state.finished_count();
    let farthest = state
        .distances()
        .max_by(|a, b| a.1.cmp(&b.1))
        .map(|(vertex, _)| *vertex)
        .unwrap_or(source);

    // Count relaxations on a second pass; recording costs time so it is not measured
    let mut recorder: RecordingVisitor<usize, OrderedFloat<f64>> = RecordingVisitor::new();
    let relaxations = match dijkstra.find_shortest_paths(&weights, &source, &mut recorder) {
        Ok(_) => recorder
            .events
            .iter()
            .filter(|event| matches!(event, relax_sssp::VisitEvent::EdgeRelaxed { .. }))
            .count(),
        Err(_) => 0,
    };

    let start = Instant::now();
    let path = dijkstra.shortest_path(&weights, &source, &farthest, NullVisitor);
    let single_time = start.elapsed();
    if let Ok(Some(path)) = path {
        log::info!("path to farthest vertex {} has {} hops", farthest, path.len() - 1);
    }

    (full_time, single_time, reachable, relaxations)
}

fn main() {
    env_logger::init();

    // Usage: benchmark [edge_factor] [seed]
    let args: Vec<String> = env::args().collect();
    let edge_factor: f64 = args.get(1).and_then(|arg| arg.parse().ok()).unwrap_or(2.0);
    let seed: u64 = args.get(2).and_then(|arg| arg.parse().ok()).unwrap_or(42);

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    println!("=====================================================");
    println!("Benchmark: visitor-driven Dijkstra");
    println!("Edge factor: {} edges per vertex (on average), seed {}", edge_factor, seed);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let generated = random_graph(size, edge_factor, &mut rng);
        let (full, single, reachable, relaxations) = benchmark_graph(&generated, 0);
        println!("  - {} reachable vertices, {} relaxations", reachable, relaxations);
        results.push((size, full, single, reachable));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Full (ms)", "To farthest (ms)", "Reachable");
    println!("-----------------------------------------------------");
    for (size, full, single, reachable) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<10}",
            size,
            full.as_secs_f64() * 1000.0,
            single.as_secs_f64() * 1000.0,
            reachable
        );
    }
}
