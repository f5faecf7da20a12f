use crate::graph::{AdjacencyGraph, Graph, WeightMap};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::collections::HashMap;

/// A generated graph together with its raw edge weights
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    pub graph: AdjacencyGraph<usize>,
    pub weights: HashMap<(usize, usize), OrderedFloat<f64>>,
}

impl GeneratedGraph {
    fn new(directed: bool) -> Self {
        GeneratedGraph {
            graph: if directed {
                AdjacencyGraph::directed()
            } else {
                AdjacencyGraph::undirected()
            },
            weights: HashMap::new(),
        }
    }

    fn connect(&mut self, from: usize, to: usize, weight: f64) {
        self.graph.add_edge(from, to);
        self.weights.insert((from, to), OrderedFloat(weight));
    }

    /// Borrows the graph with its weights for a search
    pub fn weight_map(&self) -> WeightMap<'_, AdjacencyGraph<usize>, usize, OrderedFloat<f64>> {
        WeightMap::from_map(&self.graph, self.weights.iter().map(|(edge, w)| (*edge, *w)))
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

/// Generates a random directed graph with roughly `edge_factor * n` edges
/// Weights are drawn uniformly from [1, 100)
pub fn random_graph<R: Rng>(n: usize, edge_factor: f64, rng: &mut R) -> GeneratedGraph {
    let mut generated = GeneratedGraph::new(true);
    for v in 0..n {
        generated.graph.add_vertex(v);
    }
    if n < 2 {
        return generated;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            generated.connect(u, v, weight);
        }
    }

    generated
}

/// Generates an undirected `width * height` grid with 8-connectivity
/// Straight moves cost 1.0 and diagonal moves 1.4; vertex ids are `y * width + x`
pub fn grid_graph(width: usize, height: usize) -> GeneratedGraph {
    let mut generated = GeneratedGraph::new(false);
    for v in 0..(width * height) {
        generated.graph.add_vertex(v);
    }

    // Each undirected edge only needs one stored orientation
    let directions = [(1, 0, 1.0), (0, 1, 1.0), (1, 1, 1.4), (-1, 1, 1.4)];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    generated.connect(vertex, neighbor, cost);
                }
            }
        }
    }

    generated
}

/// Generates a random geometric graph in the unit square
/// n: number of vertices
/// r: connection radius (vertices within distance r are connected)
pub fn geometric_graph<R: Rng>(n: usize, r: f64, rng: &mut R) -> GeneratedGraph {
    let mut generated = GeneratedGraph::new(false);

    let mut points: Vec<(f64, f64)> = Vec::with_capacity(n);
    for v in 0..n {
        points.push((rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)));
        generated.graph.add_vertex(v);
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
            if dist <= r {
                generated.connect(i, j, dist);
            }
        }
    }

    generated
}
