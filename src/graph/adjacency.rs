use crate::graph::traits::{Graph, Vertex};
use std::collections::HashMap;

/// A graph implementation using adjacency lists
///
/// Vertices are kept in insertion order so that iteration, and therefore tie-breaking
/// between equal distances, is deterministic.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V>
where
    V: Vertex,
{
    /// Whether edges are one-way
    directed: bool,

    /// Vertices in insertion order
    vertices: Vec<V>,

    /// Neighbors of each vertex: vertex -> [neighbor]
    adjacency: HashMap<V, Vec<V>>,
}

impl<V> AdjacencyGraph<V>
where
    V: Vertex,
{
    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        AdjacencyGraph {
            directed: true,
            vertices: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        AdjacencyGraph {
            directed: false,
            ..Self::directed()
        }
    }

    /// Builds a graph from an edge list, adding endpoints as they appear
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = if directed { Self::directed() } else { Self::undirected() };
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Adds a vertex; returns false if it was already present
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.vertices.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Adds an edge, creating missing endpoints
    ///
    /// Undirected graphs store the edge in both adjacency lists. Parallel edges are
    /// collapsed; returns false if the edge already existed.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if self.has_edge(&from, &to) {
            return false;
        }

        if let Some(outgoing) = self.adjacency.get_mut(&from) {
            outgoing.push(to.clone());
        }
        if !self.directed && from != to {
            if let Some(incoming) = self.adjacency.get_mut(&to) {
                incoming.push(from);
            }
        }
        true
    }

    /// Removes an edge from the graph
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let mut removed = false;

        if let Some(outgoing) = self.adjacency.get_mut(from) {
            let len_before = outgoing.len();
            outgoing.retain(|target| target != to);
            removed = len_before > outgoing.len();
        }

        if !self.directed {
            if let Some(incoming) = self.adjacency.get_mut(to) {
                incoming.retain(|source| source != from);
            }
        }

        removed
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |edges| edges.iter().any(|target| target == to))
    }

    /// Returns the number of edges; an undirected edge counts once
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|edges| edges.len()).sum();
        if self.directed {
            entries
        } else {
            let loops = self
                .adjacency
                .iter()
                .filter(|(vertex, edges)| edges.contains(vertex))
                .count();
            (entries + loops) / 2
        }
    }
}

impl<V> Graph<V> for AdjacencyGraph<V>
where
    V: Vertex,
{
    fn vertices(&self) -> Box<dyn Iterator<Item = V> + '_> {
        Box::new(self.vertices.iter().cloned())
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = V> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}
