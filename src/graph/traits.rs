use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for vertex identifiers
///
/// Vertices are opaque: the algorithms only compare them, hash them and clone them.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

/// Trait representing the adjacency structure of a graph
pub trait Graph<V>: Debug
where
    V: Vertex,
{
    /// Returns an iterator over every vertex of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = V> + '_>;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns an iterator over the neighbors reachable from a vertex
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = V> + '_>;

    /// Returns true if edges are one-way
    fn is_directed(&self) -> bool;
}
