use std::collections::HashMap;

use num_traits::One;

use crate::algorithm::Weight;
use crate::graph::traits::{Graph, Vertex};

/// Reasons a consulted edge weight is rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WeightError {
    #[error("negative weight {weight} on edge {from} -> {to}")]
    Negative {
        from: String,
        to: String,
        weight: String,
    },

    #[error("weight on edge {from} -> {to} is not a number")]
    NotANumber { from: String, to: String },

    #[error("no weight for edge {from} -> {to}")]
    Missing { from: String, to: String },
}

impl WeightError {
    fn missing<V: Vertex>(from: &V, to: &V) -> Self {
        WeightError::Missing {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

/// Checks that a weight is usable by the search: present, comparable and non-negative
pub fn validate_weight<V, W>(from: &V, to: &V, weight: Option<W>) -> Result<W, WeightError>
where
    V: Vertex,
    W: Weight,
{
    let weight = weight.ok_or_else(|| WeightError::missing(from, to))?;
    if weight < W::zero() {
        return Err(WeightError::Negative {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: format!("{:?}", weight),
        });
    }
    // NaN compares false against everything
    if !(weight >= W::zero()) {
        return Err(WeightError::NotANumber {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        });
    }
    Ok(weight)
}

/// Resolves the weight of an ordered vertex pair on top of a graph's adjacency
pub trait EdgeWeights<V, W>
where
    V: Vertex,
    W: Weight,
{
    type Graph: Graph<V>;

    /// The adjacency this weighting applies to
    fn graph(&self) -> &Self::Graph;

    /// Returns the validated weight of the edge `from -> to`
    fn weight(&self, from: &V, to: &V) -> Result<W, WeightError>;
}

/// Edge weights backed by a map from vertex pairs to weights
///
/// For undirected graphs a pair may be stored in either orientation. Weights are only
/// validated when the search consults them, so bad weights on unreachable edges are
/// never reported.
#[derive(Debug, Clone)]
pub struct WeightMap<'g, G, V, W> {
    graph: &'g G,
    weights: HashMap<(V, V), W>,
}

impl<'g, G, V, W> WeightMap<'g, G, V, W>
where
    G: Graph<V>,
    V: Vertex,
    W: Weight,
{
    /// Creates an empty weight map over a graph
    pub fn new(graph: &'g G) -> Self {
        WeightMap {
            graph,
            weights: HashMap::new(),
        }
    }

    /// Creates a weight map from any collection of `((from, to), weight)` pairs
    pub fn from_map<I>(graph: &'g G, weights: I) -> Self
    where
        I: IntoIterator<Item = ((V, V), W)>,
    {
        WeightMap {
            graph,
            weights: weights.into_iter().collect(),
        }
    }

    /// Sets the weight of an edge, returning the previous one
    pub fn insert(&mut self, from: V, to: V, weight: W) -> Option<W> {
        self.weights.insert((from, to), weight)
    }

    /// Returns the stored weight without validation
    pub fn get(&self, from: &V, to: &V) -> Option<W> {
        let key = (from.clone(), to.clone());
        match self.weights.get(&key) {
            Some(weight) => Some(*weight),
            None if !self.graph.is_directed() => {
                self.weights.get(&(to.clone(), from.clone())).copied()
            }
            None => None,
        }
    }

    /// Returns the number of stored weights
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if no weights are stored
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<'g, G, V, W> EdgeWeights<V, W> for WeightMap<'g, G, V, W>
where
    G: Graph<V>,
    V: Vertex,
    W: Weight,
{
    type Graph = G;

    fn graph(&self) -> &G {
        self.graph
    }

    fn weight(&self, from: &V, to: &V) -> Result<W, WeightError> {
        validate_weight(from, to, self.get(from, to))
    }
}

/// Edge weights computed by a closure; `None` means the weight is unknown
pub struct WeightFn<'g, G, F> {
    graph: &'g G,
    lookup: F,
}

impl<'g, G, F> WeightFn<'g, G, F> {
    /// Wraps a graph and a lookup closure
    pub fn new(graph: &'g G, lookup: F) -> Self {
        WeightFn { graph, lookup }
    }
}

impl<'g, G, F, V, W> EdgeWeights<V, W> for WeightFn<'g, G, F>
where
    G: Graph<V>,
    V: Vertex,
    W: Weight,
    F: Fn(&V, &V) -> Option<W>,
{
    type Graph = G;

    fn graph(&self) -> &G {
        self.graph
    }

    fn weight(&self, from: &V, to: &V) -> Result<W, WeightError> {
        validate_weight(from, to, (self.lookup)(from, to))
    }
}

/// Every edge weighs one, which turns the search into a breadth-first one
#[derive(Debug, Clone, Copy)]
pub struct UnitWeights<'g, G> {
    graph: &'g G,
}

impl<'g, G> UnitWeights<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        UnitWeights { graph }
    }
}

impl<'g, G, V, W> EdgeWeights<V, W> for UnitWeights<'g, G>
where
    G: Graph<V>,
    V: Vertex,
    W: Weight + One,
{
    type Graph = G;

    fn graph(&self) -> &G {
        self.graph
    }

    fn weight(&self, _from: &V, _to: &V) -> Result<W, WeightError> {
        Ok(W::one())
    }
}
