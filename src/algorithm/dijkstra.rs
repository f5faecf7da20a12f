use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::algorithm::path::{build_all_paths, build_path};
use crate::algorithm::traits::{add, Combinator, Path, Weight};
use crate::algorithm::visitor::{Color, NullVisitor, SearchState, Visitor};
use crate::data_structures::IndexedHeap;
use crate::graph::{EdgeWeights, Graph, Vertex};
use crate::{Error, Result};

/// Dijkstra's algorithm driven through a [`Visitor`]
///
/// The frontier lives in an [`IndexedHeap`] holding exactly one entry per frontier
/// vertex; a shorter distance to a frontier vertex lowers its existing entry.
pub struct Dijkstra<W, C = Combinator<W>> {
    /// Merges an accumulated distance with an edge weight
    combine: C,
    _weight: PhantomData<W>,
}

impl<W, C> fmt::Debug for Dijkstra<W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dijkstra").finish_non_exhaustive()
    }
}

impl<W: Weight> Default for Dijkstra<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> Dijkstra<W> {
    /// Creates a new Dijkstra algorithm instance that adds edge weights
    pub fn new() -> Self {
        Dijkstra {
            combine: add::<W>,
            _weight: PhantomData,
        }
    }
}

impl<W, C> Dijkstra<W, C>
where
    W: Weight,
    C: Fn(W, W) -> W,
{
    /// Replaces the distance combinator
    ///
    /// The combinator must never return less than the accumulated distance it is given
    /// for a valid weight, otherwise finalized distances would not be optimal.
    pub fn with_combinator<F>(self, combine: F) -> Dijkstra<W, F>
    where
        F: Fn(W, W) -> W,
    {
        Dijkstra {
            combine,
            _weight: PhantomData,
        }
    }

    /// Applies the configured combinator
    pub fn combine(&self, accumulated: W, weight: W) -> W {
        (self.combine)(accumulated, weight)
    }

    /// Shortest path from `source` to `target`, stopping as soon as `target` is final
    ///
    /// Returns `Ok(None)` if `target` cannot be reached.
    pub fn shortest_path<V, E, Vis>(
        &self,
        weights: &E,
        source: &V,
        target: &V,
        visitor: Vis,
    ) -> Result<Option<Path<V>>>
    where
        V: Vertex,
        E: EdgeWeights<V, W>,
        Vis: Visitor<V, W>,
    {
        let mut state = SearchState::new();
        self.run(weights, source, Some(target), &mut state, visitor)?;
        Ok(build_path(&state, target))
    }

    /// Shortest paths from `source` to every vertex of the graph
    pub fn shortest_paths<V, E, Vis>(
        &self,
        weights: &E,
        source: &V,
        visitor: Vis,
    ) -> Result<HashMap<V, Option<Path<V>>>>
    where
        V: Vertex,
        E: EdgeWeights<V, W>,
        Vis: Visitor<V, W>,
    {
        let state = self.find_shortest_paths(weights, source, visitor)?;
        Ok(build_all_paths(&state, weights.graph().vertices()))
    }

    /// Runs to completion and returns the populated distance and parent maps
    pub fn find_shortest_paths<V, E, Vis>(
        &self,
        weights: &E,
        source: &V,
        visitor: Vis,
    ) -> Result<SearchState<V, W>>
    where
        V: Vertex,
        E: EdgeWeights<V, W>,
        Vis: Visitor<V, W>,
    {
        let mut state = SearchState::new();
        self.run(weights, source, None, &mut state, visitor)?;
        Ok(state)
    }

    /// Runs the search into a caller-provided state
    ///
    /// With a `target` the loop stops as soon as it is popped; its edges are not
    /// scanned and no hooks fire for it. Without one the queue is drained.
    pub fn run<V, E, Vis>(
        &self,
        weights: &E,
        source: &V,
        target: Option<&V>,
        state: &mut SearchState<V, W>,
        mut visitor: Vis,
    ) -> Result<()>
    where
        V: Vertex,
        E: EdgeWeights<V, W>,
        Vis: Visitor<V, W>,
    {
        let graph = weights.graph();
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        debug!("starting search from {:?} (target {:?})", source, target);

        state.set_source(source.clone());
        visitor.start(source, state);

        let mut queue = IndexedHeap::new();
        queue.push(source.clone(), W::zero())?;
        state.set_color(source.clone(), Color::Frontier);

        let mut reached_target = false;
        while !queue.is_empty() {
            let (u, dist_u) = queue.pop()?;

            if target == Some(&u) {
                state.set_color(u, Color::Finished);
                reached_target = true;
                break;
            }

            visitor.examine_vertex(&u, state);

            for v in graph.neighbors(&u) {
                if state.is_finished(&v) {
                    // Still validated, so a bad weight never goes unnoticed
                    weights.weight(&u, &v)?;
                    continue;
                }
                self.relax(weights, &u, dist_u, v, state, &mut queue, &mut visitor)?;
            }

            state.set_color(u.clone(), Color::Finished);
            visitor.finish_vertex(&u, state);
        }

        debug!(
            "search from {:?} finalized {} vertices (target reached: {})",
            source,
            state.finished_count(),
            reached_target
        );

        Ok(())
    }

    /// Relaxes the edge `u -> v`, where `u` has just been popped at `dist_u`
    #[allow(clippy::too_many_arguments)]
    fn relax<V, E, Vis>(
        &self,
        weights: &E,
        u: &V,
        dist_u: W,
        v: V,
        state: &mut SearchState<V, W>,
        queue: &mut IndexedHeap<V, W>,
        visitor: &mut Vis,
    ) -> Result<()>
    where
        V: Vertex,
        E: EdgeWeights<V, W>,
        Vis: Visitor<V, W>,
    {
        visitor.examine_edge(u, &v, state);

        let weight = weights.weight(u, &v)?;
        let candidate = self.combine(dist_u, weight);

        let improves = match state.distance(&v) {
            None => true,
            Some(current) => candidate < current,
        };
        if !improves {
            visitor.edge_not_relaxed(u, &v, state);
            return Ok(());
        }

        let color = state.color(&v);
        let old = state.improve(v.clone(), candidate, u.clone());
        match (color, old) {
            (Color::Frontier, Some(old)) => queue.decrease_key(&v, old, candidate)?,
            _ => {
                state.set_color(v.clone(), Color::Frontier);
                queue.push(v.clone(), candidate)?;
            }
        }

        visitor.edge_relaxed(u, &v, state);
        Ok(())
    }
}

/// Shortest path from `source` to `target` with additive weights and no visitor
pub fn shortest_path<V, W, E>(weights: &E, source: &V, target: &V) -> Result<Option<Path<V>>>
where
    V: Vertex,
    W: Weight,
    E: EdgeWeights<V, W>,
{
    Dijkstra::<W>::new().shortest_path(weights, source, target, NullVisitor)
}

/// Shortest paths from `source` to every vertex, with additive weights and no visitor
pub fn shortest_paths<V, W, E>(weights: &E, source: &V) -> Result<HashMap<V, Option<Path<V>>>>
where
    V: Vertex,
    W: Weight,
    E: EdgeWeights<V, W>,
{
    Dijkstra::<W>::new().shortest_paths(weights, source, NullVisitor)
}
