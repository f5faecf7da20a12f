use std::collections::HashMap;

use log::warn;

use crate::algorithm::traits::{Path, Weight};
use crate::algorithm::visitor::SearchState;
use crate::graph::{EdgeWeights, Vertex};
use crate::Result;

/// Walks the parent links of a finished run back from `target` to the source
///
/// Returns `[source]` for the source itself and `None` when the walk hits a vertex
/// without a parent before reaching the source.
pub fn build_path<V, W>(state: &SearchState<V, W>, target: &V) -> Option<Path<V>>
where
    V: Vertex,
    W: Weight,
{
    let source = state.source()?;
    let limit = state.parent_count() + 1;

    let mut path = vec![target.clone()];
    let mut current = target;
    while current != source {
        let parent = state.parent(current)?;
        path.push(parent.clone());
        current = parent;

        if path.len() > limit {
            warn!("cycle in parent links while building path to {:?}", target);
            return None;
        }
    }

    path.reverse();
    Some(path)
}

/// Builds the path to every vertex in `vertices`
pub fn build_all_paths<V, W, I>(state: &SearchState<V, W>, vertices: I) -> HashMap<V, Option<Path<V>>>
where
    V: Vertex,
    W: Weight,
    I: IntoIterator<Item = V>,
{
    vertices
        .into_iter()
        .map(|vertex| {
            let path = build_path(state, &vertex);
            (vertex, path)
        })
        .collect()
}

/// Total cost of a path under `combine`, validating every edge weight on the way
///
/// An empty or single-vertex path costs zero.
pub fn path_cost<V, W, E, C>(weights: &E, path: &[V], combine: C) -> Result<W>
where
    V: Vertex,
    W: Weight,
    E: EdgeWeights<V, W>,
    C: Fn(W, W) -> W,
{
    let mut total = W::zero();
    for pair in path.windows(2) {
        let weight = weights.weight(&pair[0], &pair[1])?;
        total = combine(total, weight);
    }
    Ok(total)
}
