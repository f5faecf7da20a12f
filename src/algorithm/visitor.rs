use std::collections::HashMap;

use log::trace;

use crate::algorithm::Weight;
use crate::graph::Vertex;

/// Search state of a vertex during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Not reached yet
    #[default]
    Unvisited,
    /// Reached, with a live queue entry
    Frontier,
    /// Popped as the minimum; its distance is final
    Finished,
}

/// Per-run maps of colors, distances and parents
///
/// A vertex that has not been touched reads as `Unvisited`, with no distance
/// (+infinity) and no parent.
#[derive(Debug, Clone)]
pub struct SearchState<V, W>
where
    V: Vertex,
    W: Weight,
{
    source: Option<V>,
    colors: HashMap<V, Color>,
    distances: HashMap<V, W>,
    parents: HashMap<V, V>,
}

impl<V, W> Default for SearchState<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> SearchState<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates an empty state with no source
    pub fn new() -> Self {
        SearchState {
            source: None,
            colors: HashMap::new(),
            distances: HashMap::new(),
            parents: HashMap::new(),
        }
    }

    /// Clears all maps and starts a new run from `source` at distance zero
    pub fn set_source(&mut self, source: V) {
        self.colors.clear();
        self.distances.clear();
        self.parents.clear();
        self.distances.insert(source.clone(), W::zero());
        self.source = Some(source);
    }

    /// The source of the current run
    pub fn source(&self) -> Option<&V> {
        self.source.as_ref()
    }

    /// Current color; untouched vertices are `Unvisited`
    pub fn color(&self, vertex: &V) -> Color {
        self.colors.get(vertex).copied().unwrap_or_default()
    }

    /// Best known distance; `None` stands for +infinity
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Predecessor on the best known path
    pub fn parent(&self, vertex: &V) -> Option<&V> {
        self.parents.get(vertex)
    }

    /// True once `vertex` has been popped and its distance is final
    pub fn is_finished(&self, vertex: &V) -> bool {
        self.color(vertex) == Color::Finished
    }

    /// Iterates over every vertex with a known distance
    pub fn distances(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.distances.iter().map(|(vertex, distance)| (vertex, *distance))
    }

    /// Iterates over every `(vertex, parent)` link
    pub fn parents(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.parents.iter()
    }

    /// Number of parent links
    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    /// Number of finalized vertices
    pub fn finished_count(&self) -> usize {
        self.colors.values().filter(|&&color| color == Color::Finished).count()
    }

    pub(crate) fn set_color(&mut self, vertex: V, color: Color) {
        self.colors.insert(vertex, color);
    }

    /// Records an improved distance and its predecessor, returning the previous distance
    pub(crate) fn improve(&mut self, vertex: V, distance: W, parent: V) -> Option<W> {
        self.parents.insert(vertex.clone(), parent);
        self.distances.insert(vertex, distance)
    }
}

/// Hooks called by the search at each step of a run
///
/// Every hook defaults to doing nothing; implement only the ones you need. Each hook
/// sees the run state as it is at that moment: `edge_relaxed` is called after the
/// target's distance and parent have been updated.
#[allow(unused_variables)]
pub trait Visitor<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// A run from `source` is starting; the state has just been reset
    fn start(&mut self, source: &V, state: &SearchState<V, W>) {}

    /// `vertex` was popped with the minimum distance and its edges are about to be scanned
    fn examine_vertex(&mut self, vertex: &V, state: &SearchState<V, W>) {}

    /// All edges of `vertex` have been scanned and it is now final
    fn finish_vertex(&mut self, vertex: &V, state: &SearchState<V, W>) {}

    /// The edge `from -> to` is about to be relaxed
    ///
    /// Fires before the weight is looked up, so it is seen even for an edge whose
    /// weight then aborts the run. Never fires for edges into finished vertices.
    fn examine_edge(&mut self, from: &V, to: &V, state: &SearchState<V, W>) {}

    /// The edge gave `to` a shorter distance
    fn edge_relaxed(&mut self, from: &V, to: &V, state: &SearchState<V, W>) {}

    /// The edge did not improve `to`
    fn edge_not_relaxed(&mut self, from: &V, to: &V, state: &SearchState<V, W>) {}
}

impl<V, W, T> Visitor<V, W> for &mut T
where
    V: Vertex,
    W: Weight,
    T: Visitor<V, W> + ?Sized,
{
    fn start(&mut self, source: &V, state: &SearchState<V, W>) {
        (**self).start(source, state)
    }

    fn examine_vertex(&mut self, vertex: &V, state: &SearchState<V, W>) {
        (**self).examine_vertex(vertex, state)
    }

    fn finish_vertex(&mut self, vertex: &V, state: &SearchState<V, W>) {
        (**self).finish_vertex(vertex, state)
    }

    fn examine_edge(&mut self, from: &V, to: &V, state: &SearchState<V, W>) {
        (**self).examine_edge(from, to, state)
    }

    fn edge_relaxed(&mut self, from: &V, to: &V, state: &SearchState<V, W>) {
        (**self).edge_relaxed(from, to, state)
    }

    fn edge_not_relaxed(&mut self, from: &V, to: &V, state: &SearchState<V, W>) {
        (**self).edge_not_relaxed(from, to, state)
    }
}

/// Visitor that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisitor;

impl<V: Vertex, W: Weight> Visitor<V, W> for NullVisitor {}

/// Visitor that logs every step at `trace` level
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceVisitor;

impl<V: Vertex, W: Weight> Visitor<V, W> for TraceVisitor {
    fn start(&mut self, source: &V, _state: &SearchState<V, W>) {
        trace!("start at {:?}", source);
    }

    fn examine_vertex(&mut self, vertex: &V, state: &SearchState<V, W>) {
        trace!("pop {:?} at distance {:?}", vertex, state.distance(vertex));
    }

    fn finish_vertex(&mut self, vertex: &V, _state: &SearchState<V, W>) {
        trace!("finish {:?}", vertex);
    }

    fn examine_edge(&mut self, from: &V, to: &V, _state: &SearchState<V, W>) {
        trace!("examine edge {:?} -> {:?}", from, to);
    }

    fn edge_relaxed(&mut self, from: &V, to: &V, state: &SearchState<V, W>) {
        trace!("relax {:?} -> {:?}: distance now {:?}", from, to, state.distance(to));
    }

    fn edge_not_relaxed(&mut self, from: &V, to: &V, state: &SearchState<V, W>) {
        trace!("no relax {:?} -> {:?}: distance stays {:?}", from, to, state.distance(to));
    }
}

/// One hook call seen by a [`RecordingVisitor`]
#[derive(Debug, Clone, PartialEq)]
pub enum VisitEvent<V, W> {
    Start(V),
    ExamineVertex { vertex: V, distance: Option<W> },
    FinishVertex { vertex: V, distance: Option<W> },
    ExamineEdge { from: V, to: V },
    EdgeRelaxed { from: V, to: V, distance: Option<W> },
    EdgeNotRelaxed { from: V, to: V },
}

/// Visitor that records every hook call in order
#[derive(Debug, Clone)]
pub struct RecordingVisitor<V, W> {
    pub events: Vec<VisitEvent<V, W>>,
}

impl<V, W> Default for RecordingVisitor<V, W> {
    fn default() -> Self {
        RecordingVisitor { events: Vec::new() }
    }
}

impl<V, W> RecordingVisitor<V, W> {
    /// Creates a recorder with no events
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices in the order they were finalized
    pub fn finish_order(&self) -> Vec<&V> {
        self.events
            .iter()
            .filter_map(|event| match event {
                VisitEvent::FinishVertex { vertex, .. } => Some(vertex),
                _ => None,
            })
            .collect()
    }
}

impl<V: Vertex, W: Weight> Visitor<V, W> for RecordingVisitor<V, W> {
    fn start(&mut self, source: &V, _state: &SearchState<V, W>) {
        self.events.push(VisitEvent::Start(source.clone()));
    }

    fn examine_vertex(&mut self, vertex: &V, state: &SearchState<V, W>) {
        self.events.push(VisitEvent::ExamineVertex {
            vertex: vertex.clone(),
            distance: state.distance(vertex),
        });
    }

    fn finish_vertex(&mut self, vertex: &V, state: &SearchState<V, W>) {
        self.events.push(VisitEvent::FinishVertex {
            vertex: vertex.clone(),
            distance: state.distance(vertex),
        });
    }

    fn examine_edge(&mut self, from: &V, to: &V, _state: &SearchState<V, W>) {
        self.events.push(VisitEvent::ExamineEdge {
            from: from.clone(),
            to: to.clone(),
        });
    }

    fn edge_relaxed(&mut self, from: &V, to: &V, state: &SearchState<V, W>) {
        self.events.push(VisitEvent::EdgeRelaxed {
            from: from.clone(),
            to: to.clone(),
            distance: state.distance(to),
        });
    }

    fn edge_not_relaxed(&mut self, from: &V, to: &V, _state: &SearchState<V, W>) {
        self.events.push(VisitEvent::EdgeNotRelaxed {
            from: from.clone(),
            to: to.clone(),
        });
    }
}
