use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use log::{debug, trace};
use std::cmp::{Ordering, Reverse};
use thiserror::Error;

/// Storage of per-vertex search results.
///
/// Unset weights read as `+inf` and unset predecessors as [VertexId::NONE].
pub trait PathStore {
    fn weight(&self, v: &VertexId) -> f64;
    fn set_weight(&mut self, v: &VertexId, w: f64);
    fn predecessor(&self, v: &VertexId) -> VertexId;
    fn set_predecessor(&mut self, v: &VertexId, u: VertexId);
}

/// A [PathStore] backed by two arrays indexed by vertex id.
///
/// The arrays are sized once. Vertices added to the graph afterwards beyond
/// the old [QueryableGraph::max_vertex] have nowhere to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPathStore {
    weights: Vec<f64>,
    predecessors: Vec<VertexId>,
}

impl ArrayPathStore {
    /// Room for vertices `0..len`.
    pub fn with_len(len: usize) -> Self {
        Self {
            weights: vec![f64::INFINITY; len],
            predecessors: vec![VertexId::NONE; len],
        }
    }

    pub fn for_graph<G: QueryableGraph>(graph: &G) -> Self {
        Self::with_len(graph.max_vertex().to_raw() + 1)
    }
}

impl PathStore for ArrayPathStore {
    fn weight(&self, v: &VertexId) -> f64 {
        self.weights
            .get(v.to_raw())
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, v: &VertexId, w: f64) {
        debug_assert!(v.to_raw() < self.weights.len());
        if let Some(x) = self.weights.get_mut(v.to_raw()) {
            *x = w;
        }
    }

    fn predecessor(&self, v: &VertexId) -> VertexId {
        self.predecessors
            .get(v.to_raw())
            .copied()
            .unwrap_or(VertexId::NONE)
    }

    fn set_predecessor(&mut self, v: &VertexId, u: VertexId) {
        debug_assert!(v.to_raw() < self.predecessors.len());
        if let Some(x) = self.predecessors.get_mut(v.to_raw()) {
            *x = u;
        }
    }
}

/// Edge weights, and optionally an A* estimate, of a search.
pub trait Weighing {
    /// Weight of the edge from `source` to `sink`. Must not be negative.
    fn edge_weight(&self, source: VertexId, sink: VertexId) -> f64;

    /// Estimated remaining weight from `v` to the destination.
    ///
    /// It must never exceed the actual remaining weight.
    /// The default, 0, makes the search plain Dijkstra.
    fn estimated_distance(&self, _v: VertexId) -> f64 {
        0.0
    }
}

impl<F> Weighing for F
where
    F: Fn(VertexId, VertexId) -> f64,
{
    fn edge_weight(&self, source: VertexId, sink: VertexId) -> f64 {
        self(source, sink)
    }
}

/// Turns a Dijkstra weighing into an A* one.
pub struct WithHeuristic<W, H> {
    pub edges: W,
    pub heuristic: H,
}

impl<W, H> Weighing for WithHeuristic<W, H>
where
    W: Weighing,
    H: Fn(VertexId) -> f64,
{
    fn edge_weight(&self, source: VertexId, sink: VertexId) -> f64 {
        self.edges.edge_weight(source, sink)
    }

    fn estimated_distance(&self, v: VertexId) -> f64 {
        (self.heuristic)(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("shortest paths have not been computed yet")]
    NotSolved,
    #[error("{0:?} is not in the graph")]
    UnknownVertex(VertexId),
    #[error("{0:?} is unreachable from the source")]
    Unreachable(VertexId),
    #[error("no destination to reach")]
    NoDestination,
}

/// Queue priority: estimated total weight, then vertex id.
#[derive(Debug, Clone, Copy)]
struct Priority {
    estimate: f64,
    vertex: VertexId,
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate
            .total_cmp(&other.estimate)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Shortest paths from a source, optionally aimed at a single destination.
///
/// Without a destination every vertex is settled (Dijkstra).
/// With one, the search stops as soon as the destination is settled, and an
/// admissible [Weighing::estimated_distance] turns it into A*.
/// In that case only paths to the destination are guaranteed shortest.
///
/// The graph must not change between [set_paths](Self::set_paths) and the
/// queries on its results.
pub struct ShortestPaths<'a, G, W, S> {
    graph: &'a G,
    source: VertexId,
    destination: VertexId,
    weighing: W,
    store: S,
    solved: bool,
}

impl<'a, G, W, S> ShortestPaths<'a, G, W, S>
where
    G: QueryableGraph,
    W: Weighing,
    S: PathStore,
{
    pub fn new(graph: &'a G, source: VertexId, weighing: W, store: S) -> Self {
        Self {
            graph,
            source,
            destination: VertexId::NONE,
            weighing,
            store,
            solved: false,
        }
    }

    /// Aims the search at `destination`.
    pub fn to_destination(mut self, destination: VertexId) -> Self {
        self.destination = destination;
        self
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The destination, or [VertexId::NONE] if there is none.
    pub fn destination(&self) -> VertexId {
        self.destination
    }

    /// Best known weight of a path to `v`, `+inf` if `v` is not in the graph.
    pub fn weight(&self, v: &VertexId) -> f64 {
        if self.graph.contains_vertex(v) {
            self.store.weight(v)
        } else {
            f64::INFINITY
        }
    }

    /// Predecessor of `v` on its best known path, [VertexId::NONE] if there is none.
    pub fn predecessor(&self, v: &VertexId) -> VertexId {
        if self.graph.contains_vertex(v) {
            self.store.predecessor(v)
        } else {
            VertexId::NONE
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn priority(&self, v: &VertexId) -> Reverse<Priority> {
        Reverse(Priority {
            estimate: self.store.weight(v) + self.weighing.estimated_distance(*v),
            vertex: *v,
        })
    }

    /// Computes weights and predecessors. Running it again starts over.
    pub fn set_paths(&mut self) {
        let graph = self.graph;
        debug!(
            "shortest paths from {:?} to {:?} over {} vertices",
            self.source,
            self.destination,
            graph.vertex_size()
        );
        let mut fringe: KeyedPriorityQueue<VertexId, Reverse<Priority>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(graph.vertex_size(), RandomState::new());
        for v in graph.iter_vertices() {
            let w = if v == self.source { 0.0 } else { f64::INFINITY };
            self.store.set_weight(&v, w);
            self.store.set_predecessor(&v, VertexId::NONE);
            fringe.push(v, self.priority(&v));
        }

        let mut settled = 0usize;
        while let Some((vertex, _)) = fringe.pop() {
            settled += 1;
            if vertex == self.destination {
                break;
            }
            let base = self.store.weight(&vertex);
            for succ in graph.successors(&vertex) {
                let candidate = base + self.weighing.edge_weight(vertex, succ);
                if candidate < self.store.weight(&succ) {
                    trace!("relax {:?} via {:?} to {}", succ, vertex, candidate);
                    self.store.set_weight(&succ, candidate);
                    self.store.set_predecessor(&succ, vertex);
                    // inserts vertices popped already, refreshes those still queued
                    fringe.push(succ, self.priority(&succ));
                }
            }
        }
        self.solved = true;
        debug!("shortest paths settled {} vertices", settled);
    }

    /// Vertices from the source to `v` along the best known path.
    ///
    /// With a destination set, paths to other vertices may not be shortest.
    pub fn path_to(&self, v: &VertexId) -> Result<Vec<VertexId>, PathError> {
        if !self.solved {
            return Err(PathError::NotSolved);
        }
        if !self.graph.contains_vertex(v) {
            return Err(PathError::UnknownVertex(*v));
        }
        let mut path = vec![*v];
        let mut cur = *v;
        while cur != self.source {
            cur = self.store.predecessor(&cur);
            if cur.is_none() || path.len() > self.graph.vertex_size() {
                return Err(PathError::Unreachable(*v));
            }
            path.push(cur);
        }
        path.reverse();
        Ok(path)
    }

    pub fn path_to_destination(&self) -> Result<Vec<VertexId>, PathError> {
        if self.destination.is_none() {
            return Err(PathError::NoDestination);
        }
        self.path_to(&self.destination)
    }
}
