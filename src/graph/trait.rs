use crate::graph::*;

/// Graphs which can grow.
pub trait GrowableGraph {
    fn new() -> Self;
    /// Allocates the lowest free vertex slot and returns its id.
    fn add_vertex(&mut self) -> VertexId;
    /// Adds an edge between two present vertices.
    ///
    /// Returns the id of the already-present edge when there is one,
    /// and [EdgeId::NONE] when either endpoint is absent.
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId;
}

pub trait EdgeShrinkableGraph {
    /// Removes an edge and returns it, or `None` if there was no such edge.
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> Option<Edge>;
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes a vertex and returns the edges dropped with it.
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static>;
}

/// Read-only queries shared by directed and undirected graphs.
///
/// Every query is total: absent vertices and edges yield `0`, `false`,
/// [VertexId::NONE], [EdgeId::NONE] or an empty iterator.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    /// The largest id among present vertices, or [VertexId::NONE] on empty graphs.
    fn max_vertex(&self) -> VertexId;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool;
    fn edge_id(&self, source: &VertexId, sink: &VertexId) -> EdgeId;
    /// Endpoints an edge id was registered with, even after the edge is gone.
    fn edge_endpoints(&self, e: &EdgeId) -> Option<(VertexId, VertexId)>;

    fn out_degree(&self, v: &VertexId) -> usize;
    fn in_degree(&self, v: &VertexId) -> usize;
    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn predecessors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
