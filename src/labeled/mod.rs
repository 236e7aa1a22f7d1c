//! Graphs with values attached to vertices and edges.
//!
//! The underlying graphs store no labels. [LabeledGraph] keys vertex labels
//! by [VertexId] and edge labels by the stable [EdgeId]s the underlying graph
//! hands out, and forgets them when their vertex or edge is removed.
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

#[derive(Clone)]
pub struct LabeledGraph<G, VL, EL> {
    lower_graph: G,
    vertex_labels: HashMap<VertexId, VL, RandomState>,
    edge_labels: HashMap<EdgeId, EL, RandomState>,
}

impl<G, VL, EL> DirectedOrNot for LabeledGraph<G, VL, EL>
where
    G: DirectedOrNot,
{
    const DIRECTED_OR_NOT: bool = G::DIRECTED_OR_NOT;
}

impl<G, VL, EL> Default for LabeledGraph<G, VL, EL>
where
    G: GrowableGraph,
{
    fn default() -> Self {
        Self::new(G::new())
    }
}

impl<G, VL, EL> LabeledGraph<G, VL, EL> {
    /// Wraps a graph, with no labels yet.
    pub fn new(lower_graph: G) -> Self {
        Self {
            lower_graph,
            vertex_labels: HashMap::with_hasher(RandomState::new()),
            edge_labels: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn lower_graph(&self) -> &G {
        &self.lower_graph
    }

    pub fn into_lower_graph(self) -> G {
        self.lower_graph
    }

    pub fn label(&self, v: &VertexId) -> Option<&VL> {
        self.vertex_labels.get(v)
    }

    pub fn edge_label_by_id(&self, e: &EdgeId) -> Option<&EL> {
        self.edge_labels.get(e)
    }
}

impl<G, VL, EL> LabeledGraph<G, VL, EL>
where
    G: QueryableGraph,
{
    pub fn edge_label(&self, source: &VertexId, sink: &VertexId) -> Option<&EL> {
        self.edge_labels
            .get(&self.lower_graph.edge_id(source, sink))
    }

    /// Labels a present vertex and returns its previous label.
    /// Absent vertices are left alone.
    pub fn set_label(&mut self, v: VertexId, label: VL) -> Option<VL> {
        if !self.lower_graph.contains_vertex(&v) {
            return None;
        }
        self.vertex_labels.insert(v, label)
    }

    /// Labels a present edge and returns its previous label.
    /// Absent edges are left alone.
    pub fn set_edge_label(&mut self, source: &VertexId, sink: &VertexId, label: EL) -> Option<EL> {
        match self.lower_graph.edge_id(source, sink) {
            EdgeId::NONE => None,
            eid => self.edge_labels.insert(eid, label),
        }
    }
}

impl<G, VL, EL> LabeledGraph<G, VL, EL>
where
    G: GrowableGraph + QueryableGraph,
{
    pub fn add_vertex(&mut self, label: VL) -> VertexId {
        let vid = self.lower_graph.add_vertex();
        self.vertex_labels.insert(vid, label);
        vid
    }

    /// Adds an edge, or relabels it if it is present already.
    pub fn add_edge(&mut self, source: VertexId, sink: VertexId, label: EL) -> EdgeId {
        let eid = self.lower_graph.add_edge(source, sink);
        if !eid.is_none() {
            self.edge_labels.insert(eid, label);
        }
        eid
    }
}

impl<G, VL, EL> LabeledGraph<G, VL, EL>
where
    G: VertexShrinkableGraph,
{
    /// Removes an edge and returns its label.
    pub fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> Option<EL> {
        let e = self.lower_graph.remove_edge(source, sink)?;
        self.edge_labels.remove(&e.id)
    }

    /// Removes a vertex with its edges and returns the vertex label.
    pub fn remove_vertex(&mut self, v: &VertexId) -> Option<VL> {
        for e in self.lower_graph.remove_vertex(v) {
            self.edge_labels.remove(&e.id);
        }
        self.vertex_labels.remove(v)
    }
}

impl<G, VL, EL> QueryableGraph for LabeledGraph<G, VL, EL>
where
    G: QueryableGraph,
{
    fn vertex_size(&self) -> usize {
        self.lower_graph.vertex_size()
    }

    fn max_vertex(&self) -> VertexId {
        self.lower_graph.max_vertex()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.lower_graph.iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.lower_graph.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.lower_graph.iter_edges()
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.lower_graph.contains_edge(source, sink)
    }

    fn edge_id(&self, source: &VertexId, sink: &VertexId) -> EdgeId {
        self.lower_graph.edge_id(source, sink)
    }

    fn edge_endpoints(&self, e: &EdgeId) -> Option<(VertexId, VertexId)> {
        self.lower_graph.edge_endpoints(e)
    }

    fn out_degree(&self, v: &VertexId) -> usize {
        self.lower_graph.out_degree(v)
    }

    fn in_degree(&self, v: &VertexId) -> usize {
        self.lower_graph.in_degree(v)
    }

    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.lower_graph.successors(v)
    }

    fn predecessors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.lower_graph.predecessors(v)
    }
}
