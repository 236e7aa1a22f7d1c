use crate::graph::{slot_store::SlotStore, *};

/// A directed graph over a sparse table of reusable vertex slots.
///
/// | operation                   | complexity                                    |
/// | --------------------------- | --------------------------------------------- |
/// | `add_vertex`                | $O(\log \|V\|)$                               |
/// | `add_edge`, `remove_edge`   | $O(d)$, where $d$ is the out-degree of source |
/// | `remove_vertex`             | $O(\|V\| + \|E\|)$                            |
/// | `contains_edge`, `edge_id`  | $O(d)$                                        |
/// | `in_degree`, `predecessors` | $O(\|V\| + \|E\|)$, no reverse index is kept  |
/// | `vertex_size`, `edge_size`  | $O(1)$                                        |
///
/// Successors are reported in edge insertion order;
/// predecessors in ascending vertex order.
#[derive(Clone)]
pub struct SlotGraph {
    store: SlotStore,
}

impl DirectedOrNot for SlotGraph {
    const DIRECTED_OR_NOT: bool = true;
}

impl std::fmt::Debug for SlotGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SlotGraph {{")?;
        for (v, adj) in self.store.iter_slots() {
            writeln!(f, "{:?}:", v)?;
            for sink in adj {
                writeln!(f, "  -> {:?} by {:?}", sink, self.store.id_of(&v, sink))?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl Default for SlotGraph {
    fn default() -> Self {
        <Self as GrowableGraph>::new()
    }
}

impl SlotGraph {
    /// An empty graph with room for `vertices` vertices and `edges` edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            store: SlotStore::with_capacity(vertices, edges),
        }
    }
}

impl GrowableGraph for SlotGraph {
    fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    fn add_vertex(&mut self) -> VertexId {
        self.store.add_slot()
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        if !self.store.contains_vertex(&source) || !self.store.contains_vertex(&sink) {
            return EdgeId::NONE;
        }
        if self.store.holds(&source, &sink) {
            return self.store.id_of(&source, &sink);
        }
        self.store.link(source, sink)
    }
}

impl EdgeShrinkableGraph for SlotGraph {
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> Option<Edge> {
        self.store.unlink(source, sink)
    }
}

impl VertexShrinkableGraph for SlotGraph {
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        Box::new(self.store.release_slot(vertex).into_iter())
    }
}

impl QueryableGraph for SlotGraph {
    fn vertex_size(&self) -> usize {
        self.store.vertex_size()
    }

    fn max_vertex(&self) -> VertexId {
        self.store.max_vertex()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.store.iter_vertices())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.store.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.store.edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.store.iter_edges())
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.store.holds(source, sink)
    }

    fn edge_id(&self, source: &VertexId, sink: &VertexId) -> EdgeId {
        self.store.id_of(source, sink)
    }

    fn edge_endpoints(&self, e: &EdgeId) -> Option<(VertexId, VertexId)> {
        self.store.endpoints(e)
    }

    fn out_degree(&self, v: &VertexId) -> usize {
        self.store.adjacency(v).map(<[_]>::len).unwrap_or(0)
    }

    fn in_degree(&self, v: &VertexId) -> usize {
        self.predecessors(v).count()
    }

    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.store.adjacency(v) {
            Some(adj) => Box::new(adj.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn predecessors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        if !self.store.contains_vertex(v) {
            return Box::new(std::iter::empty());
        }
        let v = *v;
        let it = self
            .store
            .iter_slots()
            .filter(move |(_, adj)| adj.contains(&v))
            .map(|(u, _)| u);
        Box::new(it)
    }
}
