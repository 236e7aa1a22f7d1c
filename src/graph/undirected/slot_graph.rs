use crate::graph::{slot_store::SlotStore, *};

/// An undirected graph over a sparse table of reusable vertex slots.
///
/// Every edge is stored once, in the adjacency sequence of the endpoint it
/// was added from; queries consult both endpoints.
/// Out edges and in edges are not distinguished,
/// likewise for successors and predecessors.
///
/// The degree of a vertex is the number of its distinct neighbors,
/// so a self-loop counts once. This is exactly the length of
/// [successors](QueryableGraph::successors) and
/// [predecessors](QueryableGraph::predecessors).
#[derive(Clone)]
pub struct SlotGraph {
    store: SlotStore,
}

impl DirectedOrNot for SlotGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl std::fmt::Debug for SlotGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SlotGraph {{")?;
        for (v, adj) in self.store.iter_slots() {
            writeln!(f, "{:?}:", v)?;
            for sink in adj {
                writeln!(f, "  -- {:?} by {:?}", sink, self.store.id_of(&v, sink))?;
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

    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let own = match self.store.adjacency(v) {
            None => return Box::new(std::iter::empty()),
            Some(own) => own,
        };
        let v = *v;
        let it = self
            .store
            .iter_slots()
            .filter(move |(u, adj)| own.contains(u) || adj.contains(&v))
            .map(|(u, _)| u);
        Box::new(it)
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
        match self.edge_id(&source, &sink) {
            EdgeId::NONE => self.store.link(source, sink),
            eid => eid,
        }
    }
}

impl EdgeShrinkableGraph for SlotGraph {
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> Option<Edge> {
        self.store
            .unlink(source, sink)
            .or_else(|| self.store.unlink(sink, source))
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
        self.store.holds(source, sink) || self.store.holds(sink, source)
    }

    fn edge_id(&self, source: &VertexId, sink: &VertexId) -> EdgeId {
        match self.store.id_of(source, sink) {
            EdgeId::NONE => self.store.id_of(sink, source),
            eid => eid,
        }
    }

    fn edge_endpoints(&self, e: &EdgeId) -> Option<(VertexId, VertexId)> {
        self.store.endpoints(e)
    }

    fn out_degree(&self, v: &VertexId) -> usize {
        self.neighbors(v).count()
    }

    fn in_degree(&self, v: &VertexId) -> usize {
        self.neighbors(v).count()
    }

    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.neighbors(v)
    }

    fn predecessors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.neighbors(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::{Model, Ops};
    use quickcheck_macros::*;

    fn triangle() -> (SlotGraph, [VertexId; 3]) {
        let mut g = SlotGraph::new();
        let vs = [g.add_vertex(), g.add_vertex(), g.add_vertex()];
        g.add_edge(vs[0], vs[1]);
        g.add_edge(vs[0], vs[2]);
        g.add_edge(vs[1], vs[2]);
        (g, vs)
    }

    #[test]
    fn symmetric_edges() {
        let mut g = SlotGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        assert_eq!(g.add_edge(a, b), EdgeId::new(1));
        assert_eq!(g.edge_id(&a, &b), EdgeId::new(1));
        assert_eq!(g.edge_id(&b, &a), EdgeId::new(1));
        assert_eq!(g.edge_size(), 1);
        assert!(g.contains_edge(&a, &b));
        assert!(g.contains_edge(&b, &a));
        assert_eq!(g.add_edge(a, b), EdgeId::new(1));
        assert_eq!(g.add_edge(b, a), EdgeId::new(1));
        assert_eq!(g.edge_size(), 1);
        let c = g.add_vertex();
        g.add_edge(a, c);
        g.add_edge(b, c);
        assert_eq!(g.edge_size(), 3);
        assert!(g.contains_edge(&c, &a));
        assert!(g.contains_edge(&c, &b));
    }

    #[test]
    fn remove_edge_from_either_side() {
        let (mut g, [a, b, c]) = triangle();
        let removed = g.remove_edge(&b, &a).unwrap();
        assert_eq!((removed.source, removed.sink), (a, b));
        assert!(!g.contains_edge(&a, &b));
        assert!(g.remove_edge(&a, &b).is_none());
        assert_eq!(g.edge_size(), 2);
        assert!(g.remove_edge(&c, &b).is_some());
        assert_eq!(g.edge_size(), 1);
    }

    #[test]
    fn remove_vertex() {
        let (mut g, [a, b, c]) = triangle();
        assert_eq!(g.remove_vertex(&c).count(), 2);
        assert_eq!(g.vertex_size(), 2);
        assert_eq!(g.edge_size(), 1);
        assert_eq!(g.max_vertex(), b);
        assert_eq!(g.successors(&a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(g.edge_id(&a, &c), EdgeId::NONE);
    }

    #[test]
    fn degrees() {
        let (mut g, [a, b, c]) = triangle();
        for v in [a, b, c] {
            assert_eq!(g.out_degree(&v), 2);
            assert_eq!(g.in_degree(&v), 2);
        }
        g.add_edge(c, c);
        assert_eq!(g.out_degree(&c), 3);
        assert_eq!(g.in_degree(&c), 3);
        assert_eq!(g.successors(&c).collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(g.predecessors(&c).collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(g.edge_size(), 4);
    }

    #[test]
    fn neighbors_are_ascending() {
        let mut g = SlotGraph::new();
        let vs: Vec<_> = (0..5).map(|_| g.add_vertex()).collect();
        g.add_edge(vs[2], vs[4]);
        g.add_edge(vs[2], vs[0]);
        g.add_edge(vs[3], vs[2]);
        assert_eq!(
            g.successors(&vs[2]).collect::<Vec<_>>(),
            vec![vs[0], vs[3], vs[4]]
        );
        assert_eq!(g.iter_edges().count(), 3);
    }

    #[quickcheck]
    fn agrees_with_model(ops: Ops) {
        let mut model = Model::new(false);
        let mut trial = SlotGraph::new();
        ops.replay(&mut model, &mut trial);
        model.check(&trial);
    }

    #[quickcheck]
    fn in_and_out_degrees_agree(ops: Ops) {
        let mut model = Model::new(false);
        let mut g = SlotGraph::new();
        ops.replay(&mut model, &mut g);
        for v in g.iter_vertices() {
            assert_eq!(g.in_degree(&v), g.out_degree(&v));
        }
        for e in g.iter_edges() {
            assert_eq!(g.edge_id(&e.source, &e.sink), g.edge_id(&e.sink, &e.source));
            assert_ne!(g.edge_id(&e.source, &e.sink), EdgeId::NONE);
        }
    }
}
