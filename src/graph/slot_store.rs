use super::edge_registry::EdgeRegistry;
use crate::graph::*;
use std::collections::BTreeSet;

/// Sparse vertex table shared by directed and undirected graphs.
///
/// `slots[i]` is `None` for absent vertices and the adjacency sequence of
/// `VertexId(i)` otherwise, in insertion order.
/// `slots[0]` is a permanent `None`, so every present vertex is positive.
/// Each physical adjacency entry owns exactly one live id in `registry`.
#[derive(Clone)]
pub(crate) struct SlotStore {
    slots: Vec<Option<Vec<VertexId>>>,
    free: BTreeSet<VertexId>,
    max_vertex: VertexId,
    vertex_size: usize,
    edge_size: usize,
    registry: EdgeRegistry,
}

impl SlotStore {
    pub(crate) fn with_capacity(vertices: usize, edges: usize) -> Self {
        let mut slots = Vec::with_capacity(vertices + 1);
        slots.push(None);
        Self {
            slots,
            free: BTreeSet::new(),
            max_vertex: VertexId::NONE,
            vertex_size: 0,
            edge_size: 0,
            registry: EdgeRegistry::with_capacity(edges),
        }
    }

    pub(crate) fn add_slot(&mut self) -> VertexId {
        let vid = match self.free.pop_first() {
            Some(vid) => {
                self.slots[vid.to_raw()] = Some(vec![]);
                vid
            }
            None => {
                self.slots.push(Some(vec![]));
                VertexId::new(self.slots.len() - 1)
            }
        };
        self.vertex_size += 1;
        if vid > self.max_vertex {
            self.max_vertex = vid;
        }
        vid
    }

    /// Drops a vertex together with every adjacency entry mentioning it.
    pub(crate) fn release_slot(&mut self, vertex: &VertexId) -> Vec<Edge> {
        let own = match self.slots.get_mut(vertex.to_raw()).and_then(Option::take) {
            None => return vec![],
            Some(own) => own,
        };
        let mut res = Vec::with_capacity(own.len());
        for sink in own.iter() {
            let id = self.registry.unregister(vertex, sink);
            res.push(Edge {
                id,
                source: *vertex,
                sink: *sink,
            });
        }
        for (raw, slot) in self.slots.iter_mut().enumerate() {
            if let Some(adj) = slot {
                if let Some(pos) = adj.iter().position(|x| x == vertex) {
                    adj.remove(pos);
                    let source = VertexId::new(raw);
                    let id = self.registry.unregister(&source, vertex);
                    res.push(Edge {
                        id,
                        source,
                        sink: *vertex,
                    });
                }
            }
        }
        self.edge_size -= res.len();
        self.vertex_size -= 1;
        self.free.insert(*vertex);
        if *vertex == self.max_vertex {
            self.max_vertex = (1..vertex.to_raw())
                .rev()
                .map(VertexId::new)
                .find(|v| self.contains_vertex(v))
                .unwrap_or(VertexId::NONE);
        }
        res
    }

    pub(crate) fn contains_vertex(&self, v: &VertexId) -> bool {
        self.adjacency(v).is_some()
    }

    pub(crate) fn adjacency(&self, v: &VertexId) -> Option<&[VertexId]> {
        self.slots
            .get(v.to_raw())
            .and_then(|slot| slot.as_deref())
    }

    /// Whether `sink` appears in the adjacency sequence of `source`.
    pub(crate) fn holds(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.adjacency(source)
            .map(|adj| adj.contains(sink))
            .unwrap_or(false)
    }

    /// Appends `sink` to the adjacency of `source` and registers a new id.
    ///
    /// Callers guarantee both endpoints are present and the entry is new.
    pub(crate) fn link(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        debug_assert!(self.contains_vertex(&sink));
        match self.slots.get_mut(source.to_raw()) {
            Some(Some(adj)) => {
                debug_assert!(!adj.contains(&sink));
                adj.push(sink);
                self.edge_size += 1;
                self.registry.register(source, sink)
            }
            _ => EdgeId::NONE,
        }
    }

    pub(crate) fn unlink(&mut self, source: &VertexId, sink: &VertexId) -> Option<Edge> {
        let adj = self.slots.get_mut(source.to_raw())?.as_mut()?;
        let pos = adj.iter().position(|x| x == sink)?;
        adj.remove(pos);
        self.edge_size -= 1;
        let id = self.registry.unregister(source, sink);
        Some(Edge {
            id,
            source: *source,
            sink: *sink,
        })
    }

    pub(crate) fn id_of(&self, source: &VertexId, sink: &VertexId) -> EdgeId {
        self.registry.id_of(source, sink)
    }

    pub(crate) fn endpoints(&self, e: &EdgeId) -> Option<(VertexId, VertexId)> {
        self.registry.endpoints(e)
    }

    pub(crate) fn vertex_size(&self) -> usize {
        self.vertex_size
    }

    pub(crate) fn edge_size(&self) -> usize {
        self.edge_size
    }

    pub(crate) fn max_vertex(&self) -> VertexId {
        self.max_vertex
    }

    pub(crate) fn iter_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.iter_slots().map(|(v, _)| v)
    }

    /// Present vertices with their adjacency sequences, ascending.
    pub(crate) fn iter_slots(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(raw, slot)| slot.as_deref().map(|adj| (VertexId::new(raw), adj)))
    }

    pub(crate) fn iter_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.iter_slots().flat_map(move |(source, adj)| {
            adj.iter().map(move |sink| Edge {
                id: self.registry.id_of(&source, sink),
                source,
                sink: *sink,
            })
        })
    }
}
