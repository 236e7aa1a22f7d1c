use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

/// Append-only registry handing out stable [EdgeId]s.
///
/// `history[i]` holds the endpoints of `EdgeId(i + 1)`.
/// `live` maps the endpoints of every present edge, in the orientation it was
/// registered with, to its id.
#[derive(Clone)]
pub(crate) struct EdgeRegistry {
    history: Vec<(VertexId, VertexId)>,
    live: HashMap<(VertexId, VertexId), EdgeId, RandomState>,
}

impl EdgeRegistry {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Vec::with_capacity(capacity),
            live: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Registers a fresh id for `(source, sink)`.
    ///
    /// Callers guarantee the edge is not live already.
    pub(crate) fn register(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        self.history.push((source, sink));
        let eid = EdgeId::new(self.history.len());
        let prev = self.live.insert((source, sink), eid);
        debug_assert!(prev.is_none());
        eid
    }

    pub(crate) fn unregister(&mut self, source: &VertexId, sink: &VertexId) -> EdgeId {
        self.live
            .remove(&(*source, *sink))
            .unwrap_or(EdgeId::NONE)
    }

    pub(crate) fn id_of(&self, source: &VertexId, sink: &VertexId) -> EdgeId {
        self.live
            .get(&(*source, *sink))
            .copied()
            .unwrap_or(EdgeId::NONE)
    }

    pub(crate) fn endpoints(&self, e: &EdgeId) -> Option<(VertexId, VertexId)> {
        if e.is_none() {
            return None;
        }
        self.history.get(e.to_raw() - 1).copied()
    }
}
