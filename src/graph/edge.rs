use super::VertexId;

/// ID for edges, which are essentially `usize`.
///
/// Ids are handed out from 1 upwards and never recycled.
/// `EdgeId::NONE` (0) means "no such edge".
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// Information about an edge.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::NONE
    }
}

impl EdgeId {
    pub const NONE: EdgeId = EdgeId(0);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}
