/// ID for vertices, which are essentially `usize`.
///
/// Slot `0` is never a real vertex; it doubles as the "no vertex" sentinel.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl Default for VertexId {
    fn default() -> Self {
        Self::NONE
    }
}

impl VertexId {
    pub const NONE: VertexId = VertexId(0);
    pub const MAX: VertexId = VertexId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}
