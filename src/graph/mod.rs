//! Traits and implementations for directed and undirected graphs.
//!
//! # Vertex slots
//!
//! Vertices are lightweight ids, essentially `usize`, naming slots in a sparse table.
//! Slot `0` is reserved, so [VertexId::NONE] can stand for "no vertex".
//! Removing a vertex frees its slot and the lowest free slot is handed out
//! on the next [GrowableGraph::add_vertex].
//!
//! # Edge ids
//!
//! Every edge gets an [EdgeId] from 1 upwards when it is created.
//! Ids are never recycled: once an edge is removed its id is retired, and
//! re-adding the same endpoints yields a fresh one.
//! External collaborators (see [crate::labeled]) may key data by these ids.
//!
//! # Totality
//!
//! Operations on absent vertices and edges are no-ops returning sentinels
//! (`0`, `false`, `None`, [EdgeId::NONE] or an empty iterator).
//! Callers who care check [QueryableGraph::contains_vertex] themselves.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod edge_registry;
mod slot_store;

pub mod directed;
pub mod undirected;
