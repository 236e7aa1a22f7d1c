//! Directed graphs.

mod slot_graph;
pub use self::slot_graph::*;
