//! Graph algorithms
mod traversal;
pub use self::traversal::*;
mod shortest_path;
pub use self::shortest_path::*;
