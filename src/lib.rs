//! Directed and undirected graphs over reusable vertex slots,
//! with a fringe-driven traversal engine and a Dijkstra/A* shortest-path engine.
//!
//! ```rust
//! use slotgraph::{algorithm::*, graph::*};
//!
//! let mut g = directed::SlotGraph::new();
//! let a = g.add_vertex();
//! let b = g.add_vertex();
//! let c = g.add_vertex();
//! g.add_edge(a, b);
//! g.add_edge(b, c);
//! g.add_edge(a, c);
//!
//! assert_eq!(g.bfs_order([a]), vec![a, b, c]);
//!
//! let weights = |u: VertexId, v: VertexId| if (u, v) == (a, c) { 5.0 } else { 1.0 };
//! let mut paths = ShortestPaths::new(&g, a, weights, ArrayPathStore::for_graph(&g));
//! paths.set_paths();
//! assert_eq!(paths.weight(&c), 2.0);
//! assert_eq!(paths.path_to(&c).unwrap(), vec![a, b, c]);
//! ```
pub mod algorithm;
pub mod graph;
pub mod labeled;
