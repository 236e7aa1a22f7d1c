//! Iterative graph walks driven by a caller-chosen fringe.
//!
//! A [Stack] fringe gives depth-first order and a [Queue] fringe gives
//! breadth-first order. [Visitor]s hook into pre-visits and, for fringes
//! whose pop order allows it, post-visits.
use crate::graph::*;
use log::{debug, trace};
use std::collections::{BTreeSet, VecDeque};
use std::ops::ControlFlow;

/// A pending unit of work in a fringe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Visit `vertex`, reached along the tree edge from `predecessor`
    /// ([VertexId::NONE] for seeds).
    Visit {
        predecessor: VertexId,
        vertex: VertexId,
    },
    /// Every successor of the vertex has finished.
    PostVisit(VertexId),
}

/// The pending-work container of a traversal.
pub trait Fringe {
    /// Whether a post-visit pushed before a vertex's successors pops only
    /// after all of them are done.
    const ORDERS_POST_VISITS: bool;

    fn push(&mut self, step: Step);
    fn pop(&mut self) -> Option<Step>;
    fn is_empty(&self) -> bool;
}

/// Last in, first out. Gives depth-first traversals.
#[derive(Debug, Clone, Default)]
pub struct Stack(Vec<Step>);

impl Fringe for Stack {
    const ORDERS_POST_VISITS: bool = true;

    fn push(&mut self, step: Step) {
        self.0.push(step);
    }

    fn pop(&mut self) -> Option<Step> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// First in, first out. Gives breadth-first traversals, which have no post-visits.
#[derive(Debug, Clone, Default)]
pub struct Queue(VecDeque<Step>);

impl Fringe for Queue {
    const ORDERS_POST_VISITS: bool = false;

    fn push(&mut self, step: Step) {
        self.0.push_back(step);
    }

    fn pop(&mut self) -> Option<Step> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extension points of a traversal.
///
/// Returning [ControlFlow::Break] from either hook ends the whole traversal at once.
pub trait Visitor {
    fn visit(&mut self, _vertex: VertexId) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Only called by traversals whose fringe orders post-visits.
    fn post_visit(&mut self, _vertex: VertexId) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn should_post_visit(&self, _vertex: VertexId) -> bool {
        true
    }
}

/// A visitor recording pre-visit and post-visit orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    pub pre: Vec<VertexId>,
    pub post: Vec<VertexId>,
}

impl Visitor for Recorder {
    fn visit(&mut self, vertex: VertexId) -> ControlFlow<()> {
        self.pre.push(vertex);
        ControlFlow::Continue(())
    }

    fn post_visit(&mut self, vertex: VertexId) -> ControlFlow<()> {
        self.post.push(vertex);
        ControlFlow::Continue(())
    }
}

/// Adapts a closure into a visitor with pre-visits only.
pub struct PreVisit<F>(pub F);

impl<F> Visitor for PreVisit<F>
where
    F: FnMut(VertexId) -> ControlFlow<()>,
{
    fn visit(&mut self, vertex: VertexId) -> ControlFlow<()> {
        (self.0)(vertex)
    }

    fn should_post_visit(&self, _vertex: VertexId) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Pushed,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// A hook asked to stop while handling this vertex.
    Stopped(VertexId),
}

/// What is left of a traversal after it ran.
#[derive(Debug, Clone)]
pub struct Walk {
    outcome: Outcome,
    tree_edges: Vec<(VertexId, VertexId)>,
    marks: Vec<Mark>,
}

impl Walk {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_completed(&self) -> bool {
        self.outcome == Outcome::Completed
    }

    /// `(predecessor, vertex)` pairs which led to each non-seed visit, in visit order.
    pub fn tree_edges(&self) -> &[(VertexId, VertexId)] {
        &self.tree_edges
    }

    /// Whether `v` was visited or marked beforehand.
    pub fn is_visited(&self, v: &VertexId) -> bool {
        self.marks.get(v.to_raw()) == Some(&Mark::Finished)
    }

    /// Whether `v` ever entered the fringe.
    pub fn is_discovered(&self, v: &VertexId) -> bool {
        matches!(
            self.marks.get(v.to_raw()),
            Some(Mark::Pushed | Mark::Finished)
        )
    }
}

/// A single-use traversal over a graph.
///
/// Each vertex is visited at most once, which keeps self-loops and cycles
/// finite. A vertex may sit in the fringe several times before it is visited;
/// the entry popped first decides its tree predecessor. Successors are pushed
/// in ascending order, so a [Stack] explores the largest successor first and a
/// [Queue] the smallest.
///
/// The graph must not change while the traversal exists.
pub struct Traversal<'a, G, F> {
    graph: &'a G,
    fringe: F,
    marks: Vec<Mark>,
}

pub type DepthFirst<'a, G> = Traversal<'a, G, Stack>;
pub type BreadthFirst<'a, G> = Traversal<'a, G, Queue>;

impl<'a, G, F> Traversal<'a, G, F>
where
    G: QueryableGraph,
    F: Fringe,
{
    pub fn new(graph: &'a G, fringe: F) -> Self {
        Self {
            graph,
            fringe,
            marks: vec![Mark::Unvisited; graph.max_vertex().to_raw() + 1],
        }
    }

    /// Excludes `v` from the coming run, as if it had been visited already.
    pub fn mark(&mut self, v: &VertexId) {
        if let Some(m) = self.marks.get_mut(v.to_raw()) {
            *m = Mark::Finished;
        }
    }

    pub fn is_marked(&self, v: &VertexId) -> bool {
        self.mark_of(v) == Mark::Finished
    }

    fn mark_of(&self, v: &VertexId) -> Mark {
        self.marks.get(v.to_raw()).copied().unwrap_or(Mark::Finished)
    }

    fn push_visit(&mut self, predecessor: VertexId, vertex: VertexId) {
        trace!("push {:?} from {:?}", vertex, predecessor);
        self.marks[vertex.to_raw()] = Mark::Pushed;
        self.fringe.push(Step::Visit {
            predecessor,
            vertex,
        });
    }

    /// Walks from `seeds`, consuming the traversal.
    ///
    /// Seeds are deduplicated and pushed in ascending order;
    /// those absent from the graph are ignored.
    pub fn traverse<I, V>(mut self, seeds: I, visitor: &mut V) -> Walk
    where
        I: IntoIterator<Item = VertexId>,
        V: Visitor + ?Sized,
    {
        let seeds: BTreeSet<_> = seeds
            .into_iter()
            .filter(|v| self.graph.contains_vertex(v))
            .collect();
        debug!(
            "traversal starts from {} seeds over {} vertices",
            seeds.len(),
            self.graph.vertex_size()
        );
        for v in seeds {
            if self.mark_of(&v) != Mark::Finished {
                self.push_visit(VertexId::NONE, v);
            }
        }

        let mut tree_edges = vec![];
        let outcome = loop {
            let step = match self.fringe.pop() {
                None => break Outcome::Completed,
                Some(step) => step,
            };
            match step {
                Step::PostVisit(vertex) => {
                    if visitor.post_visit(vertex).is_break() {
                        break Outcome::Stopped(vertex);
                    }
                }
                Step::Visit {
                    predecessor,
                    vertex,
                } => {
                    if self.mark_of(&vertex) == Mark::Finished {
                        continue;
                    }
                    self.marks[vertex.to_raw()] = Mark::Finished;
                    if !predecessor.is_none() {
                        tree_edges.push((predecessor, vertex));
                    }
                    if visitor.visit(vertex).is_break() {
                        break Outcome::Stopped(vertex);
                    }
                    if F::ORDERS_POST_VISITS && visitor.should_post_visit(vertex) {
                        self.fringe.push(Step::PostVisit(vertex));
                    }
                    let successors: BTreeSet<_> = self
                        .graph
                        .successors(&vertex)
                        .filter(|v| self.mark_of(v) != Mark::Finished)
                        .collect();
                    for v in successors {
                        self.push_visit(vertex, v);
                    }
                }
            }
        };
        debug!(
            "traversal ends with {:?} after {} tree edges",
            outcome,
            tree_edges.len()
        );
        Walk {
            outcome,
            tree_edges,
            marks: self.marks,
        }
    }
}

/// Traversals for every queryable graph.
pub trait Traverse
where
    Self: QueryableGraph + Sized,
{
    fn depth_first(&self) -> DepthFirst<'_, Self> {
        Traversal::new(self, Stack::default())
    }

    fn breadth_first(&self) -> BreadthFirst<'_, Self> {
        Traversal::new(self, Queue::default())
    }

    fn dfs_preorder<I>(&self, seeds: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut rec = Recorder::default();
        self.depth_first().traverse(seeds, &mut rec);
        rec.pre
    }

    fn dfs_postorder<I>(&self, seeds: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut rec = Recorder::default();
        self.depth_first().traverse(seeds, &mut rec);
        rec.post
    }

    fn bfs_order<I>(&self, seeds: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut rec = Recorder::default();
        self.breadth_first().traverse(seeds, &mut rec);
        rec.pre
    }
}

impl<G: QueryableGraph> Traverse for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::{Model, Ops};
    use petgraph::graph::NodeIndex;
    use quickcheck_macros::quickcheck;
    use std::fmt::Write;

    fn vids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    fn digraph(vertex_size: usize, edges: &[(usize, usize)]) -> directed::SlotGraph {
        let mut g = directed::SlotGraph::new();
        for _ in 0..vertex_size {
            g.add_vertex();
        }
        for (u, v) in edges {
            g.add_edge(VertexId::new(*u), VertexId::new(*v));
        }
        g
    }

    fn six_vertices() -> directed::SlotGraph {
        digraph(
            6,
            &[(1, 2), (1, 5), (1, 6), (2, 4), (4, 3), (4, 5), (6, 5)],
        )
    }

    /// Writes ` v` on pre-visits and ` <v>` on post-visits.
    #[derive(Default)]
    struct Transcript(String);

    impl Visitor for Transcript {
        fn visit(&mut self, v: VertexId) -> ControlFlow<()> {
            write!(&mut self.0, " {}", v.to_raw()).unwrap();
            ControlFlow::Continue(())
        }

        fn post_visit(&mut self, v: VertexId) -> ControlFlow<()> {
            write!(&mut self.0, " <{}>", v.to_raw()).unwrap();
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn bfs_directed() {
        let g = six_vertices();
        assert_eq!(g.bfs_order(vids(&[1])), vids(&[1, 2, 5, 6, 4, 3]));
    }

    #[test]
    fn dfs_pre_and_post() {
        let g = six_vertices();
        let mut rec = Recorder::default();
        let walk = g.depth_first().traverse(vids(&[1]), &mut rec);
        assert!(walk.is_completed());
        assert_eq!(rec.pre, vids(&[1, 6, 5, 2, 4, 3]));
        assert_eq!(rec.post, vids(&[5, 6, 3, 4, 2, 1]));
        let tree: Vec<_> = walk
            .tree_edges()
            .iter()
            .map(|(u, v)| (u.to_raw(), v.to_raw()))
            .collect();
        assert_eq!(tree, vec![(1, 6), (6, 5), (1, 2), (2, 4), (4, 3)]);
    }

    const TEN_VERTICES: &[(usize, usize)] = &[
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 3),
        (2, 5),
        (2, 6),
        (3, 7),
        (3, 8),
        (8, 1),
        (8, 9),
        (8, 10),
        (10, 7),
    ];

    #[test]
    fn dfs_transcript() {
        let g = digraph(10, TEN_VERTICES);
        let mut t = Transcript::default();
        g.depth_first().traverse(vids(&[1]), &mut t);
        assert_eq!(
            t.0,
            " 1 4 <4> 3 8 10 7 <7> <10> 9 <9> <8> <3> 2 6 <6> 5 <5> <2> <1>"
        );
    }

    #[test]
    fn dfs_transcript_with_self_loops() {
        let mut edges = TEN_VERTICES.to_vec();
        edges.insert(0, (1, 1));
        edges.push((8, 8));
        let g = digraph(10, &edges);
        let mut t = Transcript::default();
        g.depth_first().traverse(vids(&[1]), &mut t);
        assert_eq!(
            t.0,
            " 1 4 <4> 3 8 10 7 <7> <10> 9 <9> <8> <3> 2 6 <6> 5 <5> <2> <1>"
        );
    }

    #[test]
    fn dfs_transcript_on_symmetric_edges() {
        let mut g = digraph(10, TEN_VERTICES);
        g.add_edge(VertexId::new(1), VertexId::new(8));
        for (u, v) in TEN_VERTICES.iter().chain([(1, 8)].iter()) {
            g.add_edge(VertexId::new(*v), VertexId::new(*u));
        }
        let mut t = Transcript::default();
        g.depth_first().traverse(vids(&[1]), &mut t);
        assert_eq!(
            t.0,
            " 1 8 10 7 3 2 6 <6> 5 <5> <2> <3> <7> <10> 9 <9> <8> 4 <4> <1>"
        );
    }

    #[test]
    fn undirected_dfs_matches_symmetric_digraph() {
        let mut g = undirected::SlotGraph::new();
        for _ in 0..10 {
            g.add_vertex();
        }
        for (u, v) in TEN_VERTICES.iter().chain([(1, 8)].iter()) {
            g.add_edge(VertexId::new(*u), VertexId::new(*v));
        }
        let mut t = Transcript::default();
        g.depth_first().traverse(vids(&[1]), &mut t);
        assert_eq!(
            t.0,
            " 1 8 10 7 3 2 6 <6> 5 <5> <2> <3> <7> <10> 9 <9> <8> 4 <4> <1>"
        );
    }

    #[test]
    fn stop_in_pre_visit() {
        let g = six_vertices();
        let mut seen = vec![];
        let walk = g.breadth_first().traverse(
            vids(&[1]),
            &mut PreVisit(|v: VertexId| {
                seen.push(v);
                if v == VertexId::new(6) {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }),
        );
        assert_eq!(walk.outcome(), Outcome::Stopped(VertexId::new(6)));
        assert_eq!(seen, vids(&[1, 2, 5, 6]));
        assert!(!walk.is_visited(&VertexId::new(4)));
        assert!(walk.is_discovered(&VertexId::new(4)));
        assert!(!walk.is_discovered(&VertexId::new(3)));
    }

    #[test]
    fn stop_in_post_visit() {
        struct StopAfter(VertexId, Vec<VertexId>);
        impl Visitor for StopAfter {
            fn post_visit(&mut self, v: VertexId) -> ControlFlow<()> {
                self.1.push(v);
                if v == self.0 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
        }

        let g = six_vertices();
        let mut visitor = StopAfter(VertexId::new(6), vec![]);
        let walk = g.depth_first().traverse(vids(&[1]), &mut visitor);
        assert_eq!(walk.outcome(), Outcome::Stopped(VertexId::new(6)));
        assert_eq!(visitor.1, vids(&[5, 6]));
        assert!(!walk.is_visited(&VertexId::new(2)));
    }

    #[test]
    fn selective_post_visits() {
        struct OddOnly(Vec<VertexId>);
        impl Visitor for OddOnly {
            fn post_visit(&mut self, v: VertexId) -> ControlFlow<()> {
                self.0.push(v);
                ControlFlow::Continue(())
            }

            fn should_post_visit(&self, v: VertexId) -> bool {
                v.to_raw() % 2 == 1
            }
        }

        let g = six_vertices();
        let mut visitor = OddOnly(vec![]);
        g.depth_first().traverse(vids(&[1]), &mut visitor);
        assert_eq!(visitor.0, vids(&[5, 3, 1]));
    }

    #[test]
    fn bfs_has_no_post_visits() {
        let g = six_vertices();
        let mut rec = Recorder::default();
        g.breadth_first().traverse(vids(&[1]), &mut rec);
        assert_eq!(rec.pre.len(), 6);
        assert!(rec.post.is_empty());
    }

    #[test]
    fn marked_vertices_are_skipped() {
        let g = six_vertices();
        let mut dft = g.depth_first();
        dft.mark(&VertexId::new(4));
        assert!(dft.is_marked(&VertexId::new(4)));
        let mut rec = Recorder::default();
        dft.traverse(vids(&[1]), &mut rec);
        assert_eq!(rec.pre, vids(&[1, 6, 5, 2]));
    }

    #[test]
    fn multiple_and_absent_seeds() {
        let g = digraph(4, &[(3, 1)]);
        assert_eq!(g.dfs_preorder(vids(&[3, 9, 2, 3])), vids(&[3, 1, 2]));
        assert_eq!(g.bfs_order(vids(&[3, 2])), vids(&[2, 3, 1]));
        assert!(g.dfs_postorder(vids(&[0, 7])).is_empty());
    }

    #[quickcheck]
    fn bfs_visits_by_distance(ops: Ops) {
        let mut model = Model::new(true);
        let mut g = directed::SlotGraph::new();
        ops.replay(&mut model, &mut g);
        let seed = match g.iter_vertices().next() {
            None => return,
            Some(seed) => seed,
        };

        let mut oracle = petgraph::Graph::<(), ()>::new();
        for _ in 0..=g.max_vertex().to_raw() {
            oracle.add_node(());
        }
        for e in g.iter_edges() {
            oracle.add_edge(
                NodeIndex::new(e.source.to_raw()),
                NodeIndex::new(e.sink.to_raw()),
                (),
            );
        }
        let hops = petgraph::algo::dijkstra(&oracle, NodeIndex::new(seed.to_raw()), None, |_| 1);

        let order = g.bfs_order([seed]);
        assert_eq!(order.len(), hops.len());
        let dists: Vec<usize> = order
            .iter()
            .map(|v| hops[&NodeIndex::new(v.to_raw())])
            .collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]), "{:?}", dists);
    }

    #[quickcheck]
    fn dfs_finishes_children_before_parents(ops: Ops) {
        let mut model = Model::new(false);
        let mut g = undirected::SlotGraph::new();
        ops.replay(&mut model, &mut g);
        let mut rec = Recorder::default();
        let walk = g.depth_first().traverse(g.iter_vertices(), &mut rec);
        assert_eq!(rec.pre.len(), g.vertex_size());
        assert_eq!(rec.post.len(), g.vertex_size());
        let finished_at = |v: &VertexId| rec.post.iter().position(|x| x == v).unwrap();
        for (parent, child) in walk.tree_edges() {
            assert!(g.contains_edge(parent, child));
            assert!(finished_at(child) < finished_at(parent));
        }
    }
}
