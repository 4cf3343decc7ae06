// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use fxhash::FxHashMap;

use crate::{Edge, Graph, GraphError, Node};

/// A disposable working copy of some original graph.
///
/// The copy is a graph of its own which algorithms can freely mutate. Each of
/// its nodes and edges keeps track of the original element it was copied
/// from. That correspondence is kept in side tables (and never as a reference
/// into the original graph) which are filled once, upon construction, and
/// never reassigned afterwards.
#[derive(Debug)]
pub struct GraphCopy {
    graph    : Graph,
    /// copy node id -> original node
    orig_node: Vec<Node>,
    /// copy edge id -> original edge (kept after the copy edge was deleted)
    orig_edge: Vec<Edge>,
    /// original edge -> live copy edge
    copy_edge: FxHashMap<Edge, Edge>,
}

impl GraphCopy {
    /// Creates a copy of all the nodes and (live) edges of `original`. The
    /// edges of the copy keep the orientation and the relative order of
    /// their originals.
    pub fn new(original: &Graph) -> Self {
        let mut graph = Graph::with_nodes(original.nb_nodes());
        let orig_node = original.nodes().collect::<Vec<_>>();
        let mut orig_edge = Vec::with_capacity(original.nb_edges());
        let mut copy_edge = FxHashMap::default();

        for e in original.edges() {
            if let (Some(s), Some(t)) = (original.source(e), original.target(e)) {
                // every original node has a twin bearing the same id
                if let Ok(c) = graph.add_edge(s, t) {
                    orig_edge.push(e);
                    copy_edge.insert(e, c);
                }
            }
        }

        GraphCopy { graph, orig_node, orig_edge, copy_edge }
    }

    /// Read access to the working copy
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the original edge `e` was copied from.
    ///
    /// This correspondence survives the deletion of `e` from the copy.
    /// It fails with `NotACopyElement` when `e` was never an edge of this copy.
    pub fn original(&self, e: Edge) -> Result<Edge, GraphError> {
        self.orig_edge.get(e.id()).copied().ok_or(GraphError::NotACopyElement(e))
    }
    /// Returns the original node `n` was copied from.
    pub fn original_node(&self, n: Node) -> Result<Node, GraphError> {
        self.orig_node.get(n.id()).copied().ok_or(GraphError::NotACopyNode(n))
    }
    /// Returns the live copy edge standing for the original edge `e`, if any.
    pub fn copy(&self, e: Edge) -> Option<Edge> {
        self.copy_edge.get(&e).copied()
    }

    /// Removes the edge `e` from the working copy. The original graph is left
    /// untouched and `original(e)` remains available.
    pub fn del_copy(&mut self, e: Edge) -> Result<(), GraphError> {
        let orig = self.original(e)?;
        self.graph.del_edge(e)?;
        self.copy_edge.remove(&orig);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;

    use crate::{Edge, Graph, GraphCopy, GraphError, Node, NodePair};

    fn sample() -> Graph {
        let mut g = Graph::with_nodes(4);
        g.add_edge(Node(0), Node(1)).unwrap();
        g.add_edge(Node(1), Node(2)).unwrap();
        g.add_edge(Node(0), Node(2)).unwrap();
        g.add_edge(Node(2), Node(3)).unwrap();
        g
    }

    #[test]
    fn copy_is_isomorphic_to_the_original() {
        let g = sample();
        let copy = GraphCopy::new(&g);

        assert_eq!(g.nb_nodes(), copy.graph().nb_nodes());
        assert_eq!(g.nb_edges(), copy.graph().nb_edges());
        for e in copy.graph().edges() {
            let o = copy.original(e).unwrap();
            assert_eq!(g.source(o), copy.graph().source(e));
            assert_eq!(g.target(o), copy.graph().target(e));
            assert_eq!(Some(e), copy.copy(o));
        }
        for n in copy.graph().nodes() {
            assert_eq!(Ok(n), copy.original_node(n));
        }
    }
    #[test]
    fn deleted_original_edges_are_not_copied() {
        let mut g = sample();
        g.del_edge(Edge(1)).unwrap();
        let copy = GraphCopy::new(&g);

        assert_eq!(3, copy.graph().nb_edges());
        assert_eq!(None, copy.copy(Edge(1)));
        assert_eq!(Ok(Edge(2)), copy.original(Edge(1)));
        assert_eq!(Some(NodePair::from((0, 2))), copy.graph().endpoints(Edge(1)));
    }
    #[test]
    fn correspondence_is_injective() {
        let g = sample();
        let copy = GraphCopy::new(&g);
        let originals = copy.graph().edges()
            .map(|e| copy.original(e).unwrap())
            .collect::<FxHashSet<_>>();
        assert_eq!(copy.graph().nb_edges(), originals.len());
    }
    #[test]
    fn foreign_elements_are_rejected() {
        let g = sample();
        let copy = GraphCopy::new(&g);
        assert_eq!(Err(GraphError::NotACopyElement(Edge(4))), copy.original(Edge(4)));
        assert_eq!(Err(GraphError::NotACopyNode(Node(4))), copy.original_node(Node(4)));
        assert_eq!(None, copy.copy(Edge(4)));
    }
    #[test]
    fn deletion_only_affects_the_copy() {
        let g = sample();
        let mut copy = GraphCopy::new(&g);

        assert_eq!(Ok(()), copy.del_copy(Edge(2)));
        assert_eq!(3, copy.graph().nb_edges());
        assert!(!copy.graph().edges().any(|e| e == Edge(2)));
        assert_eq!(4, g.nb_edges());
        assert!(g.contains_edge(Edge(2)));
    }
    #[test]
    fn correspondence_survives_deletion() {
        let g = sample();
        let mut copy = GraphCopy::new(&g);
        copy.del_copy(Edge(3)).unwrap();

        assert_eq!(Ok(Edge(3)), copy.original(Edge(3)));
        assert_eq!(None, copy.copy(Edge(3)));
    }
    #[test]
    fn deleting_foreign_or_deleted_edges_fails() {
        let g = sample();
        let mut copy = GraphCopy::new(&g);
        assert_eq!(Err(GraphError::NotACopyElement(Edge(9))), copy.del_copy(Edge(9)));
        copy.del_copy(Edge(0)).unwrap();
        assert_eq!(Err(GraphError::DeletedEdge(Edge(0))), copy.del_copy(Edge(0)));
        assert_eq!(3, copy.graph().nb_edges());
    }
}
