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

use crate::{Edge, GraphError, Node, NodePair};

/// An undirected multigraph whose nodes and edges are identified by dense
/// integer ids. Nodes can only be added. Edges can be added and deleted; the
/// id of a deleted edge is never reused.
#[derive(Debug, Default)]
pub struct Graph {
    nb_nodes: usize,
    /// The endpoints (source, target) of each edge. A deleted edge is `None`
    edges   : Vec<Option<(Node, Node)>>,
    /// The number of live edges incident to each node
    degree  : Vec<usize>,
    nb_live : usize,
}

impl Graph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a graph with `n` isolated nodes `Node(0)..Node(n)`
    pub fn with_nodes(n: usize) -> Self {
        Graph { nb_nodes: n, edges: vec![], degree: vec![0; n], nb_live: 0 }
    }
    /// Adds a fresh isolated node to the graph
    pub fn add_node(&mut self) -> Node {
        self.nb_nodes += 1;
        self.degree.push(0);
        Node(self.nb_nodes - 1)
    }
    /// Adds an edge from `source` to `target`
    pub fn add_edge(&mut self, source: Node, target: Node) -> Result<Edge, GraphError> {
        self.check_node(source)?;
        self.check_node(target)?;
        self.edges.push(Some((source, target)));
        self.degree[source.id()] += 1;
        self.degree[target.id()] += 1;
        self.nb_live += 1;
        Ok(Edge(self.edges.len() - 1))
    }
    /// Deletes the given edge from the graph
    pub fn del_edge(&mut self, e: Edge) -> Result<(), GraphError> {
        let slot = self.edges.get_mut(e.id()).ok_or(GraphError::UnknownEdge(e))?;
        let (s, t) = slot.take().ok_or(GraphError::DeletedEdge(e))?;
        self.degree[s.id()] -= 1;
        self.degree[t.id()] -= 1;
        self.nb_live -= 1;
        Ok(())
    }

    /// The number of nodes in the graph
    pub fn nb_nodes(&self) -> usize {
        self.nb_nodes
    }
    /// The number of live (not deleted) edges in the graph
    pub fn nb_edges(&self) -> usize {
        self.nb_live
    }
    /// One past the largest edge id ever issued by this graph
    pub fn edge_id_bound(&self) -> usize {
        self.edges.len()
    }
    /// Iterates over all the nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.nb_nodes).map(Node)
    }
    /// Iterates over the live edges of the graph, by increasing id
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().enumerate()
            .filter(|(_, e)| e.is_some())
            .map(|(i, _)| Edge(i))
    }
    /// Returns true iff `e` is a live edge of this graph
    pub fn contains_edge(&self, e: Edge) -> bool {
        matches!(self.edges.get(e.id()), Some(Some(_)))
    }
    /// Returns true iff `n` is a node of this graph
    pub fn contains_node(&self, n: Node) -> bool {
        n.id() < self.nb_nodes
    }
    /// The source of a live edge
    pub fn source(&self, e: Edge) -> Option<Node> {
        self.edges.get(e.id()).copied().flatten().map(|(s, _)| s)
    }
    /// The target of a live edge
    pub fn target(&self, e: Edge) -> Option<Node> {
        self.edges.get(e.id()).copied().flatten().map(|(_, t)| t)
    }
    /// The unordered endpoints of a live edge
    pub fn endpoints(&self, e: Edge) -> Option<NodePair> {
        self.edges.get(e.id()).copied().flatten().map(NodePair::from)
    }
    /// The number of live edges incident to `n` (a self loop counts twice)
    pub fn degree(&self, n: Node) -> Option<usize> {
        self.degree.get(n.id()).copied()
    }
    /// Returns the first live edge (by increasing id) joining `u` and `v`,
    /// regardless of its orientation.
    pub fn find_edge(&self, u: Node, v: Node) -> Option<Edge> {
        let pair = NodePair::new(u, v);
        self.edges().find(|e| self.endpoints(*e) == Some(pair))
    }

    fn check_node(&self, n: Node) -> Result<(), GraphError> {
        if self.contains_node(n) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(n))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Edge, Graph, GraphError, Node, NodePair};

    fn triangle() -> Graph {
        let mut g = Graph::with_nodes(3);
        g.add_edge(Node(0), Node(1)).unwrap();
        g.add_edge(Node(1), Node(2)).unwrap();
        g.add_edge(Node(2), Node(0)).unwrap();
        g
    }

    #[test]
    fn edges_get_increasing_ids() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        assert_eq!(Node(0), a);
        assert_eq!(Node(1), b);
        assert_eq!(Ok(Edge(0)), g.add_edge(a, b));
        assert_eq!(Ok(Edge(1)), g.add_edge(b, a));
        assert_eq!(2, g.nb_edges());
        assert_eq!(2, g.edge_id_bound());
    }
    #[test]
    fn endpoints_are_recorded() {
        let g = triangle();
        assert_eq!(Some(Node(2)), g.source(Edge(2)));
        assert_eq!(Some(Node(0)), g.target(Edge(2)));
        assert_eq!(Some(NodePair::from((0, 2))), g.endpoints(Edge(2)));
        assert_eq!(None, g.endpoints(Edge(3)));
    }
    #[test]
    fn cannot_add_an_edge_to_an_unknown_node() {
        let mut g = Graph::with_nodes(2);
        assert_eq!(Err(GraphError::UnknownNode(Node(2))), g.add_edge(Node(0), Node(2)));
        assert_eq!(0, g.nb_edges());
    }
    #[test]
    fn deleted_edges_are_no_longer_iterated() {
        let mut g = triangle();
        g.del_edge(Edge(1)).unwrap();
        assert_eq!(vec![Edge(0), Edge(2)], g.edges().collect::<Vec<_>>());
        assert_eq!(2, g.nb_edges());
        assert_eq!(3, g.edge_id_bound());
        assert!(!g.contains_edge(Edge(1)));
        assert_eq!(None, g.endpoints(Edge(1)));
    }
    #[test]
    fn deleting_twice_is_an_error() {
        let mut g = triangle();
        assert_eq!(Ok(()), g.del_edge(Edge(0)));
        assert_eq!(Err(GraphError::DeletedEdge(Edge(0))), g.del_edge(Edge(0)));
        assert_eq!(Err(GraphError::UnknownEdge(Edge(7))), g.del_edge(Edge(7)));
    }
    #[test]
    fn degrees_follow_deletions() {
        let mut g = triangle();
        assert_eq!(Some(2), g.degree(Node(0)));
        g.del_edge(Edge(0)).unwrap();
        assert_eq!(Some(1), g.degree(Node(0)));
        assert_eq!(Some(1), g.degree(Node(1)));
        assert_eq!(Some(2), g.degree(Node(2)));
        assert_eq!(None, g.degree(Node(3)));
    }
    #[test]
    fn find_edge_ignores_orientation() {
        let mut g = triangle();
        assert_eq!(Some(Edge(2)), g.find_edge(Node(0), Node(2)));
        assert_eq!(Some(Edge(0)), g.find_edge(Node(1), Node(0)));
        g.del_edge(Edge(0)).unwrap();
        assert_eq!(None, g.find_edge(Node(1), Node(0)));
    }
}
