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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with: the
//! identities of nodes and edges, the unordered `NodePair`, the `ReturnType`
//! status of a planar subgraph computation and the `GraphError` taxonomy.

use std::fmt;

// ----------------------------------------------------------------------------
// --- NODE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes a node of some graph. Each node is identified with an
/// integer ranging from 0 until `graph.nb_nodes()`. Nodes are never deleted
/// so that identity is stable for the whole lifetime of the graph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Node(pub usize);
impl Node {
    #[inline]
    /// This function returns the id (numeric value) of the node.
    ///
    /// # Examples:
    /// ```
    /// # use planarcut::Node;
    /// assert_eq!(0, Node(0).id());
    /// assert_eq!(7, Node(7).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- EDGE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes an (undirected) edge of some graph. Edge ids are handed
/// out in increasing order by the graph that creates them and are never
/// reused, even after the edge has been deleted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Edge(pub usize);
impl Edge {
    #[inline]
    /// This function returns the id (numeric value) of the edge.
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- NODE PAIR --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An unordered pair of nodes. It denotes a candidate edge, regardless of the
/// orientation it has been created with: `NodePair::new(a, b)` is equal to
/// (and hashes like) `NodePair::new(b, a)`.
///
/// # Examples:
/// ```
/// # use planarcut::{Node, NodePair};
/// let ab = NodePair::new(Node(1), Node(2));
/// let ba = NodePair::new(Node(2), Node(1));
/// assert_eq!(ab, ba);
/// assert_eq!(Node(1), ab.v1());
/// assert_eq!(Node(2), ab.v2());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodePair {
    v1: Node,
    v2: Node,
}
impl NodePair {
    /// Creates the pair {a, b}. The smallest node is always stored first.
    pub fn new(a: Node, b: Node) -> Self {
        if a <= b {
            NodePair { v1: a, v2: b }
        } else {
            NodePair { v1: b, v2: a }
        }
    }
    /// The smallest of the two nodes
    pub fn v1(self) -> Node {
        self.v1
    }
    /// The largest of the two nodes
    pub fn v2(self) -> Node {
        self.v2
    }
    /// Returns true iff `n` is one of the two endpoints
    pub fn contains(self, n: Node) -> bool {
        self.v1 == n || self.v2 == n
    }
    /// Returns true iff the pair joins a node with itself
    pub fn is_loop(self) -> bool {
        self.v1 == self.v2
    }
}
impl From<(Node, Node)> for NodePair {
    fn from((a, b): (Node, Node)) -> Self {
        NodePair::new(a, b)
    }
}
impl From<(usize, usize)> for NodePair {
    fn from((a, b): (usize, usize)) -> Self {
        NodePair::new(Node(a), Node(b))
    }
}
impl fmt::Display for NodePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.v1.0, self.v2.0)
    }
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a planar subgraph computation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ReturnType {
    /// A valid (but not necessarily minimum) deletion set was found
    Feasible,
    /// A provably minimum deletion set was found
    Optimal,
    /// The algorithm could not produce any valid deletion set
    NoFeasibleSolution,
    /// The algorithm ran out of time but still produced a valid deletion set
    TimeoutFeasible,
    /// The algorithm ran out of time before it could produce a deletion set
    TimeoutInfeasible,
    /// The algorithm failed (e.g. because its input violates its preconditions)
    Error,
}
impl ReturnType {
    /// Returns true iff the computation has produced a deletion set that can
    /// be applied to the working copy.
    ///
    /// # Examples:
    /// ```
    /// # use planarcut::ReturnType;
    /// assert!(ReturnType::Optimal.is_solution());
    /// assert!(ReturnType::Feasible.is_solution());
    /// assert!(!ReturnType::NoFeasibleSolution.is_solution());
    /// ```
    pub fn is_solution(self) -> bool {
        matches!(self, ReturnType::Feasible | ReturnType::Optimal | ReturnType::TimeoutFeasible)
    }
    /// Returns true iff the computation was interrupted by a time limit
    pub fn is_timeout(self) -> bool {
        matches!(self, ReturnType::TimeoutFeasible | ReturnType::TimeoutInfeasible)
    }
}

// ----------------------------------------------------------------------------
// --- Errors -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The errors raised when a graph or a working copy is queried or modified
/// with elements that do not belong to it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The edge was never created by the working copy it is queried from
    #[error("edge {0:?} is not an element of this graph copy")]
    NotACopyElement(Edge),
    /// The node was never created by the working copy it is queried from
    #[error("node {0:?} is not an element of this graph copy")]
    NotACopyNode(Node),
    /// The node does not exist in the graph
    #[error("unknown node {0:?}")]
    UnknownNode(Node),
    /// The edge id was never issued by the graph
    #[error("unknown edge {0:?}")]
    UnknownEdge(Edge),
    /// The edge existed but has already been deleted
    #[error("edge {0:?} has already been deleted")]
    DeletedEdge(Edge),
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_node_pair {
    use fxhash::FxHashSet;

    use crate::{Node, NodePair};

    #[test]
    fn pairs_are_unordered() {
        assert_eq!(NodePair::new(Node(1), Node(2)), NodePair::new(Node(2), Node(1)));
        assert_ne!(NodePair::new(Node(1), Node(2)), NodePair::new(Node(1), Node(3)));
    }
    #[test]
    fn pairs_hash_regardless_of_orientation() {
        let mut set = FxHashSet::default();
        set.insert(NodePair::from((3, 4)));
        assert!(set.contains(&NodePair::from((4, 3))));
    }
    #[test]
    fn smallest_node_is_stored_first() {
        let p = NodePair::new(Node(9), Node(2));
        assert_eq!(Node(2), p.v1());
        assert_eq!(Node(9), p.v2());
        assert!(p.contains(Node(9)));
        assert!(!p.contains(Node(3)));
        assert!(!p.is_loop());
        assert!(NodePair::from((5, 5)).is_loop());
    }
    #[test]
    fn display_shows_both_endpoints() {
        assert_eq!("{1, 2}", NodePair::from((2, 1)).to_string());
    }
}
