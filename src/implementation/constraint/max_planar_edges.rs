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

//! This module provides the planarity cutting planes of the branch-and-cut
//! algorithm for the maximum c-planar subgraph problem. These constraints are
//! separated dynamically: whenever the separation procedure (driven by a
//! planarity test) finds that the current solution selects a non planar set of
//! edges, it adds a `MaxPlanarEdgesConstraint` bounding the number of edges
//! that can be selected among them.

use fxhash::FxHashSet;

use crate::{Constraint, ConstraintSense, EdgeVariable, NodePair};

/// The edges a `MaxPlanarEdgesConstraint` bears on
#[derive(Debug, Clone)]
enum Scope {
    /// All the edges of the graph
    Graph,
    /// Only the listed edges
    Edges {
        pairs : Vec<NodePair>,
        lookup: FxHashSet<NodePair>,
    },
}

/// The constraint `sum(x_e for e in E) <= bound` where `E` is either the set
/// of all edge variables (graph-wide constraint) or the set of variables
/// whose endpoints match one of a fixed set of node pairs (restricted
/// constraint).
///
/// The constraint is immutable once it has been created.
///
/// # Example
/// ```
/// # use planarcut::*;
/// let cut = MaxPlanarEdgesConstraint::restricted(1, [NodePair::from((1, 2)), NodePair::from((3, 4))]);
/// assert_eq!(1.0, cut.coeff(&EdgeVar::original(Node(2), Node(1), 1.0)));
/// assert_eq!(0.0, cut.coeff(&EdgeVar::original(Node(1), Node(3), 1.0)));
/// ```
#[derive(Debug, Clone)]
pub struct MaxPlanarEdgesConstraint {
    bound: usize,
    scope: Scope,
}

impl MaxPlanarEdgesConstraint {
    /// At most `bound` edges of the whole graph can be selected
    pub fn graph_wide(bound: usize) -> Self {
        MaxPlanarEdgesConstraint { bound, scope: Scope::Graph }
    }
    /// At most `bound` of the given edges can be selected
    pub fn restricted<I>(bound: usize, edges: I) -> Self
    where I: IntoIterator<Item = NodePair>
    {
        let mut pairs  = vec![];
        let mut lookup = FxHashSet::default();
        for pair in edges {
            if lookup.insert(pair) {
                pairs.push(pair);
            }
        }
        MaxPlanarEdgesConstraint { bound, scope: Scope::Edges { pairs, lookup } }
    }

    /// The maximum number of edges which can be selected
    pub fn bound(&self) -> usize {
        self.bound
    }
    /// Returns true iff this constraint bears on all the edges of the graph
    pub fn is_graph_wide(&self) -> bool {
        matches!(self.scope, Scope::Graph)
    }
    /// The edges a restricted constraint bears on (empty for a graph-wide one)
    pub fn pairs(&self) -> &[NodePair] {
        match &self.scope {
            Scope::Graph => &[],
            Scope::Edges { pairs, .. } => pairs,
        }
    }
    /// Returns true iff the edge joining the nodes of `pair` appears in this
    /// constraint
    pub fn covers(&self, pair: NodePair) -> bool {
        match &self.scope {
            Scope::Graph => true,
            Scope::Edges { lookup, .. } => lookup.contains(&pair),
        }
    }

    /// A dynamic constraint may be removed from the relaxation by the solver
    /// once it becomes inactive. Planarity cuts are never dynamic.
    pub fn is_dynamic(&self) -> bool {
        false
    }
    /// A local constraint is only valid in the subtree of the search node it
    /// was generated in. Planarity cuts are globally valid.
    pub fn is_local(&self) -> bool {
        false
    }
    /// A liftable constraint can be extended when new variables are added to
    /// the model: the coefficient of any new variable is given by `coeff`.
    pub fn is_liftable(&self) -> bool {
        true
    }
}

impl<V: EdgeVariable> Constraint<V> for MaxPlanarEdgesConstraint {
    fn sense(&self) -> ConstraintSense {
        ConstraintSense::Less
    }
    fn rhs(&self) -> f64 {
        self.bound as f64
    }
    fn coeff(&self, v: &V) -> f64 {
        if self.covers(v.node_pair()) { 1.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Constraint, ConstraintSense, EdgeVar, MaxPlanarEdgesConstraint, Node, NodePair};

    fn var(a: usize, b: usize) -> EdgeVar {
        EdgeVar::original(Node(a), Node(b), 1.0)
    }
    fn pair(a: usize, b: usize) -> NodePair {
        NodePair::new(Node(a), Node(b))
    }

    #[test]
    fn graph_wide_coefficients_are_all_one() {
        let cut = MaxPlanarEdgesConstraint::graph_wide(3);
        for v in [var(0, 1), var(1, 0), var(7, 3), var(2, 2), EdgeVar::connection(Node(5), Node(9), 0.0)] {
            assert_eq!(1.0, cut.coeff(&v));
        }
        assert!(cut.is_graph_wide());
        assert!(cut.pairs().is_empty());
    }
    #[test]
    fn restricted_coefficients_ignore_orientation() {
        let cut = MaxPlanarEdgesConstraint::restricted(1, [pair(1, 2), pair(3, 4)]);
        assert_eq!(1.0, cut.coeff(&var(2, 1)));
        assert_eq!(1.0, cut.coeff(&var(1, 2)));
        assert_eq!(1.0, cut.coeff(&var(4, 3)));
        assert_eq!(0.0, cut.coeff(&var(1, 3)));
        assert_eq!(0.0, cut.coeff(&var(2, 3)));
        assert!(!cut.is_graph_wide());
    }
    #[test]
    fn restricted_constraint_keeps_its_pairs() {
        let cut = MaxPlanarEdgesConstraint::restricted(2, vec![pair(3, 4), pair(2, 1), pair(4, 3)]);
        assert_eq!(&[pair(3, 4), pair(1, 2)], cut.pairs());
        assert_eq!(2, cut.bound());
    }
    #[test]
    fn empty_restriction_has_null_coefficients() {
        let cut = MaxPlanarEdgesConstraint::restricted(0, []);
        assert_eq!(0.0, cut.coeff(&var(0, 1)));
    }
    #[test]
    fn constraint_is_an_upper_bound() {
        let cut = MaxPlanarEdgesConstraint::graph_wide(3);
        assert_eq!(ConstraintSense::Less, Constraint::<EdgeVar>::sense(&cut));
        assert_eq!(3.0, Constraint::<EdgeVar>::rhs(&cut));
        assert!(!cut.is_dynamic());
        assert!(!cut.is_local());
        assert!(cut.is_liftable());
    }
    #[test]
    fn detects_violated_fractional_solutions() {
        let cut = MaxPlanarEdgesConstraint::restricted(1, [pair(1, 2), pair(3, 4)]);
        let vars = [var(1, 2), var(4, 3), var(1, 3)];

        let violating = [0.75, 0.75, 1.0];
        assert_eq!(1.5, cut.lhs(&mut vars.iter().zip(violating)));
        assert_eq!(0.5, cut.violation(&mut vars.iter().zip(violating)));
        assert!(cut.is_violated(&mut vars.iter().zip(violating), 1e-6));

        let satisfying = [0.5, 0.5, 1.0];
        assert_eq!(0.0, cut.violation(&mut vars.iter().zip(satisfying)));
        assert!(!cut.is_violated(&mut vars.iter().zip(satisfying), 1e-6));
    }
    #[test]
    fn usable_as_a_trait_object() {
        let cuts: Vec<Box<dyn Constraint<EdgeVar>>> = vec![
            Box::new(MaxPlanarEdgesConstraint::graph_wide(3)),
            Box::new(MaxPlanarEdgesConstraint::restricted(1, [pair(0, 1)])),
        ];
        let v = var(1, 0);
        assert_eq!(vec![1.0, 1.0], cuts.iter().map(|c| c.coeff(&v)).collect::<Vec<_>>());
        let w = var(1, 2);
        assert_eq!(vec![1.0, 0.0], cuts.iter().map(|c| c.coeff(&w)).collect::<Vec<_>>());
    }
}
