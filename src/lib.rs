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

//! # Planarcut
//! Planarcut provides the building blocks shared by the algorithms computing
//! large planar subgraphs, whether they are fast heuristics or exact
//! branch-and-cut solvers for the maximum (c-)planar subgraph problem.
//!
//! It comprises two independent parts:
//!
//! * The `PlanarSubgraphModule` contract. An implementation computes a set of
//!   edges whose removal makes a graph planar. It always works on a
//!   disposable `GraphCopy` of the caller's graph: the provided method
//!   `call_and_delete` deletes the computed edges from the copy and reports
//!   them to the caller in terms of the original graph.
//! * The `MaxPlanarEdgesConstraint` cutting planes. These are the
//!   constraints a branch-and-cut solver adds to its linear relaxation when
//!   its separation procedure finds out that the edges selected by the
//!   current solution do not form a planar graph.
//!
//! Neither the planarity test, nor the branch-and-cut search, nor the LP
//! solver are part of this library. The planarity test is plugged through the
//! `PlanarityTest` trait (any `Fn(&Graph) -> bool` will do).
//!
//! ## Quick Example
//! ```
//! # use planarcut::*;
//! // 1. Build the original graph
//! let mut graph = Graph::with_nodes(5);
//! for a in 0..5 {
//!     for b in a+1..5 {
//!         graph.add_edge(Node(a), Node(b)).unwrap();
//!     }
//! }
//! // 2. Create a working copy of it
//! let mut copy = GraphCopy::new(&graph);
//! // 3. Pick a planar subgraph module. Here, the planarity test is only
//! //    Euler's bound (which happens to be exact for complete graphs).
//! let euler  = |g: &Graph| g.nb_edges() <= 3 * g.nb_nodes() - 6;
//! let module = MaximalPlanarSubgraph::new(euler, &NoCutoff);
//! // 4. Strip the copy until it is planar
//! let mut deleted = vec![];
//! let status = module.call_and_delete(&mut copy, &[], &mut deleted, false);
//!
//! assert_eq!(ReturnType::Feasible, status);
//! assert_eq!(vec![Edge(9)], deleted);
//! assert_eq!(9, copy.graph().nb_edges());
//! assert_eq!(10, graph.nb_edges());
//! ```
//!
//! ## Cutting planes
//! ```
//! # use planarcut::*;
//! // the separation found out that x_{1,2} + x_{3,4} <= 1 must hold
//! let cut = MaxPlanarEdgesConstraint::restricted(1, [NodePair::from((1, 2)), NodePair::from((3, 4))]);
//! let vars = [
//!     EdgeVar::original(Node(2), Node(1), 1.0),
//!     EdgeVar::original(Node(3), Node(4), 1.0),
//!     EdgeVar::original(Node(1), Node(3), 1.0),
//! ];
//! let coeffs = vars.iter().map(|v| cut.coeff(v)).collect::<Vec<_>>();
//! assert_eq!(vec![1.0, 1.0, 0.0], coeffs);
//! assert!(cut.is_violated(&mut vars.iter().zip([1.0, 0.5, 1.0]), 1e-6));
//! ```

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
