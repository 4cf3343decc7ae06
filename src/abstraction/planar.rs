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

//! This module defines the `PlanarSubgraphModule` trait: the contract shared
//! by all the heuristics (and exact algorithms) computing a set of edges whose
//! removal makes a graph planar. It also defines the `PlanarityTest` oracle
//! such algorithms may rely upon.

use tracing::{debug, trace};

use crate::{Edge, Graph, GraphCopy, ReturnType};

/// A planar subgraph module computes a set of edges of a working copy whose
/// removal yields a planar graph.
///
/// The only method an implementation *must* provide is `call`. The provided
/// method `call_and_delete` takes care of applying the deletion set to the
/// working copy and of translating it back to the original graph.
pub trait PlanarSubgraphModule {
    /// Computes a set of edges of `copy` whose removal makes `copy` planar
    /// and pushes them on `deleted`.
    ///
    /// `preferred` lists the copy edges that should be kept if at all
    /// possible. When `preferred_imply_planar` is true, the caller asserts
    /// that the subgraph made of the preferred edges alone is planar. That
    /// assertion is never validated: implementations are free to use it as a
    /// hint.
    ///
    /// The returned status tells whether `deleted` holds a valid deletion set
    /// (see `ReturnType::is_solution`).
    fn call(
        &self,
        copy: &GraphCopy,
        preferred: &[Edge],
        deleted: &mut Vec<Edge>,
        preferred_imply_planar: bool,
    ) -> ReturnType;

    /// Same as `call` when the caller has no preference about the edges to
    /// keep.
    fn call_without_preferences(&self, copy: &GraphCopy, deleted: &mut Vec<Edge>) -> ReturnType {
        self.call(copy, &[], deleted, false)
    }

    /// Computes a deletion set with `call`, then removes those edges from the
    /// working copy and appends the original edges they stand for to
    /// `deleted_originals` (in the very order `call` produced them).
    ///
    /// When `call` does not produce a solution, neither the copy nor
    /// `deleted_originals` are touched. The status returned by `call` is
    /// always returned as is.
    ///
    /// # Panics
    /// When `call` reports an edge that does not belong to `copy` (or that
    /// is reported twice). This can only happen when the implementation of
    /// `call` is broken.
    fn call_and_delete(
        &self,
        copy: &mut GraphCopy,
        preferred: &[Edge],
        deleted_originals: &mut Vec<Edge>,
        preferred_imply_planar: bool,
    ) -> ReturnType {
        let mut deleted = vec![];
        let status = self.call(copy, preferred, &mut deleted, preferred_imply_planar);

        if !status.is_solution() {
            debug!(?status, "no planar subgraph, working copy left untouched");
            return status;
        }

        debug!(?status, nb_deleted = deleted.len(), "applying deletion set");
        for e in deleted {
            let orig = copy.original(e)
                .unwrap_or_else(|err| panic!("planar subgraph module returned a foreign edge: {err}"));
            deleted_originals.push(orig);
            copy.del_copy(e)
                .unwrap_or_else(|err| panic!("planar subgraph module returned an invalid edge: {err}"));
            trace!(copy = e.id(), original = orig.id(), "edge deleted");
        }
        status
    }
}

/// This trait abstracts away the planarity test used by a planar subgraph
/// heuristic. Deciding planarity itself is not the concern of this library:
/// clients plug their favorite algorithm here.
pub trait PlanarityTest {
    /// Returns true iff the given graph is planar
    fn is_planar(&self, graph: &Graph) -> bool;
}
/// The simplest planarity test implementation is a closure.
impl<X: Fn(&Graph) -> bool> PlanarityTest for X {
    fn is_planar(&self, graph: &Graph) -> bool {
        self(graph)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{Edge, Graph, GraphCopy, Node, PlanarSubgraphModule, PlanarityTest, ReturnType};

    /// A module which reports a fixed list of copy edges (identified by the
    /// original edges they were copied from) along with a fixed status.
    struct Scripted {
        status: ReturnType,
        delete: Vec<Edge>,
        calls : Cell<usize>,
    }
    impl Scripted {
        fn new(status: ReturnType, delete: Vec<Edge>) -> Self {
            Scripted { status, delete, calls: Cell::new(0) }
        }
    }
    impl PlanarSubgraphModule for Scripted {
        fn call(&self, copy: &GraphCopy, _: &[Edge], deleted: &mut Vec<Edge>, _: bool) -> ReturnType {
            self.calls.set(self.calls.get() + 1);
            for e in self.delete.iter() {
                deleted.push(copy.copy(*e).unwrap_or(*e));
            }
            self.status
        }
    }

    /// A module which swallows the preferences it has been given
    #[derive(Default)]
    struct Spy {
        preferred: std::cell::RefCell<Vec<Edge>>,
        hint     : Cell<Option<bool>>,
    }
    impl PlanarSubgraphModule for Spy {
        fn call(&self, _: &GraphCopy, preferred: &[Edge], _: &mut Vec<Edge>, hint: bool) -> ReturnType {
            self.preferred.borrow_mut().extend_from_slice(preferred);
            self.hint.set(Some(hint));
            ReturnType::Optimal
        }
    }

    fn k4() -> Graph {
        let mut g = Graph::with_nodes(4);
        for (a, b) in [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)] {
            g.add_edge(Node(a), Node(b)).unwrap();
        }
        g
    }

    #[test]
    fn call_and_delete_translates_in_order() {
        let g = k4();
        let mut copy = GraphCopy::new(&g);
        let module = Scripted::new(ReturnType::Feasible, vec![Edge(4), Edge(1), Edge(5)]);

        let mut out = vec![];
        let status = module.call_and_delete(&mut copy, &[], &mut out, false);

        assert_eq!(ReturnType::Feasible, status);
        assert_eq!(vec![Edge(4), Edge(1), Edge(5)], out);
        assert_eq!(vec![Edge(0), Edge(2), Edge(3)], copy.graph().edges().map(|e| copy.original(e).unwrap()).collect::<Vec<_>>());
        assert_eq!(6, g.nb_edges());
    }
    #[test]
    fn call_and_delete_appends_to_prepopulated_output() {
        let g = k4();
        let mut copy = GraphCopy::new(&g);
        let module = Scripted::new(ReturnType::TimeoutFeasible, vec![Edge(2)]);

        let mut out = vec![Edge(42)];
        let status = module.call_and_delete(&mut copy, &[], &mut out, false);

        assert_eq!(ReturnType::TimeoutFeasible, status);
        assert_eq!(vec![Edge(42), Edge(2)], out);
        assert_eq!(5, copy.graph().nb_edges());
    }
    #[test]
    fn call_and_delete_is_a_noop_on_failure() {
        for status in [ReturnType::NoFeasibleSolution, ReturnType::TimeoutInfeasible, ReturnType::Error] {
            let g = k4();
            let mut copy = GraphCopy::new(&g);
            let module = Scripted::new(status, vec![Edge(0), Edge(1)]);

            let mut out = vec![Edge(7)];
            assert_eq!(status, module.call_and_delete(&mut copy, &[], &mut out, false));
            assert_eq!(vec![Edge(7)], out);
            assert_eq!(6, copy.graph().nb_edges());
            assert_eq!(1, module.calls.get());
        }
    }
    #[test]
    fn empty_deletion_set_leaves_the_copy_untouched() {
        let g = k4();
        let mut copy = GraphCopy::new(&g);
        let module = Scripted::new(ReturnType::Optimal, vec![]);

        let mut out = vec![];
        assert_eq!(ReturnType::Optimal, module.call_and_delete(&mut copy, &[], &mut out, false));
        assert!(out.is_empty());
        assert_eq!(6, copy.graph().nb_edges());
    }
    #[test]
    #[should_panic]
    fn foreign_edges_are_fatal() {
        let g = k4();
        let mut copy = GraphCopy::new(&g);
        let module = Scripted::new(ReturnType::Optimal, vec![Edge(99)]);
        let mut out = vec![];
        module.call_and_delete(&mut copy, &[], &mut out, false);
    }
    #[test]
    #[should_panic]
    fn edges_reported_twice_are_fatal() {
        let g = k4();
        let mut copy = GraphCopy::new(&g);
        let module = Scripted::new(ReturnType::Optimal, vec![Edge(3), Edge(3)]);
        let mut out = vec![];
        module.call_and_delete(&mut copy, &[], &mut out, false);
    }
    #[test]
    fn preferences_are_forwarded_to_call() {
        let g = k4();
        let mut copy = GraphCopy::new(&g);
        let spy = Spy::default();
        let mut out = vec![];
        spy.call_and_delete(&mut copy, &[Edge(3), Edge(0)], &mut out, true);

        assert_eq!(vec![Edge(3), Edge(0)], *spy.preferred.borrow());
        assert_eq!(Some(true), spy.hint.get());
    }
    #[test]
    fn call_without_preferences_has_no_preference() {
        let g = k4();
        let copy = GraphCopy::new(&g);
        let spy = Spy::default();
        let mut out = vec![];
        assert_eq!(ReturnType::Optimal, spy.call_without_preferences(&copy, &mut out));
        assert!(spy.preferred.borrow().is_empty());
        assert_eq!(Some(false), spy.hint.get());
    }
    #[test]
    fn any_closure_is_a_planarity_test() {
        let at_most_five = |g: &Graph| g.nb_edges() <= 5;
        let test: &dyn PlanarityTest = &at_most_five;
        assert!(!test.is_planar(&k4()));
        assert!(test.is_planar(&Graph::with_nodes(3)));
    }
}
