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

//! This module provides an incremental insertion heuristic which computes a
//! maximal planar subgraph of a working copy: the edges are inserted one after
//! the other into an initially empty graph and any edge whose insertion would
//! break planarity is rejected (deleted).

use derive_builder::Builder;
use fxhash::FxHashSet;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, trace, warn};

use crate::{Cutoff, Edge, Graph, GraphCopy, GraphError, PlanarSubgraphModule, PlanarityTest, ReturnType};

/// This is how you configure a `MaximalPlanarSubgraph` e.g.
/// if you want it to try several insertion orders and keep the best one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct MaximalPlanarSubgraphConfig {
    /// The number of insertion orders that are tried (1 by default). The
    /// first run always uses the input order, the following ones shuffle the
    /// edges that are not preferred.
    #[builder(default="1")]
    runs: usize,
    /// The seed of the random generator used to shuffle the insertion order
    #[builder(default="0")]
    seed: u64,
}
impl MaximalPlanarSubgraphConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.runs {
            Some(0) => Err("at least one run is required".to_string()),
            _ => Ok(()),
        }
    }
}
impl Default for MaximalPlanarSubgraphConfig {
    fn default() -> Self {
        MaximalPlanarSubgraphConfig { runs: 1, seed: 0 }
    }
}
impl MaximalPlanarSubgraphConfig {
    pub fn runs(&self) -> usize {
        self.runs
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// An incremental insertion heuristic for the planar subgraph problem.
///
/// The preferred edges are inserted first, the other edges afterwards. An
/// edge is kept iff the planarity test accepts the graph made of all the kept
/// edges plus that one. Hence, the computed subgraph is *maximal*: no deleted
/// edge can be inserted back without losing planarity. It is however not
/// necessarily *maximum*, which is why the heuristic reports `Feasible`
/// unless it did not need to delete anything at all (`Optimal`).
///
/// # Note:
/// When the cutoff fires, the edges that have not been inserted yet are all
/// deleted. This is always a valid answer, so a `MaximalPlanarSubgraph` never
/// reports `TimeoutInfeasible`.
pub struct MaximalPlanarSubgraph<'a, T> {
    test  : T,
    cutoff: &'a dyn Cutoff,
    config: MaximalPlanarSubgraphConfig,
}

/// What came out of one insertion run
struct Run {
    deleted    : Vec<Edge>,
    interrupted: bool,
}

impl<'a, T: PlanarityTest> MaximalPlanarSubgraph<'a, T> {
    /// Creates a heuristic using the given planarity test and cutoff with
    /// the default configuration.
    pub fn new(test: T, cutoff: &'a dyn Cutoff) -> Self {
        MaximalPlanarSubgraph { test, cutoff, config: MaximalPlanarSubgraphConfig::default() }
    }
    /// Replaces the configuration of this heuristic
    pub fn with_config(mut self, config: MaximalPlanarSubgraphConfig) -> Self {
        self.config = config;
        self
    }
    pub fn config(&self) -> &MaximalPlanarSubgraphConfig {
        &self.config
    }

    fn solve(&self, copy: &GraphCopy, preferred: &[Edge], trust_preferred: bool) -> Result<(Vec<Edge>, ReturnType), GraphError> {
        let graph = copy.graph();

        let mut order = Vec::with_capacity(graph.nb_edges());
        let mut seen  = FxHashSet::default();
        for e in preferred.iter().copied() {
            copy.original(e)?;
            if !graph.contains_edge(e) {
                return Err(GraphError::DeletedEdge(e));
            }
            if seen.insert(e) {
                order.push(e);
            }
        }
        let nb_preferred = order.len();
        order.extend(graph.edges().filter(|e| !seen.contains(e)));

        let first = self.run(graph, &order, nb_preferred, trust_preferred)?;
        if first.interrupted {
            debug!(nb_deleted = first.deleted.len(), "cutoff occurred during the first run");
            return Ok((first.deleted, ReturnType::TimeoutFeasible));
        }

        let mut best = first.deleted;
        let mut rng  = StdRng::seed_from_u64(self.config.seed);
        for run in 1..self.config.runs {
            if best.is_empty() || self.cutoff.must_stop() {
                break;
            }
            order[nb_preferred..].shuffle(&mut rng);
            let outcome = self.run(graph, &order, nb_preferred, trust_preferred)?;
            if outcome.interrupted {
                break;
            }
            debug!(run, nb_deleted = outcome.deleted.len(), best = best.len(), "run completed");
            if outcome.deleted.len() < best.len() {
                best = outcome.deleted;
            }
        }

        let status = if best.is_empty() { ReturnType::Optimal } else { ReturnType::Feasible };
        Ok((best, status))
    }

    fn run(&self, graph: &Graph, order: &[Edge], nb_preferred: usize, trust_preferred: bool) -> Result<Run, GraphError> {
        let mut partial = Graph::with_nodes(graph.nb_nodes());
        let mut deleted = vec![];

        for (i, e) in order.iter().copied().enumerate() {
            if self.cutoff.must_stop() {
                deleted.extend_from_slice(&order[i..]);
                return Ok(Run { deleted, interrupted: true });
            }
            let source = graph.source(e).ok_or(GraphError::DeletedEdge(e))?;
            let target = graph.target(e).ok_or(GraphError::DeletedEdge(e))?;
            let added  = partial.add_edge(source, target)?;

            if trust_preferred && i < nb_preferred {
                continue;
            }
            if !self.test.is_planar(&partial) {
                trace!(edge = e.id(), "edge rejected");
                partial.del_edge(added)?;
                deleted.push(e);
            }
        }
        Ok(Run { deleted, interrupted: false })
    }
}

impl<T: PlanarityTest> PlanarSubgraphModule for MaximalPlanarSubgraph<'_, T> {
    fn call(
        &self,
        copy: &GraphCopy,
        preferred: &[Edge],
        deleted: &mut Vec<Edge>,
        preferred_imply_planar: bool,
    ) -> ReturnType {
        match self.solve(copy, preferred, preferred_imply_planar) {
            Ok((edges, status)) => {
                debug!(?status, nb_deleted = edges.len(), "maximal planar subgraph computed");
                deleted.extend(edges);
                status
            },
            Err(err) => {
                warn!(%err, "cannot compute a maximal planar subgraph");
                ReturnType::Error
            }
        }
    }
}
