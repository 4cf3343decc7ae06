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

//! This module provides the implementation of various cutoff heuristics that can
//! be used to bound the time a planar subgraph module spends on its computation.

use std::{sync::{Arc, atomic::{AtomicBool, Ordering}}, time::Duration};

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It never interrupts the computation.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {false}
}
/// This cutoff allows one to specify a maximum time budget to compute a
/// deletion set. Once the time budget is elapsed, the computation stops and
/// the module reports the best deletion set it has at hand.
///
/// # Example
/// ```
/// # use planarcut::*;
/// use std::time::Duration;
///
/// let mut g = Graph::with_nodes(3);
/// g.add_edge(Node(0), Node(1)).unwrap();
/// let copy = GraphCopy::new(&g);
///
/// let budget = TimeBudget::new(Duration::from_secs(10));
/// let module = MaximalPlanarSubgraph::new(|_: &Graph| true, &budget);
/// let mut deleted = vec![];
/// // will run for maximum 10 seconds
/// assert_eq!(ReturnType::Optimal, module.call(&copy, &[], &mut deleted, false));
/// ```
#[derive(Debug, Clone)]
pub struct TimeBudget {
    stop  : Arc<AtomicBool>
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        let stop   = Arc::new(AtomicBool::new(false));
        let t_flag = Arc::clone(&stop);

        // timer
        std::thread::spawn(move || {
            std::thread::sleep(budget);
            t_flag.store(true, Ordering::Relaxed);
        });

        TimeBudget { stop }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
