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

use crate::{EdgeVariable, Node};

/// The kind of edge a decision variable stands for
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EdgeKind {
    /// An edge of the input graph
    Original,
    /// An edge that can be added to the input graph to connect a cluster
    Connection,
}

/// The decision variable telling whether an edge belongs to the c-planar
/// subgraph.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeVar {
    source   : Node,
    target   : Node,
    kind     : EdgeKind,
    objective: f64,
}
impl EdgeVar {
    pub fn new(source: Node, target: Node, kind: EdgeKind, objective: f64) -> Self {
        EdgeVar { source, target, kind, objective }
    }
    /// A variable for an edge of the input graph
    pub fn original(source: Node, target: Node, objective: f64) -> Self {
        Self::new(source, target, EdgeKind::Original, objective)
    }
    /// A variable for an edge that may be added to connect a cluster
    pub fn connection(source: Node, target: Node, objective: f64) -> Self {
        Self::new(source, target, EdgeKind::Connection, objective)
    }
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }
    /// The coefficient of this variable in the objective function
    pub fn objective(&self) -> f64 {
        self.objective
    }
}
impl EdgeVariable for EdgeVar {
    fn source(&self) -> Node {
        self.source
    }
    fn target(&self) -> Node {
        self.target
    }
}
