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

//! This module defines the abstractions a branch-and-cut solver manipulates
//! when it adds cutting planes to the linear relaxation of an ILP model whose
//! decision variables stand for the edges of a graph.

use crate::{Node, NodePair};

/// The sense of a linear constraint, that is the relation which must hold
/// between its left hand side and its right hand side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ConstraintSense {
    /// lhs <= rhs
    Less,
    /// lhs == rhs
    Equal,
    /// lhs >= rhs
    Greater,
}
impl ConstraintSense {
    /// Returns true iff `lhs <sense> rhs` holds up to the tolerance `tol`.
    pub fn is_satisfied(self, lhs: f64, rhs: f64, tol: f64) -> bool {
        match self {
            ConstraintSense::Less    => lhs <= rhs + tol,
            ConstraintSense::Equal   => (lhs - rhs).abs() <= tol,
            ConstraintSense::Greater => lhs >= rhs - tol,
        }
    }
}

/// A decision variable of an ILP model which represents the selection of one
/// edge of a graph. The association between a variable and its endpoints is
/// fixed for the whole lifetime of the variable.
pub trait EdgeVariable {
    /// One endpoint of the edge
    fn source(&self) -> Node;
    /// The other endpoint of the edge
    fn target(&self) -> Node;
    /// The (unordered) pair of endpoints of the edge
    fn node_pair(&self) -> NodePair {
        NodePair::new(self.source(), self.target())
    }
}

/// A linear constraint `sum(coeff(v) * x_v) <sense> rhs` over the variables
/// of type `V`. The solver asks a constraint for the coefficient of each of
/// its variables when it turns the constraint into a row of its relaxation.
pub trait Constraint<V> {
    /// The relation between the left and right hand sides
    fn sense(&self) -> ConstraintSense;
    /// The right hand side of the constraint
    fn rhs(&self) -> f64;
    /// The coefficient of variable `v` in this constraint
    fn coeff(&self, v: &V) -> f64;

    /// Evaluates the left hand side of the constraint for the given
    /// assignment (a sequence of variables along with their value).
    fn lhs<'a>(&self, assignment: &mut dyn Iterator<Item = (&'a V, f64)>) -> f64
    where V: 'a
    {
        assignment.map(|(v, x)| self.coeff(v) * x).sum()
    }
    /// Returns the slack of the constraint for the given assignment. A
    /// negative slack means the constraint is violated.
    fn slack<'a>(&self, assignment: &mut dyn Iterator<Item = (&'a V, f64)>) -> f64
    where V: 'a
    {
        let lhs = self.lhs(assignment);
        let rhs = self.rhs();
        match self.sense() {
            ConstraintSense::Less    => rhs - lhs,
            ConstraintSense::Greater => lhs - rhs,
            ConstraintSense::Equal   => -(lhs - rhs).abs(),
        }
    }
    /// Returns the amount by which the given assignment violates this
    /// constraint (zero when it is satisfied).
    fn violation<'a>(&self, assignment: &mut dyn Iterator<Item = (&'a V, f64)>) -> f64
    where V: 'a
    {
        (-self.slack(assignment)).max(0.0)
    }
    /// Returns true iff the given assignment violates this constraint by more
    /// than `tol`.
    fn is_violated<'a>(&self, assignment: &mut dyn Iterator<Item = (&'a V, f64)>, tol: f64) -> bool
    where V: 'a
    {
        let lhs = self.lhs(assignment);
        !self.sense().is_satisfied(lhs, self.rhs(), tol)
    }
}
