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


//! # assignment-core
//! `assignment-core` is a cost-scaling push-relabel solver for the linear
//! sum assignment problem: given a bipartite graph with equally many left
//! and right nodes and a cost on every arc, find a perfect matching of
//! minimum total cost, or determine that none exists.
//!
//! The algorithm is Goldberg & Kennedy's cost-scaling push-relabel method:
//! arc costs are scaled up by `L + 1` (where `L` is the number of left
//! nodes), then refined through a geometrically decreasing sequence of
//! epsilons until the matching at `epsilon = 1` is provably optimal over the
//! original costs. Each refinement saturates the active-node set with every
//! left node and repeatedly applies a "double push": match an active left
//! node to its best admissible arc, evicting and reactivating whatever left
//! node was previously matched to that arc's head.
//!
//! ## Quick Example
//! The lowest-level entry point is [`ArcListGraph`] plus
//! [`LinearSumAssignment`], mirroring how the algorithm itself is usually
//! described: build the graph, price every arc, then run the solver.
//!
//! ```
//! use assignment_core::*;
//!
//! let mut graph = ArcListGraph::new(2);
//! let a00 = graph.add_arc(0, 0);
//! let a01 = graph.add_arc(0, 1);
//! let a10 = graph.add_arc(1, 0);
//! let a11 = graph.add_arc(1, 1);
//!
//! let mut solver = LinearSumAssignment::new(&graph, 2);
//! solver.set_arc_cost(a00, 0);
//! solver.set_arc_cost(a01, 2);
//! solver.set_arc_cost(a10, 3);
//! solver.set_arc_cost(a11, 4);
//!
//! assert!(solver.finalize_setup());
//! assert!(solver.compute_assignment());
//! assert_eq!(4, solver.get_cost());
//! ```
//!
//! Most callers don't want to pre-size a graph or juggle `ArcIndex`
//! themselves. [`SimpleLinearSumAssignment`] wraps the above into a
//! `(left, right, cost)` builder:
//!
//! ```
//! use assignment_core::*;
//!
//! let mut assignment = SimpleLinearSumAssignment::new();
//! assignment.add_arc_with_cost(0, 0, 0);
//! assignment.add_arc_with_cost(0, 1, 2);
//! assignment.add_arc_with_cost(1, 0, 3);
//! assignment.add_arc_with_cost(1, 1, 4);
//!
//! let (status, solution) = assignment.solve();
//! assert_eq!(AssignmentStatus::Optimal, status);
//! assert_eq!(4, solution.unwrap().cost);
//! ```
//!
//! ## Going further
//! [`Graph`] is the trait the core solver needs from its caller's data
//! structure; implement it directly if [`ArcListGraph`] doesn't fit how your
//! arcs are already stored. [`SolverOptions`] configures the epsilon-scaling
//! divisor and the active-node container policy ([`ActiveNodePolicy`]).

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;