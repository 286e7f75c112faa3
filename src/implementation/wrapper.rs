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

//! This module provides [`SimpleLinearSumAssignment`], a builder that lets a
//! caller add `(left, right, cost)` arcs one at a time without pre-sizing a
//! [`crate::ArcListGraph`] themselves, plus the [`SolverOptions`] builder
//! used to configure the core.

use derive_builder::Builder;

use crate::{
    ActiveNodePolicy, ArcIndex, ArcListGraph, AssignmentStatus, CostValue, Graph,
    LinearSumAssignment, DEFAULT_COST_SCALING_DIVISOR,
};

/// Configuration knobs for [`LinearSumAssignment`], built with a
/// `derive_builder`-generated builder the same way the rest of this crate
/// family configures optional flags on a solver.
///
/// # Example
/// ```
/// # use assignment_core::*;
/// let custom = SolverOptionsBuilder::default()
///     .cost_scaling_divisor(8)
///     .active_node_policy(ActiveNodePolicy::Fifo)
///     .build()
///     .unwrap();
/// assert_eq!(8, custom.cost_scaling_divisor);
///
/// let default_options = SolverOptions::default();
/// assert_eq!(ActiveNodePolicy::Lifo, default_options.active_node_policy);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(pattern = "owned")]
pub struct SolverOptions {
    /// The base `alpha` of the epsilon-scaling geometric decrease.
    #[builder(default = "DEFAULT_COST_SCALING_DIVISOR")]
    pub cost_scaling_divisor: CostValue,
    /// Which container backs the active-node set.
    #[builder(default = "ActiveNodePolicy::Lifo")]
    pub active_node_policy: ActiveNodePolicy,
}
impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptionsBuilder::default()
            .build()
            .expect("every field of SolverOptions has a default")
    }
}

/// The final matching produced by a successful [`SimpleLinearSumAssignment::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The total cost of the matching, in the original (unscaled) units.
    pub cost: CostValue,
    /// `mate[left]` is the right-node id (relative to the right side) `left`
    /// is matched to.
    pub mate: Vec<usize>,
}

/// A higher-level builder over [`LinearSumAssignment`]: callers add arcs
/// `(left, right, cost)` without pre-sizing a graph, then call
/// [`SimpleLinearSumAssignment::solve`].
///
/// This is the component responsible for the pre-flight overflow check
/// (`|cost| <= CostValue::MAX / (num_left_nodes + 1)`, §4.L): costs are
/// validated against the final left-node count at `solve` time, before any
/// of them enters the core.
pub struct SimpleLinearSumAssignment {
    options: SolverOptions,
    arc_left: Vec<usize>,
    arc_right: Vec<usize>,
    arc_cost: Vec<CostValue>,
    num_left_nodes: usize,
}
impl SimpleLinearSumAssignment {
    /// Creates an empty instance with the default [`SolverOptions`].
    pub fn new() -> Self {
        Self::with_options(SolverOptions::default())
    }

    /// Creates an empty instance with explicit [`SolverOptions`].
    pub fn with_options(options: SolverOptions) -> Self {
        Self {
            options,
            arc_left: vec![],
            arc_right: vec![],
            arc_cost: vec![],
            num_left_nodes: 0,
        }
    }

    /// Adds an arc from left node `left` to right node `right` with cost
    /// `cost`, growing the left-node count to cover `left` if needed, and
    /// returns the new arc's id.
    pub fn add_arc_with_cost(&mut self, left: usize, right: usize, cost: CostValue) -> ArcIndex {
        self.num_left_nodes = self.num_left_nodes.max(left + 1);
        self.arc_left.push(left);
        self.arc_right.push(right);
        self.arc_cost.push(cost);
        ArcIndex(self.arc_cost.len() - 1)
    }

    /// Number of left nodes seen so far (the largest `left` id given to
    /// `add_arc_with_cost`, plus one).
    pub fn num_left_nodes(&self) -> usize {
        self.num_left_nodes
    }

    /// Total number of nodes (left plus right) seen so far.
    pub fn num_nodes(&self) -> usize {
        self.graph_if_built().num_nodes()
    }

    /// Total number of arcs added so far.
    pub fn num_arcs(&self) -> usize {
        self.arc_cost.len()
    }

    /// The left node of `arc`.
    pub fn left_node(&self, arc: ArcIndex) -> usize {
        self.arc_left[arc.0]
    }

    /// The right node of `arc`.
    pub fn right_node(&self, arc: ArcIndex) -> usize {
        self.arc_right[arc.0]
    }

    /// The (unscaled) cost of `arc`, as given to `add_arc_with_cost`.
    pub fn cost(&self, arc: ArcIndex) -> CostValue {
        self.arc_cost[arc.0]
    }

    fn graph_if_built(&self) -> ArcListGraph {
        let mut g = ArcListGraph::new(self.num_left_nodes);
        for i in 0..self.arc_cost.len() {
            g.add_arc(self.arc_left[i], self.arc_right[i]);
        }
        g
    }

    /// Builds the graph, checks every cost against the overflow bound, and
    /// runs the core solver. Returns `PossibleOverflow` without entering the
    /// core if any cost would not fit.
    pub fn solve(&self) -> (AssignmentStatus, Option<Solution>) {
        let overflow_bound = CostValue::MAX / (self.num_left_nodes as CostValue + 1);
        if self.arc_cost.iter().any(|&c| c.abs() > overflow_bound) {
            return (AssignmentStatus::PossibleOverflow, None);
        }

        let graph = self.graph_if_built();
        let mut solver = LinearSumAssignment::with_options(
            &graph,
            self.num_left_nodes,
            self.options.cost_scaling_divisor,
            self.options.active_node_policy,
        );
        for i in 0..self.arc_cost.len() {
            solver.set_arc_cost(ArcIndex(i), self.arc_cost[i]);
        }

        if !solver.finalize_setup() {
            return (AssignmentStatus::PossibleOverflow, None);
        }
        if !solver.compute_assignment() {
            return (AssignmentStatus::Infeasible, None);
        }

        let mate = (0..self.num_left_nodes)
            .map(|u| {
                let arc = solver
                    .get_assignment_arc(crate::NodeIndex(u))
                    .expect("a perfect matching assigns every left node");
                graph.right_node_of(arc)
            })
            .collect();

        (AssignmentStatus::Optimal, Some(Solution { cost: solver.get_cost(), mate }))
    }
}
impl Default for SimpleLinearSumAssignment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_simple_linear_sum_assignment {
    use super::*;

    #[test]
    fn two_by_two_unique_optimum() {
        let mut s = SimpleLinearSumAssignment::new();
        s.add_arc_with_cost(0, 0, 0);
        s.add_arc_with_cost(0, 1, 2);
        s.add_arc_with_cost(1, 0, 3);
        s.add_arc_with_cost(1, 1, 4);

        let (status, solution) = s.solve();
        assert_eq!(AssignmentStatus::Optimal, status);
        let solution = solution.unwrap();
        assert_eq!(4, solution.cost);
        assert_eq!(vec![0, 1], solution.mate);
    }

    #[test]
    fn two_by_two_negative_costs() {
        let mut s = SimpleLinearSumAssignment::new();
        s.add_arc_with_cost(0, 0, 2);
        s.add_arc_with_cost(0, 1, -10);
        s.add_arc_with_cost(1, 0, 3);
        s.add_arc_with_cost(1, 1, -20);

        let (status, solution) = s.solve();
        assert_eq!(AssignmentStatus::Optimal, status);
        let solution = solution.unwrap();
        assert_eq!(-18, solution.cost);
        assert_eq!(vec![0, 1], solution.mate);
    }

    #[test]
    fn two_by_two_infeasible_when_a_right_node_is_unreachable() {
        let mut s = SimpleLinearSumAssignment::new();
        // both left nodes can only reach right node 1; right node 0 is never targeted
        s.add_arc_with_cost(0, 1, 2);
        s.add_arc_with_cost(0, 1, -10);
        s.add_arc_with_cost(1, 1, 3);
        s.add_arc_with_cost(1, 1, -20);

        let (status, solution) = s.solve();
        assert_eq!(AssignmentStatus::Infeasible, status);
        assert!(solution.is_none());
    }

    #[test]
    fn overflow_guard_trips_before_entering_the_core() {
        let mut s = SimpleLinearSumAssignment::new();
        s.add_arc_with_cost(0, 0, CostValue::MAX);
        s.add_arc_with_cost(0, 1, CostValue::MAX);
        s.add_arc_with_cost(1, 0, CostValue::MAX);
        s.add_arc_with_cost(1, 1, CostValue::MAX);

        let (status, solution) = s.solve();
        assert_eq!(AssignmentStatus::PossibleOverflow, status);
        assert!(solution.is_none());
    }

    #[test]
    fn four_by_four_hungarian_benchmark() {
        let costs = [
            [90, 76, 75, 80],
            [35, 85, 55, 65],
            [125, 95, 90, 105],
            [45, 110, 95, 115],
        ];
        let mut s = SimpleLinearSumAssignment::new();
        for (u, row) in costs.iter().enumerate() {
            for (v, &c) in row.iter().enumerate() {
                s.add_arc_with_cost(u, v, c);
            }
        }

        let (status, solution) = s.solve();
        assert_eq!(AssignmentStatus::Optimal, status);
        let solution = solution.unwrap();
        assert_eq!(275, solution.cost);
        assert_eq!(vec![3, 2, 1, 0], solution.mate);
    }

    #[test]
    fn machol_wien_family_pairs_i_with_n_minus_one_minus_i() {
        let n = 10usize;
        let mut s = SimpleLinearSumAssignment::new();
        for i in 0..n {
            for j in 0..n {
                s.add_arc_with_cost(i, j, (i * j) as CostValue);
            }
        }

        let (status, solution) = s.solve();
        assert_eq!(AssignmentStatus::Optimal, status);
        let solution = solution.unwrap();
        for (i, &j) in solution.mate.iter().enumerate() {
            assert_eq!(n - 1, i + j);
        }
    }
}
