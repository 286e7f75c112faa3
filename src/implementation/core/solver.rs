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

//! This module provides the implementation of the cost-scaling push-relabel
//! solver for the linear sum assignment problem.
use crate::{
    compute_price_lower_bound, select_best_arc, ActiveNodes, ArcIndex, CostValue,
    EpsilonSchedule, FifoActiveNodes, Graph, LifoActiveNodes, NodeIndex, Stats,
    slack_relabeling_price, DEFAULT_COST_SCALING_DIVISOR, MIN_EPSILON,
};

/// Picks which concrete container backs the active-node set (component C).
/// Neither variant affects correctness; `Lifo` is usually faster because it
/// tends to keep re-processing a node's neighborhood while it's still hot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ActiveNodePolicy {
    Lifo,
    Fifo,
}
impl Default for ActiveNodePolicy {
    fn default() -> Self {
        ActiveNodePolicy::Lifo
    }
}

/// A closed, runtime choice between the two active-node container
/// implementations. This is deliberately an enum rather than a generic type
/// parameter on [`LinearSumAssignment`]: the policy is a performance knob,
/// not a type the caller should ever need to name.
enum ActiveNodeContainer {
    Lifo(LifoActiveNodes),
    Fifo(FifoActiveNodes),
}
impl ActiveNodeContainer {
    fn new(policy: ActiveNodePolicy) -> Self {
        match policy {
            ActiveNodePolicy::Lifo => ActiveNodeContainer::Lifo(LifoActiveNodes::new()),
            ActiveNodePolicy::Fifo => ActiveNodeContainer::Fifo(FifoActiveNodes::new()),
        }
    }
}
impl ActiveNodes for ActiveNodeContainer {
    fn push(&mut self, node: NodeIndex) {
        match self {
            ActiveNodeContainer::Lifo(c) => c.push(node),
            ActiveNodeContainer::Fifo(c) => c.push(node),
        }
    }

    fn pop(&mut self) -> Option<NodeIndex> {
        match self {
            ActiveNodeContainer::Lifo(c) => c.pop(),
            ActiveNodeContainer::Fifo(c) => c.pop(),
        }
    }

    fn clear(&mut self) {
        match self {
            ActiveNodeContainer::Lifo(c) => c.clear(),
            ActiveNodeContainer::Fifo(c) => c.clear(),
        }
    }

    fn len(&self) -> usize {
        match self {
            ActiveNodeContainer::Lifo(c) => c.len(),
            ActiveNodeContainer::Fifo(c) => c.len(),
        }
    }
}

/// A cost-scaling push-relabel solver for the linear sum assignment
/// problem: given a bipartite graph with equally many left and right
/// nodes, find a perfect matching of minimum total cost, or determine that
/// none exists.
///
/// The solver borrows its graph for the duration of a solve and never
/// mutates it; it owns everything else (scaled costs, prices, the matching,
/// and the active-node set).
///
/// # Example
/// ```
/// # use assignment_core::*;
/// let mut graph = ArcListGraph::new(2);
/// let a00 = graph.add_arc(0, 0);
/// let a01 = graph.add_arc(0, 1);
/// let a10 = graph.add_arc(1, 0);
/// let a11 = graph.add_arc(1, 1);
///
/// let mut solver = LinearSumAssignment::new(&graph, 2);
/// solver.set_arc_cost(a00, 0);
/// solver.set_arc_cost(a01, 2);
/// solver.set_arc_cost(a10, 3);
/// solver.set_arc_cost(a11, 4);
///
/// assert!(solver.finalize_setup());
/// assert!(solver.compute_assignment());
/// assert_eq!(4, solver.get_cost());
/// assert_eq!(Some(NodeIndex(2)), solver.get_mate(NodeIndex(0)));
/// assert_eq!(Some(NodeIndex(3)), solver.get_mate(NodeIndex(1)));
/// ```
pub struct LinearSumAssignment<'a, G: Graph> {
    graph: &'a G,
    num_left_nodes: usize,
    num_nodes: usize,

    /// `K = L + 1`, the multiplier applied to every user-supplied cost.
    cost_scaling_factor: CostValue,
    scaled_cost: Vec<CostValue>,
    cmax_scaled: CostValue,

    /// Indexed by the full node id space; only right-node entries are ever
    /// written or read.
    prices: Vec<CostValue>,
    matched_arc: Vec<Option<ArcIndex>>,
    matched_node: Vec<Option<NodeIndex>>,
    total_excess: usize,

    schedule: EpsilonSchedule,
    epsilon: CostValue,
    initial_epsilon: CostValue,
    /// The `delta_slack` of the refinement in progress (or just completed),
    /// kept around so the debug-only `epsilon_optimal` check can reproduce
    /// `ImplicitPrice`'s single-incident-arc case.
    delta_slack: CostValue,

    pmin: CostValue,
    overflow_risk: bool,

    active: ActiveNodeContainer,
    stats: Stats,
}
impl<'a, G: Graph> LinearSumAssignment<'a, G> {
    /// Creates a solver over `graph`, with `num_left_nodes` left nodes and
    /// the default configuration (cost scaling divisor 5, LIFO active-node
    /// container).
    pub fn new(graph: &'a G, num_left_nodes: usize) -> Self {
        Self::with_options(
            graph,
            num_left_nodes,
            DEFAULT_COST_SCALING_DIVISOR,
            ActiveNodePolicy::default(),
        )
    }

    /// Creates a solver over `graph` with an explicit cost scaling divisor
    /// and active-node container policy.
    pub fn with_options(
        graph: &'a G,
        num_left_nodes: usize,
        cost_scaling_divisor: CostValue,
        active_node_policy: ActiveNodePolicy,
    ) -> Self {
        let num_nodes = graph.num_nodes();
        let num_arcs = graph.num_arcs();
        Self {
            graph,
            num_left_nodes,
            num_nodes,
            cost_scaling_factor: num_left_nodes as CostValue + 1,
            scaled_cost: vec![0; num_arcs],
            cmax_scaled: 0,
            prices: vec![0; num_nodes],
            matched_arc: vec![None; num_left_nodes],
            matched_node: vec![None; num_nodes],
            total_excess: 0,
            schedule: EpsilonSchedule::new(cost_scaling_divisor),
            epsilon: 0,
            initial_epsilon: 0,
            delta_slack: 0,
            pmin: 0,
            overflow_risk: false,
            active: ActiveNodeContainer::new(active_node_policy),
            stats: Stats::default(),
        }
    }

    /// Reconfigures the epsilon schedule's decrease factor. Takes effect on
    /// the next `finalize_setup`.
    pub fn set_cost_scaling_divisor(&mut self, alpha: CostValue) {
        self.schedule = EpsilonSchedule::new(alpha);
    }

    /// Records the (unscaled) cost of `arc`. `cost` must satisfy `|cost| <=
    /// CostValue::MAX / (num_left_nodes + 1)`; callers that cannot
    /// guarantee this up front should use
    /// [`crate::SimpleLinearSumAssignment`], which checks it for them.
    pub fn set_arc_cost(&mut self, arc: ArcIndex, cost: CostValue) {
        let scaled = cost * self.cost_scaling_factor;
        self.scaled_cost[arc.0] = scaled;
        self.cmax_scaled = self.cmax_scaled.max(scaled.abs());
    }

    /// The original (unscaled) cost of `arc`, as recorded by `set_arc_cost`.
    pub fn arc_cost(&self, arc: ArcIndex) -> CostValue {
        let scaled = self.scaled_cost[arc.0];
        debug_assert_eq!(0, scaled % self.cost_scaling_factor);
        scaled / self.cost_scaling_factor
    }

    pub fn num_left_nodes(&self) -> usize {
        self.num_left_nodes
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_arcs(&self) -> usize {
        self.scaled_cost.len()
    }

    fn has_incidence_precondition(&self) -> bool {
        (0..self.num_left_nodes)
            .all(|u| self.graph.outgoing_arcs(NodeIndex(u)).next().is_some())
    }

    /// Resets prices and the matching, and (re)computes the epsilon
    /// schedule's starting point and the price lower bound used for
    /// infeasibility detection. Idempotent: safe to call more than once
    /// before `compute_assignment`. Returns `false` iff the price lower
    /// bound computation could not be guaranteed not to overflow
    /// [`CostValue`] (an "overflow risk", §4.I/§7).
    pub fn finalize_setup(&mut self) -> bool {
        self.prices.iter_mut().for_each(|p| *p = 0);
        self.matched_arc.iter_mut().for_each(|m| *m = None);
        self.matched_node.iter_mut().for_each(|m| *m = None);
        self.total_excess = self.num_left_nodes;

        self.initial_epsilon = self.schedule.initial(self.cmax_scaled);
        self.epsilon = self.initial_epsilon;

        let bounds =
            compute_price_lower_bound(self.num_left_nodes, self.initial_epsilon, &self.schedule);
        self.pmin = bounds.pmin;
        self.overflow_risk = bounds.overflow_risk;
        !self.overflow_risk
    }

    /// Runs the refine loop over the whole epsilon schedule. Returns
    /// `false` iff the instance is infeasible (no perfect matching exists,
    /// or the graph failed a structural precondition).
    ///
    /// Always re-runs `finalize_setup` first, even if it was already called
    /// explicitly: a prior solve's matching must never leak into a new one
    /// after arc costs change via `set_arc_cost`.
    pub fn compute_assignment(&mut self) -> bool {
        if self.num_nodes != 2 * self.num_left_nodes {
            return false;
        }
        self.finalize_setup();
        let mut ok = self.has_incidence_precondition();
        debug_assert!(!ok || self.epsilon_optimal());

        let mut first_refinement = true;
        while ok && self.epsilon > MIN_EPSILON {
            let previous_epsilon = self.epsilon;
            self.epsilon = self.schedule.next(self.epsilon);
            ok = self.refine(previous_epsilon, first_refinement);
            debug_assert!(!ok || self.epsilon_optimal());
            first_refinement = false;
        }
        ok
    }

    fn refine(&mut self, previous_epsilon: CostValue, first_refinement: bool) -> bool {
        let delta_slack = slack_relabeling_price(self.num_left_nodes, previous_epsilon, self.epsilon);
        self.delta_slack = delta_slack;

        for arc in self.matched_arc.iter_mut() {
            *arc = None;
        }
        for mate in self.matched_node.iter_mut() {
            *mate = None;
        }
        self.total_excess = self.num_left_nodes;

        self.active.clear();
        for u in 0..self.num_left_nodes {
            self.active.push(NodeIndex(u));
        }

        let mut relabelings = 0u64;
        let mut double_pushes = 0u64;
        let mut pushes = 0u64;

        while let Some(u) = self.active.pop() {
            let ok = self.double_push(u, delta_slack, &mut relabelings, &mut double_pushes, &mut pushes);
            if !ok {
                if first_refinement {
                    return false;
                }
                debug_assert!(
                    false,
                    "double-push reported infeasible after the first refinement"
                );
                return false;
            }
        }

        self.stats.refinements += 1;
        self.stats.relabelings += relabelings;
        self.stats.double_pushes += double_pushes;
        self.stats.pushes += pushes;
        debug_assert_eq!(0, self.total_excess, "a completed refinement must match every left node");
        true
    }

    fn double_push(
        &mut self,
        u: NodeIndex,
        delta_slack: CostValue,
        relabelings: &mut u64,
        double_pushes: &mut u64,
        pushes: &mut u64,
    ) -> bool {
        let best = match select_best_arc(
            self.graph,
            &self.prices,
            &self.scaled_cost,
            u,
            self.epsilon,
            delta_slack,
        ) {
            Some(best) => best,
            None => return false,
        };

        let v = self.graph.head(best.arc);
        match self.matched_node[v.0] {
            Some(evicted) => {
                self.matched_arc[evicted.0] = None;
                self.active.push(evicted);
                *double_pushes += 1;
            }
            None => {
                self.total_excess -= 1;
                *pushes += 1;
            }
        }

        self.matched_arc[u.0] = Some(best.arc);
        self.matched_node[v.0] = Some(u);
        self.prices[v.0] -= best.gap + self.epsilon;
        *relabelings += 1;

        self.prices[v.0] >= self.pmin
    }

    fn partial_reduced_cost(&self, arc: ArcIndex) -> CostValue {
        self.scaled_cost[arc.0] - self.prices[self.graph.head(arc).0]
    }

    /// The implicit price of left node `u` (component J), derived from its
    /// incident arcs rather than stored: the negated minimum partial
    /// reduced cost among `u`'s arcs other than its matched one. If the
    /// matched arc is the only arc incident to `u`, `u` is priced low
    /// enough that it is never considered a candidate for eviction, using
    /// the same `delta_slack` the refinement in progress relabels with.
    /// Only for debugging, for use by `epsilon_optimal`.
    fn implicit_price(&self, u: NodeIndex) -> CostValue {
        let matched = self.matched_arc[u.0];
        let mut others = self.graph.outgoing_arcs(u).filter(|&arc| Some(arc) != matched);
        match others.next() {
            Some(first) => {
                let min = others.fold(self.partial_reduced_cost(first), |min, arc| {
                    min.min(self.partial_reduced_cost(arc))
                });
                -min
            }
            None => {
                let matched_arc = matched.expect("a left node with a single incident arc that isn't its match has no implicit price");
                -(self.partial_reduced_cost(matched_arc) + self.delta_slack)
            }
        }
    }

    /// Debug-only epsilon-optimality check (component J): every left node's
    /// implicit price, combined with the reduced cost of each of its
    /// incident arcs, must respect the asymmetric epsilon-optimality bound
    /// (residual matched arc <= epsilon, residual unmatched arc >= 0).
    /// Mirrors `EpsilonOptimal()`/`ImplicitPrice()` in the original source.
    fn epsilon_optimal(&self) -> bool {
        (0..self.num_left_nodes).all(|u| {
            let u = NodeIndex(u);
            let price = self.implicit_price(u);
            self.graph.outgoing_arcs(u).all(|arc| {
                let reduced_cost = price + self.partial_reduced_cost(arc);
                if self.matched_arc[u.0] == Some(arc) {
                    reduced_cost <= self.epsilon
                } else {
                    reduced_cost >= 0
                }
            })
        })
    }

    /// The total cost of the current matching. Precondition: the last
    /// `compute_assignment` call returned `true`.
    pub fn get_cost(&self) -> CostValue {
        (0..self.num_left_nodes)
            .filter_map(|u| self.matched_arc[u])
            .map(|arc| self.arc_cost(arc))
            .sum()
    }

    /// The arc currently matching left node `u`, if any.
    pub fn get_assignment_arc(&self, u: NodeIndex) -> Option<ArcIndex> {
        self.matched_arc[u.0]
    }

    /// The right-node mate of left node `u`, if any.
    pub fn get_mate(&self, u: NodeIndex) -> Option<NodeIndex> {
        self.matched_arc[u.0].map(|arc| self.graph.head(arc))
    }

    /// Cumulative counters collected across every refinement run so far.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// A human-readable rendering of `stats()`, e.g. "`3 refinements; 10
    /// relabelings; 4 double pushes; 2 pushes`".
    pub fn stats_string(&self) -> String {
        self.stats.to_string()
    }
}

#[cfg(test)]
mod test_linear_sum_assignment {
    use super::*;
    use crate::ArcListGraph;

    fn complete_bipartite(costs: &[&[CostValue]]) -> (ArcListGraph, Vec<Vec<ArcIndex>>) {
        let l = costs.len();
        let mut g = ArcListGraph::new(l);
        let mut arcs = vec![vec![]; l];
        for (u, row) in costs.iter().enumerate() {
            for (v, _) in row.iter().enumerate() {
                arcs[u].push(g.add_arc(u, v));
            }
        }
        (g, arcs)
    }

    fn solve(costs: &[&[CostValue]]) -> (bool, Option<CostValue>) {
        let (g, arcs) = complete_bipartite(costs);
        let mut solver = LinearSumAssignment::new(&g, costs.len());
        for (u, row) in costs.iter().enumerate() {
            for (v, &c) in row.iter().enumerate() {
                solver.set_arc_cost(arcs[u][v], c);
            }
        }
        solver.finalize_setup();
        if solver.compute_assignment() {
            (true, Some(solver.get_cost()))
        } else {
            (false, None)
        }
    }

    #[test]
    fn two_by_two_unique_optimum() {
        let (ok, cost) = solve(&[&[0, 2], &[3, 4]]);
        assert!(ok);
        assert_eq!(Some(4), cost);
    }

    #[test]
    fn two_by_two_negative_costs() {
        let (ok, cost) = solve(&[&[2, -10], &[3, -20]]);
        assert!(ok);
        assert_eq!(Some(-18), cost);
    }

    #[test]
    fn two_by_two_all_equal_costs() {
        let (ok, cost) = solve(&[&[5, 5], &[5, 5]]);
        assert!(ok);
        assert_eq!(Some(10), cost);
    }

    #[test]
    fn infeasible_when_a_left_node_has_no_outgoing_arc() {
        let mut g = ArcListGraph::new(2);
        let a0 = g.add_arc(0, 1); // only node 1 ever gets an arc
        let a1 = g.add_arc(0, 1);
        let mut solver = LinearSumAssignment::new(&g, 2);
        solver.set_arc_cost(a0, 2);
        solver.set_arc_cost(a1, -10);
        solver.finalize_setup();
        assert!(!solver.compute_assignment());
    }

    #[test]
    fn empty_model_is_trivially_optimal() {
        let g = ArcListGraph::new(0);
        let mut solver = LinearSumAssignment::new(&g, 0);
        assert!(solver.finalize_setup());
        assert!(solver.compute_assignment());
        assert_eq!(0, solver.get_cost());
    }

    #[test]
    fn repeated_solve_is_deterministic() {
        let (g, arcs) = complete_bipartite(&[&[90, 76], &[35, 85]]);
        let mut solver = LinearSumAssignment::new(&g, 2);
        solver.set_arc_cost(arcs[0][0], 90);
        solver.set_arc_cost(arcs[0][1], 76);
        solver.set_arc_cost(arcs[1][0], 35);
        solver.set_arc_cost(arcs[1][1], 85);
        solver.finalize_setup();
        assert!(solver.compute_assignment());
        let first = solver.get_cost();
        solver.finalize_setup();
        assert!(solver.compute_assignment());
        assert_eq!(first, solver.get_cost());
    }

    #[test]
    fn fifo_policy_agrees_with_lifo_on_cost() {
        let (g, arcs) = complete_bipartite(&[&[90, 76, 75, 80], &[35, 85, 55, 65], &[125, 95, 90, 105], &[45, 110, 95, 115]]);
        let mut solver = LinearSumAssignment::with_options(&g, 4, DEFAULT_COST_SCALING_DIVISOR, ActiveNodePolicy::Fifo);
        for (u, row) in [&[90, 76, 75, 80], &[35, 85, 55, 65], &[125i64, 95, 90, 105], &[45, 110, 95, 115]].iter().enumerate() {
            for (v, &c) in row.iter().enumerate() {
                solver.set_arc_cost(arcs[u][v], c);
            }
        }
        solver.finalize_setup();
        assert!(solver.compute_assignment());
        assert_eq!(275, solver.get_cost());
    }

    #[test]
    fn multigraph_prefers_the_cheaper_parallel_arc() {
        let mut g = ArcListGraph::new(2);
        let cheap = g.add_arc(0, 0);
        let expensive = g.add_arc(0, 0);
        let a10 = g.add_arc(1, 1);
        let mut solver = LinearSumAssignment::new(&g, 2);
        solver.set_arc_cost(cheap, 1);
        solver.set_arc_cost(expensive, 1000);
        solver.set_arc_cost(a10, 1);
        solver.finalize_setup();
        assert!(solver.compute_assignment());
        assert_eq!(2, solver.get_cost());
        assert_eq!(Some(cheap), solver.get_assignment_arc(NodeIndex(0)));
    }

    #[test]
    fn stats_string_has_the_expected_shape() {
        let (g, arcs) = complete_bipartite(&[&[0, 2], &[3, 4]]);
        let mut solver = LinearSumAssignment::new(&g, 2);
        solver.set_arc_cost(arcs[0][0], 0);
        solver.set_arc_cost(arcs[0][1], 2);
        solver.set_arc_cost(arcs[1][0], 3);
        solver.set_arc_cost(arcs[1][1], 4);
        solver.finalize_setup();
        assert!(solver.compute_assignment());
        let s = solver.stats_string();
        assert!(s.contains("refinements"));
        assert!(s.contains("relabelings"));
        assert!(s.contains("double pushes"));
        assert!(s.contains("pushes"));
    }
}
