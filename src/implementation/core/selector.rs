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

use crate::{ArcIndex, CostValue, Graph, NodeIndex};

/// The result of running the best-arc selector over one active left node:
/// its cheapest outgoing arc (by partial reduced cost) and the admissible
/// relabeling gap to apply to that arc's head.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BestArc {
    pub arc: ArcIndex,
    pub gap: CostValue,
}

/// Finds the best outgoing arc of `left_node` and the gap by which its head
/// should be relabeled, in one O(degree) pass (component F). `prices` is
/// indexed by the full node id space; only right-node entries are read.
/// Returns `None` if `left_node` has no outgoing arcs (an incidence
/// precondition violation, which the driver treats as infeasibility).
pub fn select_best_arc<G: Graph + ?Sized>(
    graph: &G,
    prices: &[CostValue],
    scaled_cost: &[CostValue],
    left_node: NodeIndex,
    epsilon: CostValue,
    delta_slack: CostValue,
) -> Option<BestArc> {
    let max_gap = delta_slack - epsilon;
    debug_assert!(max_gap >= 0, "delta_slack must exceed epsilon");

    let mut best: CostValue = CostValue::MAX;
    let mut best_arc: Option<ArcIndex> = None;
    let mut second: CostValue = CostValue::MAX;

    for arc in graph.outgoing_arcs(left_node) {
        let head = graph.head(arc);
        let partial_reduced_cost = scaled_cost[arc.0] - prices[head.0];

        if partial_reduced_cost < best {
            second = second.min(best);
            best = partial_reduced_cost;
            best_arc = Some(arc);
        } else if partial_reduced_cost < second {
            second = partial_reduced_cost;
        }

        let cap = best.checked_add(max_gap).unwrap_or(CostValue::MAX);
        second = second.min(cap);
    }

    best_arc.map(|arc| {
        let gap = (second - best).min(max_gap);
        debug_assert!(gap >= 0, "admissible gap must be non-negative");
        BestArc { arc, gap }
    })
}

#[cfg(test)]
mod test_selector {
    use super::*;
    use crate::ArcListGraph;

    /// Two left nodes, two right nodes, complete bipartite, arc costs are
    /// the scenario of SPEC_FULL.md §8.1 (scaled by K = 3 for L = 2).
    fn complete_2x2() -> (ArcListGraph, Vec<CostValue>) {
        let mut g = ArcListGraph::new(2);
        let mut costs = vec![0; 4];
        let k = 3;
        let a00 = g.add_arc(0, 0);
        let a01 = g.add_arc(0, 1);
        let a10 = g.add_arc(1, 0);
        let a11 = g.add_arc(1, 1);
        costs[a00.0] = 0 * k;
        costs[a01.0] = 2 * k;
        costs[a10.0] = 3 * k;
        costs[a11.0] = 4 * k;
        (g, costs)
    }

    #[test]
    fn picks_the_cheapest_arc_and_computes_a_capped_gap() {
        let (g, costs) = complete_2x2();
        let prices = vec![0; 4];
        let result = select_best_arc(&g, &prices, &costs, NodeIndex(0), 1, 100).unwrap();
        assert_eq!(ArcIndex(0), result.arc);
        assert_eq!(6, result.gap); // second(6) - best(0), capped at max_gap=99
    }

    #[test]
    fn a_single_outgoing_arc_yields_the_full_max_gap() {
        let mut g = ArcListGraph::new(1);
        let mut costs = vec![0; 1];
        let a = g.add_arc(0, 0);
        costs[a.0] = 5;
        let prices = vec![0];
        let result = select_best_arc(&g, &prices, &costs, NodeIndex(0), 1, 10).unwrap();
        assert_eq!(a, result.arc);
        assert_eq!(9, result.gap); // max_gap = delta_slack(10) - epsilon(1)
    }

    #[test]
    fn no_outgoing_arcs_yields_none() {
        let g = ArcListGraph::new(1);
        let prices: Vec<CostValue> = vec![];
        let costs: Vec<CostValue> = vec![];
        assert!(select_best_arc(&g, &prices, &costs, NodeIndex(0), 1, 10).is_none());
    }

    #[test]
    fn arcs_beyond_the_cap_do_not_change_the_result() {
        let mut g = ArcListGraph::new(1);
        let mut costs = vec![0; 3];
        let a0 = g.add_arc(0, 0);
        let a1 = g.add_arc(0, 1);
        let a2 = g.add_arc(0, 2);
        costs[a0.0] = 0;
        costs[a1.0] = 1000;
        costs[a2.0] = 5;
        let prices = vec![0; 3];
        let result = select_best_arc(&g, &prices, &costs, NodeIndex(0), 1, 10).unwrap();
        assert_eq!(a0, result.arc);
        assert_eq!(5, result.gap); // min(5-0, max_gap=9)
    }

    #[test]
    fn ties_pick_the_first_encountered_arc() {
        let mut g = ArcListGraph::new(1);
        let mut costs = vec![0; 2];
        let a0 = g.add_arc(0, 0);
        let a1 = g.add_arc(0, 1);
        costs[a0.0] = 7;
        costs[a1.0] = 7;
        let prices = vec![0; 2];
        let result = select_best_arc(&g, &prices, &costs, NodeIndex(0), 1, 10).unwrap();
        assert_eq!(a0, result.arc);
        assert_eq!(0, result.gap);
    }
}
