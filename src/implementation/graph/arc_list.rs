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

use crate::{ArcIndex, Graph, NodeIndex};

/// A plain, owned bipartite graph: left nodes are `0..num_left_nodes`, right
/// nodes are `num_left_nodes..num_nodes`, and arcs are appended one at a
/// time with [`ArcListGraph::add_arc`]. Outgoing arcs of a left node are
/// stored in the order they were added, which is what makes the tie-break
/// rule of the best-arc selector ("pick the first encountered") deterministic.
#[derive(Debug, Clone)]
pub struct ArcListGraph {
    num_left_nodes: usize,
    num_right_nodes: usize,
    heads: Vec<NodeIndex>,
    tails: Vec<usize>,
    outgoing: Vec<Vec<ArcIndex>>,
}
impl ArcListGraph {
    /// Creates an empty graph with `num_left_nodes` left nodes and no right
    /// nodes or arcs yet. Right nodes are discovered lazily as arcs are
    /// added; `num_right_nodes` grows to cover the largest right node seen.
    pub fn new(num_left_nodes: usize) -> Self {
        Self {
            num_left_nodes,
            num_right_nodes: 0,
            heads: vec![],
            tails: vec![],
            outgoing: vec![vec![]; num_left_nodes],
        }
    }

    /// Adds an arc from left node `tail` (an id in `0..num_left_nodes`) to
    /// right node `right` (an id in `0..num_right_nodes`, counted separately
    /// from the left side) and returns its id. `right` is translated
    /// internally into the node id `num_left_nodes + right`.
    pub fn add_arc(&mut self, tail: usize, right: usize) -> ArcIndex {
        assert!(tail < self.num_left_nodes, "left node {tail} out of range");
        self.num_right_nodes = self.num_right_nodes.max(right + 1);
        let head = NodeIndex(self.num_left_nodes + right);
        let arc = ArcIndex(self.heads.len());
        self.heads.push(head);
        self.tails.push(tail);
        self.outgoing[tail].push(arc);
        arc
    }

    /// The right-node id (relative to the right side, not the global node
    /// space) that `arc` points to.
    pub fn right_node_of(&self, arc: ArcIndex) -> usize {
        self.heads[arc.0].0 - self.num_left_nodes
    }

    /// The left-node id `arc` leaves from.
    pub fn left_node_of(&self, arc: ArcIndex) -> usize {
        self.tails[arc.0]
    }
}
impl Graph for ArcListGraph {
    fn num_left_nodes(&self) -> usize {
        self.num_left_nodes
    }

    fn num_nodes(&self) -> usize {
        self.num_left_nodes + self.num_right_nodes
    }

    fn num_arcs(&self) -> usize {
        self.heads.len()
    }

    fn head(&self, arc: ArcIndex) -> NodeIndex {
        self.heads[arc.0]
    }

    fn outgoing_arcs(&self, left_node: NodeIndex) -> Box<dyn Iterator<Item = ArcIndex> + '_> {
        Box::new(self.outgoing[left_node.0].iter().copied())
    }
}

#[cfg(test)]
mod test_arc_list_graph {
    use super::*;

    #[test]
    fn arcs_are_returned_in_insertion_order() {
        let mut g = ArcListGraph::new(2);
        let a0 = g.add_arc(0, 0);
        let a1 = g.add_arc(0, 1);
        g.add_arc(1, 0);

        let got: Vec<_> = g.outgoing_arcs(NodeIndex(0)).collect();
        assert_eq!(vec![a0, a1], got);
    }

    #[test]
    fn num_nodes_grows_with_the_largest_right_node_seen() {
        let mut g = ArcListGraph::new(3);
        g.add_arc(0, 0);
        g.add_arc(1, 2);
        assert_eq!(3, g.num_left_nodes());
        assert_eq!(3 + 3, g.num_nodes());
        assert_eq!(2, g.num_arcs());
    }

    #[test]
    fn head_points_into_the_right_side_of_the_node_space() {
        let mut g = ArcListGraph::new(1);
        let a = g.add_arc(0, 4);
        assert_eq!(NodeIndex(1 + 4), g.head(a));
        assert_eq!(4, g.right_node_of(a));
    }

    #[test]
    fn left_node_with_no_outgoing_arcs_yields_an_empty_iterator() {
        let g = ArcListGraph::new(2);
        assert_eq!(0, g.outgoing_arcs(NodeIndex(1)).count());
    }
}
