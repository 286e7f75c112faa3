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

use crate::{ArcIndex, NodeIndex};

/// This trait abstracts away the representation of the bipartite graph a
/// [`crate::LinearSumAssignment`] solves over. The core never owns a graph
/// and never mutates one: it borrows an implementor for the duration of a
/// solve and only ever asks for the outgoing arcs of a left node.
///
/// Left nodes are the ids `0..num_left_nodes()`; right nodes are the ids
/// `num_left_nodes()..num_nodes()`. Every arc must go from a left node to a
/// right node.
pub trait Graph {
    /// Number of left nodes in the graph.
    fn num_left_nodes(&self) -> usize;

    /// Total number of nodes in the graph. A well-formed bipartite instance
    /// has `num_nodes() == 2 * num_left_nodes()`; the driver checks this and
    /// reports `Infeasible` otherwise rather than trusting the adapter.
    fn num_nodes(&self) -> usize;

    /// Total number of arcs in the graph.
    fn num_arcs(&self) -> usize;

    /// The right node this arc points to.
    fn head(&self, arc: ArcIndex) -> NodeIndex;

    /// A lazy, restartable, finite sequence of the arc ids leaving
    /// `left_node`. The core never asks for incoming or reverse arcs.
    fn outgoing_arcs(&self, left_node: NodeIndex) -> Box<dyn Iterator<Item = ArcIndex> + '_>;
}
