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

use std::collections::VecDeque;

use crate::{ActiveNodes, NodeIndex};

/// An alternative active-node container: a FIFO queue. Produces the same
/// matching as [`crate::LifoActiveNodes`] on any instance, just in a
/// different number of double-pushes.
#[derive(Debug, Default, Clone)]
pub struct FifoActiveNodes {
    nodes: VecDeque<NodeIndex>,
}
impl FifoActiveNodes {
    pub fn new() -> Self {
        Self::default()
    }
}
impl ActiveNodes for FifoActiveNodes {
    fn push(&mut self, node: NodeIndex) {
        self.nodes.push_back(node)
    }

    fn pop(&mut self) -> Option<NodeIndex> {
        self.nodes.pop_front()
    }

    fn clear(&mut self) {
        self.nodes.clear()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod test_fifo_active_nodes {
    use super::*;

    #[test]
    fn pops_in_push_order() {
        let mut q = FifoActiveNodes::new();
        q.push(NodeIndex(0));
        q.push(NodeIndex(1));
        q.push(NodeIndex(2));
        assert_eq!(Some(NodeIndex(0)), q.pop());
        assert_eq!(Some(NodeIndex(1)), q.pop());
        assert_eq!(Some(NodeIndex(2)), q.pop());
        assert_eq!(None, q.pop());
    }
}
