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

use crate::{ActiveNodes, NodeIndex};

/// The default active-node container: a plain LIFO stack. Usually the
/// fastest policy, since it tends to re-process a node's neighborhood while
/// it is still hot.
#[derive(Debug, Default, Clone)]
pub struct LifoActiveNodes {
    nodes: Vec<NodeIndex>,
}
impl LifoActiveNodes {
    pub fn new() -> Self {
        Self::default()
    }
}
impl ActiveNodes for LifoActiveNodes {
    fn push(&mut self, node: NodeIndex) {
        self.nodes.push(node)
    }

    fn pop(&mut self) -> Option<NodeIndex> {
        self.nodes.pop()
    }

    fn clear(&mut self) {
        self.nodes.clear()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod test_lifo_active_nodes {
    use super::*;

    #[test]
    fn pops_in_reverse_of_push_order() {
        let mut s = LifoActiveNodes::new();
        s.push(NodeIndex(0));
        s.push(NodeIndex(1));
        s.push(NodeIndex(2));
        assert_eq!(Some(NodeIndex(2)), s.pop());
        assert_eq!(Some(NodeIndex(1)), s.pop());
        assert_eq!(Some(NodeIndex(0)), s.pop());
        assert_eq!(None, s.pop());
    }

    #[test]
    fn clear_empties_the_container() {
        let mut s = LifoActiveNodes::new();
        s.push(NodeIndex(0));
        s.push(NodeIndex(1));
        s.clear();
        assert!(s.is_empty());
        assert_eq!(0, s.len());
    }
}
