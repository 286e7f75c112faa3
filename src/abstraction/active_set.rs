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

use crate::NodeIndex;

/// This trait abstracts away the implementation details of the solver's
/// active-node container. That is, an `ActiveNodes` represents the set of
/// left nodes that currently carry excess and still need to be pushed.
///
/// # Note
/// The order in which nodes come back out is a performance policy, not a
/// correctness requirement: any order yields a correct matching. Solvers
/// must therefore not rely on a particular pop order being observable.
pub trait ActiveNodes {
    /// Pushes a node onto the container.
    fn push(&mut self, node: NodeIndex);
    /// Pops and returns a node from the container, if any remain.
    fn pop(&mut self) -> Option<NodeIndex>;
    /// Removes every node from the container.
    fn clear(&mut self);
    /// Yields the number of nodes currently held.
    fn len(&self) -> usize;
    /// Returns true iff the container is empty (`len() == 0`).
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
