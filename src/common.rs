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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.

use std::fmt;

/// The type used for arc costs, scaled costs and node prices. Costs may be
/// negative; `CostValue::MAX` plays the role of `INT_MAX` in the bounds of
/// §4.E and §4.L.
pub type CostValue = i64;

// ----------------------------------------------------------------------------
// --- NODE INDEX ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// Identifies a node of the bipartite graph. Left nodes occupy
/// `[0, num_left_nodes)`; right nodes occupy `[num_left_nodes, num_nodes)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeIndex(pub usize);
impl NodeIndex {
    #[inline]
    /// Returns the id (numeric value) of the node.
    ///
    /// # Examples:
    /// ```
    /// # use assignment_core::NodeIndex;
    /// assert_eq!(0, NodeIndex(0).id());
    /// assert_eq!(3, NodeIndex(3).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- ARC INDEX ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// Identifies an arc of the bipartite graph. Arc ids are stable for the
/// lifetime of a graph and always lie in `[0, num_arcs)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ArcIndex(pub usize);
impl ArcIndex {
    #[inline]
    /// Returns the id (numeric value) of the arc.
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- STATS --------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// Cumulative counters maintained by a solve (component K). These are plain
/// data: there is no metrics framework anywhere in this crate, only a value
/// the caller can inspect or print after `compute_assignment` returns.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Stats {
    /// Number of refinements (full passes at a fixed epsilon) performed.
    pub refinements: u64,
    /// Number of right-node relabelings performed across all refinements.
    pub relabelings: u64,
    /// Number of double-pushes (a push that evicts a previous mate).
    pub double_pushes: u64,
    /// Number of pushes that did not evict a previous mate.
    pub pushes: u64,
}
impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} refinements; {} relabelings; {} double pushes; {} pushes",
            self.refinements, self.relabelings, self.double_pushes, self.pushes
        )
    }
}

// ----------------------------------------------------------------------------
// --- RESULT -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a solve attempt (§7). No exceptions are thrown anywhere in
/// this crate: every failure mode is one of these three in-band values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AssignmentStatus {
    /// A perfect matching of minimum cost was found.
    Optimal,
    /// No perfect matching exists, or the instance is malformed (a left node
    /// with no outgoing arc, or an unbalanced node count).
    Infeasible,
    /// An arc cost (or an intermediate bound) could not be guaranteed to fit
    /// in `CostValue` without overflow; the solve was not attempted, or was
    /// attempted with a clamped bound and its result is not guaranteed.
    PossibleOverflow,
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_node_index {
    use crate::NodeIndex;

    #[test]
    fn test_node_id() {
        assert_eq!(0, NodeIndex(0).id());
        assert_eq!(1, NodeIndex(1).id());
        assert_eq!(7, NodeIndex(7).id());
    }
}

#[cfg(test)]
mod test_stats {
    use crate::Stats;

    #[test]
    fn test_stats_display() {
        let s = Stats { refinements: 3, relabelings: 10, double_pushes: 4, pushes: 2 };
        assert_eq!("3 refinements; 10 relabelings; 4 double pushes; 2 pushes", s.to_string());
    }

    #[test]
    fn test_stats_default_is_zero() {
        let s = Stats::default();
        assert_eq!(0, s.refinements);
        assert_eq!(0, s.relabelings);
        assert_eq!(0, s.double_pushes);
        assert_eq!(0, s.pushes);
    }
}
