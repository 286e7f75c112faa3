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

use crate::CostValue;

/// The smallest epsilon the schedule ever runs at. Once a refinement
/// completes at this value, the matching is truly optimal over the
/// (unscaled) original costs.
pub const MIN_EPSILON: CostValue = 1;

/// The default base of the geometric epsilon decrease, matching the
/// divisor named in the core's public configuration surface.
pub const DEFAULT_COST_SCALING_DIVISOR: CostValue = 5;

/// Drives the epsilon-scaling schedule of component D: the starting value
/// and the geometric decrease `new_epsilon = max(cur / alpha, 1)`.
#[derive(Debug, Copy, Clone)]
pub struct EpsilonSchedule {
    alpha: CostValue,
}
impl EpsilonSchedule {
    /// Creates a schedule with decrease factor `alpha`. `alpha` must be at
    /// least 2 for the sequence to strictly decrease towards 1.
    pub fn new(alpha: CostValue) -> Self {
        debug_assert!(alpha >= 2, "cost scaling divisor must be at least 2");
        Self { alpha }
    }

    /// The starting epsilon for a scale of maximum absolute cost
    /// `cmax_scaled`: `max(cmax_scaled, 2)`, so that even an all-zero-cost
    /// instance runs at least one refinement.
    pub fn initial(&self, cmax_scaled: CostValue) -> CostValue {
        cmax_scaled.max(2)
    }

    /// The next epsilon after `current`, floored at [`MIN_EPSILON`].
    pub fn next(&self, current: CostValue) -> CostValue {
        (current / self.alpha).max(MIN_EPSILON)
    }
}
