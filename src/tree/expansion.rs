//! Level expansion
//!
//! Grows a level-order array one level at a time. The frontier is the
//! slice appended by the previous level; each present frontier node
//! appends a (left, right) pair, Absent nodes append nothing.
//!
//! Expansion stops as soon as the array reaches the limit, even halfway
//! through a level, so the overshoot is at most one slot.
//!
//! The frontier is tracked as an index range into the array, so depth
//! costs no stack.

use std::ops::Range;

use tracing::trace;

use super::node::NodeValue;
use super::sampler::NodeSource;
use crate::GenerationError;

/// Summary of one expansion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionReport {
    /// Levels that received at least one child pair
    pub levels: usize,

    /// Whether the final level was cut off before its frontier was consumed
    pub truncated: bool,
}

/// Append levels to `array` until `array.len() >= limit`
///
/// The initial frontier is `array[frontier_start..]`. Returns
/// `FrontierExhausted` if a level produces no children while the array
/// is still short of the limit.
pub fn expand_levels<S>(
    array: &mut Vec<NodeValue>,
    frontier_start: usize,
    limit: usize,
    source: &mut S,
) -> Result<ExpansionReport, GenerationError>
where
    S: NodeSource + ?Sized,
{
    let mut frontier: Range<usize> = frontier_start..array.len();
    let mut levels = 0;

    loop {
        let before = array.len();
        if before >= limit {
            return Ok(ExpansionReport {
                levels,
                truncated: false,
            });
        }

        let mut remaining = limit - before;
        let mut pending = frontier.clone();
        while let Some(idx) = pending.next() {
            let node = array[idx];
            if !node.has_children() {
                continue;
            }

            let left = source.next_node();
            let right = source.next_node();
            array.push(left);
            array.push(right);

            remaining = remaining.saturating_sub(2);
            if remaining == 0 {
                trace!(level = levels, len = array.len(), "limit reached mid-level");
                return Ok(ExpansionReport {
                    levels: levels + 1,
                    truncated: pending.any(|i| array[i].has_children()),
                });
            }
        }

        let after = array.len();
        if after == before {
            return Err(GenerationError::FrontierExhausted { len: after, limit });
        }

        trace!(level = levels, width = after - before, "level expanded");
        levels += 1;
        frontier = before..after;
    }
}
