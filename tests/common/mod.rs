//! Shared checks for generated arrays

#![allow(dead_code)]

use treegen::tree::{NodeValue, VALUE_BOUND};

/// Shape of a level-order array as seen by a harness parsing it back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelShape {
    /// Slots per level, root level first
    pub widths: Vec<usize>,

    /// Whether the last level holds fewer slots than its parents own
    pub last_level_truncated: bool,
}

/// Walk the array level by level and check every slot is owned by a parent
///
/// Each present slot owns the next unused pair in the following level;
/// Absent slots own nothing. Only the final level may come up short, and
/// it always holds whole pairs.
pub fn check_level_order(nodes: &[NodeValue]) -> Result<LevelShape, String> {
    match nodes.first() {
        Some(NodeValue::Value(0)) => {}
        other => return Err(format!("root should be 0, got {:?}", other)),
    }

    let mut widths = vec![1];
    let mut level = 0..1;
    let mut last_level_truncated = false;

    while level.end < nodes.len() {
        if last_level_truncated {
            return Err(format!("slots after truncated level ending at {}", level.end));
        }

        let owned = 2 * nodes[level.clone()].iter().filter(|n| !n.is_absent()).count();
        if owned == 0 {
            return Err(format!(
                "level ending at {} has no present nodes but slots follow",
                level.end
            ));
        }

        let available = nodes.len() - level.end;
        let width = owned.min(available);
        if width % 2 != 0 {
            return Err(format!("level starting at {} splits a child pair", level.end));
        }

        last_level_truncated = width < owned;
        widths.push(width);
        level = level.end..level.end + width;
    }

    Ok(LevelShape {
        widths,
        last_level_truncated,
    })
}

/// Check every present value lies in [-VALUE_BOUND, VALUE_BOUND]
pub fn check_value_range(nodes: &[NodeValue]) -> Result<(), String> {
    for (idx, node) in nodes.iter().enumerate() {
        if let NodeValue::Value(v) = node {
            if !(-VALUE_BOUND..=VALUE_BOUND).contains(v) {
                return Err(format!("slot {} holds out-of-range value {}", idx, v));
            }
        }
    }
    Ok(())
}
