//! Node values of a level-order tree array
//!
//! A slot is either a concrete value or Absent (a missing child).
//! Absent slots are leaves: they never receive children in later levels.

use std::fmt;

/// Value of the fixed root node (always slot 0 of the array)
pub const ROOT_VALUE: i32 = 0;

/// Largest magnitude a present node may carry
pub const VALUE_BOUND: i32 = 100;

/// Extra sampling width on each side; draws landing here become Absent
pub const ABSENT_MARGIN: i32 = 10;

/// One slot of a level-order array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeValue {
    /// Present node carrying an integer value
    Value(i32),

    /// Missing child, rendered as `null`
    Absent,
}

impl NodeValue {
    /// Root node value
    pub fn root() -> Self {
        NodeValue::Value(ROOT_VALUE)
    }

    /// Check if this slot is a missing child
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, NodeValue::Absent)
    }

    /// Present nodes expand into two children on the next level
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.is_absent()
    }

    /// Integer value, if present
    #[inline]
    pub fn value(&self) -> Option<i32> {
        match self {
            NodeValue::Value(v) => Some(*v),
            NodeValue::Absent => None,
        }
    }
}

impl From<Option<i32>> for NodeValue {
    fn from(value: Option<i32>) -> Self {
        value.map_or(NodeValue::Absent, NodeValue::Value)
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeValue::Value(v) => write!(f, "{}", v),
            NodeValue::Absent => f.write_str("null"),
        }
    }
}
