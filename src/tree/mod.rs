//! Level-order tree arrays
//!
//! A tree is never materialized as linked nodes. It exists only as the
//! flat breadth-first array that downstream harnesses parse back into a
//! tree: slot 0 is the root, and every present slot owns the next unused
//! pair of slots in the following level.

mod expansion;
mod node;
mod sampler;

pub use expansion::{expand_levels, ExpansionReport};
pub use node::{NodeValue, ABSENT_MARGIN, ROOT_VALUE, VALUE_BOUND};
pub use sampler::{random_node, NodeSampler, NodeSource, SamplerRange};

use std::ops::Deref;

use rand::Rng;

use crate::{GenerationError, MAX_LIMIT};

/// Finalized level-order array
///
/// Read-only once built; always starts with the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeArray {
    nodes: Vec<NodeValue>,
}

impl TreeArray {
    /// Build a single tree from `source`, growing it to at least `limit` slots
    ///
    /// Limits of 0 or 1 yield the root alone. Limits above
    /// [`crate::MAX_LIMIT`] are rejected before anything is allocated.
    pub fn build<S>(
        limit: usize,
        source: &mut S,
    ) -> Result<(Self, ExpansionReport), GenerationError>
    where
        S: NodeSource + ?Sized,
    {
        if limit > MAX_LIMIT {
            return Err(GenerationError::LimitTooLarge {
                limit,
                max: MAX_LIMIT,
            });
        }

        let mut nodes = Vec::with_capacity(limit.max(1).saturating_add(1));
        nodes.push(NodeValue::root());
        let report = expand_levels(&mut nodes, 0, limit, source)?;
        Ok((Self { nodes }, report))
    }

    /// Node values in level order
    pub fn as_slice(&self) -> &[NodeValue] {
        &self.nodes
    }

    /// Number of present (non-Absent) nodes
    pub fn present_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_absent()).count()
    }

    /// Number of Absent slots
    pub fn absent_count(&self) -> usize {
        self.nodes.len() - self.present_count()
    }

    /// Hand the raw values to the caller
    pub fn into_vec(self) -> Vec<NodeValue> {
        self.nodes
    }
}

impl Deref for TreeArray {
    type Target = [NodeValue];

    fn deref(&self) -> &Self::Target {
        &self.nodes
    }
}

impl<'a> IntoIterator for &'a TreeArray {
    type Item = &'a NodeValue;
    type IntoIter = std::slice::Iter<'a, NodeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Generate one tree array of at least `limit` slots with the default sampler
///
/// Fails with `FrontierExhausted` if every branch dies out early. Both
/// children of the root come up `null` with probability (20/221)², so
/// roughly 0.8% of calls fail at the default range. Use
/// [`crate::TreeGenerator`] for automatic retries.
pub fn generate_tree_array<R: Rng + ?Sized>(
    limit: usize,
    rng: &mut R,
) -> Result<TreeArray, GenerationError> {
    let mut sampler = NodeSampler::new(rng);
    TreeArray::build(limit, &mut sampler).map(|(array, _)| array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_small_limits_yield_root_only() {
        let mut rng = StdRng::seed_from_u64(1);
        for limit in [0, 1] {
            let array = generate_tree_array(limit, &mut rng).expect("root-only tree");
            assert_eq!(array.as_slice(), &[NodeValue::root()]);
        }
    }

    #[test]
    fn test_root_always_first() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut source = NodeSampler::new(&mut rng);
        let (array, report) = TreeArray::build(2, &mut source).expect("first level always expands");
        assert_eq!(array[0], NodeValue::root());
        assert_eq!(array.len(), 3);
        assert_eq!(report.levels, 1);
    }

    #[test]
    fn test_oversized_limit_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        for limit in [MAX_LIMIT + 1, 1 << 40, usize::MAX] {
            let err = generate_tree_array(limit, &mut rng).unwrap_err();
            assert_eq!(
                err,
                GenerationError::LimitTooLarge {
                    limit,
                    max: MAX_LIMIT
                }
            );
        }
    }

    #[test]
    fn test_into_vec_keeps_level_order() {
        let mut source = || NodeValue::Value(7);
        let (array, _) = TreeArray::build(3, &mut source).expect("build succeeds");
        assert_eq!(
            array.into_vec(),
            vec![NodeValue::root(), NodeValue::Value(7), NodeValue::Value(7)]
        );
    }

    #[test]
    fn test_counts_add_up() {
        let mut source = {
            let mut flip = false;
            move || {
                flip = !flip;
                if flip {
                    NodeValue::Value(1)
                } else {
                    NodeValue::Absent
                }
            }
        };
        let (array, _) = TreeArray::build(6, &mut source).expect("chain keeps growing");
        assert_eq!(array.len(), 7);
        assert_eq!(array.present_count() + array.absent_count(), array.len());
        assert_eq!(array.absent_count(), 3);
    }
}
