//! Random node sampler
//!
//! Draw uniformly from [-(bound + margin), bound + margin].
//! In-bound draws are returned as values; the margin maps to Absent
//! instead of being redrawn. With the default range the Absent rate
//! is 20/221.

use rand::Rng;

use super::node::{NodeValue, ABSENT_MARGIN, VALUE_BOUND};
use crate::GenerationError;

/// Anything that can hand out node values one at a time
///
/// Level expansion pulls every child from a `NodeSource`, so tests can
/// script exact child sequences with a closure.
pub trait NodeSource {
    /// Produce the next node value
    fn next_node(&mut self) -> NodeValue;
}

impl<F> NodeSource for F
where
    F: FnMut() -> NodeValue,
{
    fn next_node(&mut self) -> NodeValue {
        self()
    }
}

/// Value range and Absent margin of the sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerRange {
    /// Present values lie in [-value_bound, value_bound]
    pub value_bound: i32,

    /// Width of the Absent band on each side of the value range
    pub absent_margin: i32,
}

impl Default for SamplerRange {
    fn default() -> Self {
        Self {
            value_bound: VALUE_BOUND,
            absent_margin: ABSENT_MARGIN,
        }
    }
}

impl SamplerRange {
    /// Check bounds are non-negative and the sample range fits in i32
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.value_bound < 0 {
            return Err(GenerationError::InvalidRange(format!(
                "value bound {} is negative",
                self.value_bound
            )));
        }
        if self.absent_margin < 0 {
            return Err(GenerationError::InvalidRange(format!(
                "absent margin {} is negative",
                self.absent_margin
            )));
        }
        self.sample_bound().map(|_| ())
    }

    /// Outer bound of the sampled range: value_bound + absent_margin
    pub fn sample_bound(&self) -> Result<i32, GenerationError> {
        self.value_bound
            .checked_add(self.absent_margin)
            .ok_or_else(|| {
                GenerationError::InvalidRange(format!(
                    "value bound {} plus absent margin {} overflows",
                    self.value_bound, self.absent_margin
                ))
            })
    }

    /// Expected fraction of Absent draws: 2·margin / (2·(bound + margin) + 1)
    pub fn absent_probability(&self) -> f64 {
        let bound = self.value_bound as f64;
        let margin = self.absent_margin as f64;
        (2.0 * margin) / (2.0 * (bound + margin) + 1.0)
    }

    #[inline]
    fn classify(&self, draw: i32) -> NodeValue {
        if (-self.value_bound..=self.value_bound).contains(&draw) {
            NodeValue::Value(draw)
        } else {
            NodeValue::Absent
        }
    }
}

/// Biased sampler over an explicit random source
#[derive(Debug)]
pub struct NodeSampler<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    range: SamplerRange,
    sample_bound: i32,
}

impl<'a, R: Rng + ?Sized> NodeSampler<'a, R> {
    /// Sampler with the default [-110, 110] / [-100, 100] range
    pub fn new(rng: &'a mut R) -> Self {
        let range = SamplerRange::default();
        Self {
            rng,
            sample_bound: VALUE_BOUND + ABSENT_MARGIN,
            range,
        }
    }

    /// Sampler with a custom range
    pub fn with_range(rng: &'a mut R, range: SamplerRange) -> Result<Self, GenerationError> {
        range.validate()?;
        let sample_bound = range.sample_bound()?;
        Ok(Self {
            rng,
            range,
            sample_bound,
        })
    }

    /// Active range
    pub fn range(&self) -> SamplerRange {
        self.range
    }

    /// Draw one node value
    pub fn sample(&mut self) -> NodeValue {
        let draw = self.rng.gen_range(-self.sample_bound..=self.sample_bound);
        self.range.classify(draw)
    }
}

impl<R: Rng + ?Sized> NodeSource for NodeSampler<'_, R> {
    fn next_node(&mut self) -> NodeValue {
        self.sample()
    }
}

/// Draw a single node value with the default range
pub fn random_node<R: Rng + ?Sized>(rng: &mut R) -> NodeValue {
    NodeSampler::new(rng).sample()
}
