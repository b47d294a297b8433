//! Relative importance of each scored dimension.
#![forbid(unsafe_code)]

use thiserror::Error;
use unimeet_core::{Dimension, ScoreBreakdown};

/// Errors raised when a weight table is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A weight was NaN, infinite, or negative.
    #[error("weight for {dimension} must be finite and non-negative")]
    InvalidWeight {
        /// Offending dimension key.
        dimension: &'static str,
    },
    /// The applied weights sum to zero, so no aggregate can be formed.
    #[error("applied weights must sum to a positive value")]
    ZeroTotal,
}

/// Weight table for the rule-based aggregate.
///
/// `gender` is reserved: it is carried in the table but no gender dimension
/// is scored, so it never contributes. The aggregate divides by the sum of
/// the six applied weights, which makes the weights actually used sum to 1
/// and keeps `total` inside `0.0..=1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DimensionWeights {
    /// Personality-type weight.
    pub mbti: f32,
    /// Interest-overlap weight.
    pub interests: f32,
    /// Personality-keyword weight.
    pub personality: f32,
    /// Department weight.
    pub department: f32,
    /// Age weight.
    pub age: f32,
    /// Height weight.
    pub height: f32,
    /// Reserved gender weight; never applied.
    pub gender: f32,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            mbti: 0.25_f32,
            interests: 0.20_f32,
            personality: 0.20_f32,
            department: 0.15_f32,
            age: 0.10_f32,
            height: 0.05_f32,
            gender: 0.05_f32,
        }
    }
}

impl DimensionWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::InvalidWeight`] when any weight, the reserved
    /// gender weight included, is not finite or is negative, and
    /// [`WeightsError::ZeroTotal`] when the applied weights sum to zero.
    pub fn validate(self) -> Result<Self, WeightsError> {
        let reserved = std::iter::once(("gender", self.gender));
        let applied = Dimension::ALL
            .into_iter()
            .map(|dimension| (dimension.as_str(), self.weight(dimension)));
        if let Some((dimension, _)) = applied
            .chain(reserved)
            .find(|&(_, weight)| !weight.is_finite() || weight < 0.0_f32)
        {
            return Err(WeightsError::InvalidWeight { dimension });
        }
        if self.applied_total() <= 0.0_f32 {
            return Err(WeightsError::ZeroTotal);
        }
        Ok(self)
    }

    /// Return the weight applied to a dimension.
    #[must_use]
    pub const fn weight(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Mbti => self.mbti,
            Dimension::Interests => self.interests,
            Dimension::Personality => self.personality,
            Dimension::Department => self.department,
            Dimension::Age => self.age,
            Dimension::Height => self.height,
        }
    }

    /// Sum of the weights that contribute to the aggregate.
    #[must_use]
    pub fn applied_total(&self) -> f32 {
        Dimension::ALL
            .into_iter()
            .map(|dimension| self.weight(dimension))
            .sum()
    }

    /// Weighted mean of the breakdown's dimensions.
    ///
    /// Returns `0.0` when the applied weights sum to zero; validated tables
    /// never do.
    #[expect(
        clippy::float_arithmetic,
        reason = "the aggregate is a weighted average of dimension scores"
    )]
    #[must_use]
    pub fn combine(&self, breakdown: &ScoreBreakdown) -> f32 {
        let total_weight = self.applied_total();
        if total_weight <= 0.0_f32 {
            return 0.0_f32;
        }
        let weighted: f32 = breakdown
            .dimensions()
            .map(|(dimension, score)| score * self.weight(dimension))
            .sum();
        weighted / total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        assert!(DimensionWeights::default().validate().is_ok());
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn reserved_gender_weight_is_not_applied() {
        let weights = DimensionWeights::default();
        assert!((weights.applied_total() - 0.95_f32).abs() < 1e-6);
    }

    #[rstest]
    fn zero_applied_total_is_rejected() {
        let weights = DimensionWeights {
            mbti: 0.0,
            interests: 0.0,
            personality: 0.0,
            department: 0.0,
            age: 0.0,
            height: 0.0,
            gender: 1.0,
        };
        assert_eq!(weights.validate(), Err(WeightsError::ZeroTotal));
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    #[case(-0.1)]
    fn invalid_weights_are_rejected(#[case] bad: f32) {
        let weights = DimensionWeights {
            age: bad,
            ..DimensionWeights::default()
        };
        assert_eq!(
            weights.validate(),
            Err(WeightsError::InvalidWeight { dimension: "age" })
        );
    }

    #[rstest]
    fn invalid_reserved_weight_is_rejected() {
        let weights = DimensionWeights {
            gender: f32::NAN,
            ..DimensionWeights::default()
        };
        assert_eq!(
            weights.validate(),
            Err(WeightsError::InvalidWeight { dimension: "gender" })
        );
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn uniform_scores_combine_to_the_same_value() {
        let combined = DimensionWeights::default().combine(&ScoreBreakdown::neutral());
        assert!((combined - 0.5_f32).abs() < 1e-6);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn single_weight_selects_that_dimension() {
        let weights = DimensionWeights {
            mbti: 0.0,
            interests: 0.0,
            personality: 0.0,
            department: 1.0,
            age: 0.0,
            height: 0.0,
            gender: 0.0,
        };
        let breakdown = ScoreBreakdown {
            department: 0.8,
            ..ScoreBreakdown::neutral()
        };
        assert!((weights.combine(&breakdown) - 0.8_f32).abs() < 1e-6);
    }
}
