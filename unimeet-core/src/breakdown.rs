//! Score breakdowns and the results built from them.

/// A scored attribute of a profile pair.
///
/// Serialised names match the keys of a [`ScoreBreakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// Personality-type compatibility.
    Mbti,
    /// Overlap of interest tags.
    Interests,
    /// Overlap of personality keywords.
    Personality,
    /// Department affinity.
    Department,
    /// Closeness in age.
    Age,
    /// Closeness in height.
    Height,
}

impl Dimension {
    /// Every scored dimension, in breakdown order.
    pub const ALL: [Self; 6] = [
        Self::Mbti,
        Self::Interests,
        Self::Personality,
        Self::Department,
        Self::Age,
        Self::Height,
    ];

    /// Return the breakdown key for this dimension.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mbti => "mbti",
            Self::Interests => "interests",
            Self::Personality => "personality",
            Self::Department => "department",
            Self::Age => "age",
            Self::Height => "height",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == s)
            .ok_or_else(|| format!("unknown score dimension '{s}'"))
    }
}

/// Per-dimension scores for a profile pair plus the aggregates.
///
/// `total` is the rule-based weighted aggregate and is always present.
/// `ai_total` holds the learned model's probability when one was produced;
/// it is reported alongside `total`, never blended into it.
///
/// # Examples
/// ```
/// use unimeet_core::{Dimension, ScoreBreakdown};
///
/// let breakdown = ScoreBreakdown::neutral();
/// assert_eq!(breakdown.get(Dimension::Age), 0.5);
/// assert_eq!(breakdown.total, 0.5);
///
/// let learned = breakdown.with_ai_total(0.9);
/// assert_eq!(learned.ai_total, Some(0.9));
/// assert_eq!(learned.total, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Personality-type score.
    pub mbti: f32,
    /// Interest-overlap score.
    pub interests: f32,
    /// Personality-keyword score.
    pub personality: f32,
    /// Department score.
    pub department: f32,
    /// Age score.
    pub age: f32,
    /// Height score.
    pub height: f32,
    /// Rule-based weighted aggregate.
    pub total: f32,
    /// Learned-model probability, when the model ran.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub ai_total: Option<f32>,
}

impl ScoreBreakdown {
    /// Breakdown for a pair with nothing known about either side.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            mbti: 0.5,
            interests: 0.5,
            personality: 0.5,
            department: 0.5,
            age: 0.5,
            height: 0.5,
            total: 0.5,
            ai_total: None,
        }
    }

    /// Return the score for one dimension.
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Mbti => self.mbti,
            Dimension::Interests => self.interests,
            Dimension::Personality => self.personality,
            Dimension::Department => self.department,
            Dimension::Age => self.age,
            Dimension::Height => self.height,
        }
    }

    /// Iterate over `(dimension, score)` pairs in breakdown order.
    pub fn dimensions(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    /// Attach a learned-model probability.
    #[must_use]
    pub const fn with_ai_total(mut self, probability: f32) -> Self {
        self.ai_total = Some(probability);
        self
    }
}

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// Candidate identifier.
    pub user_id: String,
    /// Rule-based total used for ranking.
    pub compatibility_score: f32,
    /// Full breakdown behind the aggregate.
    pub detailed_scores: ScoreBreakdown,
}

impl MatchResult {
    /// Wrap a breakdown, taking its rule-based total as the ranking score.
    ///
    /// Any learned probability stays in `detailed_scores`.
    #[must_use]
    pub fn new(user_id: impl Into<String>, breakdown: ScoreBreakdown) -> Self {
        Self {
            user_id: user_id.into(),
            compatibility_score: breakdown.total,
            detailed_scores: breakdown,
        }
    }
}

/// Compatibility between two named profiles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompatibilityReport {
    /// First profile's identifier.
    pub user1_id: String,
    /// Second profile's identifier.
    pub user2_id: String,
    /// Rule-based total.
    pub compatibility_score: f32,
    /// Full breakdown behind the aggregate.
    pub detailed_scores: ScoreBreakdown,
}

impl CompatibilityReport {
    /// Build a report from a breakdown.
    #[must_use]
    pub fn new(
        user1_id: impl Into<String>,
        user2_id: impl Into<String>,
        breakdown: ScoreBreakdown,
    ) -> Self {
        Self {
            user1_id: user1_id.into(),
            user2_id: user2_id.into(),
            compatibility_score: breakdown.total,
            detailed_scores: breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn dimension_keys_round_trip() {
        for dimension in Dimension::ALL {
            assert_eq!(Dimension::from_str(dimension.as_str()), Ok(dimension));
        }
        assert!(Dimension::from_str("gender").is_err());
    }

    #[rstest]
    fn dimensions_follow_breakdown_order() {
        let breakdown = ScoreBreakdown {
            mbti: 0.9,
            interests: 0.3,
            personality: 0.4,
            department: 1.0,
            age: 0.7,
            height: 0.6,
            total: 0.0,
            ai_total: None,
        };
        let keys: Vec<&str> = breakdown.dimensions().map(|(d, _)| d.as_str()).collect();
        assert_eq!(
            keys,
            ["mbti", "interests", "personality", "department", "age", "height"]
        );
        assert_eq!(breakdown.get(Dimension::Department), 1.0);
    }

    #[rstest]
    fn match_result_uses_rule_total_without_model() {
        let result = MatchResult::new("c", ScoreBreakdown::neutral());
        assert_eq!(result.compatibility_score, 0.5);
    }

    #[rstest]
    fn match_result_ranks_on_total_with_model() {
        let result = MatchResult::new("c", ScoreBreakdown::neutral().with_ai_total(0.25));
        assert_eq!(result.compatibility_score, 0.5);
        assert_eq!(result.detailed_scores.ai_total, Some(0.25));
    }

    #[rstest]
    fn report_keeps_learned_probability_in_detail() {
        let report =
            CompatibilityReport::new("a", "b", ScoreBreakdown::neutral().with_ai_total(0.9));
        assert_eq!(report.compatibility_score, 0.5);
        assert_eq!(report.detailed_scores.ai_total, Some(0.9));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn breakdown_serialises_as_flat_map() {
        let value = serde_json::to_value(ScoreBreakdown::neutral()).expect("serialise");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 7);
        assert!(object.contains_key("total"));
        assert!(!object.contains_key("ai_total"));

        let learned = serde_json::to_value(ScoreBreakdown::neutral().with_ai_total(0.75))
            .expect("serialise");
        assert_eq!(learned["ai_total"], 0.75);
    }
}
