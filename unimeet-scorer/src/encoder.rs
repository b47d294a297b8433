//! Encode profiles into fixed-width feature vectors.
//!
//! Regions are laid out in a fixed order. Each region stays zero when its
//! source attribute is unknown or falls outside the known vocabulary:
//!
//! | Region                | Width | Offset |
//! |-----------------------|-------|--------|
//! | personality type      | 16    | 0      |
//! | interests             | 10    | 16     |
//! | personality keywords  | 10    | 26     |
//! | department category   | 8     | 36     |
//! | age                   | 1     | 44     |
//! | height                | 1     | 45     |
//! | gender                | 2     | 46     |
//! | padding               | 2     | 48     |
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use log::warn;
use unimeet_core::{
    DepartmentCategory, FEATURE_DIM, FeatureError, FeatureVector, Gender, Mbti, UserProfile,
};

/// Interest tags with a dedicated feature slot.
pub const INTEREST_VOCABULARY: [&str; 10] = [
    "독서", "영화감상", "운동", "음악", "여행", "게임", "요리", "사진", "춤", "그림",
];

/// Personality keywords with a dedicated feature slot.
pub const PERSONALITY_VOCABULARY: [&str; 10] = [
    "외향적", "내향적", "논리적", "감정적", "계획적", "즉흥적", "활발한", "차분한", "창의적", "현실적",
];

/// Year ages are measured against.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2024;

const MBTI_OFFSET: usize = 0;
const INTEREST_OFFSET: usize = MBTI_OFFSET + Mbti::ALL.len();
const PERSONALITY_OFFSET: usize = INTEREST_OFFSET + INTEREST_VOCABULARY.len();
const DEPARTMENT_OFFSET: usize = PERSONALITY_OFFSET + PERSONALITY_VOCABULARY.len();
const AGE_OFFSET: usize = DEPARTMENT_OFFSET + DepartmentCategory::ALL.len();
const HEIGHT_OFFSET: usize = AGE_OFFSET + 1;
const GENDER_OFFSET: usize = HEIGHT_OFFSET + 1;
/// Number of positions carrying signal; the rest of the vector is padding.
pub const ENCODED_WIDTH: usize = GENDER_OFFSET + 2;

const _: () = assert!(ENCODED_WIDTH <= FEATURE_DIM);

const MIN_AGE: i64 = 18;
const MAX_AGE: i64 = 28;
const MIN_HEIGHT_CM: u16 = 150;
const MAX_HEIGHT_CM: u16 = 200;

/// Turns a [`UserProfile`] into a [`FeatureVector`].
///
/// Encoding is a pure function of the profile and the reference year.
///
/// # Examples
/// ```
/// use unimeet_core::{Mbti, UserProfile};
/// use unimeet_scorer::FeatureEncoder;
///
/// let encoder = FeatureEncoder::default();
/// let vector = encoder.encode(&UserProfile::new("u").with_mbti(Mbti::Intp));
/// assert_eq!(vector.get(1), Some(1.0));
/// assert!(encoder.encode(&UserProfile::new("blank")).is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEncoder {
    reference_year: i32,
}

impl Default for FeatureEncoder {
    fn default() -> Self {
        Self::with_reference_year(DEFAULT_REFERENCE_YEAR)
    }
}

impl FeatureEncoder {
    /// Construct an encoder measuring ages against `reference_year`.
    #[must_use]
    pub const fn with_reference_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Year ages are measured against.
    #[must_use]
    pub const fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Encode a profile.
    ///
    /// Never fails: if any component cannot be written the whole vector is
    /// discarded and the all-zero vector returned.
    #[must_use]
    pub fn encode(&self, profile: &UserProfile) -> FeatureVector {
        self.try_encode(profile).unwrap_or_else(|err| {
            warn!(
                "failed to encode profile {}: {err}; using zero vector",
                profile.user_id
            );
            FeatureVector::zeros()
        })
    }

    fn try_encode(&self, profile: &UserProfile) -> Result<FeatureVector, FeatureError> {
        let mut vector = FeatureVector::zeros();

        if let Some(mbti) = profile.mbti {
            vector.set(MBTI_OFFSET + mbti.index(), 1.0)?;
        }
        encode_vocabulary(
            &mut vector,
            INTEREST_OFFSET,
            &INTEREST_VOCABULARY,
            &profile.interests,
        )?;
        encode_vocabulary(
            &mut vector,
            PERSONALITY_OFFSET,
            &PERSONALITY_VOCABULARY,
            &profile.personality_keywords,
        )?;
        if let Some(category) = profile.department_category() {
            vector.set(DEPARTMENT_OFFSET + category.index(), 1.0)?;
        }
        if let Some(year) = profile.birth_year {
            vector.set(AGE_OFFSET, self.normalised_age(year))?;
        }
        if let Some(height) = profile.height_cm {
            vector.set(HEIGHT_OFFSET, normalised_height(height))?;
        }
        match profile.gender {
            Some(Gender::Male) => vector.set(GENDER_OFFSET, 1.0)?,
            Some(Gender::Female) => vector.set(GENDER_OFFSET + 1, 1.0)?,
            None => {}
        }

        Ok(vector)
    }

    /// Map the age in `reference_year` onto `0.0..=1.0` across 18 to 28.
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation divides by the width of the age band"
    )]
    fn normalised_age(&self, birth_year: i32) -> f32 {
        let age = i64::from(self.reference_year) - i64::from(birth_year);
        let offset = age.clamp(MIN_AGE, MAX_AGE) - MIN_AGE;
        let band = MAX_AGE - MIN_AGE;
        match (u8::try_from(offset), u8::try_from(band)) {
            (Ok(offset), Ok(band)) => f32::from(offset) / f32::from(band),
            _ => 0.0,
        }
    }
}

fn encode_vocabulary(
    vector: &mut FeatureVector,
    offset: usize,
    vocabulary: &[&str],
    tags: &BTreeSet<String>,
) -> Result<(), FeatureError> {
    for (position, known) in vocabulary.iter().enumerate() {
        if tags.contains(*known) {
            vector.set(offset + position, 1.0)?;
        }
    }
    Ok(())
}

/// Map a height onto `0.0..=1.0` across 150 cm to 200 cm.
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation divides by the width of the height band"
)]
fn normalised_height(height_cm: u16) -> f32 {
    let offset = height_cm.clamp(MIN_HEIGHT_CM, MAX_HEIGHT_CM) - MIN_HEIGHT_CM;
    f32::from(offset) / f32::from(MAX_HEIGHT_CM - MIN_HEIGHT_CM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const TOLERANCE: f32 = 1e-6;

    #[fixture]
    fn encoder() -> FeatureEncoder {
        FeatureEncoder::default()
    }

    fn ones(vector: &FeatureVector) -> Vec<usize> {
        vector
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == 1.0)
            .map(|(index, _)| index)
            .collect()
    }

    #[rstest]
    fn layout_leaves_two_padding_slots() {
        assert_eq!(ENCODED_WIDTH, 48);
        assert_eq!(FEATURE_DIM - ENCODED_WIDTH, 2);
    }

    #[rstest]
    fn blank_profile_encodes_to_zero(encoder: FeatureEncoder) {
        assert!(encoder.encode(&UserProfile::new("blank")).is_zero());
    }

    #[rstest]
    #[case(Mbti::Intj, 0)]
    #[case(Mbti::Enfp, 7)]
    #[case(Mbti::Esfp, 15)]
    fn mbti_sets_one_slot(encoder: FeatureEncoder, #[case] mbti: Mbti, #[case] slot: usize) {
        let vector = encoder.encode(&UserProfile::new("u").with_mbti(mbti));
        assert_eq!(ones(&vector), vec![slot]);
    }

    #[rstest]
    fn unknown_tags_are_ignored(encoder: FeatureEncoder) {
        let profile = UserProfile::new("u")
            .with_interests(["독서", "스카이다이빙", "그림"])
            .with_personality_keywords(["현실적", "엉뚱한"]);
        let vector = encoder.encode(&profile);
        assert_eq!(ones(&vector), vec![16, 25, 35]);
    }

    #[rstest]
    #[case("컴퓨터공학과", Some(36))]
    #[case("간호학과", Some(41))]
    #[case("천문학과", None)]
    fn department_region(
        encoder: FeatureEncoder,
        #[case] department: &str,
        #[case] slot: Option<usize>,
    ) {
        let vector = encoder.encode(&UserProfile::new("u").with_department(department));
        assert_eq!(ones(&vector), slot.into_iter().collect::<Vec<_>>());
    }

    #[rstest]
    #[case(2006, 0.0)]
    #[case(2010, 0.0)]
    #[case(2001, 0.5)]
    #[case(1996, 1.0)]
    #[case(1980, 1.0)]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn age_is_clamped_to_band(encoder: FeatureEncoder, #[case] year: i32, #[case] expected: f32) {
        let vector = encoder.encode(&UserProfile::new("u").with_birth_year(year));
        let age = vector.get(AGE_OFFSET).expect("age slot");
        assert!((age - expected).abs() < TOLERANCE, "age {age} != {expected}");
    }

    #[rstest]
    #[case(140, 0.0)]
    #[case(150, 0.0)]
    #[case(175, 0.5)]
    #[case(200, 1.0)]
    #[case(230, 1.0)]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn height_is_clamped_to_band(
        encoder: FeatureEncoder,
        #[case] height: u16,
        #[case] expected: f32,
    ) {
        let vector = encoder.encode(&UserProfile::new("u").with_height_cm(height));
        let value = vector.get(HEIGHT_OFFSET).expect("height slot");
        assert!((value - expected).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(Gender::Male, 46)]
    #[case(Gender::Female, 47)]
    fn gender_sets_one_slot(encoder: FeatureEncoder, #[case] gender: Gender, #[case] slot: usize) {
        let vector = encoder.encode(&UserProfile::new("u").with_gender(gender));
        assert_eq!(ones(&vector), vec![slot]);
    }

    #[rstest]
    fn extreme_birth_years_do_not_overflow() {
        let encoder = FeatureEncoder::with_reference_year(i32::MAX);
        let vector = encoder.encode(&UserProfile::new("u").with_birth_year(i32::MIN));
        assert_eq!(vector.get(AGE_OFFSET), Some(1.0));
    }

    #[rstest]
    fn padding_is_always_zero(encoder: FeatureEncoder) {
        let profile = UserProfile::new("u")
            .with_mbti(Mbti::Esfp)
            .with_interests(INTEREST_VOCABULARY)
            .with_personality_keywords(PERSONALITY_VOCABULARY)
            .with_department("약학과")
            .with_birth_year(1990)
            .with_height_cm(210)
            .with_gender(Gender::Female);
        let vector = encoder.encode(&profile);
        assert!(
            vector.as_slice()[ENCODED_WIDTH..]
                .iter()
                .all(|&value| value == 0.0)
        );
    }
}
