//! User profiles: the attributes a compatibility score is computed from.
//!
//! Every attribute except the identifier is optional. An absent value is an
//! unknown signal that scorers treat neutrally, never as zero.

use std::collections::BTreeSet;

use crate::{DepartmentCategory, Mbti};

/// Gender codes recognised by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Code `M`.
    Male,
    /// Code `F`.
    Female,
}

impl Gender {
    /// Return the single-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            _ => Err(format!("unknown gender code '{s}'")),
        }
    }
}

/// A user's matching profile.
///
/// Tag sets are ordered so iteration, and therefore encoding, is
/// deterministic. Duplicate tags collapse on insertion.
///
/// # Examples
/// ```
/// use unimeet_core::{Mbti, UserProfile};
///
/// let profile = UserProfile::new("u-1")
///     .with_mbti(Mbti::Intj)
///     .with_interests(["독서", "운동", "독서"])
///     .with_birth_year(2000);
/// assert_eq!(profile.interests.len(), 2);
/// assert!(profile.height_cm.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "record::UserProfileRecord", into = "record::UserProfileRecord")
)]
pub struct UserProfile {
    /// Opaque identifier.
    pub user_id: String,
    /// Personality-type code.
    pub mbti: Option<Mbti>,
    /// Free-form interest tags.
    pub interests: BTreeSet<String>,
    /// Free-form personality keywords.
    pub personality_keywords: BTreeSet<String>,
    /// Department name as entered by the user.
    pub department: Option<String>,
    /// Year of birth.
    pub birth_year: Option<i32>,
    /// Height in centimetres.
    pub height_cm: Option<u16>,
    /// Gender code.
    pub gender: Option<Gender>,
}

impl UserProfile {
    /// Construct a profile with every attribute unknown.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Set the personality type.
    #[must_use]
    pub fn with_mbti(mut self, mbti: Mbti) -> Self {
        self.mbti = Some(mbti);
        self
    }

    /// Add interest tags.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests.extend(interests.into_iter().map(Into::into));
        self
    }

    /// Add personality keywords.
    #[must_use]
    pub fn with_personality_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.personality_keywords
            .extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Set the department name.
    ///
    /// Blank names leave the department unknown.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        let name = department.into();
        self.department = (!name.trim().is_empty()).then_some(name);
        self
    }

    /// Set the birth year.
    #[must_use]
    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    /// Set the height in centimetres.
    #[must_use]
    pub fn with_height_cm(mut self, height: u16) -> Self {
        self.height_cm = Some(height);
        self
    }

    /// Set the gender.
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Resolve the department to its broad category, if known.
    #[must_use]
    pub fn department_category(&self) -> Option<DepartmentCategory> {
        self.department
            .as_deref()
            .and_then(DepartmentCategory::for_department)
    }
}

#[cfg(feature = "serde")]
mod record {
    //! Wire shape used by the matching service.
    //!
    //! Parsing is lenient: unrecognised codes, blank departments and zero
    //! years or heights become unknown instead of failing the whole request.

    use std::collections::BTreeSet;
    use std::str::FromStr;

    use log::debug;
    use serde::{Deserialize, Serialize};

    use super::UserProfile;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub(super) struct UserProfileRecord {
        user_id: String,
        #[serde(default)]
        mbti: Option<String>,
        #[serde(default)]
        interests: Vec<String>,
        #[serde(default)]
        personality_keywords: Vec<String>,
        #[serde(default)]
        department: Option<String>,
        #[serde(default)]
        birth_year: Option<i64>,
        #[serde(default)]
        height: Option<i64>,
        #[serde(default)]
        gender: Option<String>,
    }

    fn parse_code<T>(user_id: &str, field: &str, raw: Option<String>) -> Option<T>
    where
        T: FromStr<Err = String>,
    {
        let value = raw?;
        if value.trim().is_empty() {
            return None;
        }
        match value.parse() {
            Ok(parsed) => Some(parsed),
            Err(reason) => {
                debug!("profile {user_id}: ignoring {field}: {reason}");
                None
            }
        }
    }

    fn parse_number<T>(user_id: &str, field: &str, raw: Option<i64>) -> Option<T>
    where
        T: TryFrom<i64>,
    {
        let value = raw.filter(|&value| value != 0)?;
        T::try_from(value).map_or_else(
            |_| {
                debug!("profile {user_id}: ignoring out-of-range {field} {value}");
                None
            },
            Some,
        )
    }

    impl From<UserProfileRecord> for UserProfile {
        fn from(record: UserProfileRecord) -> Self {
            let user_id = record.user_id;
            let mbti = parse_code(&user_id, "mbti", record.mbti);
            let gender = parse_code(&user_id, "gender", record.gender);
            let birth_year = parse_number(&user_id, "birth_year", record.birth_year);
            let height_cm = parse_number(&user_id, "height", record.height);
            let department = record
                .department
                .filter(|name| !name.trim().is_empty());
            Self {
                mbti,
                interests: record.interests.into_iter().collect(),
                personality_keywords: record.personality_keywords.into_iter().collect(),
                department,
                birth_year,
                height_cm,
                gender,
                user_id,
            }
        }
    }

    impl From<UserProfile> for UserProfileRecord {
        fn from(profile: UserProfile) -> Self {
            Self {
                user_id: profile.user_id,
                mbti: profile.mbti.map(|mbti| mbti.as_str().to_owned()),
                interests: into_vec(profile.interests),
                personality_keywords: into_vec(profile.personality_keywords),
                department: profile.department,
                birth_year: profile.birth_year.map(i64::from),
                height: profile.height_cm.map(i64::from),
                gender: profile.gender.map(|gender| gender.as_str().to_owned()),
            }
        }
    }

    fn into_vec(tags: BTreeSet<String>) -> Vec<String> {
        tags.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn builder_collapses_duplicate_tags() {
        let profile = UserProfile::new("u")
            .with_interests(["음악", "음악", "여행"])
            .with_personality_keywords(["차분한", "차분한"]);
        assert_eq!(profile.interests.len(), 2);
        assert_eq!(profile.personality_keywords.len(), 1);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_department_is_unknown(#[case] name: &str) {
        let profile = UserProfile::new("u").with_department(name);
        assert!(profile.department.is_none());
        assert!(profile.department_category().is_none());
    }

    #[rstest]
    fn department_category_resolves_through_lookup() {
        let profile = UserProfile::new("u").with_department("의학과");
        assert_eq!(
            profile.department_category(),
            Some(DepartmentCategory::Medical)
        );
    }

    #[rstest]
    #[case("M", Ok(Gender::Male))]
    #[case("F", Ok(Gender::Female))]
    #[case("m", Err("unknown gender code 'm'".to_owned()))]
    fn gender_parses_codes(#[case] raw: &str, #[case] expected: Result<Gender, String>) {
        assert_eq!(raw.parse::<Gender>(), expected);
    }

    #[test]
    fn gender_rejects_unknown_codes() {
        assert!("X".parse::<Gender>().is_err());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_service_payload() {
        let json = r#"{
            "user_id": "u-7",
            "mbti": "ENFP",
            "interests": ["독서", "여행", "독서"],
            "personality_keywords": ["활발한"],
            "department": "경제학과",
            "birth_year": 2001,
            "height": 168,
            "gender": "F"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).expect("valid profile");
        assert_eq!(profile.user_id, "u-7");
        assert_eq!(profile.mbti, Some(Mbti::Enfp));
        assert_eq!(profile.interests.len(), 2);
        assert_eq!(profile.department_category(), Some(DepartmentCategory::Social));
        assert_eq!(profile.birth_year, Some(2001));
        assert_eq!(profile.height_cm, Some(168));
        assert_eq!(profile.gender, Some(Gender::Female));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn lenient_fields_become_unknown() {
        let json = r#"{
            "user_id": "u-8",
            "mbti": "ABCD",
            "department": "",
            "birth_year": 0,
            "height": 70000,
            "gender": "X"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).expect("valid profile");
        assert_eq!(profile, UserProfile::new("u-8"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_to_service_field_names() {
        let profile = UserProfile::new("u-9")
            .with_mbti(Mbti::Istj)
            .with_height_cm(180)
            .with_gender(Gender::Male);
        let value = serde_json::to_value(&profile).expect("serialise profile");
        assert_eq!(value["mbti"], "ISTJ");
        assert_eq!(value["height"], 180);
        assert_eq!(value["gender"], "M");
    }
}
