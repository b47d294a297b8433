//! The sixteen Myers-Briggs personality-type codes.
//!
//! # Examples
//! ```
//! use unimeet_core::Mbti;
//!
//! assert_eq!(Mbti::Intj.as_str(), "INTJ");
//! assert_eq!("enfp".parse::<Mbti>(), Ok(Mbti::Enfp));
//! ```

/// A personality-type code.
///
/// Variant order is significant: [`Mbti::index`] drives the one-hot
/// position in a [`FeatureVector`](crate::FeatureVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mbti {
    /// Introverted, intuitive, thinking, judging.
    Intj,
    /// Introverted, intuitive, thinking, perceiving.
    Intp,
    /// Extraverted, intuitive, thinking, judging.
    Entj,
    /// Extraverted, intuitive, thinking, perceiving.
    Entp,
    /// Introverted, intuitive, feeling, judging.
    Infj,
    /// Introverted, intuitive, feeling, perceiving.
    Infp,
    /// Extraverted, intuitive, feeling, judging.
    Enfj,
    /// Extraverted, intuitive, feeling, perceiving.
    Enfp,
    /// Introverted, sensing, thinking, judging.
    Istj,
    /// Introverted, sensing, feeling, judging.
    Isfj,
    /// Extraverted, sensing, thinking, judging.
    Estj,
    /// Extraverted, sensing, feeling, judging.
    Esfj,
    /// Introverted, sensing, thinking, perceiving.
    Istp,
    /// Introverted, sensing, feeling, perceiving.
    Isfp,
    /// Extraverted, sensing, thinking, perceiving.
    Estp,
    /// Extraverted, sensing, feeling, perceiving.
    Esfp,
}

impl Mbti {
    /// Every code in one-hot order.
    pub const ALL: [Self; 16] = [
        Self::Intj,
        Self::Intp,
        Self::Entj,
        Self::Entp,
        Self::Infj,
        Self::Infp,
        Self::Enfj,
        Self::Enfp,
        Self::Istj,
        Self::Isfj,
        Self::Estj,
        Self::Esfj,
        Self::Istp,
        Self::Isfp,
        Self::Estp,
        Self::Esfp,
    ];

    /// Position of this code within [`Mbti::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the canonical upper-case code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intj => "INTJ",
            Self::Intp => "INTP",
            Self::Entj => "ENTJ",
            Self::Entp => "ENTP",
            Self::Infj => "INFJ",
            Self::Infp => "INFP",
            Self::Enfj => "ENFJ",
            Self::Enfp => "ENFP",
            Self::Istj => "ISTJ",
            Self::Isfj => "ISFJ",
            Self::Estj => "ESTJ",
            Self::Esfj => "ESFJ",
            Self::Istp => "ISTP",
            Self::Isfp => "ISFP",
            Self::Estp => "ESTP",
            Self::Esfp => "ESFP",
        }
    }
}

impl std::fmt::Display for Mbti {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mbti {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mbti| mbti.as_str() == s)
            .ok_or_else(|| format!("unknown MBTI code '{s}'"))
    }
}
