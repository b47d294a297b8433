//! Broad academic categories and the department lookup that feeds them.
//!
//! Department names are free-form on a profile. Only names present in the
//! static table resolve to a [`DepartmentCategory`]; anything else is treated
//! as unknown by the encoder.

/// A broad grouping of university departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DepartmentCategory {
    /// 공학계열.
    Engineering,
    /// 인문계열.
    Humanities,
    /// 사회계열.
    Social,
    /// 자연계열.
    Natural,
    /// 예체능계열.
    ArtsAndAthletics,
    /// 의료계열.
    Medical,
    /// 교육계열.
    Education,
    /// 기타.
    Other,
}

/// Department names with a known category.
const DEPARTMENTS: [(&str, DepartmentCategory); 18] = [
    ("컴퓨터공학과", DepartmentCategory::Engineering),
    ("전자공학과", DepartmentCategory::Engineering),
    ("기계공학과", DepartmentCategory::Engineering),
    ("국어국문학과", DepartmentCategory::Humanities),
    ("영어영문학과", DepartmentCategory::Humanities),
    ("사학과", DepartmentCategory::Humanities),
    ("경영학과", DepartmentCategory::Social),
    ("경제학과", DepartmentCategory::Social),
    ("정치외교학과", DepartmentCategory::Social),
    ("수학과", DepartmentCategory::Natural),
    ("물리학과", DepartmentCategory::Natural),
    ("화학과", DepartmentCategory::Natural),
    ("미술학과", DepartmentCategory::ArtsAndAthletics),
    ("음악학과", DepartmentCategory::ArtsAndAthletics),
    ("체육학과", DepartmentCategory::ArtsAndAthletics),
    ("의학과", DepartmentCategory::Medical),
    ("간호학과", DepartmentCategory::Medical),
    ("약학과", DepartmentCategory::Medical),
];

impl DepartmentCategory {
    /// Every category in one-hot order.
    pub const ALL: [Self; 8] = [
        Self::Engineering,
        Self::Humanities,
        Self::Social,
        Self::Natural,
        Self::ArtsAndAthletics,
        Self::Medical,
        Self::Education,
        Self::Other,
    ];

    /// Resolve a department name to its category.
    ///
    /// # Examples
    /// ```
    /// use unimeet_core::DepartmentCategory;
    ///
    /// assert_eq!(
    ///     DepartmentCategory::for_department("경영학과"),
    ///     Some(DepartmentCategory::Social)
    /// );
    /// assert_eq!(DepartmentCategory::for_department("천문학과"), None);
    /// ```
    #[must_use]
    pub fn for_department(name: &str) -> Option<Self> {
        DEPARTMENTS
            .iter()
            .find(|(department, _)| *department == name)
            .map(|&(_, category)| category)
    }

    /// Position of this category within [`DepartmentCategory::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the Korean label used by the registration form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "공학계열",
            Self::Humanities => "인문계열",
            Self::Social => "사회계열",
            Self::Natural => "자연계열",
            Self::ArtsAndAthletics => "예체능계열",
            Self::Medical => "의료계열",
            Self::Education => "교육계열",
            Self::Other => "기타",
        }
    }
}

impl std::fmt::Display for DepartmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
