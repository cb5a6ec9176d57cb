//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values, enumerations and numeric constraints are enforced
//! at the boundary.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be positive was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A non-nullable field was explicitly set to null.
    #[error("{0} cannot be null")]
    NullValue(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Rejects blank input; accepted values are kept exactly as given.
fn require_non_blank<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let value = value.into();
    if value.trim().is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(value)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

/// Shared accessors and conversions for string-backed newtypes.
macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a value that is not blank.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                require_non_blank(value, $field).map(Self)
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! slug_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a slug that is not blank. Uniqueness is enforced by the store.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                require_non_blank(value, $field).map(Self)
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! positive_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value that must be strictly greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

macro_rules! non_negative_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value that must be zero or greater.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value >= 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

/// Closed enumerations persisted as lowercase text.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:expr, { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant
            ),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// String representation used in persistence and on the wire.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                match value.trim() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(TypeConstraintError::InvalidValue(format!(
                        "{}: {other}",
                        $field
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category_id"
);
id_newtype!(CourseId, "Unique identifier for a course.", "course_id");
id_newtype!(
    CodeExampleId,
    "Unique identifier for a code example.",
    "code_example_id"
);
id_newtype!(
    AchievementId,
    "Unique identifier for an achievement.",
    "achievement_id"
);
id_newtype!(
    LandingPageContentId,
    "Unique identifier for a landing page content block.",
    "landing_page_content_id"
);

non_empty_string_newtype!(
    CategoryName,
    "Category display name enforcing non-empty values.",
    "category name"
);
non_empty_string_newtype!(
    CourseTitle,
    "Course title enforcing non-empty values.",
    "course title"
);
non_empty_string_newtype!(
    CourseDescription,
    "Long-form course description enforcing non-empty values.",
    "course description"
);
non_empty_string_newtype!(
    CodeExampleTitle,
    "Code example title enforcing non-empty values.",
    "code example title"
);
non_empty_string_newtype!(
    CodeContent,
    "Source code of an example enforcing non-empty values.",
    "code content"
);
non_empty_string_newtype!(
    AchievementName,
    "Achievement name enforcing non-empty values.",
    "achievement name"
);
non_empty_string_newtype!(
    AchievementDescription,
    "Achievement description enforcing non-empty values.",
    "achievement description"
);

slug_newtype!(CategorySlug, "URL slug of a category.", "category slug");
slug_newtype!(CourseSlug, "URL slug of a course.", "course slug");

positive_i32_newtype!(
    EstimatedDuration,
    "Estimated course duration in minutes.",
    "estimated duration"
);
non_negative_i32_newtype!(
    PointsRequired,
    "Points needed to unlock an achievement.",
    "points required"
);

text_enum!(
    /// Programming language a course or example is written for.
    Language, "language", {
        NodeJs => "nodejs",
        Python => "python",
        CSharp => "csharp",
    }
);

text_enum!(
    /// Difficulty of a course or code example.
    DifficultyLevel, "difficulty level", {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
);

text_enum!(
    /// Gamification bucket an achievement belongs to.
    AchievementCategory, "achievement category", {
        Completion => "completion",
        Streak => "streak",
        Challenge => "challenge",
        Milestone => "milestone",
    }
);

text_enum!(
    /// Landing page region a content block is rendered into.
    LandingPageSection, "landing page section", {
        Hero => "hero",
        Demo => "demo",
        Courses => "courses",
        Features => "features",
        Cta => "cta",
    }
);

impl Language {
    /// Icon shown next to the language name.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::NodeJs => "🟢",
            Self::Python => "🐍",
            Self::CSharp => "🔷",
        }
    }
}

impl DifficultyLevel {
    /// Palette colour used for the difficulty badge.
    pub const fn badge_color(self) -> &'static str {
        match self {
            Self::Beginner => "gruvbox-green",
            Self::Intermediate => "gruvbox-yellow",
            Self::Advanced => "gruvbox-red",
        }
    }
}

impl AchievementCategory {
    /// Icon shown on the achievement badge.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Completion => "✅",
            Self::Streak => "🔥",
            Self::Challenge => "🎯",
            Self::Milestone => "🏆",
        }
    }

    /// Palette colour used for the achievement badge.
    pub const fn badge_color(self) -> &'static str {
        match self {
            Self::Completion => "gruvbox-green",
            Self::Streak => "gruvbox-orange",
            Self::Challenge => "gruvbox-blue",
            Self::Milestone => "gruvbox-purple",
        }
    }
}

/// A single field of a partial update.
///
/// Deserialization maps a missing key to [`FieldPatch::Unchanged`] (via
/// `#[serde(default)]` on the containing field), `null` to
/// [`FieldPatch::Clear`] and any other value to [`FieldPatch::Set`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldPatch<T> {
    #[default]
    Unchanged,
    Clear,
    Set(T),
}

impl<T> FieldPatch<T> {
    /// Changeset form for nullable columns: `None` skips, `Some(None)` writes NULL.
    pub fn into_nullable(self) -> Option<Option<T>> {
        match self {
            Self::Unchanged => None,
            Self::Clear => Some(None),
            Self::Set(value) => Some(Some(value)),
        }
    }

    /// Changeset form for non-nullable columns; `Clear` is rejected.
    pub fn into_required(self, field: &'static str) -> Result<Option<T>, TypeConstraintError> {
        match self {
            Self::Unchanged => Ok(None),
            Self::Clear => Err(TypeConstraintError::NullValue(field)),
            Self::Set(value) => Ok(Some(value)),
        }
    }

    /// Converts the carried value, keeping the patch state.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<FieldPatch<U>, E> {
        Ok(match self {
            Self::Unchanged => FieldPatch::Unchanged,
            Self::Clear => FieldPatch::Clear,
            Self::Set(value) => FieldPatch::Set(f(value)?),
        })
    }
}

impl<'de, T> Deserialize<'de> for FieldPatch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Set(value),
            None => Self::Clear,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_strings_as_given() {
        let value = CourseTitle::new("  Node.js Basics  ").unwrap();
        assert_eq!(value.as_str(), "  Node.js Basics  ");

        let code = CodeContent::new("    def f():\n        return 1\n").unwrap();
        assert_eq!(code.as_str(), "    def f():\n        return 1\n");

        assert_eq!(
            CodeContent::new(" \n\t ").unwrap_err(),
            TypeConstraintError::EmptyString("code content")
        );
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = CategoryId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("category_id"));
    }

    #[test]
    fn slugs_only_reject_blank_values() {
        assert_eq!(CourseSlug::new("c++-basics").unwrap(), "c++-basics");
        assert_eq!(CategorySlug::new("café").unwrap(), "café");
        assert_eq!(CourseSlug::new(" padded ").unwrap(), " padded ");
        assert_eq!(
            CategorySlug::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("category slug")
        );
    }

    #[test]
    fn estimated_duration_must_be_positive() {
        assert_eq!(EstimatedDuration::new(90).unwrap().get(), 90);
        assert_eq!(
            EstimatedDuration::new(0).unwrap_err(),
            TypeConstraintError::NonPositiveNumber("estimated duration")
        );
    }

    #[test]
    fn points_required_allows_zero() {
        assert_eq!(PointsRequired::new(0).unwrap().get(), 0);
        assert_eq!(
            PointsRequired::new(-1).unwrap_err(),
            TypeConstraintError::NegativeNumber("points required")
        );
    }

    #[test]
    fn parses_enum_literals() {
        assert_eq!(Language::try_from("csharp").unwrap(), Language::CSharp);
        assert_eq!(
            LandingPageSection::try_from(" hero ").unwrap(),
            LandingPageSection::Hero
        );
        assert_eq!(
            DifficultyLevel::try_from("expert").unwrap_err(),
            TypeConstraintError::InvalidValue("difficulty level: expert".to_string())
        );
        for category in AchievementCategory::ALL {
            assert_eq!(
                AchievementCategory::try_from(category.as_str()).unwrap(),
                *category
            );
        }
    }

    #[test]
    fn enums_serialize_as_literals() {
        assert_eq!(
            serde_json::to_string(&Language::NodeJs).unwrap(),
            "\"nodejs\""
        );
        assert_eq!(serde_json::to_string(&LandingPageSection::Cta).unwrap(), "\"cta\"");
    }

    #[test]
    fn presentation_mappings_cover_every_variant() {
        assert_eq!(Language::Python.icon(), "🐍");
        assert_eq!(DifficultyLevel::Advanced.badge_color(), "gruvbox-red");
        assert_eq!(AchievementCategory::Streak.icon(), "🔥");
        assert_eq!(AchievementCategory::Milestone.badge_color(), "gruvbox-purple");
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default)]
        title: FieldPatch<String>,
    }

    #[test]
    fn field_patch_distinguishes_absent_null_and_value() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"title": null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"title": "X"}"#).unwrap();

        assert_eq!(absent.title, FieldPatch::Unchanged);
        assert_eq!(null.title, FieldPatch::Clear);
        assert_eq!(value.title, FieldPatch::Set("X".to_string()));
    }

    #[test]
    fn field_patch_rejects_null_for_required_columns() {
        assert_eq!(
            FieldPatch::<i32>::Clear.into_required("display order"),
            Err(TypeConstraintError::NullValue("display order"))
        );
        assert_eq!(FieldPatch::Set(3).into_required("display order"), Ok(Some(3)));
        assert_eq!(FieldPatch::<String>::Clear.into_nullable(), Some(None));
    }
}
