use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryId, CourseDescription, CourseId, CourseSlug, CourseTitle, DifficultyLevel,
    EstimatedDuration, Language,
};

/// A course in the catalog.
///
/// Only courses that are both featured and published are surfaced on the
/// landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub category_id: CategoryId,
    pub title: CourseTitle,
    pub slug: CourseSlug,
    pub description: CourseDescription,
    pub short_description: Option<String>,
    pub language: Language,
    pub difficulty_level: DifficultyLevel,
    /// Duration in minutes.
    pub estimated_duration: EstimatedDuration,
    pub is_featured: bool,
    pub is_published: bool,
    pub thumbnail_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Course`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCourse {
    pub category_id: CategoryId,
    pub title: CourseTitle,
    pub slug: CourseSlug,
    pub description: CourseDescription,
    pub short_description: Option<String>,
    pub language: Language,
    pub difficulty_level: DifficultyLevel,
    pub estimated_duration: EstimatedDuration,
    pub is_featured: bool,
    pub is_published: bool,
    pub thumbnail_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
