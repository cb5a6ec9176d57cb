use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::course::{Course as DomainCourse, NewCourse as DomainNewCourse};
use crate::domain::types::{
    CourseDescription, CourseSlug, CourseTitle, DifficultyLevel, EstimatedDuration, Language,
    TypeConstraintError,
};

/// Diesel model representing the `courses` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::courses)]
pub struct Course {
    pub id: i32,
    pub category_id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub short_description: Option<String>,
    pub language: String,
    pub difficulty_level: String,
    pub estimated_duration: i32,
    pub is_featured: bool,
    pub is_published: bool,
    pub thumbnail_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Course`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::courses)]
pub struct NewCourse<'a> {
    pub category_id: i32,
    pub title: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub short_description: Option<&'a str>,
    pub language: &'static str,
    pub difficulty_level: &'static str,
    pub estimated_duration: i32,
    pub is_featured: bool,
    pub is_published: bool,
    pub thumbnail_url: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Course> for DomainCourse {
    type Error = TypeConstraintError;

    fn try_from(course: Course) -> Result<Self, Self::Error> {
        Ok(Self {
            id: course.id.try_into()?,
            category_id: course.category_id.try_into()?,
            title: CourseTitle::new(course.title)?,
            slug: CourseSlug::new(course.slug)?,
            description: CourseDescription::new(course.description)?,
            short_description: course.short_description,
            language: Language::try_from(course.language)?,
            difficulty_level: DifficultyLevel::try_from(course.difficulty_level)?,
            estimated_duration: EstimatedDuration::new(course.estimated_duration)?,
            is_featured: course.is_featured,
            is_published: course.is_published,
            thumbnail_url: course.thumbnail_url,
            created_at: course.created_at,
            updated_at: course.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewCourse> for NewCourse<'a> {
    fn from(course: &'a DomainNewCourse) -> Self {
        Self {
            category_id: course.category_id.get(),
            title: course.title.as_str(),
            slug: course.slug.as_str(),
            description: course.description.as_str(),
            short_description: course.short_description.as_deref(),
            language: course.language.as_str(),
            difficulty_level: course.difficulty_level.as_str(),
            estimated_duration: course.estimated_duration.get(),
            is_featured: course.is_featured,
            is_published: course.is_published,
            thumbnail_url: course.thumbnail_url.as_deref(),
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}
