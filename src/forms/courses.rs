use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::course::NewCourse;
use crate::domain::types::{
    CategoryId, CourseDescription, CourseSlug, CourseTitle, DifficultyLevel, EstimatedDuration,
    Language, TypeConstraintError,
};

#[derive(Deserialize, Validate)]
pub struct CreateCourseForm {
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub short_description: Option<String>,
    pub language: String,
    pub difficulty_level: String,
    #[validate(range(min = 1))]
    pub estimated_duration: i32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_published: bool,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCourseFormPayload {
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
}

impl CreateCourseFormPayload {
    pub fn into_new_course(self) -> NewCourse {
        let now = Utc::now().naive_utc();
        NewCourse {
            category_id: self.category_id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            short_description: self.short_description,
            language: self.language,
            difficulty_level: self.difficulty_level,
            estimated_duration: self.estimated_duration,
            is_featured: self.is_featured,
            is_published: self.is_published,
            thumbnail_url: self.thumbnail_url,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateCourseFormError {
    #[error("Create course form validation failed: {0}")]
    Validation(String),
    #[error("Create course form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateCourseFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateCourseFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateCourseForm> for CreateCourseFormPayload {
    type Error = CreateCourseFormError;

    fn try_from(value: CreateCourseForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_id: CategoryId::new(value.category_id)?,
            title: CourseTitle::new(value.title)?,
            slug: CourseSlug::new(value.slug)?,
            description: CourseDescription::new(value.description)?,
            short_description: value.short_description,
            language: Language::try_from(value.language)?,
            difficulty_level: DifficultyLevel::try_from(value.difficulty_level)?,
            estimated_duration: EstimatedDuration::new(value.estimated_duration)?,
            is_featured: value.is_featured,
            is_published: value.is_published,
            thumbnail_url: value.thumbnail_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_json(overrides: serde_json::Value) -> CreateCourseForm {
        let mut base = serde_json::json!({
            "category_id": 1,
            "title": "Node.js Fundamentals",
            "slug": "nodejs-fundamentals",
            "description": "Learn the event loop",
            "short_description": null,
            "language": "nodejs",
            "difficulty_level": "beginner",
            "estimated_duration": 120,
            "thumbnail_url": null
        });
        if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
            for (key, value) in overrides {
                base.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn create_course_defaults_flags_to_false() {
        let payload: CreateCourseFormPayload = form_json(serde_json::json!({})).try_into().unwrap();
        assert!(!payload.is_featured);
        assert!(!payload.is_published);
        assert_eq!(payload.language, Language::NodeJs);
        assert_eq!(payload.estimated_duration.get(), 120);
    }

    #[test]
    fn create_course_rejects_non_positive_duration() {
        let result: Result<CreateCourseFormPayload, _> =
            form_json(serde_json::json!({"estimated_duration": 0})).try_into();
        assert!(matches!(
            result,
            Err(CreateCourseFormError::Validation(msg)) if msg.contains("estimated_duration")
        ));
    }

    #[test]
    fn create_course_rejects_unknown_language() {
        let result: Result<CreateCourseFormPayload, _> =
            form_json(serde_json::json!({"language": "ruby"})).try_into();
        assert!(matches!(
            result,
            Err(CreateCourseFormError::TypeConstraint(msg)) if msg.contains("language: ruby")
        ));
    }
}
