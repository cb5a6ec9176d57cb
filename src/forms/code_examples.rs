use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::code_example::NewCodeExample;
use crate::domain::types::{
    CodeContent, CodeExampleTitle, CourseId, DifficultyLevel, Language, TypeConstraintError,
};

#[derive(Deserialize, Validate)]
pub struct CreateCodeExampleForm {
    #[validate(range(min = 1))]
    pub course_id: Option<i32>,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub language: String,
    #[validate(length(min = 1))]
    pub code_content: String,
    pub expected_output: Option<String>,
    #[serde(default)]
    pub is_demo: bool,
    pub difficulty_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCodeExampleFormPayload {
    pub course_id: Option<CourseId>,
    pub title: CodeExampleTitle,
    pub description: Option<String>,
    pub language: Language,
    pub code_content: CodeContent,
    pub expected_output: Option<String>,
    pub is_demo: bool,
    pub difficulty_level: DifficultyLevel,
}

impl CreateCodeExampleFormPayload {
    pub fn into_new_code_example(self) -> NewCodeExample {
        let now = Utc::now().naive_utc();
        NewCodeExample {
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            language: self.language,
            code_content: self.code_content,
            expected_output: self.expected_output,
            is_demo: self.is_demo,
            difficulty_level: self.difficulty_level,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateCodeExampleFormError {
    #[error("Create code example form validation failed: {0}")]
    Validation(String),
    #[error("Create code example form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateCodeExampleFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateCodeExampleFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateCodeExampleForm> for CreateCodeExampleFormPayload {
    type Error = CreateCodeExampleFormError;

    fn try_from(value: CreateCodeExampleForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            course_id: value.course_id.map(CourseId::new).transpose()?,
            title: CodeExampleTitle::new(value.title)?,
            description: value.description,
            language: Language::try_from(value.language)?,
            code_content: CodeContent::new(value.code_content)?,
            expected_output: value.expected_output,
            is_demo: value.is_demo,
            difficulty_level: DifficultyLevel::try_from(value.difficulty_level)?,
        })
    }
}
