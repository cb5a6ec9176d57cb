use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::code_example::{
    CodeExample as DomainCodeExample, NewCodeExample as DomainNewCodeExample,
};
use crate::domain::types::{
    CodeContent, CodeExampleTitle, CourseId, DifficultyLevel, Language, TypeConstraintError,
};

/// Diesel model representing the `code_examples` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::code_examples)]
pub struct CodeExample {
    pub id: i32,
    pub course_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub language: String,
    pub code_content: String,
    pub expected_output: Option<String>,
    pub is_demo: bool,
    pub difficulty_level: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`CodeExample`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::code_examples)]
pub struct NewCodeExample<'a> {
    pub course_id: Option<i32>,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub language: &'static str,
    pub code_content: &'a str,
    pub expected_output: Option<&'a str>,
    pub is_demo: bool,
    pub difficulty_level: &'static str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<CodeExample> for DomainCodeExample {
    type Error = TypeConstraintError;

    fn try_from(example: CodeExample) -> Result<Self, Self::Error> {
        Ok(Self {
            id: example.id.try_into()?,
            course_id: example.course_id.map(CourseId::new).transpose()?,
            title: CodeExampleTitle::new(example.title)?,
            description: example.description,
            language: Language::try_from(example.language)?,
            code_content: CodeContent::new(example.code_content)?,
            expected_output: example.expected_output,
            is_demo: example.is_demo,
            difficulty_level: DifficultyLevel::try_from(example.difficulty_level)?,
            created_at: example.created_at,
            updated_at: example.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewCodeExample> for NewCodeExample<'a> {
    fn from(example: &'a DomainNewCodeExample) -> Self {
        Self {
            course_id: example.course_id.map(CourseId::get),
            title: example.title.as_str(),
            description: example.description.as_deref(),
            language: example.language.as_str(),
            code_content: example.code_content.as_str(),
            expected_output: example.expected_output.as_deref(),
            is_demo: example.is_demo,
            difficulty_level: example.difficulty_level.as_str(),
            created_at: example.created_at,
            updated_at: example.updated_at,
        }
    }
}
