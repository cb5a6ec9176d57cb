use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CodeContent, CodeExampleId, CodeExampleTitle, CourseId, DifficultyLevel, Language,
};

/// A runnable code snippet, either course material or a landing page demo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeExample {
    pub id: CodeExampleId,
    /// Owning course; standalone demos have none.
    pub course_id: Option<CourseId>,
    pub title: CodeExampleTitle,
    pub description: Option<String>,
    pub language: Language,
    pub code_content: CodeContent,
    pub expected_output: Option<String>,
    pub is_demo: bool,
    pub difficulty_level: DifficultyLevel,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`CodeExample`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCodeExample {
    pub course_id: Option<CourseId>,
    pub title: CodeExampleTitle,
    pub description: Option<String>,
    pub language: Language,
    pub code_content: CodeContent,
    pub expected_output: Option<String>,
    pub is_demo: bool,
    pub difficulty_level: DifficultyLevel,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
