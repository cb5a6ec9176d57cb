use crate::domain::code_example::CodeExample;
use crate::forms::code_examples::CreateCodeExampleFormPayload;
use crate::repository::{CodeExampleReader, CodeExampleWriter, CourseReader, RepositoryError};

use super::{ServiceError, ServiceResult};

pub fn list_demo_code_examples<R>(repo: &R) -> ServiceResult<Vec<CodeExample>>
where
    R: CodeExampleReader,
{
    repo.list_demo_code_examples().map_err(|e| {
        log::error!("Failed to list demo code examples: {e}");
        ServiceError::Internal
    })
}

/// Create a code example; a linked course must exist.
pub fn create_code_example<R>(
    payload: CreateCodeExampleFormPayload,
    repo: &R,
) -> ServiceResult<CodeExample>
where
    R: CourseReader + CodeExampleWriter,
{
    if let Some(course_id) = payload.course_id {
        match repo.get_course_by_id(course_id) {
            Ok(Some(_)) => {}
            Ok(None) => {
                log::warn!("Rejected code example for missing course {course_id}");
                return Err(ServiceError::MissingReference {
                    entity: "course",
                    id: course_id.get(),
                });
            }
            Err(e) => {
                log::error!("Failed to get course: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    let example = payload.into_new_code_example();
    match repo.create_code_example(&example) {
        Ok(example) => Ok(example),
        Err(RepositoryError::ForeignKeyViolation(e)) => {
            log::warn!("Code example lost its course before insert: {e}");
            Err(ServiceError::MissingReference {
                entity: "course",
                id: example.course_id.map(|id| id.get()).unwrap_or_default(),
            })
        }
        Err(e) => {
            log::error!("Failed to create code example: {e}");
            Err(ServiceError::Internal)
        }
    }
}
