use crate::domain::course::Course;
use crate::forms::courses::CreateCourseFormPayload;
use crate::repository::{CategoryReader, CourseReader, CourseWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

pub fn list_featured_courses<R>(repo: &R) -> ServiceResult<Vec<Course>>
where
    R: CourseReader,
{
    repo.list_featured_courses().map_err(|e| {
        log::error!("Failed to list featured courses: {e}");
        ServiceError::Internal
    })
}

/// Create a course after checking that its category exists.
pub fn create_course<R>(payload: CreateCourseFormPayload, repo: &R) -> ServiceResult<Course>
where
    R: CategoryReader + CourseWriter,
{
    let category_id = payload.category_id;
    let missing_category = || {
        log::warn!("Rejected course for missing category {category_id}");
        ServiceError::MissingReference {
            entity: "category",
            id: category_id.get(),
        }
    };

    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(missing_category()),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let course = payload.into_new_course();
    match repo.create_course(&course) {
        Ok(course) => Ok(course),
        Err(RepositoryError::UniqueViolation(e)) => {
            log::warn!("Rejected course with duplicate slug '{}': {e}", course.slug);
            Err(ServiceError::DuplicateSlug {
                entity: "course",
                slug: course.slug.into_inner(),
            })
        }
        // The category was deleted between the check and the insert.
        Err(RepositoryError::ForeignKeyViolation(_)) => Err(missing_category()),
        Err(e) => {
            log::error!("Failed to create course: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::NewCategory;
    use crate::domain::types::{CategoryName, CategorySlug, CourseId};
    use crate::forms::courses::CreateCourseForm;
    use crate::repository::test::{TestRepository, epoch};
    use crate::repository::CategoryWriter;

    fn seed_category(repo: &TestRepository) {
        repo.create_category(&NewCategory {
            name: CategoryName::new("Backend").unwrap(),
            slug: CategorySlug::new("backend").unwrap(),
            description: None,
            icon: None,
            color: None,
            created_at: epoch(),
            updated_at: epoch(),
        })
        .unwrap();
    }

    fn payload(category_id: i32, slug: &str, featured: bool) -> CreateCourseFormPayload {
        CreateCourseForm {
            category_id,
            title: "Python for APIs".to_string(),
            slug: slug.to_string(),
            description: "Build HTTP services".to_string(),
            short_description: Some("HTTP in Python".to_string()),
            language: "python".to_string(),
            difficulty_level: "intermediate".to_string(),
            estimated_duration: 240,
            is_featured: featured,
            is_published: true,
            thumbnail_url: None,
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn missing_category_creates_nothing() {
        let repo = TestRepository::new();

        let result = create_course(payload(7, "python-apis", true), &repo);

        assert_eq!(
            result,
            Err(ServiceError::MissingReference {
                entity: "category",
                id: 7,
            })
        );
        assert!(
            repo.get_course_by_id(CourseId::new(1).unwrap())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn created_featured_course_is_listed() {
        let repo = TestRepository::new();
        seed_category(&repo);

        let created = create_course(payload(1, "python-apis", true), &repo).unwrap();
        create_course(payload(1, "python-hidden", false), &repo).unwrap();

        let featured = list_featured_courses(&repo).unwrap();
        assert_eq!(featured, vec![created]);
    }

    #[test]
    fn duplicate_course_slug_is_reported() {
        let repo = TestRepository::new();
        seed_category(&repo);
        create_course(payload(1, "python-apis", true), &repo).unwrap();

        let result = create_course(payload(1, "python-apis", true), &repo);

        assert_eq!(
            result,
            Err(ServiceError::DuplicateSlug {
                entity: "course",
                slug: "python-apis".to_string(),
            })
        );
    }
}
