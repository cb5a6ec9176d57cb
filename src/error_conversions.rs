//! Error conversion glue between the domain, form, repository and service
//! layers.

use crate::domain::types::TypeConstraintError;
use crate::forms::achievements::CreateAchievementFormError;
use crate::forms::categories::CreateCategoryFormError;
use crate::forms::code_examples::CreateCodeExampleFormError;
use crate::forms::courses::CreateCourseFormError;
use crate::forms::landing_page::UpdateLandingPageContentFormError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<CreateCategoryFormError> for ServiceError {
    fn from(val: CreateCategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<CreateCourseFormError> for ServiceError {
    fn from(val: CreateCourseFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<CreateCodeExampleFormError> for ServiceError {
    fn from(val: CreateCodeExampleFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<CreateAchievementFormError> for ServiceError {
    fn from(val: CreateAchievementFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateLandingPageContentFormError> for ServiceError {
    fn from(val: UpdateLandingPageContentFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
