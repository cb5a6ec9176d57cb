use crate::domain::landing_page::LandingPageContent;
use crate::domain::types::LandingPageSection;
use crate::dto::landing_page::LandingPageData;
use crate::forms::landing_page::UpdateLandingPageContentFormPayload;
use crate::repository::{
    AchievementReader, CategoryReader, CodeExampleReader, CourseReader, LandingPageReader,
    LandingPageWriter, RepositoryResult,
};

use super::{ServiceError, ServiceResult};

fn fetch_landing_page_data<R>(repo: &R) -> RepositoryResult<LandingPageData>
where
    R: LandingPageReader + CourseReader + CategoryReader + CodeExampleReader + AchievementReader,
{
    Ok(LandingPageData {
        hero: repo.get_active_section(LandingPageSection::Hero)?,
        demo: repo.get_active_section(LandingPageSection::Demo)?,
        cta: repo.get_active_section(LandingPageSection::Cta)?,
        featured_courses: repo.list_featured_courses()?,
        categories: repo.list_categories()?,
        demo_code_examples: repo.list_demo_code_examples()?,
        achievements: repo.list_active_achievements()?,
    })
}

/// Collect everything the landing page shows in one response.
///
/// Any failing lookup fails the whole call; partial data is never returned.
pub fn get_landing_page_data<R>(repo: &R) -> ServiceResult<LandingPageData>
where
    R: LandingPageReader + CourseReader + CategoryReader + CodeExampleReader + AchievementReader,
{
    fetch_landing_page_data(repo).map_err(|e| {
        log::error!("Failed to load landing page data: {e}");
        ServiceError::Internal
    })
}

/// Apply a partial update to one content block. `updated_at` always moves.
pub fn update_landing_page_content<R>(
    payload: UpdateLandingPageContentFormPayload,
    repo: &R,
) -> ServiceResult<LandingPageContent>
where
    R: LandingPageWriter,
{
    let (id, patch) = payload.into_patch();
    match repo.update_landing_page_content(id, &patch) {
        Ok(Some(content)) => Ok(content),
        Ok(None) => {
            log::warn!("Landing page content {id} not found for update");
            Err(ServiceError::NotFound {
                entity: "landing page content",
                id: id.get(),
            })
        }
        Err(e) => {
            log::error!("Failed to update landing page content: {e}");
            Err(ServiceError::Internal)
        }
    }
}
