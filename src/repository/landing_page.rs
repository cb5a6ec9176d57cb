use diesel::prelude::*;

use crate::domain::landing_page::{
    LandingPageContent, LandingPageContentPatch, NewLandingPageContent,
};
use crate::domain::types::{LandingPageContentId, LandingPageSection};
use crate::models::landing_page::{
    LandingPageContent as DbLandingPageContent, LandingPageContentChangeset,
    NewLandingPageContent as DbNewLandingPageContent,
};
use crate::repository::{
    DieselRepository, LandingPageReader, LandingPageWriter, RepositoryResult,
};

impl LandingPageReader for DieselRepository {
    fn get_active_section(
        &self,
        section: LandingPageSection,
    ) -> RepositoryResult<Option<LandingPageContent>> {
        use crate::schema::landing_page_content;

        let mut conn = self.conn()?;

        let content = landing_page_content::table
            .filter(landing_page_content::section.eq(section.as_str()))
            .filter(landing_page_content::is_active.eq(true))
            .order((
                landing_page_content::display_order.asc(),
                landing_page_content::id.asc(),
            ))
            .first::<DbLandingPageContent>(&mut conn)
            .optional()?;

        let content = content.map(TryInto::try_into).transpose()?;
        Ok(content)
    }
}

impl LandingPageWriter for DieselRepository {
    fn create_landing_page_content(
        &self,
        content: &NewLandingPageContent,
    ) -> RepositoryResult<LandingPageContent> {
        use crate::schema::landing_page_content;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(landing_page_content::table)
            .values(DbNewLandingPageContent::from(content))
            .get_result::<DbLandingPageContent>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_landing_page_content(
        &self,
        id: LandingPageContentId,
        patch: &LandingPageContentPatch,
    ) -> RepositoryResult<Option<LandingPageContent>> {
        use crate::schema::landing_page_content;

        let mut conn = self.conn()?;
        let changeset: LandingPageContentChangeset = patch.clone().into();

        let updated = diesel::update(
            landing_page_content::table.filter(landing_page_content::id.eq(id.get())),
        )
        .set(changeset)
        .get_result::<DbLandingPageContent>(&mut conn)
        .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }
}
