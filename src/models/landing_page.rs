use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::landing_page::{
    LandingPageContent as DomainLandingPageContent,
    LandingPageContentPatch as DomainLandingPageContentPatch,
    NewLandingPageContent as DomainNewLandingPageContent,
};
use crate::domain::types::{LandingPageSection, TypeConstraintError};

/// Diesel model representing the `landing_page_content` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::landing_page_content)]
pub struct LandingPageContent {
    pub id: i32,
    pub section: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`LandingPageContent`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::landing_page_content)]
pub struct NewLandingPageContent<'a> {
    pub section: &'static str,
    pub title: Option<&'a str>,
    pub subtitle: Option<&'a str>,
    pub content: Option<&'a str>,
    pub cta_text: Option<&'a str>,
    pub cta_link: Option<&'a str>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for partial updates.
///
/// `None` leaves a column untouched; for nullable columns `Some(None)` writes
/// NULL.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::landing_page_content)]
pub struct LandingPageContentChangeset {
    pub section: Option<&'static str>,
    pub title: Option<Option<String>>,
    pub subtitle: Option<Option<String>>,
    pub content: Option<Option<String>>,
    pub cta_text: Option<Option<String>>,
    pub cta_link: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<LandingPageContent> for DomainLandingPageContent {
    type Error = TypeConstraintError;

    fn try_from(row: LandingPageContent) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id.try_into()?,
            section: LandingPageSection::try_from(row.section)?,
            title: row.title,
            subtitle: row.subtitle,
            content: row.content,
            cta_text: row.cta_text,
            cta_link: row.cta_link,
            display_order: row.display_order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewLandingPageContent> for NewLandingPageContent<'a> {
    fn from(row: &'a DomainNewLandingPageContent) -> Self {
        Self {
            section: row.section.as_str(),
            title: row.title.as_deref(),
            subtitle: row.subtitle.as_deref(),
            content: row.content.as_deref(),
            cta_text: row.cta_text.as_deref(),
            cta_link: row.cta_link.as_deref(),
            display_order: row.display_order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<DomainLandingPageContentPatch> for LandingPageContentChangeset {
    fn from(patch: DomainLandingPageContentPatch) -> Self {
        Self {
            section: patch.section.map(LandingPageSection::as_str),
            title: patch.title.into_nullable(),
            subtitle: patch.subtitle.into_nullable(),
            content: patch.content.into_nullable(),
            cta_text: patch.cta_text.into_nullable(),
            cta_link: patch.cta_link.into_nullable(),
            display_order: patch.display_order,
            is_active: patch.is_active,
            updated_at: patch.updated_at,
        }
    }
}
