use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{FieldPatch, LandingPageContentId, LandingPageSection};

/// Editable copy for one region of the landing page.
///
/// Several rows may share a section; readers pick the active row with the
/// lowest `display_order`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandingPageContent {
    pub id: LandingPageContentId,
    pub section: LandingPageSection,
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

/// Data required to insert a new [`LandingPageContent`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewLandingPageContent {
    pub section: LandingPageSection,
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

/// Partial update of a [`LandingPageContent`] row.
///
/// Nullable columns use [`FieldPatch`] so that "leave as is" and "set to
/// null" stay distinct; non-nullable columns are either replaced or kept.
/// `updated_at` is always written.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingPageContentPatch {
    pub section: Option<LandingPageSection>,
    pub title: FieldPatch<String>,
    pub subtitle: FieldPatch<String>,
    pub content: FieldPatch<String>,
    pub cta_text: FieldPatch<String>,
    pub cta_link: FieldPatch<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl LandingPageContentPatch {
    /// Applies the patch to an in-memory row.
    pub fn apply_to(&self, row: &mut LandingPageContent) {
        fn apply(target: &mut Option<String>, patch: &FieldPatch<String>) {
            match patch {
                FieldPatch::Unchanged => {}
                FieldPatch::Clear => *target = None,
                FieldPatch::Set(value) => *target = Some(value.clone()),
            }
        }

        if let Some(section) = self.section {
            row.section = section;
        }
        apply(&mut row.title, &self.title);
        apply(&mut row.subtitle, &self.subtitle);
        apply(&mut row.content, &self.content);
        apply(&mut row.cta_text, &self.cta_text);
        apply(&mut row.cta_link, &self.cta_link);
        if let Some(display_order) = self.display_order {
            row.display_order = display_order;
        }
        if let Some(is_active) = self.is_active {
            row.is_active = is_active;
        }
        row.updated_at = self.updated_at;
    }
}
