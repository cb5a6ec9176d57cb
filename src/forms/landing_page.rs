use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::landing_page::LandingPageContentPatch;
use crate::domain::types::{
    FieldPatch, LandingPageContentId, LandingPageSection, TypeConstraintError,
};

/// Partial update request; keys left out of the JSON body are not touched.
#[derive(Deserialize, Validate)]
pub struct UpdateLandingPageContentForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[serde(default)]
    pub section: FieldPatch<String>,
    #[serde(default)]
    pub title: FieldPatch<String>,
    #[serde(default)]
    pub subtitle: FieldPatch<String>,
    #[serde(default)]
    pub content: FieldPatch<String>,
    #[serde(default)]
    pub cta_text: FieldPatch<String>,
    #[serde(default)]
    pub cta_link: FieldPatch<String>,
    #[serde(default)]
    pub display_order: FieldPatch<i32>,
    #[serde(default)]
    pub is_active: FieldPatch<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateLandingPageContentFormPayload {
    pub id: LandingPageContentId,
    pub section: Option<LandingPageSection>,
    pub title: FieldPatch<String>,
    pub subtitle: FieldPatch<String>,
    pub content: FieldPatch<String>,
    pub cta_text: FieldPatch<String>,
    pub cta_link: FieldPatch<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateLandingPageContentFormPayload {
    /// Split into the target id and a patch stamped with the current time.
    pub fn into_patch(self) -> (LandingPageContentId, LandingPageContentPatch) {
        let patch = LandingPageContentPatch {
            section: self.section,
            title: self.title,
            subtitle: self.subtitle,
            content: self.content,
            cta_text: self.cta_text,
            cta_link: self.cta_link,
            display_order: self.display_order,
            is_active: self.is_active,
            updated_at: Utc::now().naive_utc(),
        };
        (self.id, patch)
    }
}

#[derive(Debug, Error)]
pub enum UpdateLandingPageContentFormError {
    #[error("Update landing page content form validation failed: {0}")]
    Validation(String),
    #[error("Update landing page content form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateLandingPageContentFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateLandingPageContentFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateLandingPageContentForm> for UpdateLandingPageContentFormPayload {
    type Error = UpdateLandingPageContentFormError;

    fn try_from(value: UpdateLandingPageContentForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let section = value
            .section
            .try_map(LandingPageSection::try_from)?
            .into_required("section")?;
        Ok(Self {
            id: LandingPageContentId::new(value.id)?,
            section,
            title: value.title,
            subtitle: value.subtitle,
            content: value.content,
            cta_text: value.cta_text,
            cta_link: value.cta_link,
            display_order: value.display_order.into_required("display order")?,
            is_active: value.is_active.into_required("is active")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(
        json: serde_json::Value,
    ) -> Result<UpdateLandingPageContentFormPayload, UpdateLandingPageContentFormError> {
        let form: UpdateLandingPageContentForm = serde_json::from_value(json).unwrap();
        form.try_into()
    }

    #[test]
    fn only_present_fields_are_patched() {
        let payload = parse(serde_json::json!({"id": 3, "title": "X"})).unwrap();
        assert_eq!(payload.id.get(), 3);
        assert_eq!(payload.title, FieldPatch::Set("X".to_string()));
        assert_eq!(payload.subtitle, FieldPatch::Unchanged);
        assert_eq!(payload.section, None);
        assert_eq!(payload.display_order, None);
        assert_eq!(payload.is_active, None);
    }

    #[test]
    fn explicit_null_clears_nullable_fields() {
        let payload = parse(serde_json::json!({"id": 1, "cta_link": null})).unwrap();
        assert_eq!(payload.cta_link, FieldPatch::Clear);
    }

    #[test]
    fn null_is_rejected_for_required_fields() {
        let result = parse(serde_json::json!({"id": 1, "display_order": null}));
        assert!(matches!(
            result,
            Err(UpdateLandingPageContentFormError::TypeConstraint(msg)) if msg.contains("display")
        ));
    }

    #[test]
    fn section_must_be_known() {
        let result = parse(serde_json::json!({"id": 1, "section": "footer"}));
        assert!(matches!(
            result,
            Err(UpdateLandingPageContentFormError::TypeConstraint(msg)) if msg.contains("footer")
        ));

        let payload = parse(serde_json::json!({"id": 1, "section": "cta"})).unwrap();
        assert_eq!(payload.section, Some(LandingPageSection::Cta));
    }
}
