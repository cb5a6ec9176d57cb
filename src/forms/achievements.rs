use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::achievement::NewAchievement;
use crate::domain::types::{
    AchievementCategory, AchievementDescription, AchievementName, PointsRequired,
    TypeConstraintError,
};

fn default_active() -> bool {
    true
}

#[derive(Deserialize, Validate)]
pub struct CreateAchievementForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub icon: Option<String>,
    pub badge_color: Option<String>,
    #[validate(range(min = 0))]
    pub points_required: i32,
    pub category: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAchievementFormPayload {
    pub name: AchievementName,
    pub description: AchievementDescription,
    pub icon: Option<String>,
    pub badge_color: Option<String>,
    pub points_required: PointsRequired,
    pub category: AchievementCategory,
    pub is_active: bool,
}

impl CreateAchievementFormPayload {
    pub fn into_new_achievement(self) -> NewAchievement {
        NewAchievement {
            name: self.name,
            description: self.description,
            icon: self.icon,
            badge_color: self.badge_color,
            points_required: self.points_required,
            category: self.category,
            is_active: self.is_active,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateAchievementFormError {
    #[error("Create achievement form validation failed: {0}")]
    Validation(String),
    #[error("Create achievement form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateAchievementFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateAchievementFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateAchievementForm> for CreateAchievementFormPayload {
    type Error = CreateAchievementFormError;

    fn try_from(value: CreateAchievementForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: AchievementName::new(value.name)?,
            description: AchievementDescription::new(value.description)?,
            icon: value.icon,
            badge_color: value.badge_color,
            points_required: PointsRequired::new(value.points_required)?,
            category: AchievementCategory::try_from(value.category)?,
            is_active: value.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_active_defaults_to_true() {
        let form: CreateAchievementForm = serde_json::from_value(serde_json::json!({
            "name": "First Steps",
            "description": "Complete your first lesson",
            "icon": null,
            "badge_color": null,
            "points_required": 0,
            "category": "completion"
        }))
        .unwrap();
        let payload: CreateAchievementFormPayload = form.try_into().unwrap();
        assert!(payload.is_active);
        assert_eq!(payload.category, AchievementCategory::Completion);
    }

    #[test]
    fn rejects_negative_points() {
        let form = CreateAchievementForm {
            name: "Streak".to_string(),
            description: "Seven days in a row".to_string(),
            icon: None,
            badge_color: None,
            points_required: -5,
            category: "streak".to_string(),
            is_active: true,
        };
        let result: Result<CreateAchievementFormPayload, _> = form.try_into();
        assert!(matches!(
            result,
            Err(CreateAchievementFormError::Validation(msg)) if msg.contains("points_required")
        ));
    }
}
