use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::achievement::{
    Achievement as DomainAchievement, NewAchievement as DomainNewAchievement,
};
use crate::domain::types::{
    AchievementCategory, AchievementDescription, AchievementName, PointsRequired,
    TypeConstraintError,
};

/// Diesel model representing the `achievements` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::achievements)]
pub struct Achievement {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub badge_color: Option<String>,
    pub points_required: i32,
    pub category: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Achievement`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::achievements)]
pub struct NewAchievement<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub icon: Option<&'a str>,
    pub badge_color: Option<&'a str>,
    pub points_required: i32,
    pub category: &'static str,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Achievement> for DomainAchievement {
    type Error = TypeConstraintError;

    fn try_from(achievement: Achievement) -> Result<Self, Self::Error> {
        Ok(Self {
            id: achievement.id.try_into()?,
            name: AchievementName::new(achievement.name)?,
            description: AchievementDescription::new(achievement.description)?,
            icon: achievement.icon,
            badge_color: achievement.badge_color,
            points_required: PointsRequired::new(achievement.points_required)?,
            category: AchievementCategory::try_from(achievement.category)?,
            is_active: achievement.is_active,
            created_at: achievement.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewAchievement> for NewAchievement<'a> {
    fn from(achievement: &'a DomainNewAchievement) -> Self {
        Self {
            name: achievement.name.as_str(),
            description: achievement.description.as_str(),
            icon: achievement.icon.as_deref(),
            badge_color: achievement.badge_color.as_deref(),
            points_required: achievement.points_required.get(),
            category: achievement.category.as_str(),
            is_active: achievement.is_active,
            created_at: achievement.created_at,
        }
    }
}
