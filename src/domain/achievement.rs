use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AchievementCategory, AchievementDescription, AchievementId, AchievementName, PointsRequired,
};

/// Gamification badge a learner can unlock.
///
/// Achievements are immutable once created and therefore carry no
/// `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: AchievementName,
    pub description: AchievementDescription,
    pub icon: Option<String>,
    pub badge_color: Option<String>,
    pub points_required: PointsRequired,
    pub category: AchievementCategory,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Achievement`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAchievement {
    pub name: AchievementName,
    pub description: AchievementDescription,
    pub icon: Option<String>,
    pub badge_color: Option<String>,
    pub points_required: PointsRequired,
    pub category: AchievementCategory,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}
