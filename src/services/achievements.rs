use crate::domain::achievement::Achievement;
use crate::forms::achievements::CreateAchievementFormPayload;
use crate::repository::{AchievementReader, AchievementWriter};

use super::{ServiceError, ServiceResult};

pub fn list_active_achievements<R>(repo: &R) -> ServiceResult<Vec<Achievement>>
where
    R: AchievementReader,
{
    repo.list_active_achievements().map_err(|e| {
        log::error!("Failed to list achievements: {e}");
        ServiceError::Internal
    })
}

pub fn create_achievement<R>(
    payload: CreateAchievementFormPayload,
    repo: &R,
) -> ServiceResult<Achievement>
where
    R: AchievementWriter,
{
    repo.create_achievement(&payload.into_new_achievement())
        .map_err(|e| {
            log::error!("Failed to create achievement: {e}");
            ServiceError::Internal
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::achievements::CreateAchievementForm;
    use crate::repository::test::TestRepository;

    fn payload(points: i32, is_active: bool) -> CreateAchievementFormPayload {
        CreateAchievementForm {
            name: format!("Reach {points}"),
            description: "Collect points".to_string(),
            icon: None,
            badge_color: None,
            points_required: points,
            category: "milestone".to_string(),
            is_active,
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn active_achievements_by_points_descending() {
        let repo = TestRepository::new();
        for points in [10, 100, 250, 500] {
            create_achievement(payload(points, true), &repo).unwrap();
        }
        create_achievement(payload(1000, false), &repo).unwrap();

        let points: Vec<i32> = list_active_achievements(&repo)
            .unwrap()
            .into_iter()
            .map(|a| a.points_required.get())
            .collect();

        assert_eq!(points, vec![500, 250, 100, 10]);
    }

    #[test]
    fn created_achievement_is_returned_with_id() {
        let repo = TestRepository::new();
        let created = create_achievement(payload(0, true), &repo).unwrap();
        assert_eq!(created.id.get(), 1);
        assert_eq!(created.name.as_str(), "Reach 0");
    }
}
