use diesel::prelude::*;

use crate::domain::achievement::{Achievement, NewAchievement};
use crate::models::achievement::{
    Achievement as DbAchievement, NewAchievement as DbNewAchievement,
};
use crate::repository::{
    AchievementReader, AchievementWriter, DieselRepository, RepositoryResult,
};

impl AchievementReader for DieselRepository {
    fn list_active_achievements(&self) -> RepositoryResult<Vec<Achievement>> {
        use crate::schema::achievements;

        let mut conn = self.conn()?;

        let items = achievements::table
            .filter(achievements::is_active.eq(true))
            .order((achievements::points_required.desc(), achievements::id.desc()))
            .load::<DbAchievement>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Achievement>, _>>()?;

        Ok(items)
    }
}

impl AchievementWriter for DieselRepository {
    fn create_achievement(&self, achievement: &NewAchievement) -> RepositoryResult<Achievement> {
        use crate::schema::achievements;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(achievements::table)
            .values(DbNewAchievement::from(achievement))
            .get_result::<DbAchievement>(&mut conn)?;

        Ok(created.try_into()?)
    }
}
