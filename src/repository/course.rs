use diesel::prelude::*;

use crate::domain::course::{Course, NewCourse};
use crate::domain::types::CourseId;
use crate::models::course::{Course as DbCourse, NewCourse as DbNewCourse};
use crate::repository::{CourseReader, CourseWriter, DieselRepository, RepositoryResult};

impl CourseReader for DieselRepository {
    fn list_featured_courses(&self) -> RepositoryResult<Vec<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let items = courses::table
            .filter(courses::is_featured.eq(true))
            .filter(courses::is_published.eq(true))
            .order((courses::updated_at.desc(), courses::id.desc()))
            .load::<DbCourse>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Course>, _>>()?;

        Ok(items)
    }

    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let course = courses::table
            .filter(courses::id.eq(id.get()))
            .first::<DbCourse>(&mut conn)
            .optional()?;

        let course = course.map(TryInto::try_into).transpose()?;
        Ok(course)
    }
}

impl CourseWriter for DieselRepository {
    fn create_course(&self, course: &NewCourse) -> RepositoryResult<Course> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(courses::table)
            .values(DbNewCourse::from(course))
            .get_result::<DbCourse>(&mut conn)?;

        Ok(created.try_into()?)
    }
}
