use diesel::prelude::*;

use crate::domain::code_example::{CodeExample, NewCodeExample};
use crate::models::code_example::{
    CodeExample as DbCodeExample, NewCodeExample as DbNewCodeExample,
};
use crate::repository::{
    CodeExampleReader, CodeExampleWriter, DieselRepository, RepositoryResult,
};

impl CodeExampleReader for DieselRepository {
    fn list_demo_code_examples(&self) -> RepositoryResult<Vec<CodeExample>> {
        use crate::schema::code_examples;

        let mut conn = self.conn()?;

        let items = code_examples::table
            .filter(code_examples::is_demo.eq(true))
            .order((code_examples::created_at.desc(), code_examples::id.desc()))
            .load::<DbCodeExample>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<CodeExample>, _>>()?;

        Ok(items)
    }
}

impl CodeExampleWriter for DieselRepository {
    fn create_code_example(&self, example: &NewCodeExample) -> RepositoryResult<CodeExample> {
        use crate::schema::code_examples;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(code_examples::table)
            .values(DbNewCodeExample::from(example))
            .get_result::<DbCodeExample>(&mut conn)?;

        Ok(created.try_into()?)
    }
}
