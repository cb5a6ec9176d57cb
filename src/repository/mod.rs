use crate::db::{DbConnection, DbPool};
use crate::domain::achievement::{Achievement, NewAchievement};
use crate::domain::category::{Category, NewCategory};
use crate::domain::code_example::{CodeExample, NewCodeExample};
use crate::domain::course::{Course, NewCourse};
use crate::domain::landing_page::{
    LandingPageContent, LandingPageContentPatch, NewLandingPageContent,
};
use crate::domain::types::{CategoryId, CourseId, LandingPageContentId, LandingPageSection};

pub mod achievement;
pub mod category;
pub mod code_example;
pub mod course;
pub mod errors;
pub mod landing_page;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the stored row.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only operations for course entities.
pub trait CourseReader {
    /// List featured and published courses, most recently updated first.
    fn list_featured_courses(&self) -> RepositoryResult<Vec<Course>>;
    /// Retrieve a course by its identifier.
    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>>;
}

/// Write operations for course entities.
pub trait CourseWriter {
    /// Persist a new course and return the stored row.
    fn create_course(&self, course: &NewCourse) -> RepositoryResult<Course>;
}

/// Read-only operations for code example entities.
pub trait CodeExampleReader {
    /// List demo code examples, newest first.
    fn list_demo_code_examples(&self) -> RepositoryResult<Vec<CodeExample>>;
}

/// Write operations for code example entities.
pub trait CodeExampleWriter {
    /// Persist a new code example and return the stored row.
    fn create_code_example(&self, example: &NewCodeExample) -> RepositoryResult<CodeExample>;
}

/// Read-only operations for achievement entities.
pub trait AchievementReader {
    /// List active achievements, highest `points_required` first.
    fn list_active_achievements(&self) -> RepositoryResult<Vec<Achievement>>;
}

/// Write operations for achievement entities.
pub trait AchievementWriter {
    /// Persist a new achievement and return the stored row.
    fn create_achievement(&self, achievement: &NewAchievement) -> RepositoryResult<Achievement>;
}

/// Read-only operations for landing page content.
pub trait LandingPageReader {
    /// The active block of `section` with the lowest `display_order`, ties
    /// broken by the lowest id.
    fn get_active_section(
        &self,
        section: LandingPageSection,
    ) -> RepositoryResult<Option<LandingPageContent>>;
}

/// Write operations for landing page content.
pub trait LandingPageWriter {
    /// Persist a new content block and return the stored row.
    fn create_landing_page_content(
        &self,
        content: &NewLandingPageContent,
    ) -> RepositoryResult<LandingPageContent>;
    /// Apply `patch` to the row with `id`; `None` when no such row exists.
    fn update_landing_page_content(
        &self,
        id: LandingPageContentId,
        patch: &LandingPageContentPatch,
    ) -> RepositoryResult<Option<LandingPageContent>>;
}
