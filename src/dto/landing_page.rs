use serde::Serialize;

use crate::domain::achievement::Achievement;
use crate::domain::category::Category;
use crate::domain::code_example::CodeExample;
use crate::domain::course::Course;
use crate::domain::landing_page::LandingPageContent;

/// Everything the landing page renders, fetched in one call.
///
/// Missing single-row sections are `null`; empty listings are `[]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageData {
    pub hero: Option<LandingPageContent>,
    pub demo: Option<LandingPageContent>,
    pub cta: Option<LandingPageContent>,
    pub featured_courses: Vec<Course>,
    pub categories: Vec<Category>,
    pub demo_code_examples: Vec<CodeExample>,
    pub achievements: Vec<Achievement>,
}
