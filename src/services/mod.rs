//! Handler logic generic over the repository traits.

pub mod achievements;
pub mod categories;
pub mod code_examples;
pub mod courses;
pub mod errors;
pub mod landing_page;

pub use errors::{ServiceError, ServiceResult};
