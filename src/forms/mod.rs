//! Inbound request shapes and their validation.

pub mod achievements;
pub mod categories;
pub mod code_examples;
pub mod courses;
pub mod landing_page;
