//! Persistence-independent domain entities and value objects.

pub mod achievement;
pub mod category;
pub mod code_example;
pub mod course;
pub mod landing_page;
pub mod types;
