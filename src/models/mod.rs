//! Diesel models mirroring the database tables.

pub mod achievement;
pub mod category;
pub mod code_example;
#[cfg(feature = "server")]
pub mod config;
pub mod course;
pub mod landing_page;
