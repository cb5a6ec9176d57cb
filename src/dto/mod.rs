//! Outbound data transfer objects.

pub mod landing_page;
