//! Application services layer.

pub mod admin;
pub mod error;
pub mod feed;
pub mod render;
pub mod repos;
