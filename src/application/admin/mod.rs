//! Services behind the admin panel.

pub mod posts;
