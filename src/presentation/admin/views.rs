mod posts;

pub use posts::*;

use time::{OffsetDateTime, macros::format_description};

use crate::presentation::views::SITE_TITLE;

#[derive(Clone)]
pub struct AdminLayout<T> {
    pub site_title: String,
    pub page_title: String,
    pub content: T,
}

impl<T> AdminLayout<T> {
    pub fn new(page_title: impl Into<String>, content: T) -> Self {
        Self {
            site_title: SITE_TITLE.to_string(),
            page_title: page_title.into(),
            content,
        }
    }
}

/// Format a timestamp for admin tables, in UTC.
pub fn format_timestamp(value: OffsetDateTime) -> Option<String> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
    value
        .to_offset(time::UtcOffset::UTC)
        .format(&format)
        .ok()
}
