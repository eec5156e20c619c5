//! Markdown to HTML rendering for the public post pages.
//!
//! Rendering is pure: markdown in, sanitized HTML out. Nothing is cached or
//! persisted; posts are rendered on every read.

mod config;

use std::sync::Arc;

use comrak::markdown_to_html;
use once_cell::sync::Lazy;

use config::{build_post_sanitizer, default_options};

/// Comrak-based renderer with GFM extensions and Ammonia sanitisation.
pub struct ComrakRenderService {
    options: comrak::Options<'static>,
    sanitizer: ammonia::Builder<'static>,
}

impl ComrakRenderService {
    fn new() -> Self {
        Self {
            options: default_options(),
            sanitizer: build_post_sanitizer(),
        }
    }

    pub fn render(&self, markdown: &str) -> String {
        let html = markdown_to_html(markdown, &self.options);
        self.sanitizer.clean(&html).to_string()
    }
}

impl Default for ComrakRenderService {
    fn default() -> Self {
        Self::new()
    }
}

static RENDER_SERVICE: Lazy<Arc<ComrakRenderService>> =
    Lazy::new(|| Arc::new(ComrakRenderService::new()));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<ComrakRenderService> {
    Arc::clone(&RENDER_SERVICE)
}
