use crate::application::error::{ErrorReport, HttpError};
use crate::domain::entities::PostRecord;
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

pub const SITE_TITLE: &str = "postdesk";

/// Everything but the RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `base/slug`, with the slug escaped so it stays a single path segment.
pub fn slug_path(base: &str, slug: &str) -> String {
    format!("{base}/{}", utf8_percent_encode(slug, PATH_SEGMENT))
}

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn render_not_found_response() -> Response {
    let view = LayoutContext::new(ErrorPageView::not_found());
    let mut response = render_template_response(ErrorTemplate { view }, StatusCode::NOT_FOUND);
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        "Resource not found",
    )
    .attach(&mut response);
    response
}

#[derive(Clone)]
pub struct LayoutContext<T> {
    pub site_title: String,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(content: T) -> Self {
        Self {
            site_title: SITE_TITLE.to_string(),
            content,
        }
    }
}

#[derive(Clone)]
pub struct PostCard {
    pub title: String,
    pub href: String,
}

impl PostCard {
    pub fn from_record(post: &PostRecord) -> Self {
        Self {
            title: post.title.clone(),
            href: slug_path("/posts", &post.slug),
        }
    }
}

#[derive(Clone)]
pub struct PostIndexContext {
    pub posts: Vec<PostCard>,
}

impl PostIndexContext {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[derive(Clone)]
pub struct PostDetailContext {
    pub slug: String,
    pub title: String,
    /// Sanitized HTML produced by the render service.
    pub body_html: String,
}

#[derive(Clone)]
pub struct ErrorPageView {
    pub title: String,
    pub message: String,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            title: "Page Not Found".to_string(),
            message: "The page you requested does not exist.".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "posts.html")]
pub struct PostIndexTemplate {
    pub view: LayoutContext<PostIndexContext>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub view: LayoutContext<PostDetailContext>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: LayoutContext<ErrorPageView>,
}
