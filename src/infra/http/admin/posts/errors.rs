use axum::http::StatusCode;

use crate::application::{admin::posts::AdminPostError, error::HttpError};
use crate::infra::http::repo_error_to_http;

use super::forms::FormDecodeError;

pub(super) fn admin_post_error(source: &'static str, err: AdminPostError) -> HttpError {
    match err {
        AdminPostError::InvalidInput { message } => HttpError::new(
            source,
            StatusCode::BAD_REQUEST,
            "Post request could not be processed",
            message,
        ),
        AdminPostError::NotFound { slug } => HttpError::new(
            source,
            StatusCode::NOT_FOUND,
            "Post not found",
            format!("Post `{slug}` could not be found"),
        ),
        AdminPostError::Conflict { slug } => HttpError::new(
            source,
            StatusCode::CONFLICT,
            "Post already exists",
            format!("Post `{slug}` already exists"),
        ),
        AdminPostError::Repo(repo) => repo_error_to_http(source, repo),
    }
}

pub(super) fn form_decode_error(source: &'static str, err: &FormDecodeError) -> HttpError {
    HttpError::from_error(
        source,
        StatusCode::BAD_REQUEST,
        "Malformed form submission",
        err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::repos::RepoError;

    #[test]
    fn admin_errors_map_to_statuses() {
        let source = "test";
        assert_eq!(
            admin_post_error(source, AdminPostError::invalid_input("slug is required")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            admin_post_error(source, AdminPostError::NotFound { slug: "x".into() }).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            admin_post_error(source, AdminPostError::Conflict { slug: "x".into() }).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            admin_post_error(source, AdminPostError::Repo(RepoError::Timeout)).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
