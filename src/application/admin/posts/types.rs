use thiserror::Error;

use crate::application::repos::RepoError;
use crate::domain::posts::{PostFieldErrors, PostFields};

/// Where every successful write sends the author.
pub const ADMIN_POSTS_ROUTE: &str = "/posts/admin";

#[derive(Debug, Error)]
pub enum AdminPostError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("post `{slug}` not found")]
    NotFound { slug: String },
    #[error("post `{slug}` already exists")]
    Conflict { slug: String },
    #[error(transparent)]
    Repo(RepoError),
}

impl AdminPostError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Lift a repository error, attaching the slug the operation targeted.
    pub(crate) fn from_repo(slug: &str, err: RepoError) -> Self {
        match err {
            RepoError::NotFound => Self::NotFound {
                slug: slug.to_string(),
            },
            RepoError::Duplicate { .. } => Self::Conflict {
                slug: slug.to_string(),
            },
            other => Self::Repo(other),
        }
    }
}

impl From<RepoError> for AdminPostError {
    fn from(err: RepoError) -> Self {
        Self::Repo(err)
    }
}

/// What the author asked the edit form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostEditIntent {
    Delete,
    Update,
}

impl PostEditIntent {
    /// `"delete"` deletes; any other value, or none, updates.
    pub fn from_submit_value(value: Option<&str>) -> Self {
        match value {
            Some("delete") => Self::Delete,
            _ => Self::Update,
        }
    }
}

/// A decoded edit-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEditSubmission {
    pub intent: PostEditIntent,
    pub fields: PostFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Redirect { location: &'static str },
    Invalid { errors: PostFieldErrors },
}

impl SubmitOutcome {
    pub(crate) fn to_listing() -> Self {
        Self::Redirect {
            location: ADMIN_POSTS_ROUTE,
        }
    }
}
