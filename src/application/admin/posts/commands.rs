use tracing::{debug, info};

use crate::application::repos::{CreatePostParams, UpdatePostParams};
use crate::domain::posts::{PostDraft, PostFields};

use super::service::AdminPostService;
use super::types::{AdminPostError, PostEditIntent, PostEditSubmission, SubmitOutcome};

impl AdminPostService {
    /// Handle an edit-form submission.
    ///
    /// Exactly one write reaches the store for a delete or a valid update; a
    /// submission with empty fields is answered with the error mapping and
    /// writes nothing.
    pub async fn submit(
        &self,
        submission: PostEditSubmission,
    ) -> Result<SubmitOutcome, AdminPostError> {
        match submission.intent {
            PostEditIntent::Delete => self.delete_post(&submission.fields.slug).await,
            PostEditIntent::Update => self.update_post(submission.fields).await,
        }
    }

    pub async fn create_post(&self, fields: PostFields) -> Result<SubmitOutcome, AdminPostError> {
        let PostDraft {
            slug,
            title,
            markdown,
        } = match fields.validate() {
            Ok(draft) => draft,
            Err(errors) => {
                debug!(
                    target = "postdesk::admin::posts",
                    ?errors,
                    "rejected new post with missing fields"
                );
                return Ok(SubmitOutcome::Invalid { errors });
            }
        };

        let params = CreatePostParams {
            slug: slug.clone(),
            title,
            markdown,
        };
        let post = self
            .writer
            .create_post(params)
            .await
            .map_err(|err| AdminPostError::from_repo(&slug, err))?;

        info!(
            target = "postdesk::admin::posts",
            slug = %post.slug,
            "post created"
        );
        Ok(SubmitOutcome::to_listing())
    }

    async fn update_post(&self, fields: PostFields) -> Result<SubmitOutcome, AdminPostError> {
        let PostDraft {
            slug,
            title,
            markdown,
        } = match fields.validate() {
            Ok(draft) => draft,
            Err(errors) => {
                debug!(
                    target = "postdesk::admin::posts",
                    ?errors,
                    "rejected post update with missing fields"
                );
                return Ok(SubmitOutcome::Invalid { errors });
            }
        };

        // The submitted slug is both the row selector and part of the payload.
        let params = UpdatePostParams {
            slug: slug.clone(),
            title,
            markdown,
        };
        let post = self
            .writer
            .update_post(params)
            .await
            .map_err(|err| AdminPostError::from_repo(&slug, err))?;

        info!(
            target = "postdesk::admin::posts",
            slug = %post.slug,
            "post updated"
        );
        Ok(SubmitOutcome::to_listing())
    }

    async fn delete_post(&self, slug: &str) -> Result<SubmitOutcome, AdminPostError> {
        if slug.is_empty() {
            return Err(AdminPostError::invalid_input("slug is required"));
        }

        self.writer
            .delete_post(slug)
            .await
            .map_err(|err| AdminPostError::from_repo(slug, err))?;

        info!(target = "postdesk::admin::posts", slug, "post deleted");
        Ok(SubmitOutcome::to_listing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use time::OffsetDateTime;

    use crate::application::admin::posts::ADMIN_POSTS_ROUTE;
    use crate::application::repos::{PostsRepo, PostsWriteRepo, RepoError};
    use crate::domain::entities::PostRecord;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(String),
        Update(String, String, String),
        Delete(String),
    }

    #[derive(Default)]
    struct RecordingWriter {
        calls: Mutex<Vec<Call>>,
        missing: bool,
        duplicate: bool,
    }

    impl RecordingWriter {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn record(slug: &str, title: &str, markdown: &str) -> PostRecord {
        PostRecord {
            slug: slug.into(),
            title: title.into(),
            markdown: markdown.into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[async_trait]
    impl PostsWriteRepo for RecordingWriter {
        async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Create(params.slug.clone()));
            if self.duplicate {
                return Err(RepoError::Duplicate {
                    constraint: "posts_pkey".into(),
                });
            }
            Ok(record(&params.slug, &params.title, &params.markdown))
        }

        async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError> {
            self.calls.lock().unwrap().push(Call::Update(
                params.slug.clone(),
                params.title.clone(),
                params.markdown.clone(),
            ));
            if self.missing {
                return Err(RepoError::NotFound);
            }
            Ok(record(&params.slug, &params.title, &params.markdown))
        }

        async fn delete_post(&self, slug: &str) -> Result<(), RepoError> {
            self.calls.lock().unwrap().push(Call::Delete(slug.into()));
            if self.missing {
                return Err(RepoError::NotFound);
            }
            Ok(())
        }
    }

    struct EmptyReader;

    #[async_trait]
    impl PostsRepo for EmptyReader {
        async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
            Ok(Vec::new())
        }

        async fn find_by_slug(&self, _slug: &str) -> Result<Option<PostRecord>, RepoError> {
            Ok(None)
        }
    }

    fn service(writer: Arc<RecordingWriter>) -> AdminPostService {
        AdminPostService::new(Arc::new(EmptyReader), writer)
    }

    fn submission(
        intent: PostEditIntent,
        title: &str,
        slug: &str,
        markdown: &str,
    ) -> PostEditSubmission {
        PostEditSubmission {
            intent,
            fields: PostFields {
                title: title.into(),
                slug: slug.into(),
                markdown: markdown.into(),
            },
        }
    }

    #[tokio::test]
    async fn delete_intent_issues_a_single_delete() {
        let writer = Arc::new(RecordingWriter::default());
        let outcome = service(writer.clone())
            .submit(submission(PostEditIntent::Delete, "", "hello", ""))
            .await
            .expect("delete succeeds");

        assert_eq!(
            outcome,
            SubmitOutcome::Redirect {
                location: ADMIN_POSTS_ROUTE
            }
        );
        assert_eq!(writer.calls(), vec![Call::Delete("hello".into())]);
    }

    #[tokio::test]
    async fn delete_of_unknown_slug_reports_not_found() {
        let writer = Arc::new(RecordingWriter {
            missing: true,
            ..Default::default()
        });
        let err = service(writer)
            .submit(submission(PostEditIntent::Delete, "", "ghost", ""))
            .await
            .expect_err("missing post");

        assert!(matches!(err, AdminPostError::NotFound { slug } if slug == "ghost"));
    }

    #[tokio::test]
    async fn delete_without_slug_never_reaches_the_store() {
        let writer = Arc::new(RecordingWriter::default());
        let err = service(writer.clone())
            .submit(submission(PostEditIntent::Delete, "Title", "", "body"))
            .await
            .expect_err("empty slug");

        assert!(matches!(err, AdminPostError::InvalidInput { .. }));
        assert!(writer.calls().is_empty());
    }

    #[tokio::test]
    async fn update_with_empty_fields_returns_errors_without_writing() {
        let writer = Arc::new(RecordingWriter::default());
        let outcome = service(writer.clone())
            .submit(submission(PostEditIntent::Update, "", "hello", ""))
            .await
            .expect("validation is not an error");

        let SubmitOutcome::Invalid { errors } = outcome else {
            panic!("expected field errors, got {outcome:?}");
        };
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.slug, None);
        assert_eq!(errors.markdown.as_deref(), Some("Markdown is required"));
        assert!(writer.calls().is_empty());
    }

    #[tokio::test]
    async fn update_with_all_fields_writes_once_and_redirects() {
        let writer = Arc::new(RecordingWriter::default());
        let outcome = service(writer.clone())
            .submit(submission(PostEditIntent::Update, " New ", "hello", " "))
            .await
            .expect("update succeeds");

        assert_eq!(outcome, SubmitOutcome::to_listing());
        assert_eq!(
            writer.calls(),
            vec![Call::Update("hello".into(), " New ".into(), " ".into())]
        );
    }

    #[tokio::test]
    async fn update_of_unknown_slug_reports_not_found() {
        let writer = Arc::new(RecordingWriter {
            missing: true,
            ..Default::default()
        });
        let err = service(writer)
            .submit(submission(PostEditIntent::Update, "T", "renamed", "M"))
            .await
            .expect_err("missing post");

        assert!(matches!(err, AdminPostError::NotFound { slug } if slug == "renamed"));
    }

    #[tokio::test]
    async fn create_with_taken_slug_is_a_conflict() {
        let writer = Arc::new(RecordingWriter {
            duplicate: true,
            ..Default::default()
        });
        let err = service(writer.clone())
            .create_post(PostFields {
                title: "T".into(),
                slug: "taken".into(),
                markdown: "M".into(),
            })
            .await
            .expect_err("duplicate slug");

        assert!(matches!(err, AdminPostError::Conflict { slug } if slug == "taken"));
        assert_eq!(writer.calls(), vec![Call::Create("taken".into())]);
    }

    #[tokio::test]
    async fn load_requires_a_slug() {
        let svc = service(Arc::new(RecordingWriter::default()));
        assert!(matches!(
            svc.load(None).await,
            Err(AdminPostError::InvalidInput { .. })
        ));
        assert!(matches!(
            svc.load(Some("")).await,
            Err(AdminPostError::InvalidInput { .. })
        ));
        assert!(matches!(
            svc.load(Some("  ")).await,
            Err(AdminPostError::NotFound { slug }) if slug == "  "
        ));
        assert!(matches!(
            svc.load(Some("nope")).await,
            Err(AdminPostError::NotFound { slug }) if slug == "nope"
        ));
    }
}
