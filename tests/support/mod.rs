#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use time::OffsetDateTime;
use tower::ServiceExt;
use url::form_urlencoded::Serializer;

use postdesk::application::admin::posts::AdminPostService;
use postdesk::application::feed::FeedService;
use postdesk::application::render::render_service;
use postdesk::application::repos::{
    CreatePostParams, HealthRepo, PostsRepo, PostsWriteRepo, RepoError, UpdatePostParams,
};
use postdesk::domain::entities::PostRecord;
use postdesk::infra::http::{AdminState, HttpState, build_app};

/// Store calls observed by [`MemoryPosts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Create(String),
    Update(String),
    Delete(String),
}

/// In-memory posts store honouring the same contract as the Postgres one.
#[derive(Default)]
pub struct MemoryPosts {
    posts: Mutex<BTreeMap<String, PostRecord>>,
    writes: Mutex<Vec<StoreCall>>,
    unhealthy: bool,
}

impl MemoryPosts {
    pub fn unhealthy() -> Self {
        Self {
            unhealthy: true,
            ..Self::default()
        }
    }

    pub fn with_post(self, slug: &str, title: &str, markdown: &str) -> Self {
        let now = OffsetDateTime::now_utc();
        self.posts.lock().unwrap().insert(
            slug.to_string(),
            PostRecord {
                slug: slug.to_string(),
                title: title.to_string(),
                markdown: markdown.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
        self
    }

    pub fn get(&self, slug: &str) -> Option<PostRecord> {
        self.posts.lock().unwrap().get(slug).cloned()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn writes(&self) -> Vec<StoreCall> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostsRepo for MemoryPosts {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
        Ok(self.posts.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        Ok(self.get(slug))
    }
}

#[async_trait]
impl PostsWriteRepo for MemoryPosts {
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
        self.writes
            .lock()
            .unwrap()
            .push(StoreCall::Create(params.slug.clone()));
        let mut posts = self.posts.lock().unwrap();
        if posts.contains_key(&params.slug) {
            return Err(RepoError::Duplicate {
                constraint: "posts_pkey".into(),
            });
        }
        let now = OffsetDateTime::now_utc();
        let record = PostRecord {
            slug: params.slug.clone(),
            title: params.title,
            markdown: params.markdown,
            created_at: now,
            updated_at: now,
        };
        posts.insert(params.slug, record.clone());
        Ok(record)
    }

    async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError> {
        self.writes
            .lock()
            .unwrap()
            .push(StoreCall::Update(params.slug.clone()));
        let mut posts = self.posts.lock().unwrap();
        let record = posts.get_mut(&params.slug).ok_or(RepoError::NotFound)?;
        record.title = params.title;
        record.markdown = params.markdown;
        record.updated_at = OffsetDateTime::now_utc();
        Ok(record.clone())
    }

    async fn delete_post(&self, slug: &str) -> Result<(), RepoError> {
        self.writes
            .lock()
            .unwrap()
            .push(StoreCall::Delete(slug.to_string()));
        self.posts
            .lock()
            .unwrap()
            .remove(slug)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl HealthRepo for MemoryPosts {
    async fn health_check(&self) -> Result<(), RepoError> {
        if self.unhealthy {
            return Err(RepoError::Timeout);
        }
        Ok(())
    }
}

/// The full application router backed by `store`.
pub fn app(store: Arc<MemoryPosts>) -> Router {
    let feed = Arc::new(FeedService::new(store.clone(), render_service()));
    let posts = Arc::new(AdminPostService::new(store.clone(), store.clone()));
    build_app(
        HttpState { feed },
        AdminState {
            posts,
            health: store,
        },
    )
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST an urlencoded form built from `fields`, in order.
pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = Serializer::new(String::new())
        .extend_pairs(fields.iter().copied())
        .finish();

    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_to_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
