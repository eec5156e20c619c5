//! Public reading side: the post index and single post pages.

use std::sync::Arc;

use thiserror::Error;

use crate::application::render::ComrakRenderService;
use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::entities::PostRecord;
use crate::presentation::views::{PostCard, PostDetailContext, PostIndexContext};

#[derive(Clone)]
pub struct FeedService {
    posts: Arc<dyn PostsRepo>,
    renderer: Arc<ComrakRenderService>,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl FeedService {
    pub fn new(posts: Arc<dyn PostsRepo>, renderer: Arc<ComrakRenderService>) -> Self {
        Self { posts, renderer }
    }

    pub async fn index(&self) -> Result<PostIndexContext, FeedError> {
        let posts = self.posts.list_posts().await?;
        Ok(PostIndexContext {
            posts: posts.iter().map(PostCard::from_record).collect(),
        })
    }

    /// Render a single post, or `None` when the slug is unknown.
    pub async fn post_detail(&self, slug: &str) -> Result<Option<PostDetailContext>, FeedError> {
        let Some(post) = self.posts.find_by_slug(slug).await? else {
            return Ok(None);
        };
        Ok(Some(self.build_detail(post)))
    }

    fn build_detail(&self, post: PostRecord) -> PostDetailContext {
        let body_html = self.renderer.render(&post.markdown);
        PostDetailContext {
            slug: post.slug,
            title: post.title,
            body_html,
        }
    }
}
