use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use crate::{
    application::{error::HttpError, feed::FeedService},
    presentation::views::{
        LayoutContext, PostIndexTemplate, PostTemplate, render_not_found_response,
        render_template_response,
    },
};

#[derive(Clone)]
pub struct HttpState {
    pub feed: Arc<FeedService>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/posts", get(index))
        .route("/posts/{slug}", get(post_detail))
        .fallback(fallback)
        .with_state(state)
}

async fn home() -> Redirect {
    Redirect::to("/posts")
}

async fn index(State(state): State<HttpState>) -> Response {
    match state.feed.index().await {
        Ok(content) => {
            let view = LayoutContext::new(content);
            render_template_response(PostIndexTemplate { view }, StatusCode::OK)
        }
        Err(err) => HttpError::from(err).into_response(),
    }
}

async fn post_detail(State(state): State<HttpState>, Path(slug): Path<String>) -> Response {
    match state.feed.post_detail(&slug).await {
        Ok(Some(content)) => {
            let view = LayoutContext::new(content);
            render_template_response(PostTemplate { view }, StatusCode::OK)
        }
        Ok(None) => render_not_found_response(),
        Err(err) => HttpError::from(err).into_response(),
    }
}

async fn fallback() -> Response {
    render_not_found_response()
}
