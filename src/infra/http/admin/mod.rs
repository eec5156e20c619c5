mod health;
mod posts;
mod state;

pub use state::AdminState;

use axum::{Router, routing::get};

pub fn build_admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/posts/admin", get(posts::admin_posts))
        .route(
            "/posts/admin/new",
            get(posts::admin_post_new).post(posts::admin_post_create),
        )
        .route(
            "/posts/admin/{slug}",
            get(posts::admin_post_edit).post(posts::admin_post_submit),
        )
        .route("/_health/db", get(health::admin_health))
        .with_state(state)
}
