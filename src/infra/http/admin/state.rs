use std::sync::Arc;

use crate::application::{admin::posts::AdminPostService, repos::HealthRepo};

#[derive(Clone)]
pub struct AdminState {
    pub posts: Arc<AdminPostService>,
    pub health: Arc<dyn HealthRepo>,
}
