mod editor;
mod errors;
mod forms;
mod handlers;

pub(super) use handlers::{
    admin_post_create, admin_post_edit, admin_post_new, admin_post_submit, admin_posts,
};
