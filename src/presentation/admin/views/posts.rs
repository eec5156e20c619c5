use askama::Template;

use super::AdminLayout;

#[derive(Clone)]
pub struct AdminPostRowView {
    pub slug: String,
    pub title: String,
    pub updated_at: Option<String>,
    pub edit_href: String,
    pub public_href: String,
}

#[derive(Clone)]
pub struct AdminPostListView {
    pub heading: String,
    pub posts: Vec<AdminPostRowView>,
    pub new_post_href: String,
}

impl AdminPostListView {
    pub fn has_posts(&self) -> bool {
        !self.posts.is_empty()
    }
}

#[derive(Clone)]
pub struct AdminPostFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub multiline: bool,
}

#[derive(Clone)]
pub struct AdminPostEditorView {
    pub heading: String,
    pub form_action: String,
    pub fields: Vec<AdminPostFieldView>,
    /// New posts get a single create button; existing ones get update and delete.
    pub is_new: bool,
    pub cancel_href: String,
}

#[derive(Template)]
#[template(path = "admin/posts.html")]
pub struct AdminPostsTemplate {
    pub view: AdminLayout<AdminPostListView>,
}

#[derive(Template)]
#[template(path = "admin/post_edit.html")]
pub struct AdminPostEditTemplate {
    pub view: AdminLayout<AdminPostEditorView>,
}
