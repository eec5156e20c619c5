use crate::application::admin::posts::ADMIN_POSTS_ROUTE;
use crate::domain::entities::PostRecord;
use crate::domain::posts::{PostField, PostFieldErrors, PostFields};
use crate::presentation::admin::views as admin_views;
use crate::presentation::views::slug_path;

pub(super) const SLUG_TAKEN_MESSAGE: &str = "A post with this slug already exists";

pub(super) fn build_post_list_view(posts: &[PostRecord]) -> admin_views::AdminPostListView {
    admin_views::AdminPostListView {
        heading: "Posts".to_string(),
        posts: posts
            .iter()
            .map(|post| admin_views::AdminPostRowView {
                slug: post.slug.clone(),
                title: post.title.clone(),
                updated_at: admin_views::format_timestamp(post.updated_at),
                edit_href: slug_path(ADMIN_POSTS_ROUTE, &post.slug),
                public_href: slug_path("/posts", &post.slug),
            })
            .collect(),
        new_post_href: format!("{ADMIN_POSTS_ROUTE}/new"),
    }
}

/// Editor for an existing post. `current_slug` is the slug in the page URL,
/// which the form posts back to.
pub(super) fn build_post_editor_view(
    current_slug: &str,
    fields: &PostFields,
    errors: &PostFieldErrors,
) -> admin_views::AdminPostEditorView {
    admin_views::AdminPostEditorView {
        heading: format!("Edit post: {current_slug}"),
        form_action: slug_path(ADMIN_POSTS_ROUTE, current_slug),
        fields: field_views(fields, errors),
        is_new: false,
        cancel_href: ADMIN_POSTS_ROUTE.to_string(),
    }
}

pub(super) fn build_new_post_editor_view(
    fields: &PostFields,
    errors: &PostFieldErrors,
) -> admin_views::AdminPostEditorView {
    admin_views::AdminPostEditorView {
        heading: "New post".to_string(),
        form_action: format!("{ADMIN_POSTS_ROUTE}/new"),
        fields: field_views(fields, errors),
        is_new: true,
        cancel_href: ADMIN_POSTS_ROUTE.to_string(),
    }
}

fn field_views(
    fields: &PostFields,
    errors: &PostFieldErrors,
) -> Vec<admin_views::AdminPostFieldView> {
    PostField::ALL
        .into_iter()
        .map(|field| admin_views::AdminPostFieldView {
            name: field.name(),
            label: field.label(),
            value: fields.value(field).to_string(),
            error: errors.get(field).map(str::to_string),
            multiline: field == PostField::Markdown,
        })
        .collect()
}
