use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    application::{
        admin::posts::{AdminPostError, SubmitOutcome},
        error::ErrorReport,
    },
    domain::posts::{PostField, PostFieldErrors, PostFields},
    infra::http::admin::AdminState,
    presentation::{admin::views as admin_views, views::render_template_response},
};

use super::{
    editor::{
        SLUG_TAKEN_MESSAGE, build_new_post_editor_view, build_post_editor_view,
        build_post_list_view,
    },
    errors::{admin_post_error, form_decode_error},
    forms::{decode_edit_form, decode_post_fields},
};

type FormPairs = Form<Vec<(String, String)>>;

pub(crate) async fn admin_posts(State(state): State<AdminState>) -> Response {
    match state.posts.list_posts().await {
        Ok(posts) => {
            let content = build_post_list_view(&posts);
            let view = admin_views::AdminLayout::new("Posts", content);
            render_template_response(admin_views::AdminPostsTemplate { view }, StatusCode::OK)
        }
        Err(err) => admin_post_error("infra::http::admin_posts", err).into_response(),
    }
}

pub(crate) async fn admin_post_new() -> Response {
    let content = build_new_post_editor_view(&PostFields::default(), &PostFieldErrors::default());
    render_editor(content, StatusCode::OK)
}

pub(crate) async fn admin_post_create(
    State(state): State<AdminState>,
    Form(pairs): FormPairs,
) -> Response {
    const SOURCE: &str = "infra::http::admin_post_create";

    let fields = match decode_post_fields(pairs) {
        Ok(fields) => fields,
        Err(err) => return form_decode_error(SOURCE, &err).into_response(),
    };

    match state.posts.create_post(fields.clone()).await {
        Ok(SubmitOutcome::Redirect { location }) => Redirect::to(location).into_response(),
        Ok(SubmitOutcome::Invalid { errors }) => {
            let content = build_new_post_editor_view(&fields, &errors);
            rejected_editor(SOURCE, content, StatusCode::UNPROCESSABLE_ENTITY, "missing fields")
        }
        Err(AdminPostError::Conflict { slug }) => {
            let mut errors = PostFieldErrors::default();
            errors.set(PostField::Slug, SLUG_TAKEN_MESSAGE);
            let content = build_new_post_editor_view(&fields, &errors);
            rejected_editor(
                SOURCE,
                content,
                StatusCode::CONFLICT,
                format!("post `{slug}` already exists"),
            )
        }
        Err(err) => admin_post_error(SOURCE, err).into_response(),
    }
}

pub(crate) async fn admin_post_edit(
    State(state): State<AdminState>,
    Path(slug): Path<String>,
) -> Response {
    let post = match state.posts.load(Some(&slug)).await {
        Ok(post) => post,
        Err(err) => return admin_post_error("infra::http::admin_post_edit", err).into_response(),
    };

    let fields = PostFields {
        title: post.title,
        slug: post.slug,
        markdown: post.markdown,
    };
    let content = build_post_editor_view(&slug, &fields, &PostFieldErrors::default());
    render_editor(content, StatusCode::OK)
}

/// Edit-form submission. The slug in the form body selects the post; the
/// path slug only decides where a re-rendered form posts back to.
pub(crate) async fn admin_post_submit(
    State(state): State<AdminState>,
    Path(current_slug): Path<String>,
    Form(pairs): FormPairs,
) -> Response {
    const SOURCE: &str = "infra::http::admin_post_submit";

    let submission = match decode_edit_form(pairs) {
        Ok(submission) => submission,
        Err(err) => return form_decode_error(SOURCE, &err).into_response(),
    };
    let fields = submission.fields.clone();

    match state.posts.submit(submission).await {
        Ok(SubmitOutcome::Redirect { location }) => Redirect::to(location).into_response(),
        Ok(SubmitOutcome::Invalid { errors }) => {
            let content = build_post_editor_view(&current_slug, &fields, &errors);
            rejected_editor(SOURCE, content, StatusCode::UNPROCESSABLE_ENTITY, "missing fields")
        }
        Err(err) => admin_post_error(SOURCE, err).into_response(),
    }
}

fn render_editor(content: admin_views::AdminPostEditorView, status: StatusCode) -> Response {
    let view = admin_views::AdminLayout::new(content.heading.clone(), content);
    render_template_response(admin_views::AdminPostEditTemplate { view }, status)
}

fn rejected_editor(
    source: &'static str,
    content: admin_views::AdminPostEditorView,
    status: StatusCode,
    detail: impl Into<String>,
) -> Response {
    let mut response = render_editor(content, status);
    if response.status() == status {
        ErrorReport::from_message(source, status, detail).attach(&mut response);
    }
    response
}
