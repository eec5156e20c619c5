//! Typed decoding of the post editor's urlencoded body.
//!
//! Handlers receive the raw `(name, value)` pairs so that a field sent more
//! than once is rejected instead of silently collapsing to one value.

use thiserror::Error;

use crate::application::admin::posts::{PostEditIntent, PostEditSubmission};
use crate::domain::posts::PostFields;

const SUBMIT_FIELD: &str = "submit";

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum FormDecodeError {
    #[error("form field `{field}` was submitted more than once")]
    MultiValued { field: String },
}

#[derive(Debug, Default)]
struct RawPostForm {
    submit: Option<String>,
    title: Option<String>,
    slug: Option<String>,
    markdown: Option<String>,
}

impl RawPostForm {
    fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, FormDecodeError> {
        let mut form = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                SUBMIT_FIELD => &mut form.submit,
                "title" => &mut form.title,
                "slug" => &mut form.slug,
                "markdown" => &mut form.markdown,
                _ => continue,
            };
            if slot.is_some() {
                return Err(FormDecodeError::MultiValued { field: name });
            }
            *slot = Some(value);
        }
        Ok(form)
    }

    fn into_fields(self) -> PostFields {
        PostFields {
            title: self.title.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            markdown: self.markdown.unwrap_or_default(),
        }
    }
}

/// Decode an edit-form submission. Absent fields decode as empty strings.
pub(crate) fn decode_edit_form(
    pairs: Vec<(String, String)>,
) -> Result<PostEditSubmission, FormDecodeError> {
    let mut form = RawPostForm::from_pairs(pairs)?;
    let intent = PostEditIntent::from_submit_value(form.submit.take().as_deref());
    Ok(PostEditSubmission {
        intent,
        fields: form.into_fields(),
    })
}

/// Decode the new-post form; the submit button value carries no meaning here.
pub(crate) fn decode_post_fields(
    pairs: Vec<(String, String)>,
) -> Result<PostFields, FormDecodeError> {
    RawPostForm::from_pairs(pairs).map(RawPostForm::into_fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn delete_button_selects_delete_intent() {
        let submission = decode_edit_form(pairs(&[
            ("submit", "delete"),
            ("slug", "hello"),
            ("title", "Hello"),
        ]))
        .expect("decodes");

        assert_eq!(submission.intent, PostEditIntent::Delete);
        assert_eq!(submission.fields.slug, "hello");
        assert_eq!(submission.fields.markdown, "");
    }

    #[test]
    fn any_other_submit_value_updates() {
        for value in ["update", "save", "DELETE", ""] {
            let submission =
                decode_edit_form(pairs(&[("submit", value)])).expect("decodes");
            assert_eq!(submission.intent, PostEditIntent::Update, "{value}");
        }

        let submission = decode_edit_form(pairs(&[("slug", "x")])).expect("decodes");
        assert_eq!(submission.intent, PostEditIntent::Update);
    }

    #[test]
    fn repeated_field_is_rejected() {
        let err = decode_edit_form(pairs(&[("slug", "a"), ("slug", "b")]))
            .expect_err("multi-valued slug");
        assert_eq!(
            err,
            FormDecodeError::MultiValued {
                field: "slug".into()
            }
        );

        let err = decode_post_fields(pairs(&[("submit", "create"), ("submit", "create")]))
            .expect_err("multi-valued submit");
        assert_eq!(err.to_string(), "form field `submit` was submitted more than once");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let fields = decode_post_fields(pairs(&[
            ("title", "T"),
            ("csrf", "1"),
            ("csrf", "2"),
            ("markdown", "  body  "),
        ]))
        .expect("decodes");

        assert_eq!(
            fields,
            PostFields {
                title: "T".into(),
                slug: String::new(),
                markdown: "  body  ".into(),
            }
        );
    }
}
