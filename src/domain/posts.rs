//! Post form fields and the required-field rules applied to every write.
//!
//! A submission is kept as raw strings until [`PostFields::validate`] turns it
//! into a [`PostDraft`]. Validation never touches persistence: it either yields
//! a draft that is safe to write or a [`PostFieldErrors`] mapping that the form
//! renders back to the author.

use serde::Serialize;

/// The editable fields of a post, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    Slug,
    Markdown,
}

impl PostField {
    pub const ALL: [PostField; 3] = [PostField::Title, PostField::Slug, PostField::Markdown];

    /// Form field name.
    pub fn name(self) -> &'static str {
        match self {
            PostField::Title => "title",
            PostField::Slug => "slug",
            PostField::Markdown => "markdown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostField::Title => "Title",
            PostField::Slug => "Slug",
            PostField::Markdown => "Markdown",
        }
    }

    pub fn required_message(self) -> String {
        format!("{} is required", self.label())
    }
}

/// Post fields exactly as submitted; any of them may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub slug: String,
    pub markdown: String,
}

/// Per-field error messages. `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostFieldErrors {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub markdown: Option<String>,
}

/// A post whose required fields are all present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

impl PostFields {
    pub fn value(&self, field: PostField) -> &str {
        match field {
            PostField::Title => &self.title,
            PostField::Slug => &self.slug,
            PostField::Markdown => &self.markdown,
        }
    }

    /// Check every required field, collecting one message per empty field.
    ///
    /// Values are kept exactly as submitted.
    pub fn validate(self) -> Result<PostDraft, PostFieldErrors> {
        let mut errors = PostFieldErrors::default();
        for field in PostField::ALL {
            if self.value(field).is_empty() {
                errors.set(field, field.required_message());
            }
        }

        if errors.has_errors() {
            return Err(errors);
        }

        Ok(PostDraft {
            slug: self.slug,
            title: self.title,
            markdown: self.markdown,
        })
    }
}

impl PostFieldErrors {
    pub fn get(&self, field: PostField) -> Option<&str> {
        match field {
            PostField::Title => self.title.as_deref(),
            PostField::Slug => self.slug.as_deref(),
            PostField::Markdown => self.markdown.as_deref(),
        }
    }

    pub fn set(&mut self, field: PostField, message: impl Into<String>) {
        let slot = match field {
            PostField::Title => &mut self.title,
            PostField::Slug => &mut self.slug,
            PostField::Markdown => &mut self.markdown,
        };
        *slot = Some(message.into());
    }

    pub fn has_errors(&self) -> bool {
        PostField::ALL.iter().any(|field| self.get(*field).is_some())
    }
}

impl From<PostDraft> for PostFields {
    fn from(draft: PostDraft) -> Self {
        Self {
            title: draft.title,
            slug: draft.slug,
            markdown: draft.markdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, slug: &str, markdown: &str) -> PostFields {
        PostFields {
            title: title.to_string(),
            slug: slug.to_string(),
            markdown: markdown.to_string(),
        }
    }

    #[test]
    fn complete_fields_produce_a_draft() {
        let draft = fields("Hello", "hello", "# Hi").validate().expect("valid");
        assert_eq!(
            draft,
            PostDraft {
                slug: "hello".into(),
                title: "Hello".into(),
                markdown: "# Hi".into(),
            }
        );
    }

    #[test]
    fn each_blank_field_gets_its_own_message() {
        let errors = fields("", "hello", "").validate().expect_err("invalid");
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.slug, None);
        assert_eq!(errors.markdown.as_deref(), Some("Markdown is required"));
    }

    #[test]
    fn whitespace_only_values_are_present() {
        let draft = fields("   ", "hello", "\n").validate().expect("valid");
        assert_eq!(draft.title, "   ");
        assert_eq!(draft.markdown, "\n");
    }

    #[test]
    fn submitted_values_are_kept_verbatim() {
        let draft = fields("  Hello ", " hello\t", "  indented\n")
            .validate()
            .expect("valid");
        assert_eq!(draft.title, "  Hello ");
        assert_eq!(draft.slug, " hello\t");
        assert_eq!(draft.markdown, "  indented\n");
    }

    #[test]
    fn errors_serialize_with_nulls() {
        let errors = fields("", "x", "y").validate().expect_err("invalid");
        let json = serde_json::to_string(&errors).expect("serialize");
        insta::assert_snapshot!(json, @r#"{"title":"Title is required","slug":null,"markdown":null}"#);
    }
}
