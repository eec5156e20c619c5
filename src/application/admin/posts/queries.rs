use crate::domain::entities::PostRecord;

use super::service::AdminPostService;
use super::types::AdminPostError;

impl AdminPostService {
    pub async fn list_posts(&self) -> Result<Vec<PostRecord>, AdminPostError> {
        Ok(self.reader.list_posts().await?)
    }

    /// Fetch the post behind an edit form.
    ///
    /// A missing or empty slug is a malformed request, not a lookup miss.
    pub async fn load(&self, slug: Option<&str>) -> Result<PostRecord, AdminPostError> {
        let slug = slug
            .filter(|slug| !slug.is_empty())
            .ok_or_else(|| AdminPostError::invalid_input("slug is required"))?;

        self.reader
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AdminPostError::NotFound {
                slug: slug.to_string(),
            })
    }
}
