use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// # Errors
    ///
    /// Repository failures only.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.repo.all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
