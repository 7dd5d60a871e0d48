use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{Article, ArticleId, ArticleIdValue},
};

pub struct UpdateArticleCommand {
    pub id: ArticleIdValue,
    pub title: String,
}

impl ArticleCommandService {
    /// Retitle an existing article.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::NotFound`](crate::application::error::ApplicationError::NotFound)
    /// when no article has the id. The repository's plain `update` would
    /// insert; this use case does not.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let updated = Article::new(id, command.title);
        self.repo.replace(updated.clone()).await?;
        tracing::info!(article_id = %updated.id(), "article updated");
        Ok(updated.into())
    }
}
