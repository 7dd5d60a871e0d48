// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{ArticleId, ArticleIdValue},
};

pub struct DeleteArticleCommand {
    pub id: ArticleIdValue,
}

impl ArticleCommandService {
    /// Deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Identifier validation errors and repository failures.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.repo.delete(&id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
