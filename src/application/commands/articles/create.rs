// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::ApplicationResult,
    },
    domain::article::{Article, ArticleId, ArticleIdValue},
};

/// Create an article; without an `id` the repository mints one.
pub struct CreateArticleCommand {
    pub id: Option<ArticleIdValue>,
    pub title: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    id: Option<ArticleIdValue>,
    title: Option<String>,
}

impl CreateArticleCommandBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<ArticleIdValue>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// # Errors
    ///
    /// Fails when no title was given.
    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            id: self.id,
            title: self.title.ok_or("title is required")?,
        })
    }
}

impl ArticleCommandService {
    /// # Errors
    ///
    /// Identifier validation errors,
    /// [`ApplicationError::Conflict`](crate::application::error::ApplicationError::Conflict) when an
    /// article already uses the requested id, and repository failures.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = match command.id {
            Some(raw) => ArticleId::new(raw)?,
            None => self.repo.next_id().await?,
        };

        let article = Article::new(id, command.title);
        self.repo.add(article.clone()).await?;
        tracing::info!(article_id = %article.id(), "article created");
        Ok(article.into())
    }
}
