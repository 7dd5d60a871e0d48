// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService, queries::articles::ArticleQueryService,
    },
    config::AppConfig,
    domain::article::ArticleRepository,
    infrastructure::repositories::InMemoryArticleRepository,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    article_repo: Arc<dyn ArticleRepository>,
}

impl ApplicationServices {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(&article_repo)));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_repo)));

        Self {
            article_commands,
            article_queries,
            article_repo,
        }
    }

    /// Wire the services over a fresh in-memory store using the configured
    /// id strategy.
    #[must_use]
    pub fn in_memory(config: &AppConfig) -> Self {
        let repo: Arc<dyn ArticleRepository> =
            Arc::new(InMemoryArticleRepository::with_strategy(config.id_strategy()));
        tracing::debug!(id_strategy = %config.id_strategy(), "in-memory article store ready");
        Self::new(repo)
    }

    pub fn article_repo(&self) -> Arc<dyn ArticleRepository> {
        Arc::clone(&self.article_repo)
    }
}
