// tests/support/builders.rs
use std::sync::Arc;

use article_core::application::services::ApplicationServices;
use article_core::domain::article::*;
use article_core::infrastructure::repositories::InMemoryArticleRepository;

pub struct ArticleBuilder {
    id: ArticleIdValue,
    title: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: ArticleIdValue::Integer(1),
            title: "Test Article".into(),
        }
    }

    pub fn id(mut self, id: impl Into<ArticleIdValue>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn build(self) -> Article {
        Article::new(ArticleId::new(self.id).unwrap(), self.title)
    }
}

pub fn article_id(raw: impl Into<ArticleIdValue>) -> ArticleId {
    ArticleId::new(raw).unwrap()
}

/// Services over a fresh in-memory store, plus a handle on that store.
pub fn in_memory_services(
    strategy: IdStrategy,
) -> (ApplicationServices, Arc<dyn ArticleRepository>) {
    let repo: Arc<dyn ArticleRepository> =
        Arc::new(InMemoryArticleRepository::with_strategy(strategy));
    (ApplicationServices::new(Arc::clone(&repo)), repo)
}
