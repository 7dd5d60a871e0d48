// tests/support/yielding.rs
use std::sync::Arc;

use async_trait::async_trait;

use article_core::domain::article::{Article, ArticleId, ArticleRepository};
use article_core::domain::errors::DomainResult;

/// Wraps a repository and yields to the scheduler before every call, the
/// way an adapter doing real I/O would suspend.
pub struct YieldingArticleRepo {
    inner: Arc<dyn ArticleRepository>,
}

impl YieldingArticleRepo {
    pub fn new(inner: Arc<dyn ArticleRepository>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ArticleRepository for YieldingArticleRepo {
    async fn save(&self, article: Article) -> DomainResult<()> {
        tokio::task::yield_now().await;
        self.inner.save(article).await
    }

    async fn add(&self, article: Article) -> DomainResult<()> {
        tokio::task::yield_now().await;
        self.inner.add(article).await
    }

    async fn find(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        tokio::task::yield_now().await;
        self.inner.find(id).await
    }

    async fn update(&self, article: Article) -> DomainResult<()> {
        tokio::task::yield_now().await;
        self.inner.update(article).await
    }

    async fn replace(&self, article: Article) -> DomainResult<()> {
        tokio::task::yield_now().await;
        self.inner.replace(article).await
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        tokio::task::yield_now().await;
        self.inner.delete(id).await
    }

    async fn all(&self) -> DomainResult<Vec<Article>> {
        tokio::task::yield_now().await;
        self.inner.all().await
    }

    async fn next_id(&self) -> DomainResult<ArticleId> {
        tokio::task::yield_now().await;
        self.inner.next_id().await
    }
}
