use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage contract for articles.
///
/// Absence is not an error: `find` answers `Ok(None)` for an unknown id and
/// `delete` of an unknown id succeeds. `save` and `update` both insert or
/// replace the entry for the article's id (last write wins). Returned
/// articles are owned copies; mutating them never touches the store.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn save(&self, article: Article) -> DomainResult<()>;
    /// Insert only if the id is free, checked and written in one step.
    ///
    /// Fails with `DomainError::Conflict` when the id is already stored.
    async fn add(&self, article: Article) -> DomainResult<()>;
    async fn find(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
    async fn update(&self, article: Article) -> DomainResult<()>;
    /// Overwrite only if the id is stored, checked and written in one step.
    ///
    /// Fails with `DomainError::NotFound` when the id is absent.
    async fn replace(&self, article: Article) -> DomainResult<()>;
    async fn delete(&self, id: &ArticleId) -> DomainResult<()>;
    /// Every stored article, in the store's iteration order.
    async fn all(&self) -> DomainResult<Vec<Article>>;
    /// A valid id not held by any stored article and not issued before by
    /// this repository.
    async fn next_id(&self) -> DomainResult<ArticleId>;
}
