// src/infrastructure/repositories/in_memory_article.rs
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use indexmap::IndexMap;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::domain::article::{Article, ArticleId, ArticleIdValue, ArticleRepository, IdStrategy};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct State {
    articles: IndexMap<ArticleIdValue, Article>,
    last_issued: i64,
    issued_uuids: HashSet<String>,
}

impl State {
    fn upsert(&mut self, article: Article) -> bool {
        let key = article.id().value().clone();
        self.articles.insert(key, article).is_some()
    }

    fn largest_integer_id(&self) -> i64 {
        self.articles
            .keys()
            .filter_map(|key| match key {
                ArticleIdValue::Integer(value) => Some(*value),
                ArticleIdValue::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

/// Process-local article store keyed by the raw id value.
///
/// Entries keep their first insertion position; overwriting an id replaces
/// the article in place. Everything is lost when the repository is dropped.
pub struct InMemoryArticleRepository {
    state: RwLock<State>,
    strategy: IdStrategy,
}

impl InMemoryArticleRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategy(IdStrategy::default())
    }

    #[must_use]
    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self {
            state: RwLock::new(State::default()),
            strategy,
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// # Errors
    ///
    /// [`DomainError::Persistence`] if the lock was poisoned.
    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.articles.len())
    }

    /// # Errors
    ///
    /// [`DomainError::Persistence`] if the lock was poisoned.
    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, State>> {
        self.state.read().map_err(poisoned)
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, State>> {
        self.state.write().map_err(poisoned)
    }

    fn store(&self, article: Article, operation: &'static str) -> DomainResult<()> {
        let id = article.id().to_string();
        let replaced = self.write()?.upsert(article);
        debug!(article_id = %id, replaced, operation, "article stored");
        Ok(())
    }

    fn next_sequential(state: &mut State) -> DomainResult<ArticleId> {
        let floor = state.last_issued.max(state.largest_integer_id());
        let next = floor
            .checked_add(1)
            .ok_or_else(|| DomainError::Persistence("article id sequence exhausted".into()))?;
        state.last_issued = next;
        ArticleId::new(next)
    }

    fn next_uuid(state: &mut State) -> DomainResult<ArticleId> {
        loop {
            let text = Uuid::new_v4().to_string();
            let candidate = ArticleIdValue::Text(text.clone());
            if !state.articles.contains_key(&candidate) && state.issued_uuids.insert(text) {
                return ArticleId::new(candidate);
            }
        }
    }
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Persistence("article store lock poisoned".into())
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn save(&self, article: Article) -> DomainResult<()> {
        self.store(article, "save")
    }

    async fn add(&self, article: Article) -> DomainResult<()> {
        let id = article.id().clone();
        {
            let mut state = self.write()?;
            if state.articles.contains_key(id.value()) {
                return Err(DomainError::Conflict(format!("article {id} already exists")));
            }
            state.upsert(article);
        }
        debug!(article_id = %id, "article added");
        Ok(())
    }

    async fn find(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.read()?.articles.get(id.value()).cloned())
    }

    async fn update(&self, article: Article) -> DomainResult<()> {
        self.store(article, "update")
    }

    async fn replace(&self, article: Article) -> DomainResult<()> {
        let id = article.id().clone();
        {
            let mut state = self.write()?;
            let slot = state
                .articles
                .get_mut(id.value())
                .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;
            *slot = article;
        }
        debug!(article_id = %id, "article replaced");
        Ok(())
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        let removed = self.write()?.articles.shift_remove(id.value()).is_some();
        debug!(article_id = %id, removed, "article deleted");
        Ok(())
    }

    async fn all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.read()?.articles.values().cloned().collect())
    }

    async fn next_id(&self) -> DomainResult<ArticleId> {
        let id = match self.strategy {
            IdStrategy::Sequential => Self::next_sequential(&mut *self.write()?)?,
            IdStrategy::Uuid => Self::next_uuid(&mut *self.write()?)?,
        };
        trace!(article_id = %id, strategy = %self.strategy, "article id issued");
        Ok(id)
    }
}
