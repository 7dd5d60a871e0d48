use crate::domain::article::value_objects::ArticleId;

/// A stored piece of content. Both fields are fixed at construction; a
/// changed title is a new `Article` built with [`Article::with_title`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    title: String,
}

impl Article {
    pub fn new(id: ArticleId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ArticleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self::new(self.id, title)
    }

    #[must_use]
    pub fn into_parts(self) -> (ArticleId, String) {
        (self.id, self.title)
    }
}
