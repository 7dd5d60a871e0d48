use crate::domain::article::{Article, ArticleIdValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: ArticleIdValue,
    pub title: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let (id, title) = article.into_parts();
        Self {
            id: id.into_value(),
            title,
        }
    }
}
