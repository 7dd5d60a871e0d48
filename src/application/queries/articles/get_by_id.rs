use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleIdValue},
};

pub struct GetArticleByIdQuery {
    pub id: ArticleIdValue,
}

impl ArticleQueryService {
    /// # Errors
    ///
    /// [`ApplicationError::NotFound`] when no article has the id.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .repo
            .find(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;
        Ok(article.into())
    }
}
