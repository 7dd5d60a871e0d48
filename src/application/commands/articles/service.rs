// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
}

impl ArticleCommandService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }
}
