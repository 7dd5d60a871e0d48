pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Article;
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleIdValue, IdStrategy};
