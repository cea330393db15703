pub mod aggregate;
pub mod envelope;

pub use aggregate::{Article, ArticleDraft, ArticleId, Topic};
pub use envelope::{ArticleResponse, ArticlesResponse, ErrorBody, MessageResponse};
