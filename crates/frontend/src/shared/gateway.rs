//! The seam between application state and the REST API.

use async_trait::async_trait;
use contracts::domain::a001_article::{
    ArticleDraft, ArticleId, ArticleResponse, ArticlesResponse, MessageResponse,
};
use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::domain::a001_article::api as articles_api;
use crate::shared::config::ApiConfig;
use crate::shared::error::ApiError;
use crate::system::auth::api as auth_api;

/// Intents understood by the articles API.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait ArticlesGateway {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn list_articles(&self, token: &str) -> Result<ArticlesResponse, ApiError>;

    async fn create_article(
        &self,
        token: &str,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse, ApiError>;

    async fn update_article(
        &self,
        token: &str,
        id: ArticleId,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse, ApiError>;

    async fn delete_article(&self, token: &str, id: ArticleId)
        -> Result<MessageResponse, ApiError>;
}

/// Gateway backed by `fetch` through gloo-net
#[derive(Clone, Debug)]
pub struct HttpGateway {
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl ArticlesGateway for HttpGateway {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        auth_api::login(&self.base_url, credentials).await
    }

    async fn list_articles(&self, token: &str) -> Result<ArticlesResponse, ApiError> {
        articles_api::fetch_articles(&self.base_url, token).await
    }

    async fn create_article(
        &self,
        token: &str,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse, ApiError> {
        articles_api::create_article(&self.base_url, token, draft).await
    }

    async fn update_article(
        &self,
        token: &str,
        id: ArticleId,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse, ApiError> {
        articles_api::update_article(&self.base_url, token, id, draft).await
    }

    async fn delete_article(
        &self,
        token: &str,
        id: ArticleId,
    ) -> Result<MessageResponse, ApiError> {
        articles_api::delete_article(&self.base_url, token, id).await
    }
}
