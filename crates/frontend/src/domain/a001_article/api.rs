use contracts::domain::a001_article::{
    ArticleDraft, ArticleId, ArticleResponse, ArticlesResponse, MessageResponse,
};
use gloo_net::http::{Request, RequestBuilder};

use crate::shared::api_utils::{api_url, read_envelope};
use crate::shared::error::ApiError;

fn collection_url(base: &str) -> String {
    api_url(base, "/articles")
}

fn item_url(base: &str, id: ArticleId) -> String {
    api_url(base, &format!("/articles/{}", id))
}

/// The token goes into `Authorization` as-is, without a scheme prefix
fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder
        .header("Authorization", token)
        .header("Accept", "application/json")
}

fn send_error(e: gloo_net::Error) -> ApiError {
    ApiError::network(format!("Failed to send request: {}", e))
}

fn serialize_error(e: gloo_net::Error) -> ApiError {
    ApiError::network(format!("Failed to serialize request: {}", e))
}

/// Fetch all articles
pub async fn fetch_articles(base: &str, token: &str) -> Result<ArticlesResponse, ApiError> {
    let response = authorized(Request::get(&collection_url(base)), token)
        .send()
        .await
        .map_err(send_error)?;

    read_envelope(response).await
}

/// Create new article
pub async fn create_article(
    base: &str,
    token: &str,
    draft: &ArticleDraft,
) -> Result<ArticleResponse, ApiError> {
    let response = authorized(Request::post(&collection_url(base)), token)
        .json(draft)
        .map_err(serialize_error)?
        .send()
        .await
        .map_err(send_error)?;

    read_envelope(response).await
}

/// Update article
pub async fn update_article(
    base: &str,
    token: &str,
    id: ArticleId,
    draft: &ArticleDraft,
) -> Result<ArticleResponse, ApiError> {
    let response = authorized(Request::put(&item_url(base, id)), token)
        .json(draft)
        .map_err(serialize_error)?
        .send()
        .await
        .map_err(send_error)?;

    read_envelope(response).await
}

/// Delete article
pub async fn delete_article(
    base: &str,
    token: &str,
    id: ArticleId,
) -> Result<MessageResponse, ApiError> {
    let response = authorized(Request::delete(&item_url(base, id)), token)
        .send()
        .await
        .map_err(send_error)?;

    read_envelope(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_urls() {
        assert_eq!(
            collection_url("http://localhost:9000/api"),
            "http://localhost:9000/api/articles"
        );
        assert_eq!(
            item_url("http://localhost:9000/api/", ArticleId(5)),
            "http://localhost:9000/api/articles/5"
        );
    }
}
