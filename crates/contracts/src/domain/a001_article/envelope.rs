//! Конверты ответов REST API статей.
//!
//! Все ответы плоские: поле `message` плюс полезная нагрузка
//! (`articles`, `article`) там, где она есть.

use serde::{Deserialize, Serialize};

use super::aggregate::Article;

/// Ответ `GET /articles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlesResponse {
    #[serde(default)]
    pub message: String,
    pub articles: Vec<Article>,
}

/// Ответ `POST /articles` и `PUT /articles/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResponse {
    #[serde(default)]
    pub message: String,
    pub article: Article,
}

/// Ответ `DELETE /articles/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Тело ответа с ошибкой (любой статус не из 2xx)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Извлечь сообщение сервера из произвольного тела ответа.
    /// Пустые сообщения и тела, не являющиеся JSON, дают `None`.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
