use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор статьи, назначается сервером
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Topic
// ============================================================================

/// Тема статьи.
///
/// Редактор предлагает только известные темы, но неизвестная строка от
/// сервера сохраняется как есть в `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Topic {
    JavaScript,
    React,
    Node,
    Other(String),
}

impl Topic {
    /// Темы, доступные в форме редактирования
    pub const KNOWN: [Topic; 3] = [Topic::JavaScript, Topic::React, Topic::Node];

    pub fn as_str(&self) -> &str {
        match self {
            Topic::JavaScript => "JavaScript",
            Topic::React => "React",
            Topic::Node => "Node",
            Topic::Other(s) => s,
        }
    }

    /// Разбор значения из `<select>`: пустая строка означает "тема не выбрана"
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            None
        } else {
            Some(Topic::from(s.to_string()))
        }
    }
}

impl From<String> for Topic {
    fn from(s: String) -> Self {
        match s.as_str() {
            "JavaScript" => Topic::JavaScript,
            "React" => Topic::React,
            "Node" => Topic::Node,
            _ => Topic::Other(s),
        }
    }
}

impl From<Topic> for String {
    fn from(t: Topic) -> Self {
        match t {
            Topic::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Статья в том виде, в котором её возвращает сервер
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

impl Article {
    pub fn id(&self) -> ArticleId {
        self.article_id
    }

    /// Черновик с текущими значениями полей (для формы редактирования)
    pub fn to_draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            text: self.text.clone(),
            topic: self.topic.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело запроса на создание/обновление статьи
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>, topic: Topic) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            topic,
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        if self.text.trim().is_empty() {
            return Err("Text must not be empty".into());
        }
        if self.topic.as_str().trim().is_empty() {
            return Err("Topic must be selected".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_from_server_json() {
        let json = r#"{"article_id":5,"title":"T","text":"X","topic":"React"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id(), ArticleId(5));
        assert_eq!(article.topic, Topic::React);
    }

    #[test]
    fn test_unknown_topic_is_kept() {
        let json = r#"{"article_id":1,"title":"T","text":"X","topic":"News"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.topic, Topic::Other("News".to_string()));
        assert_eq!(
            serde_json::to_value(&article.topic).unwrap(),
            serde_json::json!("News")
        );
    }

    #[test]
    fn test_draft_serializes_flat() {
        let draft = ArticleDraft::new("T", "X", Topic::Node);
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"title": "T", "text": "X", "topic": "Node"})
        );
    }

    #[test]
    fn test_draft_validation() {
        assert!(ArticleDraft::new("T", "X", Topic::JavaScript).validate().is_ok());
        assert!(ArticleDraft::new("  ", "X", Topic::JavaScript).validate().is_err());
        assert!(ArticleDraft::new("T", "", Topic::JavaScript).validate().is_err());
        assert!(ArticleDraft::new("T", "X", Topic::Other(String::new())).validate().is_err());
    }

    #[test]
    fn test_topic_parse() {
        assert_eq!(Topic::parse(""), None);
        assert_eq!(Topic::parse("Node"), Some(Topic::Node));
        assert_eq!(Topic::parse("Rust"), Some(Topic::Other("Rust".into())));
    }

    #[test]
    fn test_article_id_is_a_bare_number() {
        assert_eq!(ArticleId(7).to_string(), "7");
        assert_eq!(serde_json::to_string(&ArticleId(42)).unwrap(), "42");
        assert_eq!(serde_json::from_str::<ArticleId>("42").unwrap(), ArticleId(42));
    }
}
