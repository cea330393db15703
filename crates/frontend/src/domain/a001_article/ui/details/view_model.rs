use contracts::domain::a001_article::{Article, ArticleDraft, ArticleId, Topic};
use leptos::prelude::*;

/// Raw form fields; the topic stays a string until submit so the
/// "-- Select topic --" placeholder can be represented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleFormState {
    pub id: Option<ArticleId>,
    pub title: String,
    pub text: String,
    pub topic: String,
}

impl ArticleFormState {
    pub fn from_article(article: &Article) -> Self {
        Self {
            id: Some(article.id()),
            title: article.title.clone(),
            text: article.text.clone(),
            topic: article.topic.to_string(),
        }
    }

    /// Topic of the loaded article when the editor has no option for it
    pub fn unlisted_topic(&self) -> Option<String> {
        match Topic::parse(&self.topic)? {
            Topic::Other(value) => Some(value),
            _ => None,
        }
    }

    pub fn to_draft(&self) -> Option<ArticleDraft> {
        let topic = Topic::parse(&self.topic)?;
        let draft = ArticleDraft::new(self.title.trim(), self.text.trim(), topic);
        draft.validate().ok()?;
        Some(draft)
    }
}

/// ViewModel for the article editor
#[derive(Clone, Copy)]
pub struct ArticleFormViewModel {
    pub form: RwSignal<ArticleFormState>,
}

impl ArticleFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ArticleFormState::default()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.to_draft().is_some())
    }

    pub fn unlisted_topic(&self) -> Option<String> {
        self.form.with(|f| f.unlisted_topic())
    }

    /// Fill the form from the article being edited, or clear it for create mode
    pub fn load(&self, article: Option<&Article>) {
        self.form
            .set(article.map(ArticleFormState::from_article).unwrap_or_default());
    }

    pub fn reset(&self) {
        self.form.set(ArticleFormState::default());
    }
}

impl Default for ArticleFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_from_article_round_trips_to_draft() {
        let article = Article {
            article_id: ArticleId(3),
            title: "Closures".into(),
            text: "Functions that remember".into(),
            topic: Topic::JavaScript,
        };
        let form = ArticleFormState::from_article(&article);
        assert_eq!(form.id, Some(ArticleId(3)));
        assert_eq!(form.to_draft(), Some(article.to_draft()));
    }

    #[test]
    fn test_incomplete_form_has_no_draft() {
        let mut form = ArticleFormState {
            title: "T".into(),
            text: "X".into(),
            ..ArticleFormState::default()
        };
        assert_eq!(form.to_draft(), None);

        form.topic = "React".into();
        assert!(form.to_draft().is_some());

        form.text = "   ".into();
        assert_eq!(form.to_draft(), None);
    }

    #[test]
    fn test_server_topic_outside_editor_options_is_offered() {
        let article = Article {
            article_id: ArticleId(8),
            title: "Weekly".into(),
            text: "Roundup".into(),
            topic: Topic::Other("News".into()),
        };
        let form = ArticleFormState::from_article(&article);
        assert_eq!(form.unlisted_topic().as_deref(), Some("News"));
        assert_eq!(form.to_draft(), Some(article.to_draft()));

        let known = ArticleFormState {
            topic: "React".into(),
            ..ArticleFormState::default()
        };
        assert_eq!(known.unlisted_topic(), None);
        assert_eq!(ArticleFormState::default().unlisted_topic(), None);
    }

    #[test]
    fn test_draft_fields_are_trimmed() {
        let form = ArticleFormState {
            id: None,
            title: "  T ".into(),
            text: " X".into(),
            topic: "Node".into(),
        };
        assert_eq!(
            form.to_draft(),
            Some(ArticleDraft::new("T", "X", Topic::Node))
        );
    }
}
