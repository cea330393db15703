use contracts::domain::a001_article::{Article, ArticleId};

/// Everything the screens render from.
///
/// Fields are only changed through the transition methods below, each of
/// which is applied as one update of the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Cached copy of the server's collection, in server order
    pub articles: Vec<Article>,
    /// Status line; empty means nothing to show
    pub message: String,
    /// Set while exactly one network operation is outstanding
    pub busy: bool,
    /// Article loaded into the editor; may point at an id that is gone
    pub edit_target: Option<ArticleId>,
    /// Bumped each time the signed-in user's data is dropped. Replies to
    /// requests started under an older value are discarded.
    pub session_epoch: u64,
}

impl AppState {
    /// Start a network operation. Returns `false` (and changes nothing) when
    /// another one is still in flight.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.message.clear();
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn replace_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    /// Append a freshly created article. A stale copy with the same id is
    /// dropped first so the id stays unique.
    pub fn append_article(&mut self, article: Article) {
        let id = article.id();
        self.articles.retain(|a| a.id() != id);
        self.articles.push(article);
    }

    /// Replace the entry with the same id in place. Returns `false` when
    /// there is no such entry.
    pub fn replace_article(&mut self, article: Article) -> bool {
        match self.articles.iter_mut().find(|a| a.id() == article.id()) {
            Some(slot) => {
                *slot = article;
                true
            }
            None => false,
        }
    }

    /// Returns `false` when the id was not in the collection
    pub fn remove_article(&mut self, id: ArticleId) -> bool {
        let before = self.articles.len();
        self.articles.retain(|a| a.id() != id);
        if self.edit_target == Some(id) {
            self.edit_target = None;
        }
        self.articles.len() != before
    }

    pub fn select_for_edit(&mut self, id: Option<ArticleId>) {
        self.edit_target = id;
    }

    /// The article behind the edit target. `None` means the editor is in
    /// create mode, including when the target no longer exists.
    pub fn editing_article(&self) -> Option<&Article> {
        let id = self.edit_target?;
        self.articles.iter().find(|a| a.id() == id)
    }

    /// Drop everything cached for the signed-in user
    pub fn clear_session_data(&mut self) {
        self.articles.clear();
        self.edit_target = None;
        self.session_epoch = self.session_epoch.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_article::Topic;

    fn article(id: i64, title: &str) -> Article {
        Article {
            article_id: ArticleId(id),
            title: title.to_string(),
            text: format!("{} text", title),
            topic: Topic::React,
        }
    }

    fn state_with(ids: &[i64]) -> AppState {
        AppState {
            articles: ids.iter().map(|id| article(*id, "a")).collect(),
            ..AppState::default()
        }
    }

    #[test]
    fn test_begin_rejects_overlap() {
        let mut state = AppState {
            message: "old".into(),
            ..AppState::default()
        };
        assert!(state.begin());
        assert!(state.busy);
        assert_eq!(state.message, "");

        state.set_message("kept");
        assert!(!state.begin());
        assert_eq!(state.message, "kept");

        state.finish();
        assert!(!state.busy);
    }

    #[test]
    fn test_append_keeps_id_unique_and_last() {
        let mut state = state_with(&[1, 5, 2]);
        state.append_article(article(5, "new"));
        let ids: Vec<i64> = state.articles.iter().map(|a| a.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 5]);
        assert_eq!(state.articles[2].title, "new");
    }

    #[test]
    fn test_replace_only_matching_entry() {
        let mut state = state_with(&[1, 2, 3]);
        let before = state.clone();
        assert!(state.replace_article(article(2, "edited")));
        assert_eq!(state.articles.len(), 3);
        assert_eq!(state.articles[0], before.articles[0]);
        assert_eq!(state.articles[1].title, "edited");
        assert_eq!(state.articles[2], before.articles[2]);
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut state = state_with(&[1, 2]);
        let before = state.clone();
        assert!(!state.replace_article(article(9, "ghost")));
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut state = state_with(&[1, 2]);
        let before = state.clone();
        assert!(!state.remove_article(ArticleId(9)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_clears_matching_edit_target() {
        let mut state = state_with(&[1, 2]);
        state.select_for_edit(Some(ArticleId(2)));
        assert!(state.remove_article(ArticleId(2)));
        assert_eq!(state.edit_target, None);

        state.select_for_edit(Some(ArticleId(1)));
        state.remove_article(ArticleId(7));
        assert_eq!(state.edit_target, Some(ArticleId(1)));
    }

    #[test]
    fn test_clear_session_data_starts_new_epoch() {
        let mut state = state_with(&[1]);
        state.select_for_edit(Some(ArticleId(1)));
        let epoch = state.session_epoch;

        state.clear_session_data();
        assert!(state.articles.is_empty());
        assert_eq!(state.edit_target, None);
        assert_ne!(state.session_epoch, epoch);
    }

    #[test]
    fn test_missing_edit_target_means_create_mode() {
        let mut state = state_with(&[1]);
        state.select_for_edit(Some(ArticleId(1)));
        assert_eq!(state.editing_article().map(|a| a.id()), Some(ArticleId(1)));

        state.replace_articles(vec![article(3, "other")]);
        assert_eq!(state.edit_target, Some(ArticleId(1)));
        assert!(state.editing_article().is_none());
    }
}
