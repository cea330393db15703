use contracts::domain::a001_article::{Article, ArticleDraft, ArticleId};
use contracts::system::auth::LoginRequest;

use super::outcome::{Outcome, Screen};
use super::state::AppState;
use super::store::{AppStore, BusyGuard};
use crate::shared::error::ApiError;
use crate::shared::gateway::ArticlesGateway;
use crate::system::auth::storage::SessionStore;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const FETCH_FAILED: &str = "Failed to fetch articles";
pub const CREATE_FAILED: &str = "Failed to create article";
pub const UPDATE_FAILED: &str = "Failed to update article";
pub const DELETE_FAILED: &str = "Failed to delete article";
pub const GOODBYE: &str = "Goodbye!";

/// Drives every user action against the API and folds the result into the
/// application state.
///
/// Network actions run one at a time: while one is in flight every other
/// returns [`Outcome::Busy`] without touching anything. Navigation is never
/// performed here, only requested through the returned [`Outcome`].
#[derive(Clone)]
pub struct ArticlesController<G, S, St> {
    gateway: G,
    session: S,
    store: St,
}

impl<G, S, St> ArticlesController<G, S, St>
where
    G: ArticlesGateway,
    S: SessionStore,
    St: AppStore,
{
    pub fn new(gateway: G, session: S, store: St) -> Self {
        Self {
            gateway,
            session,
            store,
        }
    }

    pub async fn login(&self, credentials: LoginRequest) -> Outcome {
        let Some(busy) = BusyGuard::acquire(&self.store) else {
            log::debug!("login ignored: another action is in flight");
            return Outcome::Busy;
        };

        let result = self.gateway.login(&credentials).await;
        if !busy.is_current() {
            return self.discard("login");
        }
        match result {
            Ok(response) => {
                self.session.set_token(&response.token);
                log::info!("Signed in as {}", credentials.username);
                self.set_message(response.message);
                Outcome::Navigate(Screen::Articles)
            }
            Err(err) => {
                // A rejected login never touches the stored session.
                log::warn!("login failed: {}", err);
                self.set_message(err.user_message(LOGIN_FAILED));
                Outcome::Stay
            }
        }
    }

    pub fn logout(&self) -> Outcome {
        self.session.clear_token();
        let _ = self.store.update_state(|s| {
            s.clear_session_data();
            s.set_message(GOODBYE);
        });
        log::info!("Signed out");
        Outcome::Navigate(Screen::Login)
    }

    pub async fn load_articles(&self) -> Outcome {
        let Some(token) = self.require_token("load_articles") else {
            return Outcome::Navigate(Screen::Login);
        };
        let Some(busy) = BusyGuard::acquire(&self.store) else {
            return Outcome::Busy;
        };

        let result = self.gateway.list_articles(&token).await;
        if !busy.is_current() {
            return self.discard("load_articles");
        }
        match result {
            Ok(response) => {
                log::debug!("Fetched {} articles", response.articles.len());
                let _ = self.store.update_state(|s| {
                    s.replace_articles(response.articles);
                    s.set_message(response.message);
                });
                Outcome::Stay
            }
            Err(err) => self.fail("load_articles", err, FETCH_FAILED),
        }
    }

    pub async fn create_article(&self, draft: ArticleDraft) -> Outcome {
        let Some(token) = self.require_token("create_article") else {
            return Outcome::Navigate(Screen::Login);
        };
        let Some(busy) = BusyGuard::acquire(&self.store) else {
            return Outcome::Busy;
        };

        let result = self.gateway.create_article(&token, &draft).await;
        if !busy.is_current() {
            return self.discard("create_article");
        }
        match result {
            Ok(response) => {
                log::debug!("Created article {}", response.article.id());
                let _ = self.store.update_state(|s| {
                    s.append_article(response.article);
                    s.set_message(response.message);
                });
                Outcome::Stay
            }
            Err(err) => self.fail("create_article", err, CREATE_FAILED),
        }
    }

    pub async fn update_article(&self, id: ArticleId, draft: ArticleDraft) -> Outcome {
        let Some(token) = self.require_token("update_article") else {
            return Outcome::Navigate(Screen::Login);
        };
        let Some(busy) = BusyGuard::acquire(&self.store) else {
            return Outcome::Busy;
        };

        let result = self.gateway.update_article(&token, id, &draft).await;
        if !busy.is_current() {
            return self.discard("update_article");
        }
        match result {
            Ok(response) => {
                let _ = self.store.update_state(|s| {
                    if !s.replace_article(response.article) {
                        log::debug!("Updated article {} is no longer listed", id);
                    }
                    s.select_for_edit(None);
                    s.set_message(response.message);
                });
                Outcome::Stay
            }
            Err(err) => self.fail("update_article", err, UPDATE_FAILED),
        }
    }

    pub async fn delete_article(&self, id: ArticleId) -> Outcome {
        let Some(token) = self.require_token("delete_article") else {
            return Outcome::Navigate(Screen::Login);
        };
        let Some(busy) = BusyGuard::acquire(&self.store) else {
            return Outcome::Busy;
        };

        let result = self.gateway.delete_article(&token, id).await;
        if !busy.is_current() {
            return self.discard("delete_article");
        }
        match result {
            Ok(response) => {
                let _ = self.store.update_state(|s| {
                    s.remove_article(id);
                    s.set_message(response.message);
                });
                Outcome::Stay
            }
            Err(err) => self.fail("delete_article", err, DELETE_FAILED),
        }
    }

    pub fn select_for_edit(&self, id: Option<ArticleId>) {
        let _ = self.store.update_state(|s| s.select_for_edit(id));
    }

    pub fn cancel_edit(&self) {
        self.select_for_edit(None);
    }

    /// The article loaded into the editor, `None` for create mode
    pub fn editing_article(&self) -> Option<Article> {
        self.store
            .with_state(|s| s.editing_article().cloned())
            .flatten()
    }

    /// The token is read fresh on every action: logout or an auth failure
    /// may have removed it since the last one.
    fn require_token(&self, action: &str) -> Option<String> {
        let token = self.session.token();
        if token.is_none() {
            log::debug!("{}: no session token, redirecting to login", action);
        }
        token
    }

    /// Reply to a request from a session that has since been signed out
    fn discard(&self, action: &str) -> Outcome {
        log::debug!("{}: session ended while in flight, reply dropped", action);
        Outcome::Stay
    }

    fn set_message(&self, message: String) {
        let _ = self.store.update_state(|s: &mut AppState| s.set_message(message));
    }

    fn fail(&self, action: &str, err: ApiError, fallback: &str) -> Outcome {
        self.set_message(err.user_message(fallback));
        if err.is_auth_failure() {
            log::info!(
                "{}: session rejected by server ({:?}), signing out",
                action,
                err.status()
            );
            self.session.clear_token();
            Outcome::Navigate(Screen::Login)
        } else {
            log::warn!("{} failed: {}", action, err);
            Outcome::Stay
        }
    }
}
