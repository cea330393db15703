use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use std::future::Future;

use crate::app_state::{AppState, ArticlesController, Outcome};
use crate::routes::navigator::Navigator;
use crate::shared::config::AppConfig;
use crate::shared::gateway::HttpGateway;
use crate::system::auth::storage::LocalStorageSession;

pub type AppController = ArticlesController<HttpGateway, LocalStorageSession, RwSignal<AppState>>;

/// Everything the screens share: the state signal, the controller writing
/// to it and the navigator reading its outcomes.
#[derive(Clone)]
pub struct AppGlobalContext {
    pub state: RwSignal<AppState>,
    pub controller: AppController,
    pub navigator: Navigator,
}

impl AppGlobalContext {
    pub fn new(config: &AppConfig) -> Self {
        let state = RwSignal::new(AppState::default());
        let controller = ArticlesController::new(
            HttpGateway::new(&config.api),
            LocalStorageSession::new(config.session.token_key.clone()),
            state,
        );
        Self {
            state,
            controller,
            navigator: Navigator::new(),
        }
    }

    /// Run a controller action in the background and hand its outcome to the
    /// navigator.
    pub fn dispatch<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppController) -> Fut + 'static,
        Fut: Future<Output = Outcome> + 'static,
    {
        let controller = self.controller.clone();
        let navigator = self.navigator;
        spawn_local(async move {
            let outcome = action(controller).await;
            navigator.apply(outcome);
        });
    }

    pub fn logout(&self) {
        let outcome = self.controller.logout();
        self.navigator.apply(outcome);
    }

    pub fn busy(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.busy))
    }

    pub fn message(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.message.clone()))
    }
}

/// Hook to access the application context
pub fn use_app() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}
