use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Invalid embedded config, using defaults: {}", e);
        AppConfig::default()
    });

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(&config));

    view! {
        <AppRoutes />
    }
}
