use crate::app_state::Screen;
use crate::domain::a001_article::ui::ArticlesPage;
use crate::layout::global_context::use_app;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
// Screens are switched by the Navigator signal, no Router components.

#[component]
pub fn AppRoutes() -> impl IntoView {
    let navigator = use_app().navigator;

    view! {
        <Shell>
            {move || match navigator.screen() {
                Screen::Login => view! { <LoginPage /> }.into_any(),
                Screen::Articles => view! { <ArticlesPage /> }.into_any(),
            }}
        </Shell>
    }
}
