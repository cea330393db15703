pub mod global_context;

use leptos::prelude::*;
use thaw::*;

use crate::app_state::Screen;
use crate::shared::components::message::Message;
use crate::shared::components::spinner::Spinner;
use crate::shared::icons::icon;
use global_context::use_app;

/// Page shell: status indicators on top, then navigation and the current
/// screen inside a wrapper that dims while a request is outstanding.
///
/// ```text
/// +------------------------------------------+
/// | Spinner / Message          [Logout]      |
/// +------------------------------------------+
/// |  Title   Login | Articles                |
/// |  <screen>                                |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let app = use_app();
    let busy = app.busy();
    let message = app.message();
    let navigator = app.navigator;

    view! {
        <Spinner on=busy />
        <Message message=message />
        <div class="app-toolbar">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| app.logout()
            >
                {icon("logout")}
                " Logout from app"
            </Button>
        </div>
        <div id="wrapper" style=move || if busy.get() { "opacity: 0.25" } else { "opacity: 1" }>
            <h1>{icon("articles")} " Advanced Web Applications"</h1>
            <nav class="app-nav">
                <a
                    id="loginScreen"
                    href=Screen::Login.path()
                    class:active=move || navigator.screen() == Screen::Login
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigator.go(Screen::Login);
                    }
                >
                    "Login"
                </a>
                <a
                    id="articlesScreen"
                    href=Screen::Articles.path()
                    class:active=move || navigator.screen() == Screen::Articles
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigator.go(Screen::Articles);
                    }
                >
                    "Articles"
                </a>
            </nav>
            {children()}
        </div>
    }
}
