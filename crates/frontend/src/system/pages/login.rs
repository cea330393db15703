use contracts::system::auth::LoginRequest;
use leptos::prelude::*;

use crate::layout::global_context::use_app;

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let is_loading = app.busy();

    let can_submit = move || {
        !is_loading.get() && LoginRequest::new(username.get(), password.get()).is_complete()
    };

    let on_submit = {
        let app = app.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let credentials = LoginRequest::new(username.get_untracked(), password.get_untracked());
            if !credentials.is_complete() {
                return;
            }
            app.dispatch(move |controller| async move { controller.login(credentials).await });
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Login"</h2>

                <form id="loginForm" on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            maxlength="20"
                            placeholder="Enter username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            maxlength="20"
                            placeholder="Enter password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        id="submitCredentials"
                        class="btn-primary"
                        disabled=move || !can_submit()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Submit credentials" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
