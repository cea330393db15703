use leptos::prelude::*;

/// Status line; renders nothing while the message is empty
#[component]
pub fn Message(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div id="message" class="message">
                {move || message.get()}
            </div>
        </Show>
    }
}
