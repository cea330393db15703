use leptos::prelude::*;

/// Loading indicator shown while a request is outstanding
#[component]
pub fn Spinner(#[prop(into)] on: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || on.get()>
            <div id="spinner" class="spinner" role="status" aria-live="polite">
                "Please wait..."
            </div>
        </Show>
    }
}
