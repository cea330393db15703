use super::view_model::ArticleFormViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_article::{Article, ArticleDraft, ArticleId, Topic};
use leptos::prelude::*;

/// Create / edit form. Edit mode is driven by `current_article`; when it is
/// `None` (nothing selected, or the selected article is gone) the form
/// creates a new article.
#[component]
pub fn ArticleForm(
    #[prop(into)] current_article: Signal<Option<Article>>,
    #[prop(into)] busy: Signal<bool>,
    on_create: Callback<ArticleDraft>,
    on_update: Callback<(ArticleId, ArticleDraft)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ArticleFormViewModel::new();

    Effect::new(move |_| {
        current_article.with(|article| vm.load(article.as_ref()));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = vm.form.get_untracked();
        let Some(draft) = form.to_draft() else {
            return;
        };
        match form.id {
            // The form clears itself once the edit target is released.
            Some(id) => on_update.run((id, draft)),
            None => {
                on_create.run(draft);
                vm.reset();
            }
        }
    };

    view! {
        <form id="form" class="details-form" on:submit=on_submit>
            <h2>{move || if vm.is_edit_mode() { "Edit Article" } else { "Create Article" }}</h2>

            <div class="form-group">
                <input
                    type="text"
                    id="title"
                    maxlength="50"
                    placeholder="Enter title"
                    prop:value=move || vm.form.get().title
                    on:input=move |ev| vm.form.update(|f| f.title = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <textarea
                    id="text"
                    maxlength="200"
                    placeholder="Enter text"
                    prop:value=move || vm.form.get().text
                    on:input=move |ev| vm.form.update(|f| f.text = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <select
                    id="topic"
                    prop:value=move || vm.form.get().topic
                    on:change=move |ev| vm.form.update(|f| f.topic = event_target_value(&ev))
                >
                    <option value="">"-- Select topic --"</option>
                    {Topic::KNOWN
                        .into_iter()
                        .map(|topic| {
                            let value = topic.to_string();
                            view! { <option value=value.clone()>{value.clone()}</option> }
                        })
                        .collect_view()}
                    {move || {
                        vm.unlisted_topic()
                            .map(|value| view! { <option value=value.clone()>{value.clone()}</option> })
                    }}
                </select>
            </div>

            <div class="details-actions">
                <button
                    type="submit"
                    id="submitArticle"
                    class="btn btn-primary"
                    disabled=move || busy.get() || !vm.is_form_valid()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Save" } else { "Submit" }}
                </button>
                <Show when=move || vm.is_edit_mode()>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| {
                            on_cancel.run(());
                            vm.reset();
                        }
                    >
                        {icon("cancel")}
                        "Cancel edit"
                    </button>
                </Show>
            </div>
        </form>
    }
}
