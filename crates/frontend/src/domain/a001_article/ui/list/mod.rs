use contracts::domain::a001_article::{Article, ArticleId};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Article collection with per-item Edit / Delete.
///
/// Fetches once on mount. Edit and Delete are disabled while an article is
/// open in the editor or a request is outstanding.
#[component]
pub fn ArticleList(
    #[prop(into)] articles: Signal<Vec<Article>>,
    /// Article currently open in the editor; `None` when nothing is selected
    #[prop(into)]
    current_article_id: Signal<Option<ArticleId>>,
    #[prop(into)] busy: Signal<bool>,
    on_fetch: Callback<()>,
    on_edit: Callback<ArticleId>,
    on_delete: Callback<ArticleId>,
) -> impl IntoView {
    on_fetch.run(());

    let actions_disabled = move || busy.get() || current_article_id.get().is_some();

    view! {
        <div class="articles">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"Articles"</h2>
                    <Badge>
                        {move || articles.with(|a| a.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_fetch.run(())
                        disabled=busy
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            {move || {
                let items = articles.get();
                if items.is_empty() {
                    view! { <p class="articles__empty">"No articles yet"</p> }.into_any()
                } else {
                    items
                        .into_iter()
                        .map(|art| {
                            let id = art.id();
                            let is_current = move || current_article_id.get() == Some(id);
                            view! {
                                <div class="article" class:article--editing=is_current>
                                    <div>
                                        <h3>{art.title}</h3>
                                        <p>{art.text}</p>
                                        <p>"Topic: " {art.topic.to_string()}</p>
                                    </div>
                                    <div class="article__actions">
                                        <button
                                            class="btn btn-secondary"
                                            disabled=actions_disabled
                                            on:click=move |_| on_edit.run(id)
                                        >
                                            {icon("edit")}
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn-danger"
                                            disabled=actions_disabled
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            {icon("delete")}
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
