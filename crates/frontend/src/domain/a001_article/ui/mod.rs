pub mod details;
pub mod list;

use contracts::domain::a001_article::{ArticleDraft, ArticleId};
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use details::ArticleForm;
use list::ArticleList;

/// Articles screen: the editor above the collection, both wired to the
/// controller through the app context.
#[component]
pub fn ArticlesPage() -> impl IntoView {
    let app = use_app();
    let state = app.state;
    let busy = app.busy();

    let articles = Signal::derive(move || state.with(|s| s.articles.clone()));
    let current_article_id = Signal::derive(move || state.with(|s| s.edit_target));
    let current_article = Memo::new(move |_| state.with(|s| s.editing_article().cloned()));

    let on_fetch = {
        let app = app.clone();
        Callback::new(move |_: ()| {
            app.dispatch(|controller| async move { controller.load_articles().await })
        })
    };

    let on_create = {
        let app = app.clone();
        Callback::new(move |draft: ArticleDraft| {
            app.dispatch(move |controller| async move { controller.create_article(draft).await })
        })
    };

    let on_update = {
        let app = app.clone();
        Callback::new(move |(id, draft): (ArticleId, ArticleDraft)| {
            app.dispatch(move |controller| async move {
                controller.update_article(id, draft).await
            })
        })
    };

    let on_delete = {
        let app = app.clone();
        Callback::new(move |id: ArticleId| {
            app.dispatch(move |controller| async move { controller.delete_article(id).await })
        })
    };

    let on_edit = {
        let controller = app.controller.clone();
        Callback::new(move |id: ArticleId| controller.select_for_edit(Some(id)))
    };

    let on_cancel = {
        let controller = app.controller.clone();
        Callback::new(move |_: ()| controller.cancel_edit())
    };

    view! {
        <ArticleForm
            current_article=current_article
            busy=busy
            on_create=on_create
            on_update=on_update
            on_cancel=on_cancel
        />
        <ArticleList
            articles=articles
            current_article_id=current_article_id
            busy=busy
            on_fetch=on_fetch
            on_edit=on_edit
            on_delete=on_delete
        />
    }
}
