mod view;
mod view_model;

pub use view::ArticleForm;
pub use view_model::{ArticleFormState, ArticleFormViewModel};
