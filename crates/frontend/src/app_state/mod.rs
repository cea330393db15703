//! Application state, the controller that drives it, and the outcomes it
//! hands to the navigator.

pub mod controller;
pub mod outcome;
pub mod state;
pub mod store;

pub use controller::ArticlesController;
pub use outcome::{Outcome, Screen};
pub use state::AppState;
pub use store::AppStore;
