use leptos::prelude::*;
use web_sys::window;

use crate::app_state::{Outcome, Screen};

/// Turns controller outcomes into screen changes.
///
/// The current screen lives in a signal; the browser URL follows it through
/// `history.replaceState`, so a reload lands on the same screen. Nothing is
/// pushed onto the history stack: Back leaves the app instead of showing a
/// URL the screen no longer matches.
#[derive(Clone, Copy)]
pub struct Navigator {
    screen: RwSignal<Screen>,
}

impl Navigator {
    pub fn new() -> Self {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self {
            screen: RwSignal::new(Screen::from_path(&path)),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen.get()
    }

    pub fn apply(&self, outcome: Outcome) {
        if let Some(target) = outcome.target() {
            self.go(target);
        }
    }

    pub fn go(&self, target: Screen) {
        if self.screen.get_untracked() == target {
            return;
        }
        log::debug!("navigate: {}", target.path());
        self.screen.set(target);

        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(target.path()),
                );
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
