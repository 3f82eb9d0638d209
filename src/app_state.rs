//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;

use crate::i18n::Locale;

/// A reactive state provided as a Dioxus context at the application root.
///
/// This struct holds `Signal`s for state that outlives any single screen.
/// Both signals live above the shell in the component tree: `locale` so the
/// choice survives a restart, and `generation` because changing it is what
/// performs the restart. The shell is keyed on `generation`, so bumping it
/// remounts everything below, which drops the navigation stack and all
/// in-progress form state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// A signal holding the language all UI strings resolve against.
    pub locale: Signal<Locale>,
    /// A signal counting restarts. Used only as the shell's render key.
    pub generation: Signal<u32>,
}

impl AppState {
    /// Switch the UI language and restart the shell so every screen starts
    /// over with the new strings.
    pub fn restart_with_locale(mut self, locale: Locale) {
        dioxus_logger::tracing::info!("switching locale to '{}'", locale.code());
        self.locale.set(locale);
        self.generation += 1;
    }
}
