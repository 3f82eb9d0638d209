//=============================================================================
// File: src/screens/about.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Container;
use crate::components::top_bar::TopBar;
use crate::AppState;
use crate::Navigator;

/// The static information screen, reached from the home top bar. A back
/// arrow pops the navigation stack; the body is just the copyright notice.
#[component]
pub fn AboutScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut nav = use_context::<Signal<Navigator>>();
    let locale = (app_state.locale)();

    rsx! {
        TopBar {
            title: locale.about(),
            back_label: locale.back(),
            on_back: move |_| nav.write().back(),
        }
        Container {
            p { class: "copyright", "{locale.copyright()}" }
        }
    }
}
