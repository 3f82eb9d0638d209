// The dioxus prelude contains a ton of common items used in dioxus apps. It's a good idea to import wherever you
// need dioxus
use dioxus::prelude::*;

use app_state::AppState;
use i18n::Locale;
use nav::Navigator;
use nav::Screen;
use screens::about::AboutScreen;
use screens::home::HomeScreen;

/// State shared through context: the locale and the restart counter.
mod app_state;
/// The fixed catalog of motorcycles on offer.
mod catalog;
/// Platform share hand-off (Web Share API or clipboard).
mod compat;
/// Define a components module that contains all shared components for our app.
mod components;
/// Locales and the strings resolved against them.
mod i18n;
/// Screen identifiers and the navigation back-stack.
mod nav;
/// Define a screens module that contains the UI for each screen.
mod screens;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        background-color: #f0f2f5;
        font-family: system-ui, -apple-system, sans-serif;
    }

    /* --- APP FRAME --- */
    .app-shell {
        max-width: 420px;
        min-height: 100vh;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        background-color: #ffffff;
        box-shadow: 0 0 20px rgba(0, 0, 0, 0.15);
    }

    /* --- TOP BAR --- */
    .top-bar {
        flex-shrink: 0;
        background-color: #b7950b;
    }
    .top-bar nav {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.5rem 1rem;
    }
    .top-bar ul {
        display: flex;
        align-items: center;
        gap: 0.25rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .top-bar-title {
        color: #1a5276;
        font-size: 1.25rem;
        margin: 0;
    }
    .top-bar-back,
    .top-bar-action {
        color: #1a5276;
        font-weight: 600;
        text-decoration: none;
        padding: 0.25rem 0.5rem;
    }
    .top-bar-back { font-size: 1.25rem; }

    /* --- CONTENT --- */
    main.container {
        flex: 1;
        width: 100%;
        overflow-y: auto;
    }
    .screen-content {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
        padding: 1rem;
    }
    .headline {
        font-size: 1.25rem;
        margin: 0;
    }
    .copyright { padding: 1rem; }

    /* --- SELECTION LIST --- */
    .moto-list { width: 100%; }
    .moto-row {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 0.5rem;
        border-radius: 8px;
        cursor: pointer;
    }
    .moto-row.selected { background-color: #fdf6e3; }
    .moto-icon { width: 70px; height: 44px; }
    .moto-name { flex: 1; }
    .moto-row input[type="radio"] {
        accent-color: magenta;
        width: 1.25rem;
        height: 1.25rem;
    }

    /* --- FORMS --- */
    label { display: block; width: 100%; }
    input[type="text"], input[type="number"] {
        display: block;
        width: 100%;
        margin-top: 0.25rem;
        padding: 0.5rem;
        border: 1px solid #999999;
        border-radius: 6px;
        font-size: 1rem;
    }

    /* --- BUTTONS --- */
    button {
        background-color: #1a5276;
        color: #ffffff;
        border: none;
        border-radius: 6px;
        padding: 0.6rem 1.5rem;
        font-size: 1rem;
        cursor: pointer;
    }
    button.secondary { background-color: #5d6d7e; }
    button.outline {
        background-color: transparent;
        color: #1a5276;
        border: 1px solid currentColor;
    }
    button.secondary.outline { color: #5d6d7e; }

    /* --- SUMMARY CARD --- */
    article {
        width: 100%;
        padding: 1rem;
        border: 1px solid #dddddd;
        border-radius: 8px;
        background-color: #ffffff;
    }
    .order-summary {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.25rem;
    }
    .order-summary p { margin: 0; }
    .order-summary button { margin-top: 1rem; }
"#;

    // Both signals sit above the shell: the locale so it survives a
    // restart, the generation because bumping it is the restart.
    let locale = use_signal(Locale::default);
    let generation = use_signal(|| 0_u32);
    use_context_provider(|| AppState { locale, generation });

    let key = generation();

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{app_css}"
        }
        Shell { key: "{key}" }
    }
}

/// Everything below the restart boundary. The component is keyed on the
/// restart generation, so a locale switch remounts it: the navigation
/// stack returns to home and all screen state starts over.
#[component]
fn Shell() -> Element {
    let nav = use_signal(Navigator::new);
    use_context_provider(|| nav);

    rsx! {
        div {
            class: "app-shell",
            match nav.read().current() {
                Screen::Home => rsx! {
                    HomeScreen {}
                },
                Screen::About => rsx! {
                    AboutScreen {}
                },
            }
        }
    }
}
