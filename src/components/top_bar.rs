//! The colored bar across the top of every screen.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct TopBarProps {
    /// Heading shown on the left.
    title: &'static str,
    /// Renders a back arrow before the title when set.
    #[props(optional)]
    on_back: Option<EventHandler<MouseEvent>>,
    /// Accessible name for the back arrow.
    #[props(optional)]
    back_label: Option<&'static str>,
    /// Action items for the right-hand side, as `li` elements.
    #[props(optional)]
    actions: Option<Element>,
}

/// A top app bar with an optional back arrow and trailing actions.
pub fn TopBar(props: TopBarProps) -> Element {
    rsx! {
        header {
            class: "top-bar",
            nav {
                ul {
                    if let Some(on_back) = props.on_back {
                        li {
                            a {
                                href: "#",
                                class: "top-bar-back",
                                "aria-label": props.back_label.unwrap_or("Back"),
                                onclick: move |event| {
                                    event.prevent_default();
                                    on_back.call(event);
                                },
                                "←"
                            }
                        }
                    }
                    li {
                        h1 { class: "top-bar-title", "{props.title}" }
                    }
                }
                if let Some(actions) = props.actions {
                    ul {
                        {actions}
                    }
                }
            }
        }
    }
}
