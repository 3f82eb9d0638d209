//! A set of reusable, lifetime-free Dioxus components in the Pico.css style.
//! The classes they emit are styled by the stylesheet embedded in `App`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Primary, true) => "outline",
        (ButtonType::Secondary, false) => "secondary",
        (ButtonType::Secondary, true) => "secondary outline",
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(optional)]
    value: Option<String>,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
    #[props(default = false)]
    disabled: bool,
}

/// A labeled form input field. The rendered value is controlled when a
/// `value` is supplied.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                value: "{props.value.as_deref().unwrap_or(\"\")}",
                disabled: props.disabled,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}
