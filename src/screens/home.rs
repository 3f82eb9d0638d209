//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use dioxus::prelude::*;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::catalog::Moto;
use crate::compat;
use crate::components::pico::{Button, ButtonType, Card, Container, Input};
use crate::components::top_bar::TopBar;
use crate::i18n::Locale;
use crate::nav::Screen;
use crate::AppState;
use crate::Navigator;

// --- Data Structures ---

/// All mutable state of the order form, held in one signal so the pieces
/// move together. The signal lives in `ScreenContent`, so leaving the
/// screen or restarting the shell drops it.
#[derive(Clone, PartialEq, Debug)]
pub struct OrderForm {
    selected: Option<Moto>,
    name: String,
    quantity: u32,
    total: u64,
    name_missing: bool,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            selected: None,
            name: String::new(),
            quantity: 1,
            total: 0,
            name_missing: false,
        }
    }
}

impl OrderForm {
    pub fn selected(&self) -> Option<Moto> {
        self.selected
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn name_missing(&self) -> bool {
        self.name_missing
    }

    pub fn select(&mut self, moto: Moto) {
        self.selected = Some(moto);
    }

    /// Updates the buyer name. The warning flag follows every edit: typing
    /// anything clears it, deleting back to empty raises it again.
    pub fn set_name(&mut self, name: String) {
        self.name_missing = name.is_empty();
        self.name = name;
    }

    /// Replaces the quantity with the parsed `input`. Anything that is not
    /// a whole number of at least 1 (garbage, "0", negatives) becomes 1.
    pub fn set_quantity_input(&mut self, input: &str) {
        self.quantity = input.parse::<u32>().map_or(1, |q| q.max(1));
    }

    /// The purchase action. With a name present, the total becomes the
    /// selected model's price times the quantity. With an empty name, only
    /// the warning flag is raised and any earlier total stays as it was.
    pub fn purchase(&mut self) {
        if self.name.is_empty() {
            self.name_missing = true;
            return;
        }
        if let Some(moto) = self.selected {
            self.total = u64::from(moto.price()) * u64::from(self.quantity);
        }
    }

    /// Snapshot for the summary block, `None` until a purchase has gone
    /// through. The model, name, and quantity are read live, so edits made
    /// after the purchase show up next to the stored total.
    pub fn receipt(&self) -> Option<Receipt> {
        let moto = self.selected?;
        if self.total == 0 {
            return None;
        }
        Some(Receipt {
            moto: moto.name(),
            name: self.name.clone(),
            quantity: self.quantity,
            total: self.total,
        })
    }
}

/// A view of the order around its last purchase, logged as JSON and shared
/// as plain text.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Receipt {
    pub moto: &'static str,
    pub name: String,
    pub quantity: u32,
    pub total: u64,
}

impl Receipt {
    /// The lines of the on-screen summary.
    pub fn summary_lines(&self) -> [String; 4] {
        [
            format!("Jenis: {}", self.moto),
            format!("Nama: {}", self.name),
            format!("Jumlah: {}", self.quantity),
            format!("Total Harga: ${}", self.total),
        ]
    }

    /// The plain-text share payload. Its first label is "Type:" and the
    /// total carries no "$", unlike the on-screen summary.
    pub fn share_text(&self) -> String {
        format!(
            "Type: {}\nNama: {}\nJumlah: {}\nTotal Harga: {}",
            self.moto, self.name, self.quantity, self.total
        )
    }
}

/// Fire-and-forget hand-off of a receipt to the platform share layer.
fn share_receipt(receipt: Receipt) {
    if let Ok(json) = serde_json::to_string(&receipt) {
        dioxus_logger::tracing::info!("sharing receipt: {}", json);
    }
    spawn(async move {
        if let Err(e) = compat::share_text(receipt.share_text()).await {
            dioxus_logger::tracing::warn!("share failed: {}", e);
        }
    });
}

// --- Components ---

/// The landing screen: a top bar with the locale and about actions, above
/// the order form.
#[component]
pub fn HomeScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut nav = use_context::<Signal<Navigator>>();
    let locale = (app_state.locale)();

    rsx! {
        TopBar {
            title: locale.app_name(),
            actions: rsx! {
                li {
                    a {
                        href: "#",
                        class: "top-bar-action",
                        onclick: move |event| {
                            event.prevent_default();
                            app_state.restart_with_locale(Locale::Id);
                        },
                        "ID"
                    }
                }
                li {
                    a {
                        href: "#",
                        class: "top-bar-action",
                        onclick: move |event| {
                            event.prevent_default();
                            app_state.restart_with_locale(Locale::En);
                        },
                        "EN"
                    }
                }
                li {
                    a {
                        href: "#",
                        class: "top-bar-action",
                        "aria-label": locale.about(),
                        onclick: move |event| {
                            event.prevent_default();
                            nav.write().push(Screen::About);
                        },
                        "ⓘ"
                    }
                }
            },
        }
        ScreenContent {}
    }
}

/// The order form: model list, buyer details, and the summary of the last
/// purchase.
#[component]
fn ScreenContent() -> Element {
    let app_state = use_context::<AppState>();
    let locale = (app_state.locale)();
    let mut form = use_signal(OrderForm::default);

    rsx! {
        Container {
            div {
                class: "screen-content",
                h2 { class: "headline", "{locale.title()}" }

                div {
                    class: "moto-list",
                    role: "radiogroup",
                    for moto in Moto::iter() {
                        MotoRow {
                            key: "{moto.name()}",
                            moto,
                            selected: form.read().selected() == Some(moto),
                            on_select: move |m| form.write().select(m),
                        }
                    }
                }

                // The buyer fields only appear once a model is picked.
                if form.read().selected().is_some() {
                    Input {
                        label: "Nama",
                        name: "name",
                        value: "{form.read().name()}",
                        on_input: move |event: FormEvent| form.write().set_name(event.value()),
                    }
                    ErrorHint {
                        visible: form.read().name_missing(),
                        message: locale.invalid_input(),
                    }
                    Input {
                        label: "Jumlah",
                        name: "quantity",
                        input_type: "number",
                        value: "{form.read().quantity()}",
                        on_input: move |event: FormEvent| form.write().set_quantity_input(&event.value()),
                    }
                    Button {
                        on_click: move |_| {
                            let mut f = form.write();
                            f.purchase();
                            if !f.name_missing() {
                                dioxus_logger::tracing::info!("purchase confirmed, total {}", f.total());
                            }
                        },
                        "Beli"
                    }
                }

                if let Some(receipt) = form.read().receipt() {
                    Card {
                        div {
                            class: "order-summary",
                            for line in receipt.summary_lines() {
                                p { "{line}" }
                            }
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: true,
                                on_click: move |_| {
                                    if let Some(receipt) = form.read().receipt() {
                                        share_receipt(receipt);
                                    }
                                },
                                "Bagikan"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One selectable catalog row. Clicking anywhere on the row, or its radio
/// control, selects the model.
#[component]
fn MotoRow(moto: Moto, selected: bool, on_select: EventHandler<Moto>) -> Element {
    rsx! {
        div {
            class: if selected { "moto-row selected" } else { "moto-row" },
            onclick: move |_| on_select.call(moto),
            img {
                class: "moto-icon",
                src: "{moto.icon()}",
                alt: "{moto.name()}",
            }
            span { class: "moto-name", "{moto.name()}" }
            input {
                r#type: "radio",
                name: "moto",
                checked: selected,
                onclick: move |event| {
                    event.stop_propagation();
                    on_select.call(moto);
                },
            }
        }
    }
}

/// Inline warning under the name field.
#[component]
fn ErrorHint(visible: bool, message: &'static str) -> Element {
    rsx! {
        if visible {
            small { style: "color: #c62828;", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_unit_and_no_selection() {
        let form = OrderForm::default();
        assert_eq!(form.selected(), None);
        assert_eq!(form.quantity(), 1);
        assert_eq!(form.total(), 0);
        assert!(!form.name_missing());
        assert!(form.receipt().is_none());
    }

    #[test]
    fn purchase_multiplies_unit_price_by_quantity() {
        let mut form = OrderForm::default();
        form.select(Moto::Nmax);
        form.set_name("Ali".to_string());
        form.set_quantity_input("3");
        form.purchase();
        assert_eq!(form.total(), 8124);
    }

    #[test]
    fn every_model_totals_its_own_price() {
        for moto in Moto::iter() {
            let mut form = OrderForm::default();
            form.select(moto);
            form.set_name("Budi".to_string());
            form.set_quantity_input("2");
            form.purchase();
            assert_eq!(form.total(), u64::from(moto.price()) * 2);
        }
    }

    #[test]
    fn summary_uses_jenis_label_and_dollar_total() {
        let mut form = OrderForm::default();
        form.select(Moto::Nmax);
        form.set_name("Ali".to_string());
        form.set_quantity_input("3");
        form.purchase();
        let receipt = form.receipt().unwrap();
        assert_eq!(
            receipt.summary_lines(),
            [
                "Jenis: NMAX".to_string(),
                "Nama: Ali".to_string(),
                "Jumlah: 3".to_string(),
                "Total Harga: $8124".to_string(),
            ]
        );
    }

    #[test]
    fn share_text_uses_type_label_and_bare_total() {
        let receipt = Receipt {
            moto: "NMAX",
            name: "Ali".to_string(),
            quantity: 3,
            total: 8124,
        };
        assert_eq!(
            receipt.share_text(),
            "Type: NMAX\nNama: Ali\nJumlah: 3\nTotal Harga: 8124"
        );
    }

    #[test]
    fn empty_name_blocks_the_purchase_and_raises_the_warning() {
        let mut form = OrderForm::default();
        form.select(Moto::Zx25r);
        form.set_quantity_input("2");
        form.purchase();
        assert!(form.name_missing());
        assert_eq!(form.total(), 0);
        assert!(form.receipt().is_none());
    }

    #[test]
    fn warning_follows_edits_to_the_name_field() {
        let mut form = OrderForm::default();
        form.select(Moto::Cbr25);
        form.purchase();
        assert!(form.name_missing());
        form.set_name("B".to_string());
        assert!(!form.name_missing());
        form.set_name(String::new());
        assert!(form.name_missing());
    }

    #[test]
    fn junk_quantity_input_coerces_to_one() {
        let mut form = OrderForm::default();
        for raw in ["0", "-5", "abc", "", "1.5"] {
            form.set_quantity_input(raw);
            assert_eq!(form.quantity(), 1, "input {raw:?}");
        }
        form.set_quantity_input("12");
        assert_eq!(form.quantity(), 12);
    }

    #[test]
    fn reselecting_keeps_the_stale_total_until_the_next_purchase() {
        let mut form = OrderForm::default();
        form.select(Moto::Nmax);
        form.set_name("Ali".to_string());
        form.purchase();
        assert_eq!(form.total(), 2708);

        form.select(Moto::Zx25r);
        let receipt = form.receipt().expect("summary stays visible");
        assert_eq!(receipt.moto, "ZX25R");
        assert_eq!(receipt.total, 2708);

        form.purchase();
        assert_eq!(form.total(), 6292);
    }

    #[test]
    fn failed_purchase_keeps_the_previous_total() {
        let mut form = OrderForm::default();
        form.select(Moto::Cbr25);
        form.set_name("Citra".to_string());
        form.purchase();
        assert_eq!(form.total(), 4907);

        form.set_name(String::new());
        form.purchase();
        assert!(form.name_missing());
        assert_eq!(form.total(), 4907);
    }

    #[test]
    fn receipt_serializes_for_the_log() {
        let receipt = Receipt {
            moto: "NMAX",
            name: "Ali".to_string(),
            quantity: 3,
            total: 8124,
        };
        let json = serde_json::to_string(&receipt).unwrap();
        assert_eq!(
            json,
            r#"{"moto":"NMAX","name":"Ali","quantity":3,"total":8124}"#
        );
    }
}
