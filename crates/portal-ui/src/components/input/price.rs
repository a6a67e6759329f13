use dioxus::prelude::*;
use portal_core::{CurrencyFormat, InputChange};

use super::{InputConfig, InputHandlers};
use crate::CurrencyField;

/// Rupee amount field. Shows the formatted amount, reports the bare number.
#[component]
pub fn PriceInput(config: InputConfig, handlers: InputHandlers) -> Element {
    rsx! {
        div { class: config.block_class(),
            CurrencyField {
                value: config.value.clone(),
                format: CurrencyFormat::INR,
                name: config.name().to_string(),
                placeholder: config.placeholder().to_string(),
                class: config.field_class(&["input-currency"]),
                disabled: config.disabled,
                on_value_change: move |value: Option<String>| {
                    handlers.change(InputChange { value, country: None })
                },
                on_blur: move |e| handlers.blur(e),
                on_focus: move |e| handlers.focus(e),
            }
        }
    }
}
