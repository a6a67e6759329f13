use dioxus::prelude::*;
use portal_core::InputChange;

use super::{InputConfig, InputHandlers};

/// Native select over the configured options
#[component]
pub fn DropdownInput(config: InputConfig, handlers: InputHandlers) -> Element {
    let options = &config.dropdown_options;
    let duplicates = options.duplicate_values();
    if !duplicates.is_empty() {
        tracing::warn!(
            field = config.name(),
            "Dropdown option values must be unique, repeated: {:?}",
            duplicates
        );
    }
    let entries = options.entries(&config.value);

    rsx! {
        div { class: config.block_class(),
            select {
                class: config.field_class(&[]),
                name: config.name(),
                disabled: config.disabled,
                onchange: move |e| handlers.change(InputChange::text(e.value())),
                onblur: move |e| handlers.blur(e),
                onfocus: move |e| handlers.focus(e),
                for entry in entries {
                    option {
                        key: "{entry.value}",
                        value: "{entry.value}",
                        selected: entry.selected,
                        "{entry.label}"
                    }
                }
            }
        }
    }
}
