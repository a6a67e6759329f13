//! Currency Field Widget
//!
//! Controlled amount input. The field shows `value` formatted for the
//! configured locale and reports the cleaned number on every edit.

use dioxus::prelude::*;
use portal_core::CurrencyFormat;

/// Properties for the CurrencyField component
#[derive(Clone, PartialEq, Props)]
pub struct CurrencyFieldProps {
    /// Bare numeric value, e.g. `1234.5`
    pub value: String,
    /// Cleaned value after each edit, `None` once the field is empty
    pub on_value_change: EventHandler<Option<String>>,
    #[props(default)]
    pub format: CurrencyFormat,
    #[props(default)]
    pub name: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default)]
    pub class: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub on_blur: Option<EventHandler<FocusEvent>>,
    #[props(default)]
    pub on_focus: Option<EventHandler<FocusEvent>>,
}

#[component]
pub fn CurrencyField(props: CurrencyFieldProps) -> Element {
    let format = props.format;
    let shown = format.format_value(&props.value);

    rsx! {
        input {
            r#type: "text",
            "inputmode": "decimal",
            class: "{props.class}",
            name: "{props.name}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            value: "{shown}",
            "data-currency": format.currency,
            oninput: move |e| props.on_value_change.call(format.clean_value(&e.value())),
            onblur: move |e| {
                if let Some(handler) = &props.on_blur {
                    handler.call(e);
                }
            },
            onfocus: move |e| {
                if let Some(handler) = &props.on_focus {
                    handler.call(e);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::input::tests::render;

    #[test]
    fn empty_value_shows_placeholder_only() {
        fn app() -> Element {
            rsx! {
                CurrencyField {
                    value: String::new(),
                    placeholder: "Amount".to_string(),
                    on_value_change: move |_| {},
                }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"placeholder="Amount""#), "{html}");
        assert!(!html.contains('\u{20B9}'), "{html}");
    }

    #[test]
    fn fraction_is_kept_in_display() {
        fn app() -> Element {
            rsx! {
                CurrencyField { value: "1500.50".to_string(), on_value_change: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains("\u{20B9}1,500.50"), "{html}");
        assert!(html.contains(r#"data-currency="INR""#), "{html}");
    }
}
