//! Phone Field Widget
//!
//! Country picker plus a `tel` input. The value is the digit string with the
//! dial code in front and no `+`; the field displays it with a `+`.
//!
//! - An empty field shows the selected country's `+dial` code
//! - Typing `+...` re-guesses the country from the dial-code prefix; a
//!   national number keeps the selected country and gains its dial code
//! - Picking a country swaps the dial-code prefix of the current value
//! - `is_valid` runs after each of those edits and only drives the
//!   widget's own invalid styling

use dioxus::prelude::*;
use portal_core::phone::{self, Country, CountryInfo, DEFAULT_COUNTRY};

/// Properties for the PhoneField component
#[derive(Clone, PartialEq, Props)]
pub struct PhoneFieldProps {
    /// Digits, dial code first
    pub value: String,
    /// New digits plus the country they were entered for
    pub on_change: EventHandler<(String, CountryInfo)>,
    /// Validity hook; `false` marks the field invalid
    #[props(default)]
    pub is_valid: Option<Callback<(String, &'static Country), bool>>,
    /// ISO code of the initially selected country
    #[props(default = DEFAULT_COUNTRY.to_string())]
    pub default_country: String,
    /// Show a search box in the country list
    #[props(default = false)]
    pub enable_search: bool,
    #[props(default)]
    pub name: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub input_class: String,
    #[props(default)]
    pub container_class: String,
    #[props(default)]
    pub on_blur: Option<EventHandler<FocusEvent>>,
    #[props(default)]
    pub on_focus: Option<EventHandler<FocusEvent>>,
}

/// Text shown in the input for a digit string
pub fn display_value(digits: &str, country: &Country) -> String {
    if digits.is_empty() {
        format!("+{}", country.dial_code)
    } else {
        format!("+{}", digits)
    }
}

fn run_validity_hook(
    hook: Option<Callback<(String, &'static Country), bool>>,
    mut widget_valid: Signal<bool>,
    value: &str,
    country: &'static Country,
) {
    let valid = hook.map_or(true, |hook| hook.call((value.to_string(), country)));
    widget_valid.set(valid);
}

#[component]
pub fn PhoneField(props: PhoneFieldProps) -> Element {
    let initial_digits = phone::digits_only(&props.value);
    let initial = Country::find(&props.default_country).unwrap_or_else(Country::default_country);
    let mut country = use_signal(move || phone::guess_country(&initial_digits, initial));
    let mut open = use_signal(|| false);
    let mut query = use_signal(String::new);
    let widget_valid = use_signal(|| true);

    let current = country();
    let current_code = current.iso2.to_uppercase();
    let digits = phone::digits_only(&props.value);
    let shown = display_value(&digits, current);
    let hook = props.is_valid;
    let on_change = props.on_change;
    let input_class = if widget_valid() {
        props.input_class.clone()
    } else {
        format!("{} invalid-number", props.input_class)
    };
    let matches = if props.enable_search {
        phone::search(&query())
    } else {
        phone::COUNTRIES.iter().collect()
    };

    rsx! {
        div { class: "phone-field {props.container_class}",
            div { class: "phone-country",
                button {
                    r#type: "button",
                    class: "phone-country-button",
                    disabled: props.disabled,
                    "aria-label": "Select country",
                    onclick: move |_| open.set(!open()),
                    span { class: "phone-country-code", "{current_code}" }
                    span { class: "phone-country-dial", "+{current.dial_code}" }
                }
                if open() {
                    div { class: "phone-country-list", role: "listbox",
                        if props.enable_search {
                            input {
                                r#type: "search",
                                class: "phone-country-search",
                                placeholder: "search",
                                value: "{query}",
                                oninput: move |e| query.set(e.value()),
                            }
                        }
                        {matches.into_iter().map(|choice| {
                            let digits = digits.clone();
                            let (mut country, mut open, mut query) = (country, open, query);
                            let class = if choice == current {
                                "phone-country-option selected"
                            } else {
                                "phone-country-option"
                            };
                            rsx! {
                                div {
                                    key: "{choice.iso2}",
                                    class,
                                    role: "option",
                                    onclick: move |_| {
                                        let value = phone::switch_country(&digits, country(), choice);
                                        country.set(choice);
                                        open.set(false);
                                        query.set(String::new());
                                        run_validity_hook(hook, widget_valid, &value, choice);
                                        on_change.call((value, choice.info()));
                                    },
                                    span { class: "phone-country-name", "{choice.name}" }
                                    span { class: "phone-country-dial", "+{choice.dial_code}" }
                                }
                            }
                        })}
                    }
                }
            }
            input {
                r#type: "tel",
                class: "{input_class}",
                name: "{props.name}",
                placeholder: "{props.placeholder}",
                disabled: props.disabled,
                value: "{shown}",
                oninput: move |e| {
                    let (typed, next) = phone::read_typed(&e.value(), country());
                    if next != country() {
                        country.set(next);
                    }
                    run_validity_hook(hook, widget_valid, &typed, next);
                    on_change.call((typed, next.info()));
                },
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::input::tests::render;

    #[test]
    fn display_value_prefixes_plus() {
        let india = Country::default_country();
        assert_eq!(display_value("", india), "+91");
        assert_eq!(display_value("919876543210", india), "+919876543210");
    }

    #[test]
    fn initial_country_follows_value_prefix() {
        fn app() -> Element {
            rsx! {
                PhoneField { value: "447400123456".to_string(), on_change: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains("+44"), "{html}");
        assert!(html.contains(r#"value="+447400123456""#), "{html}");
    }

    #[test]
    fn unknown_default_country_falls_back() {
        fn app() -> Element {
            rsx! {
                PhoneField { value: String::new(), default_country: "zz".to_string(), on_change: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains("+91"), "{html}");
    }

    #[test]
    fn empty_field_shows_default_dial_code() {
        fn app() -> Element {
            rsx! {
                PhoneField { value: String::new(), on_change: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"value="+91""#), "{html}");
        assert!(!html.contains("invalid-number"), "{html}");
    }
}
