use dioxus::prelude::*;
use portal_core::phone::{self, Country, CountryInfo, DEFAULT_COUNTRY};
use portal_core::InputChange;

use super::{InputConfig, InputHandlers};
use crate::PhoneField;

/// The widget's validity hook: hands the real result to `report` and
/// always answers `true`.
pub fn answer_validity(value: &str, country: &Country, report: impl FnOnce(bool)) -> bool {
    report(phone::is_number_valid(value, country.iso2));
    true
}

/// Mobile number field.
///
/// The widget's own validity hook always gets `true`, so it never blocks or
/// marks the field. Real validity goes to the owner through
/// `is_number_valid` after every edit, and the owner decides what to do.
#[component]
pub fn MobileInput(config: InputConfig, handlers: InputHandlers) -> Element {
    rsx! {
        PhoneField {
            value: config.value.clone(),
            name: config.name().to_string(),
            placeholder: config.placeholder().to_string(),
            disabled: config.disabled,
            default_country: DEFAULT_COUNTRY.to_string(),
            enable_search: true,
            input_class: config.field_class(&["input-phone"]),
            container_class: config.block_class(),
            is_valid: move |(value, country): (String, &'static Country)| {
                answer_validity(&value, country, |valid| handlers.report_validity(valid))
            },
            on_change: move |(value, country): (String, CountryInfo)| {
                handlers.change(InputChange::with_country(value, country))
            },
            on_blur: move |e| handlers.blur(e),
            on_focus: move |e| handlers.focus(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::tests::render;
    use super::super::Input;
    use portal_core::InputKind;

    fn india() -> &'static Country {
        Country::default_country()
    }

    #[test]
    fn short_input_reports_invalid_but_widget_stays_valid() {
        for value in ["", "9", "91"] {
            let mut reported = None;
            assert!(answer_validity(value, india(), |valid| reported = Some(valid)));
            assert_eq!(reported, Some(false), "{value}");
        }
    }

    #[test]
    fn valid_number_reports_true() {
        let mut reported = None;
        assert!(answer_validity("918123456789", india(), |valid| reported = Some(valid)));
        assert_eq!(reported, Some(true));
    }

    #[test]
    fn wrong_country_reports_false_but_widget_stays_valid() {
        let gb = Country::find("gb").expect("gb listed");
        let mut reported = None;
        assert!(answer_validity("918123456789", gb, |valid| reported = Some(valid)));
        assert_eq!(reported, Some(false));
    }

    #[test]
    fn short_value_is_never_marked_in_the_widget() {
        fn app() -> Element {
            rsx! {
                Input { kind: InputKind::Mobile, value: "9".to_string(), on_change: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains("input-phone"), "{html}");
        assert!(!html.contains("invalid-number"), "{html}");
    }
}
