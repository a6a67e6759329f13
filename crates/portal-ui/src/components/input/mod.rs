//! Input Field Components
//!
//! One [`Input`] component for every field kind. It resolves its
//! [`InputKind`] to an [`Editor`], draws the shared label/error chrome and
//! hands the same [`InputConfig`] and [`InputHandlers`] to whichever
//! renderer the editor names:
//!
//! - [`TextInput`] - text and email, optional leading/trailing icon
//! - [`PasswordInput`] - masked field with a show/hide toggle
//! - [`PriceInput`] - rupee amount via [`CurrencyField`](super::CurrencyField)
//! - [`MobileInput`] - phone number via [`PhoneField`](super::PhoneField)
//! - [`DropdownInput`] - native select
//!
//! Kinds with no renderer (`telephone`, `searchableDropdown`) fail the
//! render with [`portal_core::ClientError::UnimplementedInput`].

mod dropdown;
mod mobile;
mod password;
mod price;
mod text;

pub use dropdown::DropdownInput;
pub use mobile::MobileInput;
pub use password::PasswordInput;
pub use price::PriceInput;
pub use text::TextInput;

use dioxus::prelude::*;
use portal_core::{DropdownOptions, Editor, InputChange, InputKind, InputSize};

/// Decorative icons around a text field
#[derive(Clone, PartialEq, Default)]
pub struct IconOptions {
    pub show_start_icon: bool,
    pub show_end_icon: bool,
    pub start_icon: Option<Element>,
    pub end_icon: Option<Element>,
}

impl IconOptions {
    pub fn start(icon: Element) -> Self {
        Self {
            show_start_icon: true,
            start_icon: Some(icon),
            ..Self::default()
        }
    }

    pub fn end(icon: Element) -> Self {
        Self {
            show_end_icon: true,
            end_icon: Some(icon),
            ..Self::default()
        }
    }

    /// The leading icon, if shown and present
    pub fn start_icon(&self) -> Option<Element> {
        self.start_icon.clone().filter(|_| self.show_start_icon)
    }

    /// The trailing icon, if shown and present
    pub fn end_icon(&self) -> Option<Element> {
        self.end_icon.clone().filter(|_| self.show_end_icon)
    }
}

/// Everything a renderer draws from. Renderers ignore what they don't need.
#[derive(Clone, PartialEq, Default)]
pub struct InputConfig {
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub size: InputSize,
    pub full_width: bool,
    pub disabled: bool,
    pub value: String,
    pub icon_options: IconOptions,
    pub dropdown_options: DropdownOptions,
    pub class: Option<String>,
}

impl InputConfig {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or("")
    }

    /// Block around the control
    pub fn block_class(&self) -> String {
        block_class(self.full_width)
    }

    /// Class of the control itself, with renderer-specific modifiers
    pub fn field_class(&self, modifiers: &[&str]) -> String {
        field_class(self.size, modifiers, self.class.as_deref())
    }
}

/// Callbacks shared by every renderer
#[derive(Clone, Copy, PartialEq)]
pub struct InputHandlers {
    pub on_change: EventHandler<InputChange>,
    pub on_blur: Option<EventHandler<FocusEvent>>,
    pub on_focus: Option<EventHandler<FocusEvent>>,
    pub is_number_valid: Option<EventHandler<bool>>,
}

impl InputHandlers {
    pub fn change(&self, change: InputChange) {
        self.on_change.call(change);
    }

    pub fn blur(&self, event: FocusEvent) {
        if let Some(handler) = &self.on_blur {
            handler.call(event);
        }
    }

    pub fn focus(&self, event: FocusEvent) {
        if let Some(handler) = &self.on_focus {
            handler.call(event);
        }
    }

    pub fn report_validity(&self, valid: bool) {
        if let Some(handler) = &self.is_number_valid {
            handler.call(valid);
        }
    }
}

pub fn wrapper_class(has_error: bool) -> &'static str {
    if has_error {
        "input-wrapper input-wrapper-error"
    } else {
        "input-wrapper"
    }
}

pub fn block_class(full_width: bool) -> String {
    if full_width {
        "input-block input-full".to_string()
    } else {
        "input-block".to_string()
    }
}

pub fn field_class(size: InputSize, modifiers: &[&str], extra: Option<&str>) -> String {
    let size = format!("input-{}", size.as_str());
    let mut classes = vec!["input", size.as_str()];
    classes.extend(modifiers.iter().copied());
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current value, owned by the caller
    pub value: String,
    /// Called on every edit with the new value
    pub on_change: EventHandler<InputChange>,
    /// Which editor to render
    #[props(default)]
    pub kind: InputKind,
    #[props(default)]
    pub name: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = false)]
    pub show_label: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Marks the label with `*`
    #[props(default = false)]
    pub mandatory: bool,
    #[props(default)]
    pub size: InputSize,
    #[props(default = false)]
    pub full_width: bool,
    /// Message shown below the field; adds the error style
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub icon_options: IconOptions,
    #[props(default)]
    pub dropdown_options: DropdownOptions,
    /// Extra classes for the control
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub on_blur: Option<EventHandler<FocusEvent>>,
    #[props(default)]
    pub on_focus: Option<EventHandler<FocusEvent>>,
    /// Mobile fields only: validity of the number after each edit
    #[props(default)]
    pub is_number_valid: Option<EventHandler<bool>>,
}

impl InputProps {
    pub fn config(&self) -> InputConfig {
        InputConfig {
            name: self.name.clone(),
            placeholder: self.placeholder.clone(),
            size: self.size,
            full_width: self.full_width,
            disabled: self.disabled,
            value: self.value.clone(),
            icon_options: self.icon_options.clone(),
            dropdown_options: self.dropdown_options.clone(),
            class: self.class.clone(),
        }
    }

    pub fn handlers(&self) -> InputHandlers {
        InputHandlers {
            on_change: self.on_change,
            on_blur: self.on_blur,
            on_focus: self.on_focus,
            is_number_valid: self.is_number_valid,
        }
    }
}

/// Form field of any supported kind
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         kind: InputKind::Email,
///         value: email(),
///         on_change: move |change: InputChange| email.set(change.value_or_default()),
///         label: "Email".to_string(),
///         show_label: true,
///         mandatory: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let editor = props
        .kind
        .editor()
        .inspect_err(|e| tracing::error!(field = props.name.as_deref().unwrap_or(""), "{}", e))?;

    let config = props.config();
    let handlers = props.handlers();
    let label = props.label.clone().unwrap_or_default();
    let body = match editor {
        Editor::Text => rsx! { TextInput { config, handlers } },
        Editor::Password => rsx! { PasswordInput { config, handlers } },
        Editor::Price => rsx! { PriceInput { config, handlers } },
        Editor::Mobile => rsx! { MobileInput { config, handlers } },
        Editor::Dropdown => rsx! { DropdownInput { config, handlers } },
    };

    rsx! {
        div { class: wrapper_class(props.error.is_some()),
            div { class: "w-full",
                if props.show_label {
                    div { class: "input-label",
                        "{label}"
                        if props.mandatory {
                            span { class: "input-mandatory", "*" }
                        }
                    }
                }
                {body}
            }
            if let Some(error) = &props.error {
                div { class: "input-error", "{error}" }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use portal_core::{DropdownOption, InputKind};

    pub(crate) fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Run the scopes marked dirty since the last pass
    pub(crate) fn flush(dom: &mut VirtualDom) {
        dom.render_immediate(&mut dioxus_core::NoOpMutations);
    }

    /// Render, then let error boundaries draw their fallback
    pub(crate) fn render_settled(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        flush(&mut dom);
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn wrapper_class_marks_errors() {
        assert_eq!(wrapper_class(false), "input-wrapper");
        assert_eq!(wrapper_class(true), "input-wrapper input-wrapper-error");
    }

    #[test]
    fn block_class_full_width() {
        assert_eq!(block_class(false), "input-block");
        assert_eq!(block_class(true), "input-block input-full");
    }

    #[test]
    fn field_class_composes_size_modifiers_and_extra() {
        assert_eq!(field_class(InputSize::Medium, &[], None), "input input-medium");
        assert_eq!(
            field_class(InputSize::Small, &["input-password"], Some("wide")),
            "input input-small input-password wide"
        );
        assert_eq!(field_class(InputSize::Large, &[], Some("")), "input input-large");
    }

    #[test]
    fn text_kind_renders_plain_field() {
        fn app() -> Element {
            rsx! {
                Input { kind: InputKind::Text, value: "Ada".to_string(), on_change: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"type="text""#), "{html}");
        assert!(html.contains(r#"value="Ada""#), "{html}");
        assert_eq!(html.matches("<input").count(), 1);
    }

    #[test]
    fn password_kind_renders_masked_field() {
        fn app() -> Element {
            rsx! {
                Input { kind: InputKind::Password, value: "hunter22".to_string(), on_change: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"type="password""#), "{html}");
        assert!(html.contains("input-password-icon"), "{html}");
    }

    #[test]
    fn price_kind_renders_formatted_amount() {
        fn app() -> Element {
            rsx! {
                Input { kind: InputKind::Price, value: "1234567".to_string(), on_change: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains("\u{20B9}12,34,567"), "{html}");
        assert!(html.contains("input-currency"), "{html}");
    }

    #[test]
    fn mobile_kind_renders_phone_field_with_default_country() {
        fn app() -> Element {
            rsx! {
                Input { kind: InputKind::Mobile, value: String::new(), on_change: move |_| {} }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"type="tel""#), "{html}");
        assert!(html.contains("+91"), "{html}");
    }

    #[test]
    fn dropdown_kind_leads_with_placeholder_without_default() {
        fn app() -> Element {
            rsx! {
                Input {
                    kind: InputKind::Dropdown,
                    value: String::new(),
                    on_change: move |_| {},
                    dropdown_options: DropdownOptions::new(vec![
                        DropdownOption::new("Apple", "apple"),
                        DropdownOption::new("Banana", "banana"),
                    ]),
                }
            }
        }
        let html = render(app);
        let placeholder = html.find("Select ..").expect("placeholder rendered");
        let apple = html.find("Apple").unwrap();
        let banana = html.find("Banana").unwrap();
        assert!(placeholder < apple && apple < banana, "{html}");
    }

    #[test]
    fn dropdown_kind_omits_placeholder_with_default() {
        fn app() -> Element {
            rsx! {
                Input {
                    kind: InputKind::Dropdown,
                    value: String::new(),
                    on_change: move |_| {},
                    dropdown_options: DropdownOptions::new(vec![
                        DropdownOption::new("Apple", "apple"),
                        DropdownOption::new("Banana", "banana"),
                    ]).with_default("banana"),
                }
            }
        }
        let html = render(app);
        assert!(!html.contains("Select .."), "{html}");
        assert!(html.contains("<select"), "{html}");
    }

    #[test]
    fn label_and_error_chrome() {
        fn app() -> Element {
            rsx! {
                Input {
                    value: String::new(),
                    on_change: move |_| {},
                    label: "Email".to_string(),
                    show_label: true,
                    mandatory: true,
                    error: "Email is required".to_string(),
                }
            }
        }
        let html = render(app);
        assert!(html.contains("input-wrapper input-wrapper-error"), "{html}");
        assert!(html.contains("input-mandatory"), "{html}");
        assert!(html.contains("Email is required"), "{html}");
    }

    #[test]
    fn hidden_label_renders_no_label_row() {
        fn app() -> Element {
            rsx! {
                Input { value: String::new(), on_change: move |_| {}, label: "Email".to_string() }
            }
        }
        let html = render(app);
        assert!(!html.contains("input-label"), "{html}");
        assert!(!html.contains("input-error"), "{html}");
    }

    #[test]
    fn unimplemented_kind_raises_to_the_boundary() {
        fn app() -> Element {
            rsx! {
                ErrorBoundary {
                    handle_error: |_: ErrorContext| rsx! { p { class: "render-error", "unsupported input" } },
                    Input { kind: InputKind::Telephone, value: String::new(), on_change: move |_| {} }
                }
            }
        }
        let html = render_settled(app);
        assert!(html.contains("render-error"), "{html}");
        assert!(html.contains("unsupported input"), "{html}");
        assert!(!html.contains("input-wrapper"), "{html}");
        assert!(!html.contains("<input"), "{html}");
    }

    #[test]
    fn searchable_dropdown_raises_to_the_boundary() {
        fn app() -> Element {
            rsx! {
                ErrorBoundary {
                    handle_error: |_: ErrorContext| rsx! { p { class: "render-error", "unsupported input" } },
                    Input { kind: InputKind::SearchableDropdown, value: String::new(), on_change: move |_| {} }
                }
            }
        }
        let html = render_settled(app);
        assert!(html.contains("render-error"), "{html}");
        assert!(!html.contains("<select"), "{html}");
    }
}
