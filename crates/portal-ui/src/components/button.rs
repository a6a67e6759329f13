//! Button Component
//!
//! A labeled control in two styles:
//! - Contained: filled background, the default
//! - Outlined: transparent with a border

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    Outlined,
    #[default]
    Contained,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Outlined => "btn-outlined",
            ButtonVariant::Contained => "btn-contained",
        }
    }
}

/// The `type` attribute of the underlying button element
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button label (text, icons, etc.)
    pub children: Element,
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub button_type: ButtonType,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    /// Extra style tags appended to the class list
    #[props(default)]
    pub class: Vec<String>,
    #[props(default = false)]
    pub disabled: bool,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

/// Full class list for a button
pub fn button_class(variant: ButtonVariant, full_width: bool, extra: &[String]) -> String {
    let mut classes = vec!["btn", variant.class()];
    if full_width {
        classes.push("btn-full");
    }
    classes.extend(extra.iter().map(String::as_str).filter(|c| !c.is_empty()));
    classes.join(" ")
}

/// Styled button. Stateless; renders purely from its props.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         button_type: ButtonType::Submit,
///         full_width: true,
///         onclick: move |_| submit(),
///         "Sign in"
///     }
///
///     Button {
///         variant: ButtonVariant::Outlined,
///         class: vec!["mt-2".to_string()],
///         onclick: move |_| navigator.push(Route::Register {}),
///         "Create account"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.full_width, &props.class);

    rsx! {
        button {
            class: "{class}",
            r#type: props.button_type.as_str(),
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
