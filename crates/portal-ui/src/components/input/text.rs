use dioxus::prelude::*;
use portal_core::InputChange;

use super::{InputConfig, InputHandlers};

/// Plain single-line field for text and email kinds
#[component]
pub fn TextInput(config: InputConfig, handlers: InputHandlers) -> Element {
    let start_icon = config.icon_options.start_icon();
    let end_icon = config.icon_options.end_icon();

    let mut modifiers = Vec::new();
    if start_icon.is_some() {
        modifiers.push("input-with-icon-start");
    }
    if end_icon.is_some() {
        modifiers.push("input-with-icon-end");
    }
    let field_class = config.field_class(&modifiers);

    rsx! {
        div { class: config.block_class(),
            if let Some(icon) = start_icon {
                div { class: "input-icon input-icon-start", {icon} }
            }
            input {
                r#type: "text",
                class: "{field_class}",
                name: config.name(),
                placeholder: config.placeholder(),
                disabled: config.disabled,
                value: "{config.value}",
                oninput: move |e| handlers.change(InputChange::text(e.value())),
                onblur: move |e| handlers.blur(e),
                onfocus: move |e| handlers.focus(e),
            }
            if let Some(icon) = end_icon {
                div { class: "input-icon input-icon-end", {icon} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::render;
    use super::super::{IconOptions, Input};
    use crate::MailIcon;
    use dioxus::prelude::*;

    #[test]
    fn start_icon_adds_modifier() {
        fn app() -> Element {
            rsx! {
                Input {
                    value: String::new(),
                    on_change: move |_| {},
                    icon_options: IconOptions::start(rsx! { MailIcon {} }),
                }
            }
        }
        let html = render(app);
        assert!(html.contains("input-icon input-icon-start"), "{html}");
        assert!(html.contains("input-with-icon-start"), "{html}");
        assert!(!html.contains("input-with-icon-end"), "{html}");
    }

    #[test]
    fn hidden_icon_is_not_drawn() {
        fn app() -> Element {
            let mut icons = IconOptions::end(rsx! { MailIcon {} });
            icons.show_end_icon = false;
            rsx! {
                Input { value: String::new(), on_change: move |_| {}, icon_options: icons }
            }
        }
        let html = render(app);
        assert!(!html.contains("input-icon"), "{html}");
    }
}
