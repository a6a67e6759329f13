use dioxus::prelude::*;
use portal_core::{InputChange, Visibility};

use super::{InputConfig, InputHandlers};
use crate::{EyeIcon, EyeInvisibleIcon};

/// Password field with a show/hide toggle.
///
/// Visibility is local to this field and starts masked. Toggling never
/// touches the value or emits a change.
#[component]
pub fn PasswordInput(config: InputConfig, handlers: InputHandlers) -> Element {
    let visibility = use_signal(Visibility::default);

    rsx! {
        PasswordField { config, handlers, visibility }
    }
}

/// Flip the mask. The value and the change handler are left alone.
fn toggle(mut visibility: Signal<Visibility>) {
    let next = visibility().toggled();
    visibility.set(next);
}

#[component]
fn PasswordField(
    config: InputConfig,
    handlers: InputHandlers,
    visibility: Signal<Visibility>,
) -> Element {
    let masked = visibility().is_masked();

    rsx! {
        div { class: config.block_class(),
            input {
                r#type: visibility().input_type(),
                class: config.field_class(&["input-password"]),
                name: config.name(),
                placeholder: config.placeholder(),
                disabled: config.disabled,
                value: "{config.value}",
                oninput: move |e| handlers.change(InputChange::text(e.value())),
                onblur: move |e| handlers.blur(e),
                onfocus: move |e| handlers.focus(e),
            }
            div {
                class: "input-password-icon",
                role: "button",
                "aria-label": if masked { "Show password" } else { "Hide password" },
                onclick: move |_| toggle(visibility),
                if masked {
                    EyeInvisibleIcon {}
                } else {
                    EyeIcon {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::tests::flush;
    use std::cell::Cell;

    thread_local! {
        static VISIBILITY: Cell<Option<Signal<Visibility>>> = const { Cell::new(None) };
        static CHANGES: Cell<usize> = const { Cell::new(0) };
    }

    fn app() -> Element {
        let visibility = use_signal(Visibility::default);
        use_hook(|| VISIBILITY.with(|slot| slot.set(Some(visibility))));
        let handlers = InputHandlers {
            on_change: EventHandler::new(|_: InputChange| CHANGES.with(|c| c.set(c.get() + 1))),
            on_blur: None,
            on_focus: None,
            is_number_valid: None,
        };
        let config = InputConfig {
            value: "hunter22".to_string(),
            ..InputConfig::default()
        };
        rsx! {
            PasswordField { config, handlers, visibility }
        }
    }

    #[test]
    fn toggling_twice_masks_again_without_a_change() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let visibility = VISIBILITY.with(Cell::get).expect("signal captured");

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"type="password""#), "{html}");
        assert!(html.contains("Show password"), "{html}");

        dom.in_runtime(|| toggle(visibility));
        flush(&mut dom);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"type="text""#), "{html}");
        assert!(html.contains("Hide password"), "{html}");
        assert!(html.contains(r#"value="hunter22""#), "{html}");

        dom.in_runtime(|| toggle(visibility));
        flush(&mut dom);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"type="password""#), "{html}");

        assert_eq!(CHANGES.with(Cell::get), 0);
    }
}
