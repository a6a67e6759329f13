//! Lazy page frame.
//!
//! A page's bundle is loaded the first time the page is visited. Until it
//! arrives the suspense fallback is shown; if loading fails the error
//! boundary shows a failure panel instead of the page. Errors raised while
//! drawing the page's form stop at an inner [`FormBoundary`].

use dioxus::prelude::*;
use portal_core::Page;

use crate::app::Route;
use crate::context::use_page_cache;
use crate::theme::colors;

/// Loads `page`'s bundle, then renders its header and `children`.
#[component]
pub fn LazyPage(page: Page, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_: ErrorContext| rsx! { PageLoadFailed { page } },
            SuspenseBoundary {
                fallback: |_: SuspenseContext| rsx! { PageLoading {} },
                LoadedPage { page, children }
            }
        }
    }
}

#[component]
fn LoadedPage(page: Page, children: Element) -> Element {
    let cache = use_page_cache();
    let bundle = use_resource(move || {
        let cache = cache.clone();
        async move { cache.load(page).await }
    })
    .suspend()?;

    let bundle = bundle.read().clone()?;
    let slug = page.slug();

    rsx! {
        document::Title { "{bundle.title}" }
        main { class: "page page-{slug}",
            header { class: "page-header",
                h1 { class: "page-title", "{bundle.heading}" }
                p { class: "page-blurb", "{bundle.blurb}" }
            }
            FormBoundary { {children} }
        }
    }
}

/// Catches render errors from form fields so they are not reported as a
/// failed page load
#[component]
pub fn FormBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! { FormFailed {} },
            {children}
        }
    }
}

#[component]
fn FormFailed() -> Element {
    tracing::warn!("A form field failed to render");
    let style = format!("border-color: {}; color: {};", colors::DANGER, colors::TEXT_PRIMARY);

    rsx! {
        div { class: "form-failed", role: "alert", style: "{style}",
            "Part of this form is not available."
        }
    }
}

/// Suspense fallback while a page loads
#[component]
pub fn PageLoading() -> Element {
    rsx! {
        div { class: "page-loading", role: "status",
            span { class: "page-loading-dot" }
            span { "loading..." }
        }
    }
}

/// Shown when a page bundle could not be loaded
#[component]
pub fn PageLoadFailed(page: Page) -> Element {
    let style = format!("border-color: {}; color: {};", colors::DANGER, colors::TEXT_PRIMARY);

    rsx! {
        div { class: "page-load-failed", role: "alert", style: "{style}",
            h2 { "This page could not be loaded" }
            p { class: "page-blurb", "Check the page files for \"{page}\" and try again." }
            p { class: "page-link",
                Link { to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{ClientError, InputKind};
    use portal_ui::Input;

    fn render_settled(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.render_immediate(&mut dioxus_core::NoOpMutations);
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn field_errors_stay_inside_the_form_boundary() {
        fn app() -> Element {
            rsx! {
                ErrorBoundary {
                    handle_error: |_: ErrorContext| rsx! { p { "page failed" } },
                    h1 { "Heading" }
                    FormBoundary {
                        Input { kind: InputKind::Telephone, value: String::new(), on_change: move |_| {} }
                    }
                }
            }
        }
        let html = render_settled(app);
        assert!(html.contains("form-failed"), "{html}");
        assert!(html.contains("Heading"), "{html}");
        assert!(!html.contains("page failed"), "{html}");
        assert!(!html.contains("could not be loaded"), "{html}");
    }

    #[test]
    fn healthy_form_renders_its_children() {
        fn app() -> Element {
            rsx! {
                FormBoundary { p { class: "form-body", "fields" } }
            }
        }
        let html = render_settled(app);
        assert!(html.contains("form-body"), "{html}");
        assert!(!html.contains("form-failed"), "{html}");
    }

    #[test]
    fn unimplemented_kind_error_names_the_kind() {
        let message = ClientError::UnimplementedInput(InputKind::Telephone).to_string();
        assert!(message.contains("telephone"), "{message}");
    }
}
