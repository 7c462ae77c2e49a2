use dioxus::prelude::*;

/// A client-side navigation anchor.
///
/// Keeps a real `href` (middle-click, copy link) but suppresses the browser's
/// page load and reports the click through `onactivate`; the parent decides
/// which route change and menu effects follow.
#[component]
pub fn NavLink(
    href: &'static str,
    class: String,
    #[props(default)] active: bool,
    onactivate: EventHandler<()>,
    children: Element,
) -> Element {
    let underline = if active {
        "navbar__underline navbar__underline--active"
    } else {
        "navbar__underline"
    };

    rsx! {
        a {
            href,
            class: "{class}",
            aria_current: active.then_some("page"),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                onactivate.call(());
            },
            {children}
            span { class: underline, aria_hidden: "true" }
        }
    }
}
