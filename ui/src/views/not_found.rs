use dioxus::prelude::*;

use crate::t;

/// Rendered for unknown paths. `segments` is the unmatched route, logged only.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route matched");

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-intro")} }
        }
    }
}
