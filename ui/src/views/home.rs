use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { class: "page__lead", {t!("home-intro")} }
            p { class: "page-home__cta", {t!("home-cta")} }
        }
    }
}
