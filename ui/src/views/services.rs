use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Services() -> Element {
    rsx! {
        section { class: "page page-services",
            h1 { {t!("services-title")} }
            p { class: "page__lead", {t!("services-intro")} }
            ul { class: "page-services__list",
                li { {t!("services-training")} }
                li { {t!("services-showrooms")} }
                li { {t!("services-events")} }
            }
        }
    }
}
