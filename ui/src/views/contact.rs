use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Contact() -> Element {
    let email = t!("contact-email");

    rsx! {
        section { class: "page page-contact",
            h1 { {t!("contact-title")} }
            p { class: "page__lead", {t!("contact-intro")} }
            a { class: "page-contact__email", href: "mailto:{email}", "{email}" }
        }
    }
}
