//! Internationalization (i18n) support for `vrtech-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/vrtech-ui.ftl   (fallback/reference)
//!   es-ES/vrtech-ui.ftl
//!   fr-FR/vrtech-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let toggle = t!("nav-open-menu");
//! ```
//!
//! Platform notes:
//! - Web/WASM: `WebLanguageRequester` (`navigator.languages`).
//! - Native (tests, SSR): `DesktopLanguageRequester` (OS locale list).
//!
//! NOTE: The hyphenated filename `vrtech-ui.ftl` must match the package name;
//! `fl!` resolves its domain from it at compile time.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routing every lookup through [`LOADER`], e.g.
/// `t!("nav-home")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
}

/// Fluent domain; fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "vrtech-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(
                ?selected,
                available = ?available_languages(),
                "localization bundles loaded"
            ),
            Err(err) => tracing::warn!(%err, "failed selecting languages; continuing with fallback"),
        }
    });
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Localized label for a navigation entry key.
///
/// `fl!` only accepts literal keys, so every key in
/// [`crate::core::NAV_ENTRIES`] needs an arm here.
pub fn nav_label(key: &str) -> String {
    match key {
        "nav-home" => crate::t!("nav-home"),
        "nav-services" => crate::t!("nav-services"),
        "nav-contact" => crate::t!("nav-contact"),
        other => {
            tracing::warn!(key = other, "no translation arm for navigation label");
            other.to_string()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NAV_ENTRIES;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn every_entry_has_a_translation_arm() {
        init();
        for entry in NAV_ENTRIES {
            assert_ne!(nav_label(entry.label), entry.label);
        }
    }

    #[test]
    fn fallback_labels_are_english() {
        let en: LanguageIdentifier = "en-US".parse().unwrap();
        let loader = FluentLanguageLoader::new(DOMAIN, en.clone());
        i18n_embed::select(&loader, &Localizations, &[en]).unwrap();
        assert_eq!(fl!(&loader, "nav-home"), "Home");
        assert_eq!(fl!(&loader, "nav-services"), "Services");
        assert_eq!(fl!(&loader, "nav-contact"), "Contact");
    }
}
