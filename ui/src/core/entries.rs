//! Static navigation entries and active-route matching.

/// One link in the site navigation.
///
/// `label` is a localization key, resolved through `t!`-style lookups at
/// render time (see [`crate::i18n::nav_label`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub path: &'static str,
    /// Active only when the current route equals `path` exactly.
    pub exact_match: bool,
}

impl NavigationEntry {
    pub const fn new(label: &'static str, path: &'static str, exact_match: bool) -> Self {
        Self {
            label,
            path,
            exact_match,
        }
    }

    /// Whether this entry should carry the active marker for `current_route`.
    pub fn is_active(&self, current_route: &str) -> bool {
        is_active(self, current_route)
    }
}

/// Site navigation, in display order.
pub const NAV_ENTRIES: [NavigationEntry; 3] = [
    NavigationEntry::new("nav-home", "/", true),
    NavigationEntry::new("nav-services", "/services", false),
    NavigationEntry::new("nav-contact", "/contact", false),
];

/// Path the brand (logo + name) links to.
pub const BRAND_PATH: &str = "/";

/// Exact entries compare the whole normalized path. Others match on whole
/// path segments, so `/services/vr` activates `/services` but `/servicesx`
/// does not.
pub fn is_active(entry: &NavigationEntry, current_route: &str) -> bool {
    let current = normalize(current_route);
    let target = normalize(entry.path);

    if entry.exact_match || target == "/" {
        return current == target;
    }

    match current.strip_prefix(target) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Drops query string, fragment and trailing slashes (`/` stays `/`).
fn normalize(route: &str) -> &str {
    let end = route.find(['?', '#']).unwrap_or(route.len());
    let path = route[..end].trim_end_matches('/');
    if path.is_empty() {
        "/"
    } else {
        path
    }
}
