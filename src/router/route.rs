use std::collections::HashMap;
use std::fmt;

const FEATURES_MARKER: &str = "/features/";
const PRICING_MARKER: &str = "/pricing";

/// Logical page a path resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Pricing,
    Feature,
    NotFound,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Pricing => "pricing",
            Page::Feature => "feature",
            Page::NotFound => "not-found",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved navigation state. Derived fresh from the URL path on every
/// navigation event, never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    pub params: HashMap<String, String>,
}

impl Route {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            params: HashMap::new(),
        }
    }

    pub fn feature(id: impl Into<String>) -> Self {
        let mut params = HashMap::new();
        params.insert("id".to_string(), id.into());
        Self {
            page: Page::Feature,
            params,
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::new(Page::Home)
    }
}

/// Maps any path to exactly one route.
///
/// Matching is by substring, not by path segment, so `/foo/features/bar/x`
/// still resolves to the `bar` feature. Anything unrecognized lands on the
/// home page, which keeps the first load working under whatever prefix the
/// host serves the site from.
pub fn parse_path(path: &str) -> Route {
    if let Some((_, rest)) = path.split_once(FEATURES_MARKER) {
        let id = rest.split('/').next().unwrap_or_default();
        if !id.is_empty() {
            return Route::feature(id);
        }
    }

    if path.contains(PRICING_MARKER) {
        return Route::new(Page::Pricing);
    }

    Route::new(Page::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_path_extracts_id() {
        let route = parse_path("/features/qr-menu");
        assert_eq!(route.page, Page::Feature);
        assert_eq!(route.param("id"), Some("qr-menu"));
    }

    #[test]
    fn feature_id_stops_at_next_slash() {
        assert_eq!(parse_path("/features/qr-menu/extra").param("id"), Some("qr-menu"));
        assert_eq!(parse_path("/features/qr-menu/").param("id"), Some("qr-menu"));
    }

    #[test]
    fn feature_marker_matches_anywhere_in_path() {
        let route = parse_path("/foo/features/bar/extra");
        assert_eq!(route, Route::feature("bar"));
    }

    #[test]
    fn empty_feature_segment_falls_through() {
        assert_eq!(parse_path("/features/").page, Page::Home);
        assert_eq!(parse_path("/features//x").page, Page::Home);
        assert_eq!(parse_path("/pricing/features/").page, Page::Pricing);
    }

    #[test]
    fn feature_rule_wins_over_pricing() {
        assert_eq!(parse_path("/pricing/features/ai").page, Page::Feature);
        assert_eq!(parse_path("/features/pricing").param("id"), Some("pricing"));
    }

    #[test]
    fn pricing_matches_by_substring() {
        assert_eq!(parse_path("/pricing"), Route::new(Page::Pricing));
        assert_eq!(parse_path("/pricing/anything").page, Page::Pricing);
        assert_eq!(parse_path("/en/pricing-old").page, Page::Pricing);
    }

    #[test]
    fn pricing_route_has_no_params() {
        assert!(parse_path("/pricing").params.is_empty());
    }

    #[test]
    fn unknown_paths_default_to_home() {
        for path in [
            "",
            "/",
            "/index.html",
            "/some-hash/index.html",
            "/features",
            "/feature/qr-menu",
            "/Pricing",
            "not even a path",
            "/#faq",
            "\u{0}\u{ffff}",
        ] {
            let route = parse_path(path);
            assert_eq!(route.page, Page::Home, "path {:?}", path);
            assert!(route.params.is_empty());
        }
    }

    #[test]
    fn page_names_match_route_identifiers() {
        assert_eq!(Page::Home.to_string(), "home");
        assert_eq!(Page::Pricing.to_string(), "pricing");
        assert_eq!(Page::Feature.to_string(), "feature");
        assert_eq!(Page::NotFound.to_string(), "not-found");
    }
}
