use super::route::{Page, Route};

/// Top-level view selected for a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageView {
    Home,
    Pricing,
    FeatureDetail(String),
    NotFound,
}

/// Picks the page view from the route's shape only. Whether a feature with
/// that id exists is the feature view's business.
pub fn resolve(route: &Route) -> PageView {
    match route.page {
        Page::Home => PageView::Home,
        Page::Pricing => PageView::Pricing,
        Page::Feature => match route.param("id") {
            Some(id) if !id.is_empty() => PageView::FeatureDetail(id.to_string()),
            _ => PageView::NotFound,
        },
        Page::NotFound => PageView::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route::parse_path;

    #[test]
    fn resolves_known_pages() {
        assert_eq!(resolve(&parse_path("/")), PageView::Home);
        assert_eq!(resolve(&parse_path("/pricing")), PageView::Pricing);
        assert_eq!(
            resolve(&parse_path("/features/qr-menu")),
            PageView::FeatureDetail("qr-menu".to_string())
        );
    }

    #[test]
    fn unknown_feature_id_still_resolves_to_detail_view() {
        assert_eq!(
            resolve(&Route::feature("does-not-exist")),
            PageView::FeatureDetail("does-not-exist".to_string())
        );
    }

    #[test]
    fn feature_without_id_is_not_found() {
        assert_eq!(resolve(&Route::new(Page::Feature)), PageView::NotFound);
        assert_eq!(resolve(&Route::feature("")), PageView::NotFound);
    }

    #[test]
    fn not_found_route_is_not_found() {
        assert_eq!(resolve(&Route::new(Page::NotFound)), PageView::NotFound);
    }
}
