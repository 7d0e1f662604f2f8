use std::collections::HashSet;
use std::rc::Rc;

use log::error;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid content file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown availability marker {0:?}")]
    UnknownAvailability(String),
    #[error("feature id {0:?} is used more than once")]
    DuplicateFeature(String),
    #[error("comparison row {feature:?} has {found} cells, expected {expected}")]
    ComparisonWidth {
        feature: String,
        expected: usize,
        found: usize,
    },
    #[error("{0} plans are marked popular, at most one allowed")]
    MultiplePopularPlans(usize),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub text: String,
    pub long_description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub button_text: String,
    #[serde(default)]
    pub is_popular: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

/// How well a product covers a comparison row. Written as `true`, `false`
/// or `"partial"` in the content file.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "AvailabilityRepr")]
pub enum Availability {
    Yes,
    Partial,
    No,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AvailabilityRepr {
    Flag(bool),
    Word(String),
}

impl TryFrom<AvailabilityRepr> for Availability {
    type Error = ContentError;

    fn try_from(repr: AvailabilityRepr) -> Result<Self, Self::Error> {
        match repr {
            AvailabilityRepr::Flag(true) => Ok(Availability::Yes),
            AvailabilityRepr::Flag(false) => Ok(Availability::No),
            AvailabilityRepr::Word(word) if word == "partial" => Ok(Availability::Partial),
            AvailabilityRepr::Word(word) => Err(ContentError::UnknownAvailability(word)),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub feature: String,
    pub competitors: Vec<Availability>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ComparisonData {
    pub headers: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Metric {
    pub value: u64,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub comparison: ComparisonData,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub partners: Vec<String>,
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut ids = HashSet::new();
        for feature in &self.features {
            if !ids.insert(feature.id.as_str()) {
                return Err(ContentError::DuplicateFeature(feature.id.clone()));
            }
        }

        let expected = self.comparison.headers.len();
        for row in &self.comparison.rows {
            if row.competitors.len() != expected {
                return Err(ContentError::ComparisonWidth {
                    feature: row.feature.clone(),
                    expected,
                    found: row.competitors.len(),
                });
            }
        }

        let popular = self.plans.iter().filter(|p| p.is_popular).count();
        if popular > 1 {
            return Err(ContentError::MultiplePopularPlans(popular));
        }

        Ok(())
    }
}

thread_local! {
    static SITE: Rc<SiteContent> = Rc::new(load());
}

fn load() -> SiteContent {
    match SiteContent::from_json(SITE_JSON) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to load site content: {}", e);
            SiteContent::default()
        }
    }
}

/// The embedded site content, parsed once per thread.
pub fn site() -> Rc<SiteContent> {
    SITE.with(Rc::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let content = SiteContent::from_json(SITE_JSON).unwrap();
        assert!(!content.features.is_empty());
        assert!(!content.plans.is_empty());
        assert!(!content.faq.is_empty());
        assert_eq!(content.plans.iter().filter(|p| p.is_popular).count(), 1);
    }

    #[test]
    fn feature_lookup_by_id() {
        let content = site();
        assert_eq!(content.feature("qr-menu").map(|f| f.icon.as_str()), Some("qr"));
        assert!(content.feature("missing").is_none());
    }

    #[test]
    fn feature_ids_survive_path_parsing() {
        use crate::router::route::{parse_path, Route};

        for feature in &site().features {
            let path = format!("/features/{}", feature.id);
            assert_eq!(parse_path(&path), Route::feature(feature.id.clone()));
        }
    }

    #[test]
    fn availability_accepts_bools_and_partial() {
        let row: ComparisonRow =
            serde_json::from_str(r#"{"feature": "x", "competitors": [true, "partial", false]}"#).unwrap();
        assert_eq!(
            row.competitors,
            vec![Availability::Yes, Availability::Partial, Availability::No]
        );
    }

    #[test]
    fn unknown_availability_is_rejected() {
        let result: Result<ComparisonRow, _> =
            serde_json::from_str(r#"{"feature": "x", "competitors": ["maybe"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_feature_ids_fail_validation() {
        let raw = r#"{"features": [
            {"id": "a", "icon": "qr", "title": "A", "text": "", "long_description": ""},
            {"id": "a", "icon": "ai", "title": "B", "text": "", "long_description": ""}
        ]}"#;
        assert!(matches!(
            SiteContent::from_json(raw),
            Err(ContentError::DuplicateFeature(id)) if id == "a"
        ));
    }

    #[test]
    fn ragged_comparison_rows_fail_validation() {
        let raw = r#"{"comparison": {"headers": ["A", "B"], "rows": [
            {"feature": "x", "competitors": [true]}
        ]}}"#;
        assert!(matches!(
            SiteContent::from_json(raw),
            Err(ContentError::ComparisonWidth { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn two_popular_plans_fail_validation() {
        let plan = r#"{"name": "P", "price": "1", "period": "", "description": "", "features": [], "button_text": "", "is_popular": true}"#;
        let raw = format!(r#"{{"plans": [{}, {}]}}"#, plan, plan);
        assert!(matches!(
            SiteContent::from_json(&raw),
            Err(ContentError::MultiplePopularPlans(2))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(SiteContent::from_json("{"), Err(ContentError::Parse(_))));
    }
}
