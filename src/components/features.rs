use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content;
use crate::router::provider::use_nav;

fn icon_path(icon: &str) -> &'static str {
    match icon {
        "qr" => "M4 6h16M4 12h16M4 18h7m-3-6h.01M12 18h.01M15 18h.01",
        "feedback" => "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z",
        "ai" => "M13 10V3L4 14h7v7l9-11h-7z",
        "campaign" => "M19 11a7 7 0 01-7 7m0 0a7 7 0 01-7-7m7 7v4m0 0H8m4 0h4m-4-8a3 3 0 01-3-3V5a3 3 0 116 0v6a3 3 0 01-3 3z",
        "aggregate" => "M5 8h14M5 12h14M5 16h14",
        "integration" => "M17 8l4 4m0 0l-4 4m4-4H3",
        _ => "",
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureIconProps {
    pub icon: AttrValue,
}

#[function_component(FeatureIcon)]
pub fn feature_icon(props: &FeatureIconProps) -> Html {
    html! {
        <div class="feature-icon">
            <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor" width="28" height="28">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={icon_path(&props.icon)} />
            </svg>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let navigate = use_nav();
    let site = content::site();

    html! {
        <section id="features" class="page-section" style="background-color: var(--bg-light);">
            <div class="container" style="text-align: center;">
                <h2 class="section-title">{"Что умеет LOQALY"}</h2>
                <p class="section-text">{"Все инструменты для роста вашего заведения в одном месте."}</p>
                <div class="feature-showcase-grid">
                    { for site.features.iter().map(|feature| {
                        let onclick = {
                            let navigate = navigate.clone();
                            let path = format!("/features/{}", feature.id);
                            Callback::from(move |_: MouseEvent| navigate.emit(path.clone()))
                        };
                        html! {
                            <div key={feature.id.clone()} class="feature-showcase-card" {onclick}>
                                <FeatureIcon icon={feature.icon.clone()} />
                                <h3 class="feature-title">{feature.title.clone()}</h3>
                                <p class="feature-text">{feature.text.clone()}</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_content_icon_has_a_path() {
        for feature in &content::site().features {
            assert!(!icon_path(&feature.icon).is_empty(), "icon {}", feature.icon);
        }
    }

    #[test]
    fn unknown_icon_draws_nothing() {
        assert_eq!(icon_path("rocket"), "");
    }
}
