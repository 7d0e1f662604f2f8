use yew::prelude::*;

use crate::content;
use crate::pages::not_found::NotFoundPage;
use crate::router::link::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct FeatureDetailProps {
    pub feature_id: AttrValue,
}

#[function_component(FeatureDetailPage)]
pub fn feature_detail_page(props: &FeatureDetailProps) -> Html {
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        props.feature_id.clone(),
    );

    let site = content::site();
    let Some(feature) = site.feature(&props.feature_id) else {
        log::info!("No feature with id {}", props.feature_id);
        return html! { <NotFoundPage /> };
    };

    html! {
        <div class="fade-in">
            <section class="page-section" style="padding-top: 60px; padding-bottom: 60px; background: var(--bg-light);">
                <div class="container">
                    <h1 class="section-title">{feature.title.clone()}</h1>
                    <p class="section-text" style="font-size: 20px;">{feature.text.clone()}</p>
                </div>
            </section>
            <section class="page-section">
                <div class="container" style="max-width: 800px;">
                    <p style="font-size: 18px; line-height: 1.8; color: var(--text-dark);">
                        {feature.long_description.clone()}
                    </p>
                </div>
            </section>
        </div>
    }
}
