use yew::prelude::*;

use crate::config;
use crate::content::{self, Plan};
use crate::router::link::NavLink;

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    /// Rendered as the body of the pricing page rather than a home section.
    #[prop_or_default]
    pub is_page: bool,
}

fn render_plan(plan: &Plan) -> Html {
    let button_class = if plan.is_popular { "btn btn-primary" } else { "btn btn-secondary" };

    html! {
        <div key={plan.name.clone()} class={classes!("pricing-card", plan.is_popular.then(|| "popular"))}>
            {
                if plan.is_popular {
                    html! { <div class="pricing-badge">{"Популярный"}</div> }
                } else {
                    html! {}
                }
            }
            <h3 class="pricing-title">{plan.name.clone()}</h3>
            <p class="pricing-description">{plan.description.clone()}</p>
            <div class="pricing-price">
                {plan.price.clone()}{" "}<span class="pricing-period">{plan.period.clone()}</span>
            </div>
            <ul class="pricing-features">
                { for plan.features.iter().map(|feature| html! {
                    <li key={feature.clone()}>{format!("✓ {}", feature)}</li>
                }) }
            </ul>
            <NavLink to={config::DEMO_PATH} classes={classes!(button_class)} style="width: 100%; margin-top: auto;">
                {plan.button_text.clone()}
            </NavLink>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let site = content::site();
    let section_style = if props.is_page { "" } else { "padding-bottom: 40px;" };

    html! {
        <section id="pricing" class="page-section" style={section_style}>
            <div class="container" style="text-align: center;">
                <h2 class="section-title">{"Выберите свой тариф"}</h2>
                <p class="section-text">
                    {"Начните бесплатно и растите вместе с нами. Все тарифы включают 14-дневный пробный период."}
                </p>
                <div class="pricing-grid">
                    { for site.plans.iter().map(render_plan) }
                </div>
            </div>
            <style>
                {r#"
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 24px;
                    margin-top: 48px;
                    align-items: stretch;
                }
                .pricing-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 20px;
                    padding: 24px;
                    text-align: left;
                    background: var(--bg-white);
                    border: 1px solid var(--border-color);
                    border-radius: var(--border-radius);
                    box-shadow: var(--shadow-md);
                }
                .pricing-card.popular {
                    border: 2px solid var(--primary-color);
                    transform: scale(1.05);
                }
                .pricing-badge {
                    position: absolute;
                    top: -15px;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 4px 12px;
                    border-radius: 99px;
                    font-size: 12px;
                    font-weight: 600;
                    color: white;
                    background: var(--primary-color);
                }
                .pricing-description {
                    min-height: 40px;
                    color: var(--text-light);
                }
                .pricing-price {
                    font-size: 32px;
                    font-weight: 800;
                }
                .pricing-period {
                    font-size: 16px;
                    font-weight: 600;
                    color: var(--text-light);
                }
                .pricing-features {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    flex-grow: 1;
                    font-size: 14px;
                    color: var(--text-light);
                }
                "#}
            </style>
        </section>
    }
}
