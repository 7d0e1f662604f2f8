use yew::prelude::*;

use crate::content::{self, Metric};
use crate::roi::format_grouped;

fn render_metric(metric: &Metric) -> Html {
    html! {
        <div class="metric-item" key={metric.label.clone()}>
            <div class="metric-value">
                {format!("{}{}{}", metric.prefix, format_grouped(metric.value), metric.suffix)}
            </div>
            <div class="metric-label">{metric.label.clone()}</div>
        </div>
    }
}

#[function_component(Trust)]
pub fn trust() -> Html {
    let site = content::site();

    html! {
        <section class="trust-section">
            <div class="container" style="text-align: center;">
                <div class="metrics-grid">
                    { for site.metrics.iter().map(render_metric) }
                </div>
                <div class="logo-cloud">
                    <p class="logo-cloud-title">{"Нам доверяют лидеры индустрии"}</p>
                    <div class="logo-cloud-grid">
                        { for site.partners.iter().map(|name| html! {
                            <span key={name.clone()} class="logo-cloud-item">{name.clone()}</span>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
