use yew::prelude::*;

use crate::content::{self, Availability};

fn availability_mark(available: Availability) -> Html {
    let (mark, color) = match available {
        Availability::Yes => ("✓", "var(--primary-color)"),
        Availability::Partial => ("~", "var(--secondary-color)"),
        Availability::No => ("✕", "var(--border-color)"),
    };
    html! {
        <span style={format!("color: {}; font-size: 24px;", color)}>{mark}</span>
    }
}

#[function_component(Comparison)]
pub fn comparison() -> Html {
    let site = content::site();
    let data = &site.comparison;

    html! {
        <section class="page-section" style="background-color: var(--bg-white);">
            <div class="container">
                <h2 class="section-title">{"Сравните возможности"}</h2>
                <p class="section-text">
                    {"Посмотрите, как LOQALY выглядит на фоне стандартных решений для автоматизации и маркетинга."}
                </p>
                <div class="comparison-wrapper">
                    <table class="comparison-table">
                        <thead>
                            <tr>
                                <th style="text-align: left;">{"Возможность"}</th>
                                { for data.headers.iter().map(|header| html! {
                                    <th key={header.clone()}>{header.clone()}</th>
                                }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for data.rows.iter().enumerate().map(|(row_index, row)| html! {
                                <tr key={row_index}>
                                    <td style="font-weight: 600;">{row.feature.clone()}</td>
                                    { for row.competitors.iter().enumerate().map(|(i, available)| html! {
                                        <td key={i}>{availability_mark(*available)}</td>
                                    }) }
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
        </section>
    }
}
