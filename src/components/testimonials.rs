use yew::prelude::*;

use crate::content;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let site = content::site();

    html! {
        <section class="page-section" style="background-color: var(--bg-light);">
            <div class="container">
                <h2 class="section-title">{"Что говорят наши партнеры"}</h2>
                <div class="testimonials-grid">
                    { for site.testimonials.iter().map(|t| html! {
                        <div class="testimonial-card" key={t.author.clone()}>
                            <p class="testimonial-text">{format!("\"{}\"", t.quote)}</p>
                            <div class="testimonial-author">
                                <p style="font-weight: 600;">{t.author.clone()}</p>
                                <p style="color: var(--text-light);">{t.role.clone()}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
