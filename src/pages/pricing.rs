use yew::prelude::*;

use crate::components::{contact::Contact, faq::Faq, pricing::Pricing};
use crate::router::link::scroll_to_top;

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="fade-in">
            <div class="page-section" style="padding-bottom: 0;">
                <div class="container" style="text-align: center;">
                    <h1 class="section-title">{"Прозрачные тарифы для вашего бизнеса"}</h1>
                    <p class="section-text">
                        {"Выберите план, который подходит именно вам. Без скрытых платежей и долгосрочных контрактов."}
                    </p>
                </div>
            </div>
            <Pricing is_page={true} />
            <Faq />
            <Contact />
        </div>
    }
}
