use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::components::{
    comparison::Comparison, contact::Contact, faq::Faq, features::Features, hero::Hero,
    how_it_works::HowItWorks, pricing::Pricing, roi_calculator::RoiCalculator,
    testimonials::Testimonials, trust::Trust,
};
use crate::router::link::scroll_to_anchor;

fn current_anchor() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    let anchor = hash.trim_start_matches('#');
    (!anchor.is_empty()).then(|| anchor.to_string())
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    // Landing on /#faq and friends: sections exist only after this render.
    use_effect_with_deps(
        |_| {
            if let Some(anchor) = current_anchor() {
                Timeout::new(0, move || scroll_to_anchor(&anchor)).forget();
            }
            || ()
        },
        (),
    );

    html! {
        <div class="fade-in">
            <Hero />
            <Trust />
            <Features />
            <HowItWorks />
            <RoiCalculator />
            <Comparison />
            <Testimonials />
            <Pricing />
            <Faq />
            <Contact />
        </div>
    }
}
