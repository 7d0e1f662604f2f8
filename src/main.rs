use log::info;
use yew::prelude::*;

mod config;
mod content;
mod roi;
mod router {
    pub mod history;
    pub mod link;
    pub mod navigator;
    pub mod provider;
    pub mod resolver;
    pub mod route;
}
mod components {
    pub mod comparison;
    pub mod contact;
    pub mod faq;
    pub mod features;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod how_it_works;
    pub mod layout;
    pub mod logo;
    pub mod pricing;
    pub mod roi_calculator;
    pub mod testimonials;
    pub mod trust;
}
mod pages {
    pub mod feature_detail;
    pub mod home;
    pub mod not_found;
    pub mod pricing;
}

use components::layout::Layout;
use pages::{
    feature_detail::FeatureDetailPage, home::HomePage, not_found::NotFoundPage,
    pricing::PricingPage,
};
use router::provider::{use_route, RouterProvider};
use router::resolver::{resolve, PageView};

fn switch(view: PageView) -> Html {
    match view {
        PageView::Home => {
            info!("Rendering Home page");
            html! { <HomePage /> }
        }
        PageView::Pricing => {
            info!("Rendering Pricing page");
            html! { <PricingPage /> }
        }
        PageView::FeatureDetail(id) => {
            info!("Rendering Feature page for {}", id);
            html! { <FeatureDetailPage feature_id={id} /> }
        }
        PageView::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFoundPage /> }
        }
    }
}

#[function_component(PageSwitch)]
fn page_switch() -> Html {
    let route = use_route();
    switch(resolve(&route))
}

#[function_component]
fn App() -> Html {
    html! {
        <RouterProvider>
            <Layout>
                <PageSwitch />
            </Layout>
        </RouterProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting LOQALY site");
    yew::Renderer::<App>::new().render();
}
