use yew::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::config;
use crate::router::link::NavLink;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <Header />
            <main>{ for props.children.iter() }</main>
            <Footer />
            <NavLink to={config::DEMO_PATH} classes="btn btn-primary floating-cta">
                {"Получить демо"}
            </NavLink>
        </>
    }
}
