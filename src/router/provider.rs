use log::error;
use yew::prelude::*;

use super::navigator::{navigate_or_log, Navigator};
use super::route::Route;

/// Current route plus the navigator that produced it.
#[derive(Clone, PartialEq)]
pub struct RouterContext {
    pub route: Route,
    pub navigator: Navigator,
}

#[derive(Properties, PartialEq)]
pub struct RouterProviderProps {
    #[prop_or_default]
    pub children: Children,
    /// Defaults to the browser-backed global navigator.
    #[prop_or_default]
    pub navigator: Option<Navigator>,
}

/// Holds the current route as state and keeps it in sync with the navigator.
#[function_component(RouterProvider)]
pub fn router_provider(props: &RouterProviderProps) -> Html {
    let navigator = props.navigator.clone().unwrap_or_else(Navigator::global);
    let route = use_state(|| navigator.current_route());

    {
        let route = route.clone();
        use_effect_with_deps(
            move |navigator: &Navigator| {
                let setter = route.setter();
                let subscription = match navigator.observe(move |next: &Route| setter.set(next.clone())) {
                    Ok(subscription) => Some(subscription),
                    Err(e) => {
                        error!("Route observer unavailable: {}", e);
                        None
                    }
                };
                // catch a navigation that happened between render and subscribe
                let current = navigator.current_route();
                if *route != current {
                    route.set(current);
                }
                move || drop(subscription)
            },
            navigator.clone(),
        );
    }

    let context = RouterContext {
        route: (*route).clone(),
        navigator,
    };

    html! {
        <ContextProvider<RouterContext> {context}>
            { for props.children.iter() }
        </ContextProvider<RouterContext>>
    }
}

#[hook]
pub fn use_route() -> Route {
    use_context::<RouterContext>()
        .map(|ctx| ctx.route)
        .unwrap_or_default()
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<RouterContext>()
        .map(|ctx| ctx.navigator)
        .unwrap_or_else(Navigator::global)
}

/// Callback that navigates to the emitted path.
#[hook]
pub fn use_nav() -> Callback<String> {
    let navigator = use_navigator();
    Callback::from(move |path: String| navigate_or_log(&navigator, &path))
}
