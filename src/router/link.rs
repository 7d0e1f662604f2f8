use gloo_timers::callback::Timeout;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use super::provider::use_nav;

/// The anchor part of `path`: text between the first `#` and the next one.
pub fn fragment(path: &str) -> Option<&str> {
    path.split('#').nth(1).filter(|anchor| !anchor.is_empty())
}

pub fn scroll_to_anchor(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Navigates to `path`, then scrolls to its anchor once the new page rendered.
pub fn go_to(navigate: &Callback<String>, path: &str) {
    navigate.emit(path.to_string());
    if let Some(anchor) = fragment(path) {
        let anchor = anchor.to_string();
        Timeout::new(0, move || scroll_to_anchor(&anchor)).forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Fired before navigating, e.g. to close a menu.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-app link: keeps a real `href` but navigates without a page load.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let navigate = use_nav();
    let onclick = {
        let to = props.to.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(());
            go_to(&navigate, &to);
        })
    };

    html! {
        <a href={props.to.clone()} class={props.classes.clone()} style={props.style.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_is_text_after_hash() {
        assert_eq!(fragment("/#faq"), Some("faq"));
        assert_eq!(fragment("/pricing#plans"), Some("plans"));
    }

    #[test]
    fn fragment_stops_at_second_hash() {
        assert_eq!(fragment("/#a#b"), Some("a"));
    }

    #[test]
    fn missing_or_empty_fragment_is_none() {
        assert_eq!(fragment("/pricing"), None);
        assert_eq!(fragment("/#"), None);
        assert_eq!(fragment(""), None);
    }
}
