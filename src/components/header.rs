use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::config;
use crate::content;
use crate::router::link::NavLink;
use crate::router::provider::use_nav;

const SCROLLED_THRESHOLD: f64 = 10.0;

#[function_component(Header)]
pub fn header() -> Html {
    let navigate = use_nav();
    let is_scrolled = use_state(|| false);
    let dropdown_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let open_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(true))
    };
    let close_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(false))
    };
    let close_on_navigate = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: ()| dropdown_open.set(false))
    };
    let go_home = Callback::from(move |_: MouseEvent| navigate.emit("/".to_string()));

    let site = content::site();

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container header-nav">
                <div onclick={go_home} style="cursor: pointer;">
                    <Logo />
                </div>
                <nav class="nav-links">
                    <div class="nav-dropdown" onmouseenter={open_dropdown} onmouseleave={close_dropdown}>
                        <NavLink to="/#features" classes="nav-link" on_navigate={close_on_navigate.clone()}>
                            {"Возможности"}
                        </NavLink>
                        {
                            if *dropdown_open {
                                html! {
                                    <div class="dropdown">
                                        { for site.features.iter().map(|feature| html! {
                                            <NavLink
                                                key={feature.id.clone()}
                                                to={format!("/features/{}", feature.id)}
                                                classes="dropdown-link"
                                                on_navigate={close_on_navigate.clone()}
                                            >
                                                {feature.title.clone()}
                                            </NavLink>
                                        }) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <NavLink to="/pricing" classes="nav-link">{"Тарифы"}</NavLink>
                    <NavLink to="/#faq" classes="nav-link">{"FAQ"}</NavLink>
                </nav>
                <NavLink to={config::DEMO_PATH} classes="btn btn-primary" style="padding: 8px 16px;">
                    {"Получить демо"}
                </NavLink>
            </div>
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 100;
                    padding: 16px 0;
                    background: rgba(255, 255, 255, 0.8);
                    border-bottom: 1px solid transparent;
                    transition: background-color 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.scrolled {
                    background-color: rgba(255, 255, 255, 0.9);
                    backdrop-filter: saturate(180%) blur(10px);
                    border-bottom: 1px solid var(--border-color);
                    box-shadow: var(--shadow-sm);
                }
                .header-nav {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 32px;
                }
                .nav-dropdown {
                    position: relative;
                }
                .dropdown {
                    position: absolute;
                    top: 100%;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    width: 250px;
                    padding: 8px;
                    margin-top: 12px;
                    background-color: var(--bg-white);
                    border: 1px solid var(--border-color);
                    border-radius: var(--border-radius);
                    box-shadow: var(--shadow-lg);
                    z-index: 110;
                }
                .dropdown-link {
                    padding: 10px 12px;
                    color: var(--text-dark);
                    text-decoration: none;
                    white-space: nowrap;
                }
                "#}
            </style>
        </header>
    }
}
