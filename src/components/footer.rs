use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::config;
use crate::router::link::NavLink;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    let mailto = format!("mailto:{}", config::get_contact_email());

    html! {
        <footer class="site-footer fade-in">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Logo on_dark={true} />
                        <p class="footer-text">{"Платформа для роста вашего бизнеса."}</p>
                        <div class="footer-socials">
                            <a href="#" class="footer-link">{"TG"}</a>
                            <a href="#" class="footer-link">{"VC"}</a>
                        </div>
                    </div>
                    <div class="footer-links">
                        <h4>{"Продукт"}</h4>
                        <NavLink to="/#features" classes="footer-link">{"Возможности"}</NavLink>
                        <NavLink to="/pricing" classes="footer-link">{"Тарифы"}</NavLink>
                        <NavLink to="/#how-it-works" classes="footer-link">{"Как это работает"}</NavLink>
                    </div>
                    <div class="footer-links">
                        <h4>{"Компания"}</h4>
                        <a href="#" class="footer-link">{"О нас"}</a>
                        <a href={mailto} class="footer-link">{config::get_contact_email()}</a>
                        <a href="#" class="footer-link">{"Партнерам"}</a>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="footer-text">{format!("© {} LOQALY. Все права защищены.", year)}</p>
                    <a href="#" class="footer-link">{"Политика конфиденциальности"}</a>
                </div>
            </div>
        </footer>
    }
}
