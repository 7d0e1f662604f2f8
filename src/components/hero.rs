use yew::prelude::*;

use crate::config;
use crate::router::link::NavLink;

const DASHBOARD_IMAGE: &str = "https://storage.googleapis.com/maker-studio-project-media-prod/1f5a2a53-4752-4712-a7f4-7546a1504886/images/loqaly-dashboard.png";

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero fade-in">
            <div class="hero-bg"></div>
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">{"Увеличивайте прибыль и\u{a0}возвращайте гостей"}</h1>
                    <p class="hero-subtitle">
                        {"LOQALY — это единая платформа для управления рестораном: от QR-меню и сбора отзывов до AI-аналитики и автоматического удержания клиентов."}
                    </p>
                    <div class="hero-buttons">
                        <NavLink to={config::DEMO_PATH} classes="btn btn-primary">{"Получить демо"}</NavLink>
                        <NavLink to="/pricing" classes="btn btn-secondary">{"Смотреть тарифы"}</NavLink>
                    </div>
                    <p class="hero-footnote">{"14 дней бесплатно, кредитная карта не требуется"}</p>
                </div>
                <div class="hero-image">
                    <img src={DASHBOARD_IMAGE} alt="Панель управления LOQALY" />
                </div>
            </div>
        </section>
    }
}
