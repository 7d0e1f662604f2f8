use yew::prelude::*;

const STEPS: [(&str, &str); 3] = [
    (
        "Быстрая регистрация",
        "Создайте аккаунт за 5 минут. Никаких сложных договоров и долгого ожидания.",
    ),
    (
        "Настройка профиля",
        "Загрузите меню, подключите POS (iiko, r_keeper) и соцсети для сбора всех данных в одном месте.",
    ),
    (
        "Получайте результат",
        "Разместите QR-код и начните собирать отзывы, увеличивать прибыль и возвращать гостей.",
    ),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="page-section">
            <div class="container" style="text-align: center;">
                <h2 class="section-title">{"Начать работу — это просто"}</h2>
                <p class="section-text">{"Запустите свой цифровой ресторан всего за 3 шага."}</p>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <div class="step-card" key={i}>
                            <div class="step-number">{i + 1}</div>
                            <h3 class="feature-title">{*title}</h3>
                            <p class="feature-text">{*text}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
