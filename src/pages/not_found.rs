use web_sys::MouseEvent;
use yew::prelude::*;

use crate::router::provider::use_nav;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let navigate = use_nav();
    let go_home = Callback::from(move |_: MouseEvent| navigate.emit("/".to_string()));

    html! {
        <div class="container" style="text-align: center; padding: 80px 0;">
            <h1 style="font-size: 48px; margin-bottom: 16px;">{"404"}</h1>
            <p style="font-size: 24px; color: var(--text-light); margin-bottom: 32px;">
                {"Страница не найдена"}
            </p>
            <button class="btn btn-primary" onclick={go_home}>{"Вернуться на главную"}</button>
        </div>
    }
}
