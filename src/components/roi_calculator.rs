use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::roi::{format_grouped, RoiModel, Slider, AVG_CHECK, GUESTS};

fn on_slide(state: UseStateHandle<u32>, slider: Slider) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(slider.parse(&input.value()));
    })
}

#[function_component(RoiCalculator)]
pub fn roi_calculator() -> Html {
    let avg_check = use_state(|| AVG_CHECK.default);
    let guests = use_state(|| GUESTS.default);

    let revenue = {
        let (avg_check, guests) = (*avg_check, *guests);
        use_memo(
            move |_| RoiModel::default().additional_revenue(avg_check, guests),
            (avg_check, guests),
        )
    };

    html! {
        <section class="page-section" style="background-color: var(--bg-light);">
            <div class="container roi-grid">
                <div>
                    <h2 class="roi-title">{"Сколько вы теряете без LOQALY?"}</h2>
                    <p class="roi-text">
                        {"Рассчитайте примерную дополнительную выручку, которую вы можете получать каждый месяц, эффективно работая с обратной связью и возвращая гостей."}
                    </p>
                </div>
                <div class="roi-calculator">
                    <div class="roi-input-group">
                        <label for="avgCheck">{"Средний чек, ₽"}</label>
                        <input
                            id="avgCheck"
                            type="range"
                            min={AVG_CHECK.min.to_string()}
                            max={AVG_CHECK.max.to_string()}
                            step={AVG_CHECK.step.to_string()}
                            value={avg_check.to_string()}
                            oninput={on_slide(avg_check.clone(), AVG_CHECK)}
                        />
                        <span class="roi-value">{format!("{} ₽", format_grouped(*avg_check as u64))}</span>
                    </div>
                    <div class="roi-input-group">
                        <label for="guests">{"Гостей в месяц"}</label>
                        <input
                            id="guests"
                            type="range"
                            min={GUESTS.min.to_string()}
                            max={GUESTS.max.to_string()}
                            step={GUESTS.step.to_string()}
                            value={guests.to_string()}
                            oninput={on_slide(guests.clone(), GUESTS)}
                        />
                        <span class="roi-value">{format_grouped(*guests as u64)}</span>
                    </div>
                    <div class="roi-result">
                        <p class="roi-result-label">{"Доп. выручка в месяц:"}</p>
                        <p class="roi-result-value">{format!("~ {} ₽", format_grouped(*revenue))}</p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .roi-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 64px;
                    align-items: center;
                }
                .roi-title {
                    font-size: 36px;
                    font-weight: 800;
                    margin-bottom: 16px;
                    line-height: 1.3;
                }
                .roi-text {
                    font-size: 18px;
                    max-width: 450px;
                    color: var(--text-light);
                }
                .roi-calculator {
                    padding: 32px;
                    background: var(--bg-white);
                    border: 1px solid var(--border-color);
                    border-radius: var(--border-radius);
                    box-shadow: var(--shadow-lg);
                }
                .roi-input-group {
                    margin-bottom: 24px;
                }
                .roi-input-group label {
                    display: block;
                    font-weight: 600;
                    margin-bottom: 8px;
                }
                .roi-input-group input {
                    width: 100%;
                    cursor: pointer;
                }
                .roi-value {
                    display: block;
                    text-align: right;
                    font-weight: 700;
                    font-size: 18px;
                    color: var(--primary-dark);
                }
                .roi-result {
                    margin-top: 32px;
                    padding-top: 24px;
                    border-top: 1px dashed var(--border-color);
                    text-align: center;
                }
                .roi-result-value {
                    font-size: 42px;
                    font-weight: 800;
                    color: var(--primary-color);
                }
                "#}
            </style>
        </section>
    }
}
