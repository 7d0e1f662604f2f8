use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Trimmed e-mail if there is anything to submit.
pub fn submission(email: &str) -> Option<&str> {
    let email = email.trim();
    (!email.is_empty()).then_some(email)
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let email = use_state(String::new);
    let submitted = use_state(|| false);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(address) = submission(&email) {
                info!("Demo requested for {}", address);
                submitted.set(true);
            }
        })
    };

    html! {
        <section id="contact" class="page-section" style="background-color: var(--bg-light);">
            <div class="container" style="text-align: center;">
                <h2 class="section-title">{"Готовы увеличить прибыль?"}</h2>
                <p class="section-text">
                    {"Оставьте заявку, и мы проведём для вас персональную демонстрацию возможностей LOQALY."}
                </p>
                {
                    if *submitted {
                        html! {
                            <p class="contact-success">{"Спасибо! Мы скоро свяжемся с вами."}</p>
                        }
                    } else {
                        html! {
                            <form class="contact-form" {onsubmit}>
                                <input
                                    type="email"
                                    placeholder="Ваш email"
                                    value={(*email).clone()}
                                    {oninput}
                                    required={true}
                                />
                                <button type="submit" class="btn btn-primary">{"Получить демо"}</button>
                            </form>
                        }
                    }
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_is_not_submitted() {
        assert_eq!(submission(""), None);
        assert_eq!(submission("   "), None);
    }

    #[test]
    fn email_is_trimmed() {
        assert_eq!(submission("  chef@bistro.ru "), Some("chef@bistro.ru"));
    }
}
