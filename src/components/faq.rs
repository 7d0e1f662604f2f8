use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{"+"}</span>
            </button>
            {
                if *is_open {
                    html! {
                        <div class="faq-answer">
                            <p>{&props.answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let site = content::site();

    html! {
        <section id="faq" class="page-section" style="background-color: var(--bg-light);">
            <div class="container">
                <h2 class="section-title">{"Часто задаваемые вопросы"}</h2>
                <div class="faq-container">
                    { for site.faq.iter().map(|entry| html! {
                        <FaqItem key={entry.q.clone()} question={entry.q.clone()} answer={entry.a.clone()} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .faq-container {
                    max-width: 800px;
                    margin: 48px auto 0;
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }

                .faq-item {
                    background: var(--bg-white);
                    border: 1px solid var(--border-color);
                    border-radius: var(--border-radius);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 20px;
                    background: transparent;
                    border: none;
                    text-align: left;
                    font-size: 18px;
                    font-weight: 600;
                    cursor: pointer;
                }

                .toggle-icon {
                    font-size: 24px;
                    color: var(--primary-color);
                    transition: transform 0.2s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(45deg);
                }

                .faq-answer {
                    padding: 0 20px 20px 20px;
                    color: var(--text-light);
                    line-height: 1.7;
                }
                "#}
            </style>
        </section>
    }
}
