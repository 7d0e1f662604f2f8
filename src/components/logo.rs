use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub on_dark: bool,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let (primary, secondary) = if props.on_dark {
        ("var(--bg-white)", "var(--bg-white)")
    } else {
        ("var(--primary-color)", "var(--text-dark)")
    };

    html! {
        <div aria-label="LOQALY Homepage" style="display: inline-block; line-height: 1;">
            <svg height="32" viewBox="0 0 135 32" xmlns="http://www.w3.org/2000/svg">
                <g>
                    <circle cx="16" cy="16" r="15" stroke={primary} stroke-width="2.5" fill="none" />
                    <path
                        fill-rule="evenodd"
                        clip-rule="evenodd"
                        d="M16 25C16 25 22 19.8333 22 15.5C22 11.1667 19.3137 8 16 8C12.6863 8 10 11.1667 10 15.5C10 19.8333 16 25 16 25ZM16 18.5C17.6569 18.5 19 17.1569 19 15.5C19 13.8431 17.6569 12.5 16 12.5C14.3431 12.5 13 13.8431 13 15.5C13 17.1569 14.3431 18.5 16 18.5Z"
                        fill={secondary}
                    />
                </g>
                <text x="42" y="23" font-family="Manrope, sans-serif" font-size="22" font-weight="800" fill={secondary}>
                    {"LOQALY"}
                </text>
            </svg>
        </div>
    }
}
