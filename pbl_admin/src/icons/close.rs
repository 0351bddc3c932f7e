use leptos::prelude::*;

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <svg
            width="20px"
            height="20px"
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                d="M6 6L18 18M18 6L6 18"
                stroke="currentColor"
                stroke-linecap="round"
                stroke-width="2"
            />
        </svg>
    }
}
