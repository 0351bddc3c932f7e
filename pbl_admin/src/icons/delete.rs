use leptos::prelude::*;

#[component]
pub fn DeleteIcon() -> impl IntoView {
    view! {
        <svg
            width="20px"
            height="20px"
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                d="M4 7H20M9 7V4H15V7M6 7L7 20H17L18 7"
                stroke="currentColor"
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
            />
            <path
                d="M10 11V16M14 11V16"
                stroke="currentColor"
                stroke-linecap="round"
                stroke-width="2"
            />
        </svg>
    }
}
