use leptos::prelude::*;

#[component]
pub fn EditIcon() -> impl IntoView {
    view! {
        <svg
            width="20px"
            height="20px"
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                d="M4 20H8L19 9L15 5L4 16V20Z"
                stroke="currentColor"
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
            />
            <path
                d="M13 7L17 11"
                stroke="currentColor"
                stroke-linecap="round"
                stroke-width="2"
            />
        </svg>
    }
}
