use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="flex flex-1 justify-center items-center p-4">
            <div class="loading"></div>
        </div>
    }
}
