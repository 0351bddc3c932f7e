use leptos::prelude::*;

use crate::validation::FieldErrors;

/// Inline error line under a form field, rendered only while the submit
/// validation has something to say about it.
#[component]
pub fn FieldError(errors: ReadSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    view! {
        {move || {
            errors
                .with(|e| e.get(field))
                .map(|msg| view! { <span class="text-red-400 text-sm">{msg}</span> })
        }}
    }
}
