use dto::unregistered::UnregisteredEducatorDto;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::modal::use_modal;
use crate::components::snackbar::{use_snackbar, Notifier};
use crate::services::unregistered::{unregister, unregister_all};

#[component]
pub fn UnregisterModal(
    educator: UnregisteredEducatorDto,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let snackbar = use_snackbar();
    let modal = use_modal();
    let id = educator.id;

    let delete = Action::new_unsync({
        let api = api.clone();
        move |_: &()| {
            let api = api.clone();
            async move {
                modal.set_busy(true);
                match unregister(&api, id).await {
                    Ok(()) => {
                        modal.set_busy(false);
                        snackbar.success("Educator unregistered");
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => {
                        modal.set_busy(false);
                        snackbar.error("Failed to unregister educator", e);
                    }
                }
            }
        }
    });

    view! {
        <div class="flex flex-col gap-2">
            <h2 class="text-center">{format!("Unregister {}?", educator.name)}</h2>
            <p class="text-sm text-gray-400">
                The pending registration is discarded; the educator has to apply again.
            </p>
            <div class="flex flex-row gap-2 justify-end">
                <button
                    class="btn cancel"
                    on:click=move |_| modal.request_close()
                    disabled=move || modal.busy()
                >
                    Cancel
                </button>
                <button
                    class="btn danger"
                    on:click=move |_| {
                        delete.dispatch(());
                    }
                    disabled=move || modal.busy()
                >
                    Unregister
                </button>
            </div>
        </div>
    }
}

/// Confirmation for the header-checkbox flow; lists everyone affected before
/// the bulk endpoint is called.
#[component]
pub fn BulkUnregisterModal(
    educators: Vec<UnregisteredEducatorDto>,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let snackbar = use_snackbar();
    let modal = use_modal();

    let ids: Vec<_> = educators.iter().map(|e| e.id).collect();
    let count = educators.len();

    let delete = Action::new_unsync({
        let api = api.clone();
        move |_: &()| {
            let api = api.clone();
            let ids = ids.clone();
            async move {
                modal.set_busy(true);
                match unregister_all(&api, ids).await {
                    Ok(()) => {
                        modal.set_busy(false);
                        snackbar.success("Selected educators unregistered");
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => {
                        modal.set_busy(false);
                        snackbar.error("Failed to unregister educators", e);
                    }
                }
            }
        }
    });

    view! {
        <div class="flex flex-col gap-2">
            <h2 class="text-center">{format!("Unregister {count} educators?")}</h2>
            <ul class="flex flex-col gap-1 p-1 rounded-md outline outline-white/15 max-h-48 overflow-auto">
                {educators
                    .iter()
                    .map(|e| view! { <li class="p-1">{e.name.clone()}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="flex flex-row gap-2 justify-end">
                <button
                    class="btn cancel"
                    on:click=move |_| modal.request_close()
                    disabled=move || modal.busy()
                >
                    Cancel
                </button>
                <button
                    class="btn danger"
                    on:click=move |_| {
                        delete.dispatch(());
                    }
                    disabled=move || modal.busy()
                >
                    Unregister all
                </button>
            </div>
        </div>
    }
}
