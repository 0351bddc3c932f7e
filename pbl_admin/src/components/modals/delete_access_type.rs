use dto::access_type::AccessTypeDto;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::modal::use_modal;
use crate::components::snackbar::{use_snackbar, Notifier};
use crate::config::AppConfig;
use crate::services::access_type::{delete_access_type, mock_delete_access_type, AccessTypeStore};

#[component]
pub fn DeleteAccessTypeModal(
    access_type: AccessTypeDto,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let config = expect_context::<AppConfig>();
    let store = expect_context::<AccessTypeStore>();
    let snackbar = use_snackbar();
    let modal = use_modal();

    let mock = config.mock_access_types;
    let id = access_type.id;

    let delete = Action::new_unsync({
        let api = api.clone();
        move |_: &()| {
            let api = api.clone();
            async move {
                modal.set_busy(true);
                let result = if mock {
                    mock_delete_access_type(store, id).await
                } else {
                    delete_access_type(&api, id).await
                };
                modal.set_busy(false);
                match result {
                    Ok(()) => {
                        snackbar.success("Access type removed");
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => snackbar.error("Failed to remove access type", e),
                }
            }
        }
    });

    view! {
        <div class="flex flex-col gap-2">
            <h2 class="text-center">{format!("Remove {}?", access_type.name)}</h2>
            <p class="text-sm text-gray-400">
                Users with this access type keep their accounts until they are reassigned.
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
                    Remove
                </button>
            </div>
        </div>
    }
}
