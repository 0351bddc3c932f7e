use dto::educator::EducatorDto;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::modal::use_modal;
use crate::components::snackbar::{use_snackbar, Notifier};
use crate::services::educator::delete_educator;

#[component]
pub fn DeleteEducatorModal(
    educator: EducatorDto,
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
                match delete_educator(&api, id).await {
                    Ok(()) => {
                        modal.set_busy(false);
                        snackbar.success("Educator removed");
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => {
                        modal.set_busy(false);
                        snackbar.error("Failed to remove educator", e);
                    }
                }
            }
        }
    });

    view! {
        <div class="flex flex-col gap-2">
            <h2 class="text-center">{format!("Remove {}?", educator.name)}</h2>
            <p class="text-sm text-gray-400">
                The educator loses console access; their record is kept for auditing.
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
