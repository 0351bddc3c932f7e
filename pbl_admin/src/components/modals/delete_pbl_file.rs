use dto::pbl_file::PblFileDto;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::modal::use_modal;
use crate::components::snackbar::{use_snackbar, Notifier};
use crate::services::pbl_file::delete_pbl_file;

#[component]
pub fn DeletePblFileModal(
    file: PblFileDto,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let snackbar = use_snackbar();
    let modal = use_modal();
    let id = file.id;

    let delete = Action::new_unsync({
        let api = api.clone();
        move |_: &()| {
            let api = api.clone();
            async move {
                modal.set_busy(true);
                match delete_pbl_file(&api, id).await {
                    Ok(()) => {
                        modal.set_busy(false);
                        snackbar.success("File deleted");
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => {
                        modal.set_busy(false);
                        snackbar.error("Failed to delete file", e);
                    }
                }
            }
        }
    });

    view! {
        <div class="flex flex-col gap-2">
            <h2 class="text-center">{format!("Delete {}?", file.name)}</h2>
            <p class="text-sm text-gray-400">
                The document and its thumbnail are removed for every school.
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
                    Delete
                </button>
            </div>
        </div>
    }
}
