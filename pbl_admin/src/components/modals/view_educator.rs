use leptos::either::EitherOf3;
use leptos::prelude::*;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::components::loader::Loader;
use crate::components::modal::use_modal;
use crate::icons::close::CloseIcon;
use crate::services::educator::get_educator_info;

#[component]
pub fn ViewEducatorModal(educator_id: Uuid) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let modal = use_modal();

    let info_load = Action::new_unsync({
        let api = api.clone();
        move |id: &Uuid| {
            let api = api.clone();
            let id = *id;
            async move { get_educator_info(&api, id).await }
        }
    });
    let fired = StoredValue::new(false);
    Effect::new(move || {
        if !fired.get_value() {
            fired.set_value(true);
            info_load.dispatch(educator_id);
        }
    });

    view! {
        <div class="flex flex-row items-center gap-2">
            <h2 class="text-lg flex-1 text-center">Educator details</h2>
            <button class="btn" on:click=move |_| modal.request_close()>
                <CloseIcon />
            </button>
        </div>
        {move || match info_load.value().get() {
            None => EitherOf3::A(view! { <Loader /> }),
            Some(Err(e)) => {
                EitherOf3::B(
                    view! {
                        <div class="text-red-400 p-2">
                            {format!("Failed to load educator: {e}")}
                        </div>
                    },
                )
            }
            Some(Ok(info)) => {
                EitherOf3::C(
                    view! {
                        <dl class="detail-grid">
                            <dt>Name</dt>
                            <dd>{info.name}</dd>
                            <dt>School</dt>
                            <dd>{info.school_name}</dd>
                            <dt>Login id</dt>
                            <dd>{info.login_id}</dd>
                            <dt>Email</dt>
                            <dd>{info.email_id}</dd>
                            <dt>Phone</dt>
                            <dd>{info.phone.unwrap_or_else(|| String::from("—"))}</dd>
                            <dt>Status</dt>
                            <dd>{info.status}</dd>
                        </dl>
                    },
                )
            }
        }}
    }
}
