use leptos::either::EitherOf3;
use leptos::prelude::*;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::components::loader::Loader;
use crate::components::modal::use_modal;
use crate::icons::close::CloseIcon;
use crate::services::school::get_school;

#[component]
pub fn ViewSchoolModal(school_id: Uuid) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let modal = use_modal();

    let info_load = Action::new_unsync({
        let api = api.clone();
        move |id: &Uuid| {
            let api = api.clone();
            let id = *id;
            async move { get_school(&api, id).await }
        }
    });
    let fired = StoredValue::new(false);
    Effect::new(move || {
        if !fired.get_value() {
            fired.set_value(true);
            info_load.dispatch(school_id);
        }
    });

    view! {
        <div class="flex flex-row items-center gap-2">
            <h2 class="text-lg flex-1 text-center">School details</h2>
            <button class="btn" on:click=move |_| modal.request_close()>
                <CloseIcon />
            </button>
        </div>
        {move || match info_load.value().get() {
            None => EitherOf3::A(view! { <Loader /> }),
            Some(Err(e)) => {
                EitherOf3::B(
                    view! {
                        <div class="text-red-400 p-2">{format!("Failed to load school: {e}")}</div>
                    },
                )
            }
            Some(Ok(info)) => {
                let address = [
                    Some(info.address_line1.clone()),
                    info.address_line2.clone(),
                    Some(info.city.clone()),
                    Some(info.state.clone()),
                    info.country.clone(),
                    info.pincode.clone(),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ");

                EitherOf3::C(
                    view! {
                        <dl class="detail-grid">
                            <dt>Code</dt>
                            <dd>{info.code}</dd>
                            <dt>Name</dt>
                            <dd>{info.name}</dd>
                            <dt>Email</dt>
                            <dd>{info.email_id}</dd>
                            <dt>Phone</dt>
                            <dd>{info.phone.unwrap_or_else(|| String::from("—"))}</dd>
                            <dt>Address</dt>
                            <dd>{address}</dd>
                        </dl>
                    },
                )
            }
        }}
    }
}
