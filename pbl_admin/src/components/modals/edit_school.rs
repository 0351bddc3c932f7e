use leptos::either::EitherOf3;
use leptos::prelude::*;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::components::loader::Loader;
use crate::components::modals::add_school::AddSchoolModal;
use crate::services::school::get_school;

/// The list row is summary-only, so editing starts with the detail fetch and
/// then hands the full record to the shared form.
#[component]
pub fn EditSchoolModal(
    school_id: Uuid,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();

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
        {move || match info_load.value().get() {
            None => EitherOf3::A(view! { <Loader /> }),
            Some(Err(e)) => {
                EitherOf3::B(
                    view! {
                        <div class="text-red-400 p-2">{format!("Failed to load school: {e}")}</div>
                    },
                )
            }
            Some(Ok(info)) => EitherOf3::C(view! { <AddSchoolModal initial=Some(info) on_saved /> }),
        }}
    }
}
