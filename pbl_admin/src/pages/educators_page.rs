use dto::educator::EducatorDto;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::loader::Loader;
use crate::components::modal::Modal;
use crate::components::modals::{
    add_educator::AddEducatorModal, delete_educator::DeleteEducatorModal,
    edit_educator::EditEducatorModal, view_educator::ViewEducatorModal,
};
use crate::components::paginated::{use_list, ErrorPolicy, PageSizeSelect, Pagination, SearchForm};
use crate::icons::{delete::DeleteIcon, edit::EditIcon, eye::EyeIcon};
use crate::services::educator::get_educators;

#[component]
pub fn EducatorsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let list = use_list(
        {
            let api = api.clone();
            move |query| {
                let api = api.clone();
                async move { get_educators(&api, query).await }
            }
        },
        ErrorPolicy::ClearRows,
    );

    let (add_open, set_add_open) = signal(false);
    let (view_target, set_view_target) = signal(None::<EducatorDto>);
    let (edit_target, set_edit_target) = signal(None::<EducatorDto>);
    let (delete_target, set_delete_target) = signal(None::<EducatorDto>);

    view! {
        <div class="flex flex-col flex-1 gap-2 p-2">
            <div class="flex flex-row gap-2 items-center">
                <h1 class="text-xl flex-1">Educators</h1>
                <SearchForm list placeholder="Search educators" />
                <PageSizeSelect list />
                <button
                    class="btn save"
                    on:click=move |_| set_add_open(true)
                    disabled=move || list.loading()
                >
                    Add educator
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>Name</th>
                        <th>School</th>
                        <th>Status</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.rows.get() key=|row: &EducatorDto| row.id let:row>
                        {
                            let view_row = row.clone();
                            let edit_row = row.clone();
                            let delete_row = row.clone();
                            view! {
                                <tr>
                                    <td>{row.name.clone()}</td>
                                    <td>{row.school_name.clone()}</td>
                                    <td>{row.status.clone()}</td>
                                    <td class="flex flex-row gap-1 justify-end">
                                        <button
                                            class="btn"
                                            disabled=move || list.loading()
                                            on:click=move |_| set_view_target(Some(view_row.clone()))
                                        >
                                            <EyeIcon />
                                        </button>
                                        <button
                                            class="btn"
                                            disabled=move || list.loading()
                                            on:click=move |_| set_edit_target(Some(edit_row.clone()))
                                        >
                                            <EditIcon />
                                        </button>
                                        <button
                                            class="btn"
                                            disabled=move || list.loading()
                                            on:click=move |_| set_delete_target(Some(delete_row.clone()))
                                        >
                                            <DeleteIcon />
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
            {move || list.loading().then(|| view! { <Loader /> })}
            {move || {
                (!list.loading() && list.rows.with(|rows| rows.is_empty()))
                    .then(|| {
                        view! { <div class="text-center text-gray-400 p-4">No educators found</div> }
                    })
            }}
            <Pagination list />
        </div>

        <Modal is_open=move || add_open() on_close=move || set_add_open(false)>
            <AddEducatorModal on_saved=move || list.reload() />
        </Modal>
        <Modal
            is_open=move || view_target.with(|t| t.is_some())
            on_close=move || set_view_target(None)
        >
            {move || {
                view_target().map(|t| view! { <ViewEducatorModal educator_id=t.id /> })
            }}
        </Modal>
        <Modal
            is_open=move || edit_target.with(|t| t.is_some())
            on_close=move || set_edit_target(None)
        >
            {move || {
                edit_target()
                    .map(|t| {
                        view! {
                            <EditEducatorModal educator_id=t.id on_saved=move || list.reload() />
                        }
                    })
            }}
        </Modal>
        <Modal
            is_open=move || delete_target.with(|t| t.is_some())
            on_close=move || set_delete_target(None)
        >
            {move || {
                delete_target()
                    .map(|t| {
                        view! { <DeleteEducatorModal educator=t on_saved=move || list.reload() /> }
                    })
            }}
        </Modal>
    }
}
