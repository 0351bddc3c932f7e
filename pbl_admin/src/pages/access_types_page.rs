use dto::access_type::AccessTypeDto;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::loader::Loader;
use crate::components::modal::Modal;
use crate::components::modals::{
    access_type_form::AccessTypeFormModal, delete_access_type::DeleteAccessTypeModal,
};
use crate::components::paginated::{use_list, ErrorPolicy, PageSizeSelect, Pagination, SearchForm};
use crate::config::AppConfig;
use crate::icons::{delete::DeleteIcon, edit::EditIcon};
use crate::services::access_type::{get_access_types, mock_get_access_types, AccessTypeStore};

#[component]
pub fn AccessTypesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let config = expect_context::<AppConfig>();
    let store = expect_context::<AccessTypeStore>();
    let mock = config.mock_access_types;

    let list = use_list(
        {
            let api = api.clone();
            move |query| {
                let api = api.clone();
                async move {
                    if mock {
                        mock_get_access_types(store, query).await
                    } else {
                        get_access_types(&api, query).await
                    }
                }
            }
        },
        ErrorPolicy::ClearRows,
    );

    let (add_open, set_add_open) = signal(false);
    let (edit_target, set_edit_target) = signal(None::<AccessTypeDto>);
    let (delete_target, set_delete_target) = signal(None::<AccessTypeDto>);

    view! {
        <div class="flex flex-col flex-1 gap-2 p-2">
            <div class="flex flex-row gap-2 items-center">
                <h1 class="text-xl flex-1">Access types</h1>
                <SearchForm list placeholder="Search access types" />
                <PageSizeSelect list />
                <button
                    class="btn save"
                    on:click=move |_| set_add_open(true)
                    disabled=move || list.loading()
                >
                    Add access type
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>Name</th>
                        <th>Description</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.rows.get() key=|row: &AccessTypeDto| row.id let:row>
                        {
                            let edit_row = row.clone();
                            let delete_row = row.clone();
                            view! {
                                <tr>
                                    <td>{row.name.clone()}</td>
                                    <td>{row.description.clone()}</td>
                                    <td class="flex flex-row gap-1 justify-end">
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
                        view! {
                            <div class="text-center text-gray-400 p-4">No access types found</div>
                        }
                    })
            }}
            <Pagination list />
        </div>

        <Modal is_open=move || add_open() on_close=move || set_add_open(false)>
            <AccessTypeFormModal initial=None on_saved=move || list.reload() />
        </Modal>
        <Modal
            is_open=move || edit_target.with(|t| t.is_some())
            on_close=move || set_edit_target(None)
        >
            {move || {
                edit_target()
                    .map(|t| {
                        view! {
                            <AccessTypeFormModal initial=Some(t) on_saved=move || list.reload() />
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
                        view! {
                            <DeleteAccessTypeModal access_type=t on_saved=move || list.reload() />
                        }
                    })
            }}
        </Modal>
    }
}
