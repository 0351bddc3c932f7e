use dto::pbl_file::PblFileDto;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::loader::Loader;
use crate::components::modal::Modal;
use crate::components::modals::{
    add_pbl_file::AddPblFileModal, delete_pbl_file::DeletePblFileModal,
    edit_pbl_file::EditPblFileModal,
};
use crate::components::paginated::{use_list, ErrorPolicy, PageSizeSelect, Pagination, SearchForm};
use crate::icons::{delete::DeleteIcon, edit::EditIcon};
use crate::services::pbl_file::get_pbl_files;

#[component]
pub fn PblFilesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let list = use_list(
        {
            let api = api.clone();
            move |query| {
                let api = api.clone();
                async move { get_pbl_files(&api, query).await }
            }
        },
        ErrorPolicy::ClearRows,
    );

    let (add_open, set_add_open) = signal(false);
    let (edit_target, set_edit_target) = signal(None::<PblFileDto>);
    let (delete_target, set_delete_target) = signal(None::<PblFileDto>);

    view! {
        <div class="flex flex-col flex-1 gap-2 p-2">
            <div class="flex flex-row gap-2 items-center">
                <h1 class="text-xl flex-1">PBL files</h1>
                <SearchForm list placeholder="Search files" />
                <PageSizeSelect list />
                <button
                    class="btn save"
                    on:click=move |_| set_add_open(true)
                    disabled=move || list.loading()
                >
                    Upload file
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>Name</th>
                        <th>Grade</th>
                        <th>Theme</th>
                        <th>Access type</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.rows.get() key=|row: &PblFileDto| row.id let:row>
                        {
                            let edit_row = row.clone();
                            let delete_row = row.clone();
                            view! {
                                <tr>
                                    <td>
                                        <a
                                            href=row.file_url.clone()
                                            target="_blank"
                                            class="md:hover:underline"
                                        >
                                            {row.name.clone()}
                                        </a>
                                    </td>
                                    <td>{row.grade_name.clone()}</td>
                                    <td>{row.theme_name.clone()}</td>
                                    <td>{row.access_type_name.clone()}</td>
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
                        view! { <div class="text-center text-gray-400 p-4">No files found</div> }
                    })
            }}
            <Pagination list />
        </div>

        <Modal is_open=move || add_open() on_close=move || set_add_open(false)>
            <AddPblFileModal on_saved=move || list.reload() />
        </Modal>
        <Modal
            is_open=move || edit_target.with(|t| t.is_some())
            on_close=move || set_edit_target(None)
        >
            {move || {
                edit_target()
                    .map(|t| {
                        view! { <EditPblFileModal file=t on_saved=move || list.reload() /> }
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
                        view! { <DeletePblFileModal file=t on_saved=move || list.reload() /> }
                    })
            }}
        </Modal>
    }
}
