use dto::unregistered::UnregisteredEducatorDto;
use leptos::prelude::*;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::components::loader::Loader;
use crate::components::modal::Modal;
use crate::components::modals::{
    unregister::{BulkUnregisterModal, UnregisterModal},
    view_unregistered::ViewUnregisteredModal,
};
use crate::components::paginated::{use_list, ErrorPolicy, PageSizeSelect, Pagination, SearchForm};
use crate::icons::{delete::DeleteIcon, eye::EyeIcon};
use crate::selection::{HeaderState, Selection};
use crate::services::unregistered::get_unregistered;

#[component]
pub fn UnregisteredPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    // A failed refresh keeps whatever was on screen here; the other pages
    // clear instead.
    let list = use_list(
        {
            let api = api.clone();
            move |query| {
                let api = api.clone();
                async move { get_unregistered(&api, query).await }
            }
        },
        ErrorPolicy::KeepStale,
    );

    let selection = RwSignal::new(Selection::default());
    let page_ids = Memo::new(move |_| {
        list.rows
            .with(|rows| rows.iter().map(|r| r.id).collect::<Vec<Uuid>>())
    });

    // Selection never survives navigation.
    let current_page = Memo::new(move |_| list.state.with(|s| s.page));
    Effect::new(move || {
        current_page.track();
        selection.update(|s| s.clear());
    });

    let header = move || selection.with(|s| s.header_state(&page_ids.get()));
    let selected_rows = move || {
        let selected = selection.get();
        list.rows.with(|rows| {
            rows.iter()
                .filter(|r| selected.contains(r.id))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let (view_target, set_view_target) = signal(None::<UnregisteredEducatorDto>);
    let (unregister_target, set_unregister_target) = signal(None::<UnregisteredEducatorDto>);
    let (bulk_open, set_bulk_open) = signal(false);

    let on_removed = move || {
        selection.update(|s| s.clear());
        list.reload();
    };

    view! {
        <div class="flex flex-col flex-1 gap-2 p-2">
            <div class="flex flex-row gap-2 items-center">
                <h1 class="text-xl flex-1">Unregistered educators</h1>
                <SearchForm list placeholder="Search pending educators" />
                <PageSizeSelect list />
            </div>

            {move || {
                (!selection.with(|s| s.is_empty()))
                    .then(|| {
                        view! {
                            <div class="flex flex-row gap-2 items-center bg-gray-900 rounded-md p-2">
                                <span class="flex-1">
                                    {format!("{} selected", selection.with(|s| s.len()))}
                                </span>
                                <button
                                    class="btn danger"
                                    disabled=move || list.loading()
                                    on:click=move |_| set_bulk_open(true)
                                >
                                    Unregister selected
                                </button>
                            </div>
                        }
                    })
            }}

            <table class="data-table">
                <thead>
                    <tr>
                        <th class="w-8">
                            <input
                                type="checkbox"
                                prop:checked=move || header() == HeaderState::Checked
                                prop:indeterminate=move || header() == HeaderState::Indeterminate
                                disabled=move || list.loading()
                                on:change=move |_| {
                                    selection.update(|s| s.toggle_all(&page_ids.get_untracked()))
                                }
                            />
                        </th>
                        <th>Name</th>
                        <th>School</th>
                        <th>Email</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.rows.get()
                        key=|row: &UnregisteredEducatorDto| row.id
                        let:row
                    >
                        {
                            let id = row.id;
                            let view_row = row.clone();
                            let unregister_row = row.clone();
                            view! {
                                <tr>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selection.with(|s| s.contains(id))
                                            disabled=move || list.loading()
                                            on:change=move |_| selection.update(|s| s.toggle(id))
                                        />
                                    </td>
                                    <td>{row.name.clone()}</td>
                                    <td>{row.school_name.clone()}</td>
                                    <td>{row.email_id.clone()}</td>
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
                                            on:click=move |_| {
                                                set_unregister_target(Some(unregister_row.clone()))
                                            }
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
                            <div class="text-center text-gray-400 p-4">
                                No pending registrations
                            </div>
                        }
                    })
            }}
            <Pagination list />
        </div>

        <Modal
            is_open=move || view_target.with(|t| t.is_some())
            on_close=move || set_view_target(None)
        >
            {move || {
                view_target().map(|t| view! { <ViewUnregisteredModal educator_id=t.id /> })
            }}
        </Modal>
        <Modal
            is_open=move || unregister_target.with(|t| t.is_some())
            on_close=move || set_unregister_target(None)
        >
            {move || {
                unregister_target()
                    .map(|t| view! { <UnregisterModal educator=t on_saved=on_removed /> })
            }}
        </Modal>
        <Modal is_open=move || bulk_open() on_close=move || set_bulk_open(false)>
            {move || {
                view! { <BulkUnregisterModal educators=selected_rows() on_saved=on_removed /> }
            }}
        </Modal>
    }
}
