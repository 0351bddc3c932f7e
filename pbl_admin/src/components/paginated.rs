use std::future::Future;

use dto::page::PageDto;
use leptos::either::Either;
use leptos::prelude::*;

use crate::api::ApiError;
use crate::components::snackbar::{use_snackbar, Notifier};
use crate::icons::search::SearchIcon;
use crate::listing::{page_entries, ListQuery, ListState, PageEntry, PAGE_SIZES};

/// What to do with rows already on screen when a fetch fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPolicy {
    ClearRows,
    KeepStale,
}

/// The one paginated-list controller behind all five entity pages. Owns the
/// page/size/search state, the row signals and the loading flag; re-fetches
/// on every state change and on `reload()` after a mutation.
pub struct ListController<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState>,
    pub search_input: RwSignal<String>,
    pub rows: RwSignal<Vec<T>>,
    pub total_pages: RwSignal<u32>,
    pub total_elements: RwSignal<u64>,
    loading: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T: Send + Sync + 'static> ListController<T> {
    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    pub fn page(&self) -> u32 {
        self.state.with(|s| s.page)
    }

    pub fn size(&self) -> u32 {
        self.state.with(|s| s.size)
    }

    pub fn go_to(&self, page: u32) {
        self.state.update(|s| s.go_to(page));
    }

    pub fn set_size(&self, size: u32) {
        self.state.update(|s| s.set_size(size));
    }

    /// Commits the live input; only now does a fetch fire.
    pub fn submit_search(&self) {
        let input = self.search_input.get_untracked();
        self.state.update(|s| s.submit_search(&input));
    }

    pub fn reload(&self) {
        self.state.update(|s| s.bump());
    }
}

pub fn use_list<T, F, Fut>(fetch: F, policy: ErrorPolicy) -> ListController<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<PageDto<T>, ApiError>> + 'static,
{
    let snackbar = use_snackbar();
    let controller = ListController {
        state: RwSignal::new(ListState::default()),
        search_input: RwSignal::new(String::new()),
        rows: RwSignal::new(Vec::new()),
        total_pages: RwSignal::new(0),
        total_elements: RwSignal::new(0),
        loading: RwSignal::new(false),
    };

    let load = Action::new_unsync(move |query: &ListQuery| {
        let fut = fetch(query.clone());
        async move {
            controller.loading.set(true);
            match fut.await {
                Ok(page) => {
                    controller.rows.set(page.content);
                    controller.total_pages.set(page.total_pages);
                    controller.total_elements.set(page.total_elements);
                }
                Err(e) => {
                    leptos::logging::warn!("list fetch failed: {e}");
                    snackbar.error("Failed to load data", e);
                    if policy == ErrorPolicy::ClearRows {
                        controller.rows.set(Vec::new());
                        controller.total_pages.set(0);
                        controller.total_elements.set(0);
                    }
                }
            }
            controller.loading.set(false);
        }
    });

    // Initial fetch on mount, then exactly one per state change. The live
    // search input is deliberately not part of the tracked state.
    Effect::new(move || {
        let query = controller.state.with(|s| s.query());
        load.dispatch(query);
    });

    controller
}

#[component]
pub fn SearchForm<T: Send + Sync + 'static>(
    list: ListController<T>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <form
            class="flex flex-row gap-1"
            on:submit=move |e| {
                e.prevent_default();
                list.submit_search();
            }
        >
            <input
                class="input"
                placeholder=placeholder
                bind:value=list.search_input
                disabled=move || list.loading()
            />
            <button class="btn" type="submit" disabled=move || list.loading()>
                <SearchIcon />
            </button>
        </form>
    }
}

#[component]
pub fn PageSizeSelect<T: Send + Sync + 'static>(list: ListController<T>) -> impl IntoView {
    view! {
        <select
            class="input w-fit"
            disabled=move || list.loading()
            on:change=move |e| {
                if let Ok(size) = event_target_value(&e).parse() {
                    list.set_size(size);
                }
            }
        >
            {PAGE_SIZES
                .into_iter()
                .map(|size| {
                    view! {
                        <option value=size selected=move || list.size() == size>
                            {size}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}

#[component]
pub fn Pagination<T: Send + Sync + 'static>(list: ListController<T>) -> impl IntoView {
    view! {
        <div class="flex flex-row gap-1 items-center justify-end p-1">
            <span class="text-sm text-gray-400 flex-1">
                {move || format!("{} total", list.total_elements.get())}
            </span>
            {move || {
                let current = list.page();
                let disabled = list.loading();
                page_entries(current, list.total_pages.get())
                    .into_iter()
                    .map(|entry| match entry {
                        PageEntry::Gap => {
                            Either::Left(
                                view! { <span class="p-1 select-none text-gray-500">"…"</span> },
                            )
                        }
                        PageEntry::Page(page) => {
                            Either::Right(
                                view! {
                                    <button
                                        class="btn page"
                                        class:active=page == current
                                        disabled=disabled || page == current
                                        on:click=move |_| list.go_to(page)
                                    >
                                        {page}
                                    </button>
                                },
                            )
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
