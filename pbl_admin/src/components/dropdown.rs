use leptos::prelude::*;
use uuid::Uuid;

/// Filterable single-select combobox used for reference data (schools,
/// grades, themes, access types). Selection only; free text that matches
/// nothing selects nothing.
#[component]
pub fn Dropdown<T>(
    name: &'static str,
    options: impl Fn() -> Vec<T> + Send + Sync + 'static,
    key: impl Fn(&T) -> Uuid + Copy + Send + Sync + 'static,
    label: impl Fn(&T) -> String + Copy + Send + Sync + 'static,
    on_select: impl Fn(T) + Copy + Send + Sync + 'static,
    #[prop(optional)] initial: String,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let (input_value, set_input_value) = signal(initial);
    let (active, set_active) = signal(false);
    let (highlighted, set_highlighted) = signal(0usize);

    let filtered = Signal::derive(move || {
        let needle = input_value().to_lowercase();
        options()
            .into_iter()
            .filter(|item| label(item).to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    });

    let choose = move |item: T| {
        set_input_value(label(&item));
        on_select(item);
        set_active(false);
    };

    view! {
        <div
            class="relative flex flex-col flex-1"
            on:focusin=move |_| set_active(true)
            on:focusout=move |_| set_active(false)
            on:keydown=move |e| {
                match e.key().as_str() {
                    "ArrowDown" => {
                        e.prevent_default();
                        let last = filtered.with(|f| f.len().saturating_sub(1));
                        set_highlighted.update(|h| *h = (*h + 1).min(last));
                    }
                    "ArrowUp" => {
                        e.prevent_default();
                        set_highlighted.update(|h| *h = h.saturating_sub(1));
                    }
                    "Enter" => {
                        e.prevent_default();
                        if let Some(item) = filtered.with(|f| f.get(highlighted()).cloned()) {
                            choose(item);
                        }
                    }
                    "Escape" => {
                        // Keep the window-level listener from closing the
                        // whole dialog when only the list should collapse.
                        e.stop_propagation();
                        set_active(false);
                    }
                    _ => {}
                }
            }
        >
            <input
                id=name
                class="input w-full"
                autocomplete="off"
                bind:value=(input_value, set_input_value)
                on:input=move |_| {
                    set_active(true);
                    set_highlighted(0);
                }
            />
            <ul
                class="bg-gray-700 max-h-48 rounded-md w-full flex-col overflow-auto absolute top-full z-10"
                style:display=move || if active() { "flex" } else { "none" }
                role="listbox"
            >
                <For
                    each=move || filtered().into_iter().enumerate().collect::<Vec<_>>()
                    key=move |(_, item)| key(item)
                    children=move |(index, item)| {
                        let text = label(&item);
                        view! {
                            <li
                                role="option"
                                class="p-1 md:cursor-pointer"
                                class:bg-gray-500=move || highlighted() == index
                                on:mouseover=move |_| set_highlighted(index)
                                on:mousedown=move |e| {
                                    e.prevent_default();
                                    choose(item.clone());
                                }
                            >
                                {text}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
