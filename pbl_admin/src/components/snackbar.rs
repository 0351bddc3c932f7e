use std::fmt::Display;

use chrono::Duration;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Copy, PartialEq)]
pub enum MsgKind {
    Success,
    Warning,
    Error,
}

#[derive(Clone)]
pub struct SnackbarMsg {
    id: Uuid,
    kind: MsgKind,
    content: String,
}

/// Injected notifier capability. Forms and pages take this through context
/// instead of importing a global, so the submit logic stays testable.
pub trait Notifier {
    fn success(&self, msg: &str);
    fn warning(&self, msg: &str);
    fn error(&self, msg: &str, e: impl Display);
}

#[component]
pub fn Snackbar(children: ChildrenFn) -> impl IntoView {
    let (messages, set_messages) = signal(Vec::<SnackbarMsg>::new());

    provide_context(set_messages);

    view! {
        {children()}
        <div class="snackbar-root fixed bottom-2 left-1/2 -translate-x-1/2 z-20 flex flex-col-reverse items-center gap-1">
            <For each=messages key=|m: &SnackbarMsg| m.id let:msg>
                {
                    let id = msg.id;
                    view! {
                        <div
                            class="rounded-md p-2 outline-2 select-none w-fit"
                            class:bg-green-600=msg.kind == MsgKind::Success
                            class:bg-amber-600=msg.kind == MsgKind::Warning
                            class:bg-red-600=msg.kind == MsgKind::Error
                            on:click=move |_| set_messages.write().retain(|m| m.id != id)
                        >
                            {msg.content.clone()}
                        </div>
                    }
                }
            </For>
        </div>
    }
}

fn push_message(slot: &Option<WriteSignal<Vec<SnackbarMsg>>>, msg: SnackbarMsg) {
    let id = msg.id;
    if let Some(ctx) = *slot {
        ctx.write().push(msg);
        set_timeout(
            move || ctx.write().retain(|m| m.id != id),
            Duration::seconds(5).to_std().unwrap(),
        );
    }
}

impl Notifier for Option<WriteSignal<Vec<SnackbarMsg>>> {
    fn success(&self, msg: &str) {
        push_message(
            self,
            SnackbarMsg {
                id: Uuid::new_v4(),
                kind: MsgKind::Success,
                content: msg.to_string(),
            },
        );
    }

    fn warning(&self, msg: &str) {
        push_message(
            self,
            SnackbarMsg {
                id: Uuid::new_v4(),
                kind: MsgKind::Warning,
                content: msg.to_string(),
            },
        );
    }

    fn error(&self, msg: &str, e: impl Display) {
        push_message(
            self,
            SnackbarMsg {
                id: Uuid::new_v4(),
                kind: MsgKind::Error,
                content: format!("{msg}: {e}"),
            },
        );
    }
}

/// Absent outside the `Snackbar` subtree; every notifier method is then a
/// silent no-op, which keeps components testable without a UI root.
pub fn use_snackbar() -> Option<WriteSignal<Vec<SnackbarMsg>>> {
    use_context::<WriteSignal<Vec<SnackbarMsg>>>()
}
