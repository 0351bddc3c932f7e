use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Opening,
    Open,
    Closing,
    Closed,
}

/// Open/close lifecycle shared by every dialog. A close is two-phase: the
/// request flips the phase to `Closing`, the exit animation plays, and only
/// the animation-complete event tears the dialog down. While the busy flag
/// is set (a submit or delete in flight) close requests are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalLifecycle {
    pub phase: ModalPhase,
    pub busy: bool,
}

impl ModalLifecycle {
    pub fn closed() -> Self {
        ModalLifecycle {
            phase: ModalPhase::Closed,
            busy: false,
        }
    }

    pub fn opened() -> Self {
        ModalLifecycle {
            phase: ModalPhase::Opening,
            busy: false,
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// X button, backdrop click and Escape all route here.
    pub fn request_close(&mut self) -> bool {
        if self.busy || matches!(self.phase, ModalPhase::Closing | ModalPhase::Closed) {
            return false;
        }
        self.phase = ModalPhase::Closing;
        true
    }

    /// Returns true once the exit animation has finished and the host may
    /// unmount the dialog.
    pub fn animation_complete(&mut self) -> bool {
        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Open;
                false
            }
            ModalPhase::Closing => {
                self.phase = ModalPhase::Closed;
                true
            }
            _ => false,
        }
    }
}

/// Handed to the hosted form via context so it can start the close sequence
/// after a successful submit and gate closing while one is in flight.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    lifecycle: RwSignal<ModalLifecycle>,
}

impl ModalHandle {
    pub fn set_busy(&self, busy: bool) {
        self.lifecycle.update(|l| l.set_busy(busy));
    }

    pub fn busy(&self) -> bool {
        self.lifecycle.with(|l| l.busy)
    }

    pub fn request_close(&self) {
        self.lifecycle.update(|l| {
            l.request_close();
        });
    }
}

pub fn use_modal() -> ModalHandle {
    expect_context::<ModalHandle>()
}

#[component]
pub fn Modal(
    is_open: impl Fn() -> bool + Send + Sync + Copy + 'static,
    on_close: impl Fn() + Send + Sync + Copy + 'static,
    children: ChildrenFn,
) -> impl IntoView {
    let lifecycle = RwSignal::new(ModalLifecycle::closed());
    let handle = ModalHandle { lifecycle };
    provide_context(handle);

    Effect::new(move || {
        if is_open() {
            if lifecycle.with_untracked(|l| l.phase == ModalPhase::Closed) {
                lifecycle.set(ModalLifecycle::opened());
            }
        } else if lifecycle.with_untracked(|l| l.phase != ModalPhase::Closed) {
            lifecycle.set(ModalLifecycle::closed());
        }
    });

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && is_open() {
            handle.request_close();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=is_open>
            <div
                class="modal-backdrop flex fixed top-0 left-0 w-full h-full justify-center items-center backdrop-blur-xs z-10"
                class:closing=move || lifecycle.with(|l| l.phase == ModalPhase::Closing)
                on:click=move |_| handle.request_close()
            >
                <div
                    class="modal-box flex flex-col bg-gray-800 p-3 rounded-xl outline outline-white/15 min-w-sm max-h-full overflow-auto"
                    on:click=|e| e.stop_propagation()
                    on:animationend=move |_| {
                        let mut finished = false;
                        lifecycle.update(|l| finished = l.animation_complete());
                        if finished {
                            on_close();
                        }
                    }
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn close_while_busy_is_a_no_op() {
        let mut modal = ModalLifecycle::opened();
        modal.animation_complete();
        modal.set_busy(true);

        assert!(!modal.request_close());
        assert!(modal.phase == ModalPhase::Open);

        modal.set_busy(false);
        assert!(modal.request_close());
        assert!(modal.phase == ModalPhase::Closing);
    }

    #[test]
    fn teardown_waits_for_the_exit_animation() {
        let mut modal = ModalLifecycle::opened();

        // Entry animation finishing does not tear anything down.
        assert!(!modal.animation_complete());
        assert!(modal.phase == ModalPhase::Open);

        modal.request_close();
        assert!(modal.phase == ModalPhase::Closing);
        assert!(modal.animation_complete());
        assert!(modal.phase == ModalPhase::Closed);
    }

    #[test]
    fn duplicate_close_requests_are_ignored() {
        let mut modal = ModalLifecycle::opened();
        modal.animation_complete();

        assert!(modal.request_close());
        assert!(!modal.request_close());
        modal.animation_complete();
        assert!(!modal.request_close());
    }

    #[test]
    fn stray_animation_events_do_not_close_an_open_dialog() {
        let mut modal = ModalLifecycle::opened();
        modal.animation_complete();

        assert!(!modal.animation_complete());
        assert!(modal.phase == ModalPhase::Open);
    }
}
