use std::time::Duration;

use leptos::prelude::*;

const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    text: String,
}

/// Single-slot notification area. A newer toast replaces the current one and
/// an older toast's timer never dismisses a newer toast.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn show(&self, text: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.current.set(Some(Toast {
            id,
            text: text.into(),
        }));

        let current = self.current;
        set_timeout(
            move || {
                if current.with_untracked(|t| t.as_ref().is_some_and(|t| t.id == id)) {
                    current.set(None);
                }
            },
            TOAST_LIFETIME,
        );
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

pub fn provide_toaster() {
    provide_context(Toaster {
        current: RwSignal::new(None),
        next_id: StoredValue::new(0),
    });
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastSlot() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        {move || {
            toaster
                .current
                .get()
                .map(|toast| {
                    view! {
                        <div
                            role="status"
                            class="fixed bottom-6 right-6 z-[100] flex items-center gap-4 px-5 py-3 rounded-lg shadow-2xl bg-card border border-border toast-enter"
                        >
                            <span>{toast.text}</span>
                            <button
                                class="text-muted-foreground hover:text-foreground"
                                aria-label="Dismiss notification"
                                on:click=move |_| toaster.dismiss()
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
