//! Toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToastQueue` is the notification sink handed to route guards; `Toaster`
//! renders whatever is queued. Toasts dismiss themselves after a few seconds
//! in the browser and can be closed by hand.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::guard::{NotificationSink, Severity};

const MAX_VISIBLE: usize = 4;
#[cfg(feature = "hydrate")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Queued toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast, evicting the oldest beyond `MAX_VISIBLE`. Returns its id.
    pub fn push(&mut self, message: &str, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message: message.to_owned(), severity });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Context handle for the toast queue.
#[derive(Clone, Copy)]
pub struct ToastQueue(RwSignal<ToastState>);

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(ToastState::default()))
    }

    pub fn push(&self, message: &str, severity: Severity) {
        let mut id = 0;
        self.0.update(|state| id = state.push(message, severity));

        #[cfg(feature = "hydrate")]
        {
            let state = self.0;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(TOAST_TTL).await;
                let _ = state.try_update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|state| state.dismiss(id));
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, message: &str, severity: Severity) {
        log::info!("notify [{}] {message}", severity.css_modifier());
        self.push(message, severity);
    }
}

fn toast_class(severity: Severity) -> String {
    format!("toast toast--{}", severity.css_modifier())
}

/// Renders the queued toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let queue = expect_context::<ToastQueue>();
    let toasts = queue.0;

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast_class(toast.severity)>
                                <span class="toast__message">{toast.message}</span>
                                <button class="toast__close" title="Cerrar" on:click=move |_| queue.dismiss(id)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
