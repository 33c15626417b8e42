//! Renders the queued user-visible messages.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// Fixed overlay listing active toasts; clicking one dismisses it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.update(|s| s.dismiss(id))>
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
