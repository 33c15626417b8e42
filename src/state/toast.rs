//! User-visible message surface.
//!
//! The interceptors surface server messages, session expiry, and guest
//! restrictions through the [`Notifier`] seam; the toast host component
//! renders whatever accumulates in [`ToastState`].

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

/// Queue of not-yet-dismissed messages.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, level: ToastLevel, text: &str) {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, level, text: text.to_owned() });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Where user-facing messages go. Injected into the interceptors at
/// construction time.
pub trait Notifier: Send + Sync {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
}

impl Notifier for Arc<Mutex<ToastState>> {
    fn success(&self, text: &str) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ToastLevel::Success, text);
    }

    fn error(&self, text: &str) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ToastLevel::Error, text);
    }
}

impl Notifier for leptos::prelude::RwSignal<ToastState> {
    fn success(&self, text: &str) {
        use leptos::prelude::Update;
        self.update(|s| s.push(ToastLevel::Success, text));
    }

    fn error(&self, text: &str) {
        use leptos::prelude::Update;
        self.update(|s| s.push(ToastLevel::Error, text));
    }
}
