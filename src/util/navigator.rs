//! Navigation seam used by the 401 recovery path.
//!
//! The response interceptor runs outside any component, so it cannot use
//! the router's navigation hook. The browser implementation drives the
//! History API directly and lets the router pick the change up from the
//! `popstate` event; if that fails, recovery falls back to a hard reload.

/// Client-side navigation operations.
pub trait Navigator: Send + Sync {
    /// Current location path (e.g. `/links`). `None` outside a browser.
    fn current_path(&self) -> Option<String>;

    /// Attempt a soft (history) navigation. Returns `false` when it cannot
    /// be performed, in which case callers fall back to
    /// [`Navigator::reload`].
    fn navigate(&self, path: &str) -> bool;

    /// Full page reload. Guarantees no stale UI state survives.
    fn reload(&self);
}

/// [`Navigator`] backed by `window.history` and `window.location`.
/// Inert outside a browser: no path, soft navigation always fails.
#[derive(Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.location().pathname().ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn navigate(&self, path: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return false;
            };
            let Ok(history) = window.history() else {
                return false;
            };
            if history
                .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
                .is_err()
            {
                return false;
            }
            // The router listens for popstate; a manual push does not fire
            // one, so dispatch it ourselves.
            match web_sys::PopStateEvent::new("popstate") {
                Ok(event) => window.dispatch_event(&event).unwrap_or(false),
                Err(_) => false,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            false
        }
    }

    fn reload(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    }
}
