//! Top navigation bar with section links and the session menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::http::ApiClient;
use crate::routes;
use crate::state::session::{self, SessionState};

/// Navigation bar. Hidden on the public (login/register) pages.
#[component]
pub fn NavBar() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    let on_public_page = move || {
        let path = location.pathname.get();
        path == routes::LOGIN_PATH || path == routes::REGISTER_PATH
    };

    let label_client = client.clone();
    let display_name = move || {
        let state = session.get();
        let token_present = label_client.creds().token().is_some();
        if state.is_logged_in(token_present) {
            state.profile.map_or_else(String::new, |p| p.nickname)
        } else if label_client.creds().guest_mode() {
            "Guest".to_owned()
        } else {
            String::new()
        }
    };

    let logout_client = client.clone();
    let navigate = use_navigate();
    let on_logout = move |_| {
        session::logout(logout_client.creds(), logout_client.session());
        logout_client.notifier().success("Signed out");
        navigate(routes::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <Show when=move || !on_public_page()>
            <nav class="nav-bar">
                <span class="nav-bar__brand">"Tracker"</span>
                <A href=routes::DASHBOARD_PATH>"Dashboard"</A>
                <A href=routes::LINKS_PATH>"Links"</A>
                <A href=routes::VISITS_PATH>"Visits"</A>
                <A href=routes::SETTINGS_PATH>"Settings"</A>
                <span class="nav-bar__spacer"></span>
                <span class="nav-bar__user">{display_name.clone()}</span>
                <button class="btn" on:click=on_logout.clone()>
                    "Sign out"
                </button>
            </nav>
        </Show>
    }
}
