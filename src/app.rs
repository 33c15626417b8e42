//! Root application component with routing, context providers, the
//! navigation guard, and session bootstrap.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::nav_bar::NavBar;
use crate::components::toast_host::ToastHost;
use crate::net::http::{ApiClient, RedirectGate};
use crate::pages::{
    dashboard::DashboardPage, links::LinksPage, login::LoginPage, register::RegisterPage,
    settings::SettingsPage, visits::VisitsPage,
};
use crate::routes::{self, GuardDecision};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::credentials::CredentialStore;
use crate::util::navigator::BrowserNavigator;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/tracker-ui.css"/>
        <Title text="Tracker"/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Everything that needs router context: interceptor construction, the
/// navigation guard, bootstrap rehydration, and the route table.
#[component]
fn AppShell() -> impl IntoView {
    // Reactive state contexts for child components.
    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // One client for the whole app: credential store, redirect gate, and
    // the session/notifier/navigator handles all injected here.
    let creds = CredentialStore::for_environment();
    let client = ApiClient::new(
        creds.clone(),
        RedirectGate::new(),
        Arc::new(session),
        Arc::new(toasts),
        Arc::new(BrowserNavigator::new()),
    );
    provide_context(client.clone());

    // Navigation guard: runs before content for every transition, against
    // a fresh credential read each time.
    let location = use_location();
    let guard_navigate = use_navigate();
    Effect::new(move || {
        let path = location.pathname.get();
        if let GuardDecision::Redirect(target) = routes::evaluate_navigation(&path, &creds) {
            guard_navigate(target, NavigateOptions::default());
        }
    });

    // Bootstrap rehydration: with a persisted token (and no guest flag),
    // restore the profile from the server. Browser only.
    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            crate::net::api::rehydrate_session(&client).await;
        });
    }

    view! {
        <NavBar/>
        <ToastHost/>
        <main>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("links") view=LinksPage/>
                <Route path=StaticSegment("visits") view=VisitsPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </main>
    }
}

/// The root path is never rendered; the guard redirects it away.
#[component]
fn RootRedirect() -> impl IntoView {
    ()
}
