//! Login page: credential form plus the guest-mode entry point.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::LoginParams;
use crate::routes;
use crate::state::session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let username_or_email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit_client = client.clone();
    let submit_navigate = use_navigate();
    let submit = Callback::new(move |()| {
        let params = LoginParams {
            username_or_email: username_or_email.get().trim().to_owned(),
            password: password.get(),
        };
        if params.username_or_email.is_empty() || params.password.is_empty() || pending.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            let client = submit_client.clone();
            let navigate = submit_navigate.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::login(&client, &params).await {
                    navigate(routes::DEFAULT_AUTHENTICATED_PATH, NavigateOptions::default());
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&submit_client, &submit_navigate, params);
        }
    });

    let guest_client = client.clone();
    let guest_navigate = use_navigate();
    let on_guest = move |_| {
        session::enter_guest_mode(guest_client.creds());
        guest_navigate(routes::DEFAULT_AUTHENTICATED_PATH, NavigateOptions::default());
    };

    view! {
        <Title text="Sign in"/>
        <div class="auth-page">
            <h1>"Tracker"</h1>
            <p>"Short links, tracked"</p>
            <label class="auth-page__label">
                "Username or email"
                <input
                    type="text"
                    prop:value=move || username_or_email.get()
                    on:input=move |ev| username_or_email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=move || pending.get()
                on:click=move |_| submit.run(())
            >
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
            <button class="btn btn--ghost" on:click=on_guest>
                "Continue as guest"
            </button>
            <p class="auth-page__alt">
                "No account yet? "
                <A href=routes::REGISTER_PATH>"Create one"</A>
            </p>
        </div>
    }
}
