//! Registration page. A successful registration is also a login.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::RegisterParams;
use crate::routes;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit_navigate = use_navigate();
    let submit = Callback::new(move |()| {
        let nickname = nickname.get().trim().to_owned();
        let params = RegisterParams {
            username: username.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            nickname: if nickname.is_empty() { None } else { Some(nickname) },
        };
        if params.username.is_empty() || params.email.is_empty() || params.password.is_empty()
            || pending.get()
        {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            let client = client.clone();
            let navigate = submit_navigate.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::register(&client, &params).await {
                    navigate(routes::DEFAULT_AUTHENTICATED_PATH, NavigateOptions::default());
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &submit_navigate, params);
        }
    });

    view! {
        <Title text="Create account"/>
        <div class="auth-page">
            <h1>"Create account"</h1>
            <label class="auth-page__label">
                "Username"
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Email"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Nickname (optional)"
                <input
                    type="text"
                    prop:value=move || nickname.get()
                    on:input=move |ev| nickname.set(event_target_value(&ev))
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
                "Create account"
            </button>
            <p class="auth-page__alt">
                "Already registered? "
                <A href=routes::LOGIN_PATH>"Sign in"</A>
            </p>
        </div>
    }
}
