//! System configuration editor for the known config keys.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::api;
use crate::net::http::ApiClient;

const BASE_DOMAIN_KEY: &str = "base_domain";
const EXPIRE_DAYS_KEY: &str = "default_expire_days";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let base_domain = RwSignal::new(String::new());
    let expire_days = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    // Seed the form once the stored configuration loads.
    let config = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::load_config(&client).await.unwrap_or_default() }
        }
    });
    Effect::new(move || {
        if let Some(values) = config.get() {
            if let Some(value) = values.get(BASE_DOMAIN_KEY) {
                base_domain.set(value.clone());
            }
            if let Some(value) = values.get(EXPIRE_DAYS_KEY) {
                expire_days.set(value.clone());
            }
        }
    });

    let save_client = client.clone();
    let on_save = Callback::new(move |()| {
        if pending.get() {
            return;
        }
        let configs: HashMap<String, String> = HashMap::from([
            (BASE_DOMAIN_KEY.to_owned(), base_domain.get().trim().to_owned()),
            (EXPIRE_DAYS_KEY.to_owned(), expire_days.get().trim().to_owned()),
        ]);

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            let client = save_client.clone();
            leptos::task::spawn_local(async move {
                if api::save_config(&client, &configs).await.is_ok() {
                    client.notifier().success("Settings saved");
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&save_client, configs);
        }
    });

    view! {
        <Title text="Settings"/>
        <div class="settings-page">
            <h1>"Settings"</h1>
            <label class="settings-page__label">
                "Base domain"
                <input
                    type="text"
                    placeholder="http://localhost:8080"
                    prop:value=move || base_domain.get()
                    on:input=move |ev| base_domain.set(event_target_value(&ev))
                />
            </label>
            <label class="settings-page__label">
                "Default expiry (days)"
                <input
                    type="text"
                    prop:value=move || expire_days.get()
                    on:input=move |ev| expire_days.set(event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=move || pending.get()
                on:click=move |_| on_save.run(())
            >
                "Save"
            </button>
        </div>
    }
}
