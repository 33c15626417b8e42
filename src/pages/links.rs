//! Short-link list with create and delete actions.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::CreateShortLinkParams;

#[component]
pub fn LinksPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let links = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::list_short_links(&client).await.unwrap_or_default() }
        }
    });

    // Configured base domain for rendering full short URLs; empty until
    // loaded (or when the server has no value), in which case rows fall
    // back to the bare code.
    let base_domain = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::config_value(&client, "base_domain").await.unwrap_or_default() }
        }
    });

    let long_url = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let create_client = client.clone();
    let on_create = Callback::new(move |()| {
        let url = long_url.get().trim().to_owned();
        if url.is_empty() || pending.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            let client = create_client.clone();
            leptos::task::spawn_local(async move {
                let params = CreateShortLinkParams {
                    long_url: url,
                    workspace: "personal".to_owned(),
                    expire_date: None,
                };
                if api::create_short_link(&client, &params).await.is_ok() {
                    long_url.set(String::new());
                    links.refetch();
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&create_client, url);
        }
    });

    let delete_client = client.clone();
    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let client = delete_client.clone();
            leptos::task::spawn_local(async move {
                if api::delete_short_link(&client, id).await.is_ok() {
                    links.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&delete_client, id);
        }
    });

    view! {
        <Title text="Short links"/>
        <div class="links-page">
            <h1>"Short links"</h1>

            <div class="links-page__create">
                <input
                    type="url"
                    placeholder="https://example.com/very/long/url"
                    prop:value=move || long_url.get()
                    on:input=move |ev| long_url.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_create.run(());
                        }
                    }
                />
                <button
                    class="btn btn--primary"
                    disabled=move || pending.get()
                    on:click=move |_| on_create.run(())
                >
                    "Shorten"
                </button>
            </div>

            <Suspense fallback=move || view! { <p>"Loading links..."</p> }>
                {move || {
                    let base = base_domain.get().unwrap_or_default();
                    links
                        .get()
                        .map(|items| {
                            if items.is_empty() {
                                view! { <p class="links-page__empty">"No links yet."</p> }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|link| {
                                        let id = link.id;
                                        let short_url = if base.is_empty() {
                                            link.short_code.clone()
                                        } else {
                                            format!("{base}/{}", link.short_code)
                                        };
                                        view! {
                                            <div class="link-row">
                                                <span class="link-row__code">{short_url}</span>
                                                <span class="link-row__url">{link.long_url}</span>
                                                <span class="link-row__clicks">{link.total_clicks}</span>
                                                <button class="btn" on:click=move |_| on_delete.run(id)>
                                                    "Delete"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
