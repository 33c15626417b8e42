//! Paginated table of every recorded visit.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::api;
use crate::net::http::ApiClient;

const PAGE_SIZE: u32 = 20;

#[component]
pub fn VisitsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let page = RwSignal::new(0_u32);

    // Reading `page` inside the fetcher makes the resource refetch on
    // every pager click.
    let visits = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            let page = page.get();
            async move { api::all_visits(&client, page, PAGE_SIZE).await.ok() }
        }
    });

    view! {
        <Title text="Visits"/>
        <div class="visits-page">
            <h1>"Visits"</h1>

            <Suspense fallback=move || view! { <p>"Loading visits..."</p> }>
                {move || {
                    visits
                        .get()
                        .flatten()
                        .map(|paged| {
                            let current = page.get();
                            let last_page = if paged.total_elements == 0 {
                                0
                            } else {
                                (paged.total_elements - 1) / i64::from(PAGE_SIZE)
                            };
                            let at_start = current == 0;
                            let at_end = i64::from(current) >= last_page;
                            view! {
                                <div>
                                    {paged
                                        .content
                                        .into_iter()
                                        .map(|visit| {
                                            view! {
                                                <div class="visit-row">
                                                    <span>{visit.short_code}</span>
                                                    <span>{visit.ip}</span>
                                                    <span>{visit.location.unwrap_or_default()}</span>
                                                    <span>{visit.user_agent.unwrap_or_default()}</span>
                                                    <span>{visit.create_time}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                    <div class="visits-page__pager">
                                        <button
                                            class="btn"
                                            disabled=at_start
                                            on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                                        >
                                            "Previous"
                                        </button>
                                        <span>{format!("Page {} of {}", current + 1, last_page + 1)}</span>
                                        <button
                                            class="btn"
                                            disabled=at_end
                                            on:click=move |_| page.update(|p| *p += 1)
                                        >
                                            "Next"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
