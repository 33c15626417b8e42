//! Dashboard page: recent visits, click trend, and top links.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::api;
use crate::net::http::ApiClient;

const TREND_DAYS: u32 = 7;
const TOP_LINKS_LIMIT: u32 = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let visits = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::recent_visits(&client).await.unwrap_or_default() }
        }
    });
    let trend = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::click_trend(&client, TREND_DAYS).await.unwrap_or_default() }
        }
    });
    let top = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::top_links(&client, TOP_LINKS_LIMIT).await.unwrap_or_default() }
        }
    });

    view! {
        <Title text="Dashboard"/>
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>

            <section class="dashboard-page__panel">
                <h2>"Click trend"</h2>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        trend
                            .get()
                            .map(|items| {
                                items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <div class="trend-row">
                                                <span>{item.date}</span>
                                                <span>{item.clicks}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__panel">
                <h2>"Top links"</h2>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        top.get()
                            .map(|items| {
                                items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <div class="top-row">
                                                <span class="top-row__code">{item.short_code}</span>
                                                <span class="top-row__url">{item.long_url}</span>
                                                <span>{item.total_clicks}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__panel">
                <h2>"Recent visits"</h2>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        visits
                            .get()
                            .map(|items| {
                                items
                                    .into_iter()
                                    .map(|visit| {
                                        view! {
                                            <div class="visit-row">
                                                <span>{visit.short_code}</span>
                                                <span>{visit.ip}</span>
                                                <span>{visit.location.unwrap_or_default()}</span>
                                                <span>{visit.create_time}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
