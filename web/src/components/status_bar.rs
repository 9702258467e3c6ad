//! Dashboard status bar: backend health, last sync time, refresh settings.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::api;
use crate::utils::constants::REFRESH_INTERVALS;
use crate::utils::ticker::{Tick, Ticker};

const HEALTH_POLL_MS: u32 = 30_000;
const CLOCK_MS: u32 = 1_000;

#[component]
pub fn StatusBar(
    #[prop(into)] last_sync: Signal<Option<i64>>,
    refresh_interval: RwSignal<u32>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let (healthy, set_healthy) = signal(None::<bool>);
    // Re-rendered clock so the "ago" label stays current.
    let (now, set_now) = signal(Utc::now().timestamp());

    let check_health = move || {
        spawn_local(async move {
            match api::fetch_health().await {
                Ok(status) => set_healthy.set(Some(status.is_healthy())),
                Err(err) => {
                    log::warn!("health check failed: {err}");
                    set_healthy.set(Some(false));
                }
            }
        });
    };
    check_health();

    let health_ticker = StoredValue::new_local(Some(Ticker::start(HEALTH_POLL_MS, move || {
        check_health();
        Tick::Continue
    })));
    let clock_ticker = StoredValue::new_local(Some(Ticker::start(CLOCK_MS, move || {
        set_now.set(Utc::now().timestamp());
        Tick::Continue
    })));

    on_cleanup(move || {
        health_ticker.update_value(|t| *t = None);
        clock_ticker.update_value(|t| *t = None);
    });

    let sync_label = move || match last_sync.get() {
        None => "Not synced yet".to_string(),
        Some(ts) => {
            let ago = (now.get() - ts).max(0);
            if ago < 5 {
                "Updated just now".to_string()
            } else if ago < 60 {
                format!("Updated {}s ago", ago)
            } else {
                format!("Updated {}m ago", ago / 60)
            }
        }
    };

    view! {
        <div class="status-bar">
            <div class="status-health">
                {move || match healthy.get() {
                    None => view! {
                        <span class="status-dot status-dot-unknown"></span>
                        <span>"Connecting..."</span>
                    }.into_any(),
                    Some(true) => view! {
                        <span class="status-dot status-dot-live"></span>
                        <span>"Live"</span>
                    }.into_any(),
                    Some(false) => view! {
                        <span class="status-dot status-dot-down"></span>
                        <span>"Backend offline"</span>
                    }.into_any(),
                }}
            </div>

            <span class="status-sync">{sync_label}</span>

            <div class="status-refresh">
                <label>
                    "Auto-refresh:"
                    <select on:change=move |ev| {
                        if let Ok(ms) = event_target_value(&ev).parse::<u32>() {
                            refresh_interval.set(ms);
                        }
                    }>
                        {REFRESH_INTERVALS.iter().map(|&(ms, label)| view! {
                            <option
                                value=ms.to_string()
                                selected=move || refresh_interval.get() == ms
                            >
                                {label}
                            </option>
                        }).collect::<Vec<_>>()}
                    </select>
                </label>
                <button class="btn btn-secondary" on:click=move |_| on_refresh.run(())>
                    "Refresh now"
                </button>
            </div>
        </div>
    }
}
