//! Wallet dashboard: tracked wallet list, detail panel, auto-refresh.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::wallet::WalletSnapshot;

use crate::components::add_wallet_modal::AddWalletModal;
use crate::components::status_bar::StatusBar;
use crate::components::wallet_card::WalletCard;
use crate::components::wallet_details::WalletDetails;
use crate::services::api;
use crate::state::wallets::use_wallet_registry;
use crate::utils::constants::DEFAULT_REFRESH_INTERVAL_MS;
use crate::utils::ticker::{Tick, Ticker};

#[component]
pub fn WalletsPage() -> impl IntoView {
    let registry = use_wallet_registry();

    let (selected, set_selected) = signal(None::<String>);
    let (show_modal, set_show_modal) = signal(false);
    let (last_sync, set_last_sync) = signal(None::<i64>);
    let refresh_interval = RwSignal::new(DEFAULT_REFRESH_INTERVAL_MS);

    let refresh_all = move || {
        let addresses: Vec<String> =
            registry.list().into_iter().map(|w| w.address).collect();
        if addresses.is_empty() {
            return;
        }
        spawn_local(async move {
            let mut fresh: Vec<WalletSnapshot> = Vec::with_capacity(addresses.len());
            for addr in addresses {
                match api::fetch_wallet(&addr).await {
                    Ok(snapshot) => fresh.push(snapshot),
                    Err(err) => {
                        log::error!("refresh failed for {addr}: {err}");
                        if let Some(cached) = registry.find(&addr) {
                            fresh.push(cached);
                        }
                    }
                }
            }
            registry.replace_all(fresh);
            set_last_sync.set(Some(Utc::now().timestamp()));
        });
    };

    // Reschedule the auto-refresh timer whenever the interval changes.
    // Zero means manual only.
    let auto_ticker = StoredValue::new_local(None::<Ticker>);
    Effect::new(move |_| {
        let interval = refresh_interval.get();
        auto_ticker.update_value(|t| *t = None);
        if interval > 0 {
            let handle = Ticker::start(interval, move || {
                refresh_all();
                Tick::Continue
            });
            auto_ticker.set_value(Some(handle));
        }
    });
    on_cleanup(move || {
        auto_ticker.update_value(|t| *t = None);
    });

    // Keep the selection valid when its wallet is removed.
    Effect::new(move |_| {
        if let Some(addr) = selected.get() {
            if !registry.contains(&addr) {
                set_selected.set(None);
            }
        }
    });

    view! {
        <div class="page wallets-page">
            <StatusBar
                last_sync=last_sync
                refresh_interval=refresh_interval
                on_refresh=Callback::new(move |_| refresh_all())
            />

            <div class="wallets-layout">
                <aside class="wallets-sidebar">
                    <div class="sidebar-header">
                        <h3>"Wallets"</h3>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| set_show_modal.set(true)
                        >
                            "+ Add"
                        </button>
                    </div>

                    {move || {
                        let wallets = registry.list();
                        if wallets.is_empty() {
                            return view! {
                                <p class="sidebar-empty">
                                    "Add a wallet address to start tracking."
                                </p>
                            }.into_any();
                        }
                        wallets.into_iter().map(|wallet| {
                            let addr = wallet.address.clone();
                            let is_selected = Signal::derive(move || {
                                selected.get().as_deref() == Some(addr.as_str())
                            });
                            view! {
                                <WalletCard
                                    wallet=wallet
                                    selected=is_selected
                                    on_select=Callback::new(move |a| {
                                        set_selected.set(Some(a));
                                    })
                                    on_remove=Callback::new(move |a: String| {
                                        registry.remove(&a);
                                    })
                                />
                            }
                        }).collect::<Vec<_>>().into_any()
                    }}
                </aside>

                <section class="wallets-main">
                    {move || match selected.get() {
                        Some(addr) => view! {
                            <WalletDetails address=Signal::derive(move || addr.clone())/>
                        }.into_any(),
                        None => view! {
                            <div class="empty-state">
                                <p>"Select a wallet to see its holdings, transactions, \
                                    and risk analysis."</p>
                            </div>
                        }.into_any(),
                    }}
                </section>
            </div>

            {move || show_modal.get().then(|| view! {
                <AddWalletModal
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                    on_added=Callback::new(move |addr| {
                        set_selected.set(Some(addr));
                        set_last_sync.set(Some(Utc::now().timestamp()));
                    })
                />
            })}
        </div>
    }
}
