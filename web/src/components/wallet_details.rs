//! Detail panel for the selected wallet: holdings, transactions, and risk.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::wallet::{TokenHolding, WalletSnapshot};
use shared::utils::truncate_address;

use crate::components::pagination::{page_slice, Pagination};
use crate::components::risk_panel::RiskPanel;
use crate::components::token_icon::TokenIcon;
use crate::components::transaction_history::TransactionHistory;
use crate::services::api;
use crate::state::wallets::use_wallet_registry;
use crate::utils::constants::DEFAULT_PAGE_SIZE;
use crate::utils::format::{format_amount, format_usd};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Holdings,
    Transactions,
    Risk,
}

#[component]
pub fn WalletDetails(#[prop(into)] address: Signal<String>) -> impl IntoView {
    let registry = use_wallet_registry();

    let (tab, set_tab) = signal(Tab::Holdings);
    let (holdings_page, set_holdings_page) = signal(1usize);
    let (syncing, set_syncing) = signal(false);
    let (status, set_status) = signal(None::<String>);

    // Selecting another wallet resets the panel to its initial state.
    Effect::new(move |_| {
        address.track();
        set_tab.set(Tab::Holdings);
        set_holdings_page.set(1);
        set_status.set(None);
    });

    let snapshot = move || registry.find(&address.get());

    let sync = move |_| {
        let addr = address.get();
        if addr.is_empty() || syncing.get() {
            return;
        }
        set_syncing.set(true);
        set_status.set(None);

        spawn_local(async move {
            match api::fetch_wallet(&addr).await {
                Ok(fresh) => {
                    let updated: Vec<WalletSnapshot> = registry
                        .list()
                        .into_iter()
                        .map(|w| if w.address == addr { fresh.clone() } else { w })
                        .collect();
                    registry.replace_all(updated);
                    set_status.set(Some("Updated just now".to_string()));
                }
                Err(err) => {
                    log::error!("wallet sync failed for {addr}: {err}");
                    set_status.set(Some("Sync failed, showing cached data".to_string()));
                }
            }
            set_syncing.set(false);
        });
    };

    view! {
        {move || {
            let Some(wallet) = snapshot() else {
                return ().into_any();
            };
            view! {
                <div class="wallet-details">
                    <div class="wallet-details-header">
                        <div>
                            <h3 title=wallet.address.clone()>
                                {truncate_address(&wallet.address)}
                            </h3>
                            <p class="wallet-details-value">
                                {format_usd(wallet.total_portfolio_value_usd)}
                            </p>
                        </div>
                        <div class="wallet-details-sync">
                            <button
                                class="btn btn-secondary"
                                disabled=move || syncing.get()
                                on:click=sync
                            >
                                {move || if syncing.get() { "Syncing..." } else { "Sync" }}
                            </button>
                            {move || status.get().map(|s| view! {
                                <span class="sync-status">{s}</span>
                            })}
                        </div>
                    </div>

                    <div class="wallet-details-stats">
                        <div class="stat">
                            <span class="stat-label">"ETH Balance"</span>
                            <span class="stat-value">
                                {format!("{:.4} ETH", wallet.eth_balance)}
                            </span>
                            <span class="stat-sub">{format_usd(wallet.eth_value_usd)}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-label">"Token Value"</span>
                            <span class="stat-value">
                                {format_usd(wallet.total_token_value_usd)}
                            </span>
                            <span class="stat-sub">
                                {format!("{} tokens", wallet.holdings_count)}
                            </span>
                        </div>
                    </div>

                    <div class="wallet-details-tabs">
                        <TabButton tab=Tab::Holdings label="Holdings" active=tab set_tab=set_tab/>
                        <TabButton tab=Tab::Transactions label="Transactions" active=tab set_tab=set_tab/>
                        <TabButton tab=Tab::Risk label="Risk" active=tab set_tab=set_tab/>
                    </div>

                    {match tab.get() {
                        Tab::Holdings => view! {
                            <HoldingsList
                                holdings=wallet.token_holdings.clone()
                                page=holdings_page
                                set_page=set_holdings_page
                            />
                        }.into_any(),
                        Tab::Transactions => view! {
                            <TransactionHistory address=address/>
                        }.into_any(),
                        Tab::Risk => view! {
                            <RiskPanel address=address/>
                        }.into_any(),
                    }}
                </div>
            }.into_any()
        }}
    }
}

#[component]
fn TabButton(
    tab: Tab,
    label: &'static str,
    active: ReadSignal<Tab>,
    set_tab: WriteSignal<Tab>,
) -> impl IntoView {
    view! {
        <button
            class="tab-btn"
            class:tab-btn-active=move || active.get() == tab
            on:click=move |_| set_tab.set(tab)
        >
            {label}
        </button>
    }
}

#[component]
fn HoldingsList(
    holdings: Vec<TokenHolding>,
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
) -> impl IntoView {
    if holdings.is_empty() {
        return view! {
            <p class="holdings-empty">"No token holdings"</p>
        }
        .into_any();
    }

    let total = holdings.len();
    view! {
        <div class="holdings-list">
            {move || {
                page_slice(&holdings, page.get(), DEFAULT_PAGE_SIZE)
                    .iter()
                    .map(|h| view! {
                        <div class="holding-row">
                            <TokenIcon symbol=h.symbol.clone() contract=h.contract.clone()/>
                            <div class="holding-name">
                                <span>{h.name.clone()}</span>
                                <span class="holding-symbol">{h.symbol.clone()}</span>
                            </div>
                            <div class="holding-balance">
                                {format_amount(h.balance, 4)}
                            </div>
                            <div class="holding-value">
                                <span>{format_usd(h.value_usd)}</span>
                                <span class="holding-price">
                                    {format!("@ {}", format_usd(h.price_usd))}
                                </span>
                            </div>
                        </div>
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
        <Pagination
            current_page=page
            total_items=Signal::derive(move || total)
            set_page=Callback::new(move |p| set_page.set(p))
        />
    }
    .into_any()
}
