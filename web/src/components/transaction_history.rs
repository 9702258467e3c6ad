//! Transaction history list for one wallet.
//!
//! The server is asked for a bounded window of recent transactions with the
//! chosen type filter; paging over that window happens client-side. Changing
//! the filter refetches and jumps back to the first page.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::transactions::{Transaction, TransactionPage, TxDirection, TxFilter};
use shared::utils::truncate_address;

use crate::components::pagination::{page_slice, Pagination};
use crate::services::api;
use crate::utils::constants::{DEFAULT_PAGE_SIZE, ETHERSCAN_TX_BASE, TX_FETCH_LIMIT};
use crate::utils::format::{format_amount, format_time_ago, format_usd};

#[component]
pub fn TransactionHistory(#[prop(into)] address: Signal<String>) -> impl IntoView {
    let (page_data, set_page_data) = signal(None::<TransactionPage>);
    let (filter, set_filter) = signal(TxFilter::All);
    let (current_page, set_current_page) = signal(1usize);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (reload, set_reload) = signal(0u32);

    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let addr = address.get();
        let f = filter.get();
        reload.track();
        if addr.is_empty() {
            return;
        }

        let this_gen = generation.with_value(|g| g + 1);
        generation.set_value(this_gen);

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_transactions(&addr, TX_FETCH_LIMIT, f).await;
            // Superseded by a newer request, or the list unmounted mid-fetch.
            if generation.try_get_value() != Some(this_gen) {
                return;
            }
            match result {
                Ok(page) => {
                    set_page_data.set(Some(page));
                    set_error.set(None);
                }
                Err(err) => {
                    log::error!("transaction fetch failed for {addr}: {err}");
                    set_page_data.set(None);
                    set_error.set(Some("Could not load transactions".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let change_filter = move |f: TxFilter| {
        set_filter.set(f);
        set_current_page.set(1);
    };

    let visible = move || {
        page_data
            .get()
            .map(|p| {
                page_slice(&p.transactions, current_page.get(), DEFAULT_PAGE_SIZE).to_vec()
            })
            .unwrap_or_default()
    };
    let total = move || {
        page_data
            .get()
            .map(|p| p.transactions.len())
            .unwrap_or(0)
    };

    view! {
        <div class="tx-history">
            <div class="tx-history-header">
                <h4>"Transactions"</h4>
                <select
                    class="tx-filter"
                    on:change=move |ev| {
                        let f = match event_target_value(&ev).as_str() {
                            "eth" => TxFilter::Eth,
                            "tokens" => TxFilter::Tokens,
                            _ => TxFilter::All,
                        };
                        change_filter(f);
                    }
                >
                    <option value="all">"All"</option>
                    <option value="eth">"ETH only"</option>
                    <option value="tokens">"Tokens only"</option>
                </select>
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="tx-skeleton">
                            {(0..5).map(|_| view! {
                                <div class="tx-skeleton-row"></div>
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any();
                }
                if let Some(msg) = error.get() {
                    return view! {
                        <div class="panel-error">
                            <p>{msg}</p>
                            <button class="btn btn-secondary" on:click=move |_| {
                                set_reload.update(|n| *n += 1);
                            }>
                                "Retry"
                            </button>
                        </div>
                    }.into_any();
                }
                let rows = visible();
                if rows.is_empty() {
                    return view! {
                        <p class="tx-empty">"No transactions found"</p>
                    }.into_any();
                }
                let now = Utc::now().timestamp();
                view! {
                    <div class="tx-list">
                        {rows.into_iter().map(|tx| view! {
                            <TransactionRow tx=tx now=now/>
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any()
            }}

            <Pagination
                current_page=current_page
                total_items=Signal::derive(total)
                set_page=Callback::new(move |p| set_current_page.set(p))
            />
        </div>
    }
}

#[component]
fn TransactionRow(tx: Transaction, now: i64) -> impl IntoView {
    let direction_label = match tx.direction {
        TxDirection::Send => "Sent",
        TxDirection::Receive => "Received",
    };
    let counterparty = match tx.direction {
        TxDirection::Send => tx.to.clone(),
        TxDirection::Receive => tx.from.clone(),
    };
    let amount = if tx.is_eth() {
        format!("{} ETH", format_amount(tx.value_eth.unwrap_or(0.0), 4))
    } else {
        let symbol = tx.token_symbol.clone().unwrap_or_else(|| tx.asset.clone());
        format!("{} {}", format_amount(tx.value.unwrap_or(0.0), 4), symbol)
    };
    let usd = tx.value_usd.map(format_usd);
    let etherscan = format!("{}/{}", ETHERSCAN_TX_BASE, tx.hash);

    view! {
        <div class="tx-row" class:tx-row-failed=tx.is_error>
            <div class="tx-row-main">
                <span class=format!(
                    "tx-direction tx-direction-{}",
                    match tx.direction {
                        TxDirection::Send => "send",
                        TxDirection::Receive => "receive",
                    }
                )>
                    {direction_label}
                </span>
                <span class="tx-amount">{amount}</span>
                {usd.map(|v| view! { <span class="tx-usd">{v}</span> })}
                {tx.is_error.then(|| view! {
                    <span class="tx-failed-badge">"Failed"</span>
                })}
            </div>
            <div class="tx-row-meta">
                <span class="tx-counterparty" title=counterparty.clone()>
                    {match tx.direction {
                        TxDirection::Send => "To ",
                        TxDirection::Receive => "From ",
                    }}
                    {truncate_address(&counterparty)}
                </span>
                <span class="tx-time">{format_time_ago(tx.timestamp, now)}</span>
                <a
                    class="tx-link"
                    href=etherscan
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "View ↗"
                </a>
            </div>
        </div>
    }
}
