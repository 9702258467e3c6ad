//! Transaction browser: search and filter activity for any tracked wallet.
//!
//! One bounded window of recent transactions is fetched per wallet; search
//! and the direction/asset filters are applied client-side on top of it.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::transactions::{Transaction, TransactionPage, TxDirection, TxFilter};
use shared::utils::{is_valid_address, truncate_address};

use crate::components::pagination::{page_slice, Pagination};
use crate::services::api;
use crate::state::wallets::use_wallet_registry;
use crate::utils::constants::{DEFAULT_PAGE_SIZE, ETHERSCAN_TX_BASE, TX_FETCH_LIMIT};
use crate::utils::format::{format_amount, format_grouped, format_time_ago, format_usd};
use crate::utils::url::get_query_param;

/// Client-side view filter over the fetched window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityFilter {
    #[default]
    All,
    Sent,
    Received,
    Eth,
    Tokens,
}

impl ActivityFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "sent" => ActivityFilter::Sent,
            "received" => ActivityFilter::Received,
            "eth" => ActivityFilter::Eth,
            "tokens" => ActivityFilter::Tokens,
            _ => ActivityFilter::All,
        }
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Sent => tx.direction == TxDirection::Send,
            ActivityFilter::Received => tx.direction == TxDirection::Receive,
            ActivityFilter::Eth => tx.is_eth(),
            ActivityFilter::Tokens => !tx.is_eth(),
        }
    }
}

/// Apply the view filter and a case-insensitive search over hash and both
/// endpoint addresses.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: ActivityFilter,
    search: &str,
) -> Vec<Transaction> {
    let needle = search.trim().to_lowercase();
    transactions
        .iter()
        .filter(|tx| filter.matches(tx))
        .filter(|tx| {
            needle.is_empty()
                || tx.hash.to_lowercase().contains(&needle)
                || tx.from.to_lowercase().contains(&needle)
                || tx.to.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let registry = use_wallet_registry();

    // Deep links like /transactions?address=0x... preselect that wallet.
    let initial = get_query_param("address").filter(|a| is_valid_address(a));
    let (selected, set_selected) = signal(
        initial.or_else(|| registry.list().first().map(|w| w.address.clone())),
    );

    let (page_data, set_page_data) = signal(None::<TransactionPage>);
    let (filter, set_filter) = signal(ActivityFilter::All);
    let (search, set_search) = signal(String::new());
    let (current_page, set_current_page) = signal(1usize);
    let (per_page, set_per_page) = signal(DEFAULT_PAGE_SIZE);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (reload, set_reload) = signal(0u32);

    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let Some(addr) = selected.get() else {
            set_page_data.set(None);
            return;
        };
        reload.track();

        let this_gen = generation.with_value(|g| g + 1);
        generation.set_value(this_gen);

        set_loading.set(true);
        set_error.set(None);
        set_current_page.set(1);

        spawn_local(async move {
            let result = api::fetch_transactions(&addr, TX_FETCH_LIMIT, TxFilter::All).await;
            // Superseded by a newer request, or the page unmounted mid-fetch.
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

    let filtered = move || {
        page_data
            .get()
            .map(|p| filter_transactions(&p.transactions, filter.get(), &search.get()))
            .unwrap_or_default()
    };

    view! {
        <div class="page transactions-page">
            <div class="page-header">
                <h2>"Transactions"</h2>
                <select
                    class="wallet-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_selected.set((!value.is_empty()).then_some(value));
                    }
                >
                    {move || {
                        let current = selected.get();
                        registry.list().into_iter().map(|w| {
                            let is_current = current.as_deref() == Some(w.address.as_str());
                            view! {
                                <option value=w.address.clone() selected=is_current>
                                    {truncate_address(&w.address)}
                                </option>
                            }
                        }).collect::<Vec<_>>()
                    }}
                </select>
            </div>

            {move || page_data.get().map(|p| view! {
                <div class="tx-stats">
                    <div class="stat">
                        <span class="stat-label">"Total"</span>
                        <span class="stat-value">
                            {format_grouped(p.total_count as f64, 0)}
                        </span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">"Sent"</span>
                        <span class="stat-value">
                            {format_grouped(p.sent_count as f64, 0)}
                        </span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">"Received"</span>
                        <span class="stat-value">
                            {format_grouped(p.received_count as f64, 0)}
                        </span>
                    </div>
                </div>
            })}

            <div class="tx-controls">
                <input
                    class="tx-search"
                    type="text"
                    placeholder="Search hash or address..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_current_page.set(1);
                    }
                />
                <select
                    class="tx-filter"
                    on:change=move |ev| {
                        set_filter.set(ActivityFilter::parse(&event_target_value(&ev)));
                        set_current_page.set(1);
                    }
                >
                    <option value="all">"All"</option>
                    <option value="sent">"Sent"</option>
                    <option value="received">"Received"</option>
                    <option value="eth">"ETH only"</option>
                    <option value="tokens">"Tokens only"</option>
                </select>
            </div>

            {move || {
                if registry.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"Track a wallet first to browse its transactions."</p>
                        </div>
                    }.into_any();
                }
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

                let rows = filtered();
                if rows.is_empty() {
                    return view! {
                        <p class="tx-empty">"No matching transactions"</p>
                    }.into_any();
                }

                let total = rows.len();
                let visible = page_slice(&rows, current_page.get(), per_page.get()).to_vec();
                let now = Utc::now().timestamp();

                view! {
                    <table class="tx-table">
                        <thead>
                            <tr>
                                <th>"Type"</th>
                                <th>"Amount"</th>
                                <th>"Counterparty"</th>
                                <th>"When"</th>
                                <th>""</th>
                            </tr>
                        </thead>
                        <tbody>
                            {visible.into_iter().map(|tx| {
                                let counterparty = match tx.direction {
                                    TxDirection::Send => tx.to.clone(),
                                    TxDirection::Receive => tx.from.clone(),
                                };
                                let amount = if tx.is_eth() {
                                    format!(
                                        "{} ETH",
                                        format_amount(tx.value_eth.unwrap_or(0.0), 4)
                                    )
                                } else {
                                    format!(
                                        "{} {}",
                                        format_amount(tx.value.unwrap_or(0.0), 4),
                                        tx.token_symbol
                                            .clone()
                                            .unwrap_or_else(|| tx.asset.clone())
                                    )
                                };
                                view! {
                                    <tr class:tx-row-failed=tx.is_error>
                                        <td>
                                            {match tx.direction {
                                                TxDirection::Send => "Sent",
                                                TxDirection::Receive => "Received",
                                            }}
                                            {tx.is_error.then(|| view! {
                                                <span class="tx-failed-badge">"Failed"</span>
                                            })}
                                        </td>
                                        <td>
                                            {amount}
                                            {tx.value_usd.map(|v| view! {
                                                <span class="tx-usd">
                                                    {format!(" ({})", format_usd(v))}
                                                </span>
                                            })}
                                        </td>
                                        <td title=counterparty.clone()>
                                            {truncate_address(&counterparty)}
                                        </td>
                                        <td>{format_time_ago(tx.timestamp, now)}</td>
                                        <td>
                                            <a
                                                class="tx-link"
                                                href=format!("{}/{}", ETHERSCAN_TX_BASE, tx.hash)
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                "↗"
                                            </a>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Vec<_>>()}
                        </tbody>
                    </table>

                    <Pagination
                        current_page=current_page
                        total_items=Signal::derive(move || total)
                        set_page=Callback::new(move |p| set_current_page.set(p))
                        items_per_page=Signal::from(per_page)
                        set_items_per_page=Callback::new(move |n| set_per_page.set(n))
                    />
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(hash: &str, direction: TxDirection, asset: &str) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            direction,
            from: "0x8ba1f109551bD432803012645Ac136ddd64DBA72".to_string(),
            to: "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6".to_string(),
            value_eth: (asset == "ETH").then_some(0.1),
            value: (asset != "ETH").then_some(100.0),
            value_usd: Some(350.0),
            timestamp: 1_729_180_800,
            block_number: 18_500_000,
            gas_used: 21_000,
            gas_price: 20.0,
            is_error: false,
            asset: asset.to_string(),
            token_name: None,
            token_symbol: None,
            contract_address: None,
        }
    }

    #[test]
    fn filters_match_direction_and_asset() {
        let sent_eth = tx("0xaa", TxDirection::Send, "ETH");
        let received_token = tx("0xbb", TxDirection::Receive, "USDC");

        assert!(ActivityFilter::All.matches(&sent_eth));
        assert!(ActivityFilter::Sent.matches(&sent_eth));
        assert!(!ActivityFilter::Sent.matches(&received_token));
        assert!(ActivityFilter::Received.matches(&received_token));
        assert!(ActivityFilter::Eth.matches(&sent_eth));
        assert!(!ActivityFilter::Eth.matches(&received_token));
        assert!(ActivityFilter::Tokens.matches(&received_token));
    }

    #[test]
    fn search_is_case_insensitive_over_hash_and_addresses() {
        let txs = vec![
            tx("0xAbCd01", TxDirection::Send, "ETH"),
            tx("0xff9900", TxDirection::Receive, "USDC"),
        ];

        let by_hash = filter_transactions(&txs, ActivityFilter::All, "abcd");
        assert_eq!(by_hash.len(), 1);
        assert_eq!(by_hash[0].hash, "0xAbCd01");

        // Both share the same endpoints, so an address search matches both.
        let by_addr = filter_transactions(&txs, ActivityFilter::All, "8BA1F109");
        assert_eq!(by_addr.len(), 2);

        let none = filter_transactions(&txs, ActivityFilter::All, "deadbeef");
        assert!(none.is_empty());
    }

    #[test]
    fn filter_and_search_combine() {
        let txs = vec![
            tx("0xaa", TxDirection::Send, "ETH"),
            tx("0xab", TxDirection::Receive, "ETH"),
            tx("0xac", TxDirection::Send, "USDC"),
        ];
        let result = filter_transactions(&txs, ActivityFilter::Sent, "0xa");
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|t| t.direction == TxDirection::Send));
    }

    #[test]
    fn parse_falls_back_to_all() {
        assert_eq!(ActivityFilter::parse("sent"), ActivityFilter::Sent);
        assert_eq!(ActivityFilter::parse("bogus"), ActivityFilter::All);
    }
}
