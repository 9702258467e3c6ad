//! Portfolio overview: aggregates across every tracked wallet.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use shared::dto::wallet::WalletSnapshot;
use shared::utils::truncate_address;

use crate::components::token_icon::TokenIcon;
use crate::services::api;
use crate::state::wallets::use_wallet_registry;
use crate::utils::format::format_usd;

/// Aggregate USD totals across a set of wallets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PortfolioTotals {
    pub total_usd: f64,
    pub eth_usd: f64,
    pub token_usd: f64,
}

impl PortfolioTotals {
    /// Share of the portfolio held as plain ETH, in percent. Zero for an
    /// empty portfolio.
    pub fn eth_share(&self) -> f64 {
        if self.total_usd <= 0.0 {
            return 0.0;
        }
        self.eth_usd / self.total_usd * 100.0
    }

    pub fn token_share(&self) -> f64 {
        if self.total_usd <= 0.0 {
            return 0.0;
        }
        self.token_usd / self.total_usd * 100.0
    }
}

pub fn portfolio_totals(wallets: &[WalletSnapshot]) -> PortfolioTotals {
    wallets.iter().fold(PortfolioTotals::default(), |acc, w| {
        PortfolioTotals {
            total_usd: acc.total_usd + w.total_portfolio_value_usd,
            eth_usd: acc.eth_usd + w.eth_value_usd,
            token_usd: acc.token_usd + w.total_token_value_usd,
        }
    })
}

/// One aggregated position across all wallets, keyed by contract.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedHolding {
    pub name: String,
    pub symbol: String,
    pub contract: String,
    pub balance: f64,
    pub value_usd: f64,
}

/// The `n` most valuable token positions across every wallet, summing
/// duplicate contracts. Sorted by USD value, descending.
pub fn top_holdings(wallets: &[WalletSnapshot], n: usize) -> Vec<AggregatedHolding> {
    let mut merged: Vec<AggregatedHolding> = Vec::new();

    for wallet in wallets {
        for holding in &wallet.token_holdings {
            match merged.iter_mut().find(|h| h.contract == holding.contract) {
                Some(existing) => {
                    existing.balance += holding.balance;
                    existing.value_usd += holding.value_usd;
                }
                None => merged.push(AggregatedHolding {
                    name: holding.name.clone(),
                    symbol: holding.symbol.clone(),
                    contract: holding.contract.clone(),
                    balance: holding.balance,
                    value_usd: holding.value_usd,
                }),
            }
        }
    }

    merged.sort_by(|a, b| {
        b.value_usd
            .partial_cmp(&a.value_usd)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    merged.truncate(n);
    merged
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let registry = use_wallet_registry();
    let (refreshing, set_refreshing) = signal(false);

    let refresh_all = move |_| {
        if refreshing.get() {
            return;
        }
        let addresses: Vec<String> =
            registry.list().into_iter().map(|w| w.address).collect();
        if addresses.is_empty() {
            return;
        }
        set_refreshing.set(true);

        spawn_local(async move {
            let mut fresh = Vec::with_capacity(addresses.len());
            for addr in addresses {
                match api::fetch_wallet(&addr).await {
                    Ok(snapshot) => fresh.push(snapshot),
                    Err(err) => {
                        log::error!("refresh failed for {addr}: {err}");
                        // Keep the cached entry rather than dropping the wallet.
                        if let Some(cached) = registry.find(&addr) {
                            fresh.push(cached);
                        }
                    }
                }
            }
            registry.replace_all(fresh);
            set_refreshing.set(false);
        });
    };

    view! {
        <div class="page portfolio-page">
            <div class="page-header">
                <h2>"Portfolio"</h2>
                <button
                    class="btn btn-secondary"
                    disabled=move || refreshing.get()
                    on:click=refresh_all
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh all" }}
                </button>
            </div>

            {move || {
                let wallets = registry.list();
                if wallets.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No wallets tracked yet."</p>
                            <A href="/wallets" attr:class="btn btn-primary">
                                "Add a wallet"
                            </A>
                        </div>
                    }.into_any();
                }

                let totals = portfolio_totals(&wallets);
                let top = top_holdings(&wallets, 5);

                view! {
                    <div class="portfolio-totals">
                        <div class="stat">
                            <span class="stat-label">"Total value"</span>
                            <span class="stat-value">{format_usd(totals.total_usd)}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-label">"ETH"</span>
                            <span class="stat-value">{format_usd(totals.eth_usd)}</span>
                            <span class="stat-sub">
                                {format!("{:.1}% of portfolio", totals.eth_share())}
                            </span>
                        </div>
                        <div class="stat">
                            <span class="stat-label">"Tokens"</span>
                            <span class="stat-value">{format_usd(totals.token_usd)}</span>
                            <span class="stat-sub">
                                {format!("{:.1}% of portfolio", totals.token_share())}
                            </span>
                        </div>
                        <div class="stat">
                            <span class="stat-label">"Wallets"</span>
                            <span class="stat-value">{wallets.len()}</span>
                        </div>
                    </div>

                    <div class="distribution-bar">
                        <div
                            class="distribution-eth"
                            style=format!("width: {:.1}%", totals.eth_share())
                        ></div>
                        <div
                            class="distribution-tokens"
                            style=format!("width: {:.1}%", totals.token_share())
                        ></div>
                    </div>

                    {(!top.is_empty()).then(|| view! {
                        <div class="top-holdings">
                            <h3>"Top holdings"</h3>
                            {top.iter().map(|h| view! {
                                <div class="holding-row">
                                    <TokenIcon
                                        symbol=h.symbol.clone()
                                        contract=h.contract.clone()
                                    />
                                    <div class="holding-name">
                                        <span>{h.name.clone()}</span>
                                        <span class="holding-symbol">{h.symbol.clone()}</span>
                                    </div>
                                    <div class="holding-value">
                                        {format_usd(h.value_usd)}
                                    </div>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    })}

                    <div class="portfolio-wallets">
                        <h3>"Wallets"</h3>
                        {wallets.iter().map(|w| view! {
                            <div class="portfolio-wallet-row">
                                <span title=w.address.clone()>
                                    {truncate_address(&w.address)}
                                </span>
                                <span>{format!("{:.4} ETH", w.eth_balance)}</span>
                                <span>{format!("{} tokens", w.holdings_count)}</span>
                                <span class="portfolio-wallet-value">
                                    {format_usd(w.total_portfolio_value_usd)}
                                </span>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::wallet::TokenHolding;

    fn holding(symbol: &str, contract: &str, balance: f64, value: f64) -> TokenHolding {
        TokenHolding {
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            contract: contract.to_string(),
            balance,
            price_usd: if balance > 0.0 { value / balance } else { 0.0 },
            value_usd: value,
        }
    }

    fn wallet(address: &str, eth_usd: f64, holdings: Vec<TokenHolding>) -> WalletSnapshot {
        let token_usd: f64 = holdings.iter().map(|h| h.value_usd).sum();
        WalletSnapshot {
            address: address.to_string(),
            eth_balance: eth_usd / 3500.0,
            eth_price_usd: 3500.0,
            eth_value_usd: eth_usd,
            holdings_count: holdings.len() as u32,
            token_holdings: holdings,
            total_token_value_usd: token_usd,
            total_portfolio_value_usd: eth_usd + token_usd,
        }
    }

    #[test]
    fn totals_sum_across_wallets() {
        let wallets = vec![
            wallet("0xa", 700.0, vec![holding("USDC", "0x1", 300.0, 300.0)]),
            wallet("0xb", 300.0, vec![holding("PEPE", "0x2", 1000.0, 700.0)]),
        ];
        let totals = portfolio_totals(&wallets);
        assert_eq!(totals.total_usd, 2000.0);
        assert_eq!(totals.eth_usd, 1000.0);
        assert_eq!(totals.token_usd, 1000.0);
        assert!((totals.eth_share() - 50.0).abs() < 1e-9);
        assert!((totals.token_share() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_portfolio_has_zero_shares() {
        let totals = portfolio_totals(&[]);
        assert_eq!(totals.eth_share(), 0.0);
        assert_eq!(totals.token_share(), 0.0);
    }

    #[test]
    fn top_holdings_merge_duplicate_contracts() {
        let wallets = vec![
            wallet("0xa", 0.0, vec![holding("USDC", "0x1", 100.0, 100.0)]),
            wallet("0xb", 0.0, vec![
                holding("USDC", "0x1", 50.0, 50.0),
                holding("PEPE", "0x2", 9999.0, 400.0),
            ]),
        ];
        let top = top_holdings(&wallets, 5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].symbol, "PEPE");
        assert_eq!(top[1].symbol, "USDC");
        assert_eq!(top[1].balance, 150.0);
        assert_eq!(top[1].value_usd, 150.0);
    }

    #[test]
    fn top_holdings_respects_the_limit() {
        let holdings: Vec<TokenHolding> = (0..10)
            .map(|i| holding(&format!("T{i}"), &format!("0x{i}"), 1.0, i as f64))
            .collect();
        let wallets = vec![wallet("0xa", 0.0, holdings)];
        let top = top_holdings(&wallets, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].value_usd, 9.0);
    }
}
