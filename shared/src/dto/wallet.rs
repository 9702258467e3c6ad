use serde::{Deserialize, Serialize};

/// Wallet snapshot returned by `GET /api/wallet/{address}`.
///
/// Holdings arrive sorted by USD value (highest first); `holdings_count`
/// includes the native ETH position, so it is `token_holdings.len() + 1`
/// whenever the wallet holds any ETH.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub address: String,
    pub eth_balance: f64,
    pub eth_price_usd: f64,
    pub eth_value_usd: f64,
    pub token_holdings: Vec<TokenHolding>,
    pub total_token_value_usd: f64,
    pub total_portfolio_value_usd: f64,
    pub holdings_count: u32,
}

/// A single ERC-20 position inside a wallet snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHolding {
    pub name: String,
    pub symbol: String,
    pub balance: f64,
    pub contract: String,
    pub price_usd: f64,
    pub value_usd: f64,
}
