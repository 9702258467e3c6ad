//! Wallet registry: the session-wide list of tracked wallets.
//!
//! One registry is created at the application root and shared through
//! context. Entries are keyed by address; insertion is idempotent (the
//! first snapshot for an address wins) and removal of an unknown address
//! is a no-op.

use leptos::prelude::*;
use shared::dto::wallet::WalletSnapshot;

/// Copyable handle over the shared wallet list.
#[derive(Clone, Copy)]
pub struct WalletRegistry {
    pub wallets: RwSignal<Vec<WalletSnapshot>>,
}

impl WalletRegistry {
    pub fn new() -> Self {
        Self {
            wallets: RwSignal::new(Vec::new()),
        }
    }

    /// Current entries, in insertion order.
    pub fn list(&self) -> Vec<WalletSnapshot> {
        self.wallets.get()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.with(|w| w.is_empty())
    }

    pub fn len(&self) -> usize {
        self.wallets.with(|w| w.len())
    }

    pub fn contains(&self, address: &str) -> bool {
        self.wallets.with(|w| w.iter().any(|e| e.address == address))
    }

    /// Look up a wallet by address.
    pub fn find(&self, address: &str) -> Option<WalletSnapshot> {
        self.wallets
            .with(|w| w.iter().find(|e| e.address == address).cloned())
    }

    /// Insert a wallet unless one with the same address already exists.
    /// The existing entry is preserved unchanged; last write does NOT win.
    pub fn add(&self, snapshot: WalletSnapshot) {
        self.wallets.update(|w| insert_unique(w, snapshot));
    }

    /// Remove the wallet with `address`, if present.
    pub fn remove(&self, address: &str) {
        self.wallets.update(|w| remove_entry(w, address));
    }

    /// Wholesale replacement of the registry contents.
    pub fn replace_all(&self, snapshots: Vec<WalletSnapshot>) {
        self.wallets.set(snapshots);
    }
}

fn insert_unique(entries: &mut Vec<WalletSnapshot>, entry: WalletSnapshot) {
    if !entries.iter().any(|e| e.address == entry.address) {
        entries.push(entry);
    }
}

fn remove_entry(entries: &mut Vec<WalletSnapshot>, address: &str) {
    entries.retain(|e| e.address != address);
}

/// Install the registry at the application root.
pub fn provide_wallet_registry() -> WalletRegistry {
    let registry = WalletRegistry::new();
    provide_context(registry);
    registry
}

/// Fetch the registry from context. Panics when called outside the owning
/// provider's scope; that is a programming error, not a recoverable state.
pub fn use_wallet_registry() -> WalletRegistry {
    expect_context::<WalletRegistry>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(address: &str, value: f64) -> WalletSnapshot {
        WalletSnapshot {
            address: address.to_string(),
            eth_balance: 0.5,
            eth_price_usd: 3500.0,
            eth_value_usd: 1750.0,
            token_holdings: Vec::new(),
            total_token_value_usd: 0.0,
            total_portfolio_value_usd: value,
            holdings_count: 1,
        }
    }

    const ADDR: &str = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1111";

    #[test]
    fn insert_is_idempotent_and_first_wins() {
        let mut entries = Vec::new();
        insert_unique(&mut entries, snapshot(ADDR, 100.0));
        insert_unique(&mut entries, snapshot(ADDR, 999.0));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].total_portfolio_value_usd, 100.0);
    }

    #[test]
    fn remove_absent_address_is_a_noop() {
        let mut entries = vec![snapshot(ADDR, 100.0)];
        remove_entry(&mut entries, "0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB2222");
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn add_then_duplicate_then_remove() {
        let mut entries = Vec::new();

        insert_unique(&mut entries, snapshot(ADDR, 100.0));
        assert_eq!(entries.len(), 1);

        // Same address with different data: registry keeps the original.
        insert_unique(&mut entries, snapshot(ADDR, 42.0));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].total_portfolio_value_usd, 100.0);

        remove_entry(&mut entries, ADDR);
        assert!(entries.is_empty());
    }

    #[test]
    fn distinct_addresses_accumulate_in_order() {
        let mut entries = Vec::new();
        insert_unique(&mut entries, snapshot(ADDR, 1.0));
        insert_unique(
            &mut entries,
            snapshot("0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB2222", 2.0),
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].address, ADDR);
    }
}
