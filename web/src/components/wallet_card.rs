//! Sidebar card for one tracked wallet.

use leptos::prelude::*;
use shared::dto::wallet::WalletSnapshot;
use shared::utils::truncate_address;

use crate::utils::format::format_usd;

#[component]
pub fn WalletCard(
    wallet: WalletSnapshot,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<String>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let address = wallet.address.clone();
    let select_address = address.clone();
    let remove_address = address.clone();

    view! {
        <div
            class="wallet-card"
            class:wallet-card-selected=move || selected.get()
            on:click=move |_| on_select.run(select_address.clone())
        >
            <div class="wallet-card-header">
                <span class="wallet-card-address" title=address.clone()>
                    {truncate_address(&address)}
                </span>
                <button
                    class="wallet-card-remove"
                    title="Remove wallet"
                    on:click=move |ev| {
                        // Keep the click from also selecting the card.
                        ev.stop_propagation();
                        let confirmed = web_sys::window()
                            .map(|w| {
                                w.confirm_with_message(&format!(
                                    "Stop tracking {}?",
                                    truncate_address(&remove_address)
                                ))
                                .unwrap_or(false)
                            })
                            .unwrap_or(false);
                        if confirmed {
                            on_remove.run(remove_address.clone());
                        }
                    }
                >
                    "✕"
                </button>
            </div>
            <div class="wallet-card-value">
                {format_usd(wallet.total_portfolio_value_usd)}
            </div>
            <div class="wallet-card-meta">
                <span>{format!("{:.4} ETH", wallet.eth_balance)}</span>
                <span>{format!("{} tokens", wallet.holdings_count)}</span>
            </div>
        </div>
    }
}
