//! Modal dialog for tracking a new wallet address.
//!
//! Validates the address locally, fetches the snapshot, and hands it to the
//! parent through `on_added`. Duplicate addresses are rejected before any
//! network traffic happens.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::utils::is_valid_address;

use crate::services::api;
use crate::state::wallets::use_wallet_registry;

#[component]
pub fn AddWalletModal(
    on_close: Callback<()>,
    on_added: Callback<String>,
) -> impl IntoView {
    let registry = use_wallet_registry();

    let (address, set_address) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let submit = move || {
        let input = address.get().trim().to_string();

        if !is_valid_address(&input) {
            set_error.set(Some(
                "Enter a valid Ethereum address (0x + 40 hex characters)".to_string(),
            ));
            return;
        }
        if registry.contains(&input) {
            set_error.set(Some("This wallet is already being tracked".to_string()));
            return;
        }

        set_error.set(None);
        set_loading.set(true);

        spawn_local(async move {
            match api::fetch_wallet(&input).await {
                Ok(snapshot) => {
                    registry.add(snapshot);
                    set_loading.set(false);
                    on_added.run(input);
                    on_close.run(());
                }
                Err(err) => {
                    log::error!("wallet lookup failed: {err}");
                    set_loading.set(false);
                    set_error.set(Some(
                        "Could not load this wallet. Check the address and try again."
                            .to_string(),
                    ));
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Add Wallet"</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <label class="modal-label" for="wallet-address">
                    "Ethereum address"
                </label>
                <input
                    id="wallet-address"
                    class="modal-input"
                    type="text"
                    placeholder="0x..."
                    prop:value=move || address.get()
                    on:input=move |ev| {
                        set_address.set(event_target_value(&ev));
                        set_error.set(None);
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />

                {move || error.get().map(|msg| view! {
                    <p class="modal-error">{msg}</p>
                })}

                <div class="modal-actions">
                    <button
                        class="btn btn-secondary"
                        disabled=move || loading.get()
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || loading.get()
                        on:click=move |_| submit()
                    >
                        {move || if loading.get() { "Loading..." } else { "Add Wallet" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
