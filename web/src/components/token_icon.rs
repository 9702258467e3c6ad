//! Token icon with graceful fallback.
//!
//! ETH gets a fixed badge. ERC-20 tokens try the Trust Wallet asset
//! repository first; when the image fails to load we fall back to a letter
//! badge so the row never shows a broken-image glyph.

use leptos::prelude::*;

const TRUSTWALLET_ASSETS: &str =
    "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/assets";

/// Trust Wallet icon URL for an ERC-20 contract. Returns `None` for the
/// pseudo-contract used by plain ETH rows.
pub fn token_icon_url(contract: &str) -> Option<String> {
    if contract.is_empty() || contract == "ETH" {
        return None;
    }
    Some(format!("{}/{}/logo.png", TRUSTWALLET_ASSETS, contract))
}

/// First character of the symbol, uppercased, for the letter badge.
pub fn badge_letter(symbol: &str) -> String {
    symbol
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

#[component]
pub fn TokenIcon(
    #[prop(into)] symbol: String,
    #[prop(into)] contract: String,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let letter = badge_letter(&symbol);

    if symbol == "ETH" {
        return view! {
            <span class="token-icon token-icon-eth">"Ξ"</span>
        }
        .into_any();
    }

    match token_icon_url(&contract) {
        Some(url) => view! {
            <Show
                when=move || !failed.get()
                fallback={
                    let letter = letter.clone();
                    move || view! {
                        <span class="token-icon token-icon-letter">{letter.clone()}</span>
                    }
                }
            >
                <img
                    class="token-icon"
                    src=url.clone()
                    alt=symbol.clone()
                    on:error=move |_| set_failed.set(true)
                />
            </Show>
        }
        .into_any(),
        None => view! {
            <span class="token-icon token-icon-letter">{letter}</span>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eth_and_empty_contracts_have_no_remote_icon() {
        assert_eq!(token_icon_url("ETH"), None);
        assert_eq!(token_icon_url(""), None);
    }

    #[test]
    fn erc20_contracts_map_to_trustwallet_assets() {
        let url = token_icon_url("0xdAC17F958D2ee523a2206206994597C13D831ec7").unwrap();
        assert!(url.starts_with("https://raw.githubusercontent.com/trustwallet/assets"));
        assert!(url.ends_with("/0xdAC17F958D2ee523a2206206994597C13D831ec7/logo.png"));
    }

    #[test]
    fn badge_letter_uppercases_and_defaults() {
        assert_eq!(badge_letter("usdc"), "U");
        assert_eq!(badge_letter("PEPE"), "P");
        assert_eq!(badge_letter(""), "?");
    }
}
