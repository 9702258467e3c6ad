//! Top navigation bar shown on every route.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href="/" attr:class="navbar-brand">
                    <span class="brand-mark">"🛡"</span>
                    <span class="brand-name">"VeriFil"</span>
                </A>
                <div class="navbar-links">
                    <A href="/portfolio" attr:class="navbar-link">"Portfolio"</A>
                    <A href="/wallets" attr:class="navbar-link">"Wallets"</A>
                    <A href="/transactions" attr:class="navbar-link">"Transactions"</A>
                </div>
            </div>
        </nav>
    }
}
