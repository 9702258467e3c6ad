//! Application shell: router, shared wallet registry, and the 404 fallback.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{LandingPage, PortfolioPage, TransactionsPage, WalletsPage};
use crate::state::wallets::provide_wallet_registry;

#[component]
pub fn App() -> impl IntoView {
    // One registry per application root; every page reads it from context.
    provide_wallet_registry();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/portfolio") view=PortfolioPage/>
                    <Route path=path!("/wallets") view=WalletsPage/>
                    <Route path=path!("/transactions") view=TransactionsPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
