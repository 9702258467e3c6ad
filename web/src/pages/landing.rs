//! Marketing landing page.
//!
//! The headline counters animate from zero toward the live platform stats.
//! When `/api/stats` is unreachable we animate toward canned numbers instead
//! of showing an error; the landing page has no error state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::services::api;
use crate::utils::constants::{
    COUNT_UP_TICK_MS, FALLBACK_SCAMS_DETECTED, FALLBACK_USERS_PROTECTED,
    FALLBACK_WALLETS_ANALYZED,
};
use crate::utils::format::format_grouped;
use crate::utils::ticker::{count_up_step, Tick, Ticker};

#[component]
pub fn LandingPage() -> impl IntoView {
    let (wallets_analyzed, set_wallets_analyzed) = signal(0u64);
    let (users_protected, set_users_protected) = signal(0u64);
    let (scams_detected, set_scams_detected) = signal(0u64);

    let ticker = StoredValue::new_local(None::<Ticker>);

    Effect::new(move |_| {
        spawn_local(async move {
            let (w, u, s) = match api::fetch_stats().await {
                Ok(stats) => (
                    stats.wallets_analyzed,
                    stats.users_protected,
                    stats.scams_detected,
                ),
                Err(err) => {
                    log::warn!("stats unavailable, using fallback counters: {err}");
                    (
                        FALLBACK_WALLETS_ANALYZED,
                        FALLBACK_USERS_PROTECTED,
                        FALLBACK_SCAMS_DETECTED,
                    )
                }
            };

            let handle = Ticker::start(COUNT_UP_TICK_MS, move || {
                let mut done = true;
                set_wallets_analyzed.update(|v| {
                    *v = count_up_step(*v, w);
                    done &= *v == w;
                });
                set_users_protected.update(|v| {
                    *v = count_up_step(*v, u);
                    done &= *v == u;
                });
                set_scams_detected.update(|v| {
                    *v = count_up_step(*v, s);
                    done &= *v == s;
                });
                if done { Tick::Stop } else { Tick::Continue }
            });
            ticker.set_value(Some(handle));
        });
    });

    on_cleanup(move || {
        ticker.update_value(|t| *t = None);
    });

    view! {
        <div class="landing">
            <section class="hero">
                <h1>"Know what's really in your wallet"</h1>
                <p class="hero-sub">
                    "VeriFil scans your Ethereum wallets for scam tokens, tracks your \
                     portfolio value, and keeps your transaction history in one place."
                </p>
                <A href="/wallets" attr:class="btn btn-primary btn-lg">
                    "Start Tracking"
                </A>
            </section>

            <section class="stats-strip">
                <div class="stat-block">
                    <span class="stat-number">
                        {move || format_grouped(wallets_analyzed.get() as f64, 0)}
                    </span>
                    <span class="stat-caption">"Wallets analyzed"</span>
                </div>
                <div class="stat-block">
                    <span class="stat-number">
                        {move || format_grouped(users_protected.get() as f64, 0)}
                    </span>
                    <span class="stat-caption">"Users protected"</span>
                </div>
                <div class="stat-block">
                    <span class="stat-number">
                        {move || format_grouped(scams_detected.get() as f64, 0)}
                    </span>
                    <span class="stat-caption">"Scam tokens detected"</span>
                </div>
            </section>

            <section class="features">
                <div class="feature">
                    <h3>"Token risk scanning"</h3>
                    <p>"Every holding is scored against honeypot, liquidity, and age \
                        signals so suspicious tokens stand out immediately."</p>
                </div>
                <div class="feature">
                    <h3>"Portfolio overview"</h3>
                    <p>"ETH and token balances across all your wallets, valued in USD \
                        and refreshed on your schedule."</p>
                </div>
                <div class="feature">
                    <h3>"Transaction browser"</h3>
                    <p>"Search and filter your recent activity without leaving the \
                        dashboard, with one-click Etherscan links."</p>
                </div>
                <div class="feature">
                    <h3>"Read-only by design"</h3>
                    <p>"VeriFil only needs a public address. No keys, no signatures, \
                        no approvals."</p>
                </div>
            </section>

            <section class="cta">
                <h2>"Add your first wallet in seconds"</h2>
                <A href="/wallets" attr:class="btn btn-primary">
                    "Open Dashboard"
                </A>
            </section>

            <footer class="footer">
                <span>"VeriFil"</span>
                <span class="footer-note">"Analytics only. Not financial advice."</span>
            </footer>
        </div>
    }
}
