//! Risk analysis panel for one wallet.
//!
//! Fetches the risk report whenever the address changes. Responses are
//! tagged with a request generation so a slow answer for a previously
//! selected wallet can never overwrite the current one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::risk::{RiskLevel, RiskReport};
use shared::utils::truncate_address;

use crate::services::api;

/// CSS class for a risk level. Total over the closed enum: adding a level
/// without a color is a compile error.
pub fn risk_color_class(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Safe => "risk-safe",
        RiskLevel::Low => "risk-low",
        RiskLevel::Medium => "risk-medium",
        RiskLevel::High => "risk-high",
        RiskLevel::Critical => "risk-critical",
    }
}

#[component]
pub fn RiskPanel(#[prop(into)] address: Signal<String>) -> impl IntoView {
    let (report, set_report) = signal(None::<RiskReport>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (reload, set_reload) = signal(0u32);

    // Monotonic request generation; only the newest in-flight request may
    // publish its result.
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let addr = address.get();
        reload.track();
        if addr.is_empty() {
            return;
        }

        let this_gen = generation.with_value(|g| g + 1);
        generation.set_value(this_gen);

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_risk_report(&addr).await;
            // A newer request superseded this one, or the panel was torn
            // down while the fetch was in flight.
            if generation.try_get_value() != Some(this_gen) {
                return;
            }
            match result {
                Ok(r) => {
                    set_report.set(Some(r));
                    set_error.set(None);
                }
                Err(err) => {
                    log::error!("risk analysis failed for {addr}: {err}");
                    set_report.set(None);
                    set_error.set(Some("Risk analysis unavailable".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="risk-panel">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="panel-loading">
                            <div class="spinner"></div>
                            <p>"Analyzing token risk..."</p>
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
                match report.get() {
                    Some(r) => view! { <RiskReportView report=r/> }.into_any(),
                    None => ().into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn RiskReportView(report: RiskReport) -> impl IntoView {
    let level = report.risk_level;
    let healthy = level == RiskLevel::Safe && report.risky_tokens.is_empty();

    view! {
        <div class="risk-summary">
            <div class=format!("risk-badge {}", risk_color_class(level))>
                {level.label()}
            </div>
            <div class="risk-score">
                <span class="risk-score-value">{report.risk_score}</span>
                <span class="risk-score-max">"/100"</span>
            </div>
            <div class="risk-counts">
                {format!(
                    "{} of {} tokens flagged",
                    report.risky_tokens_count, report.tokens_analyzed
                )}
            </div>
        </div>

        {healthy.then(|| view! {
            <p class="risk-healthy">
                "No risky tokens detected in this wallet."
            </p>
        })}

        {(!report.risky_tokens.is_empty()).then(|| view! {
            <div class="risky-tokens">
                <h4>"Flagged Tokens"</h4>
                {report.risky_tokens.iter().map(|token| view! {
                    <div class="risky-token">
                        <div class="risky-token-header">
                            <span class="risky-token-name">
                                {format!("{} ({})", token.name, token.symbol)}
                            </span>
                            <span class="risky-token-score">
                                {format!("score {}", token.risk_score)}
                            </span>
                        </div>
                        <div class="risky-token-contract" title=token.contract.clone()>
                            {truncate_address(&token.contract)}
                        </div>
                        <ul class="risky-token-flags">
                            {token.risk_flags.iter().map(|flag| view! {
                                <li>{flag.clone()}</li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        })}

        {(!report.recommendations.is_empty()).then(|| view! {
            <div class="risk-recommendations">
                <h4>"Recommendations"</h4>
                <ul>
                    {report.recommendations.iter().map(|rec| view! {
                        <li>{rec.clone()}</li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_responses_after_teardown_are_dropped() {
        let owner = Owner::new();
        owner.set();
        let generation = StoredValue::new(7u64);
        assert_eq!(generation.try_get_value(), Some(7));

        // Dispose the owning scope as an unmount would. A response landing
        // afterwards must see a mismatch instead of panicking.
        drop(owner);
        assert_eq!(generation.try_get_value(), None);
    }

    #[test]
    fn every_level_has_a_distinct_color_class() {
        let classes = [
            risk_color_class(RiskLevel::Safe),
            risk_color_class(RiskLevel::Low),
            risk_color_class(RiskLevel::Medium),
            risk_color_class(RiskLevel::High),
            risk_color_class(RiskLevel::Critical),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
