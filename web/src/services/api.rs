//! HTTP client for the wallet analytics API.
//!
//! Thin read-only wrappers over `gloo_net`. Every endpoint returns an
//! [`ApiError`] on failure; callers turn that into a coarse user-facing
//! message with a retry affordance and log the detail.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use shared::dto::stats::{HealthStatus, PlatformStats};
use shared::dto::risk::RiskReport;
use shared::dto::transactions::{TransactionPage, TxFilter};
use shared::dto::wallet::WalletSnapshot;

use crate::utils::constants::API_BASE;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /api/wallet/{address}` - balances, holdings, and USD totals.
pub async fn fetch_wallet(address: &str) -> ApiResult<WalletSnapshot> {
    let url = format!("{}/api/wallet/{}", API_BASE, address);
    get_json(&url).await
}

/// `GET /api/wallet/{address}/transactions?limit&type` - recent activity.
pub async fn fetch_transactions(
    address: &str,
    limit: usize,
    filter: TxFilter,
) -> ApiResult<TransactionPage> {
    let url = format!(
        "{}/api/wallet/{}/transactions?limit={}&type={}",
        API_BASE,
        address,
        limit,
        filter.as_query_value()
    );
    get_json(&url).await
}

/// `GET /api/wallet/{address}/risk-analysis` - token risk report.
pub async fn fetch_risk_report(address: &str) -> ApiResult<RiskReport> {
    let url = format!("{}/api/wallet/{}/risk-analysis", API_BASE, address);
    get_json(&url).await
}

/// `GET /api/health` - backend liveness probe.
pub async fn fetch_health() -> ApiResult<HealthStatus> {
    let url = format!("{}/api/health", API_BASE);
    get_json(&url).await
}

/// `GET /api/stats` - aggregate counters for the landing page.
pub async fn fetch_stats() -> ApiResult<PlatformStats> {
    let url = format!("{}/api/stats", API_BASE);
    get_json(&url).await
}
