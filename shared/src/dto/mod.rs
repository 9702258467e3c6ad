//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures returned by the read-oriented
//! REST API the frontend consumes.
//!
//! ## Module Organization
//!
//! - [`wallet`] - Wallet snapshot and per-token holdings
//! - [`transactions`] - Transaction history pages and entries
//! - [`risk`] - Risk analysis reports and risk levels
//! - [`stats`] - Aggregate platform stats and the health check
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/wallet/0x742d.../risk-analysis
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "address": "0x742d...",
//!   "risk_score": 25,
//!   "risk_level": "LOW",
//!   "tokens_analyzed": 6,
//!   "risky_tokens_count": 1,
//!   "risky_tokens": [...],
//!   "recommendations": [...]
//! }
//! ```

pub mod risk;
pub mod stats;
pub mod transactions;
pub mod wallet;

pub use risk::*;
pub use stats::*;
pub use transactions::*;
pub use wallet::*;
