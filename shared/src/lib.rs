//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the VeriFil web frontend and the
//! wallet-analytics backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::wallet`]**: Wallet snapshots and token holdings
//!   - **[`dto::transactions`]**: Transaction history DTOs
//!   - **[`dto::risk`]**: Risk analysis DTOs
//!   - **[`dto::stats`]**: Platform stats and health check DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::is_valid_address`]**: Validate the Ethereum address shape
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Enums rename on the wire: transaction direction is lowercase
//!   (`"send"`/`"receive"`), risk levels are uppercase (`"SAFE"`, ..., `"CRITICAL"`)
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::wallet::WalletSnapshot;
//! use shared::utils::truncate_address;
//!
//! let json = r#"{
//!     "address": "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
//!     "eth_balance": 0.5,
//!     "eth_price_usd": 3500.0,
//!     "eth_value_usd": 1750.0,
//!     "token_holdings": [],
//!     "total_token_value_usd": 0.0,
//!     "total_portfolio_value_usd": 1750.0,
//!     "holdings_count": 1
//! }"#;
//!
//! let snapshot: WalletSnapshot = serde_json::from_str(json).unwrap();
//! assert_eq!(truncate_address(&snapshot.address), "0x742d...d8b6");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
