//! Reusable UI components

pub mod add_wallet_modal;
pub mod navbar;
pub mod pagination;
pub mod risk_panel;
pub mod status_bar;
pub mod token_icon;
pub mod transaction_history;
pub mod wallet_card;
pub mod wallet_details;

pub use add_wallet_modal::AddWalletModal;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use risk_panel::RiskPanel;
pub use status_bar::StatusBar;
pub use token_icon::TokenIcon;
pub use transaction_history::TransactionHistory;
pub use wallet_card::WalletCard;
pub use wallet_details::WalletDetails;
