//! Page components, one per route

pub mod landing;
pub mod portfolio;
pub mod transactions;
pub mod wallets;

pub use landing::LandingPage;
pub use portfolio::PortfolioPage;
pub use transactions::TransactionsPage;
pub use wallets::WalletsPage;
