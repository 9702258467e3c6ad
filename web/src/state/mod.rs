//! Shared application state

pub mod wallets;
