//! Backend API clients

pub mod api;
