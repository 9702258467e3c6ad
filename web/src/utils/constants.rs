//! Application constants

pub const API_BASE: &str = "http://localhost:5000";

// Pagination
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 25, 50];

// Transaction fetch window (server caps at 100)
pub const TX_FETCH_LIMIT: usize = 50;

// Landing page count-up: one step toward the target every tick
pub const COUNT_UP_TICK_MS: u32 = 20;

// Fallback counters shown when /api/stats is unreachable
pub const FALLBACK_WALLETS_ANALYZED: u64 = 10_000;
pub const FALLBACK_USERS_PROTECTED: u64 = 1_000;
pub const FALLBACK_SCAMS_DETECTED: u64 = 1_300;

// Auto-refresh intervals (milliseconds, 0 = manual only)
pub const REFRESH_INTERVALS: &[(u32, &str)] = &[
    (30_000, "30 seconds"),
    (60_000, "1 minute"),
    (300_000, "5 minutes"),
    (600_000, "10 minutes"),
    (0, "Manual only"),
];

pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 60_000;

pub const ETHERSCAN_TX_BASE: &str = "https://etherscan.io/tx";
