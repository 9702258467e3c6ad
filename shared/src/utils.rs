//! # Shared Utility Functions
//!
//! Address helpers used across the web frontend:
//! - [`format_address`] - Format an address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with the display defaults
//! - [`is_valid_address`] - Validate the 42-character `0x`-prefixed address shape
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{truncate_address, is_valid_address};
//!
//! let address = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";
//! assert!(is_valid_address(address));
//! assert_eq!(truncate_address(address), "0x742d...d8b6");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";
/// assert_eq!(format_address(addr, 6, 4), "0x742d...d8b6");
/// assert_eq!(format_address(addr, 8, 6), "0x742d35...C4b4d8b6");
/// assert_eq!(format_address("short", 6, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against lengths exceeding the address length to prevent panics;
    // hex addresses are ASCII-only so byte indexing is safe below.
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the display defaults: 6-character prefix,
/// 4-character suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";
/// assert_eq!(truncate_address(addr), "0x742d...d8b6");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Check the Ethereum address shape the backend accepts: a `0x` prefix and a
/// total length of 42 characters. This is the only validation the frontend
/// performs; checksums and hex content are the backend's concern.
pub fn is_valid_address(address: &str) -> bool {
    address.starts_with("0x") && address.len() == 42
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 6, 4), "0x742d...d8b6");
        assert_eq!(format_address(ADDR, 4, 4), "0x74...d8b6");
        assert_eq!(format_address(ADDR, 2, 2), "0x...b6");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 6, 4), "short");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "0x742d...d8b6");
    }

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address(ADDR));
        assert!(!is_valid_address("0x742d35"));
        assert!(!is_valid_address("742d35Cc6634C0532925a3b8D4C9db96C4b4d8b600"));
        assert!(!is_valid_address(""));
    }
}
