//! # Formatting Utilities
//!
//! Number, USD, and timestamp formatting for the dashboard views. For
//! address formatting, use [`shared::utils::format_address`] or
//! [`shared::utils::truncate_address`].

/// Format a number with comma separators (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use verifil_web::utils::format::format_grouped;
///
/// assert_eq!(format_grouped(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_grouped(100.0, 0), "100");
/// ```
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

/// USD display: "$0.00" for zero, "<$0.01" for dust, grouped thousands
/// with two decimals otherwise.
pub fn format_usd(value: f64) -> String {
    if value == 0.0 {
        return "$0.00".to_string();
    }
    if value < 0.01 {
        return "<$0.01".to_string();
    }
    format!("${}", format_grouped(value, 2))
}

/// Plain amount display: "0" for zero, "<0.01" for dust.
pub fn format_amount(value: f64, decimals: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.01 {
        return "<0.01".to_string();
    }
    format!("{:.prec$}", value, prec = decimals)
}

/// Relative-time display for a unix timestamp, given the current unix time.
pub fn format_time_ago(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;

    if diff < 60 {
        return "Just now".to_string();
    }
    if diff < 3_600 {
        return format!("{} minutes ago", diff / 60);
    }
    if diff < 86_400 {
        return format!("{} hours ago", diff / 3_600);
    }
    if diff < 2_592_000 {
        return format!("{} days ago", diff / 86_400);
    }
    format!("{} months ago", diff / 2_592_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_grouped(100.0, 2), "100.00");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(0.004), "<$0.01");
        // 199.065 sits just below the half in binary, so {:.2} rounds down.
        assert_eq!(format_usd(199.065), "$199.06");
        assert_eq!(format_usd(199.99), "$199.99");
        assert_eq!(format_usd(1234.5), "$1,234.50");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0, 4), "0");
        assert_eq!(format_amount(0.001, 4), "<0.01");
        assert_eq!(format_amount(12.5, 4), "12.5000");
    }

    #[test]
    fn test_format_time_ago() {
        let now = 1_729_180_800;
        assert_eq!(format_time_ago(now - 30, now), "Just now");
        assert_eq!(format_time_ago(now - 120, now), "2 minutes ago");
        assert_eq!(format_time_ago(now - 7_200, now), "2 hours ago");
        assert_eq!(format_time_ago(now - 172_800, now), "2 days ago");
        assert_eq!(format_time_ago(now - 5_184_000, now), "2 months ago");
    }
}
