use serde::{Deserialize, Serialize};

/// Risk level assigned by the backend analyzer.
///
/// Closed set: every consumer matches exhaustively on these five variants so
/// a new level cannot silently fall through to a default at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Safe,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Wire/display label, matching the uppercase JSON encoding.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// A token the analyzer flagged, with the reasons it was flagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskyToken {
    pub name: String,
    pub symbol: String,
    pub contract: String,
    pub balance: f64,
    pub risk_flags: Vec<String>,
    pub risk_score: u8,
}

/// Response body of `GET /api/wallet/{address}/risk-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub address: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub tokens_analyzed: u32,
    pub risky_tokens_count: u32,
    pub risky_tokens: Vec<RiskyToken>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_uses_uppercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"CRITICAL\""
        );
        let parsed: RiskLevel = serde_json::from_str("\"SAFE\"").unwrap();
        assert_eq!(parsed, RiskLevel::Safe);
    }

    #[test]
    fn labels_match_wire_encoding() {
        for level in [
            RiskLevel::Safe,
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ] {
            let wire = serde_json::to_string(&level).unwrap();
            assert_eq!(wire, format!("\"{}\"", level.label()));
        }
    }

    #[test]
    fn report_deserializes() {
        let json = r#"{
            "address": "0x4aa0dd4aa0dd4aa0dd4aa0dd4aa0dd4aa0dd4aa0",
            "risk_score": 25,
            "risk_level": "LOW",
            "tokens_analyzed": 6,
            "risky_tokens_count": 1,
            "risky_tokens": [{
                "name": "Suspicious Token",
                "symbol": "SUSP",
                "contract": "0x1234567890abcdef1234567890abcdef12345678",
                "balance": 1000.0,
                "risk_flags": ["Very new token (only 2 days old)"],
                "risk_score": 45
            }],
            "recommendations": ["Review the SUSP token"]
        }"#;
        let report: RiskReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.risky_tokens.len(), 1);
        assert_eq!(report.risky_tokens[0].risk_flags.len(), 1);
    }
}
