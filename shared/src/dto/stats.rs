use serde::{Deserialize, Serialize};

/// Aggregate counters returned by `GET /api/stats`. Only consumed by the
/// landing page count-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlatformStats {
    pub wallets_analyzed: u64,
    pub users_protected: u64,
    pub scams_detected: u64,
}

/// Response body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_check() {
        let healthy: HealthStatus = serde_json::from_str(
            r#"{"status": "healthy", "message": "Crypto wallet API is running"}"#,
        )
        .unwrap();
        assert!(healthy.is_healthy());

        let degraded = HealthStatus {
            status: "degraded".to_string(),
            message: String::new(),
        };
        assert!(!degraded.is_healthy());
    }
}
