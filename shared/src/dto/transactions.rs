use serde::{Deserialize, Serialize};

/// Direction of a transaction relative to the queried wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxDirection {
    Send,
    Receive,
}

/// Server-side transaction filter accepted by the `type` query parameter of
/// `GET /api/wallet/{address}/transactions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxFilter {
    #[default]
    All,
    Eth,
    Tokens,
}

impl TxFilter {
    /// Value sent on the wire as the `type` query parameter.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            TxFilter::All => "all",
            TxFilter::Eth => "eth",
            TxFilter::Tokens => "tokens",
        }
    }
}

/// One transaction entry. ETH transfers carry `value_eth`; ERC-20 transfers
/// carry `value` plus the token metadata fields instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    #[serde(rename = "type")]
    pub direction: TxDirection,
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_eth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_usd: Option<f64>,
    pub timestamp: i64,
    pub block_number: u64,
    pub gas_used: u64,
    pub gas_price: f64,
    pub is_error: bool,
    pub asset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

impl Transaction {
    /// True when the entry is a plain ETH transfer rather than a token one.
    pub fn is_eth(&self) -> bool {
        self.asset == "ETH"
    }
}

/// Response body of `GET /api/wallet/{address}/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    pub address: String,
    pub transactions: Vec<Transaction>,
    pub total_count: u32,
    pub sent_count: u32,
    pub received_count: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&TxDirection::Send).unwrap(),
            "\"send\""
        );
        let parsed: TxDirection = serde_json::from_str("\"receive\"").unwrap();
        assert_eq!(parsed, TxDirection::Receive);
    }

    #[test]
    fn transaction_roundtrips_with_type_field() {
        let json = r#"{
            "hash": "0x1a2b3c",
            "type": "receive",
            "from": "0x8ba1f109551bD432803012645Ac136ddd64DBA72",
            "to": "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
            "value_eth": 0.1,
            "timestamp": 1729180800,
            "block_number": 18500000,
            "gas_used": 21000,
            "gas_price": 20.0,
            "is_error": false,
            "asset": "ETH"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.direction, TxDirection::Receive);
        assert!(tx.is_eth());
        assert_eq!(tx.value_eth, Some(0.1));
        assert_eq!(tx.value, None);

        let back = serde_json::to_string(&tx).unwrap();
        assert!(back.contains("\"type\":\"receive\""));
        assert!(!back.contains("token_symbol"));
    }

    #[test]
    fn filter_query_values() {
        assert_eq!(TxFilter::All.as_query_value(), "all");
        assert_eq!(TxFilter::Eth.as_query_value(), "eth");
        assert_eq!(TxFilter::Tokens.as_query_value(), "tokens");
    }
}
