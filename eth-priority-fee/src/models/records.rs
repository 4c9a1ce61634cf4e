use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fees::WEI_PER_GWEI;

/// Fee fields of an `eth_getTransactionByHash` result
///
/// All fields stay hex-encoded as the node sent them. Legacy transactions
/// have no EIP-1559 fields and pending ones have no block number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default, rename = "maxPriorityFeePerGas")]
    pub max_priority_fee_per_gas: Option<String>,

    #[serde(default, rename = "maxFeePerGas")]
    pub max_fee_per_gas: Option<String>,

    #[serde(default, rename = "blockNumber")]
    pub block_number: Option<String>,
}

/// Header field of an `eth_getBlockByNumber` result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Absent for blocks before the London fork
    #[serde(default, rename = "baseFeePerGas")]
    pub base_fee_per_gas: Option<String>,
}

/// Field of an `eth_getTransactionReceipt` result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    #[serde(default, rename = "gasUsed")]
    pub gas_used: Option<String>,
}

/// Priority fee paid by a transaction, in gwei
///
/// The value is the effective tip per gas (in gwei) times the raw gas used.
/// The "ETH" figure is that value divided by 1e9.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityFee {
    gwei: f64,
}

impl PriorityFee {
    pub fn from_gwei(gwei: f64) -> Self {
        Self { gwei }
    }

    pub fn gwei(&self) -> f64 {
        self.gwei
    }

    pub fn eth(&self) -> f64 {
        self.gwei / WEI_PER_GWEI
    }

    /// Gwei figure with 9 decimal places
    pub fn gwei_display(&self) -> String {
        format!("{:.9}", self.gwei)
    }

    /// ETH figure with 18 decimal places
    pub fn eth_display(&self) -> String {
        format!("{:.18}", self.eth())
    }
}

impl fmt::Display for PriorityFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Priority Fee: {} Gwei ({} ETH)",
            self.gwei_display(),
            self.eth_display()
        )
    }
}

/// Result object of the `eth_getTransactionPriorityFee` method served by this service
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityFeeReport {
    pub transaction_hash: String,
    pub priority_fee_gwei: String,
    pub priority_fee_eth: String,
    pub label: String,
}

impl PriorityFeeReport {
    pub fn new(transaction_hash: &str, fee: &PriorityFee) -> Self {
        Self {
            transaction_hash: transaction_hash.to_string(),
            priority_fee_gwei: fee.gwei_display(),
            priority_fee_eth: fee.eth_display(),
            label: fee.to_string(),
        }
    }
}
