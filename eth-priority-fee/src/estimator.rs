use crate::{
    error::ServiceError,
    fees::{calculate_priority_fee, hex_to_int},
    models::records::PriorityFee,
    page::{is_transaction_page, parse_page, render_panel, transaction_hash},
    rpc::FeeDataSource,
};
use alloy_primitives::U256;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Priority fee service sequencing the node lookups for one transaction
///
/// The lookups run strictly one after another: transaction, then the block it
/// was included in, then its receipt. A lookup without a result ends the
/// pipeline with nothing to show.
#[derive(Clone)]
pub struct PriorityFeeEstimator {
    /// Node the records are fetched from
    pub source: Arc<dyn FeeDataSource>,
}

impl PriorityFeeEstimator {
    /// Creates a new estimator reading records from the given source
    pub fn new(source: Arc<dyn FeeDataSource>) -> Self {
        Self { source }
    }

    /// Priority fee paid by a transaction
    ///
    /// # Arguments
    ///
    /// * `tx_hash` - Hash of the transaction to look up
    ///
    /// # Returns
    ///
    /// * `Ok(Some(fee))` - all three records were found
    /// * `Ok(None)` - the node had no result for one of the lookups
    /// * `Err(_)` - the node could not be reached or sent something unreadable
    #[instrument(skip(self), err)]
    pub async fn priority_fee(&self, tx_hash: &str) -> Result<Option<PriorityFee>, ServiceError> {
        let Some(tx) = self.source.fetch_transaction(tx_hash).await?.result else {
            debug!("No transaction found");
            return Ok(None);
        };

        let Some(block) = self.source.fetch_block(tx.block_number.clone()).await?.result else {
            debug!(block_number = ?tx.block_number, "No block found");
            return Ok(None);
        };

        let Some(receipt) = self.source.fetch_receipt(tx_hash).await?.result else {
            debug!("No receipt found");
            return Ok(None);
        };

        let gwei = calculate_priority_fee(
            tx.max_priority_fee_per_gas.as_deref(),
            tx.max_fee_per_gas.as_deref(),
            block.base_fee_per_gas.as_deref(),
            receipt.gas_used.as_deref(),
        );
        debug!(gwei, "Priority fee computed");

        Ok(Some(PriorityFee::from_gwei(gwei)))
    }

    /// Panel for an explorer page, or `None` when the page gets no panel
    ///
    /// This is the top-level handler: failures are logged here and never
    /// reach the caller, which then leaves the page untouched.
    ///
    /// # Arguments
    ///
    /// * `page_url` - Full address of the explorer page
    #[instrument(skip(self))]
    pub async fn augment_page(&self, page_url: &str) -> Option<String> {
        match self.try_augment_page(page_url).await {
            Ok(panel) => panel,
            Err(e) => {
                error!("Error while computing the priority fee: {}", e);
                None
            }
        }
    }

    async fn try_augment_page(&self, page_url: &str) -> Result<Option<String>, ServiceError> {
        let page = parse_page(page_url)?;
        if !is_transaction_page(&page) {
            debug!("Not a transaction page");
            return Ok(None);
        }

        let Some(tx_hash) = transaction_hash(&page) else {
            return Ok(None);
        };

        let panel = self.priority_fee(tx_hash).await?.map(|fee| {
            info!(tx_hash, %fee, "Rendering priority fee panel");
            render_panel(&fee)
        });
        Ok(panel)
    }

    /// Fetch the latest block number known to the node
    ///
    /// Used by the health check to confirm the node answers.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(number))` - the decoded block number
    /// * `Ok(None)` - the node answered without a result
    /// * `Err(_)` - the node could not be reached or sent something unreadable
    pub async fn latest_block_number(&self) -> Result<Option<U256>, ServiceError> {
        let response = self.source.fetch_block_number().await?;
        Ok(response.result.as_deref().map(|hex| hex_to_int(Some(hex))))
    }
}
