use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::{
    error::ServiceError,
    models::{
        jsonrpc::{JsonRpcRequest, JsonRpcResponse},
        records::{BlockRecord, ReceiptRecord, TransactionRecord},
    },
};

/// The Ethereum node every lookup goes to
pub const ENDPOINT: &str = "https://eth.blockrazor.xyz";

/// Source of the three records the priority fee is computed from
///
/// Every method returns the decoded node envelope as-is; an envelope without
/// a `result` is a normal answer, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeeDataSource: Send + Sync {
    /// Look up a transaction with `eth_getTransactionByHash`
    ///
    /// # Arguments
    ///
    /// * `tx_hash` - Transaction hash, passed to the node as the sole parameter
    ///
    /// # Returns
    ///
    /// * `Result<JsonRpcResponse<TransactionRecord>, ServiceError>` - The node's
    ///   envelope, with no `result` when the hash is unknown to the node
    async fn fetch_transaction(
        &self,
        tx_hash: &str,
    ) -> Result<JsonRpcResponse<TransactionRecord>, ServiceError>;

    /// Look up a block header with `eth_getBlockByNumber`
    ///
    /// Full transaction objects are not requested.
    ///
    /// # Arguments
    ///
    /// * `block_number` - Hex block number taken from the transaction; `None`
    ///   is sent as JSON `null`
    ///
    /// # Returns
    ///
    /// * `Result<JsonRpcResponse<BlockRecord>, ServiceError>` - The node's envelope
    async fn fetch_block(
        &self,
        block_number: Option<String>,
    ) -> Result<JsonRpcResponse<BlockRecord>, ServiceError>;

    /// Look up a receipt with `eth_getTransactionReceipt`
    ///
    /// # Arguments
    ///
    /// * `tx_hash` - Transaction hash, passed to the node as the sole parameter
    ///
    /// # Returns
    ///
    /// * `Result<JsonRpcResponse<ReceiptRecord>, ServiceError>` - The node's
    ///   envelope, with no `result` for unmined transactions
    async fn fetch_receipt(
        &self,
        tx_hash: &str,
    ) -> Result<JsonRpcResponse<ReceiptRecord>, ServiceError>;

    /// Ask the node for its latest block number with `eth_blockNumber`
    ///
    /// # Returns
    ///
    /// * `Result<JsonRpcResponse<String>, ServiceError>` - The node's envelope
    ///   carrying the hex block number
    async fn fetch_block_number(&self) -> Result<JsonRpcResponse<String>, ServiceError>;
}

/// JSON-RPC client for the Ethereum node
///
/// One unary POST per call, request id fixed at 1, no retries and no timeout.
/// The HTTP status is not inspected: whatever JSON body comes back is decoded.
#[derive(Clone, Debug)]
pub struct EthereumClient {
    http: Client,
    endpoint: Url,
}

impl EthereumClient {
    /// Create a client for the fixed [`ENDPOINT`]
    ///
    /// No request is sent here; the first lookup opens the connection.
    ///
    /// # Returns
    ///
    /// * `Result<Self, ServiceError>` - New client instance or a configuration error
    pub fn new() -> Result<Self, ServiceError> {
        Self::with_endpoint(ENDPOINT)
    }

    /// Create a client for another node, used to point tests at a local mock
    ///
    /// # Arguments
    ///
    /// * `endpoint` - URL of the JSON-RPC endpoint
    ///
    /// # Returns
    ///
    /// * `Result<Self, ServiceError>` - New client instance, or
    ///   `ServiceError::Configuration` when the URL does not parse
    pub fn with_endpoint(endpoint: &str) -> Result<Self, ServiceError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ServiceError::Configuration(format!("Bad URL {endpoint}: {e}")))?;
        let http = Client::builder()
            .build()
            .map_err(|e| ServiceError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self { http, endpoint })
    }

    /// URL every request of this client is posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one JSON-RPC request and decode whatever envelope comes back
    async fn call<P, R>(&self, method: &str, params: P) -> Result<JsonRpcResponse<R>, ServiceError>
    where
        P: Serialize + Send,
        R: DeserializeOwned + Send,
    {
        let request = JsonRpcRequest::new(method, params);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::RpcConnection(format!("{method}: {e}")))?;
        debug!(method, status = %response.status(), "node answered");

        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::RpcConnection(format!("{method}: {e}")))?;

        let envelope: JsonRpcResponse<R> = serde_json::from_slice(&body)
            .map_err(|e| ServiceError::InvalidResponse(format!("{method}: {e}")))?;

        if let Some(error) = &envelope.error {
            debug!(method, code = error.code, message = %error.message, "node returned an error object");
        }
        Ok(envelope)
    }
}

#[async_trait]
impl FeeDataSource for EthereumClient {
    #[instrument(skip(self))]
    async fn fetch_transaction(
        &self,
        tx_hash: &str,
    ) -> Result<JsonRpcResponse<TransactionRecord>, ServiceError> {
        self.call("eth_getTransactionByHash", (tx_hash,)).await
    }

    #[instrument(skip(self))]
    async fn fetch_block(
        &self,
        block_number: Option<String>,
    ) -> Result<JsonRpcResponse<BlockRecord>, ServiceError> {
        self.call("eth_getBlockByNumber", (block_number, false)).await
    }

    #[instrument(skip(self))]
    async fn fetch_receipt(
        &self,
        tx_hash: &str,
    ) -> Result<JsonRpcResponse<ReceiptRecord>, ServiceError> {
        self.call("eth_getTransactionReceipt", (tx_hash,)).await
    }

    #[instrument(skip(self))]
    async fn fetch_block_number(&self) -> Result<JsonRpcResponse<String>, ServiceError> {
        self.call("eth_blockNumber", serde_json::json!([])).await
    }
}
