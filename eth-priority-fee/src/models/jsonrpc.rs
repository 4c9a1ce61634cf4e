use serde::{Deserialize, Serialize};

/// JSON-RPC protocol version used in every request and response
pub const JSONRPC_VERSION: &str = "2.0";

/// Identifier attached to every outgoing node request
pub const REQUEST_ID: u64 = 1;

/// JSON-RPC 2.0 request structure
///
/// Serialized for calls to the node, deserialized for calls made to this service.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcRequest<T> {
    /// JSON-RPC protocol version (should be "2.0")
    pub jsonrpc: String,

    /// Method name to call
    pub method: String,

    /// Method parameters
    pub params: T,

    /// Request identifier
    pub id: serde_json::Value,
}

impl<T> JsonRpcRequest<T> {
    /// Build a node request with the fixed request id
    pub fn new(method: &str, params: T) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
            id: serde_json::Value::from(REQUEST_ID),
        }
    }
}

/// JSON-RPC 2.0 response envelope as returned by the node
///
/// `result` is `None` both when the node answers `null` (unknown transaction,
/// block or receipt) and when it answers with an `error` object instead.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: Option<String>,

    #[serde(default)]
    pub id: Option<serde_json::Value>,

    pub result: Option<T>,

    #[serde(default)]
    pub error: Option<JsonRpcErrorDetail>,
}

impl<T> JsonRpcResponse<T> {
    /// Envelope carrying a result, mostly useful when faking a node
    pub fn with_result(result: T) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            id: Some(serde_json::Value::from(REQUEST_ID)),
            result: Some(result),
            error: None,
        }
    }

    /// Envelope with a `null` result
    pub fn empty() -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            id: Some(serde_json::Value::from(REQUEST_ID)),
            result: None,
            error: None,
        }
    }
}

/// JSON-RPC 2.0 successful response
#[derive(Debug, Serialize)]
pub struct JsonRpcSuccess<T> {
    /// JSON-RPC protocol version (always "2.0")
    pub jsonrpc: String,

    /// Request identifier (matching the request)
    pub id: serde_json::Value,

    /// Method result
    pub result: T,
}

/// JSON-RPC 2.0 error response
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// JSON-RPC protocol version (always "2.0")
    pub jsonrpc: String,

    /// Request identifier (matching the request)
    pub id: serde_json::Value,

    /// Error details
    pub error: JsonRpcErrorDetail,
}

/// JSON-RPC 2.0 error detail
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcErrorDetail {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Additional error data (optional)
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    /// Create a new JSON-RPC invalid parameters error (-32602)
    pub fn invalid_params(id: serde_json::Value, message: String) -> Self {
        Self::with_code(id, -32602, message)
    }

    /// Create a new JSON-RPC internal error (-32603)
    pub fn internal_error(id: serde_json::Value, message: String) -> Self {
        Self::with_code(id, -32603, message)
    }

    fn with_code(id: serde_json::Value, code: i64, message: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcErrorDetail {
                code,
                message,
                data: None,
            },
        }
    }
}

impl<T> JsonRpcSuccess<T> {
    /// Create a new JSON-RPC success response
    pub fn new(id: serde_json::Value, result: T) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}
