//! Wire format of the node client

use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method},
    Mock, ResponseTemplate,
};

use eth_priority_fee::{
    error::ServiceError,
    rpc::{EthereumClient, FeeDataSource, ENDPOINT},
};

use crate::helpers::{closed_port_uri, spawn_node, BLOCK_NUMBER, TX_HASH};

#[test]
fn test_default_client_targets_fixed_endpoint() {
    let client = EthereumClient::new().unwrap();
    assert_eq!(client.endpoint().as_str(), format!("{ENDPOINT}/"));
}

#[actix_web::test]
async fn test_requests_use_fixed_id_and_json_body() {
    let node = spawn_node().await;

    Mock::given(method("POST"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "method": "eth_getTransactionByHash",
            "params": [TX_HASH],
            "id": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "maxFeePerGas": "0x77359400", "blockNumber": BLOCK_NUMBER }
        })))
        .expect(1)
        .mount(&node)
        .await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "method": "eth_getBlockByNumber",
            "params": [BLOCK_NUMBER, false],
            "id": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "baseFeePerGas": "0x7" }
        })))
        .expect(1)
        .mount(&node)
        .await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "method": "eth_getTransactionReceipt",
            "params": [TX_HASH],
            "id": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "gasUsed": "0x5208" }
        })))
        .expect(1)
        .mount(&node)
        .await;

    let client = EthereumClient::with_endpoint(&node.uri()).unwrap();

    let tx = client.fetch_transaction(TX_HASH).await.unwrap().result.unwrap();
    assert_eq!(tx.max_fee_per_gas.as_deref(), Some("0x77359400"));
    assert_eq!(tx.max_priority_fee_per_gas, None);

    let block = client
        .fetch_block(tx.block_number)
        .await
        .unwrap()
        .result
        .unwrap();
    assert_eq!(block.base_fee_per_gas.as_deref(), Some("0x7"));

    let receipt = client.fetch_receipt(TX_HASH).await.unwrap().result.unwrap();
    assert_eq!(receipt.gas_used.as_deref(), Some("0x5208"));
}

#[actix_web::test]
async fn test_missing_block_number_is_sent_as_null() {
    let node = spawn_node().await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "method": "eth_getBlockByNumber",
            "params": [null, false],
            "id": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "invalid argument 0" }
        })))
        .expect(1)
        .mount(&node)
        .await;

    let client = EthereumClient::with_endpoint(&node.uri()).unwrap();
    let response = client.fetch_block(None).await.unwrap();

    assert!(response.result.is_none());
    assert_eq!(response.error.map(|error| error.code), Some(-32602));
}

#[actix_web::test]
async fn test_http_status_is_not_checked() {
    let node = spawn_node().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "gasUsed": "0x1" }
        })))
        .mount(&node)
        .await;

    let client = EthereumClient::with_endpoint(&node.uri()).unwrap();
    let receipt = client.fetch_receipt(TX_HASH).await.unwrap().result;

    assert_eq!(receipt.and_then(|receipt| receipt.gas_used).as_deref(), Some("0x1"));
}

#[actix_web::test]
async fn test_non_json_body_is_an_error() {
    let node = spawn_node().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("upstream timeout"))
        .mount(&node)
        .await;

    let client = EthereumClient::with_endpoint(&node.uri()).unwrap();
    let result = client.fetch_transaction(TX_HASH).await;

    assert!(matches!(result, Err(ServiceError::InvalidResponse(_))));
}

#[actix_web::test]
async fn test_unreachable_node_is_an_error() {
    let client = EthereumClient::with_endpoint(&closed_port_uri()).unwrap();
    let result = client.fetch_transaction(TX_HASH).await;

    assert!(matches!(result, Err(ServiceError::RpcConnection(_))));
}

#[test]
fn test_bad_endpoint_is_rejected() {
    let result = EthereumClient::with_endpoint("not a url");
    assert!(matches!(result, Err(ServiceError::Configuration(_))));
}
