use crate::{
    error::ServiceError,
    estimator::PriorityFeeEstimator,
    models::{
        jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcSuccess, JSONRPC_VERSION},
        records::PriorityFeeReport,
    },
};
use actix_web::{get, http::header::ContentType, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Method served by the JSON-RPC endpoint
pub const PRIORITY_FEE_METHOD: &str = "eth_getTransactionPriorityFee";

/// Query string of the panel endpoint
#[derive(Debug, Deserialize)]
pub struct PanelQuery {
    /// Full address of the explorer page asking for a panel
    pub page: String,
}

/// Panel for the explorer page the caller is on
///
/// 200 with an HTML fragment, or 204 when the page gets nothing: not a
/// transaction page, data missing at the node, or a failure that was logged.
#[get("/api/v1/panel")]
async fn priority_fee_panel(
    estimator: web::Data<Arc<PriorityFeeEstimator>>,
    query: web::Query<PanelQuery>,
) -> HttpResponse {
    debug!("Panel requested for {}", query.page);

    match estimator.augment_page(&query.page).await {
        Some(panel) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(panel),
        None => HttpResponse::NoContent().finish(),
    }
}

/// JSON-RPC endpoint computing the priority fee of a transaction hash
///
/// The result is `null` when the node has no transaction, block or receipt
/// for the hash.
#[post("/api/v1/eth/priorityFee")]
async fn priority_fee_jsonrpc(
    req: HttpRequest,
    estimator: web::Data<Arc<PriorityFeeEstimator>>,
    request: web::Json<JsonRpcRequest<Vec<String>>>,
) -> HttpResponse {
    debug!(
        "Received JSON-RPC priority fee request from {}",
        req.peer_addr()
            .map_or_else(|| "unknown".to_string(), |addr| addr.to_string())
    );

    // Validate JSON-RPC version
    if request.jsonrpc != JSONRPC_VERSION {
        return HttpResponse::BadRequest().json(JsonRpcError::invalid_params(
            request.id.clone(),
            "Invalid JSON-RPC version. Expected 2.0".to_string(),
        ));
    }

    // Validate method
    if request.method != PRIORITY_FEE_METHOD {
        return HttpResponse::BadRequest().json(JsonRpcError::invalid_params(
            request.id.clone(),
            format!("Unsupported method: {}", request.method),
        ));
    }

    let Some(tx_hash) = request.params.first().filter(|hash| !hash.is_empty()) else {
        return HttpResponse::BadRequest().json(JsonRpcError::invalid_params(
            request.id.clone(),
            "Missing transaction hash".to_string(),
        ));
    };

    match estimator.priority_fee(tx_hash).await {
        Ok(fee) => {
            let report = fee.map(|fee| PriorityFeeReport::new(tx_hash, &fee));
            info!(tx_hash = %tx_hash, found = report.is_some(), "Priority fee lookup finished");
            HttpResponse::Ok().json(JsonRpcSuccess::new(request.id.clone(), report))
        }
        Err(e) => {
            error!("Priority fee lookup failed: {:?}", e);
            HttpResponse::InternalServerError().json(JsonRpcError::internal_error(
                request.id.clone(),
                format!("Priority fee lookup failed: {}", e),
            ))
        }
    }
}

/// Service health check endpoint that verifies the node answers
#[post("/api/v1/health")]
async fn health_check(
    estimator: web::Data<Arc<PriorityFeeEstimator>>,
) -> Result<HttpResponse, ServiceError> {
    info!("Health check requested");

    match estimator.latest_block_number().await {
        Ok(Some(block_number)) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "latest_block": block_number.to_string(),
        }))),
        Ok(None) => Err(ServiceError::InvalidResponse(
            "eth_blockNumber returned no result".to_string(),
        )),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            Err(e)
        }
    }
}

/// Configure the API routes for the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(priority_fee_panel)
        .service(priority_fee_jsonrpc)
        .service(health_check);
}
