use actix_web::{web, App, HttpServer};
use eth_priority_fee::{api, config::Config, estimator::PriorityFeeEstimator, rpc::EthereumClient};
use std::{io, sync::Arc};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "eth_priority_fee=info,actix_web=error,hyper=warn,reqwest=warn";

/// Application entry point
///
/// Sets up logging, loads the listening address, builds the node client and
/// serves the priority fee endpoints.
#[actix_web::main]
async fn main() -> io::Result<()> {
    // RUST_LOG wins over the defaults when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let eth_client = EthereumClient::new()
        .map_err(|e| io::Error::other(e.to_string()))?;
    tracing::info!(
        "Serving priority fees from {} on {}",
        eth_client.endpoint(),
        config.bind_address()
    );

    let estimator = Arc::new(PriorityFeeEstimator::new(Arc::new(eth_client)));

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(estimator.clone()))
            .configure(api::configure)
    })
    .workers(4)
    .bind(config.bind_address())?
    .run()
    .await
}
