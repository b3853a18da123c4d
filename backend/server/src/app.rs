use std::{future::Future, net, sync::Arc};

use axum::{extract::Request, http};
use common_utils::consts;
use connector_integration::{connectors::Paysera, WebToPayRedirect};
use external_services::ApiClient;
use interfaces::connector_types::ClientLookup;
use tokio::signal::unix::{signal, SignalKind};
use tower_http::{request_id::MakeRequestUuid, trace as tower_trace};

use crate::{
    client_lookup::{HttpClientLookup, StaticClientLookup},
    configs,
    error::ConfigurationError,
    http::AppState,
    logger, utils,
};

pub async fn server_builder(config: configs::Config) -> Result<(), ConfigurationError> {
    let server_config = config.server.clone();
    let socket_addr = net::SocketAddr::new(server_config.host.parse()?, server_config.port);

    let state = build_app_state(&config)?;

    logger::info!(
        host = %server_config.host,
        port = %server_config.port,
        environment = %config.common.environment,
        "starting paysera gateway"
    );

    http_server(state, socket_addr, shutdown_signal()).await
}

/// Wires the Paysera gateway from configuration.
pub fn build_app_state(config: &configs::Config) -> Result<AppState, ConfigurationError> {
    let client_lookup: Arc<dyn ClientLookup> = match config.clients.lookup_url.as_deref() {
        Some(lookup_url) => {
            let client = ApiClient::new(lookup_url, &config.proxy)
                .map_err(|error| ConfigurationError::HttpClientError(format!("{error:?}")))?;
            Arc::new(HttpClientLookup::new(client))
        }
        None => Arc::new(StaticClientLookup::new(config.clients.known_ids.clone())),
    };

    let gateway = Paysera::new(
        Arc::new(WebToPayRedirect::new(
            config.connectors.paysera.pay_url.clone(),
        )),
        client_lookup,
        config.gateway.callback_url.clone(),
    );

    Ok(AppState::new(Arc::new(gateway), config.gateway.settings()))
}

pub async fn http_server(
    state: AppState,
    socket: net::SocketAddr,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ConfigurationError> {
    let logging_layer = tower_trace::TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| utils::record_fields_from_header(request))
        .on_request(tower_trace::DefaultOnRequest::new().level(tracing::Level::INFO))
        .on_response(
            tower_trace::DefaultOnResponse::new()
                .level(tracing::Level::INFO)
                .latency_unit(tower_http::LatencyUnit::Micros),
        )
        .on_failure(
            tower_trace::DefaultOnFailure::new()
                .latency_unit(tower_http::LatencyUnit::Micros)
                .level(tracing::Level::ERROR),
        );

    let request_id_layer = tower_http::request_id::SetRequestIdLayer::new(
        http::HeaderName::from_static(consts::X_REQUEST_ID),
        MakeRequestUuid,
    );

    let propagate_request_id_layer = tower_http::request_id::PropagateRequestIdLayer::new(
        http::HeaderName::from_static(consts::X_REQUEST_ID),
    );

    let router = crate::http::create_router(state)
        .layer(logging_layer)
        .layer(propagate_request_id_layer)
        .layer(request_id_layer);

    let listener = tokio::net::TcpListener::bind(socket).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let (mut sig_int, mut sig_term) = match (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) {
        (Ok(sig_int), Ok(sig_term)) => (sig_int, sig_term),
        (Err(error), _) | (_, Err(error)) => {
            logger::error!(?error, "failed to install signal handlers");
            return std::future::pending().await;
        }
    };

    tokio::select! {
        _ = sig_int.recv() => logger::info!("Received SIGINT"),
        _ = sig_term.recv() => logger::info!("Received SIGTERM"),
    }
    logger::info!("Shutdown signal received");
}
