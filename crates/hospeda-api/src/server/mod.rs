//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::sync::Arc;

use axum::Router;
use hospeda_backend::{
    BackendClient, HttpAuthGateway, HttpGuestRepository, HttpInvoiceLineRepository,
    HttpInvoiceRepository, HttpReservationRepository, HttpRoomRepository, HttpUserRepository,
};
use hospeda_common::{AppConfig, AppError, JwtService};
use hospeda_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Wire the backend repositories into an AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let client = BackendClient::new(&config.backend)
        .map_err(|e| AppError::Config(format!("Failed to build backend client: {e}")))?;
    info!(backend = %client.base_url(), "Hotel backend client ready");

    let jwt_service = Arc::new(JwtService::new(
        config.jwt.secret.as_deref(),
        config.jwt.leeway_secs,
    ));
    if !jwt_service.verifies_signature() {
        warn!("JWT_SECRET not set; token signatures are left to the backend");
    }

    let service_context = ServiceContextBuilder::new()
        .auth_gateway(Arc::new(HttpAuthGateway::new(client.clone())))
        .room_repo(Arc::new(HttpRoomRepository::new(client.clone())))
        .guest_repo(Arc::new(HttpGuestRepository::new(client.clone())))
        .reservation_repo(Arc::new(HttpReservationRepository::new(client.clone())))
        .invoice_repo(Arc::new(HttpInvoiceRepository::new(client.clone())))
        .invoice_line_repo(Arc::new(HttpInvoiceLineRepository::new(client.clone())))
        .user_repo(Arc::new(HttpUserRepository::new(client)))
        .jwt_service(jwt_service)
        .billing(config.billing.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Listener has no address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config)?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
