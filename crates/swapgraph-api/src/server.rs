//! HTTP server setup and configuration

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::create_router;
use crate::AppState;

/// Router with CORS and request tracing applied
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind `addr` and serve until the process stops
pub async fn start_server(state: AppState, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Starting API server on {}", listener.local_addr()?);
    serve(listener, state).await
}

/// Serve the API on an already bound listener
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, create_app(state)).await
}
