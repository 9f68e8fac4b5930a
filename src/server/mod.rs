pub mod config;

pub use config::{parse_server_address, AssistantConfig};

use axum::{extract::Request, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::api::ApiServer;
use crate::assistant::Assistant;
use crate::data::MarketCatalog;

pub struct Server {
    addr: SocketAddr,
    catalog: Arc<MarketCatalog>,
    assistant: Assistant,
}

impl Server {
    pub fn new(addr: SocketAddr, assistant: Assistant) -> Self {
        Self {
            addr,
            catalog: Arc::new(MarketCatalog::new()),
            assistant,
        }
    }

    pub fn router(&self) -> Router {
        let api = ApiServer::new(Arc::clone(&self.catalog), self.assistant.clone());
        let mode = api.assistant().mode();

        let middleware = ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request| {
                    info_span!(
                        "request",
                        id = %Uuid::new_v4(),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            )
            .layer(CorsLayer::very_permissive());

        Router::new()
            .route("/health", get(move || health_check(mode)))
            .merge(api.router())
            .layer(middleware)
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        info!(
            "Starting server on {} (assistant: {})",
            self.addr,
            self.assistant.mode()
        );

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Unable to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

async fn health_check(assistant_mode: &'static str) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "service": "agriverse-api",
        "assistant_mode": assistant_mode
    }))
}
