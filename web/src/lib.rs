//! The HTTP surface of the grammar correction service.
//!
//! This crate provides the axum router for the single `/correctText` endpoint
//! and wires inbound requests to whichever `GrammarCorrector` implementation
//! was injected at startup.

mod handler;
mod language;

use axum::routing::get;
use axum::Router;
use grammar_correction::GrammarCorrector;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::*;

/// Read-only per-process state, built once in main and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub api_key: String,
    pub corrector: Arc<dyn GrammarCorrector>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/correctText",
            get(handler::correct_text_get).post(handler::correct_text_post),
        )
        .with_state(state)
}

pub async fn serve(port: u16, state: AppState) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, router(state)).await
}
