//! Webhook HTTP server for soi-bot.
//!
//! Binds `POST /webhook` to the event-processing pipeline and `GET /` to a
//! static liveness response. The webhook route captures the raw request
//! body so signature verification runs over the exact bytes the platform
//! signed; parsing operates on the same buffer afterwards.

use std::net::SocketAddr;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use futures::future::join_all;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    base::types::{InboundPayload, Void},
    interaction,
    runtime::Runtime,
};

/// Header carrying the platform signature over the raw request body.
const SIGNATURE_HEADER: &str = "x-line-signature";

/// Static liveness response for `GET /`.
const LIVENESS_TEXT: &str = "Soi-chan is running!";

/// Serve the webhook router on the configured port until ctrl-c.
pub async fn serve(runtime: Runtime) -> Void {
    let addr = SocketAddr::from(([0, 0, 0, 0], runtime.config.port));
    let app = router(runtime);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server on port {}", addr.port());

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

/// Build the application router.
pub fn router(runtime: Runtime) -> Router {
    Router::new().route("/webhook", post(webhook)).route("/", get(liveness)).with_state(runtime)
}

/// Handles `GET /`.
async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

/// Handles `POST /webhook`: authenticate, parse, fan out, respond once.
#[instrument(skip_all)]
async fn webhook(State(runtime): State<Runtime>, headers: HeaderMap, body: Bytes) -> (StatusCode, &'static str) {
    // Authenticate against the raw bytes before anything else touches them.

    let signature = headers.get(SIGNATURE_HEADER).and_then(|value| value.to_str().ok()).unwrap_or_default();

    if !runtime.chat.verify_signature(&body, signature) {
        warn!("Rejecting webhook request with a bad or missing signature.");
        return (StatusCode::UNAUTHORIZED, "");
    }

    // Parse the payload from the same raw buffer.

    let payload: InboundPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            error!("Failed to parse webhook payload: {}", err);
            return (StatusCode::INTERNAL_SERVER_ERROR, "");
        }
    };

    debug!("Received webhook batch with {} event(s)", payload.events.len());

    // Fan out: all events in the batch run concurrently, each isolating its
    // own failures, and the response waits for the whole batch to settle.

    let tasks = payload
        .events
        .into_iter()
        .map(|event| interaction::webhook_event::handle_webhook_event(event, &runtime.config, &runtime.llm, &runtime.chat));

    join_all(tasks).await;

    (StatusCode::OK, "OK")
}

/// Resolves when ctrl-c is received.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
    }
}
