//! HTTP server for the wallet callback endpoints

use crate::types::{HealthResponse, TransactionReviewRequest};
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use mns_client::MnsClient;
use mns_snap::{LookupRequest, NameLookupResult, ResolutionAdapter, TransactionInsights};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state for the HTTP server
pub struct ServerState {
    pub adapter: ResolutionAdapter<MnsClient>,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(adapter: ResolutionAdapter<MnsClient>) -> Self {
        Self {
            adapter,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/name-lookup", post(name_lookup))
        .route("/transaction", post(review_transaction))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
    })
}

/// Recipient-entry name lookup callback
async fn name_lookup(
    State(state): State<SharedState>,
    Json(request): Json<LookupRequest>,
) -> Json<Option<NameLookupResult>> {
    Json(state.adapter.handle_name_lookup(&request).await)
}

/// Transaction-review callback
async fn review_transaction(
    State(state): State<SharedState>,
    Json(request): Json<TransactionReviewRequest>,
) -> Json<Option<TransactionInsights>> {
    Json(
        state
            .adapter
            .handle_transaction(&request.transaction, &request.chain_id)
            .await,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn create_test_state() -> SharedState {
        let adapter = ResolutionAdapter::new(MnsClient::new());
        Arc::new(ServerState::new(adapter))
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "ok");
        assert!(json["uptimeSecs"].as_u64().is_some());
    }

    #[tokio::test]
    async fn test_name_lookup_without_inputs_is_null() {
        let router = create_router(create_test_state());

        // Neither address nor domain: resolves to nothing without touching
        // the remote API
        let response = router
            .oneshot(json_post("/name-lookup", r#"{"chainId":"eip155:1"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.is_null());
    }

    #[tokio::test]
    async fn test_transaction_without_recipient_is_null() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_post(
                "/transaction",
                r#"{"transaction":{},"chainId":"eip155:1"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.is_null());
    }
}
