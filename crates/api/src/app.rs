use std::time::Duration;

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::{Request, State},
    http::{
        header::{HeaderValue, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::gql::AppSchema;
use crate::state::AppState;

/// Build the Axum router with the health probe and GraphQL.
pub fn build_router(state: AppState, schema: AppSchema, config: &ServerConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    Router::new()
        // Liveness check; also proves graph connectivity.
        .route("/ping", get(ping))
        // GraphQL over POST, GraphiQL for browsers
        .route(
            "/graphql",
            get(graphiql).post(move |req| graphql_handler(req, schema)),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        )
}

async fn graphql_handler(req: Request, schema: AppSchema) -> Result<Response, AppError> {
    let (_parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, 2 * 1024 * 1024)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read request body: {}", e)))?;

    let gql_request: async_graphql::Request = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    let gql_response = schema.execute(gql_request).await;

    Ok(Json(gql_response).into_response())
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[derive(Debug, Serialize)]
pub struct PingStatus {
    pub status: &'static str,
    pub db: String,
}

/// Quick `RETURN 1` probe. Always 200; the body says whether the graph answered.
pub async fn ping(State(state): State<AppState>) -> Json<PingStatus> {
    match state.graph.ping().await {
        Ok(()) => Json(PingStatus {
            status: "ok",
            db: "connected".to_string(),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Graph database ping failed");
            Json(PingStatus {
                status: "error",
                db: e.to_string(),
            })
        }
    }
}
