//! Web front end: the selection form, the result page and a JSON mirror.

use crate::api::{self, Components};
use crate::error::Result;
use crate::types::{ApiResponse, FactSheet, InformationType};
use crate::views;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Query string shared by `/Information` and `/api/information`.
#[derive(Debug, Default, Deserialize)]
pub struct InformationParams {
    pub states: Option<String>,
    #[serde(rename = "InformationType")]
    pub information_type: Option<String>,
}

impl InformationParams {
    fn state(&self) -> Option<&str> {
        self.states.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn kind(&self) -> InformationType {
        InformationType::from_param(self.information_type.as_deref())
    }
}

pub fn router(components: Arc<Components>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/Information", get(information))
        .route("/api/information", get(api_information))
        .route("/health", get(health))
        .with_state(components)
}

/// Serve on `bind` until interrupted.
pub async fn start(bind: &str, components: Arc<Components>) -> Result<()> {
    let app = router(components);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

async fn index() -> Html<String> {
    Html(views::render_form())
}

async fn information(
    State(components): State<Arc<Components>>,
    Query(params): Query<InformationParams>,
) -> Response {
    let Some(state) = params.state() else {
        return (
            StatusCode::BAD_REQUEST,
            Html(views::render_form_with_error("Please choose a state.")),
        )
            .into_response();
    };

    match lookup(&components, state, params.kind()).await {
        Ok(sheet) => Html(views::render_information(&sheet)).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Html(views::render_form_with_error(&e.to_string())),
        )
            .into_response(),
    }
}

async fn api_information(
    State(components): State<Arc<Components>>,
    Query(params): Query<InformationParams>,
) -> (StatusCode, Json<ApiResponse<FactSheet>>) {
    let Some(state) = params.state() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err("missing query parameter: states")),
        );
    };

    match lookup(&components, state, params.kind()).await {
        Ok(sheet) => (StatusCode::OK, Json(ApiResponse::ok(sheet))),
        Err(e) => (StatusCode::BAD_REQUEST, Json(ApiResponse::err(e.to_string()))),
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn lookup(
    components: &Components,
    state: &str,
    kind: InformationType,
) -> Result<FactSheet> {
    let result = api::lookup(components, state, kind).await;
    if let Err(e) = &result {
        warn!(state, error = %e, "rejected lookup");
    }
    result
}
