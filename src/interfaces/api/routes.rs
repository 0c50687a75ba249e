use crate::domain::model::{Exchange, LanguageCode, LanguageHint, Query};
use crate::infrastructure::config::is_truthy;
use crate::interfaces::api::error::{ApiError, INTERNAL_FAILURE};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query as QueryParams, State};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

const ANONYMOUS_USER: &str = "anonymous";

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origin);

    Router::new()
        .route("/generate", post(generate))
        .route("/translate", post(translate))
        .route(
            "/conversations/{user_id}",
            get(list_conversations).delete(clear_conversations),
        )
        .route("/health", get(health))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(AnyOrigin).allow_headers(AnyOrigin);
    if origin.trim() == "*" {
        return layer.allow_origin(AnyOrigin);
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => layer.allow_origin(value),
        Err(e) => {
            tracing::warn!(%origin, error = %e, "invalid CORS origin, allowing any");
            layer.allow_origin(AnyOrigin)
        }
    }
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    ApiError::internal(INTERNAL_FAILURE).into_response()
}

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(alias = "prompt")]
    pub user_query: Option<String>,
    pub user_id: Option<String>,
    pub user_location: Option<String>,
    pub user_name: Option<String>,
    pub use_web_search: Option<bool>,
    pub lang: Option<LanguageHint>,
}

impl GenerateRequest {
    fn into_query(self) -> Result<Query, ApiError> {
        let text = self
            .user_query
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| ApiError::bad_request("user_query is required"))?;
        let user_id = self
            .user_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS_USER.to_string());

        Ok(Query {
            text,
            user_id,
            user_location: self.user_location,
            user_name: self.user_name,
            use_web_search: self.use_web_search.unwrap_or(false),
            language_hint: self.lang.unwrap_or_default(),
        })
    }
}

async fn generate(
    State(state): State<AppState>,
    params: Result<QueryParams<DebugParams>, QueryRejection>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let QueryParams(params) = params.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let query = request.into_query()?;
    let debug = params.debug.as_deref().is_some_and(is_truthy);

    let result = state.orchestrator.orchestrate(&query, debug).await?;

    if let Some(history) = &state.history {
        let exchange = Exchange::new(query.text.clone(), result.output.clone(), result.lang);
        if let Err(e) = history.append(&query.user_id, exchange).await {
            tracing::warn!(user_id = %query.user_id, error = %e, "failed to record exchange");
        }
    }

    Ok(Json(result).into_response())
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub target_lang: Option<String>,
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let (text, target) = match (request.text, request.target_lang) {
        (Some(text), Some(target)) if !text.trim().is_empty() && !target.trim().is_empty() => {
            (text, target)
        }
        _ => return Err(ApiError::bad_request("text and target_lang are required")),
    };

    let source = state.orchestrator.detector().detect(&text);
    let target = LanguageCode::clamp(&target);
    let result = state
        .orchestrator
        .translator()
        .translate(&text, source, target)
        .await;

    Ok(Json(json!({
        "translated_text": result.text,
        "source_lang": source,
        "target_lang": target,
    }))
    .into_response())
}

async fn list_conversations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError> {
    let conversations = match &state.history {
        Some(history) => history.list(&user_id).await?,
        None => Vec::new(),
    };
    Ok(Json(json!({ "conversations": conversations })).into_response())
}

async fn clear_conversations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError> {
    let cleared = match &state.history {
        Some(history) => history.clear(&user_id).await?,
        None => 0,
    };
    Ok(Json(json!({ "cleared": cleared })).into_response())
}

async fn health() -> Response {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })).into_response()
}
