use std::{sync::Arc, time::Instant};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use sharded_cache::{Cache, CacheError};
use tracing::error;

use crate::errors::AppError;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<Cache>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/kv/{key}", get(get_kv).put(put_kv))
        .route("/nodes", get(list_nodes).post(add_node))
        .route("/nodes/{address}", delete(remove_node))
        .with_state(state)
}

#[derive(Deserialize)]
pub struct PutBody {
    value: String,
}

#[derive(Deserialize)]
pub struct AddNodeBody {
    address: String,
}

#[derive(Serialize)]
pub struct PingResponse {
    message: String,
    nodes: usize,
}

#[derive(Serialize)]
pub struct PutResponse {
    key: String,
    node: String,
    elapsed_ms: u128,
}

#[derive(Serialize)]
pub struct GetResponse {
    key: String,
    value: Option<String>,
    node: String,
    elapsed_ms: u128,
}

#[derive(Serialize)]
pub struct NodesResponse {
    nodes: Vec<String>,
}

pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::Cache(CacheError::BadRequest(_)) => StatusCode::BAD_REQUEST,
        AppError::Cache(CacheError::NodeNotFound(_)) => StatusCode::NOT_FOUND,
        AppError::Cache(CacheError::NodeAlreadyExists(_)) => StatusCode::CONFLICT,
        AppError::Cache(CacheError::NoNodeAvailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Cache(CacheError::Store { .. }) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            error!("AppError: {self:?}");
        }
        (status, self.to_string()).into_response()
    }
}

pub async fn ping(State(state): State<AppState>) -> impl IntoResponse {
    Json(PingResponse {
        message: "pong".to_string(),
        nodes: state.cache.servers().len(),
    })
}

pub async fn put_kv(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<PutBody>,
) -> Result<impl IntoResponse, AppError> {
    let start = Instant::now();
    let node = state.cache.set_routed(&key, &body.value).await?;
    let elapsed_ms = start.elapsed().as_millis();

    Ok((
        StatusCode::OK,
        Json(PutResponse {
            key,
            node,
            elapsed_ms,
        }),
    ))
}

pub async fn get_kv(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let start = Instant::now();
    let (node, value) = state.cache.get_routed(&key).await?;
    let elapsed_ms = start.elapsed().as_millis();

    let status = if value.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    Ok((
        status,
        Json(GetResponse {
            key,
            value,
            node,
            elapsed_ms,
        }),
    ))
}

pub async fn list_nodes(State(state): State<AppState>) -> impl IntoResponse {
    Json(NodesResponse {
        nodes: state.cache.servers(),
    })
}

pub async fn add_node(
    State(state): State<AppState>,
    Json(body): Json<AddNodeBody>,
) -> Result<impl IntoResponse, AppError> {
    state.cache.add_server(&body.address).await?;

    Ok((
        StatusCode::CREATED,
        Json(NodesResponse {
            nodes: state.cache.servers(),
        }),
    ))
}

pub async fn remove_node(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.cache.remove_server(&address).await?;

    Ok(StatusCode::NO_CONTENT)
}
