//! REST handlers for the console API.
//!
//! Thin dispatch only: each handler translates between JSON and a gateway
//! or directory call, then maps failures onto `{error}` responses.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::http::server::AppState;
use crate::plmn::PlmnRecord;
use crate::sib8::Sib8Record;
use crate::subscribers::{
    DirectoryError, NewSubscriber, SubscriberRecord, SubscriberSummary, SubscriberUpdate,
};

type ApiError = (StatusCode, Json<Value>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

fn success_response(message: &str) -> Json<Value> {
    Json(json!({ "success": true, "message": message }))
}

fn directory_error(err: DirectoryError) -> ApiError {
    let status = match err {
        DirectoryError::MissingUeid | DirectoryError::NothingToUpdate => StatusCode::BAD_REQUEST,
        DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
        DirectoryError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "Subscriber store operation failed");
    }
    error_response(status, err.to_string())
}

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

pub async fn get_plmn(State(state): State<AppState>) -> Result<Json<PlmnRecord>, ApiError> {
    match state.gateway.load_plmn().await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            tracing::error!(error = %e, "Error reading PLMN config");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read PLMN configuration",
            ))
        }
    }
}

pub async fn save_plmn(
    State(state): State<AppState>,
    Json(record): Json<PlmnRecord>,
) -> Result<Json<Value>, ApiError> {
    match state.gateway.store_plmn(&record).await {
        Ok(()) => Ok(success_response("PLMN configuration saved")),
        Err(e) => {
            tracing::error!(error = %e, "Error writing PLMN config");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save PLMN configuration",
            ))
        }
    }
}

pub async fn get_sib8(State(state): State<AppState>) -> Result<Json<Sib8Record>, ApiError> {
    match state.gateway.load_sib8().await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            tracing::error!(error = %e, "Error reading SIB8 config");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read SIB8 configuration",
            ))
        }
    }
}

pub async fn save_sib8(
    State(state): State<AppState>,
    Json(record): Json<Sib8Record>,
) -> Result<Json<Value>, ApiError> {
    match state.gateway.store_sib8(&record).await {
        Ok(()) => Ok(success_response("SIB8 configuration saved")),
        Err(e) => {
            tracing::error!(error = %e, "Error writing SIB8 config");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save SIB8 configuration",
            ))
        }
    }
}

pub async fn list_subscribers(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubscriberSummary>>, ApiError> {
    let directory = state.directory.lock().await;
    directory
        .list()
        .map(Json)
        .map_err(directory_error)
}

pub async fn get_subscriber(
    State(state): State<AppState>,
    Path(ueid): Path<String>,
) -> Result<Json<SubscriberRecord>, ApiError> {
    let directory = state.directory.lock().await;
    directory.get(&ueid).map(Json).map_err(directory_error)
}

pub async fn create_subscriber(
    State(state): State<AppState>,
    Json(request): Json<NewSubscriber>,
) -> Result<Json<Value>, ApiError> {
    let directory = state.directory.lock().await;
    directory
        .create(
            &request.ueid,
            request.enc_permanent_key.as_deref(),
            request.enc_opc_key.as_deref(),
        )
        .map_err(directory_error)?;

    Ok(success_response("Subscriber created"))
}

pub async fn update_subscriber(
    State(state): State<AppState>,
    Path(ueid): Path<String>,
    Json(changes): Json<SubscriberUpdate>,
) -> Result<Json<Value>, ApiError> {
    let directory = state.directory.lock().await;
    directory
        .update(&ueid, &changes)
        .map_err(directory_error)?;

    Ok(success_response("Subscriber updated"))
}

pub async fn delete_subscriber(
    State(state): State<AppState>,
    Path(ueid): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let directory = state.directory.lock().await;
    directory.delete(&ueid).map_err(directory_error)?;

    Ok(success_response("Subscriber deleted"))
}
