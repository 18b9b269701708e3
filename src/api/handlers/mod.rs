use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

/// JSON body for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn not_found(msg: impl Into<String>) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse { error: msg.into() }),
    )
}

/// Log an internal error and return a sanitized response to the client.
/// The full error chain stays in the server log.
fn internal_error(e: anyhow::Error) -> ApiError {
    tracing::error!("Internal error: {:#}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Tickets
// ============================================================

pub async fn current_ticket(State(board): State<Board>) -> Result<Json<Ticket>, ApiError> {
    let ticket_id = board
        .read_active_ticket()
        .map_err(internal_error)?
        .ok_or_else(|| not_found("No active ticket"))?;

    board
        .get_ticket(&ticket_id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| not_found(format!("No file found for ticket {}", ticket_id)))
}

pub async fn get_ticket(
    State(board): State<Board>,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, ApiError> {
    board
        .get_ticket(&id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| not_found(format!("Ticket {} not found", id)))
}

pub async fn list_tickets(State(board): State<Board>) -> Result<Json<TicketList>, ApiError> {
    board
        .list_tickets()
        .map(|tickets| Json(TicketList { tickets }))
        .map_err(internal_error)
}

// ============================================================
// Task Metadata
// ============================================================

pub async fn get_task(
    State(board): State<Board>,
    Path(name): Path<String>,
) -> Result<Json<TaskMetadata>, ApiError> {
    board
        .get_task_metadata(&name)
        .map_err(internal_error)?
        .map(|metadata| {
            Json(TaskMetadata {
                task_name: name.clone(),
                metadata,
            })
        })
        .ok_or_else(|| not_found(format!("No metadata found for task {}", name)))
}
