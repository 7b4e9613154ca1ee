use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{
    AppointmentError, BookingForm, BookingOutcome, EMPTY_LIST_MESSAGE, SAVE_FAILED_BANNER,
};
use crate::services::BookingService;

/// One booking desk per process; the mutex keeps it single-writer.
pub type BookingState = Arc<Mutex<BookingService>>;

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::Persistence(e) => {
                tracing::error!("Appointment persistence failed: {}", e);
                AppError::Storage(SAVE_FAILED_BANNER.to_string())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CountQuery {
    pub date: String,
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<BookingState>,
) -> Result<Json<Value>, AppError> {
    let desk = state.lock().await;
    let rows = desk.rows();
    let message = if rows.is_empty() { EMPTY_LIST_MESSAGE } else { "" };

    Ok(Json(json!({
        "appointments": rows,
        "total": rows.len(),
        "message": message,
        "storage": desk.store().load_outcome(),
    })))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<BookingState>,
    Json(form): Json<BookingForm>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut desk = state.lock().await;

    match desk.submit(&form)? {
        BookingOutcome::Booked { appointment, banner } => Ok((
            StatusCode::CREATED,
            Json(json!({
                "appointment": appointment,
                "message": banner,
                "stats": desk.stats(),
            })),
        )),
        BookingOutcome::Rejected { errors } => Err(AppError::InvalidFields(errors.to_messages())),
    }
}

#[axum::debug_handler]
pub async fn count_appointments(
    State(state): State<BookingState>,
    Query(query): Query<CountQuery>,
) -> Result<Json<Value>, AppError> {
    let desk = state.lock().await;
    let count = desk.count_for_date(&query.date);
    debug!("{} appointments on {}", count, query.date);

    Ok(Json(json!({
        "date": query.date,
        "count": count
    })))
}

#[axum::debug_handler]
pub async fn get_stats(
    State(state): State<BookingState>,
) -> Result<Json<Value>, AppError> {
    let desk = state.lock().await;

    Ok(Json(json!(desk.stats())))
}

#[axum::debug_handler]
pub async fn get_form_options(
    State(state): State<BookingState>,
) -> Result<Json<Value>, AppError> {
    let desk = state.lock().await;

    Ok(Json(json!(desk.form_options())))
}
