use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{DoctorError, DoctorFeeResponse, DoctorListing};
use crate::services::DoctorRegistry;

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::InvalidId(_) => AppError::BadRequest(err.to_string()),
            DoctorError::DuplicateId(_) | DoctorError::InvalidFee(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

fn parse_doctor_id(raw: &str) -> Result<i64, DoctorError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DoctorError::InvalidId(raw.to_string()))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(registry): State<Arc<DoctorRegistry>>,
) -> Result<Json<Value>, AppError> {
    let doctors: Vec<DoctorListing> = registry.all().iter().map(DoctorListing::from).collect();

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(registry): State<Arc<DoctorRegistry>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_doctor_id(&doctor_id)?;
    let doctor = registry.find_by_id(id).ok_or(DoctorError::NotFound(id))?;

    Ok(Json(json!(DoctorListing::from(doctor))))
}

/// Fee shown under the dropdown when a doctor is selected.
#[axum::debug_handler]
pub async fn get_doctor_fee(
    State(registry): State<Arc<DoctorRegistry>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_doctor_id(&doctor_id)?;
    debug!("Looking up consultation fee for doctor {}", id);

    let doctor = registry.find_by_id(id).ok_or(DoctorError::NotFound(id))?;

    Ok(Json(json!(DoctorFeeResponse::from(doctor))))
}
