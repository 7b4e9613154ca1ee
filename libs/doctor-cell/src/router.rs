use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::handlers;
use crate::services::DoctorRegistry;

pub fn doctor_routes(registry: Arc<DoctorRegistry>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}/fee", get(handlers::get_doctor_fee))
        .with_state(registry)
}
