use axum::{
    Router,
    routing::get,
};

use crate::handlers::{self, BookingState};

pub fn appointment_routes(state: BookingState) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::book_appointment))
        .route("/count", get(handlers::count_appointments))
        .route("/stats", get(handlers::get_stats))
        .route("/form-options", get(handlers::get_form_options))
        .with_state(state)
}
