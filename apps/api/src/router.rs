use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};
use tokio::sync::Mutex;
use tracing::info;

use appointment_cell::handlers::BookingState;
use appointment_cell::router::appointment_routes;
use appointment_cell::services::{AppointmentStore, BookingService};
use doctor_cell::router::doctor_routes;
use doctor_cell::DoctorRegistry;
use shared_config::AppConfig;
use shared_database::FileKeyValueStore;
use shared_utils::Clock;

pub struct DeskState {
    pub doctors: Arc<DoctorRegistry>,
    pub booking: BookingState,
}

impl DeskState {
    /// Seeds the registry and loads the appointment store from the configured file.
    pub fn from_config(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        let doctors = Arc::new(DoctorRegistry::seeded());
        let slot = FileKeyValueStore::from_config(config);
        info!("Using local storage file {}", slot.path().display());

        let store = AppointmentStore::open(Box::new(slot), config.storage_key.clone());
        let booking = BookingService::new(doctors.clone(), clock, store);

        Self {
            doctors,
            booking: Arc::new(Mutex::new(booking)),
        }
    }
}

pub fn create_router(state: DeskState) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic desk API is running!" }))
        .nest("/doctors", doctor_routes(state.doctors))
        .nest("/appointments", appointment_routes(state.booking))
}
