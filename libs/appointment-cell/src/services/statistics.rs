use doctor_cell::DoctorRegistry;

use crate::models::DashboardStats;
use crate::services::store::AppointmentStore;

/// Dashboard figures for `today` (ISO date). Recomputed on every call.
pub fn dashboard_stats(
    registry: &DoctorRegistry,
    store: &AppointmentStore,
    today: &str,
) -> DashboardStats {
    DashboardStats {
        total_doctors: registry.len(),
        total_appointments: store.len(),
        today_appointments: store.count_for_date(today),
    }
}
