use std::sync::Arc;

use tracing::{debug, error, info};

use doctor_cell::DoctorRegistry;
use shared_utils::clock::{format_iso_date, Clock};

use crate::models::{
    AppointmentError, AppointmentRow, BookingForm, BookingOutcome, DashboardStats,
    FormOptions, Meridiem, SlotTime, ValidationResult, BOOKED_BANNER, UNKNOWN_DOCTOR,
    UNKNOWN_SPECIALIZATION,
};
use crate::services::statistics::dashboard_stats;
use crate::services::store::AppointmentStore;
use crate::services::validation::validate_booking;

/// Owns the appointment store for the session and runs the booking desk's
/// operations against it.
pub struct BookingService {
    registry: Arc<DoctorRegistry>,
    clock: Arc<dyn Clock>,
    store: AppointmentStore,
}

impl BookingService {
    pub fn new(
        registry: Arc<DoctorRegistry>,
        clock: Arc<dyn Clock>,
        store: AppointmentStore,
    ) -> Self {
        Self { registry, clock, store }
    }

    pub fn registry(&self) -> &DoctorRegistry {
        &self.registry
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    /// Validate, build and append one appointment.
    ///
    /// A rejected form leaves the store untouched. Only a failed write is an
    /// error.
    pub fn submit(&mut self, form: &BookingForm) -> Result<BookingOutcome, AppointmentError> {
        let today = self.clock.today();

        let command = match validate_booking(form, today) {
            ValidationResult::Valid(command) => command,
            ValidationResult::Invalid(errors) => {
                debug!("Booking form rejected on fields {:?}", errors.fields());
                return Ok(BookingOutcome::Rejected { errors });
            }
        };

        let id = self.store.next_id(self.clock.now_millis())?;
        let appointment = command.into_appointment(id);

        if let Err(e) = self.store.append(appointment.clone()) {
            error!("Failed to persist appointment {}: {}", id, e);
            return Err(e.into());
        }

        info!(
            "Booked appointment {} with doctor {} on {} at {}",
            appointment.id, appointment.doctor_id, appointment.date, appointment.time
        );

        Ok(BookingOutcome::Booked {
            appointment,
            banner: BOOKED_BANNER.to_string(),
        })
    }

    /// The appointment table, in booking order.
    pub fn rows(&self) -> Vec<AppointmentRow> {
        self.store
            .all()
            .iter()
            .map(|appt| {
                let doctor = self.registry.find_by_id(appt.doctor_id);
                AppointmentRow {
                    id: appt.id,
                    patient_name: appt.patient_name.clone(),
                    doctor_name: doctor
                        .map(|d| d.name.clone())
                        .unwrap_or_else(|| UNKNOWN_DOCTOR.to_string()),
                    specialization: doctor
                        .map(|d| d.specialization.clone())
                        .unwrap_or_else(|| UNKNOWN_SPECIALIZATION.to_string()),
                    date: appt.date.clone(),
                    time: appt.time.clone(),
                }
            })
            .collect()
    }

    pub fn count_for_date(&self, date: &str) -> usize {
        self.store.count_for_date(date)
    }

    pub fn stats(&self) -> DashboardStats {
        dashboard_stats(&self.registry, &self.store, &self.clock.today_string())
    }

    /// Choices for the time selects and the earliest bookable date.
    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            hours: (1..=12).map(|h| h.to_string()).collect(),
            minutes: (0..60)
                .step_by(SlotTime::MINUTE_STEP as usize)
                .map(|m| format!("{:02}", m))
                .collect(),
            meridiems: [Meridiem::Am, Meridiem::Pm].iter().map(|m| m.to_string()).collect(),
            min_date: format_iso_date(self.clock.today()),
        }
    }
}
