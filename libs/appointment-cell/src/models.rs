// libs/appointment-cell/src/models.rs
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::StorageError;

pub const BOOKED_BANNER: &str = "Appointment booked successfully.";
pub const SAVE_FAILED_BANNER: &str = "Could not save the appointment. Please try again.";
pub const EMPTY_LIST_MESSAGE: &str = "No appointments booked yet.";
pub const UNKNOWN_DOCTOR: &str = "Unknown";
pub const UNKNOWN_SPECIALIZATION: &str = "-";

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// One booking as it is held in memory and persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    /// Not checked against the doctor registry.
    pub doctor_id: i64,
    /// ISO `yyyy-mm-dd`, compared as a plain string.
    pub date: String,
    /// `H:MM AM|PM`
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

impl FromStr for Meridiem {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            _ => Err(()),
        }
    }
}

/// A selectable slot: hour 1-12, minute on a five-minute step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotTime {
    pub hour: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
}

impl SlotTime {
    pub const MINUTE_STEP: u8 = 5;

    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Option<Self> {
        let valid = (1..=12).contains(&hour) && minute < 60 && minute % Self::MINUTE_STEP == 0;
        valid.then_some(Self { hour, minute, meridiem })
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

// ==============================================================================
// BOOKING INPUT
// ==============================================================================

/// Raw values from the booking form. Absent fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingForm {
    pub patient_name: String,
    pub doctor_id: String,
    pub date: String,
    pub hour: String,
    pub minute: String,
    pub meridiem: String,
}

/// A booking request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCommand {
    pub patient_name: String,
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: SlotTime,
}

impl BookingCommand {
    pub fn formatted_time(&self) -> String {
        self.time.to_string()
    }

    pub fn into_appointment(self, id: i64) -> Appointment {
        Appointment {
            id,
            patient_name: self.patient_name,
            doctor_id: self.doctor_id,
            date: self.date.format("%Y-%m-%d").to_string(),
            time: self.time.to_string(),
        }
    }
}

// ==============================================================================
// VALIDATION RESULTS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    PatientName,
    DoctorId,
    Date,
    Time,
}

impl BookingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::PatientName => "patientName",
            BookingField::DoctorId => "doctorId",
            BookingField::Date => "date",
            BookingField::Time => "time",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    PastDate,
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: BookingField, kind: FieldErrorKind) -> Self {
        let message = match (field, kind) {
            (BookingField::PatientName, _) => "Patient name is required.",
            (BookingField::DoctorId, FieldErrorKind::Malformed) => "Please select a valid doctor.",
            (BookingField::DoctorId, _) => "Please select a doctor.",
            (BookingField::Date, FieldErrorKind::Required) => "Please choose a date.",
            (BookingField::Date, FieldErrorKind::PastDate) => "Date cannot be in the past.",
            (BookingField::Date, FieldErrorKind::Malformed) => "Please choose a valid date.",
            (BookingField::Time, _) => "Please choose a valid time.",
        };

        Self {
            kind,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<BookingField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: BookingField, kind: FieldErrorKind) {
        self.0.insert(field, FieldError::new(field, kind));
    }

    pub fn get(&self, field: BookingField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn kind_of(&self, field: BookingField) -> Option<FieldErrorKind> {
        self.get(field).map(|e| e.kind)
    }

    pub fn contains(&self, field: BookingField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> Vec<BookingField> {
        self.0.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field name to message, as the form renders them inline.
    pub fn to_messages(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(field, error)| (field.as_str().to_string(), error.message.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(BookingCommand),
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

// ==============================================================================
// STORE & BOOKING OUTCOMES
// ==============================================================================

/// What the last `load()` found in the durable slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// Nothing stored yet.
    Fresh,
    Restored { count: usize },
    /// Stored data was unreadable and has been discarded.
    Corrupted { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked { appointment: Appointment, banner: String },
    Rejected { errors: FieldErrors },
}

// ==============================================================================
// VIEWS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_doctors: usize,
    pub total_appointments: usize,
    pub today_appointments: usize,
}

/// An appointment resolved against the registry for the table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRow {
    pub id: i64,
    pub patient_name: String,
    pub doctor_name: String,
    pub specialization: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub hours: Vec<String>,
    pub minutes: Vec<String>,
    pub meridiems: Vec<String>,
    /// Earliest selectable date.
    pub min_date: String,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to serialize appointments: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write appointments to storage: {0}")]
    Write(#[from] StorageError),

    #[error("No appointment id left after {last}")]
    IdsExhausted { last: i64 },
}

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Appointment could not be persisted: {0}")]
    Persistence(#[from] StoreError),
}
