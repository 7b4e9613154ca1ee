use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub fee: u32,
}

impl Doctor {
    pub fn new(id: i64, name: &str, specialization: &str, fee: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            specialization: specialization.to_string(),
            fee,
        }
    }

    /// Text of the doctor's entry in the booking dropdown.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.specialization)
    }

    pub fn fee_label(&self) -> String {
        format!("Consultation fee: ₹{}", self.fee)
    }
}

// DTO for the doctor table and dropdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorListing {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub option_label: String,
}

impl From<&Doctor> for DoctorListing {
    fn from(doctor: &Doctor) -> Self {
        Self {
            doctor: doctor.clone(),
            option_label: doctor.option_label(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorFeeResponse {
    pub doctor_id: i64,
    pub fee: u32,
    pub label: String,
}

impl From<&Doctor> for DoctorFeeResponse {
    fn from(doctor: &Doctor) -> Self {
        Self {
            doctor_id: doctor.id,
            fee: doctor.fee,
            label: doctor.fee_label(),
        }
    }
}

// Error types specific to doctor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DoctorError {
    #[error("Doctor not found: {0}")]
    NotFound(i64),

    #[error("Invalid doctor id: {0}")]
    InvalidId(String),

    #[error("Duplicate doctor id: {0}")]
    DuplicateId(i64),

    #[error("Doctor {0} has a non-positive fee")]
    InvalidFee(i64),
}
