use std::collections::HashSet;

use tracing::debug;

use crate::models::{Doctor, DoctorError};

/// Read-only roster of bookable doctors, fixed at construction.
#[derive(Debug, Clone)]
pub struct DoctorRegistry {
    doctors: Vec<Doctor>,
}

impl DoctorRegistry {
    /// Builds a registry from `doctors` in declaration order.
    ///
    /// Ids must be unique and every fee must be positive.
    pub fn new(doctors: Vec<Doctor>) -> Result<Self, DoctorError> {
        let mut seen = HashSet::new();
        for doctor in &doctors {
            if !seen.insert(doctor.id) {
                return Err(DoctorError::DuplicateId(doctor.id));
            }
            if doctor.fee == 0 {
                return Err(DoctorError::InvalidFee(doctor.id));
            }
        }

        debug!("Doctor registry initialised with {} doctors", doctors.len());
        Ok(Self { doctors })
    }

    /// The clinic's standing roster.
    pub fn seeded() -> Self {
        Self {
            doctors: vec![
                Doctor::new(1, "Dr. A. Sharma", "Cardiologist", 800),
                Doctor::new(2, "Dr. B. Singh", "Dermatologist", 500),
                Doctor::new(3, "Dr. C. Patel", "Pediatrician", 600),
                Doctor::new(4, "Dr. D. Mehta", "General Physician", 400),
            ],
        }
    }

    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn fee_for(&self, id: i64) -> Result<u32, DoctorError> {
        self.find_by_id(id)
            .map(|d| d.fee)
            .ok_or(DoctorError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

impl Default for DoctorRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}
