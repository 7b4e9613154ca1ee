use std::path::{Path, PathBuf};
use std::sync::Arc;
use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};

use shared_config::AppConfig;

use crate::clock::{format_iso_date, FixedClock};

pub struct TestConfig {
    pub bind_address: String,
    pub storage_path: PathBuf,
    pub storage_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:0".to_string(),
            storage_path: PathBuf::from("target/test-storage/local_storage.json"),
            storage_key: "appointments".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_storage_path(path: &Path) -> Self {
        Self {
            storage_path: path.to_path_buf(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            bind_address: self.bind_address.clone(),
            storage_path: self.storage_path.clone(),
            storage_key: self.storage_key.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// The calendar day most tests treat as "today".
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap_or_default()
}

pub fn test_clock() -> FixedClock {
    FixedClock::on(test_today())
}

/// `test_today()` shifted by `days`, formatted as `yyyy-mm-dd`.
pub fn date_offset(days: i64) -> String {
    format_iso_date(test_today() + Duration::days(days))
}

pub struct FormFixtures;

impl FormFixtures {
    pub fn booking_form(patient_name: &str, doctor_id: &str, date: &str) -> Value {
        json!({
            "patientName": patient_name,
            "doctorId": doctor_id,
            "date": date,
            "hour": "9",
            "minute": "00",
            "meridiem": "AM"
        })
    }

    pub fn empty_form() -> Value {
        json!({
            "patientName": "",
            "doctorId": "",
            "date": "",
            "hour": "",
            "minute": "",
            "meridiem": ""
        })
    }
}

pub struct StoredFixtures;

impl StoredFixtures {
    pub fn appointment(id: i64, patient_name: &str, doctor_id: i64, date: &str, time: &str) -> Value {
        json!({
            "id": id,
            "patientName": patient_name,
            "doctorId": doctor_id,
            "date": date,
            "time": time
        })
    }

    /// Serialized appointment list as it sits in the durable slot.
    pub fn blob(appointments: &[Value]) -> String {
        Value::Array(appointments.to_vec()).to_string()
    }
}
