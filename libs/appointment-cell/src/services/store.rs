use tracing::{debug, info, warn};

use shared_database::KeyValueStore;

use crate::models::{Appointment, LoadOutcome, StoreError};

/// The session's appointments, mirrored into a durable key-value slot.
///
/// The slot holds the whole list as one JSON array under `key`. Every append
/// rewrites that array in full.
pub struct AppointmentStore {
    slot: Box<dyn KeyValueStore>,
    key: String,
    appointments: Vec<Appointment>,
    last_load: LoadOutcome,
}

impl AppointmentStore {
    /// An empty store bound to `slot`. Nothing is read until `load()`.
    pub fn new(slot: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
            appointments: Vec::new(),
            last_load: LoadOutcome::Fresh,
        }
    }

    /// `new` followed by `load`.
    pub fn open(slot: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let mut store = Self::new(slot, key);
        store.load();
        store
    }

    /// Replaces in-memory state with whatever the slot holds.
    ///
    /// Missing or unparseable data leaves the store empty; the returned
    /// outcome says which of the two happened.
    pub fn load(&mut self) -> LoadOutcome {
        let outcome = match self.slot.get(&self.key) {
            Ok(None) => {
                self.appointments = Vec::new();
                LoadOutcome::Fresh
            }
            Ok(Some(blob)) if blob.trim().is_empty() => {
                self.appointments = Vec::new();
                LoadOutcome::Fresh
            }
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Appointment>>(&blob) {
                Ok(appointments) => {
                    let count = appointments.len();
                    self.appointments = appointments;
                    LoadOutcome::Restored { count }
                }
                Err(e) => {
                    warn!("Discarding unparseable appointments under '{}': {}", self.key, e);
                    self.appointments = Vec::new();
                    LoadOutcome::Corrupted { reason: e.to_string() }
                }
            },
            Err(e) => {
                warn!("Could not read appointments under '{}': {}", self.key, e);
                self.appointments = Vec::new();
                LoadOutcome::Corrupted { reason: e.to_string() }
            }
        };

        info!("Loaded appointment store: {:?}", outcome);
        self.last_load = outcome.clone();
        outcome
    }

    /// Appends and persists the full list.
    ///
    /// If the write fails the appointment is removed again, so memory never
    /// runs ahead of the slot.
    pub fn append(&mut self, appointment: Appointment) -> Result<(), StoreError> {
        self.appointments.push(appointment);

        if let Err(e) = self.persist() {
            self.appointments.pop();
            warn!("Rolled back appointment after failed write: {}", e);
            return Err(e);
        }

        debug!("Appointment store now holds {} appointments", self.appointments.len());
        Ok(())
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.appointments)?;
        self.slot.set(&self.key, &blob)?;
        Ok(())
    }

    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Appointments whose `date` equals `date` character for character.
    pub fn count_for_date(&self, date: &str) -> usize {
        self.appointments.iter().filter(|a| a.date == date).count()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn last_id(&self) -> Option<i64> {
        self.appointments.last().map(|a| a.id)
    }

    /// `now_millis`, bumped past the newest id when the clock has not moved on.
    pub fn next_id(&self, now_millis: i64) -> Result<i64, StoreError> {
        match self.appointments.iter().map(|a| a.id).max() {
            Some(max) if now_millis <= max => max
                .checked_add(1)
                .ok_or(StoreError::IdsExhausted { last: max }),
            _ => Ok(now_millis),
        }
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.last_load
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
