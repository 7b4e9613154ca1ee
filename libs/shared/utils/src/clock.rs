use chrono::{Local, NaiveDate, Utc};

/// Source of "now" for date validation, statistics and id allocation.
pub trait Clock: Send + Sync {
    /// Current calendar day in the host's local timezone.
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    fn today_string(&self) -> String {
        format_iso_date(self.today())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
    now_millis: i64,
}

impl FixedClock {
    pub fn new(today: NaiveDate, now_millis: i64) -> Self {
        Self { today, now_millis }
    }

    /// Noon UTC on `today`.
    pub fn on(today: NaiveDate) -> Self {
        let now_millis = today
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self::new(today, now_millis)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_millis(&self) -> i64 {
        self.now_millis
    }
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
