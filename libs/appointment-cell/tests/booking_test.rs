// libs/appointment-cell/tests/booking_test.rs

use std::sync::Arc;

use assert_matches::assert_matches;

use appointment_cell::models::{
    AppointmentError, BookingField, BookingForm, BookingOutcome, FieldErrorKind, StoreError, BOOKED_BANNER,
};
use appointment_cell::services::{AppointmentStore, BookingService};
use doctor_cell::DoctorRegistry;
use shared_database::MemoryKeyValueStore;
use shared_utils::test_utils::{date_offset, test_clock, StoredFixtures};
use shared_utils::{Clock, FixedClock};

fn desk_with(slot: MemoryKeyValueStore) -> BookingService {
    BookingService::new(
        Arc::new(DoctorRegistry::seeded()),
        Arc::new(test_clock()),
        AppointmentStore::open(Box::new(slot), "appointments"),
    )
}

fn desk() -> BookingService {
    desk_with(MemoryKeyValueStore::new())
}

fn form(patient_name: &str, doctor_id: &str, date: &str) -> BookingForm {
    BookingForm {
        patient_name: patient_name.to_string(),
        doctor_id: doctor_id.to_string(),
        date: date.to_string(),
        hour: "9".to_string(),
        minute: "00".to_string(),
        meridiem: "AM".to_string(),
    }
}

#[test]
fn booking_asha_tomorrow_appends_formatted_appointment() {
    let mut desk = desk();
    let before = desk.stats();

    let outcome = desk.submit(&form("Asha", "2", &date_offset(1))).unwrap();

    assert_matches!(outcome, BookingOutcome::Booked { appointment, banner } => {
        assert_eq!(appointment.patient_name, "Asha");
        assert_eq!(appointment.doctor_id, 2);
        assert_eq!(appointment.date, "2026-03-15");
        assert_eq!(appointment.time, "9:00 AM");
        assert_eq!(appointment.id, test_clock().now_millis());
        assert_eq!(banner, BOOKED_BANNER);
    });

    let after = desk.stats();
    assert_eq!(after.total_appointments, before.total_appointments + 1);
    assert_eq!(after.total_appointments, desk.store().all().len());
    assert_eq!(after.total_doctors, desk.registry().all().len());
}

#[test]
fn rejected_form_leaves_store_untouched() {
    let mut desk = desk();

    let outcome = desk.submit(&form("", "", &date_offset(1))).unwrap();

    assert_matches!(outcome, BookingOutcome::Rejected { errors } => {
        assert!(errors.contains(BookingField::PatientName));
        assert!(errors.contains(BookingField::DoctorId));
    });
    assert!(desk.store().is_empty());
    assert_eq!(desk.stats().total_appointments, 0);
}

#[test]
fn past_date_is_rejected_on_date_only() {
    let mut desk = desk();

    let outcome = desk.submit(&form("Asha", "2", &date_offset(-1))).unwrap();

    assert_matches!(outcome, BookingOutcome::Rejected { errors } => {
        assert_eq!(errors.fields(), vec![BookingField::Date]);
        assert_eq!(errors.kind_of(BookingField::Date), Some(FieldErrorKind::PastDate));
    });
}

#[test]
fn same_slot_can_be_booked_twice_with_distinct_ids() {
    let mut desk = desk();

    desk.submit(&form("Asha", "2", &date_offset(1))).unwrap();
    desk.submit(&form("Ravi", "2", &date_offset(1))).unwrap();

    let all = desk.store().all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].time, all[1].time);
    assert!(all[1].id > all[0].id);
}

#[test]
fn stats_count_today_only() {
    let mut desk = desk();

    desk.submit(&form("Asha", "1", &date_offset(0))).unwrap();
    desk.submit(&form("Ravi", "2", &date_offset(0))).unwrap();
    desk.submit(&form("Meera", "3", &date_offset(2))).unwrap();

    let stats = desk.stats();
    assert_eq!(stats.total_doctors, 4);
    assert_eq!(stats.total_appointments, 3);
    assert_eq!(stats.today_appointments, 2);
    assert_eq!(desk.count_for_date(&date_offset(2)), 1);
}

#[test]
fn stats_follow_the_clock() {
    let slot = MemoryKeyValueStore::new().with_entry(
        "appointments",
        &StoredFixtures::blob(&[StoredFixtures::appointment(1, "Asha", 2, "2026-03-20", "9:00 AM")]),
    );
    let desk = BookingService::new(
        Arc::new(DoctorRegistry::seeded()),
        Arc::new(FixedClock::on(chrono::NaiveDate::from_ymd_opt(2026, 3, 20).unwrap())),
        AppointmentStore::open(Box::new(slot), "appointments"),
    );

    assert_eq!(desk.stats().today_appointments, 1);
}

#[test]
fn rows_resolve_doctors_and_mark_unknown_ones() {
    let slot = MemoryKeyValueStore::new().with_entry(
        "appointments",
        &StoredFixtures::blob(&[
            StoredFixtures::appointment(1, "Asha", 2, "2026-03-15", "9:00 AM"),
            StoredFixtures::appointment(2, "Ravi", 42, "2026-03-16", "10:30 AM"),
        ]),
    );
    let desk = desk_with(slot);

    let rows = desk.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].doctor_name, "Dr. B. Singh");
    assert_eq!(rows[0].specialization, "Dermatologist");
    assert_eq!(rows[1].doctor_name, "Unknown");
    assert_eq!(rows[1].specialization, "-");
    assert_eq!(rows[1].time, "10:30 AM");
}

#[test]
fn failed_write_surfaces_persistence_error() {
    let mut desk = desk_with(MemoryKeyValueStore::with_quota(8));

    let result = desk.submit(&form("Asha", "2", &date_offset(1)));

    assert_matches!(result, Err(AppointmentError::Persistence(_)));
    assert!(desk.store().is_empty());
}

#[test]
fn form_options_list_selectable_values() {
    let options = desk().form_options();

    assert_eq!(options.hours.first().map(String::as_str), Some("1"));
    assert_eq!(options.hours.last().map(String::as_str), Some("12"));
    assert_eq!(options.hours.len(), 12);
    assert_eq!(options.minutes.len(), 12);
    assert_eq!(options.minutes[0], "00");
    assert_eq!(options.minutes[1], "05");
    assert_eq!(options.minutes[11], "55");
    assert_eq!(options.meridiems, vec!["AM", "PM"]);
    assert_eq!(options.min_date, "2026-03-14");
}

#[test]
fn exhausted_id_space_fails_the_booking_without_panicking() {
    let slot = MemoryKeyValueStore::new().with_entry(
        "appointments",
        &StoredFixtures::blob(&[StoredFixtures::appointment(i64::MAX, "Asha", 2, "2026-03-15", "9:00 AM")]),
    );
    let mut desk = desk_with(slot);

    let result = desk.submit(&form("Ravi", "2", &date_offset(1)));

    assert_matches!(result, Err(AppointmentError::Persistence(StoreError::IdsExhausted { .. })));
    assert_eq!(desk.store().len(), 1);
}
