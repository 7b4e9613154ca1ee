use chrono::NaiveDate;

use crate::models::{
    BookingCommand, BookingField, BookingForm, FieldErrorKind, FieldErrors, Meridiem,
    SlotTime, ValidationResult,
};

/// Checks every field of `form` independently and either builds the typed
/// command or reports all failing fields at once.
///
/// `today` is the local calendar day; dates before it are rejected. The time
/// of day is not compared, so a same-day slot that has already passed is
/// accepted.
pub fn validate_booking(form: &BookingForm, today: NaiveDate) -> ValidationResult {
    let mut errors = FieldErrors::new();

    let patient_name = form.patient_name.trim();
    if patient_name.is_empty() {
        errors.insert(BookingField::PatientName, FieldErrorKind::Required);
    }

    let doctor_id = match check_doctor_id(&form.doctor_id) {
        Ok(id) => Some(id),
        Err(kind) => {
            errors.insert(BookingField::DoctorId, kind);
            None
        }
    };

    let date = match check_date(&form.date, today) {
        Ok(date) => Some(date),
        Err(kind) => {
            errors.insert(BookingField::Date, kind);
            None
        }
    };

    let time = match check_time(&form.hour, &form.minute, &form.meridiem) {
        Ok(time) => Some(time),
        Err(kind) => {
            errors.insert(BookingField::Time, kind);
            None
        }
    };

    match (doctor_id, date, time) {
        (Some(doctor_id), Some(date), Some(time)) if errors.is_empty() => {
            ValidationResult::Valid(BookingCommand {
                patient_name: patient_name.to_string(),
                doctor_id,
                date,
                time,
            })
        }
        _ => ValidationResult::Invalid(errors),
    }
}

fn check_doctor_id(raw: &str) -> Result<i64, FieldErrorKind> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldErrorKind::Required);
    }
    raw.parse::<i64>().map_err(|_| FieldErrorKind::Malformed)
}

fn check_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, FieldErrorKind> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldErrorKind::Required);
    }

    // Exactly `yyyy-mm-dd`; chrono alone would also take "2026-3-5".
    let shape_ok = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(FieldErrorKind::Malformed);
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FieldErrorKind::Malformed)?;
    if date < today {
        return Err(FieldErrorKind::PastDate);
    }
    Ok(date)
}

fn check_time(hour: &str, minute: &str, meridiem: &str) -> Result<SlotTime, FieldErrorKind> {
    let (hour, minute, meridiem) = (hour.trim(), minute.trim(), meridiem.trim());
    if hour.is_empty() || minute.is_empty() || meridiem.is_empty() {
        return Err(FieldErrorKind::Required);
    }

    // Minutes come from a two-digit select ("00", "05", ...).
    if minute.len() != 2 || !is_digits(hour) || !is_digits(minute) {
        return Err(FieldErrorKind::Malformed);
    }

    let hour = hour.parse::<u8>().map_err(|_| FieldErrorKind::Malformed)?;
    let minute = minute.parse::<u8>().map_err(|_| FieldErrorKind::Malformed)?;
    let meridiem = meridiem.parse::<Meridiem>().map_err(|_| FieldErrorKind::Malformed)?;

    SlotTime::new(hour, minute, meridiem).ok_or(FieldErrorKind::Malformed)
}

fn is_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}
