use std::ops::RangeInclusive;

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::models::{AppointmentDraft, AppointmentRequest, Field, Severity, ValidationErrors};

pub const PATIENT_NAME_LENGTH: RangeInclusive<usize> = 2..=100;
pub const PHONE_NUMBER_LENGTH: RangeInclusive<usize> = 10..=15;
pub const SYMPTOMS_LENGTH: RangeInclusive<usize> = 10..=500;

/// Earliest date the booking calendar offers.
pub fn earliest_bookable_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Checks every field of the draft and returns either the typed request or
/// one message per failing field. Lengths are counted in characters.
#[instrument(skip(draft))]
pub fn validate_draft(
    draft: &AppointmentDraft,
    today: NaiveDate,
) -> Result<AppointmentRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_length(
        &mut errors,
        Field::PatientName,
        &draft.patient_name,
        PATIENT_NAME_LENGTH,
        "Name must be at least 2 characters",
        "Name must be at most 100 characters",
    );
    check_length(
        &mut errors,
        Field::PhoneNumber,
        &draft.phone_number,
        PHONE_NUMBER_LENGTH,
        "Please enter a valid phone number",
        "Phone number must be at most 15 characters",
    );
    check_length(
        &mut errors,
        Field::Symptoms,
        &draft.symptoms,
        SYMPTOMS_LENGTH,
        "Please describe your symptoms in detail",
        "Symptoms must be at most 500 characters",
    );

    let severity = match draft.severity.as_deref() {
        None => {
            errors.insert(Field::Severity, "Please select severity level");
            None
        }
        Some(raw) => match raw.parse::<Severity>() {
            Ok(severity) => Some(severity),
            Err(_) => {
                errors.insert(Field::Severity, "Severity must be one of low, medium or high");
                None
            }
        },
    };

    let appointment_date = match draft.appointment_date {
        None => {
            errors.insert(Field::AppointmentDate, "Please select an appointment date");
            None
        }
        Some(date) if date < earliest_bookable_date() => {
            errors.insert(Field::AppointmentDate, "Appointment date must be on or after 1900-01-01");
            None
        }
        Some(date) if date < today => {
            errors.insert(Field::AppointmentDate, "Appointment date cannot be in the past");
            None
        }
        Some(date) => Some(date),
    };

    match (severity, appointment_date) {
        (Some(severity), Some(appointment_date)) if errors.is_empty() => Ok(AppointmentRequest {
            patient_name: draft.patient_name.clone(),
            phone_number: draft.phone_number.clone(),
            symptoms: draft.symptoms.clone(),
            severity,
            appointment_date,
        }),
        _ => {
            debug!("Draft rejected with {} field errors", errors.len());
            Err(errors)
        }
    }
}

fn check_length(
    errors: &mut ValidationErrors,
    field: Field,
    value: &str,
    bounds: RangeInclusive<usize>,
    too_short: &str,
    too_long: &str,
) {
    let length = value.chars().count();
    if length < *bounds.start() {
        errors.insert(field, too_short);
    } else if length > *bounds.end() {
        errors.insert(field, too_long);
    }
}
