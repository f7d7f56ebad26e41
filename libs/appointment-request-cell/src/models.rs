use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SubmissionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low - Mild symptoms",
            Severity::Medium => "Medium - Moderate concern",
            Severity::High => "High - Urgent attention needed",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(UnknownSeverity(other.to_string())),
        }
    }
}

/// In-progress form input. Everything is raw until validation turns it
/// into an [`AppointmentRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentDraft {
    pub patient_name: String,
    pub phone_number: String,
    pub symptoms: String,
    pub severity: Option<String>,
    pub appointment_date: Option<NaiveDate>,
}

impl AppointmentDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A validated appointment record, the payload handed to a submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_name: String,
    pub phone_number: String,
    pub symptoms: String,
    pub severity: Severity,
    pub appointment_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    PatientName,
    PhoneNumber,
    Symptoms,
    Severity,
    AppointmentDate,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PatientName => "patientName",
            Field::PhoneNumber => "phoneNumber",
            Field::Symptoms => "symptoms",
            Field::Severity => "severity",
            Field::AppointmentDate => "appointmentDate",
        }
    }
}

/// Field-scoped validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.as_str(), message)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub call_id: Option<String>,
    pub message: String,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent and the form never went busy.
    Invalid(ValidationErrors),
    /// A submission is already in flight for this dialog session.
    AlreadySubmitting,
    Submitted(SubmissionReceipt),
    Failed(SubmissionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub draft: AppointmentDraft,
    pub errors: ValidationErrors,
    pub is_submitting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Success,
    Destructive,
}

/// A transient toast shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn booking_confirmed() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Appointment Booked Successfully! 🎉".to_string(),
            description: "Our team will call you shortly to confirm your appointment.".to_string(),
            variant: NotificationVariant::Success,
        }
    }

    pub fn booking_failed(error: &SubmissionError) -> Self {
        let (title, description) = error.user_message();
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Destructive,
        }
    }
}

/// Outcome of triggering the outbound confirmation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCall {
    pub status: String,
    pub call_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    pub message: String,
    pub call_id: Option<String>,
    pub patient_name: String,
    pub phone: String,
}
