use serde::{Deserialize, Serialize};

use crate::models::profile::UserSummary;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// Blood bank reference embedded in an appointment.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentBank {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    pub appointment_date: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub donor: Option<UserSummary>,
    #[serde(default)]
    pub blood_bank: Option<AppointmentBank>,
}

/// POST /api/appointments body.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub blood_bank: String,
    pub appointment_date: String,
    pub blood_group: String,
    pub notes: String,
}

impl NewAppointment {
    pub fn validate(&self) -> Result<(), String> {
        if self.blood_bank.is_empty() {
            return Err("Please select a blood bank.".to_string());
        }
        if self.appointment_date.is_empty() {
            return Err("Please pick an appointment date.".to_string());
        }
        Ok(())
    }
}
