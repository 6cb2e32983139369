use serde::{Deserialize, Serialize};

use crate::models::profile::UserSummary;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Fulfilled,
    Rejected,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Fulfilled => "Fulfilled",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Urgency {
    Normal,
    Urgent,
    Emergency,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Normal, Urgency::Urgent, Urgency::Emergency];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Normal => "Normal",
            Urgency::Urgent => "Urgent",
            Urgency::Emergency => "Emergency",
        }
    }
}

/// Unit reference embedded in a fulfilled request.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignedUnit {
    #[serde(rename = "_id")]
    pub id: String,
    pub unit_id: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub blood_group: String,
    pub component_type: String,
    pub quantity: u32,
    pub urgency: Urgency,
    pub status: RequestStatus,
    #[serde(default)]
    pub request_date: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub hospital: Option<UserSummary>,
    #[serde(default)]
    pub doctor: Option<UserSummary>,
    #[serde(default)]
    pub assigned_units: Vec<AssignedUnit>,
}

/// POST /api/blood-requests body.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewBloodRequest {
    pub blood_group: String,
    pub component_type: String,
    pub quantity: u32,
    pub urgency: Urgency,
    pub notes: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub doctor_id: String,
}

impl NewBloodRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.quantity == 0 {
            return Err("Quantity must be at least 1 unit.".to_string());
        }
        Ok(())
    }
}

/// PUT .../status body, shared by requests and appointments.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StatusUpdate {
    pub status: String,
}

/// PUT /api/blood-requests/:id/fulfill body.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FulfillRequest {
    pub assigned_unit_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names_match_the_backend() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Fulfilled).unwrap(),
            "\"Fulfilled\""
        );
        let parsed: RequestStatus = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(parsed, RequestStatus::Pending);
    }

    #[test]
    fn empty_doctor_is_omitted_from_the_body() {
        let req = NewBloodRequest {
            blood_group: "A+".into(),
            component_type: "Plasma".into(),
            quantity: 2,
            urgency: Urgency::Urgent,
            notes: String::new(),
            doctor_id: String::new(),
        };
        let body = serde_json::to_string(&req).unwrap();
        assert!(!body.contains("doctorId"));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let req = NewBloodRequest {
            blood_group: "A+".into(),
            component_type: "Whole Blood".into(),
            quantity: 0,
            urgency: Urgency::Normal,
            notes: String::new(),
            doctor_id: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
