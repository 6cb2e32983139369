use serde::{Deserialize, Serialize};

use crate::models::auth::Role;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistory {
    #[serde(default)]
    pub has_chronic_illness: bool,
    #[serde(default)]
    pub recent_travel_to_risk_area: bool,
    #[serde(default)]
    pub recent_surgery: bool,
    #[serde(default)]
    pub on_medication: bool,
    #[serde(default)]
    pub notes: String,
}

/// Profile document returned by GET /api/profile/me. Nullable fields stay
/// optional because older accounts predate the eligibility questionnaire.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub last_donation_date: Option<String>,
    #[serde(default)]
    pub medical_history: Option<MedicalHistory>,
    #[serde(default)]
    pub eligibility_status: Option<String>,
}

/// PUT /api/profile/me body (basic fields only).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub address: Address,
}

/// PUT /api/profile/eligibility body.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityUpdate {
    pub blood_type: String,
    pub last_donation_date: String,
    pub medical_history: MedicalHistory,
}

/// Wrapper the profile mutation endpoints use: `{ "user": {...} }`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

/// Slim user record from GET /api/users?role= (doctor dropdowns etc).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}
