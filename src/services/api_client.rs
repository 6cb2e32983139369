// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================
// No business logic here, just requests against the REST backend. Protected
// endpoints carry the session token in the x-auth-token header; the backend
// re-authorizes every call regardless of what the client decoded locally.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::error::ApiError;
use crate::models::appointment::{Appointment, NewAppointment};
use crate::models::auth::{ApiMessage, LoginRequest, LoginResponse, RegisterRequest, Role};
use crate::models::blood_bank::{BloodBank, NewBloodBank};
use crate::models::blood_unit::{BloodUnit, InventorySummary, NewBloodUnit};
use crate::models::profile::{EligibilityUpdate, ProfileResponse, ProfileUpdate, UserProfile, UserSummary};
use crate::models::request::{BloodRequest, FulfillRequest, NewBloodRequest, StatusUpdate};
use crate::utils::BACKEND_URL;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&self.url("/api/auth/login"))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check(response).await?;
        parse_json(&response).await
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<ApiMessage, ApiError> {
        let response = Request::post(&self.url("/api/auth/register"))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check(response).await?;
        parse_json(&response).await
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.get_authed("/api/profile/me", token).await
    }

    pub async fn update_profile(
        &self,
        token: &str,
        body: &ProfileUpdate,
    ) -> Result<ProfileResponse, ApiError> {
        self.put_authed("/api/profile/me", token, body).await
    }

    pub async fn update_eligibility(
        &self,
        token: &str,
        body: &EligibilityUpdate,
    ) -> Result<ProfileResponse, ApiError> {
        self.put_authed("/api/profile/eligibility", token, body).await
    }

    pub async fn fetch_users_by_role(
        &self,
        token: &str,
        role: Role,
    ) -> Result<Vec<UserSummary>, ApiError> {
        self.get_authed(&format!("/api/users?role={}", role.as_str()), token)
            .await
    }

    // ------------------------------------------------------------------
    // Blood units & inventory
    // ------------------------------------------------------------------

    pub async fn fetch_blood_units(&self, token: &str) -> Result<Vec<BloodUnit>, ApiError> {
        self.get_authed("/api/blood-units", token).await
    }

    pub async fn add_blood_unit(
        &self,
        token: &str,
        body: &NewBloodUnit,
    ) -> Result<(), ApiError> {
        self.post_authed("/api/blood-units", token, body).await
    }

    /// Aggregated available-unit counts per blood group. Public endpoint.
    pub async fn fetch_inventory_summary(&self) -> Result<Vec<InventorySummary>, ApiError> {
        let response = Request::get(&self.url("/api/blood-units/inventory-summary"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check(response).await?;
        parse_json(&response).await
    }

    // ------------------------------------------------------------------
    // Blood banks
    // ------------------------------------------------------------------

    /// Public listing used by donor appointment booking and admin forms.
    pub async fn fetch_blood_banks(&self) -> Result<Vec<BloodBank>, ApiError> {
        let response = Request::get(&self.url("/api/blood-banks"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check(response).await?;
        parse_json(&response).await
    }

    pub async fn add_blood_bank(
        &self,
        token: &str,
        body: &NewBloodBank,
    ) -> Result<(), ApiError> {
        self.post_authed("/api/blood-banks", token, body).await
    }

    // ------------------------------------------------------------------
    // Blood requests
    // ------------------------------------------------------------------

    pub async fn fetch_all_requests(&self, token: &str) -> Result<Vec<BloodRequest>, ApiError> {
        self.get_authed("/api/blood-requests", token).await
    }

    pub async fn fetch_my_requests(&self, token: &str) -> Result<Vec<BloodRequest>, ApiError> {
        self.get_authed("/api/blood-requests/my", token).await
    }

    pub async fn create_request(
        &self,
        token: &str,
        body: &NewBloodRequest,
    ) -> Result<(), ApiError> {
        self.post_authed("/api/blood-requests", token, body).await
    }

    pub async fn update_request_status(
        &self,
        token: &str,
        request_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let path = format!("/api/blood-requests/{}/status", request_id);
        let body = StatusUpdate { status: status.to_string() };
        self.put_authed_ack(&path, token, &body).await
    }

    pub async fn fulfill_request(
        &self,
        token: &str,
        request_id: &str,
        assigned_unit_ids: Vec<String>,
    ) -> Result<(), ApiError> {
        let path = format!("/api/blood-requests/{}/fulfill", request_id);
        let body = FulfillRequest { assigned_unit_ids };
        self.put_authed_ack(&path, token, &body).await
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    pub async fn fetch_all_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError> {
        self.get_authed("/api/appointments", token).await
    }

    pub async fn fetch_my_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError> {
        self.get_authed("/api/appointments/my", token).await
    }

    pub async fn create_appointment(
        &self,
        token: &str,
        body: &NewAppointment,
    ) -> Result<(), ApiError> {
        self.post_authed("/api/appointments", token, body).await
    }

    pub async fn update_appointment_status(
        &self,
        token: &str,
        appointment_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let path = format!("/api/appointments/{}/status", appointment_id);
        let body = StatusUpdate { status: status.to_string() };
        self.put_authed_ack(&path, token, &body).await
    }

    // ------------------------------------------------------------------
    // Shared request plumbing
    // ------------------------------------------------------------------

    async fn get_authed<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, ApiError> {
        let response = authed(Request::get(&self.url(path)), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check(response).await?;
        parse_json(&response).await
    }

    async fn post_authed<B: serde::Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = authed(Request::post(&self.url(path)), token)
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(response).await.map(|_| ())
    }

    async fn put_authed<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = authed(Request::put(&self.url(path)), token)
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check(response).await?;
        parse_json(&response).await
    }

    async fn put_authed_ack<B: serde::Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = authed(Request::put(&self.url(path)), token)
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(response).await.map(|_| ())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn authed(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("x-auth-token", token)
}

/// Map a non-2xx response to the error taxonomy, pulling the backend's
/// `{ "msg": ... }` body when there is one.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ApiMessage>().await {
        Ok(ApiMessage { msg: Some(msg) }) => msg,
        _ => response.status_text(),
    };
    Err(ApiError::from_status(status, message))
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
