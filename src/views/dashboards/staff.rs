// ============================================================================
// BLOOD BANK STAFF DASHBOARD - Request triage + appointment handling
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_input, on_submit, set_inner_html, set_text_content, ElementBuilder};
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::request::{BloodRequest, RequestStatus};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::dashboards::handle_action_error;
use crate::views::widgets::{dashboard_container, flash_status, section, short_id, status_badge, status_banner, table_with_headers, td};

const STAFF_STATUS_ID: &str = "staff-status";

pub fn render_staff_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let (container, card) = dashboard_container("Blood Bank Staff Dashboard")?;

    let user_id = state.session.get().map(|s| s.user.id).unwrap_or_default();
    append_child(&card, &ElementBuilder::new("p")?
        .class("dashboard-welcome")
        .html(&format!("Welcome, Blood Bank Staff! Your User ID: <span class=\"mono\">{}</span>", user_id))
        .build())?;
    append_child(&card, &status_banner(STAFF_STATUS_ID)?)?;

    let (requests_section, requests_body) = section("All Blood Requests")?;
    set_text_content(&requests_body, "Loading staff data...");
    append_child(&card, &requests_section)?;

    let (appointments_section, appointments_body) = section("All Appointments")?;
    set_text_content(&appointments_body, "Loading appointments...");
    append_child(&card, &appointments_section)?;

    let refresh = Refresh {
        state: state.clone(),
        requests_body,
        appointments_body,
        container: container.clone(),
    };
    refresh.run();

    Ok(container)
}

/// Handles for the two lists so actions can refetch everything wholesale.
#[derive(Clone)]
struct Refresh {
    state: AppState,
    requests_body: Element,
    appointments_body: Element,
    container: Element,
}

impl Refresh {
    fn run(&self) {
        let this = self.clone();
        spawn_local(async move {
            let Some(token) = this.state.session.token() else {
                set_text_content(&this.requests_body, "Authentication token missing. Please log in.");
                return;
            };
            let api = ApiClient::new();

            match api.fetch_all_requests(&token).await {
                Ok(requests) => {
                    if let Err(e) = this.fill_requests(&requests) {
                        log::error!("❌ Error rendering requests: {:?}", e);
                    }
                }
                Err(e) => {
                    if e.is_auth() {
                        handle_action_error(&this.state, &e, STAFF_STATUS_ID);
                        return;
                    }
                    set_text_content(&this.requests_body, &format!("Error: {}", e));
                }
            }

            match api.fetch_all_appointments(&token).await {
                Ok(appointments) => {
                    if let Err(e) = this.fill_appointments(&appointments) {
                        log::error!("❌ Error rendering appointments: {:?}", e);
                    }
                }
                Err(e) => {
                    set_text_content(&this.appointments_body, &format!("Error: {}", e));
                }
            }
        });
    }

    fn fill_requests(&self, requests: &[BloodRequest]) -> Result<(), JsValue> {
        set_inner_html(&self.requests_body, "");
        if requests.is_empty() {
            set_text_content(&self.requests_body, "No blood requests found.");
            return Ok(());
        }
        let (table, tbody) = table_with_headers(&[
            "Request ID", "Hospital", "Doctor", "Blood Type", "Quantity", "Urgency", "Status", "Actions",
        ])?;
        for req in requests {
            let row = ElementBuilder::new("tr")?.build();
            append_child(&row, &td(&short_id(&req.id))?)?;
            let hospital = req
                .hospital
                .as_ref()
                .map(|h| format!("{} ({})", h.first_name, h.email))
                .unwrap_or_else(|| "N/A".to_string());
            append_child(&row, &td(&hospital)?)?;
            let doctor = req
                .doctor
                .as_ref()
                .map(|d| format!("{} ({})", d.first_name, d.email))
                .unwrap_or_else(|| "N/A".to_string());
            append_child(&row, &td(&doctor)?)?;
            append_child(&row, &td(&format!("{} ({})", req.blood_group, req.component_type))?)?;
            append_child(&row, &td(&req.quantity.to_string())?)?;
            append_child(&row, &td(req.urgency.as_str())?)?;
            let status_cell = ElementBuilder::new("td")?.build();
            append_child(&status_cell, &status_badge(req.status.as_str())?)?;
            append_child(&row, &status_cell)?;

            let actions = ElementBuilder::new("td")?.class("action-cell").build();
            match req.status {
                RequestStatus::Pending => {
                    self.add_status_action(&actions, &req.id, "Approved", "Approve", "btn-small btn-info")?;
                    self.add_status_action(&actions, &req.id, "Rejected", "Reject", "btn-small btn-danger")?;
                    self.add_status_action(&actions, &req.id, "Cancelled", "Cancel", "btn-small btn-muted")?;
                }
                RequestStatus::Approved => {
                    self.add_fulfill_action(&actions, req)?;
                    self.add_status_action(&actions, &req.id, "Cancelled", "Cancel", "btn-small btn-muted")?;
                }
                _ => {}
            }
            append_child(&row, &actions)?;
            append_child(&tbody, &row)?;
        }
        append_child(&self.requests_body, &table)?;
        Ok(())
    }

    fn fill_appointments(&self, appointments: &[Appointment]) -> Result<(), JsValue> {
        set_inner_html(&self.appointments_body, "");
        if appointments.is_empty() {
            set_text_content(&self.appointments_body, "No appointments found.");
            return Ok(());
        }
        let (table, tbody) = table_with_headers(&[
            "Donor", "Date & Time", "Blood Bank", "Blood Group", "Status", "Actions",
        ])?;
        for app in appointments {
            let row = ElementBuilder::new("tr")?.build();
            let donor = app
                .donor
                .as_ref()
                .map(|d| format!("{} ({})", d.first_name, d.email))
                .unwrap_or_else(|| "N/A".to_string());
            append_child(&row, &td(&donor)?)?;
            append_child(&row, &td(&app.appointment_date)?)?;
            let bank = app
                .blood_bank
                .as_ref()
                .map(|b| b.name.clone())
                .unwrap_or_else(|| "N/A".to_string());
            append_child(&row, &td(&bank)?)?;
            append_child(&row, &td(app.blood_group.as_deref().unwrap_or("Not specified"))?)?;
            let status_cell = ElementBuilder::new("td")?.build();
            append_child(&status_cell, &status_badge(app.status.as_str())?)?;
            append_child(&row, &status_cell)?;

            let actions = ElementBuilder::new("td")?.class("action-cell").build();
            if app.status == AppointmentStatus::Scheduled {
                self.add_appointment_action(&actions, &app.id, "Completed", "Mark Complete", "btn-small btn-ok")?;
                self.add_appointment_action(&actions, &app.id, "Cancelled", "Cancel", "btn-small btn-danger")?;
            }
            append_child(&row, &actions)?;
            append_child(&tbody, &row)?;
        }
        append_child(&self.appointments_body, &table)?;
        Ok(())
    }

    fn add_status_action(
        &self,
        cell: &Element,
        request_id: &str,
        new_status: &'static str,
        label: &str,
        class: &str,
    ) -> Result<(), JsValue> {
        let button = ElementBuilder::new("button")?.class(class).text(label).build();
        let this = self.clone();
        let request_id = request_id.to_string();
        on_click(&button, move |_| {
            this.update_request_status(request_id.clone(), new_status);
        })?;
        append_child(cell, &button)
    }

    fn update_request_status(&self, request_id: String, new_status: &'static str) {
        let this = self.clone();
        flash_status(STAFF_STATUS_ID, "Updating request status...");
        spawn_local(async move {
            let Some(token) = this.state.session.token() else { return };
            let api = ApiClient::new();
            match api.update_request_status(&token, &request_id, new_status).await {
                Ok(()) => {
                    flash_status(STAFF_STATUS_ID, &format!("Request status updated to {}!", new_status));
                    this.run();
                }
                Err(e) => handle_action_error(&this.state, &e, STAFF_STATUS_ID),
            }
        });
    }

    fn add_appointment_action(
        &self,
        cell: &Element,
        appointment_id: &str,
        new_status: &'static str,
        label: &str,
        class: &str,
    ) -> Result<(), JsValue> {
        let button = ElementBuilder::new("button")?.class(class).text(label).build();
        let this = self.clone();
        let appointment_id = appointment_id.to_string();
        on_click(&button, move |_| {
            let this = this.clone();
            let appointment_id = appointment_id.clone();
            flash_status(STAFF_STATUS_ID, "Updating appointment status...");
            spawn_local(async move {
                let Some(token) = this.state.session.token() else { return };
                let api = ApiClient::new();
                match api.update_appointment_status(&token, &appointment_id, new_status).await {
                    Ok(()) => {
                        flash_status(STAFF_STATUS_ID, &format!("Appointment status updated to {}!", new_status));
                        this.run();
                    }
                    Err(e) => handle_action_error(&this.state, &e, STAFF_STATUS_ID),
                }
            });
        })?;
        append_child(cell, &button)
    }

    fn add_fulfill_action(&self, cell: &Element, req: &BloodRequest) -> Result<(), JsValue> {
        let button = ElementBuilder::new("button")?
            .class("btn-small btn-ok")
            .text("Fulfill")
            .build();
        let this = self.clone();
        let req = req.clone();
        on_click(&button, move |_| {
            match build_fulfill_modal(&this, &req) {
                Ok(modal) => {
                    let _ = this.container.append_child(&modal);
                }
                Err(e) => log::error!("❌ Error opening fulfill modal: {:?}", e),
            }
        })?;
        append_child(cell, &button)
    }
}

/// Modal asking for comma-separated unit ids to assign to the request.
fn build_fulfill_modal(refresh: &Refresh, req: &BloodRequest) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    let modal = ElementBuilder::new("div")?.class("modal").build();

    let close = ElementBuilder::new("button")?.class("modal-close").html("&times;").build();
    {
        let overlay = overlay.clone();
        on_click(&close, move |_| overlay.remove())?;
    }
    append_child(&modal, &close)?;

    append_child(&modal, &ElementBuilder::new("h3")?
        .text(&format!("Fulfill Request (ID: {})", short_id(&req.id)))
        .build())?;
    append_child(&modal, &ElementBuilder::new("p")?
        .html(&format!(
            "<strong>Requested:</strong> {} ({}) - {} Units",
            req.blood_group, req.component_type, req.quantity
        ))
        .build())?;
    let hospital_email = req
        .hospital
        .as_ref()
        .map(|h| h.email.clone())
        .unwrap_or_else(|| "N/A".to_string());
    append_child(&modal, &ElementBuilder::new("p")?
        .html(&format!("<strong>Hospital:</strong> {}", hospital_email))
        .build())?;

    let form = ElementBuilder::new("form")?.build();
    let field = ElementBuilder::new("div")?.class("form-field").build();
    append_child(&field, &ElementBuilder::new("label")?
        .class("form-label")
        .text("Assigned Blood Unit IDs (comma-separated)")
        .build())?;
    let area = ElementBuilder::new("textarea")?
        .class("form-input")
        .attr("rows", "3")?
        .attr("placeholder", "e.g., 65c8a..., 65c8b...")?
        .build();
    append_child(&field, &area)?;
    append_child(&form, &field)?;

    let unit_ids = Rc::new(RefCell::new(String::new()));
    {
        let unit_ids = unit_ids.clone();
        on_input(&area, move |v| *unit_ids.borrow_mut() = v)?;
    }

    let submit = ElementBuilder::new("button")?
        .class("btn btn-secondary btn-block")
        .attr("type", "submit")?
        .text("Fulfill Request")
        .build();
    append_child(&form, &submit)?;

    {
        let refresh = refresh.clone();
        let request_id = req.id.clone();
        let overlay = overlay.clone();
        on_submit(&form, move || {
            let ids: Vec<String> = unit_ids
                .borrow()
                .split(',')
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect();
            if ids.is_empty() {
                flash_status(STAFF_STATUS_ID, "Error: Please select a request and provide unit IDs.");
                return;
            }
            overlay.remove();
            let refresh = refresh.clone();
            let request_id = request_id.clone();
            flash_status(STAFF_STATUS_ID, "Fulfilling request...");
            spawn_local(async move {
                let Some(token) = refresh.state.session.token() else { return };
                let api = ApiClient::new();
                match api.fulfill_request(&token, &request_id, ids).await {
                    Ok(()) => {
                        flash_status(STAFF_STATUS_ID, "Request fulfilled successfully!");
                        refresh.run();
                    }
                    Err(e) => handle_action_error(&refresh.state, &e, STAFF_STATUS_ID),
                }
            });
        })?;
    }

    append_child(&modal, &form)?;
    append_child(&overlay, &modal)?;
    Ok(overlay)
}
