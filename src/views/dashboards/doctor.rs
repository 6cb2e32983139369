// ============================================================================
// DOCTOR DASHBOARD - Requests associated with this doctor
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, set_inner_html, set_text_content, ElementBuilder};
use crate::models::request::BloodRequest;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::dashboards::handle_action_error;
use crate::views::widgets::{dashboard_container, section, short_id, status_badge, status_banner, table_with_headers, td};

const DOCTOR_STATUS_ID: &str = "doctor-status";

pub fn render_doctor_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let (container, card) = dashboard_container("Doctor Dashboard")?;

    let user_id = state.session.get().map(|s| s.user.id).unwrap_or_default();
    append_child(&card, &ElementBuilder::new("p")?
        .class("dashboard-welcome")
        .html(&format!("Welcome, Doctor! Your User ID: <span class=\"mono\">{}</span>", user_id))
        .build())?;
    append_child(&card, &status_banner(DOCTOR_STATUS_ID)?)?;

    let (list_section, list_body) = section("Requests Associated With You")?;
    set_text_content(&list_body, "Loading requests...");
    append_child(&card, &list_section)?;

    load_requests(state.clone(), list_body);

    Ok(container)
}

fn load_requests(state: AppState, body: Element) {
    spawn_local(async move {
        let Some(token) = state.session.token() else {
            set_text_content(&body, "Authentication token missing. Please log in.");
            return;
        };
        let api = ApiClient::new();
        match api.fetch_my_requests(&token).await {
            Ok(requests) => {
                if let Err(e) = fill_table(&body, &requests) {
                    log::error!("❌ Error rendering doctor requests: {:?}", e);
                }
            }
            Err(e) => {
                if e.is_auth() {
                    handle_action_error(&state, &e, DOCTOR_STATUS_ID);
                } else {
                    set_text_content(&body, &format!("Error: {}", e));
                }
            }
        }
    });
}

fn fill_table(body: &Element, requests: &[BloodRequest]) -> Result<(), JsValue> {
    set_inner_html(body, "");
    if requests.is_empty() {
        set_text_content(body, "No requests are associated with you yet.");
        return Ok(());
    }
    let (table, tbody) = table_with_headers(&[
        "Request ID", "Hospital", "Blood Type", "Quantity", "Urgency", "Status",
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
        append_child(&row, &td(&format!("{} ({})", req.blood_group, req.component_type))?)?;
        append_child(&row, &td(&req.quantity.to_string())?)?;
        append_child(&row, &td(req.urgency.as_str())?)?;
        let status_cell = ElementBuilder::new("td")?.build();
        append_child(&status_cell, &status_badge(req.status.as_str())?)?;
        append_child(&row, &status_cell)?;
        append_child(&tbody, &row)?;
    }
    append_child(body, &table)?;
    Ok(())
}
