// ============================================================================
// HOSPITAL DASHBOARD - Create blood requests, track their status
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_change, on_input, on_submit, set_inner_html, set_text_content, target_value, ElementBuilder};
use crate::models::auth::Role;
use crate::models::blood_unit::{BloodGroup, ComponentType};
use crate::models::request::{BloodRequest, NewBloodRequest, Urgency};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::dashboards::handle_action_error;
use crate::views::widgets::{dashboard_container, flash_status, labeled_input, labeled_select, labeled_textarea, section, short_id, status_badge, status_banner, table_with_headers, td};

const HOSPITAL_STATUS_ID: &str = "hospital-status";

pub fn render_hospital_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let (container, card) = dashboard_container("Hospital Dashboard")?;

    let user_id = state.session.get().map(|s| s.user.id).unwrap_or_default();
    append_child(&card, &ElementBuilder::new("p")?
        .class("dashboard-welcome")
        .html(&format!("Welcome, Hospital! Your User ID: <span class=\"mono\">{}</span>", user_id))
        .build())?;
    append_child(&card, &status_banner(HOSPITAL_STATUS_ID)?)?;

    let (form_section, form_body) = section("Request Blood")?;
    let (list_section, list_body) = section("My Blood Requests")?;

    // Request form; a successful submit refetches the list below.
    let form = build_request_form(state, &list_body)?;
    append_child(&form_body, &form)?;
    append_child(&card, &form_section)?;

    // My requests
    set_text_content(&list_body, "Loading hospital data...");
    append_child(&card, &list_section)?;

    load_my_requests(state.clone(), list_body);

    Ok(container)
}

fn load_my_requests(state: AppState, body: Element) {
    spawn_local(async move {
        let Some(token) = state.session.token() else {
            set_text_content(&body, "Authentication token missing. Please log in.");
            return;
        };
        let api = ApiClient::new();
        match api.fetch_my_requests(&token).await {
            Ok(requests) => {
                if let Err(e) = fill_request_table(&body, &requests) {
                    log::error!("❌ Error rendering request table: {:?}", e);
                }
            }
            Err(e) => {
                if e.is_auth() {
                    handle_action_error(&state, &e, HOSPITAL_STATUS_ID);
                } else {
                    set_text_content(&body, &format!("Error: {}", e));
                }
            }
        }
    });
}

fn fill_request_table(body: &Element, requests: &[BloodRequest]) -> Result<(), JsValue> {
    set_inner_html(body, "");
    if requests.is_empty() {
        set_text_content(body, "No blood requests made yet.");
        return Ok(());
    }
    let (table, tbody) = table_with_headers(&[
        "Request ID", "Blood Type", "Quantity", "Urgency", "Status", "Request Date", "Doctor", "Assigned Units",
    ])?;
    for req in requests {
        let row = ElementBuilder::new("tr")?.build();
        append_child(&row, &td(&short_id(&req.id))?)?;
        append_child(&row, &td(&format!("{} ({})", req.blood_group, req.component_type))?)?;
        append_child(&row, &td(&req.quantity.to_string())?)?;
        append_child(&row, &td(req.urgency.as_str())?)?;
        let status_cell = ElementBuilder::new("td")?.build();
        append_child(&status_cell, &status_badge(req.status.as_str())?)?;
        append_child(&row, &status_cell)?;
        append_child(&row, &td(req.request_date.as_deref().unwrap_or("N/A"))?)?;
        let doctor = req
            .doctor
            .as_ref()
            .map(|d| format!("{} {}", d.first_name, d.last_name))
            .unwrap_or_else(|| "N/A".to_string());
        append_child(&row, &td(&doctor)?)?;
        let units = if req.assigned_units.is_empty() {
            "None".to_string()
        } else {
            req.assigned_units
                .iter()
                .map(|u| u.unit_id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        append_child(&row, &td(&units)?)?;
        append_child(&tbody, &row)?;
    }
    append_child(body, &table)?;
    Ok(())
}

fn build_request_form(state: &AppState, list_body: &Element) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?.build();

    let blood_group = Rc::new(RefCell::new(BloodGroup::APos.as_str().to_string()));
    let component = Rc::new(RefCell::new(ComponentType::WholeBlood.as_str().to_string()));
    let quantity = Rc::new(RefCell::new("1".to_string()));
    let urgency = Rc::new(RefCell::new(Urgency::Normal.as_str().to_string()));
    let doctor_id = Rc::new(RefCell::new(String::new()));
    let notes = Rc::new(RefCell::new(String::new()));

    let groups: Vec<(String, String)> = BloodGroup::ALL
        .iter()
        .map(|g| (g.as_str().to_string(), g.as_str().to_string()))
        .collect();
    let (group_field, group_select) = labeled_select("Blood Group", &groups, BloodGroup::APos.as_str())?;
    {
        let blood_group = blood_group.clone();
        on_change(&group_select, move |e| {
            if let Some(v) = target_value(&e) {
                *blood_group.borrow_mut() = v;
            }
        })?;
    }
    append_child(&form, &group_field)?;

    let components: Vec<(String, String)> = ComponentType::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), c.as_str().to_string()))
        .collect();
    let (component_field, component_select) =
        labeled_select("Component Type", &components, ComponentType::WholeBlood.as_str())?;
    {
        let component = component.clone();
        on_change(&component_select, move |e| {
            if let Some(v) = target_value(&e) {
                *component.borrow_mut() = v;
            }
        })?;
    }
    append_child(&form, &component_field)?;

    let (quantity_field, quantity_input) = labeled_input("Quantity (Units)", "number", "1", "")?;
    quantity_input.set_attribute("min", "1")?;
    {
        let quantity = quantity.clone();
        on_input(&quantity_input, move |v| *quantity.borrow_mut() = v)?;
    }
    append_child(&form, &quantity_field)?;

    let urgencies: Vec<(String, String)> = Urgency::ALL
        .iter()
        .map(|u| (u.as_str().to_string(), u.as_str().to_string()))
        .collect();
    let (urgency_field, urgency_select) = labeled_select("Urgency", &urgencies, Urgency::Normal.as_str())?;
    {
        let urgency = urgency.clone();
        on_change(&urgency_select, move |e| {
            if let Some(v) = target_value(&e) {
                *urgency.borrow_mut() = v;
            }
        })?;
    }
    append_child(&form, &urgency_field)?;

    // Doctor dropdown fills in asynchronously once the list arrives.
    let (doctor_field, doctor_select) =
        labeled_select("Associate Doctor (Optional)", &[(String::new(), "-- Select Doctor --".to_string())], "")?;
    {
        let doctor_id = doctor_id.clone();
        on_change(&doctor_select, move |e| {
            if let Some(v) = target_value(&e) {
                *doctor_id.borrow_mut() = v;
            }
        })?;
    }
    append_child(&form, &doctor_field)?;
    populate_doctor_options(state.clone(), doctor_select);

    let (notes_field, notes_input) = labeled_textarea("Notes (Optional)", 3, "")?;
    {
        let notes = notes.clone();
        on_input(&notes_input, move |v| *notes.borrow_mut() = v)?;
    }
    append_child(&form, &notes_field)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("Submit Request")
        .build();
    append_child(&form, &submit)?;

    {
        let state = state.clone();
        let list_body = list_body.clone();
        on_submit(&form, move || {
            let request = NewBloodRequest {
                blood_group: blood_group.borrow().clone(),
                component_type: component.borrow().clone(),
                quantity: quantity.borrow().parse().unwrap_or(0),
                urgency: match urgency.borrow().as_str() {
                    "Urgent" => Urgency::Urgent,
                    "Emergency" => Urgency::Emergency,
                    _ => Urgency::Normal,
                },
                notes: notes.borrow().clone(),
                doctor_id: doctor_id.borrow().clone(),
            };
            if let Err(msg) = request.validate() {
                flash_status(HOSPITAL_STATUS_ID, &format!("Error: {}", msg));
                return;
            }
            submit_request(state.clone(), request, list_body.clone());
        })?;
    }

    Ok(form)
}

fn populate_doctor_options(state: AppState, select: Element) {
    spawn_local(async move {
        let Some(token) = state.session.token() else { return };
        let api = ApiClient::new();
        match api.fetch_users_by_role(&token, Role::Doctor).await {
            Ok(doctors) => {
                for doc in doctors {
                    let label = format!("{} {} ({})", doc.first_name, doc.last_name, doc.email);
                    if let Ok(option) = ElementBuilder::new("option") {
                        let option = option.text(&label).build();
                        let _ = option.set_attribute("value", &doc.id);
                        let _ = select.append_child(&option);
                    }
                }
            }
            Err(e) => {
                // Optional dropdown; a failure just leaves it empty.
                log::warn!("⚠️ Could not fetch doctors list: {}", e);
            }
        }
    });
}

fn submit_request(state: AppState, request: NewBloodRequest, list_body: Element) {
    flash_status(HOSPITAL_STATUS_ID, "Creating request...");
    spawn_local(async move {
        let Some(token) = state.session.token() else {
            flash_status(HOSPITAL_STATUS_ID, "Error: Authentication token missing.");
            return;
        };
        let api = ApiClient::new();
        match api.create_request(&token, &request).await {
            Ok(()) => {
                flash_status(HOSPITAL_STATUS_ID, "Blood request created successfully!");
                load_my_requests(state, list_body);
            }
            Err(e) => handle_action_error(&state, &e, HOSPITAL_STATUS_ID),
        }
    });
}
