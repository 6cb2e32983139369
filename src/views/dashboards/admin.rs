// ============================================================================
// ADMIN DASHBOARD - Inventory, banks, units, requests, appointments
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::{append_child, on_change, on_click, on_input, on_submit, set_inner_html, set_text_content, target_checked, target_value, ElementBuilder};
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::blood_bank::NewBloodBank;
use crate::models::blood_unit::{BloodGroup, BloodUnit, ComponentType, InventorySummary, NewBloodUnit};
use crate::models::profile::Address;
use crate::models::request::{BloodRequest, RequestStatus};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::dashboards::handle_action_error;
use crate::views::widgets::{dashboard_container, flash_status, labeled_input, labeled_select, section, short_id, status_badge, status_banner, table_with_headers, td};

const ADMIN_STATUS_ID: &str = "admin-status";
const ADD_UNIT_STATUS_ID: &str = "admin-add-unit-status";
const ADD_BANK_STATUS_ID: &str = "admin-add-bank-status";

pub fn render_admin_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let (container, card) = dashboard_container("Admin Dashboard")?;

    let user_id = state.session.get().map(|s| s.user.id).unwrap_or_default();
    append_child(&card, &ElementBuilder::new("p")?
        .class("dashboard-welcome")
        .html(&format!("Welcome, Admin! Your User ID: <span class=\"mono\">{}</span>", user_id))
        .build())?;
    append_child(&card, &ElementBuilder::new("p")?
        .text("Full control over user management, system configuration, and comprehensive reporting.")
        .build())?;
    append_child(&card, &status_banner(ADMIN_STATUS_ID)?)?;

    let (analytics_section, analytics_body) = section("Analytics & Reports")?;
    set_text_content(&analytics_body, "Loading admin data...");
    append_child(&card, &analytics_section)?;

    let (add_bank_section, add_bank_body) = section("Add Blood Bank")?;
    append_child(&card, &add_bank_section)?;

    let (add_unit_section, add_unit_body) = section("Add Blood Unit")?;
    append_child(&card, &add_unit_section)?;

    let (units_section, units_body) = section("All Blood Units")?;
    append_child(&card, &units_section)?;

    let (requests_section, requests_body) = section("All Blood Requests")?;
    append_child(&card, &requests_section)?;

    let (appointments_section, appointments_body) = section("All Appointments")?;
    append_child(&card, &appointments_section)?;

    let screen = AdminScreen {
        state: state.clone(),
        container: container.clone(),
        analytics_body,
        add_bank_body,
        add_unit_body,
        units_body,
        requests_body,
        appointments_body,
        banks: Rc::new(RefCell::new(Vec::new())),
        units: Rc::new(RefCell::new(Vec::new())),
    };
    screen.load();

    Ok(container)
}

#[derive(Clone)]
struct AdminScreen {
    state: AppState,
    container: Element,
    analytics_body: Element,
    add_bank_body: Element,
    add_unit_body: Element,
    units_body: Element,
    requests_body: Element,
    appointments_body: Element,
    banks: Rc<RefCell<Vec<crate::models::blood_bank::BloodBank>>>,
    units: Rc<RefCell<Vec<BloodUnit>>>,
}

impl AdminScreen {
    /// Fetch every dataset wholesale and repaint all sections.
    fn load(&self) {
        let this = self.clone();
        spawn_local(async move {
            let Some(token) = this.state.session.token() else {
                set_text_content(&this.analytics_body, "Authentication token missing. Please log in.");
                return;
            };
            let api = ApiClient::new();

            let summary = match api.fetch_inventory_summary().await {
                Ok(summary) => summary,
                Err(e) => {
                    set_text_content(&this.analytics_body, &format!("Error: {}", e));
                    Vec::new()
                }
            };

            match api.fetch_blood_units(&token).await {
                Ok(units) => *this.units.borrow_mut() = units,
                Err(e) => {
                    if e.is_auth() {
                        handle_action_error(&this.state, &e, ADMIN_STATUS_ID);
                        return;
                    }
                    set_text_content(&this.units_body, &format!("Error: {}", e));
                }
            }

            match api.fetch_blood_banks().await {
                Ok(banks) => *this.banks.borrow_mut() = banks,
                Err(e) => log::warn!("⚠️ Could not fetch blood banks: {}", e),
            }

            let requests = match api.fetch_all_requests(&token).await {
                Ok(requests) => requests,
                Err(e) => {
                    set_text_content(&this.requests_body, &format!("Error: {}", e));
                    Vec::new()
                }
            };

            let appointments = match api.fetch_all_appointments(&token).await {
                Ok(appointments) => appointments,
                Err(e) => {
                    set_text_content(&this.appointments_body, &format!("Error: {}", e));
                    Vec::new()
                }
            };

            if let Err(e) = this.fill_analytics(&summary, &requests) {
                log::error!("❌ Error rendering analytics: {:?}", e);
            }
            if let Err(e) = this.fill_add_bank_form() {
                log::error!("❌ Error rendering bank form: {:?}", e);
            }
            if let Err(e) = this.fill_add_unit_form() {
                log::error!("❌ Error rendering unit form: {:?}", e);
            }
            if let Err(e) = this.fill_units_table() {
                log::error!("❌ Error rendering units: {:?}", e);
            }
            if let Err(e) = this.fill_requests_table(&requests) {
                log::error!("❌ Error rendering requests: {:?}", e);
            }
            if let Err(e) = this.fill_appointments_table(&appointments) {
                log::error!("❌ Error rendering appointments: {:?}", e);
            }
        });
    }

    // ------------------------------------------------------------------
    // Analytics
    // ------------------------------------------------------------------

    fn fill_analytics(
        &self,
        summary: &[InventorySummary],
        requests: &[BloodRequest],
    ) -> Result<(), JsValue> {
        set_inner_html(&self.analytics_body, "");
        let grid = ElementBuilder::new("div")?.class("analytics-grid").build();

        // Blood group distribution, as bars scaled to the largest count.
        let chart_card = ElementBuilder::new("div")?.class("chart-card").build();
        append_child(&chart_card, &ElementBuilder::new("h4")?
            .text("Blood Group Distribution (Available Units)")
            .build())?;
        if summary.is_empty() {
            append_child(&chart_card, &ElementBuilder::new("p")?
                .text("No inventory data available.")
                .build())?;
        } else {
            let config = AppConfig::default();
            let max_height = config.ui_config.chart_bar_max_height_px;
            let max_count = summary.iter().map(|s| s.count).max().unwrap_or(1).max(1);
            let chart = ElementBuilder::new("div")?.class("bar-chart").build();
            for row in summary {
                let column = ElementBuilder::new("div")?.class("bar-column").build();
                let height = (row.count * max_height) / max_count;
                let bar = ElementBuilder::new("div")?
                    .class("bar")
                    .attr("style", &format!("height: {}px", height.max(2)))?
                    .attr("title", &format!("{}: {} units", row.blood_group, row.count))?
                    .build();
                append_child(&column, &ElementBuilder::new("span")?.class("bar-count").text(&row.count.to_string()).build())?;
                append_child(&column, &bar)?;
                append_child(&column, &ElementBuilder::new("span")?.class("bar-label").text(&row.blood_group).build())?;
                append_child(&chart, &column)?;
            }
            append_child(&chart_card, &chart)?;
        }
        append_child(&grid, &chart_card)?;

        // Request status overview, counted from the live request list.
        let status_card = ElementBuilder::new("div")?.class("chart-card").build();
        append_child(&status_card, &ElementBuilder::new("h4")?
            .text("Request Status Overview")
            .build())?;
        let statuses = [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Fulfilled,
            RequestStatus::Rejected,
            RequestStatus::Cancelled,
        ];
        let list = ElementBuilder::new("ul")?.class("status-list").build();
        for status in statuses {
            let count = requests.iter().filter(|r| r.status == status).count();
            let item = ElementBuilder::new("li")?.build();
            append_child(&item, &status_badge(status.as_str())?)?;
            append_child(&item, &ElementBuilder::new("span")?.text(&format!(" {}", count)).build())?;
            append_child(&list, &item)?;
        }
        append_child(&status_card, &list)?;
        append_child(&grid, &status_card)?;

        append_child(&self.analytics_body, &grid)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Add blood bank
    // ------------------------------------------------------------------

    fn fill_add_bank_form(&self) -> Result<(), JsValue> {
        set_inner_html(&self.add_bank_body, "");
        let form = ElementBuilder::new("form")?.build();
        let data = Rc::new(RefCell::new(NewBloodBank::default()));

        let (name_field, name_input) = labeled_input("Name", "text", "", "Blood Bank Name")?;
        {
            let data = data.clone();
            on_input(&name_input, move |v| data.borrow_mut().name = v)?;
        }
        append_child(&form, &name_field)?;

        let (email_field, email_input) = labeled_input("Contact Email", "email", "", "contact@bank.org")?;
        {
            let data = data.clone();
            on_input(&email_input, move |v| data.borrow_mut().contact_email = v)?;
        }
        append_child(&form, &email_field)?;

        let (phone_field, phone_input) = labeled_input("Contact Phone", "text", "", "")?;
        {
            let data = data.clone();
            on_input(&phone_input, move |v| data.borrow_mut().contact_phone = v)?;
        }
        append_child(&form, &phone_field)?;

        let address_box = ElementBuilder::new("div")?.class("address-box").build();
        append_child(&address_box, &ElementBuilder::new("h4")?.text("Address").build())?;
        type BankSetter = fn(&mut Address, String);
        let fields: [(&str, BankSetter); 5] = [
            ("Street", |a, v| a.street = v),
            ("City", |a, v| a.city = v),
            ("State", |a, v| a.state = v),
            ("Zip Code", |a, v| a.zip_code = v),
            ("Country", |a, v| a.country = v),
        ];
        for (label, setter) in fields {
            let (field, input) = labeled_input(label, "text", "", "")?;
            let data = data.clone();
            on_input(&input, move |v| setter(&mut data.borrow_mut().address, v))?;
            append_child(&address_box, &field)?;
        }
        append_child(&form, &address_box)?;

        let submit = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .attr("type", "submit")?
            .text("Add Blood Bank")
            .build();
        append_child(&form, &submit)?;
        append_child(&form, &status_banner(ADD_BANK_STATUS_ID)?)?;

        {
            let this = self.clone();
            on_submit(&form, move || {
                let bank = data.borrow().clone();
                if let Err(msg) = bank.validate() {
                    flash_status(ADD_BANK_STATUS_ID, &format!("Error: {}", msg));
                    return;
                }
                let this = this.clone();
                flash_status(ADD_BANK_STATUS_ID, "Adding blood bank...");
                spawn_local(async move {
                    let Some(token) = this.state.session.token() else { return };
                    let api = ApiClient::new();
                    match api.add_blood_bank(&token, &bank).await {
                        Ok(()) => {
                            flash_status(ADD_BANK_STATUS_ID, "Blood bank added successfully!");
                            this.load();
                        }
                        Err(e) => handle_action_error(&this.state, &e, ADD_BANK_STATUS_ID),
                    }
                });
            })?;
        }

        append_child(&self.add_bank_body, &form)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Add blood unit
    // ------------------------------------------------------------------

    fn fill_add_unit_form(&self) -> Result<(), JsValue> {
        set_inner_html(&self.add_unit_body, "");
        let banks = self.banks.borrow();

        let form = ElementBuilder::new("form")?.build();
        let data = Rc::new(RefCell::new(NewBloodUnit {
            blood_group: BloodGroup::APos.as_str().to_string(),
            component_type: ComponentType::WholeBlood.as_str().to_string(),
            blood_bank_id: banks.first().map(|b| b.id.clone()).unwrap_or_default(),
            ..NewBloodUnit::default()
        }));

        let (unit_field, unit_input) = labeled_input("Unit ID", "text", "", "e.g., BU-2024-001")?;
        {
            let data = data.clone();
            on_input(&unit_input, move |v| data.borrow_mut().unit_id = v)?;
        }
        append_child(&form, &unit_field)?;

        let groups: Vec<(String, String)> = BloodGroup::ALL
            .iter()
            .map(|g| (g.as_str().to_string(), g.as_str().to_string()))
            .collect();
        let (group_field, group_select) = labeled_select("Blood Group", &groups, BloodGroup::APos.as_str())?;
        {
            let data = data.clone();
            on_change(&group_select, move |e| {
                if let Some(v) = target_value(&e) {
                    data.borrow_mut().blood_group = v;
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
            let data = data.clone();
            on_change(&component_select, move |e| {
                if let Some(v) = target_value(&e) {
                    data.borrow_mut().component_type = v;
                }
            })?;
        }
        append_child(&form, &component_field)?;

        let (collection_field, collection_input) = labeled_input("Collection Date", "date", "", "")?;
        {
            let data = data.clone();
            on_input(&collection_input, move |v| data.borrow_mut().collection_date = v)?;
        }
        append_child(&form, &collection_field)?;

        let (expiry_field, expiry_input) = labeled_input("Expiry Date", "date", "", "")?;
        {
            let data = data.clone();
            on_input(&expiry_input, move |v| data.borrow_mut().expiry_date = v)?;
        }
        append_child(&form, &expiry_field)?;

        let bank_options: Vec<(String, String)> = if banks.is_empty() {
            vec![(String::new(), "No Blood Banks Available".to_string())]
        } else {
            banks.iter().map(|b| (b.id.clone(), b.name.clone())).collect()
        };
        let selected_bank = data.borrow().blood_bank_id.clone();
        let (bank_field, bank_select) = labeled_select("Blood Bank", &bank_options, &selected_bank)?;
        {
            let data = data.clone();
            on_change(&bank_select, move |e| {
                if let Some(v) = target_value(&e) {
                    data.borrow_mut().blood_bank_id = v;
                }
            })?;
        }
        append_child(&form, &bank_field)?;

        let (donor_field, donor_input) = labeled_input("Donor ID (Optional)", "text", "", "")?;
        {
            let data = data.clone();
            on_input(&donor_input, move |v| data.borrow_mut().donor_id = v)?;
        }
        append_child(&form, &donor_field)?;

        let submit = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .attr("type", "submit")?
            .text("Add Blood Unit")
            .build();
        append_child(&form, &submit)?;
        append_child(&form, &status_banner(ADD_UNIT_STATUS_ID)?)?;

        {
            let this = self.clone();
            on_submit(&form, move || {
                let unit = data.borrow().clone();
                // Date-order check runs before anything touches the network.
                if let Err(msg) = unit.validate() {
                    flash_status(ADD_UNIT_STATUS_ID, &format!("Error: {}", msg));
                    return;
                }
                let this = this.clone();
                flash_status(ADD_UNIT_STATUS_ID, "Adding unit...");
                spawn_local(async move {
                    let Some(token) = this.state.session.token() else { return };
                    let api = ApiClient::new();
                    match api.add_blood_unit(&token, &unit).await {
                        Ok(()) => {
                            flash_status(ADD_UNIT_STATUS_ID, "Blood unit added successfully!");
                            this.load();
                        }
                        Err(e) => handle_action_error(&this.state, &e, ADD_UNIT_STATUS_ID),
                    }
                });
            })?;
        }

        append_child(&self.add_unit_body, &form)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Blood units table
    // ------------------------------------------------------------------

    fn fill_units_table(&self) -> Result<(), JsValue> {
        set_inner_html(&self.units_body, "");
        let units = self.units.borrow();
        if units.is_empty() {
            set_text_content(&self.units_body, "No blood units in inventory.");
            return Ok(());
        }
        let (table, tbody) = table_with_headers(&[
            "Unit ID", "Blood Group", "Component", "Status", "Collected", "Expires",
        ])?;
        for unit in units.iter() {
            let row = ElementBuilder::new("tr")?.build();
            append_child(&row, &td(&unit.unit_id)?)?;
            append_child(&row, &td(unit.blood_group.as_str())?)?;
            append_child(&row, &td(unit.component_type.as_str())?)?;
            append_child(&row, &td(unit.status.as_deref().unwrap_or("Available"))?)?;
            append_child(&row, &td(&unit.collection_date)?)?;
            append_child(&row, &td(&unit.expiry_date)?)?;
            append_child(&tbody, &row)?;
        }
        append_child(&self.units_body, &table)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------

    fn fill_requests_table(&self, requests: &[BloodRequest]) -> Result<(), JsValue> {
        set_inner_html(&self.requests_body, "");
        if requests.is_empty() {
            set_text_content(&self.requests_body, "No blood requests found.");
            return Ok(());
        }
        let (table, tbody) = table_with_headers(&[
            "Request ID", "Hospital", "Blood Type", "Quantity", "Urgency", "Status", "Actions",
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

            let actions = ElementBuilder::new("td")?.class("action-cell").build();
            match req.status {
                RequestStatus::Pending => {
                    self.add_request_action(&actions, &req.id, "Approved", "Approve", "btn-small btn-info")?;
                    self.add_request_action(&actions, &req.id, "Rejected", "Reject", "btn-small btn-danger")?;
                    self.add_request_action(&actions, &req.id, "Cancelled", "Cancel", "btn-small btn-muted")?;
                }
                RequestStatus::Approved => {
                    let fulfill = ElementBuilder::new("button")?
                        .class("btn-small btn-ok")
                        .text("Fulfill")
                        .build();
                    let this = self.clone();
                    let req_modal = req.clone();
                    on_click(&fulfill, move |_| match this.build_fulfill_modal(&req_modal) {
                        Ok(modal) => {
                            let _ = this.container.append_child(&modal);
                        }
                        Err(e) => log::error!("❌ Error opening fulfill modal: {:?}", e),
                    })?;
                    append_child(&actions, &fulfill)?;
                    self.add_request_action(&actions, &req.id, "Cancelled", "Cancel", "btn-small btn-muted")?;
                }
                _ => {}
            }
            append_child(&row, &actions)?;
            append_child(&tbody, &row)?;
        }
        append_child(&self.requests_body, &table)?;
        Ok(())
    }

    fn add_request_action(
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
            let this = this.clone();
            let request_id = request_id.clone();
            flash_status(ADMIN_STATUS_ID, "Updating request status...");
            spawn_local(async move {
                let Some(token) = this.state.session.token() else { return };
                let api = ApiClient::new();
                match api.update_request_status(&token, &request_id, new_status).await {
                    Ok(()) => {
                        flash_status(ADMIN_STATUS_ID, &format!("Request status updated to {}!", new_status));
                        this.load();
                    }
                    Err(e) => handle_action_error(&this.state, &e, ADMIN_STATUS_ID),
                }
            });
        })?;
        append_child(cell, &button)
    }

    /// Fulfill modal with checkboxes over matching available units, instead
    /// of the staff screen's free-text id entry.
    fn build_fulfill_modal(&self, req: &BloodRequest) -> Result<Element, JsValue> {
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

        let selected: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let units = self.units.borrow();
        let matching: Vec<&BloodUnit> = units
            .iter()
            .filter(|u| {
                u.blood_group.as_str() == req.blood_group
                    && u.status.as_deref().unwrap_or("Available") == "Available"
            })
            .collect();

        if matching.is_empty() {
            append_child(&modal, &ElementBuilder::new("p")?
                .text("No matching available units in inventory.")
                .build())?;
        } else {
            let list = ElementBuilder::new("div")?.class("unit-picker").build();
            for unit in matching {
                let row = ElementBuilder::new("div")?.class("form-check").build();
                let checkbox = ElementBuilder::new("input")?.attr("type", "checkbox")?.build();
                let label = ElementBuilder::new("label")?
                    .class("form-check-label")
                    .text(&format!(
                        "{} - {} ({}), expires {}",
                        unit.unit_id,
                        unit.blood_group.as_str(),
                        unit.component_type.as_str(),
                        unit.expiry_date
                    ))
                    .build();
                let selected = selected.clone();
                let unit_id = unit.id.clone();
                on_change(&checkbox, move |e| {
                    let Some(checked) = target_checked(&e) else { return };
                    let mut selected = selected.borrow_mut();
                    if checked {
                        selected.push(unit_id.clone());
                    } else {
                        selected.retain(|id| id != &unit_id);
                    }
                })?;
                append_child(&row, &checkbox)?;
                append_child(&row, &label)?;
                append_child(&list, &row)?;
            }
            append_child(&modal, &list)?;
        }

        let confirm = ElementBuilder::new("button")?
            .class("btn btn-secondary btn-block")
            .text("Fulfill Request")
            .build();
        {
            let this = self.clone();
            let request_id = req.id.clone();
            let overlay_for_submit = overlay.clone();
            on_click(&confirm, move |_| {
                let ids = selected.borrow().clone();
                if ids.is_empty() {
                    flash_status(ADMIN_STATUS_ID, "Error: Please select a request and at least one unit.");
                    return;
                }
                overlay_for_submit.remove();
                let this = this.clone();
                let request_id = request_id.clone();
                flash_status(ADMIN_STATUS_ID, "Fulfilling request...");
                spawn_local(async move {
                    let Some(token) = this.state.session.token() else { return };
                    let api = ApiClient::new();
                    match api.fulfill_request(&token, &request_id, ids).await {
                        Ok(()) => {
                            flash_status(ADMIN_STATUS_ID, "Request fulfilled successfully!");
                            this.load();
                        }
                        Err(e) => handle_action_error(&this.state, &e, ADMIN_STATUS_ID),
                    }
                });
            })?;
        }
        append_child(&modal, &confirm)?;

        append_child(&overlay, &modal)?;
        Ok(overlay)
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    fn fill_appointments_table(&self, appointments: &[Appointment]) -> Result<(), JsValue> {
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
            flash_status(ADMIN_STATUS_ID, "Updating appointment status...");
            spawn_local(async move {
                let Some(token) = this.state.session.token() else { return };
                let api = ApiClient::new();
                match api.update_appointment_status(&token, &appointment_id, new_status).await {
                    Ok(()) => {
                        flash_status(ADMIN_STATUS_ID, &format!("Appointment status updated to {}!", new_status));
                        this.load();
                    }
                    Err(e) => handle_action_error(&this.state, &e, ADMIN_STATUS_ID),
                }
            });
        })?;
        append_child(cell, &button)
    }
}
