// ============================================================================
// DONOR DASHBOARD - Profile, eligibility questionnaire, appointments
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_change, on_click, on_input, on_submit, set_inner_html, set_text_content, target_checked, target_value, ElementBuilder};
use crate::models::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::models::blood_bank::BloodBank;
use crate::models::blood_unit::BloodGroup;
use crate::models::profile::{EligibilityUpdate, MedicalHistory, ProfileUpdate, UserProfile};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::dashboards::handle_action_error;
use crate::views::widgets::{dashboard_container, flash_status, labeled_checkbox, labeled_input, labeled_select, labeled_textarea, section, status_badge, status_banner, table_with_headers, td};

const PROFILE_STATUS_ID: &str = "donor-profile-status";
const ELIGIBILITY_STATUS_ID: &str = "donor-eligibility-status";
const APPOINTMENT_STATUS_ID: &str = "donor-appointment-status";

pub fn render_donor_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let (container, card) = dashboard_container("Donor Dashboard")?;

    let user_id = state.session.get().map(|s| s.user.id).unwrap_or_default();
    append_child(&card, &ElementBuilder::new("p")?
        .class("dashboard-welcome")
        .html(&format!("Welcome, Donor! Your User ID: <span class=\"mono\">{}</span>", user_id))
        .build())?;

    let (profile_section, profile_body) = section("Your Basic Profile")?;
    set_text_content(&profile_body, "Loading profile...");
    append_child(&card, &profile_section)?;

    let (eligibility_section, eligibility_body) = section("Donor Eligibility Status")?;
    append_child(&card, &eligibility_section)?;

    let (appointments_section, appointments_body) = section("My Appointments")?;
    append_child(&card, &appointments_section)?;

    let screen = DonorScreen {
        state: state.clone(),
        profile_body,
        eligibility_body,
        appointments_body,
        profile: Rc::new(RefCell::new(None)),
        appointments: Rc::new(RefCell::new(Vec::new())),
        banks: Rc::new(RefCell::new(Vec::new())),
    };
    screen.load();

    Ok(container)
}

#[derive(Clone)]
struct DonorScreen {
    state: AppState,
    profile_body: Element,
    eligibility_body: Element,
    appointments_body: Element,
    profile: Rc<RefCell<Option<UserProfile>>>,
    appointments: Rc<RefCell<Vec<Appointment>>>,
    banks: Rc<RefCell<Vec<BloodBank>>>,
}

impl DonorScreen {
    /// Fetch everything the screen needs and paint the view modes.
    fn load(&self) {
        let this = self.clone();
        spawn_local(async move {
            let Some(token) = this.state.session.token() else {
                set_text_content(&this.profile_body, "No authentication token found. Please log in.");
                return;
            };
            let api = ApiClient::new();

            match api.fetch_profile(&token).await {
                Ok(profile) => *this.profile.borrow_mut() = Some(profile),
                Err(e) => {
                    if e.is_auth() {
                        handle_action_error(&this.state, &e, PROFILE_STATUS_ID);
                        return;
                    }
                    set_text_content(&this.profile_body, &format!("Error: {}", e));
                    return;
                }
            }

            match api.fetch_my_appointments(&token).await {
                Ok(appointments) => *this.appointments.borrow_mut() = appointments,
                Err(e) => {
                    set_text_content(&this.appointments_body, &format!("Error: {}", e));
                }
            }

            match api.fetch_blood_banks().await {
                Ok(banks) => *this.banks.borrow_mut() = banks,
                Err(e) => log::warn!("⚠️ Could not fetch blood banks: {}", e),
            }

            if let Err(e) = this.show_profile_view() {
                log::error!("❌ Error rendering profile: {:?}", e);
            }
            if let Err(e) = this.show_eligibility_view() {
                log::error!("❌ Error rendering eligibility: {:?}", e);
            }
            if let Err(e) = this.show_appointments() {
                log::error!("❌ Error rendering appointments: {:?}", e);
            }
        });
    }

    // ------------------------------------------------------------------
    // Basic profile
    // ------------------------------------------------------------------

    fn show_profile_view(&self) -> Result<(), JsValue> {
        set_inner_html(&self.profile_body, "");
        let profile = self.profile.borrow();
        let Some(profile) = profile.as_ref() else {
            set_text_content(&self.profile_body, "No profile data found.");
            return Ok(());
        };

        let details = ElementBuilder::new("div")?.class("profile-details").build();
        let rows = [
            ("Email:", profile.email.clone()),
            ("Role:", profile.role.as_str().to_string()),
            ("Name:", format!("{} {}", profile.first_name, profile.last_name)),
            ("Contact:", or_na(&profile.contact_number)),
            ("Address:", format!(
                "{}, {}, {}, {}, {}",
                profile.address.street,
                profile.address.city,
                profile.address.state,
                profile.address.zip_code,
                or_na(&profile.address.country),
            )),
        ];
        for (label, value) in rows {
            let p = ElementBuilder::new("p")?
                .html(&format!("<strong>{}</strong> {}", label, value))
                .build();
            append_child(&details, &p)?;
        }

        let edit = ElementBuilder::new("button")?
            .class("btn btn-info")
            .text("Edit Profile")
            .build();
        {
            let this = self.clone();
            on_click(&edit, move |_| {
                if let Err(e) = this.show_profile_edit() {
                    log::error!("❌ Error opening profile edit: {:?}", e);
                }
            })?;
        }
        append_child(&details, &edit)?;
        append_child(&self.profile_body, &details)?;
        Ok(())
    }

    fn show_profile_edit(&self) -> Result<(), JsValue> {
        set_inner_html(&self.profile_body, "");
        let snapshot = self.profile.borrow().clone().unwrap_or_else(empty_profile);

        let form = ElementBuilder::new("form")?.build();
        let data = Rc::new(RefCell::new(ProfileUpdate {
            first_name: snapshot.first_name.clone(),
            last_name: snapshot.last_name.clone(),
            contact_number: snapshot.contact_number.clone(),
            address: snapshot.address.clone(),
        }));

        let (first_field, first_input) = labeled_input("First Name", "text", &snapshot.first_name, "")?;
        {
            let data = data.clone();
            on_input(&first_input, move |v| data.borrow_mut().first_name = v)?;
        }
        append_child(&form, &first_field)?;

        let (last_field, last_input) = labeled_input("Last Name", "text", &snapshot.last_name, "")?;
        {
            let data = data.clone();
            on_input(&last_input, move |v| data.borrow_mut().last_name = v)?;
        }
        append_child(&form, &last_field)?;

        let (contact_field, contact_input) =
            labeled_input("Contact Number", "text", &snapshot.contact_number, "")?;
        {
            let data = data.clone();
            on_input(&contact_input, move |v| data.borrow_mut().contact_number = v)?;
        }
        append_child(&form, &contact_field)?;

        let address_box = ElementBuilder::new("div")?.class("address-box").build();
        append_child(&address_box, &ElementBuilder::new("h4")?.text("Address").build())?;
        for (label, value, setter) in address_fields(&snapshot) {
            let (field, input) = labeled_input(label, "text", &value, "")?;
            let data = data.clone();
            on_input(&input, move |v| setter(&mut data.borrow_mut(), v))?;
            append_child(&address_box, &field)?;
        }
        append_child(&form, &address_box)?;

        let buttons = ElementBuilder::new("div")?.class("button-row").build();
        let save = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .attr("type", "submit")?
            .text("Save Changes")
            .build();
        let cancel = ElementBuilder::new("button")?
            .class("btn btn-muted")
            .attr("type", "button")?
            .text("Cancel")
            .build();
        append_child(&buttons, &save)?;
        append_child(&buttons, &cancel)?;
        append_child(&form, &buttons)?;
        append_child(&form, &status_banner(PROFILE_STATUS_ID)?)?;

        {
            let this = self.clone();
            on_click(&cancel, move |_| {
                let _ = this.show_profile_view();
            })?;
        }
        {
            let this = self.clone();
            on_submit(&form, move || {
                let update = data.borrow().clone();
                let this = this.clone();
                flash_status(PROFILE_STATUS_ID, "Updating profile...");
                spawn_local(async move {
                    let Some(token) = this.state.session.token() else { return };
                    let api = ApiClient::new();
                    match api.update_profile(&token, &update).await {
                        Ok(response) => {
                            *this.profile.borrow_mut() = Some(response.user);
                            flash_status(PROFILE_STATUS_ID, "Profile updated successfully!");
                            let _ = this.show_profile_view();
                        }
                        Err(e) => handle_action_error(&this.state, &e, PROFILE_STATUS_ID),
                    }
                });
            })?;
        }

        append_child(&self.profile_body, &form)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Eligibility
    // ------------------------------------------------------------------

    fn show_eligibility_view(&self) -> Result<(), JsValue> {
        set_inner_html(&self.eligibility_body, "");
        let profile = self.profile.borrow();
        let Some(profile) = profile.as_ref() else { return Ok(()) };

        let details = ElementBuilder::new("div")?.class("profile-details").build();
        append_child(&details, &ElementBuilder::new("p")?
            .html(&format!("<strong>Blood Type:</strong> {}", profile.blood_type.as_deref().unwrap_or("Not Set")))
            .build())?;
        append_child(&details, &ElementBuilder::new("p")?
            .html(&format!(
                "<strong>Last Donation Date:</strong> {}",
                profile.last_donation_date.as_deref().unwrap_or("Never")
            ))
            .build())?;

        let eligibility = profile.eligibility_status.as_deref().unwrap_or("Unknown");
        let row = ElementBuilder::new("p")?.html("<strong>Eligibility:</strong> ").build();
        append_child(&row, &status_badge_for_eligibility(eligibility)?)?;
        append_child(&details, &row)?;

        if eligibility == "Deferred" {
            if let Some(history) = &profile.medical_history {
                if !history.notes.is_empty() {
                    append_child(&details, &ElementBuilder::new("p")?
                        .class("deferral-reason")
                        .text(&format!("Reason for deferral: {}", history.notes))
                        .build())?;
                }
            }
        }

        let open = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .text(if eligibility == "Unknown" {
                "Complete Eligibility Questionnaire"
            } else {
                "Update Eligibility"
            })
            .build();
        {
            let this = self.clone();
            on_click(&open, move |_| {
                if let Err(e) = this.show_eligibility_form() {
                    log::error!("❌ Error opening eligibility form: {:?}", e);
                }
            })?;
        }
        append_child(&details, &open)?;
        append_child(&self.eligibility_body, &details)?;
        Ok(())
    }

    fn show_eligibility_form(&self) -> Result<(), JsValue> {
        set_inner_html(&self.eligibility_body, "");
        let snapshot = self.profile.borrow().clone().unwrap_or_else(empty_profile);
        let history = snapshot.medical_history.clone().unwrap_or_default();

        let form = ElementBuilder::new("form")?.build();
        let data = Rc::new(RefCell::new(EligibilityUpdate {
            blood_type: snapshot.blood_type.clone().unwrap_or_default(),
            last_donation_date: snapshot.last_donation_date.clone().unwrap_or_default(),
            medical_history: history.clone(),
        }));

        let mut groups: Vec<(String, String)> = vec![(String::new(), "Select Blood Type".to_string())];
        groups.extend(
            BloodGroup::ALL
                .iter()
                .map(|g| (g.as_str().to_string(), g.as_str().to_string())),
        );
        let (type_field, type_select) =
            labeled_select("Your Blood Type", &groups, &data.borrow().blood_type)?;
        {
            let data = data.clone();
            on_change(&type_select, move |e| {
                if let Some(v) = target_value(&e) {
                    data.borrow_mut().blood_type = v;
                }
            })?;
        }
        append_child(&form, &type_field)?;

        let (date_field, date_input) = labeled_input(
            "Last Donation Date (Optional)",
            "date",
            &data.borrow().last_donation_date,
            "",
        )?;
        {
            let data = data.clone();
            on_input(&date_input, move |v| data.borrow_mut().last_donation_date = v)?;
        }
        append_child(&form, &date_field)?;

        let questions = ElementBuilder::new("div")?.class("address-box").build();
        append_child(&questions, &ElementBuilder::new("h4")?.text("Medical History Questions").build())?;

        let checkboxes: [(&str, bool, fn(&mut MedicalHistory, bool)); 4] = [
            ("Do you have any chronic illnesses?", history.has_chronic_illness, |h, v| h.has_chronic_illness = v),
            ("Have you traveled to a risk area recently?", history.recent_travel_to_risk_area, |h, v| h.recent_travel_to_risk_area = v),
            ("Have you had a major surgery recently?", history.recent_surgery, |h, v| h.recent_surgery = v),
            ("Are you currently on any medication?", history.on_medication, |h, v| h.on_medication = v),
        ];
        for (label, checked, setter) in checkboxes {
            let (row, checkbox) = labeled_checkbox(label, checked)?;
            let data = data.clone();
            on_change(&checkbox, move |e| {
                if let Some(checked) = target_checked(&e) {
                    setter(&mut data.borrow_mut().medical_history, checked);
                }
            })?;
            append_child(&questions, &row)?;
        }

        let (notes_field, notes_input) =
            labeled_textarea("Additional Notes (e.g., reason for deferral)", 2, "")?;
        {
            let data = data.clone();
            on_input(&notes_input, move |v| data.borrow_mut().medical_history.notes = v)?;
        }
        append_child(&questions, &notes_field)?;
        append_child(&form, &questions)?;

        let buttons = ElementBuilder::new("div")?.class("button-row").build();
        let save = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .attr("type", "submit")?
            .text("Save Eligibility")
            .build();
        let cancel = ElementBuilder::new("button")?
            .class("btn btn-muted")
            .attr("type", "button")?
            .text("Cancel")
            .build();
        append_child(&buttons, &save)?;
        append_child(&buttons, &cancel)?;
        append_child(&form, &buttons)?;
        append_child(&form, &status_banner(ELIGIBILITY_STATUS_ID)?)?;

        {
            let this = self.clone();
            on_click(&cancel, move |_| {
                let _ = this.show_eligibility_view();
            })?;
        }
        {
            let this = self.clone();
            on_submit(&form, move || {
                let update = data.borrow().clone();
                if update.blood_type.is_empty() {
                    flash_status(ELIGIBILITY_STATUS_ID, "Error: Please select your blood type.");
                    return;
                }
                let this = this.clone();
                flash_status(ELIGIBILITY_STATUS_ID, "Submitting eligibility...");
                spawn_local(async move {
                    let Some(token) = this.state.session.token() else { return };
                    let api = ApiClient::new();
                    match api.update_eligibility(&token, &update).await {
                        Ok(response) => {
                            *this.profile.borrow_mut() = Some(response.user);
                            flash_status(ELIGIBILITY_STATUS_ID, "Eligibility submitted successfully!");
                            let _ = this.show_eligibility_view();
                        }
                        Err(e) => handle_action_error(&this.state, &e, ELIGIBILITY_STATUS_ID),
                    }
                });
            })?;
        }

        append_child(&self.eligibility_body, &form)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------

    fn show_appointments(&self) -> Result<(), JsValue> {
        set_inner_html(&self.appointments_body, "");
        append_child(&self.appointments_body, &status_banner(APPOINTMENT_STATUS_ID)?)?;

        let book = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .text("Book New Appointment")
            .build();
        {
            let this = self.clone();
            on_click(&book, move |_| {
                if let Err(e) = this.show_appointment_form() {
                    log::error!("❌ Error opening appointment form: {:?}", e);
                }
            })?;
        }
        append_child(&self.appointments_body, &book)?;

        let appointments = self.appointments.borrow();
        if appointments.is_empty() {
            append_child(&self.appointments_body, &ElementBuilder::new("p")?
                .text("No appointments booked yet.")
                .build())?;
            return Ok(());
        }

        let (table, tbody) = table_with_headers(&["Date", "Blood Bank", "Blood Group", "Status", "Actions"])?;
        for app in appointments.iter() {
            let row = ElementBuilder::new("tr")?.build();
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
                let cancel = ElementBuilder::new("button")?
                    .class("btn-small btn-danger")
                    .text("Cancel")
                    .build();
                let this = self.clone();
                let appointment_id = app.id.clone();
                on_click(&cancel, move |_| {
                    this.cancel_appointment(appointment_id.clone());
                })?;
                append_child(&actions, &cancel)?;
            }
            append_child(&row, &actions)?;
            append_child(&tbody, &row)?;
        }
        append_child(&self.appointments_body, &table)?;
        Ok(())
    }

    fn show_appointment_form(&self) -> Result<(), JsValue> {
        set_inner_html(&self.appointments_body, "");
        append_child(&self.appointments_body, &status_banner(APPOINTMENT_STATUS_ID)?)?;

        let banks = self.banks.borrow();
        let profile_blood_type = self
            .profile
            .borrow()
            .as_ref()
            .and_then(|p| p.blood_type.clone())
            .unwrap_or_default();

        let form = ElementBuilder::new("form")?.build();
        let data = Rc::new(RefCell::new(NewAppointment {
            blood_bank: banks.first().map(|b| b.id.clone()).unwrap_or_default(),
            appointment_date: String::new(),
            blood_group: profile_blood_type.clone(),
            notes: String::new(),
        }));

        let bank_options: Vec<(String, String)> = if banks.is_empty() {
            vec![(String::new(), "No Blood Banks Available".to_string())]
        } else {
            banks
                .iter()
                .map(|b| (b.id.clone(), format!("{} ({})", b.name, b.address.city)))
                .collect()
        };
        let selected_bank = data.borrow().blood_bank.clone();
        let (bank_field, bank_select) = labeled_select("Select Blood Bank", &bank_options, &selected_bank)?;
        {
            let data = data.clone();
            on_change(&bank_select, move |e| {
                if let Some(v) = target_value(&e) {
                    data.borrow_mut().blood_bank = v;
                }
            })?;
        }
        append_child(&form, &bank_field)?;

        let (date_field, date_input) =
            labeled_input("Appointment Date & Time", "datetime-local", "", "")?;
        {
            let data = data.clone();
            on_input(&date_input, move |v| data.borrow_mut().appointment_date = v)?;
        }
        append_child(&form, &date_field)?;

        let mut groups: Vec<(String, String)> = vec![(String::new(), "Not Specified".to_string())];
        groups.extend(
            BloodGroup::ALL
                .iter()
                .map(|g| (g.as_str().to_string(), g.as_str().to_string())),
        );
        let (group_field, group_select) =
            labeled_select("Blood Group (Optional)", &groups, &profile_blood_type)?;
        {
            let data = data.clone();
            on_change(&group_select, move |e| {
                if let Some(v) = target_value(&e) {
                    data.borrow_mut().blood_group = v;
                }
            })?;
        }
        append_child(&form, &group_field)?;

        let (notes_field, notes_input) = labeled_textarea("Notes (Optional)", 2, "")?;
        {
            let data = data.clone();
            on_input(&notes_input, move |v| data.borrow_mut().notes = v)?;
        }
        append_child(&form, &notes_field)?;

        let buttons = ElementBuilder::new("div")?.class("button-row").build();
        let confirm = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .attr("type", "submit")?
            .text("Confirm Booking")
            .build();
        let cancel = ElementBuilder::new("button")?
            .class("btn btn-muted")
            .attr("type", "button")?
            .text("Cancel")
            .build();
        append_child(&buttons, &confirm)?;
        append_child(&buttons, &cancel)?;
        append_child(&form, &buttons)?;

        {
            let this = self.clone();
            on_click(&cancel, move |_| {
                let _ = this.show_appointments();
            })?;
        }
        {
            let this = self.clone();
            on_submit(&form, move || {
                let booking = data.borrow().clone();
                if let Err(msg) = booking.validate() {
                    flash_status(APPOINTMENT_STATUS_ID, &format!("Error: {}", msg));
                    return;
                }
                let this = this.clone();
                flash_status(APPOINTMENT_STATUS_ID, "Booking appointment...");
                spawn_local(async move {
                    let Some(token) = this.state.session.token() else { return };
                    let api = ApiClient::new();
                    match api.create_appointment(&token, &booking).await {
                        Ok(()) => {
                            flash_status(APPOINTMENT_STATUS_ID, "Appointment booked successfully!");
                            this.reload_appointments().await;
                            let _ = this.show_appointments();
                        }
                        Err(e) => handle_action_error(&this.state, &e, APPOINTMENT_STATUS_ID),
                    }
                });
            })?;
        }

        append_child(&self.appointments_body, &form)?;
        Ok(())
    }

    fn cancel_appointment(&self, appointment_id: String) {
        let this = self.clone();
        flash_status(APPOINTMENT_STATUS_ID, "Cancelling appointment...");
        spawn_local(async move {
            let Some(token) = this.state.session.token() else { return };
            let api = ApiClient::new();
            match api
                .update_appointment_status(&token, &appointment_id, "Cancelled")
                .await
            {
                Ok(()) => {
                    flash_status(APPOINTMENT_STATUS_ID, "Appointment cancelled successfully!");
                    this.reload_appointments().await;
                    let _ = this.show_appointments();
                }
                Err(e) => handle_action_error(&this.state, &e, APPOINTMENT_STATUS_ID),
            }
        });
    }

    async fn reload_appointments(&self) {
        let Some(token) = self.state.session.token() else { return };
        let api = ApiClient::new();
        match api.fetch_my_appointments(&token).await {
            Ok(appointments) => *self.appointments.borrow_mut() = appointments,
            Err(e) => log::error!("❌ Error refreshing appointments: {}", e),
        }
    }
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

fn status_badge_for_eligibility(status: &str) -> Result<Element, JsValue> {
    let class = match status {
        "Eligible" => "badge badge-ok",
        "Deferred" => "badge badge-danger",
        _ => "badge badge-pending",
    };
    Ok(ElementBuilder::new("span")?.class(class).text(status).build())
}

fn empty_profile() -> UserProfile {
    UserProfile {
        id: String::new(),
        email: String::new(),
        role: crate::models::auth::Role::Donor,
        first_name: String::new(),
        last_name: String::new(),
        contact_number: String::new(),
        address: Default::default(),
        blood_type: None,
        last_donation_date: None,
        medical_history: None,
        eligibility_status: None,
    }
}

type AddressSetter = fn(&mut ProfileUpdate, String);

fn address_fields(profile: &UserProfile) -> Vec<(&'static str, String, AddressSetter)> {
    vec![
        ("Street", profile.address.street.clone(), |d, v| d.address.street = v),
        ("City", profile.address.city.clone(), |d, v| d.address.city = v),
        ("State", profile.address.state.clone(), |d, v| d.address.state = v),
        ("Zip Code", profile.address.zip_code.clone(), |d, v| d.address.zip_code = v),
        ("Country", profile.address.country.clone(), |d, v| d.address.country = v),
    ]
}
