// ============================================================================
// LOGIN VIEW - Login / register toggle
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_input, on_submit, set_inner_html, target_value, ElementBuilder};
use crate::models::auth::{LoginRequest, RegisterRequest, Role};
use crate::models::profile::Address;
use crate::services::ApiClient;
use crate::session::decode_claims;
use crate::state::AppState;
use crate::views::widgets::{flash_status, labeled_input, labeled_select, status_banner};

const LOGIN_STATUS_ID: &str = "login-status";

#[derive(Default, Clone)]
struct AuthForm {
    email: String,
    password: String,
    confirm_password: String,
    role: String,
    first_name: String,
    last_name: String,
    contact_number: String,
    street: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
}

/// Registration gate: runs before anything touches the network.
fn validate_registration(password: &str, confirm_password: &str) -> Result<(), String> {
    if password != confirm_password {
        return Err("Error: Passwords do not match!".to_string());
    }
    Ok(())
}

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let card = ElementBuilder::new("div")?.class("login-card").build();
    append_child(&screen, &card)?;

    let is_register = Rc::new(RefCell::new(false));
    build_auth_card(state, &card, &is_register)?;
    Ok(screen)
}

fn build_auth_card(
    state: &AppState,
    card: &Element,
    is_register: &Rc<RefCell<bool>>,
) -> Result<(), JsValue> {
    set_inner_html(card, "");
    let registering = *is_register.borrow();

    let title = ElementBuilder::new("h2")?
        .class("login-title")
        .text(if registering { "Register" } else { "Login" })
        .build();
    append_child(card, &title)?;

    let form = ElementBuilder::new("form")?.class("login-form").build();
    let data = Rc::new(RefCell::new(AuthForm {
        role: Role::Donor.as_str().to_string(),
        ..AuthForm::default()
    }));

    let (email_field, email_input) = labeled_input("Email", "email", "", "Your Email")?;
    {
        let data = data.clone();
        on_input(&email_input, move |v| data.borrow_mut().email = v)?;
    }
    append_child(&form, &email_field)?;

    let (password_field, password_input) = labeled_input("Password", "password", "", "Your Password")?;
    {
        let data = data.clone();
        on_input(&password_input, move |v| data.borrow_mut().password = v)?;
    }
    append_child(&form, &password_field)?;

    if registering {
        build_register_fields(&form, &data)?;
    }

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary btn-block")
        .attr("type", "submit")?
        .text(if registering { "Register" } else { "Login" })
        .build();
    append_child(&form, &submit)?;
    append_child(&form, &status_banner(LOGIN_STATUS_ID)?)?;

    {
        let state = state.clone();
        let data = data.clone();
        let is_register_flag = is_register.clone();
        on_submit(&form, move || {
            let form_data = data.borrow().clone();
            if form_data.email.is_empty() || form_data.password.is_empty() {
                flash_status(LOGIN_STATUS_ID, "Error: Please fill in email and password.");
                return;
            }
            if *is_register_flag.borrow() {
                submit_register(form_data);
            } else {
                submit_login(state.clone(), form_data);
            }
        })?;
    }

    append_child(card, &form)?;

    // Login <-> register toggle
    let toggle_row = ElementBuilder::new("p")?
        .class("login-toggle")
        .text(if registering {
            "Already have an account? "
        } else {
            "Don't have an account? "
        })
        .build();
    let toggle = ElementBuilder::new("button")?
        .class("link-button")
        .attr("type", "button")?
        .text(if registering { "Login here" } else { "Register here" })
        .build();
    {
        let state = state.clone();
        let card = card.clone();
        let is_register = is_register.clone();
        on_click(&toggle, move |_| {
            let flipped = !*is_register.borrow();
            *is_register.borrow_mut() = flipped;
            if let Err(e) = build_auth_card(&state, &card, &is_register) {
                log::error!("❌ Error rebuilding auth card: {:?}", e);
            }
        })?;
    }
    append_child(&toggle_row, &toggle)?;
    append_child(card, &toggle_row)?;

    Ok(())
}

fn build_register_fields(form: &Element, data: &Rc<RefCell<AuthForm>>) -> Result<(), JsValue> {
    let (confirm_field, confirm_input) =
        labeled_input("Confirm Password", "password", "", "Confirm Password")?;
    {
        let data = data.clone();
        on_input(&confirm_input, move |v| data.borrow_mut().confirm_password = v)?;
    }
    append_child(form, &confirm_field)?;

    // Staff and supervisor accounts are created by an admin, not here.
    let roles: Vec<(String, String)> = [Role::Donor, Role::Hospital, Role::Doctor]
        .iter()
        .map(|r| (r.as_str().to_string(), r.display_name()))
        .collect();
    let (role_field, role_select) = labeled_select("Register As", &roles, Role::Donor.as_str())?;
    {
        let data = data.clone();
        crate::dom::on_change(&role_select, move |e| {
            if let Some(value) = target_value(&e) {
                data.borrow_mut().role = value;
            }
        })?;
    }
    append_child(form, &role_field)?;

    let (first_field, first_input) = labeled_input("First Name", "text", "", "Your First Name")?;
    {
        let data = data.clone();
        on_input(&first_input, move |v| data.borrow_mut().first_name = v)?;
    }
    append_child(form, &first_field)?;

    let (last_field, last_input) = labeled_input("Last Name", "text", "", "Your Last Name")?;
    {
        let data = data.clone();
        on_input(&last_input, move |v| data.borrow_mut().last_name = v)?;
    }
    append_child(form, &last_field)?;

    let (contact_field, contact_input) =
        labeled_input("Contact Number", "text", "", "Your Contact Number")?;
    {
        let data = data.clone();
        on_input(&contact_input, move |v| data.borrow_mut().contact_number = v)?;
    }
    append_child(form, &contact_field)?;

    // Optional address block
    let address_box = ElementBuilder::new("div")?.class("address-box").build();
    append_child(&address_box, &ElementBuilder::new("h3")?.text("Address (Optional)").build())?;

    let (street_field, street_input) = labeled_input("Street", "text", "", "Street Address")?;
    {
        let data = data.clone();
        on_input(&street_input, move |v| data.borrow_mut().street = v)?;
    }
    append_child(&address_box, &street_field)?;

    let (city_field, city_input) = labeled_input("City", "text", "", "City")?;
    {
        let data = data.clone();
        on_input(&city_input, move |v| data.borrow_mut().city = v)?;
    }
    append_child(&address_box, &city_field)?;

    let (state_field, state_input) = labeled_input("State", "text", "", "State")?;
    {
        let data = data.clone();
        on_input(&state_input, move |v| data.borrow_mut().state = v)?;
    }
    append_child(&address_box, &state_field)?;

    let (zip_field, zip_input) = labeled_input("Zip Code", "text", "", "Zip Code")?;
    {
        let data = data.clone();
        on_input(&zip_input, move |v| data.borrow_mut().zip_code = v)?;
    }
    append_child(&address_box, &zip_field)?;

    let (country_field, country_input) = labeled_input("Country", "text", "", "Country")?;
    {
        let data = data.clone();
        on_input(&country_input, move |v| data.borrow_mut().country = v)?;
    }
    append_child(&address_box, &country_field)?;

    append_child(form, &address_box)?;
    Ok(())
}

fn submit_login(state: AppState, form: AuthForm) {
    flash_status(LOGIN_STATUS_ID, "Processing...");
    spawn_local(async move {
        let api = ApiClient::new();
        let request = LoginRequest {
            email: form.email,
            password: form.password,
        };
        match api.login(&request).await {
            Ok(response) => match response.token {
                Some(token) => match decode_claims(&token) {
                    Ok(user) => {
                        flash_status(LOGIN_STATUS_ID, "Login Successful! Redirecting...");
                        state.login(token, user);
                        crate::rerender_app();
                    }
                    Err(e) => {
                        log::error!("❌ Login token did not decode: {}", e);
                        flash_status(LOGIN_STATUS_ID, "Error: Received an invalid token.");
                    }
                },
                None => {
                    let msg = response.msg.unwrap_or_else(|| "Something went wrong.".to_string());
                    flash_status(LOGIN_STATUS_ID, &format!("Error: {}", msg));
                }
            },
            Err(e) => flash_status(LOGIN_STATUS_ID, &format!("Error: {}", e)),
        }
    });
}

fn submit_register(form: AuthForm) {
    if let Err(msg) = validate_registration(&form.password, &form.confirm_password) {
        flash_status(LOGIN_STATUS_ID, &msg);
        return;
    }
    flash_status(LOGIN_STATUS_ID, "Processing...");
    spawn_local(async move {
        let api = ApiClient::new();
        let request = RegisterRequest {
            email: form.email,
            password: form.password,
            role: Role::parse(&form.role),
            first_name: form.first_name,
            last_name: form.last_name,
            contact_number: form.contact_number,
            address: Address {
                street: form.street,
                city: form.city,
                state: form.state,
                zip_code: form.zip_code,
                country: form.country,
            },
        };
        match api.register(&request).await {
            Ok(_) => flash_status(LOGIN_STATUS_ID, "Registration Successful! Please log in."),
            Err(e) => flash_status(LOGIN_STATUS_ID, &format!("Error: {}", e)),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_block_submission() {
        let err = validate_registration("hunter2", "hunter3").unwrap_err();
        assert!(err.contains("do not match"));
    }

    #[test]
    fn matching_passwords_pass() {
        assert!(validate_registration("hunter2", "hunter2").is_ok());
    }
}
