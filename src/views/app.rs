// ============================================================================
// APP VIEW - Navbar + dispatched page + footer + chatbot
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_body_overflow, ElementBuilder};
use crate::models::auth::Role;
use crate::routing::{dashboard_view, dispatch, View};
use crate::state::AppState;
use crate::views::about::render_about;
use crate::views::chatbot::render_chatbot;
use crate::views::contact::render_contact;
use crate::views::dashboards::admin::render_admin_dashboard;
use crate::views::dashboards::doctor::render_doctor_dashboard;
use crate::views::dashboards::donor::render_donor_dashboard;
use crate::views::dashboards::hospital::render_hospital_dashboard;
use crate::views::dashboards::staff::render_staff_dashboard;
use crate::views::dashboards::supervisor::render_supervisor_dashboard;
use crate::views::find_blood_banks::render_find_blood_banks;
use crate::views::gallery::render_gallery;
use crate::views::home::render_home;
use crate::views::login::render_login;

const NAV_LINKS: [(&str, View); 5] = [
    ("Home", View::Home),
    ("About Us", View::About),
    ("Gallery", View::Gallery),
    ("Contact Us", View::Contact),
    ("Find Blood Banks", View::FindBloodBanks),
];

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("app-root").build();

    append_child(&root, &render_navbar(state)?)?;
    if state.nav.is_menu_open() {
        append_child(&root, &render_mobile_menu(state)?)?;
    }
    // Body scroll stays locked exactly while the overlay is up.
    set_body_overflow(if state.nav.is_menu_open() { "hidden" } else { "" });

    let main = ElementBuilder::new("main")?.class("app-main").build();
    append_child(&main, &render_page(state)?)?;
    append_child(&root, &main)?;

    append_child(&root, &render_footer()?)?;
    append_child(&root, &render_chatbot()?)?;

    Ok(root)
}

/// The view dispatcher: what the user asked for, gated by the auth state.
fn render_page(state: &AppState) -> Result<Element, JsValue> {
    let session = state.session.get();
    let resolved = dispatch(state.nav.current_view(), session.as_ref());
    match resolved {
        View::Home => render_home(state),
        View::About => render_about(),
        View::Contact => render_contact(),
        View::Gallery => render_gallery(),
        View::Login => render_login(state),
        View::FindBloodBanks => render_find_blood_banks(),
        View::Dashboard(role) => render_dashboard(state, role),
        View::UnknownRole => render_unknown_role(),
    }
}

fn render_dashboard(state: &AppState, role: Role) -> Result<Element, JsValue> {
    match role {
        Role::Donor => render_donor_dashboard(state),
        Role::Hospital => render_hospital_dashboard(state),
        Role::Doctor => render_doctor_dashboard(state),
        Role::BloodbankStaff => render_staff_dashboard(state),
        Role::Supervisor => render_supervisor_dashboard(state),
        Role::Admin => render_admin_dashboard(state),
        Role::Unknown => render_unknown_role(),
    }
}

fn render_unknown_role() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?
        .class("unknown-role")
        .text("Unknown User Role. Please contact support.")
        .build())
}

fn nav_item(state: &AppState, label: &str, target: View) -> Result<Element, JsValue> {
    let active = state.nav.current_view() == target;
    let item = ElementBuilder::new("button")?
        .class(if active { "nav-item active" } else { "nav-item" })
        .text(label)
        .build();
    let state = state.clone();
    on_click(&item, move |_| {
        state.navigate(target);
        crate::rerender_app();
    })?;
    Ok(item)
}

fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("navbar").build();
    let inner = ElementBuilder::new("div")?.class("navbar-inner").build();

    // Brand
    let brand = ElementBuilder::new("div")?.class("navbar-brand").build();
    append_child(&brand, &ElementBuilder::new("span")?.class("brand-icon").text("🩸").build())?;
    append_child(&brand, &ElementBuilder::new("span")?.class("brand-name").text("BloodLink").build())?;
    append_child(&inner, &brand)?;

    // Desktop links
    let links = ElementBuilder::new("div")?.class("navbar-links").build();
    for (label, target) in NAV_LINKS {
        append_child(&links, &nav_item(state, label, target)?)?;
    }
    append_auth_controls(state, &links)?;
    append_child(&inner, &links)?;

    // Mobile menu toggle
    let burger = ElementBuilder::new("button")?
        .class("navbar-burger")
        .text(if state.nav.is_menu_open() { "✕" } else { "☰" })
        .build();
    {
        let state = state.clone();
        on_click(&burger, move |_| {
            state.nav.set_menu_open(!state.nav.is_menu_open());
            crate::rerender_app();
        })?;
    }
    append_child(&inner, &burger)?;

    append_child(&nav, &inner)?;
    Ok(nav)
}

/// Dashboard link + logout, or the login button, depending on auth state.
fn append_auth_controls(state: &AppState, parent: &Element) -> Result<(), JsValue> {
    match state.session.get() {
        Some(session) => {
            let role = session.user.role;
            let label = format!("{} Dashboard", role.display_name());
            let item = ElementBuilder::new("button")?
                .class(if state.nav.current_view().is_dashboard() {
                    "nav-item active"
                } else {
                    "nav-item"
                })
                .text(&label)
                .build();
            {
                let state = state.clone();
                on_click(&item, move |_| {
                    state.navigate(dashboard_view(role));
                    crate::rerender_app();
                })?;
            }
            append_child(parent, &item)?;

            let logout = ElementBuilder::new("button")?
                .class("btn btn-muted")
                .text("Logout")
                .build();
            {
                let state = state.clone();
                on_click(&logout, move |_| {
                    state.logout();
                    crate::rerender_app();
                })?;
            }
            append_child(parent, &logout)?;
        }
        None => {
            let login = ElementBuilder::new("button")?
                .class("btn btn-primary")
                .text("Login / Register")
                .build();
            {
                let state = state.clone();
                on_click(&login, move |_| {
                    state.navigate(View::Login);
                    crate::rerender_app();
                })?;
            }
            append_child(parent, &login)?;
        }
    }
    Ok(())
}

fn render_mobile_menu(state: &AppState) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?.class("mobile-menu").build();
    for (label, target) in NAV_LINKS {
        append_child(&overlay, &nav_item(state, label, target)?)?;
    }
    append_auth_controls(state, &overlay)?;
    Ok(overlay)
}

fn render_footer() -> Result<Element, JsValue> {
    let footer = ElementBuilder::new("footer")?.class("app-footer").build();
    let links = ElementBuilder::new("div")?.class("footer-links").build();
    for label in ["Privacy Policy", "Terms of Service", "Sitemap"] {
        append_child(&links, &ElementBuilder::new("a")?.attr("href", "#")?.text(label).build())?;
    }
    append_child(&footer, &links)?;
    append_child(&footer, &ElementBuilder::new("p")?
        .text("© 2025 BloodLink. All rights reserved.")
        .build())?;
    Ok(footer)
}
